//! Screen delivery route.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Json;

use crate::schema::Screen;
use crate::services::registry::{self, ScreenError};

/// `GET /api/screen/:id` — resolve a screen identifier to its layout tree.
pub async fn get_screen(
    Path(screen_id): Path<String>,
) -> Result<Json<Screen>, (StatusCode, Json<serde_json::Value>)> {
    registry::lookup(&screen_id)
        .map(Json)
        .map_err(screen_error_to_response)
}

pub(crate) fn screen_error_to_response(err: ScreenError) -> (StatusCode, Json<serde_json::Value>) {
    match err {
        ScreenError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Screen not found" })),
        ),
    }
}

#[cfg(test)]
#[path = "screens_test.rs"]
mod tests;
