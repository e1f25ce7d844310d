//! Screen registry — identifier to fixed layout tree.
//!
//! DESIGN
//! ======
//! A pure lookup table. Every screen is a literal tree rebuilt on each call,
//! so repeated lookups return value-equal trees and the registry is safe for
//! unlimited concurrent use. No state, no I/O, no logging: an unknown
//! identifier is a normal outcome, not a fault.

use crate::schema::{Action, Component, ComponentKind, Screen};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("screen not found: {0}")]
    NotFound(String),
}

/// Identifiers the registry answers to, in navigation order.
pub const KNOWN_IDS: [&str; 4] = ["home", "email_send", "pdf_upload", "templates"];

// =============================================================================
// LOOKUP
// =============================================================================

/// Resolve a screen identifier. Exact, case-sensitive match only.
///
/// # Errors
///
/// Returns `ScreenError::NotFound` when the identifier is not one of
/// `KNOWN_IDS`.
pub fn lookup(id: &str) -> Result<Screen, ScreenError> {
    match id {
        "home" => Ok(home_screen()),
        "email_send" => Ok(email_send_screen()),
        "pdf_upload" => Ok(pdf_upload_screen()),
        "templates" => Ok(templates_screen()),
        _ => Err(ScreenError::NotFound(id.to_owned())),
    }
}

// =============================================================================
// SCREENS
// =============================================================================

fn home_screen() -> Screen {
    Screen {
        id: "home".into(),
        title: "ColdMail Home".into(),
        body: Component::new(ComponentKind::Column)
            .with_child(
                Component::new(ComponentKind::Text)
                    .with_property("text", "Welcome to ColdMail")
                    .with_property("style", "headline"),
            )
            .with_child(nav_button("Send Email", "/email_send"))
            .with_child(nav_button("Upload PDF", "/pdf_upload"))
            .with_child(nav_button("Templates", "/templates")),
    }
}

fn email_send_screen() -> Screen {
    Screen {
        id: "email_send".into(),
        title: "Send Email".into(),
        body: Component::new(ComponentKind::Column)
            .with_child(Component::new(ComponentKind::Input).with_property("hint", "Recipient Email"))
            .with_child(Component::new(ComponentKind::Input).with_property("hint", "Subject"))
            .with_child(
                Component::new(ComponentKind::Input)
                    .with_property("hint", "Body")
                    .with_property("lines", 5),
            )
            .with_child(
                Component::new(ComponentKind::Button)
                    .with_property("label", "Send")
                    .with_action(Action::new("api_call").with_data("/api/send")),
            ),
    }
}

fn pdf_upload_screen() -> Screen {
    Screen {
        id: "pdf_upload".into(),
        title: "Upload PDF".into(),
        body: Component::new(ComponentKind::Column)
            .with_child(Component::new(ComponentKind::Text).with_property("text", "Select a PDF to upload"))
            .with_child(
                Component::new(ComponentKind::Button)
                    .with_property("label", "Choose File")
                    .with_action(Action::new("pick_file")),
            ),
    }
}

fn templates_screen() -> Screen {
    Screen {
        id: "templates".into(),
        title: "Email Templates".into(),
        body: Component::new(ComponentKind::List)
            .with_child(template_card("Welcome Email", "Hi [Name], welcome to..."))
            .with_child(template_card("Follow Up", "Just checking in...")),
    }
}

fn nav_button(label: &str, target: &str) -> Component {
    Component::new(ComponentKind::Button)
        .with_property("label", label)
        .with_action(Action::new("navigate").with_data(target))
}

fn template_card(title: &str, preview: &str) -> Component {
    Component::new(ComponentKind::Card)
        .with_child(
            Component::new(ComponentKind::Text)
                .with_property("text", title)
                .with_property("style", "subtitle"),
        )
        .with_child(Component::new(ComponentKind::Text).with_property("text", preview))
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
