//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own screen content so route handlers can stay focused on
//! protocol translation.

pub mod registry;
