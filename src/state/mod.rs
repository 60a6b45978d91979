/// State management module
///
/// This module handles the application's non-widget state, including:
/// - Shared data structures and wire models (data.rs)
/// - Draft state for the admin forms (form.rs)
/// - The admin login gate (session.rs)
/// - Readiness aggregation for multi-source loads (readiness.rs)

pub mod data;
pub mod form;
pub mod readiness;
pub mod session;
