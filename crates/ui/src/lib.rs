//! # Prism UI
//!
//! Dioxus Desktop UI for Prism Console.
//!
//! This crate provides the themeable design-system primitives and the
//! record management view built on top of them.
//!
//! ## Features
//!
//! - Design-system primitives: button, badge, alert, inputs, table, dialog
//! - Admin-style management page over posts and users
//! - Pure, render-free state and derivation layers for testability
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod schema;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export the core crate for convenience
pub use prism_core;

// Re-export main components
pub use app::App;
pub use pages::ManagementPage;
pub use schema::{Cell, Column, ColumnKey, RowAction, Stat, StatTone, StatusAction};
pub use state::{
    FormErrors, FormValues, MANAGEMENT, ManagementState, PostForm, PostFormErrors, UserForm,
    UserFormErrors,
};

// Re-export components
pub use components::{
    Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant,
    ConfirmDeleteDialog, Dialog, DialogSize, Select, SelectOption, StatusKind, Table, TableBody,
    TableCell, TableHead, TableHeader, TableRow, TextArea, TextInput,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Prism Console";

/// Application display title
pub const TITLE: &str = "Prism Console - Record Management";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Prism Console desktop application
///
/// This is the main entry point for the Dioxus desktop app.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     prism_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(720.0, 520.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Prism Console");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Prism Console"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".btn"));
        assert!(STYLES.contains(".badge"));
    }
}
