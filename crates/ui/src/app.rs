//! Main Application Component for Prism Console
//!
//! This module contains the root Dioxus component. It wires the shared
//! service bundle into context and renders the application shell around the
//! management page.

use dioxus::prelude::*;
use prism_core::Services;

use crate::pages::ManagementPage;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // One service bundle for the whole app; every page and handler clones
    // the same underlying stores out of context
    use_context_provider(Services::seeded);

    use_effect(|| {
        tracing::info!("Prism Console UI initialized");
    });

    rsx! {
        div {
            class: "app-shell",

            AppHeader {}

            main {
                class: "app-content",
                ManagementPage {}
            }
        }
    }
}

// ============================================================================
// Header
// ============================================================================

/// Top application bar with branding
#[component]
fn AppHeader() -> Element {
    rsx! {
        header {
            class: "app-header",

            span { class: "app-mark", "◆" }
            span { class: "app-name", "Prism Console" }
            span { class: "app-version", "v{crate::VERSION}" }
        }
    }
}
