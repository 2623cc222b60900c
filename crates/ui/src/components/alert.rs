//! # Alert Component
//!
//! Dismissible feedback banner. The management page shows one of these after
//! every operation outcome (success or error).

use dioxus::prelude::*;

// ============================================================================
// Variants
// ============================================================================

/// Severity variant of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertVariant {
    pub fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "alert-info",
            AlertVariant::Success => "alert-success",
            AlertVariant::Error => "alert-error",
        }
    }
}

// ============================================================================
// Component
// ============================================================================

/// Properties for Alert component
#[derive(Props, Clone, PartialEq)]
pub struct AlertProps {
    /// Severity variant
    #[props(default)]
    pub variant: AlertVariant,

    /// Bold heading shown before the message
    #[props(default)]
    pub title: Option<String>,

    /// Close handler; the close control renders only when set
    #[props(default)]
    pub onclose: Option<EventHandler<()>>,

    /// Alert body
    pub children: Element,
}

/// Feedback banner component
#[component]
pub fn Alert(props: AlertProps) -> Element {
    let class = format!("alert {}", props.variant.class());

    rsx! {
        div {
            class: "{class}",
            role: "alert",

            div {
                class: "alert-content",

                if let Some(title) = &props.title {
                    span { class: "alert-title", "{title}" }
                }

                span { class: "alert-message", {props.children} }
            }

            if let Some(onclose) = props.onclose {
                button {
                    class: "alert-close",
                    r#type: "button",
                    onclick: move |_| onclose.call(()),
                    "×"
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
