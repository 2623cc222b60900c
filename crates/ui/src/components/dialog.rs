//! # Dialog Component
//!
//! Modal dialog with title bar, body, and footer slots, rendered over a
//! page-covering backdrop. Clicking the backdrop or the close control fires
//! `on_close`; the parent owns the open flag.

use dioxus::prelude::*;

// ============================================================================
// Variants
// ============================================================================

/// Width preset of the dialog panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogSize {
    #[default]
    Medium,
    Large,
}

impl DialogSize {
    pub fn class(&self) -> &'static str {
        match self {
            DialogSize::Medium => "dialog-md",
            DialogSize::Large => "dialog-lg",
        }
    }
}

// ============================================================================
// Component
// ============================================================================

/// Properties for Dialog component
#[derive(Props, Clone, PartialEq)]
pub struct DialogProps {
    /// Whether the dialog is shown
    pub open: bool,

    /// Title bar text
    pub title: String,

    /// Width preset
    #[props(default)]
    pub size: DialogSize,

    /// Close handler (backdrop click and close control)
    #[props(default)]
    pub on_close: EventHandler<()>,

    /// Dialog body
    pub children: Element,

    /// Footer slot, usually action buttons
    #[props(default)]
    pub footer: Option<Element>,
}

/// Modal dialog component
#[component]
pub fn Dialog(props: DialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let panel_class = format!("dialog {}", props.size.class());

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "{panel_class}",
                // Keep clicks inside the panel from reaching the backdrop
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "dialog-header",
                    h2 { class: "dialog-title", "{props.title}" }
                    button {
                        class: "dialog-close",
                        r#type: "button",
                        onclick: move |_| props.on_close.call(()),
                        "×"
                    }
                }

                div {
                    class: "dialog-body",
                    {props.children}
                }

                if let Some(footer) = &props.footer {
                    div {
                        class: "dialog-footer",
                        {footer}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(DialogSize::Medium.class(), "dialog-md");
        assert_eq!(DialogSize::Large.class(), "dialog-lg");
    }
}
