//! # Input Components
//!
//! Form controls for the Prism design system:
//! - **TextInput**: single-line text input
//! - **TextArea**: multi-line text input
//! - **Select**: dropdown selection
//!
//! Each control doubles as its own form-field wrapper: it renders the label
//! (with a required marker), the control, and the field's error message, so
//! feature code binds one component per field.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the field is required
    #[props(default = false)]
    pub required: bool,

    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_control_class("input", props.error.is_some());

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether the field is required
    #[props(default = false)]
    pub required: bool,

    /// Number of visible rows
    #[props(default = 6)]
    pub rows: usize,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_control_class("textarea", props.error.is_some());

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether the field is required
    #[props(default = false)]
    pub required: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_control_class("select", props.error.is_some());

    rsx! {
        div {
            class: "field",

            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            select {
                class: "{select_class}",
                onchange: move |e| props.on_change.call(e.value()),

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build the class string for a form control
fn build_control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{} {}-error", base, base)
    } else {
        base.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
