//! # Button Component
//!
//! Themeable push button. Variants and sizes map straight onto the token
//! stylesheet's semantic classes.

use dioxus::prelude::*;

// ============================================================================
// Variants
// ============================================================================

/// Color variant of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

/// Size of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
        }
    }
}

// ============================================================================
// Component
// ============================================================================

/// Properties for Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Color variant
    #[props(default)]
    pub variant: ButtonVariant,

    /// Size
    #[props(default)]
    pub size: ButtonSize,

    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Click handler
    #[props(default)]
    pub onclick: EventHandler<MouseEvent>,

    /// Button content
    pub children: Element,
}

/// Push button component
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = build_button_class(props.variant, props.size, props.disabled);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |e| {
                if !props.disabled {
                    props.onclick.call(e);
                }
            },
            {props.children}
        }
    }
}

/// Build button class string
fn build_button_class(variant: ButtonVariant, size: ButtonSize, disabled: bool) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if disabled {
        class.push_str(" btn-disabled");
    }
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_button_class() {
        let class = build_button_class(ButtonVariant::Primary, ButtonSize::Md, false);
        assert_eq!(class, "btn btn-primary btn-md");
    }

    #[test]
    fn test_build_button_class_disabled() {
        let class = build_button_class(ButtonVariant::Danger, ButtonSize::Sm, true);
        assert_eq!(class, "btn btn-danger btn-sm btn-disabled");
    }
}
