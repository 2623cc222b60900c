//! # Confirm Delete Dialog Component
//!
//! Confirmation step in front of every destructive delete. No service call
//! happens until the user explicitly confirms; cancelling changes nothing.

use dioxus::prelude::*;
use prism_core::EntityKind;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::dialog::Dialog;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// Identifier of the record pending deletion
    pub record_id: u64,

    /// Kind of the record, for the dialog copy
    pub kind: EntityKind,

    /// Called with the record id when the user confirms
    pub on_confirm: EventHandler<u64>,

    /// Called when the user cancels
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let message = confirm_message(props.kind, props.record_id);

    rsx! {
        Dialog {
            open: true,
            title: "Confirm deletion".to_string(),
            on_close: move |_| props.on_cancel.call(()),
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Md,
                    onclick: move |_| props.on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    size: ButtonSize::Md,
                    onclick: move |_| props.on_confirm.call(props.record_id),
                    "Delete"
                }
            },

            p { class: "confirm-delete-message", "{message}" }
            p { class: "confirm-delete-note", "This action cannot be undone." }
        }
    }
}

/// Copy shown in the dialog body
fn confirm_message(kind: EntityKind, id: u64) -> String {
    format!(
        "Are you sure you want to delete {} #{}?",
        kind.label().to_lowercase(),
        id
    )
}

// ============================================================================
// Tests
// ============================================================================
