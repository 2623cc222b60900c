//! # UI Components
//!
//! The Prism design-system primitives. Every component here is a stateless
//! render function over its props; business logic lives in the management
//! page and its state module, never in a primitive.
//!
//! - **Button**: themeable push button (variant × size)
//! - **Badge**: status labels with fixed shortcut vocabularies
//! - **Alert**: dismissible feedback banner
//! - **Inputs**: text input, textarea, select — each with built-in label
//!   and error-message wrapping
//! - **Table**: composable data-table family (striped/hover/bordered)
//! - **Dialog**: modal with title/body/footer slots
//! - **ConfirmDeleteDialog**: confirmation step for destructive deletes

// ============================================================================
// Module Declarations
// ============================================================================

pub mod alert;
pub mod badge;
pub mod button;
pub mod confirm_delete;
pub mod dialog;
pub mod inputs;
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

pub use alert::{Alert, AlertVariant};
pub use badge::{Badge, BadgeVariant, PaymentStatus, Priority, StatusKind};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use confirm_delete::ConfirmDeleteDialog;
pub use dialog::{Dialog, DialogSize};
pub use inputs::{Select, SelectOption, TextArea, TextInput};
pub use table::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};
