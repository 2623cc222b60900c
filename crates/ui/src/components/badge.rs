//! # Badge Component
//!
//! Small status label used in table cells and stat summaries.
//!
//! Besides the raw color variants, the design system ships fixed shortcut
//! vocabularies (publication status, user role, priority, payment status)
//! so feature code never hand-picks a color for a known domain value.

use dioxus::prelude::*;

// ============================================================================
// Variants
// ============================================================================

/// Color variant of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    /// Semantic class carrying the variant's token colors
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Danger => "badge-danger",
            BadgeVariant::Info => "badge-info",
        }
    }
}

// ============================================================================
// Shortcut vocabularies
// ============================================================================

/// Generic publication-status vocabulary shared across record kinds
///
/// Kind-specific statuses are mapped into this vocabulary before badge
/// rendering so every table shows the same colors for the same lifecycle
/// stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Published,
    Draft,
    Archived,
    Pending,
    Rejected,
}

impl StatusKind {
    pub fn variant(&self) -> BadgeVariant {
        match self {
            StatusKind::Published => BadgeVariant::Success,
            StatusKind::Draft => BadgeVariant::Warning,
            StatusKind::Archived => BadgeVariant::Secondary,
            StatusKind::Pending => BadgeVariant::Info,
            StatusKind::Rejected => BadgeVariant::Danger,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Published => "Published",
            StatusKind::Draft => "Draft",
            StatusKind::Archived => "Archived",
            StatusKind::Pending => "Pending",
            StatusKind::Rejected => "Rejected",
        }
    }
}

/// Priority vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn variant(&self) -> BadgeVariant {
        match self {
            Priority::High => BadgeVariant::Danger,
            Priority::Medium => BadgeVariant::Warning,
            Priority::Low => BadgeVariant::Info,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Payment-status vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn variant(&self) -> BadgeVariant {
        match self {
            PaymentStatus::Paid => BadgeVariant::Success,
            PaymentStatus::Pending => BadgeVariant::Warning,
            PaymentStatus::Failed => BadgeVariant::Danger,
            PaymentStatus::Refunded => BadgeVariant::Secondary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

// ============================================================================
// Component
// ============================================================================

/// Properties for Badge component
#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    /// Text shown inside the badge
    pub label: String,

    /// Color variant
    #[props(default)]
    pub variant: BadgeVariant,

    /// Render with fully rounded ends
    #[props(default = false)]
    pub pill: bool,
}

/// Status badge component
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = build_badge_class(props.variant, props.pill);

    rsx! {
        span {
            class: "{class}",
            "{props.label}"
        }
    }
}

/// Build badge class string
fn build_badge_class(variant: BadgeVariant, pill: bool) -> String {
    let mut class = format!("badge {}", variant.class());
    if pill {
        class.push_str(" badge-pill");
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
    fn test_build_badge_class() {
        let class = build_badge_class(BadgeVariant::Danger, false);
        assert_eq!(class, "badge badge-danger");

        let class = build_badge_class(BadgeVariant::Info, true);
        assert_eq!(class, "badge badge-info badge-pill");
    }

    #[test]
    fn test_status_kind_variants() {
        assert_eq!(StatusKind::Published.variant(), BadgeVariant::Success);
        assert_eq!(StatusKind::Draft.variant(), BadgeVariant::Warning);
        assert_eq!(StatusKind::Archived.variant(), BadgeVariant::Secondary);
        assert_eq!(StatusKind::Pending.variant(), BadgeVariant::Info);
        assert_eq!(StatusKind::Rejected.variant(), BadgeVariant::Danger);
    }

    #[test]
    fn test_priority_variants() {
        assert_eq!(Priority::High.variant(), BadgeVariant::Danger);
        assert_eq!(Priority::Medium.variant(), BadgeVariant::Warning);
        assert_eq!(Priority::Low.variant(), BadgeVariant::Info);
    }

    #[test]
    fn test_payment_status_variants() {
        assert_eq!(PaymentStatus::Paid.variant(), BadgeVariant::Success);
        assert_eq!(PaymentStatus::Refunded.variant(), BadgeVariant::Secondary);
    }
}
