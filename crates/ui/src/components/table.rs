//! # Table Components
//!
//! Composable data-table family: `Table` wraps `TableHeader` and `TableBody`,
//! which hold `TableRow`s of `TableHead`/`TableCell` cells. Striping, hover
//! highlighting, and borders are opt-in flags on the table itself.

use dioxus::prelude::*;

// ============================================================================
// Table
// ============================================================================

/// Properties for Table component
#[derive(Props, Clone, PartialEq)]
pub struct TableProps {
    /// Alternate row backgrounds
    #[props(default = false)]
    pub striped: bool,

    /// Highlight rows on hover
    #[props(default = false)]
    pub hover: bool,

    /// Draw cell borders
    #[props(default = false)]
    pub bordered: bool,

    /// Header and body
    pub children: Element,
}

/// Data table component
#[component]
pub fn Table(props: TableProps) -> Element {
    let class = build_table_class(props.striped, props.hover, props.bordered);

    rsx! {
        table {
            class: "{class}",
            {props.children}
        }
    }
}

/// Table header section
#[component]
pub fn TableHeader(children: Element) -> Element {
    rsx! {
        thead { class: "tbl-header", {children} }
    }
}

/// Table body section
#[component]
pub fn TableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Table row
#[component]
pub fn TableRow(children: Element) -> Element {
    rsx! {
        tr { class: "tbl-row", {children} }
    }
}

/// Header cell with an optional fixed display width
#[component]
pub fn TableHead(#[props(default)] width: Option<&'static str>, children: Element) -> Element {
    rsx! {
        th {
            class: "tbl-head",
            style: width.map(|w| format!("width: {};", w)),
            {children}
        }
    }
}

/// Body cell
#[component]
pub fn TableCell(children: Element) -> Element {
    rsx! {
        td { class: "tbl-cell", {children} }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build table class string
fn build_table_class(striped: bool, hover: bool, bordered: bool) -> String {
    let mut class = String::from("tbl");
    if striped {
        class.push_str(" tbl-striped");
    }
    if hover {
        class.push_str(" tbl-hover");
    }
    if bordered {
        class.push_str(" tbl-bordered");
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
    fn test_build_table_class_plain() {
        assert_eq!(build_table_class(false, false, false), "tbl");
    }

    #[test]
    fn test_build_table_class_flags() {
        assert_eq!(build_table_class(true, true, false), "tbl tbl-striped tbl-hover");
        assert_eq!(build_table_class(false, false, true), "tbl tbl-bordered");
    }
}
