//! # Table schema and derivations
//!
//! Everything the management page derives from the current record set lives
//! here as pure functions: the per-kind column schema, the per-cell
//! formatting rules, and the summary statistics. The page itself only maps
//! these values onto components.
//!
//! Cell formatting returns a renderer-agnostic [`Cell`] value instead of
//! markup, so every rule is unit-testable without a rendering surface.

use prism_core::{EntityKind, Post, PostStatus, Record, RecordSet, Role, User, UserStatus};

use crate::components::badge::{BadgeVariant, StatusKind};
use crate::components::button::ButtonVariant;

// ============================================================================
// Column schema
// ============================================================================

/// Keys identifying the columns across both kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Id,
    Username,
    Email,
    Role,
    Status,
    CreatedAt,
    LastLogin,
    Title,
    Author,
    Category,
    Views,
    Actions,
}

/// One column of the management table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub header: &'static str,
    /// Fixed display width; fluid when absent
    pub width: Option<&'static str>,
}

const USER_COLUMNS: &[Column] = &[
    Column { key: ColumnKey::Id, header: "ID", width: Some("60px") },
    Column { key: ColumnKey::Username, header: "Username", width: Some("150px") },
    Column { key: ColumnKey::Email, header: "Email", width: None },
    Column { key: ColumnKey::Role, header: "Role", width: Some("120px") },
    Column { key: ColumnKey::Status, header: "Status", width: Some("120px") },
    Column { key: ColumnKey::CreatedAt, header: "Created", width: Some("120px") },
    Column { key: ColumnKey::LastLogin, header: "Last login", width: Some("140px") },
    Column { key: ColumnKey::Actions, header: "Actions", width: Some("200px") },
];

const POST_COLUMNS: &[Column] = &[
    Column { key: ColumnKey::Id, header: "ID", width: Some("60px") },
    Column { key: ColumnKey::Title, header: "Title", width: None },
    Column { key: ColumnKey::Author, header: "Author", width: Some("120px") },
    Column { key: ColumnKey::Category, header: "Category", width: Some("140px") },
    Column { key: ColumnKey::Status, header: "Status", width: Some("120px") },
    Column { key: ColumnKey::Views, header: "Views", width: Some("100px") },
    Column { key: ColumnKey::CreatedAt, header: "Created", width: Some("120px") },
    Column { key: ColumnKey::Actions, header: "Actions", width: Some("250px") },
];

/// The fixed, ordered column schema for a kind
pub fn columns(kind: EntityKind) -> &'static [Column] {
    match kind {
        EntityKind::User => USER_COLUMNS,
        EntityKind::Post => POST_COLUMNS,
    }
}

// ============================================================================
// Row actions
// ============================================================================

/// Status transition available on a post row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Publish,
    Archive,
    Restore,
}

impl StatusAction {
    pub fn label(&self) -> &'static str {
        match self {
            StatusAction::Publish => "Publish",
            StatusAction::Archive => "Archive",
            StatusAction::Restore => "Restore",
        }
    }

    /// Banner text after the transition succeeds
    pub fn success_message(&self) -> &'static str {
        match self {
            StatusAction::Publish => "Published",
            StatusAction::Archive => "Archived",
            StatusAction::Restore => "Restored",
        }
    }

    pub fn button_variant(&self) -> ButtonVariant {
        match self {
            StatusAction::Publish => ButtonVariant::Success,
            StatusAction::Archive => ButtonVariant::Secondary,
            StatusAction::Restore => ButtonVariant::Primary,
        }
    }
}

/// One control in a row's actions cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Transition(StatusAction),
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Transition(action) => action.label(),
        }
    }

    pub fn button_variant(&self) -> ButtonVariant {
        match self {
            RowAction::Edit => ButtonVariant::Primary,
            RowAction::Delete => ButtonVariant::Danger,
            RowAction::Transition(action) => action.button_variant(),
        }
    }
}

/// The single status transition a post row exposes, keyed by its status
pub fn transition_for(status: PostStatus) -> StatusAction {
    match status {
        PostStatus::Draft => StatusAction::Publish,
        PostStatus::Published => StatusAction::Archive,
        PostStatus::Archived => StatusAction::Restore,
    }
}

// ============================================================================
// Cell formatting
// ============================================================================

/// Renderer-agnostic cell content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Raw field text
    Text(String),
    /// Placeholder for an absent optional value
    Dash,
    /// Thousands-grouped numeral
    Number(u64),
    /// Status/category badge
    Badge {
        label: String,
        variant: BadgeVariant,
        pill: bool,
    },
    /// Mutation controls, in display order
    Actions(Vec<RowAction>),
}

/// Format one cell of a row
pub fn cell(record: &Record, key: ColumnKey) -> Cell {
    match record {
        Record::User(user) => user_cell(user, key),
        Record::Post(post) => post_cell(post, key),
    }
}

fn user_cell(user: &User, key: ColumnKey) -> Cell {
    match key {
        ColumnKey::Id => Cell::Text(user.id.to_string()),
        ColumnKey::Username => Cell::Text(user.username.clone()),
        ColumnKey::Email => Cell::Text(user.email.clone()),
        ColumnKey::Role => Cell::Badge {
            label: user.role.label().to_string(),
            variant: role_variant(user.role),
            pill: false,
        },
        ColumnKey::Status => Cell::Badge {
            label: user.status.label().to_string(),
            variant: user_status_kind(user.status).variant(),
            pill: false,
        },
        ColumnKey::CreatedAt => Cell::Text(user.created_at.clone()),
        ColumnKey::LastLogin => match &user.last_login {
            Some(date) => Cell::Text(date.clone()),
            None => Cell::Dash,
        },
        ColumnKey::Actions => Cell::Actions(vec![RowAction::Edit, RowAction::Delete]),
        _ => Cell::Dash,
    }
}

fn post_cell(post: &Post, key: ColumnKey) -> Cell {
    match key {
        ColumnKey::Id => Cell::Text(post.id.to_string()),
        ColumnKey::Title => Cell::Text(post.title.clone()),
        ColumnKey::Author => Cell::Text(post.author.clone()),
        ColumnKey::Category => Cell::Badge {
            label: post.category.label().to_string(),
            variant: category_variant(post.category.as_str()),
            pill: true,
        },
        ColumnKey::Status => Cell::Badge {
            label: post_status_kind(post.status).label().to_string(),
            variant: post_status_kind(post.status).variant(),
            pill: false,
        },
        ColumnKey::Views => Cell::Number(post.views),
        ColumnKey::CreatedAt => Cell::Text(post.created_at.clone()),
        ColumnKey::Actions => Cell::Actions(vec![
            RowAction::Edit,
            RowAction::Transition(transition_for(post.status)),
            RowAction::Delete,
        ]),
        _ => Cell::Dash,
    }
}

/// Fixed role → badge color mapping
fn role_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Danger,
        Role::Moderator => BadgeVariant::Warning,
        Role::User => BadgeVariant::Primary,
        Role::Guest => BadgeVariant::Secondary,
    }
}

/// User statuses map into the generic status vocabulary before badge styling
fn user_status_kind(status: UserStatus) -> StatusKind {
    match status {
        UserStatus::Active => StatusKind::Published,
        UserStatus::Inactive => StatusKind::Draft,
        UserStatus::Suspended => StatusKind::Rejected,
    }
}

fn post_status_kind(status: PostStatus) -> StatusKind {
    match status {
        PostStatus::Draft => StatusKind::Draft,
        PostStatus::Published => StatusKind::Published,
        PostStatus::Archived => StatusKind::Archived,
    }
}

/// Fixed category → pill color mapping; unknown categories fall back to
/// secondary
fn category_variant(category: &str) -> BadgeVariant {
    match category {
        "development" => BadgeVariant::Primary,
        "design" => BadgeVariant::Info,
        "accessibility" => BadgeVariant::Danger,
        _ => BadgeVariant::Secondary,
    }
}

/// Group a numeral into thousands: 1234567 → "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// ============================================================================
// Statistics
// ============================================================================

/// Visual tone of a stat card, fixed by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Info,
    Success,
    Warning,
    Danger,
    Neutral,
}

impl StatTone {
    pub fn class(&self) -> &'static str {
        match self {
            StatTone::Info => "stat-info",
            StatTone::Success => "stat-success",
            StatTone::Warning => "stat-warning",
            StatTone::Danger => "stat-danger",
            StatTone::Neutral => "stat-neutral",
        }
    }
}

/// One labeled counter on the management page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u64,
    pub tone: StatTone,
}

/// Derive the five summary counters for the current record set
///
/// Pure and idempotent; the page recomputes this on every render.
pub fn stats(records: &RecordSet) -> [Stat; 5] {
    let stat = |label, value, tone| Stat { label, value, tone };

    match records {
        RecordSet::Users(users) => {
            let by_status =
                |status: UserStatus| users.iter().filter(|u| u.status == status).count() as u64;
            let admins = users.iter().filter(|u| u.role == Role::Admin).count() as u64;

            [
                stat("Total", users.len() as u64, StatTone::Info),
                stat("Active", by_status(UserStatus::Active), StatTone::Success),
                stat("Inactive", by_status(UserStatus::Inactive), StatTone::Warning),
                stat("Suspended", by_status(UserStatus::Suspended), StatTone::Danger),
                stat("Admins", admins, StatTone::Neutral),
            ]
        }
        RecordSet::Posts(posts) => {
            let by_status =
                |status: PostStatus| posts.iter().filter(|p| p.status == status).count() as u64;
            let total_views: u64 = posts.iter().map(|p| p.views).sum();

            [
                stat("Total", posts.len() as u64, StatTone::Info),
                stat("Published", by_status(PostStatus::Published), StatTone::Success),
                stat("Drafts", by_status(PostStatus::Draft), StatTone::Warning),
                stat("Archived", by_status(PostStatus::Archived), StatTone::Danger),
                stat("Total views", total_views, StatTone::Neutral),
            ]
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Category;

    fn user(role: Role, status: UserStatus, last_login: Option<&str>) -> User {
        User {
            id: 1,
            username: "amy".to_string(),
            email: "amy@example.com".to_string(),
            role,
            status,
            created_at: "2024-01-15".to_string(),
            last_login: last_login.map(str::to_string),
        }
    }

    fn post(id: u64, status: PostStatus, views: u64) -> Post {
        Post {
            id,
            title: "Title".to_string(),
            author: "amy".to_string(),
            category: Category::Development,
            status,
            content: String::new(),
            views,
            created_at: "2025-01-01".to_string(),
        }
    }

    #[test]
    fn test_column_schema_order() {
        let user_keys: Vec<ColumnKey> = columns(EntityKind::User).iter().map(|c| c.key).collect();
        assert_eq!(
            user_keys,
            vec![
                ColumnKey::Id,
                ColumnKey::Username,
                ColumnKey::Email,
                ColumnKey::Role,
                ColumnKey::Status,
                ColumnKey::CreatedAt,
                ColumnKey::LastLogin,
                ColumnKey::Actions,
            ]
        );

        let post_keys: Vec<ColumnKey> = columns(EntityKind::Post).iter().map(|c| c.key).collect();
        assert_eq!(
            post_keys,
            vec![
                ColumnKey::Id,
                ColumnKey::Title,
                ColumnKey::Author,
                ColumnKey::Category,
                ColumnKey::Status,
                ColumnKey::Views,
                ColumnKey::CreatedAt,
                ColumnKey::Actions,
            ]
        );
    }

    #[test]
    fn test_actions_column_is_last_for_both_kinds() {
        for kind in [EntityKind::User, EntityKind::Post] {
            assert_eq!(columns(kind).last().unwrap().key, ColumnKey::Actions);
        }
    }

    #[test]
    fn test_role_badges() {
        let cases = [
            (Role::Admin, BadgeVariant::Danger),
            (Role::Moderator, BadgeVariant::Warning),
            (Role::User, BadgeVariant::Primary),
            (Role::Guest, BadgeVariant::Secondary),
        ];
        for (role, expected) in cases {
            let record = Record::User(user(role, UserStatus::Active, None));
            match cell(&record, ColumnKey::Role) {
                Cell::Badge { variant, pill, .. } => {
                    assert_eq!(variant, expected);
                    assert!(!pill);
                }
                other => panic!("expected badge, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_user_status_maps_through_generic_vocabulary() {
        let cases = [
            (UserStatus::Active, BadgeVariant::Success),
            (UserStatus::Inactive, BadgeVariant::Warning),
            (UserStatus::Suspended, BadgeVariant::Danger),
        ];
        for (status, expected) in cases {
            let record = Record::User(user(Role::User, status, None));
            match cell(&record, ColumnKey::Status) {
                Cell::Badge { label, variant, .. } => {
                    assert_eq!(variant, expected);
                    // Label stays in the user vocabulary
                    assert_eq!(label, status.label());
                }
                other => panic!("expected badge, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_last_login_dash_when_absent() {
        let record = Record::User(user(Role::User, UserStatus::Active, None));
        assert_eq!(cell(&record, ColumnKey::LastLogin), Cell::Dash);

        let record = Record::User(user(Role::User, UserStatus::Active, Some("2025-06-01")));
        assert_eq!(
            cell(&record, ColumnKey::LastLogin),
            Cell::Text("2025-06-01".to_string())
        );
    }

    #[test]
    fn test_user_actions() {
        let record = Record::User(user(Role::User, UserStatus::Active, None));
        assert_eq!(
            cell(&record, ColumnKey::Actions),
            Cell::Actions(vec![RowAction::Edit, RowAction::Delete])
        );
    }

    #[test]
    fn test_category_pill_is_deterministic() {
        for (category, expected) in [
            (Category::Development, BadgeVariant::Primary),
            (Category::Design, BadgeVariant::Info),
            (Category::Accessibility, BadgeVariant::Danger),
            (Category::Other, BadgeVariant::Secondary),
        ] {
            let mut p = post(1, PostStatus::Published, 0);
            p.category = category;
            match cell(&Record::Post(p), ColumnKey::Category) {
                Cell::Badge { variant, pill, .. } => {
                    assert_eq!(variant, expected);
                    assert!(pill);
                }
                other => panic!("expected badge, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_exactly_one_transition_per_post_row() {
        let cases = [
            (PostStatus::Draft, StatusAction::Publish),
            (PostStatus::Published, StatusAction::Archive),
            (PostStatus::Archived, StatusAction::Restore),
        ];
        for (status, expected) in cases {
            let record = Record::Post(post(7, status, 0));
            match cell(&record, ColumnKey::Actions) {
                Cell::Actions(actions) => {
                    let transitions: Vec<StatusAction> = actions
                        .iter()
                        .filter_map(|a| match a {
                            RowAction::Transition(t) => Some(*t),
                            _ => None,
                        })
                        .collect();
                    assert_eq!(transitions, vec![expected]);
                    assert!(actions.contains(&RowAction::Edit));
                    assert!(actions.contains(&RowAction::Delete));
                }
                other => panic!("expected actions, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_views_cell() {
        let record = Record::Post(post(1, PostStatus::Published, 1523));
        assert_eq!(cell(&record, ColumnKey::Views), Cell::Number(1523));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1523), "1,523");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_post_stats() {
        let records = RecordSet::Posts(vec![
            post(1, PostStatus::Published, 10),
            post(2, PostStatus::Draft, 5),
            post(3, PostStatus::Archived, 0),
        ]);

        let derived = stats(&records);
        assert_eq!(derived[0], Stat { label: "Total", value: 3, tone: StatTone::Info });
        assert_eq!(derived[1].value, 1); // published
        assert_eq!(derived[2].value, 1); // drafts
        assert_eq!(derived[3].value, 1); // archived
        assert_eq!(derived[4], Stat { label: "Total views", value: 15, tone: StatTone::Neutral });
    }

    #[test]
    fn test_stats_are_idempotent() {
        let records = RecordSet::Posts(vec![
            post(1, PostStatus::Published, 10),
            post(2, PostStatus::Draft, 5),
        ]);
        assert_eq!(stats(&records), stats(&records));
    }

    #[test]
    fn test_user_stats() {
        let records = RecordSet::Users(vec![
            user(Role::Admin, UserStatus::Active, None),
            user(Role::User, UserStatus::Inactive, None),
            user(Role::User, UserStatus::Suspended, None),
            user(Role::Moderator, UserStatus::Active, None),
        ]);

        let derived = stats(&records);
        assert_eq!(derived[0].value, 4); // total
        assert_eq!(derived[1].value, 2); // active
        assert_eq!(derived[2].value, 1); // inactive
        assert_eq!(derived[3].value, 1); // suspended
        assert_eq!(derived[4].value, 1); // admins
    }

    #[test]
    fn test_stats_of_empty_set() {
        let derived = stats(&RecordSet::empty(EntityKind::Post));
        assert!(derived.iter().all(|s| s.value == 0));
    }
}
