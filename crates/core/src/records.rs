//! Record types managed by the Prism admin demo
//!
//! Two independent record kinds are managed through the same view: user
//! accounts and blog posts. They are never unified into one schema — they
//! share only an integer identifier and a creation timestamp — so the types
//! that carry them around ([`Record`], [`RecordSet`]) are tagged variants
//! rather than a common trait object.

use serde::{Deserialize, Serialize};

// ============================================================================
// Entity Kind
// ============================================================================

/// The record category the management view is currently working with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityKind {
    /// User accounts
    User,
    /// Blog posts (the view's initial kind)
    #[default]
    Post,
}

impl EntityKind {
    /// Display name for tab labels and dialog titles
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Post => "Post",
        }
    }
}

// ============================================================================
// User records
// ============================================================================

/// Access role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    User,
    Guest,
}

impl Role {
    /// Stable identifier used as the select option value
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
            Role::Guest => "guest",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Moderator => "Moderator",
            Role::User => "User",
            Role::Guest => "Guest",
        }
    }

    /// Parse a select option value back into a role
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "user" => Some(Role::User),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }

    /// All roles
    pub fn all() -> [Role; 4] {
        [Role::User, Role::Moderator, Role::Admin, Role::Guest]
    }

    /// Roles offered in the form select (Guest is reserved for accounts
    /// that predate registration and cannot be assigned)
    pub fn selectable() -> [Role; 3] {
        [Role::User, Role::Moderator, Role::Admin]
    }
}

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            "suspended" => Some(UserStatus::Suspended),
            _ => None,
        }
    }

    pub fn all() -> [UserStatus; 3] {
        [UserStatus::Active, UserStatus::Inactive, UserStatus::Suspended]
    }
}

/// A user account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the service
    pub id: u64,
    /// Login name (non-empty)
    pub username: String,
    /// Contact email (non-empty)
    pub email: String,
    /// Access role
    pub role: Role,
    /// Account status
    pub status: UserStatus,
    /// Creation date as opaque display text
    pub created_at: String,
    /// Last login date, if the user has ever logged in
    pub last_login: Option<String>,
}

// ============================================================================
// Post records
// ============================================================================

/// Editorial category of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Development,
    Design,
    Accessibility,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::Design => "design",
            Category::Accessibility => "accessibility",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Accessibility => "Accessibility",
            Category::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "development" => Some(Category::Development),
            "design" => Some(Category::Design),
            "accessibility" => Some(Category::Accessibility),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Categories offered in the form select (Other is reserved for data
    /// that predates the current category list)
    pub fn selectable() -> [Category; 3] {
        [Category::Development, Category::Design, Category::Accessibility]
    }
}

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
            PostStatus::Archived => "Archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "archived" => Some(PostStatus::Archived),
            _ => None,
        }
    }
}

/// A blog post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, assigned by the service
    pub id: u64,
    /// Post title (non-empty)
    pub title: String,
    /// Author display name (non-empty)
    pub author: String,
    /// Editorial category
    pub category: Category,
    /// Publication status
    pub status: PostStatus,
    /// Body text (may be empty)
    pub content: String,
    /// Accumulated view count
    pub views: u64,
    /// Creation date as opaque display text
    pub created_at: String,
}

// ============================================================================
// Tagged record containers
// ============================================================================

/// One record of either kind, for code that handles a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    User(User),
    Post(Post),
}

impl Record {
    /// The kind this record belongs to
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::User(_) => EntityKind::User,
            Record::Post(_) => EntityKind::Post,
        }
    }

    /// The record's identifier
    pub fn id(&self) -> u64 {
        match self {
            Record::User(user) => user.id,
            Record::Post(post) => post.id,
        }
    }

    /// The record's creation date
    pub fn created_at(&self) -> &str {
        match self {
            Record::User(user) => &user.created_at,
            Record::Post(post) => &post.created_at,
        }
    }
}

/// The full record set for one kind, in service order
///
/// Tagged per kind so a set can never mix user and post rows. The view
/// replaces this wholesale on every successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSet {
    Users(Vec<User>),
    Posts(Vec<Post>),
}

impl RecordSet {
    /// An empty set of the given kind
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::User => RecordSet::Users(Vec::new()),
            EntityKind::Post => RecordSet::Posts(Vec::new()),
        }
    }

    /// The kind of records this set holds
    pub fn kind(&self) -> EntityKind {
        match self {
            RecordSet::Users(_) => EntityKind::User,
            RecordSet::Posts(_) => EntityKind::Post,
        }
    }

    /// Number of records in the set
    pub fn len(&self) -> usize {
        match self {
            RecordSet::Users(users) => users.len(),
            RecordSet::Posts(posts) => posts.len(),
        }
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the set contains a record with the given id
    pub fn contains_id(&self, id: u64) -> bool {
        match self {
            RecordSet::Users(users) => users.iter().any(|u| u.id == id),
            RecordSet::Posts(posts) => posts.iter().any(|p| p.id == id),
        }
    }

    /// Iterate the set as [`Record`] values (cloned rows)
    pub fn iter_records(&self) -> Vec<Record> {
        match self {
            RecordSet::Users(users) => users.iter().cloned().map(Record::User).collect(),
            RecordSet::Posts(posts) => posts.iter().cloned().map(Record::Post).collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_post(id: u64, status: PostStatus) -> Post {
        Post {
            id,
            title: format!("Post {}", id),
            author: "amy".to_string(),
            category: Category::Development,
            status,
            content: String::new(),
            views: 0,
            created_at: "2025-01-01".to_string(),
        }
    }

    #[test]
    fn test_enum_round_trips() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        for status in UserStatus::all() {
            assert_eq!(UserStatus::parse(status.as_str()), Some(status));
        }
        for category in [
            Category::Development,
            Category::Design,
            Category::Accessibility,
            Category::Other,
        ] {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        for status in [PostStatus::Draft, PostStatus::Published, PostStatus::Archived] {
            assert_eq!(PostStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(Role::parse("root"), None);
        assert_eq!(UserStatus::parse(""), None);
        assert_eq!(Category::parse("devops"), None);
        assert_eq!(PostStatus::parse("pending"), None);
    }

    #[test]
    fn test_selectable_excludes_reserved_variants() {
        assert!(!Role::selectable().contains(&Role::Guest));
        assert_eq!(Role::selectable(), [Role::User, Role::Moderator, Role::Admin]);
        assert!(!Category::selectable().contains(&Category::Other));
    }

    #[test]
    fn test_default_kind_is_post() {
        assert_eq!(EntityKind::default(), EntityKind::Post);
    }

    #[test]
    fn test_record_set_kind_and_len() {
        let set = RecordSet::empty(EntityKind::User);
        assert_eq!(set.kind(), EntityKind::User);
        assert!(set.is_empty());

        let set = RecordSet::Posts(vec![
            sample_post(1, PostStatus::Draft),
            sample_post(2, PostStatus::Published),
        ]);
        assert_eq!(set.kind(), EntityKind::Post);
        assert_eq!(set.len(), 2);
        assert!(set.contains_id(2));
        assert!(!set.contains_id(3));
    }

    #[test]
    fn test_record_accessors() {
        let record = Record::Post(sample_post(7, PostStatus::Draft));
        assert_eq!(record.kind(), EntityKind::Post);
        assert_eq!(record.id(), 7);
        assert_eq!(record.created_at(), "2025-01-01");
    }
}
