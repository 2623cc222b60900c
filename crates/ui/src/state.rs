//! Management view state
//!
//! This module provides centralized state for the management page using
//! Dioxus 0.7 Signals. All view behavior lives here as plain transition
//! methods on [`ManagementState`], so every flow (kind switching, loading,
//! dialogs, form validation, delete confirmation) is testable without a
//! rendering surface. The page maps events to these methods and reads the
//! resulting fields back out.

use dioxus::prelude::*;
use prism_core::{
    Category, EntityKind, Post, PostInput, PostStatus, Record, RecordSet, Role, ServiceError,
    User, UserInput, UserStatus,
};

// ============================================================================
// Banner Messages
// ============================================================================

/// Banner text when a load fails, regardless of the underlying error
pub const LOAD_FAILED: &str = "Failed to load data";

/// Fallback banner text per failed operation
pub const CREATE_FAILED: &str = "Creation failed";
pub const UPDATE_FAILED: &str = "Update failed";
pub const DELETE_FAILED: &str = "Deletion failed";
pub const STATUS_CHANGE_FAILED: &str = "Status change failed";

/// Success banner after a create
pub fn created_message(kind: EntityKind) -> String {
    format!("{} created", kind.label())
}

/// Success banner after an update
pub fn updated_message(kind: EntityKind) -> String {
    format!("{} updated", kind.label())
}

/// Success banner after a delete
pub const DELETED: &str = "Deleted";

/// Banner text for a failed service call
///
/// Validation errors carry user-facing text and surface as-is; everything
/// else collapses to the operation's fallback message.
pub fn service_message(err: &ServiceError, fallback: &str) -> String {
    match err {
        ServiceError::Validation(msg) => msg.clone(),
        ServiceError::NotFound(_) => err.to_string(),
        ServiceError::Unavailable => fallback.to_string(),
    }
}

// ============================================================================
// Form Values
// ============================================================================

/// Editable user fields as they appear in the create/edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            role: Role::User,
            status: UserStatus::Active,
        }
    }
}

impl UserForm {
    /// Populate the form from an existing record
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }

    pub fn validate(&self) -> UserFormErrors {
        UserFormErrors {
            username: self
                .username
                .trim()
                .is_empty()
                .then_some("Username is required"),
            email: self.email.trim().is_empty().then_some("Email is required"),
        }
    }

    pub fn to_input(&self) -> UserInput {
        UserInput {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
        }
    }
}

/// Editable post fields as they appear in the create/edit dialog
///
/// `status` is carried but never shown as a form control; rows change status
/// through their transition action instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub status: PostStatus,
    pub content: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            category: Category::Development,
            status: PostStatus::Draft,
            content: String::new(),
        }
    }
}

impl PostForm {
    /// Populate the form from an existing record
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            category: post.category,
            status: post.status,
            content: post.content.clone(),
        }
    }

    pub fn validate(&self) -> PostFormErrors {
        PostFormErrors {
            title: self.title.trim().is_empty().then_some("Title is required"),
            author: self
                .author
                .trim()
                .is_empty()
                .then_some("Author is required"),
        }
    }

    pub fn to_input(&self) -> PostInput {
        PostInput {
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category,
            status: self.status,
            content: self.content.clone(),
        }
    }
}

/// Per-field validation messages for the user form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFormErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl UserFormErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

/// Per-field validation messages for the post form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFormErrors {
    pub title: Option<&'static str>,
    pub author: Option<&'static str>,
}

impl PostFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

/// Form values for whichever kind is active
///
/// A closed pair rather than a string-keyed map: each kind's dialog reads
/// and writes exactly its own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValues {
    User(UserForm),
    Post(PostForm),
}

impl FormValues {
    /// Blank form for a kind, with its documented defaults
    pub fn defaults(kind: EntityKind) -> Self {
        match kind {
            EntityKind::User => FormValues::User(UserForm::default()),
            EntityKind::Post => FormValues::Post(PostForm::default()),
        }
    }

    /// Form pre-filled from an existing record
    pub fn from_record(record: &Record) -> Self {
        match record {
            Record::User(user) => FormValues::User(UserForm::from_user(user)),
            Record::Post(post) => FormValues::Post(PostForm::from_post(post)),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            FormValues::User(_) => EntityKind::User,
            FormValues::Post(_) => EntityKind::Post,
        }
    }

    pub fn validate(&self) -> FormErrors {
        match self {
            FormValues::User(form) => FormErrors::User(form.validate()),
            FormValues::Post(form) => FormErrors::Post(form.validate()),
        }
    }
}

/// Validation messages matching the active form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormErrors {
    User(UserFormErrors),
    Post(PostFormErrors),
}

impl FormErrors {
    /// No messages, for a kind
    pub fn none(kind: EntityKind) -> Self {
        match kind {
            EntityKind::User => FormErrors::User(UserFormErrors::default()),
            EntityKind::Post => FormErrors::Post(PostFormErrors::default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FormErrors::User(errors) => errors.is_empty(),
            FormErrors::Post(errors) => errors.is_empty(),
        }
    }
}

// ============================================================================
// Management State
// ============================================================================

/// Complete state of the management page
///
/// One instance drives the whole view. Mutation methods are synchronous and
/// pure over the struct; asynchronous work (service calls) happens outside
/// and feeds its outcome back in through `apply_load` and the banner setters.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagementState {
    /// Which record kind the page currently manages
    pub kind: EntityKind,
    /// Rows backing the table, always matching `kind`
    pub records: RecordSet,
    /// Whether a load is in flight
    pub loading: bool,
    /// Token identifying the newest load; stale outcomes are dropped
    load_generation: u64,

    /// Create dialog visibility
    pub create_open: bool,
    /// Edit dialog visibility
    pub edit_open: bool,
    /// Record being edited, while the edit dialog is open
    pub selected: Option<Record>,
    /// Record id pending delete confirmation
    pub confirm_delete: Option<u64>,

    /// Shared form values for the create and edit dialogs
    pub form: FormValues,
    /// Validation messages from the last submit attempt
    pub form_errors: FormErrors,

    /// Success banner text
    pub success: Option<String>,
    /// Error banner text
    pub error: Option<String>,
}

impl Default for ManagementState {
    fn default() -> Self {
        Self::new()
    }
}

impl ManagementState {
    /// Initial state: posts tab, nothing loaded yet
    pub fn new() -> Self {
        let kind = EntityKind::Post;
        Self {
            kind,
            records: RecordSet::empty(kind),
            loading: false,
            load_generation: 0,
            create_open: false,
            edit_open: false,
            selected: None,
            confirm_delete: None,
            form: FormValues::defaults(kind),
            form_errors: FormErrors::none(kind),
            success: None,
            error: None,
        }
    }

    // ------------------------------------------------------------------
    // Kind switching
    // ------------------------------------------------------------------

    /// Switch the page to another record kind
    ///
    /// Clears rows, dialogs, banners, and form state, and invalidates any
    /// load still in flight for the previous kind. A no-op when the kind is
    /// already active.
    pub fn switch_kind(&mut self, kind: EntityKind) {
        if kind == self.kind {
            return;
        }

        self.kind = kind;
        self.records = RecordSet::empty(kind);
        self.load_generation += 1;
        self.loading = false;
        self.close_dialogs();
        self.form = FormValues::defaults(kind);
        self.form_errors = FormErrors::none(kind);
        self.success = None;
        self.error = None;
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Mark a load as started and return its token
    ///
    /// The caller passes the token back to `apply_load` with the outcome;
    /// only the newest token is accepted.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Apply the outcome of a finished load
    ///
    /// Outcomes from superseded loads are dropped, as is any payload whose
    /// kind no longer matches the page. A failed load keeps the rows already
    /// on screen and raises the fixed load-failure banner.
    pub fn apply_load(&mut self, token: u64, outcome: Result<RecordSet, ServiceError>) {
        if token != self.load_generation {
            return;
        }

        self.loading = false;
        match outcome {
            Ok(records) if records.kind() == self.kind => {
                self.records = records;
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!("load failed: {err}");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------

    /// Open the create dialog with a blank form
    pub fn open_create(&mut self) {
        self.form = FormValues::defaults(self.kind);
        self.form_errors = FormErrors::none(self.kind);
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    /// Open the edit dialog pre-filled from a record
    ///
    /// Ignored if the record does not belong to the active kind.
    pub fn begin_edit(&mut self, record: Record) {
        if record.kind() != self.kind {
            return;
        }
        self.form = FormValues::from_record(&record);
        self.form_errors = FormErrors::none(self.kind);
        self.selected = Some(record);
        self.edit_open = true;
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
        self.selected = None;
    }

    fn close_dialogs(&mut self) {
        self.create_open = false;
        self.edit_open = false;
        self.selected = None;
        self.confirm_delete = None;
    }

    // ------------------------------------------------------------------
    // Delete confirmation
    // ------------------------------------------------------------------

    /// Ask for confirmation before deleting a record
    pub fn request_delete(&mut self, id: u64) {
        self.confirm_delete = Some(id);
    }

    /// Dismiss the confirmation without deleting
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    // ------------------------------------------------------------------
    // Form validation
    // ------------------------------------------------------------------

    /// Validate the form and record the per-field messages
    ///
    /// Returns whether the form may be submitted.
    pub fn validate_form(&mut self) -> bool {
        self.form_errors = self.form.validate();
        self.form_errors.is_empty()
    }

    /// The form values, but only when they pass validation
    ///
    /// This is the submit gate: `None` means the per-field messages were
    /// recorded and no service call may be made; the dialog stays open.
    pub fn validated_form(&mut self) -> Option<FormValues> {
        if self.validate_form() {
            Some(self.form.clone())
        } else {
            None
        }
    }

    /// Consume the pending delete confirmation, if one is armed
    ///
    /// `None` means no record was confirmed for deletion and no delete call
    /// may be made.
    pub fn take_confirmed_delete(&mut self) -> Option<u64> {
        self.confirm_delete.take()
    }

    // ------------------------------------------------------------------
    // Banners
    // ------------------------------------------------------------------

    /// Show a success banner, clearing any error banner
    pub fn record_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    /// Show an error banner, clearing any success banner
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn clear_success(&mut self) {
        self.success = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

// ============================================================================
// Global State
// ============================================================================

/// Global management page state signal
pub static MANAGEMENT: GlobalSignal<ManagementState> = Signal::global(ManagementState::new);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(id: u64) -> Post {
        Post {
            id,
            title: "First".to_string(),
            author: "amy".to_string(),
            category: Category::Design,
            status: PostStatus::Published,
            content: "Body".to_string(),
            views: 42,
            created_at: "2025-03-01".to_string(),
        }
    }

    fn sample_user(id: u64) -> User {
        User {
            id,
            username: "amy.park".to_string(),
            email: "amy@example.com".to_string(),
            role: Role::Admin,
            status: UserStatus::Active,
            created_at: "2024-01-15".to_string(),
            last_login: Some("2025-06-01".to_string()),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ManagementState::new();
        assert_eq!(state.kind, EntityKind::Post);
        assert!(state.records.is_empty());
        assert!(!state.loading);
        assert!(!state.create_open);
        assert!(!state.edit_open);
        assert_eq!(state.confirm_delete, None);
        assert_eq!(state.form, FormValues::defaults(EntityKind::Post));
    }

    #[test]
    fn test_post_form_defaults() {
        let form = PostForm::default();
        assert_eq!(form.category, Category::Development);
        assert_eq!(form.status, PostStatus::Draft);
        assert!(form.title.is_empty());
    }

    #[test]
    fn test_user_form_defaults() {
        let form = UserForm::default();
        assert_eq!(form.role, Role::User);
        assert_eq!(form.status, UserStatus::Active);
    }

    #[test]
    fn test_switch_kind_resets_view() {
        let mut state = ManagementState::new();
        state.records = RecordSet::Posts(vec![sample_post(1)]);
        state.create_open = true;
        state.success = Some("Post created".to_string());

        state.switch_kind(EntityKind::User);

        assert_eq!(state.kind, EntityKind::User);
        assert_eq!(state.records, RecordSet::empty(EntityKind::User));
        assert!(!state.create_open);
        assert_eq!(state.success, None);
        assert_eq!(state.form, FormValues::defaults(EntityKind::User));
    }

    #[test]
    fn test_switch_kind_same_kind_is_noop() {
        let mut state = ManagementState::new();
        state.records = RecordSet::Posts(vec![sample_post(1)]);
        state.success = Some("Deleted".to_string());

        state.switch_kind(EntityKind::Post);

        assert_eq!(state.records.len(), 1);
        assert_eq!(state.success.as_deref(), Some("Deleted"));
    }

    #[test]
    fn test_load_roundtrip() {
        let mut state = ManagementState::new();
        let token = state.begin_load();
        assert!(state.loading);

        state.apply_load(token, Ok(RecordSet::Posts(vec![sample_post(1)])));
        assert!(!state.loading);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut state = ManagementState::new();
        let stale = state.begin_load();
        let fresh = state.begin_load();

        state.apply_load(fresh, Ok(RecordSet::Posts(vec![sample_post(1), sample_post(2)])));
        state.apply_load(stale, Ok(RecordSet::Posts(vec![sample_post(9)])));

        assert_eq!(state.records.len(), 2);
        assert!(state.records.contains_id(1));
        assert!(!state.records.contains_id(9));
    }

    #[test]
    fn test_load_started_before_kind_switch_is_dropped() {
        let mut state = ManagementState::new();
        let token = state.begin_load();

        state.switch_kind(EntityKind::User);
        state.apply_load(token, Ok(RecordSet::Posts(vec![sample_post(1)])));

        assert_eq!(state.records, RecordSet::empty(EntityKind::User));
    }

    #[test]
    fn test_mismatched_payload_kind_is_dropped() {
        let mut state = ManagementState::new();
        let token = state.begin_load();

        state.apply_load(token, Ok(RecordSet::Users(vec![sample_user(1)])));

        assert_eq!(state.records, RecordSet::empty(EntityKind::Post));
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_load_keeps_rows_and_raises_banner() {
        let mut state = ManagementState::new();
        let token = state.begin_load();
        state.apply_load(token, Ok(RecordSet::Posts(vec![sample_post(1)])));

        let token = state.begin_load();
        state.apply_load(token, Err(ServiceError::Unavailable));

        assert_eq!(state.records.len(), 1);
        assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
        assert!(!state.loading);
    }

    #[test]
    fn test_open_create_resets_form() {
        let mut state = ManagementState::new();
        state.form = FormValues::Post(PostForm {
            title: "Leftover".to_string(),
            ..PostForm::default()
        });

        state.open_create();

        assert!(state.create_open);
        assert_eq!(state.form, FormValues::defaults(EntityKind::Post));
        assert!(state.form_errors.is_empty());
    }

    #[test]
    fn test_begin_edit_populates_form() {
        let mut state = ManagementState::new();
        let record = Record::Post(sample_post(3));

        state.begin_edit(record.clone());

        assert!(state.edit_open);
        assert_eq!(state.selected, Some(record));
        match &state.form {
            FormValues::Post(form) => {
                assert_eq!(form.title, "First");
                assert_eq!(form.status, PostStatus::Published);
            }
            other => panic!("expected post form, got {:?}", other),
        }
    }

    #[test]
    fn test_begin_edit_rejects_foreign_kind() {
        let mut state = ManagementState::new();
        state.begin_edit(Record::User(sample_user(1)));

        assert!(!state.edit_open);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_close_edit_clears_selection() {
        let mut state = ManagementState::new();
        state.begin_edit(Record::Post(sample_post(3)));
        state.close_edit();

        assert!(!state.edit_open);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut state = ManagementState::new();
        state.request_delete(7);
        assert_eq!(state.confirm_delete, Some(7));

        state.cancel_delete();
        assert_eq!(state.confirm_delete, None);
    }

    #[test]
    fn test_validate_blank_post_form() {
        let mut state = ManagementState::new();
        state.open_create();

        assert!(!state.validate_form());
        match state.form_errors {
            FormErrors::Post(errors) => {
                assert_eq!(errors.title, Some("Title is required"));
                assert_eq!(errors.author, Some("Author is required"));
            }
            other => panic!("expected post errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        let form = UserForm {
            username: "   ".to_string(),
            email: "amy@example.com".to_string(),
            ..UserForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.username, Some("Username is required"));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn test_validated_form_blocks_invalid_submit() {
        let mut state = ManagementState::new();
        state.open_create();

        assert_eq!(state.validated_form(), None);
        // The dialog stays open with the field messages recorded
        assert!(state.create_open);
        assert!(!state.form_errors.is_empty());
    }

    #[test]
    fn test_validated_form_returns_valid_values() {
        let mut state = ManagementState::new();
        state.form = FormValues::Post(PostForm {
            title: "Hello".to_string(),
            author: "amy".to_string(),
            ..PostForm::default()
        });

        let form = state.validated_form().expect("valid form");
        assert_eq!(form, state.form);
    }

    #[test]
    fn test_take_confirmed_delete_requires_confirmation() {
        let mut state = ManagementState::new();
        assert_eq!(state.take_confirmed_delete(), None);

        state.request_delete(7);
        assert_eq!(state.take_confirmed_delete(), Some(7));
        // Consumed: a second take yields nothing
        assert_eq!(state.take_confirmed_delete(), None);
    }

    #[test]
    fn test_validate_complete_form_passes() {
        let mut state = ManagementState::new();
        state.form = FormValues::Post(PostForm {
            title: "Hello".to_string(),
            author: "amy".to_string(),
            ..PostForm::default()
        });

        assert!(state.validate_form());
        assert!(state.form_errors.is_empty());
    }

    #[test]
    fn test_edit_form_preserves_status_field() {
        let post = sample_post(5);
        let form = PostForm::from_post(&post);
        assert_eq!(form.status, PostStatus::Published);
        assert_eq!(form.to_input().status, PostStatus::Published);
    }

    #[test]
    fn test_banners_are_mutually_exclusive() {
        let mut state = ManagementState::new();
        state.record_error("Creation failed");
        state.record_success("Post created");

        assert_eq!(state.success.as_deref(), Some("Post created"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_service_message_mapping() {
        assert_eq!(
            service_message(
                &ServiceError::Validation("Title is required".to_string()),
                CREATE_FAILED
            ),
            "Title is required"
        );
        assert_eq!(
            service_message(&ServiceError::NotFound(9), UPDATE_FAILED),
            "No record found with id 9"
        );
        assert_eq!(
            service_message(&ServiceError::Unavailable, DELETE_FAILED),
            "Deletion failed"
        );
    }

    #[test]
    fn test_created_and_updated_messages() {
        assert_eq!(created_message(EntityKind::User), "User created");
        assert_eq!(created_message(EntityKind::Post), "Post created");
        assert_eq!(updated_message(EntityKind::Post), "Post updated");
    }
}
