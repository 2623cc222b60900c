//! Management Page Component
//!
//! The admin-style record management view. One page handles both record
//! kinds: tabs switch between posts and users, and every derived part of the
//! view (columns, cells, stats, dialogs) follows the active kind.
//!
//! Data flow is strictly load-after-write: every successful mutation
//! triggers a full reload through the service rather than patching rows
//! locally, so the table always shows exactly what the service holds.

use dioxus::prelude::*;
use prism_core::{Category, EntityKind, Record, RecordSet, Role, Services, UserStatus};

use crate::components::{
    Alert, AlertVariant, Badge, Button, ButtonSize, ButtonVariant, ConfirmDeleteDialog, Dialog,
    DialogSize, Select, SelectOption, Table, TableBody, TableCell, TableHead, TableHeader,
    TableRow, TextArea, TextInput,
};
use crate::schema::{self, Cell, RowAction, StatusAction};
use crate::state::{
    created_message, service_message, updated_message, FormErrors, FormValues, CREATE_FAILED,
    DELETED, DELETE_FAILED, MANAGEMENT, STATUS_CHANGE_FAILED, UPDATE_FAILED,
};

// ============================================================================
// Service Calls
// ============================================================================

/// Fetch the full record set of a kind from its service
async fn fetch_records(
    services: &Services,
    kind: EntityKind,
) -> Result<RecordSet, prism_core::ServiceError> {
    match kind {
        EntityKind::User => services.users.get_all().await.map(RecordSet::Users),
        EntityKind::Post => services.posts.get_all().await.map(RecordSet::Posts),
    }
}

/// Reload the active kind's records and wait for the outcome to land
///
/// Takes a load token up front, so an outcome arriving after a kind switch
/// or a newer reload is dropped instead of clobbering the table. Mutation
/// handlers await this before showing their success banner, keeping the
/// banner and the rows behind it in sync.
async fn reload_now(services: &Services) {
    let (kind, token) = {
        let mut state = MANAGEMENT.write();
        let token = state.begin_load();
        (state.kind, token)
    };

    let outcome = fetch_records(services, kind).await;
    MANAGEMENT.write().apply_load(token, outcome);
}

/// Fire-and-forget reload, for the initial load and tab switches
fn reload(services: Services) {
    spawn(async move {
        reload_now(&services).await;
    });
}

/// Validate and submit the create form
///
/// An invalid form never reaches the service; the dialog stays open with
/// the per-field messages.
fn submit_create(services: Services) {
    let Some(form) = MANAGEMENT.write().validated_form() else {
        return;
    };

    spawn(async move {
        let kind = form.kind();
        let outcome = match &form {
            FormValues::User(form) => services.users.create(form.to_input()).await.map(|_| ()),
            FormValues::Post(form) => services.posts.create(form.to_input()).await.map(|_| ()),
        };

        match outcome {
            Ok(()) => {
                // Reload first: the banner must appear over the new rows
                reload_now(&services).await;
                let mut state = MANAGEMENT.write();
                state.close_create();
                state.record_success(created_message(kind));
            }
            Err(err) => {
                MANAGEMENT
                    .write()
                    .record_error(service_message(&err, CREATE_FAILED));
            }
        }
    });
}

/// Validate and submit the edit form against the selected record
fn submit_edit(services: Services) {
    let (id, form) = {
        let mut state = MANAGEMENT.write();
        let Some(record) = &state.selected else {
            return;
        };
        let id = record.id();
        let Some(form) = state.validated_form() else {
            return;
        };
        (id, form)
    };

    spawn(async move {
        let kind = form.kind();
        let outcome = match &form {
            FormValues::User(form) => services.users.update(id, form.to_input()).await.map(|_| ()),
            FormValues::Post(form) => services.posts.update(id, form.to_input()).await.map(|_| ()),
        };

        match outcome {
            Ok(()) => {
                reload_now(&services).await;
                let mut state = MANAGEMENT.write();
                state.close_edit();
                state.record_success(updated_message(kind));
            }
            Err(err) => {
                MANAGEMENT
                    .write()
                    .record_error(service_message(&err, UPDATE_FAILED));
            }
        }
    });
}

/// Delete the record whose deletion was confirmed
///
/// A no-op when no confirmation is armed; declining the dialog makes no
/// service call.
fn perform_delete(services: Services) {
    let (kind, id) = {
        let mut state = MANAGEMENT.write();
        let Some(id) = state.take_confirmed_delete() else {
            return;
        };
        (state.kind, id)
    };

    spawn(async move {
        let outcome = match kind {
            EntityKind::User => services.users.delete(id).await,
            EntityKind::Post => services.posts.delete(id).await,
        };

        match outcome {
            Ok(()) => {
                reload_now(&services).await;
                MANAGEMENT.write().record_success(DELETED);
            }
            Err(err) => {
                MANAGEMENT
                    .write()
                    .record_error(service_message(&err, DELETE_FAILED));
            }
        }
    });
}

/// Run a post status transition
fn perform_transition(services: Services, id: u64, action: StatusAction) {
    spawn(async move {
        let outcome = match action {
            StatusAction::Publish => services.posts.publish(id).await,
            StatusAction::Archive => services.posts.archive(id).await,
            StatusAction::Restore => services.posts.restore(id).await,
        };

        match outcome {
            Ok(_) => {
                reload_now(&services).await;
                MANAGEMENT.write().record_success(action.success_message());
            }
            Err(err) => {
                MANAGEMENT
                    .write()
                    .record_error(service_message(&err, STATUS_CHANGE_FAILED));
            }
        }
    });
}

// ============================================================================
// Management Page Component
// ============================================================================

/// The record management page
#[component]
pub fn ManagementPage() -> Element {
    let services = use_context::<Services>();

    // Initial load; later reloads run from event handlers
    {
        let services = services.clone();
        use_hook(move || reload(services));
    }

    let state = MANAGEMENT.read();
    let kind = state.kind;
    let create_title = format!("New {}", kind.label());
    let edit_title = format!("Edit {}", kind.label());

    rsx! {
        div {
            class: "page management-page",

            PageHeader { kind }
            StatCards { records: state.records.clone() }
            Banners {}
            RecordTable { loading: state.loading, records: state.records.clone() }

            if state.create_open {
                RecordFormDialog {
                    title: create_title,
                    submit_label: "Create".to_string(),
                    on_submit: {
                        let services = services.clone();
                        move |_| submit_create(services.clone())
                    },
                    on_close: move |_| MANAGEMENT.write().close_create(),
                }
            }

            if state.edit_open {
                RecordFormDialog {
                    title: edit_title,
                    submit_label: "Save".to_string(),
                    record: state.selected.clone(),
                    on_submit: {
                        let services = services.clone();
                        move |_| submit_edit(services.clone())
                    },
                    on_close: move |_| MANAGEMENT.write().close_edit(),
                }
            }

            if let Some(id) = state.confirm_delete {
                ConfirmDeleteDialog {
                    record_id: id,
                    kind,
                    on_confirm: {
                        let services = services.clone();
                        move |_| perform_delete(services.clone())
                    },
                    on_cancel: move |_| MANAGEMENT.write().cancel_delete(),
                }
            }
        }
    }
}

// ============================================================================
// Header and Tabs
// ============================================================================

#[component]
fn PageHeader(kind: EntityKind) -> Element {
    let services = use_context::<Services>();
    let title = format!("{} Management", kind.label());
    let new_label = format!("New {}", kind.label());

    rsx! {
        div {
            class: "page-header",

            h1 { class: "page-title", "{title}" }

            div {
                class: "page-toolbar",

                div {
                    class: "tabs",
                    for tab in [EntityKind::Post, EntityKind::User] {
                        {
                            let label = format!("{}s", tab.label());
                            let class = if tab == kind { "tab tab-active" } else { "tab" };
                            let services = services.clone();

                            rsx! {
                                button {
                                    key: "{label}",
                                    class: "{class}",
                                    onclick: move |_| {
                                        MANAGEMENT.write().switch_kind(tab);
                                        reload(services.clone());
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| MANAGEMENT.write().open_create(),
                    "{new_label}"
                }
            }
        }
    }
}

// ============================================================================
// Stat Cards
// ============================================================================

#[component]
fn StatCards(records: RecordSet) -> Element {
    let stats = schema::stats(&records);

    rsx! {
        div {
            class: "stats-grid",
            for stat in stats {
                {
                    let class = format!("stat-card {}", stat.tone.class());
                    let value = schema::group_thousands(stat.value);

                    rsx! {
                        div {
                            key: "{stat.label}",
                            class: "{class}",
                            span { class: "stat-value", "{value}" }
                            span { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Banners
// ============================================================================

#[component]
fn Banners() -> Element {
    let state = MANAGEMENT.read();

    rsx! {
        if let Some(message) = &state.success {
            Alert {
                variant: AlertVariant::Success,
                title: Some("Success".to_string()),
                onclose: move |_| MANAGEMENT.write().clear_success(),
                "{message}"
            }
        }

        if let Some(message) = &state.error {
            Alert {
                variant: AlertVariant::Error,
                title: Some("Error".to_string()),
                onclose: move |_| MANAGEMENT.write().clear_error(),
                "{message}"
            }
        }
    }
}

// ============================================================================
// Record Table
// ============================================================================

#[component]
fn RecordTable(loading: bool, records: RecordSet) -> Element {
    let kind = records.kind();
    let columns = schema::columns(kind);
    let empty_message = format!("No {}s yet", kind.label().to_lowercase());

    if loading && records.is_empty() {
        return rsx! {
            div { class: "table-placeholder", "Loading..." }
        };
    }

    rsx! {
        Table {
            striped: true,
            hover: true,

            TableHeader {
                TableRow {
                    for column in columns {
                        TableHead {
                            width: column.width,
                            "{column.header}"
                        }
                    }
                }
            }

            TableBody {
                if records.is_empty() {
                    tr {
                        td {
                            class: "tbl-empty",
                            colspan: "{columns.len()}",
                            "{empty_message}"
                        }
                    }
                }

                for record in records.iter_records() {
                    {
                        let key = record.id().to_string();
                        rsx! {
                            TableRow {
                                key: "{key}",
                                for column in columns {
                                    TableCell {
                                        RecordCell { record: record.clone(), key_col: column.key }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RecordCellProps {
    record: Record,
    key_col: schema::ColumnKey,
}

/// One table cell, rendered from its derived [`Cell`] value
#[component]
fn RecordCell(props: RecordCellProps) -> Element {
    match schema::cell(&props.record, props.key_col) {
        Cell::Text(text) => rsx! { "{text}" },
        Cell::Dash => rsx! { span { class: "cell-dash", "-" } },
        Cell::Number(value) => {
            let grouped = schema::group_thousands(value);
            rsx! { "{grouped}" }
        }
        Cell::Badge { label, variant, pill } => rsx! {
            Badge { label, variant, pill }
        },
        Cell::Actions(actions) => rsx! {
            div {
                class: "row-actions",
                for action in actions {
                    {
                        let key = action.label();
                        rsx! {
                            ActionButton {
                                key: "{key}",
                                record: props.record.clone(),
                                action,
                            }
                        }
                    }
                }
            }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct ActionButtonProps {
    record: Record,
    action: RowAction,
}

#[component]
fn ActionButton(props: ActionButtonProps) -> Element {
    let services = use_context::<Services>();
    let action = props.action;
    let record = props.record.clone();
    let label = action.label();

    rsx! {
        Button {
            variant: action.button_variant(),
            size: ButtonSize::Sm,
            onclick: move |_| match action {
                RowAction::Edit => MANAGEMENT.write().begin_edit(record.clone()),
                RowAction::Delete => MANAGEMENT.write().request_delete(record.id()),
                RowAction::Transition(transition) => {
                    perform_transition(services.clone(), record.id(), transition)
                }
            },
            "{label}"
        }
    }
}

// ============================================================================
// Form Dialog
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct RecordFormDialogProps {
    title: String,
    submit_label: String,
    /// The record under edit, shown as a summary line; `None` when creating
    #[props(default)]
    record: Option<Record>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
}

/// Shared dialog chrome for the create and edit forms
#[component]
fn RecordFormDialog(props: RecordFormDialogProps) -> Element {
    let form_kind = MANAGEMENT.read().form.kind();
    let summary = props.record.as_ref().map(record_summary);

    rsx! {
        Dialog {
            open: true,
            title: props.title.clone(),
            size: DialogSize::Large,
            on_close: move |_| props.on_close.call(()),
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| props.on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| props.on_submit.call(()),
                    "{props.submit_label}"
                }
            },

            if let Some(summary) = summary {
                Alert {
                    variant: AlertVariant::Info,
                    "{summary}"
                }
            }

            if form_kind == EntityKind::User {
                UserFormFields {}
            }
            if form_kind == EntityKind::Post {
                PostFormFields {}
            }
        }
    }
}

/// One-line summary of the record under edit, for the dialog's info alert
fn record_summary(record: &Record) -> String {
    let mut summary = format!("ID: {} | Created: {}", record.id(), record.created_at());
    if let Record::Post(post) = record {
        summary.push_str(&format!(" | Views: {}", schema::group_thousands(post.views)));
    }
    summary
}

/// Update the user form through a closure, ignoring a mismatched variant
fn with_user_form(update: impl FnOnce(&mut crate::state::UserForm)) {
    if let FormValues::User(form) = &mut MANAGEMENT.write().form {
        update(form);
    }
}

/// Update the post form through a closure, ignoring a mismatched variant
fn with_post_form(update: impl FnOnce(&mut crate::state::PostForm)) {
    if let FormValues::Post(form) = &mut MANAGEMENT.write().form {
        update(form);
    }
}

/// User create/edit fields, bound to the shared form state
#[component]
fn UserFormFields() -> Element {
    let state = MANAGEMENT.read();
    let FormValues::User(form) = state.form.clone() else {
        return rsx! {};
    };
    let errors = match state.form_errors {
        FormErrors::User(errors) => errors,
        FormErrors::Post(_) => Default::default(),
    };

    let role_options: Vec<SelectOption> = Role::selectable()
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.label()))
        .collect();
    let status_options: Vec<SelectOption> = UserStatus::all()
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect();

    rsx! {
        TextInput {
            value: form.username.clone(),
            label: Some("Username".to_string()),
            required: true,
            error: errors.username.map(str::to_string),
            on_change: move |value| with_user_form(|form| form.username = value),
        }

        TextInput {
            value: form.email.clone(),
            label: Some("Email".to_string()),
            input_type: "email".to_string(),
            required: true,
            error: errors.email.map(str::to_string),
            on_change: move |value| with_user_form(|form| form.email = value),
        }

        Select {
            value: form.role.as_str().to_string(),
            label: Some("Role".to_string()),
            options: role_options,
            on_change: move |value: String| {
                with_user_form(|form| {
                    if let Some(role) = Role::parse(&value) {
                        form.role = role;
                    }
                })
            },
        }

        Select {
            value: form.status.as_str().to_string(),
            label: Some("Status".to_string()),
            options: status_options,
            on_change: move |value: String| {
                with_user_form(|form| {
                    if let Some(status) = UserStatus::parse(&value) {
                        form.status = status;
                    }
                })
            },
        }
    }
}

/// Post create/edit fields, bound to the shared form state
///
/// Status has no control here; the form carries the record's status through
/// unchanged and rows change it via their transition action.
#[component]
fn PostFormFields() -> Element {
    let state = MANAGEMENT.read();
    let FormValues::Post(form) = state.form.clone() else {
        return rsx! {};
    };
    let errors = match state.form_errors {
        FormErrors::Post(errors) => errors,
        FormErrors::User(_) => Default::default(),
    };

    let category_options: Vec<SelectOption> = Category::selectable()
        .iter()
        .map(|c| SelectOption::new(c.as_str(), c.label()))
        .collect();

    rsx! {
        TextInput {
            value: form.title.clone(),
            label: Some("Title".to_string()),
            required: true,
            error: errors.title.map(str::to_string),
            on_change: move |value| with_post_form(|form| form.title = value),
        }

        TextInput {
            value: form.author.clone(),
            label: Some("Author".to_string()),
            required: true,
            error: errors.author.map(str::to_string),
            on_change: move |value| with_post_form(|form| form.author = value),
        }

        Select {
            value: form.category.as_str().to_string(),
            label: Some("Category".to_string()),
            options: category_options,
            on_change: move |value: String| {
                with_post_form(|form| {
                    if let Some(category) = Category::parse(&value) {
                        form.category = category;
                    }
                })
            },
        }

        TextArea {
            value: form.content.clone(),
            label: Some("Content".to_string()),
            rows: 8,
            on_change: move |value| with_post_form(|form| form.content = value),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ManagementState;
    use prism_core::{Post, PostInput, PostStatus, User};

    // State-level behavior is covered in crate::state; the tests here pin
    // the page's service wiring expectations.

    fn draft_input(title: &str) -> PostInput {
        PostInput {
            title: title.to_string(),
            author: "amy".to_string(),
            category: Category::Development,
            status: PostStatus::Draft,
            content: String::new(),
        }
    }

    async fn load(state: &mut ManagementState, services: &Services) {
        let token = state.begin_load();
        let outcome = fetch_records(services, state.kind).await;
        state.apply_load(token, outcome);
    }

    #[tokio::test]
    async fn test_reload_payload_matches_kind() {
        let services = Services::seeded();
        let posts = services.posts.get_all().await.unwrap();
        let records = RecordSet::Posts(posts);
        assert_eq!(records.kind(), EntityKind::Post);
        assert!(!records.is_empty());
    }

    #[tokio::test]
    async fn test_success_banner_appears_over_reloaded_rows() {
        let services = Services::seeded();
        let mut state = ManagementState::new();
        load(&mut state, &services).await;
        let before = state.records.len();

        // The create success path: reload lands before the banner is recorded
        let created = services.posts.create(draft_input("Fresh post")).await.unwrap();
        load(&mut state, &services).await;
        state.close_create();
        state.record_success(created_message(EntityKind::Post));

        assert_eq!(state.success.as_deref(), Some("Post created"));
        assert_eq!(state.records.len(), before + 1);
        assert!(state.records.contains_id(created.id));
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_service() {
        let services = Services::seeded();
        let mut state = ManagementState::new();
        state.open_create();

        // Default post form has an empty title, so the gate must hold
        if let Some(form) = state.validated_form() {
            panic!("blank form passed the submit gate: {:?}", form.kind());
        }

        assert!(state.create_open);
        assert!(!state.form_errors.is_empty());
        assert_eq!(services.posts.get_all().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_delete_requires_armed_confirmation() {
        let services = Services::seeded();
        let mut state = ManagementState::new();

        // No confirmation armed: the gate yields nothing to delete
        assert_eq!(state.take_confirmed_delete(), None);
        assert_eq!(services.posts.get_all().await.unwrap().len(), 6);

        state.request_delete(3);
        let id = state.take_confirmed_delete().unwrap();
        services.posts.delete(id).await.unwrap();
        assert_eq!(services.posts.get_all().await.unwrap().len(), 5);
    }

    #[test]
    fn test_record_summary_lines() {
        let post = Record::Post(Post {
            id: 4,
            title: "Title".to_string(),
            author: "amy".to_string(),
            category: Category::Development,
            status: PostStatus::Published,
            content: String::new(),
            views: 2405,
            created_at: "2025-03-14".to_string(),
        });
        assert_eq!(record_summary(&post), "ID: 4 | Created: 2025-03-14 | Views: 2,405");

        let user = Record::User(User {
            id: 2,
            username: "ben.oliver".to_string(),
            email: "ben.oliver@example.com".to_string(),
            role: Role::Moderator,
            status: UserStatus::Active,
            created_at: "2024-03-02".to_string(),
            last_login: None,
        });
        assert_eq!(record_summary(&user), "ID: 2 | Created: 2024-03-02");
    }

    #[tokio::test]
    async fn test_transition_methods_map_one_to_one() {
        let services = Services::empty();
        let post = services
            .posts
            .create(PostInput {
                title: "Draft post".to_string(),
                author: "amy".to_string(),
                category: Category::Development,
                status: PostStatus::Draft,
                content: String::new(),
            })
            .await
            .unwrap();

        let published = services.posts.publish(post.id).await.unwrap();
        assert_eq!(published.status, PostStatus::Published);

        let archived = services.posts.archive(post.id).await.unwrap();
        assert_eq!(archived.status, PostStatus::Archived);

        let restored = services.posts.restore(post.id).await.unwrap();
        assert_eq!(restored.status, PostStatus::Draft);
    }

    #[test]
    fn test_form_dialog_titles_follow_kind() {
        let state = ManagementState::new();
        assert_eq!(format!("New {}", state.kind.label()), "New Post");
        assert_eq!(format!("Edit {}", state.kind.label()), "Edit Post");
    }
}
