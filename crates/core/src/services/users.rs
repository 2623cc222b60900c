//! User record service
//!
//! In-memory CRUD over [`User`] records. Seeded with demo accounts so the
//! management view has data to show on first load.

use std::sync::{Arc, Mutex};

use crate::error::{ServiceError, ServiceResult};
use crate::records::{Role, User, UserStatus};
use crate::services::today;

// ============================================================================
// Input
// ============================================================================

/// Full editable field set for creating or updating a user
///
/// Updates are whole-record: the service replaces every editable field and
/// preserves `id`, `created_at`, and `last_login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl UserInput {
    fn validate(&self) -> ServiceResult<()> {
        if self.username.trim().is_empty() {
            return Err(ServiceError::Validation("Username is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(ServiceError::Validation("Email is required".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Service
// ============================================================================

struct UserStore {
    rows: Vec<User>,
    next_id: u64,
}

/// Handle to the in-memory user store
#[derive(Clone)]
pub struct UserService {
    inner: Arc<Mutex<UserStore>>,
}

impl Default for UserService {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserService {
    /// Create a service seeded with demo accounts
    pub fn seeded() -> Self {
        let rows = seed_users();
        let next_id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(UserStore { rows, next_id })),
        }
    }

    /// Create a service with no records
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Mutex::new(UserStore {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// All users in insertion order
    pub async fn get_all(&self) -> ServiceResult<Vec<User>> {
        let store = self.lock();
        Ok(store.rows.clone())
    }

    /// Create a user from the given fields
    pub async fn create(&self, input: UserInput) -> ServiceResult<User> {
        input.validate()?;

        let mut store = self.lock();
        let user = User {
            id: store.next_id,
            username: input.username.trim().to_string(),
            email: input.email.trim().to_string(),
            role: input.role,
            status: input.status,
            created_at: today(),
            last_login: None,
        };
        store.next_id += 1;
        store.rows.push(user.clone());

        tracing::debug!(id = user.id, "created user");
        Ok(user)
    }

    /// Replace the editable fields of the user with the given id
    pub async fn update(&self, id: u64, input: UserInput) -> ServiceResult<User> {
        input.validate()?;

        let mut store = self.lock();
        let user = store
            .rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(ServiceError::NotFound(id))?;

        user.username = input.username.trim().to_string();
        user.email = input.email.trim().to_string();
        user.role = input.role;
        user.status = input.status;

        tracing::debug!(id, "updated user");
        Ok(user.clone())
    }

    /// Delete the user with the given id
    pub async fn delete(&self, id: u64) -> ServiceResult<()> {
        let mut store = self.lock();
        let before = store.rows.len();
        store.rows.retain(|u| u.id != id);

        if store.rows.len() == before {
            return Err(ServiceError::NotFound(id));
        }

        tracing::debug!(id, "deleted user");
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UserStore> {
        // A poisoned mutex means a panic mid-mutation; recover the data
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Seed data
// ============================================================================

fn seed_users() -> Vec<User> {
    let user = |id: u64,
                username: &str,
                email: &str,
                role: Role,
                status: UserStatus,
                created_at: &str,
                last_login: Option<&str>| User {
        id,
        username: username.to_string(),
        email: email.to_string(),
        role,
        status,
        created_at: created_at.to_string(),
        last_login: last_login.map(str::to_string),
    };

    vec![
        user(
            1,
            "amy.park",
            "amy.park@example.com",
            Role::Admin,
            UserStatus::Active,
            "2024-01-15",
            Some("2025-06-02"),
        ),
        user(
            2,
            "ben.oliver",
            "ben.oliver@example.com",
            Role::Moderator,
            UserStatus::Active,
            "2024-03-02",
            Some("2025-05-28"),
        ),
        user(
            3,
            "cleo",
            "cleo@example.com",
            Role::User,
            UserStatus::Inactive,
            "2024-07-19",
            Some("2024-11-30"),
        ),
        user(
            4,
            "dmitri.v",
            "dmitri.v@example.com",
            Role::User,
            UserStatus::Suspended,
            "2024-09-08",
            None,
        ),
        user(
            5,
            "elena",
            "elena@example.com",
            Role::Guest,
            UserStatus::Active,
            "2025-02-21",
            None,
        ),
    ]
}

// ============================================================================
// Tests
// ============================================================================
