//! # Mock record services
//!
//! In-memory service layer backing the management view. Two independent
//! services expose the same asynchronous contract over their own record
//! kind:
//!
//! - **get_all** — the full record set in insertion order
//! - **create / update / delete** — whole-record mutations by id
//! - **publish / archive / restore** — status transitions (posts only)
//!
//! Both services are cheaply cloneable handles over a shared store. The
//! store mutex is only ever held within a single call, never across an
//! await point. Identifiers are assigned by the service and increase
//! monotonically.

pub mod posts;
pub mod users;

pub use posts::{PostInput, PostService};
pub use users::{UserInput, UserService};

/// Both services as a single shareable bundle
///
/// The application creates one bundle at startup and hands clones to
/// whatever needs to call a service; clones share the underlying stores.
#[derive(Clone, Default)]
pub struct Services {
    pub users: UserService,
    pub posts: PostService,
}

impl Services {
    /// Services over the demo data sets
    pub fn seeded() -> Self {
        Self {
            users: UserService::seeded(),
            posts: PostService::seeded(),
        }
    }

    /// Services over empty stores
    pub fn empty() -> Self {
        Self {
            users: UserService::empty(),
            posts: PostService::empty(),
        }
    }
}

/// Today's date in the display format used for `created_at` fields
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
