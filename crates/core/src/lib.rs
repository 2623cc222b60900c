//! # Prism Core
//!
//! Records, errors, and mock record services for Prism Console.
//!
//! This crate provides the foundational building blocks used by the UI:
//!
//! - **Records**: the two managed record kinds (`User`, `Post`) with their
//!   closed enums, plus the tagged `Record`/`RecordSet` containers
//! - **Errors**: unified service error handling with `ServiceError` and
//!   `ServiceResult`
//! - **Services**: seeded in-memory `UserService` and `PostService` exposing
//!   the asynchronous CRUD + status-transition contract
//!

pub mod error;
pub mod records;
pub mod services;

// Re-export commonly used items at crate root
pub use error::{ServiceError, ServiceResult};
pub use records::{
    Category, EntityKind, Post, PostStatus, Record, RecordSet, Role, User, UserStatus,
};
pub use services::{PostInput, PostService, Services, UserInput, UserService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
