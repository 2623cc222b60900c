//! Page Components
//!
//! Prism Console has a single page: the record management view.

pub mod management;

pub use management::ManagementPage;
