//! Post record service
//!
//! In-memory CRUD plus status transitions over [`Post`] records. `publish`,
//! `archive`, and `restore` are separate calls rather than a generic status
//! update so the view maps each row action 1:1 to a service method.

use std::sync::{Arc, Mutex};

use crate::error::{ServiceError, ServiceResult};
use crate::records::{Category, Post, PostStatus};
use crate::services::today;

// ============================================================================
// Input
// ============================================================================

/// Full editable field set for creating or updating a post
///
/// `views` and `created_at` are service-owned and never part of the input;
/// new posts start at zero views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub status: PostStatus,
    pub content: String,
}

impl PostInput {
    fn validate(&self) -> ServiceResult<()> {
        if self.title.trim().is_empty() {
            return Err(ServiceError::Validation("Title is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(ServiceError::Validation("Author is required".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Service
// ============================================================================

struct PostStore {
    rows: Vec<Post>,
    next_id: u64,
}

/// Handle to the in-memory post store
#[derive(Clone)]
pub struct PostService {
    inner: Arc<Mutex<PostStore>>,
}

impl Default for PostService {
    fn default() -> Self {
        Self::seeded()
    }
}

impl PostService {
    /// Create a service seeded with demo posts
    pub fn seeded() -> Self {
        let rows = seed_posts();
        let next_id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(PostStore { rows, next_id })),
        }
    }

    /// Create a service with no records
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Mutex::new(PostStore {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// All posts in insertion order
    pub async fn get_all(&self) -> ServiceResult<Vec<Post>> {
        let store = self.lock();
        Ok(store.rows.clone())
    }

    /// Create a post from the given fields
    pub async fn create(&self, input: PostInput) -> ServiceResult<Post> {
        input.validate()?;

        let mut store = self.lock();
        let post = Post {
            id: store.next_id,
            title: input.title.trim().to_string(),
            author: input.author.trim().to_string(),
            category: input.category,
            status: input.status,
            content: input.content,
            views: 0,
            created_at: today(),
        };
        store.next_id += 1;
        store.rows.push(post.clone());

        tracing::debug!(id = post.id, "created post");
        Ok(post)
    }

    /// Replace the editable fields of the post with the given id
    pub async fn update(&self, id: u64, input: PostInput) -> ServiceResult<Post> {
        input.validate()?;

        let mut store = self.lock();
        let post = store
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ServiceError::NotFound(id))?;

        post.title = input.title.trim().to_string();
        post.author = input.author.trim().to_string();
        post.category = input.category;
        post.status = input.status;
        post.content = input.content;

        tracing::debug!(id, "updated post");
        Ok(post.clone())
    }

    /// Delete the post with the given id
    pub async fn delete(&self, id: u64) -> ServiceResult<()> {
        let mut store = self.lock();
        let before = store.rows.len();
        store.rows.retain(|p| p.id != id);

        if store.rows.len() == before {
            return Err(ServiceError::NotFound(id));
        }

        tracing::debug!(id, "deleted post");
        Ok(())
    }

    /// Move the post to Published
    pub async fn publish(&self, id: u64) -> ServiceResult<Post> {
        self.set_status(id, PostStatus::Published)
    }

    /// Move the post to Archived
    pub async fn archive(&self, id: u64) -> ServiceResult<Post> {
        self.set_status(id, PostStatus::Archived)
    }

    /// Return an archived post to Draft
    pub async fn restore(&self, id: u64) -> ServiceResult<Post> {
        self.set_status(id, PostStatus::Draft)
    }

    fn set_status(&self, id: u64, status: PostStatus) -> ServiceResult<Post> {
        let mut store = self.lock();
        let post = store
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ServiceError::NotFound(id))?;

        post.status = status;
        tracing::debug!(id, status = status.as_str(), "changed post status");
        Ok(post.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PostStore> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Seed data
// ============================================================================

fn seed_posts() -> Vec<Post> {
    let post = |id: u64,
                title: &str,
                author: &str,
                category: Category,
                status: PostStatus,
                views: u64,
                created_at: &str| Post {
        id,
        title: title.to_string(),
        author: author.to_string(),
        category,
        status,
        content: format!("Full text of \"{}\".", title),
        views,
        created_at: created_at.to_string(),
    };

    vec![
        post(
            1,
            "Design tokens in practice",
            "amy.park",
            Category::Design,
            PostStatus::Published,
            1523,
            "2025-01-10",
        ),
        post(
            2,
            "Composable table components",
            "ben.oliver",
            Category::Development,
            PostStatus::Published,
            987,
            "2025-02-03",
        ),
        post(
            3,
            "Keyboard navigation for dialogs",
            "cleo",
            Category::Accessibility,
            PostStatus::Draft,
            0,
            "2025-03-17",
        ),
        post(
            4,
            "Theming dark mode with variables",
            "amy.park",
            Category::Design,
            PostStatus::Draft,
            12,
            "2025-04-22",
        ),
        post(
            5,
            "Retiring the legacy badge styles",
            "ben.oliver",
            Category::Development,
            PostStatus::Archived,
            2405,
            "2024-11-05",
        ),
        post(
            6,
            "Color contrast audits that scale",
            "elena",
            Category::Accessibility,
            PostStatus::Published,
            311,
            "2025-05-30",
        ),
    ]
}

// ============================================================================
// Tests
// ============================================================================
