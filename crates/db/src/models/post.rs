//! Blog post models: the post row, its attachment rows, and the composite
//! detail shape returned over HTTP.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    /// Derived from the title at creation; immutable afterwards.
    pub slug: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// A row from the `post_images` table. Rows are returned in upload order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostImage {
    pub id: DbId,
    pub post_id: DbId,
    pub image_url: String,
    pub caption: String,
}

/// A row from the `post_links` table. Links carry no ordering guarantee.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostLink {
    pub id: DbId,
    pub post_id: DbId,
    pub url: String,
    pub text: String,
}

/// A post with both attachment collections embedded.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub images: Vec<PostImage>,
    pub links: Vec<PostLink>,
}

/// Scalar fields accepted when creating a post. The attachment fields of
/// the multipart form are handled separately via an attachment plan.
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

/// Scalar fields accepted when updating a post; `None` keeps the stored
/// value. The slug is never updatable.
#[derive(Debug, Clone, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
}
