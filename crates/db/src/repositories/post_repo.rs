//! Repository for blog posts and their attachment collections.
//!
//! Attachment writes follow the plan computed by
//! [`folio_core::attachments::AttachmentPlan`]: the caller validates and
//! stores the uploaded files first, then hands this repository the final
//! target state. Create and update each run in a single transaction, so a
//! failure while writing links leaves no half-written image rows behind.

use std::collections::HashMap;

use sqlx::PgPool;

use folio_core::attachments::AttachmentPlan;
use folio_core::types::DbId;

use crate::models::post::{CreatePost, Post, PostDetail, PostImage, PostLink, UpdatePost};

/// Column list for `posts` queries.
const POST_COLUMNS: &str = "id, title, slug, content, created_at";

/// Provides CRUD operations for posts with embedded attachments.
pub struct PostRepo;

impl PostRepo {
    /// List all posts with their attachments, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PostDetail>, sqlx::Error> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC");
        let posts = sqlx::query_as::<_, Post>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = posts.iter().map(|p| p.id).collect();

        // Image order follows insertion (upload) order, hence ORDER BY id.
        let images = sqlx::query_as::<_, PostImage>(
            "SELECT id, post_id, image_url, caption FROM post_images \
             WHERE post_id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let links = sqlx::query_as::<_, PostLink>(
            "SELECT id, post_id, url, text FROM post_links WHERE post_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut images_by_post: HashMap<DbId, Vec<PostImage>> = HashMap::new();
        for image in images {
            images_by_post.entry(image.post_id).or_default().push(image);
        }
        let mut links_by_post: HashMap<DbId, Vec<PostLink>> = HashMap::new();
        for link in links {
            links_by_post.entry(link.post_id).or_default().push(link);
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let images = images_by_post.remove(&post.id).unwrap_or_default();
                let links = links_by_post.remove(&post.id).unwrap_or_default();
                PostDetail { post, images, links }
            })
            .collect())
    }

    /// Find a post by slug, with attachments.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PostDetail>, sqlx::Error> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;

        match post {
            Some(post) => Ok(Some(Self::load_detail(pool, post).await?)),
            None => Ok(None),
        }
    }

    /// Pick the first free slug for a new post: the base itself, then
    /// `base-2`, `base-3`, and so on.
    pub async fn available_slug(pool: &PgPool, base: &str) -> Result<String, sqlx::Error> {
        let mut candidate = base.to_string();
        let mut suffix = 2;
        loop {
            let (exists,): (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM posts WHERE slug = $1)")
                    .bind(&candidate)
                    .fetch_one(pool)
                    .await?;
            if !exists {
                return Ok(candidate);
            }
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
    }

    /// Insert a post and its attachment rows in one transaction.
    ///
    /// `image_urls` are the stored locations of the uploaded files, in
    /// upload order; the plan's captions are aligned index-for-index.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePost,
        slug: &str,
        plan: &AttachmentPlan,
        image_urls: &[String],
    ) -> Result<PostDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO posts (title, slug, content) VALUES ($1, $2, $3) \
             RETURNING {POST_COLUMNS}"
        );
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .fetch_one(&mut *tx)
            .await?;

        apply_attachments(&mut tx, post.id, plan, image_urls).await?;

        tx.commit().await?;

        Self::load_detail(pool, post).await
    }

    /// Update a post's scalar fields and replace both attachment
    /// collections in one transaction.
    ///
    /// The existing image and link rows are deleted unconditionally before
    /// the plan is applied. A call that supplies no uploaded images
    /// therefore clears every image the post had; callers rely on this
    /// exact behavior.
    ///
    /// Returns `None` if no post with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
        plan: &AttachmentPlan,
        image_urls: &[String],
    ) -> Result<Option<PostDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE posts SET \
                 title = COALESCE($2, title), \
                 content = COALESCE($3, content) \
             WHERE id = $1 \
             RETURNING {POST_COLUMNS}"
        );
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.content.as_deref())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(post) = post else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM post_images WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM post_links WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        apply_attachments(&mut tx, id, plan, image_urls).await?;

        tx.commit().await?;

        Ok(Some(Self::load_detail(pool, post).await?))
    }

    /// Delete a post by slug. Attachment rows go with it via cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load the attachment collections for an already-fetched post row.
    async fn load_detail(pool: &PgPool, post: Post) -> Result<PostDetail, sqlx::Error> {
        let images = sqlx::query_as::<_, PostImage>(
            "SELECT id, post_id, image_url, caption FROM post_images \
             WHERE post_id = $1 ORDER BY id",
        )
        .bind(post.id)
        .fetch_all(pool)
        .await?;

        let links = sqlx::query_as::<_, PostLink>(
            "SELECT id, post_id, url, text FROM post_links WHERE post_id = $1",
        )
        .bind(post.id)
        .fetch_all(pool)
        .await?;

        Ok(PostDetail { post, images, links })
    }
}

/// Insert the plan's image and link rows for a post. Image rows are written
/// in upload order so their serial ids preserve it.
async fn apply_attachments(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    post_id: DbId,
    plan: &AttachmentPlan,
    image_urls: &[String],
) -> Result<(), sqlx::Error> {
    debug_assert_eq!(plan.captions.len(), image_urls.len());

    for (url, caption) in image_urls.iter().zip(&plan.captions) {
        sqlx::query("INSERT INTO post_images (post_id, image_url, caption) VALUES ($1, $2, $3)")
            .bind(post_id)
            .bind(url)
            .bind(caption)
            .execute(&mut **tx)
            .await?;
    }

    for link in &plan.links {
        sqlx::query("INSERT INTO post_links (post_id, url, text) VALUES ($1, $2, $3)")
            .bind(post_id)
            .bind(&link.url)
            .bind(&link.text)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}
