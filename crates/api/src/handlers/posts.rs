//! Handlers for the `/posts` resource.
//!
//! Create and update accept a multipart form: scalar `title`/`content`
//! fields, JSON-string `images_meta`/`links_data` fields, and a repeated
//! `uploaded_images` file field. The attachment plan is computed and fully
//! validated before any file is stored or row written.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use folio_core::attachments::AttachmentPlan;
use folio_core::error::CoreError;
use folio_core::slug::slugify;
use folio_db::models::post::{CreatePost, PostDetail, UpdatePost};
use folio_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PostForm, UploadedImage};
use crate::middleware::auth::RequireSuperuser;
use crate::state::AppState;

/// GET /api/v1/posts
///
/// Public list of all posts with attachments, newest first.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostDetail>>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/v1/posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PostDetail>> {
    let post = PostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", &slug)))?;
    Ok(Json(post))
}

/// POST /api/v1/posts
///
/// Create a post from a multipart form. Superuser only.
pub async fn create_post(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    form: PostForm,
) -> AppResult<(StatusCode, Json<PostDetail>)> {
    let title = require_title(form.title.as_deref())?;

    // Validate the whole attachment payload before touching storage or the
    // database.
    let plan = AttachmentPlan::build(
        form.images_meta.as_deref(),
        form.links_data.as_deref(),
        form.uploaded_images.len(),
    )
    .map_err(AppError::Core)?;

    let image_urls = store_images(&state, &form.uploaded_images).await?;

    let base = slugify(&title);
    let slug = PostRepo::available_slug(&state.pool, &base).await?;

    let input = CreatePost {
        title,
        content: form.content.unwrap_or_default(),
    };
    let detail = PostRepo::create(&state.pool, &input, &slug, &plan, &image_urls).await?;

    tracing::info!(
        post_id = detail.post.id,
        slug = %detail.post.slug,
        images = detail.images.len(),
        links = detail.links.len(),
        user_id = admin.user_id,
        "Post created",
    );

    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/v1/posts/{slug}
///
/// Update a post from a multipart form. Superuser only.
///
/// Both attachment collections are rebuilt from this form alone: a call
/// without `uploaded_images` leaves the post with zero images, and a call
/// without `links_data` leaves it with zero links. The slug never changes.
pub async fn update_post(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    form: PostForm,
) -> AppResult<Json<PostDetail>> {
    let existing = PostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", &slug)))?;

    let plan = AttachmentPlan::build(
        form.images_meta.as_deref(),
        form.links_data.as_deref(),
        form.uploaded_images.len(),
    )
    .map_err(AppError::Core)?;

    let image_urls = store_images(&state, &form.uploaded_images).await?;

    let input = UpdatePost {
        title: form.title,
        content: form.content,
    };
    let detail = PostRepo::update(&state.pool, existing.post.id, &input, &plan, &image_urls)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Post", &slug)))?;

    tracing::info!(
        post_id = detail.post.id,
        slug = %slug,
        images = detail.images.len(),
        links = detail.links.len(),
        user_id = admin.user_id,
        "Post updated",
    );

    Ok(Json(detail))
}

/// DELETE /api/v1/posts/{slug}
///
/// Delete a post and, via cascade, its attachments. Superuser only.
pub async fn delete_post(
    RequireSuperuser(admin): RequireSuperuser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = PostRepo::delete_by_slug(&state.pool, &slug).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Post", &slug)));
    }

    tracing::info!(slug = %slug, user_id = admin.user_id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_title(title: Option<&str>) -> Result<String, AppError> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t.to_string()),
        _ => Err(AppError::Core(CoreError::Validation(
            "title is required".into(),
        ))),
    }
}

/// Persist the uploaded files in order, returning their public URLs.
async fn store_images(
    state: &AppState,
    uploads: &[UploadedImage],
) -> Result<Vec<String>, AppError> {
    let mut urls = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let url = state
            .storage
            .store_image(&upload.file_name, &upload.bytes)
            .await?;
        urls.push(url);
    }
    Ok(urls)
}
