//! Request-body extraction for the upload-bearing resources.
//!
//! Posts arrive as multipart forms (scalar fields + two JSON-string fields
//! + a repeated file field). Projects accept either a JSON body or a
//! multipart form; [`ProjectInput`] normalizes both into one shape, with
//! the `skills` field recovered from any of its wire encodings.

use axum::extract::multipart::Multipart;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;

use folio_core::skills::recover_names;
use folio_db::models::project::UpdateProject;

use crate::error::AppError;

/// One file from a repeated multipart file field, in submission order.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Post form
// ---------------------------------------------------------------------------

/// Collected multipart fields for post create/update.
#[derive(Debug, Default)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: Option<String>,
    /// JSON array of `{ "caption": ... }` objects, still unparsed.
    pub images_meta: Option<String>,
    /// JSON array of `{ "url": ..., "text": ... }` objects, still unparsed.
    pub links_data: Option<String>,
    /// Files from the repeated `uploaded_images` field, in upload order.
    pub uploaded_images: Vec<UploadedImage>,
}

impl PostForm {
    /// Drain a multipart stream into the form. Unknown fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "title" => form.title = Some(read_text(field).await?),
                "content" => form.content = Some(read_text(field).await?),
                "images_meta" => form.images_meta = Some(read_text(field).await?),
                "links_data" => form.links_data = Some(read_text(field).await?),
                "uploaded_images" | "uploaded_images[]" => {
                    form.uploaded_images.push(read_file(field).await?);
                }
                _ => {} // ignore unknown fields
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for PostForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Self::from_multipart(multipart).await
    }
}

// ---------------------------------------------------------------------------
// Project input
// ---------------------------------------------------------------------------

/// JSON body shape for project create/update.
#[derive(Debug, Default, Deserialize)]
struct ProjectJsonBody {
    title: Option<String>,
    description: Option<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    /// A structured list; `Some(vec![])` clears the skill set, `None`
    /// leaves it untouched.
    skills: Option<Vec<String>>,
}

/// Normalized project payload, whichever encoding it arrived in.
#[derive(Debug, Default)]
pub struct ProjectInput {
    pub scalars: UpdateProject,
    /// `None` = no skill data in any shape; `Some` = replace the set.
    pub skills: Option<Vec<String>>,
    /// Media files, only ever present on multipart requests.
    pub media_files: Vec<UploadedImage>,
}

impl ProjectInput {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut input = Self::default();
        let mut skill_values: Vec<String> = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "title" => input.scalars.title = Some(read_text(field).await?),
                "description" => input.scalars.description = Some(read_text(field).await?),
                "github_url" => input.scalars.github_url = Some(read_text(field).await?),
                "live_url" => input.scalars.live_url = Some(read_text(field).await?),
                "skills" | "skills[]" => skill_values.push(read_text(field).await?),
                "media_files" | "media_files[]" => {
                    input.media_files.push(read_file(field).await?);
                }
                _ => {} // ignore unknown fields
            }
        }

        input.skills = recover_names(&skill_values);
        Ok(input)
    }

    fn from_json(body: ProjectJsonBody) -> Self {
        Self {
            scalars: UpdateProject {
                title: body.title,
                description: body.description,
                github_url: body.github_url,
                live_url: body.live_url,
            },
            skills: body.skills,
            media_files: Vec::new(),
        }
    }
}

impl<S> FromRequest<S> for ProjectInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            Self::from_multipart(multipart).await
        } else {
            let axum::Json(body) = axum::Json::<ProjectJsonBody>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            Ok(Self::from_json(body))
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn read_file(field: axum::extract::multipart::Field<'_>) -> Result<UploadedImage, AppError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(UploadedImage {
        file_name,
        bytes: bytes.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::Request;

    use super::*;

    const BOUNDARY: &str = "test-boundary";

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(name: &str, filename: &str, contents: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n{contents}\r\n"
        )
    }

    fn multipart_request(parts: &[String]) -> Request<Body> {
        let body = format!("{}--{BOUNDARY}--\r\n", parts.concat());
        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn post_form_collects_fields_and_files_in_order() {
        let req = multipart_request(&[
            text_part("title", "A post"),
            text_part("images_meta", r#"[{"caption": "one"}]"#),
            file_part("uploaded_images", "first.png", "AAA"),
            file_part("uploaded_images", "second.png", "BBB"),
            text_part("ignored", "whatever"),
        ]);

        let form = PostForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.title.as_deref(), Some("A post"));
        assert_eq!(form.images_meta.as_deref(), Some(r#"[{"caption": "one"}]"#));
        assert!(form.links_data.is_none());
        assert_eq!(form.uploaded_images.len(), 2);
        assert_eq!(form.uploaded_images[0].file_name, "first.png");
        assert_eq!(form.uploaded_images[1].bytes, b"BBB");
    }

    #[tokio::test]
    async fn project_multipart_recovers_repeated_skills() {
        let req = multipart_request(&[
            text_part("title", "Tool"),
            text_part("skills", "Rust"),
            text_part("skills", "Axum"),
            file_part("media_files[]", "shot.png", "IMG"),
        ]);

        let input = ProjectInput::from_request(req, &()).await.unwrap();
        assert_eq!(input.scalars.title.as_deref(), Some("Tool"));
        assert_eq!(
            input.skills,
            Some(vec!["Rust".to_string(), "Axum".to_string()])
        );
        assert_eq!(input.media_files.len(), 1);
    }

    #[tokio::test]
    async fn project_multipart_parses_json_encoded_skills_field() {
        let req = multipart_request(&[text_part("skills", r#"["Rust", "Postgres"]"#)]);

        let input = ProjectInput::from_request(req, &()).await.unwrap();
        assert_eq!(
            input.skills,
            Some(vec!["Rust".to_string(), "Postgres".to_string()])
        );
    }

    #[tokio::test]
    async fn project_multipart_without_skill_fields_yields_none() {
        let req = multipart_request(&[text_part("title", "No skills here")]);

        let input = ProjectInput::from_request(req, &()).await.unwrap();
        assert_eq!(input.skills, None);
        assert!(input.media_files.is_empty());
    }

    #[tokio::test]
    async fn project_json_body_with_empty_skills_is_explicitly_empty() {
        let req = Request::builder()
            .method("PUT")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"skills": []}"#))
            .unwrap();

        let input = ProjectInput::from_request(req, &()).await.unwrap();
        assert_eq!(input.skills, Some(vec![]));
        assert!(input.media_files.is_empty());
        assert!(input.scalars.title.is_none());
    }

    #[tokio::test]
    async fn project_json_body_carries_scalars() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"title": "T", "github_url": "https://github.com/x/y"}"#,
            ))
            .unwrap();

        let input = ProjectInput::from_request(req, &()).await.unwrap();
        assert_eq!(input.scalars.title.as_deref(), Some("T"));
        assert_eq!(
            input.scalars.github_url.as_deref(),
            Some("https://github.com/x/y")
        );
        assert_eq!(input.skills, None);
    }
}
