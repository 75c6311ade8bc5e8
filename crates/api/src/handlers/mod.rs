//! HTTP handlers, one module per resource.

pub mod about;
pub mod auth;
pub mod contact;
pub mod experiences;
pub mod hero;
pub mod posts;
pub mod projects;
pub mod skills;
pub mod users;

use validator::Validate;

use crate::error::AppError;

/// Run validator-derive checks on a DTO, mapping the first failure into a
/// single human-readable message.
pub(crate) fn validate_dto(input: &impl Validate) -> Result<(), AppError> {
    input.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("invalid value for '{field}'"),
                })
            })
            .next()
            .unwrap_or_else(|| "invalid input".to_string());
        AppError::BadRequest(message)
    })
}
