//! Post attachment reconciliation.
//!
//! Blog posts carry their image and link attachments inside a multipart
//! form: two JSON-encoded string fields (`images_meta`, `links_data`) plus
//! a repeated `uploaded_images` file field. This module turns that wire
//! shape into an [`AttachmentPlan`] — the complete target state of both
//! collections — before a single row is touched. The persistence layer then
//! applies the plan (delete existing rows, insert the plan's rows) inside
//! one transaction.
//!
//! Making the plan explicit keeps a surprising contract visible: on update
//! the existing attachment rows are always deleted, so a plan built from an
//! empty form clears both collections. Callers that omit `uploaded_images`
//! on an update lose every image the post had. That is the documented
//! behavior of this API, not an accident of the implementation.

use serde::Deserialize;

use crate::error::CoreError;

/// A link attachment in its validated form: both fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLink {
    pub url: String,
    pub text: String,
}

/// Target state for a post's attachment collections.
///
/// Invariant: `captions.len()` equals the number of uploaded image files
/// the plan was built for; caption `i` belongs to file `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPlan {
    pub captions: Vec<String>,
    pub links: Vec<PostLink>,
}

/// One entry of the `images_meta` JSON array. Only `caption` is meaningful;
/// a missing caption reads as the empty string.
#[derive(Debug, Deserialize)]
struct ImageMetaEntry {
    #[serde(default)]
    caption: String,
}

/// One entry of the `links_data` JSON array, before presence validation.
#[derive(Debug, Deserialize)]
struct LinkEntry {
    url: Option<String>,
    text: Option<String>,
}

impl AttachmentPlan {
    /// Build the target attachment state from the raw form fields.
    ///
    /// `image_count` is the number of files in the `uploaded_images` field,
    /// in upload order.
    ///
    /// Validation rules, all checked before any caller-side write:
    /// - malformed JSON in either field fails, naming the offending field;
    /// - fewer caption entries than files: the tail is padded with empty
    ///   captions; more caption entries than files: validation failure;
    /// - every link object must carry both `url` and `text`.
    pub fn build(
        images_meta: Option<&str>,
        links_data: Option<&str>,
        image_count: usize,
    ) -> Result<Self, CoreError> {
        let mut captions = parse_captions(images_meta)?;

        // Pad short metadata with empty captions; surplus entries are a
        // client error, not something to truncate silently.
        while captions.len() < image_count {
            captions.push(String::new());
        }
        if captions.len() != image_count {
            return Err(CoreError::Validation(
                "The number of uploaded images and images_meta entries must match.".into(),
            ));
        }

        let links = parse_links(links_data)?;

        Ok(Self { captions, links })
    }
}

fn parse_captions(images_meta: Option<&str>) -> Result<Vec<String>, CoreError> {
    let raw = match images_meta {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(Vec::new()),
    };

    let entries: Vec<ImageMetaEntry> = serde_json::from_str(raw)
        .map_err(|_| CoreError::Validation("Invalid JSON format for images_meta.".into()))?;

    Ok(entries.into_iter().map(|e| e.caption).collect())
}

fn parse_links(links_data: Option<&str>) -> Result<Vec<PostLink>, CoreError> {
    let raw = match links_data {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(Vec::new()),
    };

    let entries: Vec<LinkEntry> = serde_json::from_str(raw)
        .map_err(|_| CoreError::Validation("Invalid JSON format for links_data.".into()))?;

    entries
        .into_iter()
        .map(|entry| match (entry.url, entry.text) {
            (Some(url), Some(text)) => Ok(PostLink { url, text }),
            _ => Err(CoreError::Validation(
                "Each link must have 'url' and 'text'.".into(),
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn captions_align_with_files() {
        let plan = AttachmentPlan::build(
            Some(r#"[{"caption": "first"}, {"caption": "second"}]"#),
            None,
            2,
        )
        .unwrap();
        assert_eq!(plan.captions, vec!["first", "second"]);
        assert!(plan.links.is_empty());
    }

    #[test]
    fn short_metadata_is_padded_with_empty_captions() {
        let plan = AttachmentPlan::build(Some(r#"[{"caption": "only"}]"#), None, 3).unwrap();
        assert_eq!(plan.captions, vec!["only", "", ""]);
    }

    #[test]
    fn missing_metadata_pads_everything() {
        let plan = AttachmentPlan::build(None, None, 2).unwrap();
        assert_eq!(plan.captions, vec!["", ""]);
    }

    #[test]
    fn missing_caption_key_reads_as_empty() {
        let plan = AttachmentPlan::build(Some(r#"[{}, {"caption": "x"}]"#), None, 2).unwrap();
        assert_eq!(plan.captions, vec!["", "x"]);
    }

    #[test]
    fn surplus_metadata_fails() {
        let err = AttachmentPlan::build(Some(r#"[{"caption": "a"}, {"caption": "b"}]"#), None, 1)
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("must match"));
        });
    }

    #[test]
    fn surplus_metadata_fails_even_with_zero_files() {
        let err = AttachmentPlan::build(Some(r#"[{"caption": "a"}]"#), None, 0).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn malformed_images_meta_names_the_field() {
        let err = AttachmentPlan::build(Some("{not json"), None, 1).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("images_meta"));
        });
    }

    #[test]
    fn malformed_links_data_names_the_field() {
        let err = AttachmentPlan::build(None, Some("[{\"url\""), 0).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("links_data"));
        });
    }

    #[test]
    fn links_parse_in_order() {
        let plan = AttachmentPlan::build(
            None,
            Some(r#"[{"url": "https://a.dev", "text": "A"}, {"url": "https://b.dev", "text": "B"}]"#),
            0,
        )
        .unwrap();
        assert_eq!(
            plan.links,
            vec![
                PostLink { url: "https://a.dev".into(), text: "A".into() },
                PostLink { url: "https://b.dev".into(), text: "B".into() },
            ]
        );
    }

    #[test]
    fn link_missing_url_fails() {
        let err =
            AttachmentPlan::build(None, Some(r#"[{"text": "no url here"}]"#), 0).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("'url' and 'text'"));
        });
    }

    #[test]
    fn link_missing_text_fails_even_after_valid_entries() {
        let err = AttachmentPlan::build(
            None,
            Some(r#"[{"url": "https://ok.dev", "text": "ok"}, {"url": "https://bad.dev"}]"#),
            0,
        )
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn empty_form_yields_empty_plan() {
        let plan = AttachmentPlan::build(None, None, 0).unwrap();
        assert!(plan.captions.is_empty());
        assert!(plan.links.is_empty());
    }

    // The plan for an update that omits uploaded_images is an empty target
    // state. Applying it deletes every existing image row: omitting the
    // field is indistinguishable from asking for zero images. Documented
    // caller-visible behavior, asserted here on purpose.
    #[test]
    fn update_form_without_uploads_targets_zero_images() {
        let plan = AttachmentPlan::build(
            None,
            Some(r#"[{"url": "https://kept.dev", "text": "links survive"}]"#),
            0,
        )
        .unwrap();
        assert!(plan.captions.is_empty());
        assert_eq!(plan.links.len(), 1);
    }

    #[test]
    fn blank_strings_are_treated_as_absent() {
        let plan = AttachmentPlan::build(Some("  "), Some(""), 1).unwrap();
        assert_eq!(plan.captions, vec![""]);
        assert!(plan.links.is_empty());
    }
}
