//! Slug derivation for blog posts.
//!
//! A post's slug is derived from its title once, at creation, and never
//! changes afterwards. Collision suffixing (`-2`, `-3`, ...) happens in the
//! repository layer where existing slugs can be consulted.

/// Fallback slug when a title contains no alphanumeric characters at all.
const EMPTY_SLUG: &str = "post";

/// Derive a URL-safe slug from a post title.
///
/// Lowercases the title and collapses every run of non-alphanumeric
/// characters into a single hyphen. Leading and trailing hyphens are
/// stripped.
///
/// # Examples
///
/// ```
/// use folio_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Rust & Axum  "), "rust-axum");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn punctuation_collapses() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("C++ -- the good parts"), "c-the-good-parts");
    }

    #[test]
    fn leading_and_trailing_separators_stripped() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
        assert_eq!(slugify("---dashes---"), "dashes");
    }

    #[test]
    fn unicode_is_lowercased() {
        assert_eq!(slugify("Écrire du Rust"), "écrire-du-rust");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(slugify("Top 10 tips (2025)"), "top-10-tips-2025");
    }

    #[test]
    fn empty_title_falls_back() {
        assert_eq!(slugify(""), "post");
        assert_eq!(slugify("!!!"), "post");
    }
}
