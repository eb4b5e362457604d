//! Turns raw model output into a fragment that can be placed in the surface's
//! root container.
//!
//! Every step is a regex rewrite. A pattern that fails to compile is skipped,
//! so [`normalize`] always returns something renderable.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn fence_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)```(?:html)?").ok())
        .as_ref()
}

fn body_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").ok())
        .as_ref()
}

/// `<Image src="x" />`, `<Image src={"x"} />`
fn quoted_image_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r#"(?i)<Image[^>]*src=\{?\s*["']([^"'}]+)["']\s*\}?[^>]*/>"#).ok()
        })
        .as_ref()
}

/// `<Image src={heroImage} />`
fn bare_image_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r#"(?i)<Image[^>]*src=\{?\s*([^\s}]+)\s*\}?[^>]*/>"#).ok())
        .as_ref()
}

fn img_src_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r#"(?i)(<img\b[^>]*?\ssrc\s*=\s*["'])(/[^"']*)"#).ok())
        .as_ref()
}

/// Normalize generated markup for the render surface.
///
/// `origin` is the host page origin (`scheme://host[:port]`), used to make
/// root-relative image sources absolute. Applying the function to its own
/// output returns the output unchanged.
pub fn normalize(raw: &str, origin: &str) -> String {
    let html = strip_fences(raw);
    let html = extract_body(&html);
    let html = rewrite_image_components(&html);
    absolutize_image_sources(&html, origin)
}

pub fn strip_fences(raw: &str) -> String {
    match fence_pattern() {
        Some(pattern) => pattern.replace_all(raw, "").into_owned(),
        None => raw.to_string(),
    }
}

/// Keep only the inner content of the first `<body>` element, if any.
pub fn extract_body(html: &str) -> String {
    body_pattern()
        .and_then(|pattern| pattern.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str().to_string())
        .unwrap_or_else(|| html.to_string())
}

/// Replace framework `<Image .../>` components with plain `<img>` tags.
pub fn rewrite_image_components(html: &str) -> String {
    let mut html = html.to_string();
    for pattern in [quoted_image_pattern(), bare_image_pattern()]
        .into_iter()
        .flatten()
    {
        html = pattern
            .replace_all(&html, r#"<img src="${1}" />"#)
            .into_owned();
    }
    html
}

/// Prefix root-relative `<img src="/...">` values with `origin`.
///
/// Protocol-relative sources (`//cdn...`) already name a host and are kept.
pub fn absolutize_image_sources(html: &str, origin: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let Some(pattern) = img_src_pattern().filter(|_| !origin.is_empty()) else {
        return html.to_string();
    };

    pattern
        .replace_all(html, |caps: &Captures| {
            let path = &caps[2];
            if path.starts_with("//") {
                format!("{}{}", &caps[1], path)
            } else {
                format!("{}{}{}", &caps[1], origin, path)
            }
        })
        .into_owned()
}
