//! Properties the settings panels read and write on the selected element.

use super::SelectedElementKind;

pub const GENERIC_STYLE_PROPERTIES: [&str; 6] = [
    "font-size",
    "color",
    "background-color",
    "padding",
    "border-radius",
    "text-align",
];

pub const IMAGE_STYLE_PROPERTIES: [&str; 4] = ["width", "height", "border-radius", "object-fit"];

pub const IMAGE_ATTRIBUTES: [&str; 2] = ["src", "alt"];

pub const FONT_SIZES: [&str; 9] = [
    "12px", "14px", "16px", "18px", "20px", "24px", "32px", "48px", "64px",
];

pub const TEXT_ALIGNMENTS: [&str; 4] = ["left", "center", "right", "justify"];

pub const OBJECT_FITS: [&str; 5] = ["fill", "contain", "cover", "none", "scale-down"];

pub fn captured_style_properties(kind: SelectedElementKind) -> &'static [&'static str] {
    match kind {
        SelectedElementKind::Image => &IMAGE_STYLE_PROPERTIES,
        SelectedElementKind::Generic => &GENERIC_STYLE_PROPERTIES,
    }
}

pub fn captured_attributes(kind: SelectedElementKind) -> &'static [&'static str] {
    match kind {
        SelectedElementKind::Image => &IMAGE_ATTRIBUTES,
        SelectedElementKind::Generic => &[],
    }
}

/// Interpret a length typed into a panel: bare numbers are pixels, anything
/// else (`50%`, `2rem`, `auto`) is passed through. Blank means "unset".
pub fn css_length(input: &str) -> String {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.parse::<f64>().is_ok() {
        format!("{trimmed}px")
    } else {
        trimmed.to_string()
    }
}

/// Numeric part of a pixel value, for number inputs (`"12px"` -> `"12"`).
pub fn px_number(value: &str) -> String {
    value.trim().trim_end_matches("px").trim().to_string()
}

/// `#rrggbb` form of a CSS color, for `<input type="color">`. Accepts hex
/// and the `rgb()`/`rgba()` form browsers report; anything else is `None`.
pub fn color_to_hex(value: &str) -> Option<String> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        let valid = hex.chars().all(|c| c.is_ascii_hexdigit());
        return match hex.len() {
            6 if valid => Some(format!("#{}", hex.to_ascii_lowercase())),
            3 if valid => Some(
                hex.chars()
                    .flat_map(|c| [c, c])
                    .fold(String::from("#"), |mut out, c| {
                        out.push(c.to_ascii_lowercase());
                        out
                    }),
            ),
            _ => None,
        };
    }

    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let channels: Vec<u8> = inner
        .split(',')
        .take(3)
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(format!("#{r:02x}{g:02x}{b:02x}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_colors_to_hex() {
        assert_eq!(color_to_hex("rgb(255, 0, 16)").as_deref(), Some("#ff0010"));
        assert_eq!(color_to_hex("rgba(0, 0, 0, 0.5)").as_deref(), Some("#000000"));
        assert_eq!(color_to_hex("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(color_to_hex("#1e293b").as_deref(), Some("#1e293b"));
        assert_eq!(color_to_hex("red"), None);
        assert_eq!(color_to_hex(""), None);
    }

    #[test]
    fn bare_numbers_become_pixels() {
        assert_eq!(css_length("12"), "12px");
        assert_eq!(css_length(" 4.5 "), "4.5px");
    }

    #[test]
    fn units_and_keywords_pass_through() {
        assert_eq!(css_length("50%"), "50%");
        assert_eq!(css_length("auto"), "auto");
        assert_eq!(css_length("  "), "");
    }

    #[test]
    fn px_number_strips_unit() {
        assert_eq!(px_number("12px"), "12");
        assert_eq!(px_number(""), "");
        assert_eq!(px_number("50%"), "50%");
    }
}
