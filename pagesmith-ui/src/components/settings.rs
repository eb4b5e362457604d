//! Panels editing the selected element. Every change is written straight to
//! the live node; the snapshot they were opened with only seeds the inputs.

use dioxus::prelude::*;

use crate::editor::settings::{
    color_to_hex, css_length, px_number, FONT_SIZES, OBJECT_FITS, TEXT_ALIGNMENTS,
};
use crate::editor::{SelectedElement, SurfaceHandle};

/// Lowercase tag name in angle brackets, e.g. `<h1>`.
fn tag_badge(tag_name: &str) -> String {
    format!("<{}>", tag_name.to_lowercase())
}

#[component]
pub fn ElementSettings(element: SelectedElement, surface: SurfaceHandle) -> Element {
    let initial_align = element.style("text-align").to_string();
    let mut align = use_signal(move || initial_align);

    let apply_style = use_callback({
        let surface = surface.clone();
        move |(property, value): (&'static str, String)| {
            surface.apply_style(property, &value);
        }
    });
    let done = use_callback(move |_: ()| {
        surface.clear_selection();
    });

    let font_size = element.style("font-size").to_string();
    let color = color_to_hex(element.style("color")).unwrap_or_else(|| "#000000".to_string());
    let background =
        color_to_hex(element.style("background-color")).unwrap_or_else(|| "#ffffff".to_string());
    let tag = tag_badge(&element.tag_name);

    rsx! {
        div {
            class: "settings-panel",
            div {
                class: "settings-title",
                h3 { "Element Settings" }
                span { class: "tag-badge", "{tag}" }
            }

            label {
                class: "field",
                span { "Font Size" }
                select {
                    onchange: move |e: FormEvent| apply_style.call(("font-size", e.value())),
                    option { value: "", selected: font_size.is_empty(), "Default" }
                    for size in FONT_SIZES {
                        option { key: "{size}", value: size, selected: font_size == size, "{size}" }
                    }
                }
            }

            div {
                class: "field-row",
                label {
                    class: "field",
                    span { "Text Color" }
                    input {
                        r#type: "color",
                        initial_value: "{color}",
                        oninput: move |e: FormEvent| apply_style.call(("color", e.value())),
                    }
                }
                label {
                    class: "field",
                    span { "Background" }
                    input {
                        r#type: "color",
                        initial_value: "{background}",
                        oninput: move |e: FormEvent| apply_style.call(("background-color", e.value())),
                    }
                }
            }

            label {
                class: "field",
                span { "Padding" }
                input {
                    r#type: "text",
                    placeholder: "e.g. 16 or 1rem 2rem",
                    initial_value: element.style("padding"),
                    onchange: move |e: FormEvent| apply_style.call(("padding", css_length(&e.value()))),
                }
            }

            label {
                class: "field",
                span { "Border Radius (px)" }
                input {
                    r#type: "number",
                    min: "0",
                    initial_value: px_number(element.style("border-radius")),
                    oninput: move |e: FormEvent| apply_style.call(("border-radius", css_length(&e.value()))),
                }
            }

            div {
                class: "field",
                span { "Text Align" }
                div {
                    class: "segmented",
                    for alignment in TEXT_ALIGNMENTS {
                        button {
                            key: "{alignment}",
                            class: if align() == alignment { "btn btn-secondary" } else { "btn btn-ghost" },
                            onclick: move |_| {
                                align.set(alignment.to_string());
                                apply_style.call(("text-align", alignment.to_string()));
                            },
                            "{alignment}"
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary btn-block",
                onclick: move |_| done.call(()),
                "Done"
            }
        }
    }
}

#[component]
pub fn ImageSettings(element: SelectedElement, surface: SurfaceHandle) -> Element {
    let initial_src = element.attribute("src").to_string();
    let mut preview = use_signal(move || initial_src);

    let apply_style = use_callback({
        let surface = surface.clone();
        move |(property, value): (&'static str, String)| {
            surface.apply_style(property, &value);
        }
    });
    let set_attribute = use_callback({
        let surface = surface.clone();
        move |(name, value): (&'static str, String)| {
            surface.set_attribute(name, &value);
        }
    });
    let done = use_callback(move |_: ()| {
        surface.clear_selection();
    });

    let object_fit = element.style("object-fit").to_string();

    rsx! {
        div {
            class: "settings-panel",
            div {
                class: "settings-title",
                h3 { "Image Settings" }
            }

            if !preview.read().is_empty() {
                img { class: "image-preview", src: "{preview}", alt: "Selected image" }
            }

            label {
                class: "field",
                span { "Image URL" }
                input {
                    r#type: "text",
                    placeholder: "https://...",
                    initial_value: element.attribute("src"),
                    onchange: move |e: FormEvent| {
                        let src = e.value().trim().to_string();
                        preview.set(src.clone());
                        set_attribute.call(("src", src));
                    },
                }
            }

            label {
                class: "field",
                span { "Alt Text" }
                input {
                    r#type: "text",
                    initial_value: element.attribute("alt"),
                    onchange: move |e: FormEvent| set_attribute.call(("alt", e.value())),
                }
            }

            div {
                class: "field-row",
                label {
                    class: "field",
                    span { "Width" }
                    input {
                        r#type: "text",
                        placeholder: "auto",
                        initial_value: element.style("width"),
                        onchange: move |e: FormEvent| apply_style.call(("width", css_length(&e.value()))),
                    }
                }
                label {
                    class: "field",
                    span { "Height" }
                    input {
                        r#type: "text",
                        placeholder: "auto",
                        initial_value: element.style("height"),
                        onchange: move |e: FormEvent| apply_style.call(("height", css_length(&e.value()))),
                    }
                }
            }

            label {
                class: "field",
                span { "Border Radius (px)" }
                input {
                    r#type: "number",
                    min: "0",
                    initial_value: px_number(element.style("border-radius")),
                    oninput: move |e: FormEvent| apply_style.call(("border-radius", css_length(&e.value()))),
                }
            }

            label {
                class: "field",
                span { "Object Fit" }
                select {
                    onchange: move |e: FormEvent| apply_style.call(("object-fit", e.value())),
                    option { value: "", selected: object_fit.is_empty(), "Default" }
                    for fit in OBJECT_FITS {
                        option { key: "{fit}", value: fit, selected: object_fit == fit, "{fit}" }
                    }
                }
            }

            button {
                class: "btn btn-primary btn-block",
                onclick: move |_| done.call(()),
                "Done"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_badge_wraps_lowercase_name() {
        assert_eq!(tag_badge("H1"), "<h1>");
        assert_eq!(tag_badge("section"), "<section>");
    }
}
