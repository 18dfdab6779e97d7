use yew::prelude::*;

use crate::config;

fn font_face_css() -> String {
    format!(
        r#"
        @font-face {{
            font-family: 'Halcyon';
            src: url('{light}') format('woff2');
            font-weight: 300;
            font-style: normal;
            font-display: swap;
        }}

        @font-face {{
            font-family: 'Halcyon';
            src: url('{book}') format('woff2');
            font-weight: 400;
            font-style: normal;
            font-display: swap;
        }}

        @font-face {{
            font-family: 'Halcyon';
            src: url('{medium}') format('woff2');
            font-weight: 500;
            font-style: normal;
            font-display: swap;
        }}

        @font-face {{
            font-family: 'Halcyon';
            src: url('{black}') format('woff2');
            font-weight: 900;
            font-style: normal;
            font-display: swap;
        }}
        "#,
        light = config::asset_path("/fonts/HalcyonLight.woff2"),
        book = config::asset_path("/fonts/HalcyonBook.woff2"),
        medium = config::asset_path("/fonts/HalcyonMedium.woff2"),
        black = config::asset_path("/fonts/HalcyonBlack.woff2"),
    )
}

/// Injects the @font-face rules into <head> so the font URLs go through the
/// same asset-path resolution as everything else. Renders nothing.
#[function_component(FontLoader)]
pub fn font_loader() -> Html {
    use_effect_with_deps(
        move |_| {
            let style = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(&font_face_css()));
                    document.head()?.append_child(&style).ok()?;
                    Some(style)
                });
            move || {
                if let Some(style) = style {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        },
        (),
    );

    html! {}
}
