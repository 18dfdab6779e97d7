use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

// Show the button once the hero is comfortably out of view.
const SHOW_AFTER_PX: f64 = 200.0;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_scroll = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_scroll.scroll_y().unwrap_or(0.0);
                    visible.set(scroll_y > SHOW_AFTER_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let scroll_to_top = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0);
            options.behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <button
                class={classes!("back-to-top", (*visible).then(|| "visible"))}
                onclick={scroll_to_top}
                aria-label="Back to top"
            >
                {"↑"}
            </button>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 60;
                        width: 52px;
                        height: 52px;
                        border-radius: 50%;
                        border: none;
                        background: #26d07c;
                        color: #ffffff;
                        font-size: 1.4rem;
                        cursor: pointer;
                        box-shadow: 0 8px 20px rgba(23, 54, 38, 0.25);
                        opacity: 0;
                        transform: scale(0.75);
                        pointer-events: none;
                        transition: opacity 0.3s ease, transform 0.3s ease, background 0.3s ease;
                    }

                    .back-to-top.visible {
                        opacity: 1;
                        transform: scale(1);
                        pointer-events: auto;
                    }

                    .back-to-top:hover {
                        background: #1f5c40;
                    }
                "#}
            </style>
        </>
    }
}
