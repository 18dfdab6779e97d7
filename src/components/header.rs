use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::MouseEvent;

use crate::activation::nav::{self, SectionProbe};

/// Nav targets in declaration order; the order doubles as the tie-break for
/// active-section resolution.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Who We Are", "#about"),
    ("Our Brands", "#brands"),
    ("Recognition", "#awards"),
    ("Research", "#research"),
    ("Our Experts", "#experts"),
    ("Stories", "#stories"),
    ("Get Involved", "#join"),
    ("Contact", "#contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active_section = use_state_eq(|| "#home".to_string());

    // Solid header background once the hero is scrolled past.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
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

    // Track which page section the viewport is on. Sections missing from the
    // DOM (e.g. on the terms page) are simply skipped.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_probe = window.clone();

                let section_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_probe.scroll_y().unwrap_or(0.0);
                    let probes: Vec<SectionProbe> = NAV_LINKS
                        .iter()
                        .filter_map(|&(_, href)| {
                            let element =
                                document.get_element_by_id(href.trim_start_matches('#'))?;
                            let rect = element.get_bounding_client_rect();
                            Some(SectionProbe {
                                href,
                                top: rect.top(),
                                bottom: rect.bottom(),
                            })
                        })
                        .collect();
                    if let Some(href) = nav::resolve_active(&probes, scroll_y) {
                        active_section.set(href.to_string());
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        section_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check so the right link is lit before any scroll.
                section_callback
                    .as_ref()
                    .unchecked_ref::<js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            section_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // A hash in the URL overrides scroll-derived state until the next scroll
    // event recomputes it.
    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_hash = window.clone();
                let sync_from_hash = move || {
                    if let Ok(hash) = window_hash.location().hash() {
                        if let Some(href) =
                            nav::match_hash(&hash, NAV_LINKS.iter().map(|(_, href)| *href))
                        {
                            active_section.set(href.to_string());
                        }
                    }
                };
                sync_from_hash();

                let hash_callback = Closure::wrap(Box::new(sync_from_hash) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "hashchange",
                        hash_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "hashchange",
                            hash_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let nav_class = if *menu_open {
        "header-nav mobile-menu-open"
    } else {
        "header-nav"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="/#home" class="header-logo" onclick={close_menu.clone()}>
                    {"terravita"}<span class="logo-mark">{"group"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={nav_class} aria-label="Main navigation">
                    {
                        NAV_LINKS.iter().map(|&(title, href)| {
                            let is_active = *active_section == href;
                            html! {
                                <a
                                    key={href}
                                    href={href}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onclick={close_menu.clone()}
                                >
                                    {title}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <a href="#brands" class="header-cta" onclick={close_menu.clone()}>
                        {"Explore Our Brands"}
                    </a>
                </nav>
            </div>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.4rem 0;
                        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    }

                    .site-header.scrolled {
                        background: #ffffff;
                        box-shadow: 0 2px 12px rgba(23, 54, 38, 0.12);
                        padding: 0.8rem 0;
                    }

                    .header-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .header-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.04em;
                        color: #ffffff;
                        text-decoration: none;
                    }

                    .header-logo .logo-mark {
                        font-weight: 300;
                        margin-left: 0.3rem;
                        opacity: 0.8;
                    }

                    .site-header.scrolled .header-logo {
                        color: #1f5c40;
                    }

                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 1.2rem;
                    }

                    .nav-link {
                        position: relative;
                        color: #ffffff;
                        text-decoration: none;
                        font-size: 0.95rem;
                        font-weight: 500;
                        padding: 0.4rem 0;
                        white-space: nowrap;
                    }

                    .site-header.scrolled .nav-link {
                        color: #2b2b2b;
                    }

                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: -2px;
                        height: 2px;
                        width: 0;
                        border-radius: 2px;
                        background: #26d07c;
                        opacity: 0;
                        transition: width 0.3s ease, opacity 0.3s ease;
                    }

                    .nav-link:hover::after,
                    .nav-link.active::after {
                        width: 100%;
                        opacity: 1;
                    }

                    .header-cta {
                        background: #26d07c;
                        color: #ffffff;
                        padding: 0.55rem 1.3rem;
                        border-radius: 999px;
                        font-size: 0.9rem;
                        font-weight: 600;
                        text-decoration: none;
                        white-space: nowrap;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }

                    .header-cta:hover {
                        background: #1fb96c;
                        transform: translateY(-1px);
                    }

                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #ffffff;
                        transition: background 0.3s ease;
                    }

                    .site-header.scrolled .burger-menu span {
                        background: #1f5c40;
                    }

                    @media (max-width: 1100px) {
                        .burger-menu {
                            display: block;
                        }

                        .header-nav {
                            display: none;
                        }

                        .header-nav.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: flex-start;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: #ffffff;
                            padding: 1.5rem 2rem;
                            gap: 1rem;
                            box-shadow: 0 12px 24px rgba(23, 54, 38, 0.15);
                        }

                        .header-nav.mobile-menu-open .nav-link {
                            color: #2b2b2b;
                            font-size: 1.1rem;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
