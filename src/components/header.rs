use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::bot_link::{BotLink, CtaSize};
use crate::config::{BRAND, HEADER_SCROLL_THRESHOLD, LOGO_URL};
use crate::content::NAV_ITEMS;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            let scrolled = window
                                .scroll_y()
                                .map(|y| y > HEADER_SCROLL_THRESHOLD)
                                .unwrap_or(false);
                            is_scrolled.set(scrolled);
                        }
                    });
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Failed to attach header scroll listener: {:?}", err);
                    }
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
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

    // Anchor navigation still happens, only the mobile menu collapses
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#top" class="header-brand">
                    <img src={LOGO_URL} alt="SellSmart logo" />
                    <span>{BRAND}</span>
                </a>

                <button class="burger-menu" aria-label="Меню" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("header-nav", (*menu_open).then(|| "menu-open"))}>
                    {
                        for NAV_ITEMS.iter().map(|item| html! {
                            <a href={item.href()} class="header-link" onclick={close_menu.clone()}>
                                {item.label}
                            </a>
                        })
                    }
                </nav>

                <BotLink label="Оставить заявку" size={CtaSize::Small} />
            </div>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        width: 100%;
                        border-bottom: 1px solid #262626;
                        background: rgba(10, 10, 10, 0.6);
                        backdrop-filter: blur(8px);
                        transition: background 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(10, 10, 10, 0.8);
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.4);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0.75rem 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .header-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                    }
                    .header-brand img {
                        height: 2rem;
                        width: auto;
                    }
                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .header-link {
                        color: #d4d4d4;
                        text-decoration: none;
                    }
                    .header-link:hover {
                        color: #fb923c;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        background: #e5e5e5;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                            order: 3;
                        }
                        .header-nav {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem;
                            background: rgba(10, 10, 10, 0.95);
                            border-bottom: 1px solid #262626;
                        }
                        .header-nav.menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render};

    #[tokio::test]
    async fn brand_links_to_top_and_menu_lists_sections() {
        let html = render::<Header>().await;

        assert!(html.contains("href=\"#top\""));
        for item in NAV_ITEMS {
            assert_eq!(count(&html, &format!("href=\"{}\"", item.href())), 1);
            assert!(html.contains(item.label));
        }
    }

    #[tokio::test]
    async fn starts_unscrolled_with_menu_closed() {
        let html = render::<Header>().await;

        assert!(!html.contains("scrolled\""));
        assert!(!html.contains("menu-open\""));
        assert!(html.contains("https://t.me/SellSmart_Bot"));
    }
}
