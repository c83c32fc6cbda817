use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::BRAND;
use crate::content::NAV_ITEMS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-badge">{"S"}</span>
                    <span>{format!("© {} {}. Все права защищены.", year, BRAND)}</span>
                </div>
                <div class="footer-links">
                    {
                        for NAV_ITEMS.iter().map(|item| html! {
                            <a href={item.href()}>{item.label}</a>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid #262626;
                        background: rgba(10, 10, 10, 0.8);
                    }
                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 2rem 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.75rem;
                        font-size: 0.875rem;
                        color: #a3a3a3;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .footer-badge {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        height: 1.75rem;
                        width: 1.75rem;
                        border-radius: 0.5rem;
                        background: #f97316;
                        color: #fff;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-links a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: #fdba74;
                    }
                    @media (max-width: 768px) {
                        .footer-content {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[tokio::test]
    async fn copyright_uses_current_year() {
        let html = render::<Footer>().await;
        let expected = format!("© {} SellSmart. Все права защищены.", Local::now().year());

        assert!(html.contains(&expected));
    }

    #[tokio::test]
    async fn repeats_header_menu() {
        let html = render::<Footer>().await;

        for item in NAV_ITEMS {
            assert!(html.contains(&format!("<a href=\"{}\">{}</a>", item.href(), item.label)));
        }
    }
}
