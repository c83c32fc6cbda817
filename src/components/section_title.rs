use yew::prelude::*;

use crate::components::reveal::{reveal_classes, use_reveal, HEADING_MARGIN};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Align {
    #[default]
    Center,
    Left,
}

impl Align {
    fn class(self) -> &'static str {
        match self {
            Align::Center => "align-center",
            Align::Left => "align-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    #[prop_or_default]
    pub kicker: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), HEADING_MARGIN);

    html! {
        <div ref={node} class={classes!(reveal_classes("section-title", visible), props.align.class())}>
            {
                if let Some(kicker) = &props.kicker {
                    html! {
                        <div class="section-kicker">
                            <span class="kicker-bar"></span>
                            {kicker.clone()}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <h2>{props.title.clone()}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .section-title.align-center {
                        text-align: center;
                    }
                    .section-title.align-left {
                        text-align: left;
                    }
                    .section-kicker {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #fb923c;
                    }
                    .kicker-bar {
                        height: 0.25rem;
                        width: 1rem;
                        border-radius: 9999px;
                        background: #f97316;
                        box-shadow: 0 0 24px rgba(249, 115, 22, 0.7);
                    }
                    .section-title h2 {
                        margin: 0;
                        font-size: 2.25rem;
                        font-weight: 700;
                        line-height: 1.2;
                        color: #fff;
                    }
                    .section-subtitle {
                        margin-top: 0.75rem;
                        max-width: 42rem;
                        font-size: 1.125rem;
                        color: #d4d4d4;
                    }
                    .section-title.align-center .section-subtitle {
                        margin-left: auto;
                        margin-right: auto;
                    }
                    @media (max-width: 768px) {
                        .section-title h2 {
                            font-size: 1.875rem;
                        }
                        .section-subtitle {
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_with;

    #[tokio::test]
    async fn title_only_when_optional_parts_missing() {
        let html = render_with::<SectionTitle, _>(|| SectionTitleProps {
            kicker: None,
            title: "Как мы помогаем".into(),
            subtitle: None,
            align: Align::Center,
        })
        .await;

        assert!(html.contains("<h2>Как мы помогаем</h2>"));
        assert!(!html.contains("section-kicker\""));
        assert!(!html.contains("<p class=\"section-subtitle\""));
    }

    #[tokio::test]
    async fn kicker_and_subtitle_rendered_when_given() {
        let html = render_with::<SectionTitle, _>(|| SectionTitleProps {
            kicker: Some("Кейсы".into()),
            title: "Коротко о результатах".into(),
            subtitle: Some("Ещё больше подробностей расскажу на созвоне.".into()),
            align: Align::Left,
        })
        .await;

        assert!(html.contains("Кейсы"));
        assert!(html.contains("<h2>Коротко о результатах</h2>"));
        assert!(html.contains("Ещё больше подробностей расскажу на созвоне."));
        assert!(html.contains("align-left"));
    }

    #[tokio::test]
    async fn hidden_until_scrolled_into_view() {
        let html = render_with::<SectionTitle, _>(|| SectionTitleProps {
            kicker: None,
            title: "Отзывы".into(),
            subtitle: None,
            align: Align::default(),
        })
        .await;

        assert!(html.contains("reveal"));
        assert!(!html.contains("visible"));
    }
}
