use yew::prelude::*;

use crate::config::BOT_URL;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CtaSize {
    /// Compact button used in the header.
    Small,
    #[default]
    Large,
}

#[derive(Properties, PartialEq)]
pub struct BotLinkProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub size: CtaSize,
}

/// Call-to-action that opens the Telegram bot in a new tab.
#[function_component(BotLink)]
pub fn bot_link(props: &BotLinkProps) -> Html {
    let size = match props.size {
        CtaSize::Small => "cta-small",
        CtaSize::Large => "cta-large",
    };

    html! {
        <a href={BOT_URL} target="_blank" rel="noreferrer" class={classes!("cta", size)}>
            {props.label.clone()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_with;

    #[tokio::test]
    async fn opens_bot_in_new_tab() {
        let html = render_with::<BotLink, _>(|| BotLinkProps {
            label: "Оставить заявку".into(),
            size: CtaSize::Small,
        })
        .await;

        assert!(html.contains("href=\"https://t.me/SellSmart_Bot\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noreferrer\""));
        assert!(html.contains("cta-small"));
        assert!(html.contains(">Оставить заявку</a>"));
    }
}
