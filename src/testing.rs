use yew::{BaseComponent, ServerRenderer};

/// Renders a component to plain markup, without hydration comments.
pub async fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default,
{
    ServerRenderer::<C>::new().hydratable(false).render().await
}

pub async fn render_with<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
