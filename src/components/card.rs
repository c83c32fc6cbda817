use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card">
            { for props.children.iter() }
            <style>
                {r#"
                    .card {
                        border-radius: 1rem;
                        border: 1px solid #262626;
                        background: #171717;
                        padding: 1.5rem;
                        box-shadow: 0 0 30px rgba(0, 0, 0, 0.2);
                        transition: box-shadow 0.2s ease;
                    }
                    .card:hover {
                        box-shadow: 0 0 40px rgba(249, 115, 22, 0.2);
                    }
                    .card h3 {
                        margin: 0;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .card ul {
                        list-style: none;
                        margin: 0.75rem 0 0;
                        padding: 0;
                        color: #d4d4d4;
                    }
                    .card li + li {
                        margin-top: 0.5rem;
                    }
                    .card-footnote {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: #a3a3a3;
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
    async fn wraps_children() {
        let html = render_with::<Card, _>(|| CardProps {
            children: Children::new(vec![html! { <h3>{"Рентген продаж"}</h3> }]),
        })
        .await;

        assert!(html.starts_with("<div class=\"card\">"));
        assert!(html.contains("<h3>Рентген продаж</h3>"));
    }
}
