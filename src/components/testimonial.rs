use yew::prelude::*;

use crate::components::reveal::{reveal_classes, reveal_style, use_reveal, EDGE_MARGIN};
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: &'static Testimonial,
    /// Position in the list, drives the entrance delay.
    pub index: usize,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), EDGE_MARGIN);
    let Testimonial { quote, author, role } = props.testimonial;

    html! {
        <figure ref={node} class={reveal_classes("testimonial", visible)} style={reveal_style(props.index)}>
            <blockquote>{format!("“{}”", quote)}</blockquote>
            <figcaption>
                <span class="testimonial-author">{*author}</span>
                { for role.map(|role| format!(" · {}", role)) }
            </figcaption>
            <div class="testimonial-ring"></div>
            <div class="testimonial-glow"></div>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;
    use crate::testing::render_with;

    #[tokio::test]
    async fn shows_quote_author_and_role() {
        let html = render_with::<TestimonialCard, _>(|| TestimonialCardProps {
            testimonial: &TESTIMONIALS[2],
            index: 2,
        })
        .await;

        assert!(html.contains("“Спасибо за консультацию"));
        assert!(html.contains("Юрий Глазков"));
        assert!(html.contains(" · Клиент"));
        assert!(html.contains("--reveal-delay: 120ms;"));
    }

    #[tokio::test]
    async fn role_separator_omitted_without_role() {
        static ANONYMOUS: Testimonial = Testimonial {
            quote: "Коротко и по делу.",
            author: "Аноним",
            role: None,
        };

        let html = render_with::<TestimonialCard, _>(|| TestimonialCardProps {
            testimonial: &ANONYMOUS,
            index: 0,
        })
        .await;

        assert!(html.contains("Аноним"));
        assert!(!html.contains(" · "));
    }
}
