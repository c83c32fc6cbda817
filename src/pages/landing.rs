use yew::prelude::*;

use crate::components::bot_link::BotLink;
use crate::components::card::Card;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::reveal::{reveal_classes, use_mount_reveal};
use crate::components::section_title::{Align, SectionTitle};
use crate::components::testimonial::TestimonialCard;
use crate::config::PORTRAIT_URL;
use crate::content::{CASES, SERVICES, TESTIMONIALS};

const APPLY_IN_BOT: &str = "Оставить заявку в Telegram‑боте";
const CONTACT_TITLE: &str = "Оставьте заявку в Telegram‑боте";

#[function_component(Hero)]
fn hero() -> Html {
    let visible = use_mount_reveal();

    html! {
        <section id="top" class="hero">
            <div class="container hero-grid">
                <div class={reveal_classes("hero-copy", visible)}>
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {"Екатеринбург · sellsmart.su · Амбассадор «Аномалия»"}
                    </div>
                    <h1>
                        {"Системные продажи под ключ: "}
                        <span class="accent">{"прозрачность"}</span>
                        {" и рост без токсичности"}
                    </h1>
                    <p class="hero-lead">
                        {"Создаю и модернизирую отделы продаж: от аудита и регламентов до обучения команды и еженедельного трекинга. Цель — управляемый рост выручки и чистой прибыли."}
                    </p>
                    <div class="hero-actions">
                        <BotLink label={APPLY_IN_BOT} />
                        <a href="#services" class="secondary-link">{"Подробнее об услугах"}</a>
                    </div>
                </div>
                <div class="portrait">
                    <img src={PORTRAIT_URL} alt="Павел Гущин" class="hero-portrait" />
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container two-columns">
                <div>
                    <SectionTitle
                        kicker="Обо мне"
                        title="Павел Гущин"
                        subtitle="Основатель SellSmart, амбассадор бизнес‑клуба «Аномалия». 8+ лет в продажах и управлении."
                        align={Align::Left}
                    />
                    <p class="about-text">
                        {"Помогаю предпринимателям наводить порядок в отделах продаж и выстраивать системность: прозрачные процессы, понятные правила и управляемый рост. Работаю локально в Екатеринбурге и онлайн по всей России."}
                    </p>
                </div>
                <div class="portrait">
                    <img src={PORTRAIT_URL} alt="Павел Гущин портрет" class="about-portrait" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="section">
            <div class="container">
                <SectionTitle
                    kicker="Услуги"
                    title="Как мы помогаем"
                    subtitle="От точечного аудита до полного строительства отдела продаж. Ниже — формат, сроки и стоимость."
                />
                <div class="card-grid services-grid">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <Card>
                                <h3>{service.title}</h3>
                                <p class="card-summary">{service.summary}</p>
                                <ul>
                                    { for service.highlights.iter().map(|line| html! { <li>{format!("• {}", line)}</li> }) }
                                </ul>
                                <div class="card-footnote">
                                    { for service.terms.iter().map(|line| html! { <div>{*line}</div> }) }
                                </div>
                            </Card>
                        })
                    }
                </div>
                <div class="section-cta">
                    <BotLink label={APPLY_IN_BOT} />
                </div>
            </div>
        </section>
    }
}

#[function_component(Cases)]
fn cases() -> Html {
    html! {
        <section id="cases" class="section">
            <div class="container">
                <SectionTitle
                    kicker="Кейсы"
                    title="Коротко о результатах"
                    subtitle="Ещё больше подробностей расскажу на созвоне."
                />
                <div class="card-grid three-columns">
                    {
                        for CASES.iter().map(|case| html! {
                            <Card>
                                <div class="case-title">{case.title}</div>
                                <ul>
                                    { for case.highlights.iter().map(|line| html! { <li>{format!("• {}", line)}</li> }) }
                                </ul>
                                <div class="card-footnote">{case.result}</div>
                            </Card>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Downloads)]
fn downloads() -> Html {
    html! {
        <section id="downloads" class="section">
            <div class="container narrow">
                <SectionTitle
                    kicker="Бесплатно"
                    title="Полезные файлы для отдела продаж"
                    subtitle="Скачайте готовые материалы и чек‑листы в нашем Telegram‑боте"
                />
                <div class="section-cta">
                    <BotLink label="Скачать в Telegram‑боте" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="section testimonials">
            <div class="testimonials-halo"></div>
            <div class="container">
                <SectionTitle
                    kicker="Отзывы"
                    title="Что говорят клиенты"
                    subtitle="Живая обратная связь от предпринимателей"
                />
                <div class="card-grid three-columns">
                    {
                        for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <TestimonialCard key={index} {testimonial} {index} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="section">
            <div class="container narrow">
                <SectionTitle
                    kicker="Консультация"
                    title={CONTACT_TITLE}
                    subtitle="Самый быстрый способ связаться: бот соберёт вводные и передаст мне"
                />
                <div class="section-cta">
                    <BotLink label={APPLY_IN_BOT} />
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Header />
            <main>
                <Hero />
                <About />
                <Services />
                <Cases />
                <Downloads />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        background: #0a0a0a;
                        color: #f5f5f5;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .container.narrow {
                        max-width: 56rem;
                        text-align: center;
                    }
                    .section {
                        padding: 5rem 0;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease-out var(--reveal-delay, 0ms),
                            transform 0.6s ease-out var(--reveal-delay, 0ms);
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .hero-grid,
                    .two-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                        align-items: center;
                    }
                    .hero-grid {
                        padding-top: 6rem;
                        padding-bottom: 6rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(249, 115, 22, 0.3);
                        background: rgba(23, 23, 23, 0.6);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: #fdba74;
                        box-shadow: 0 0 24px rgba(249, 115, 22, 0.25);
                    }
                    .hero-badge-dot {
                        height: 0.375rem;
                        width: 0.375rem;
                        border-radius: 9999px;
                        background: #f97316;
                        box-shadow: 0 0 14px rgba(249, 115, 22, 1);
                    }
                    .hero h1 {
                        margin-top: 1.5rem;
                        font-size: 3.75rem;
                        font-weight: 900;
                        line-height: 1.05;
                        color: #fff;
                    }
                    .accent {
                        color: #fb923c;
                    }
                    .hero-lead {
                        margin-top: 1.25rem;
                        max-width: 42rem;
                        font-size: 1.125rem;
                        color: #d4d4d4;
                    }
                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .secondary-link {
                        display: inline-flex;
                        align-items: center;
                        border-radius: 0.75rem;
                        border: 1px solid #262626;
                        background: #171717;
                        padding: 0.75rem 1.25rem;
                        color: #e5e5e5;
                        text-decoration: none;
                    }
                    .secondary-link:hover {
                        border-color: #404040;
                    }
                    .portrait {
                        display: flex;
                        justify-content: center;
                    }
                    .portrait img {
                        border-radius: 1rem;
                        box-shadow: 0 0 40px rgba(0, 0, 0, 0.4);
                        object-fit: cover;
                    }
                    .hero-portrait {
                        max-height: 420px;
                    }
                    .about {
                        padding: 3.5rem 0;
                    }
                    .about-text {
                        margin-top: 1rem;
                        color: #d4d4d4;
                    }
                    .about-portrait {
                        max-height: 380px;
                    }

                    .cta {
                        display: inline-flex;
                        align-items: center;
                        border-radius: 0.75rem;
                        background: #f97316;
                        color: #fff;
                        text-decoration: none;
                        box-shadow: 0 0 24px rgba(249, 115, 22, 0.9);
                        transition: transform 0.2s ease;
                    }
                    .cta:hover {
                        transform: translateY(-2px);
                    }
                    .cta-small {
                        padding: 0.5rem 1rem;
                    }
                    .cta-large {
                        padding: 0.75rem 1.5rem;
                    }
                    .section-cta {
                        margin-top: 2rem;
                        display: flex;
                        justify-content: center;
                    }

                    .card-grid {
                        margin-top: 2.5rem;
                        display: grid;
                        gap: 1.25rem;
                    }
                    .services-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .three-columns {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .card-summary {
                        margin-top: 0.5rem;
                        color: #d4d4d4;
                    }
                    .case-title {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #fff;
                    }

                    .testimonials {
                        position: relative;
                    }
                    .testimonials-halo {
                        pointer-events: none;
                        position: absolute;
                        left: 0;
                        right: 0;
                        top: -6rem;
                        margin: 0 auto;
                        height: 12rem;
                        max-width: 56rem;
                        border-radius: 9999px;
                        background: radial-gradient(ellipse at center, rgba(249, 115, 22, 0.25), transparent 60%);
                        filter: blur(40px);
                    }
                    .testimonial {
                        position: relative;
                        margin: 0;
                        border-radius: 1rem;
                        border: 1px solid rgba(194, 65, 12, 0.3);
                        background: #0a0a0a;
                        padding: 1.5rem;
                        box-shadow: 0 0 30px rgba(249, 115, 22, 0.15);
                    }
                    .testimonial.reveal {
                        transition: opacity 0.6s ease-out var(--reveal-delay, 0ms),
                            transform 0.6s ease-out var(--reveal-delay, 0ms),
                            translate 0.3s ease;
                    }
                    .testimonial.visible:hover {
                        translate: 0 -4px;
                    }
                    .testimonial blockquote {
                        margin: 0;
                        color: #f5f5f5;
                    }
                    .testimonial figcaption {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: #a3a3a3;
                    }
                    .testimonial-author {
                        font-weight: 500;
                        color: #f5f5f5;
                    }
                    .testimonial-ring {
                        pointer-events: none;
                        position: absolute;
                        inset: -1px;
                        z-index: -1;
                        border-radius: 1rem;
                        box-shadow: inset 0 0 0 1px rgba(249, 115, 22, 0.4);
                        filter: blur(1px);
                    }
                    .testimonial-glow {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        z-index: -2;
                        border-radius: 1rem;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                        box-shadow: 0 0 64px rgba(249, 115, 22, 0.35);
                    }
                    .testimonial:hover .testimonial-glow {
                        opacity: 1;
                    }

                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .hero-grid,
                        .two-columns,
                        .services-grid,
                        .three-columns {
                            grid-template-columns: 1fr;
                        }
                        .hero-grid {
                            padding-top: 4rem;
                            padding-bottom: 4rem;
                        }
                        .hero h1 {
                            font-size: 2.25rem;
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
    use crate::config::BOT_URL;
    use crate::content::NAV_ITEMS;
    use crate::testing::{count, render};

    const ANCHORS: &[&str] = &["top", "services", "cases", "testimonials", "contact"];

    #[tokio::test]
    async fn every_nav_target_exists_exactly_once() {
        let html = render::<Landing>().await;

        for anchor in ANCHORS {
            assert_eq!(count(&html, &format!("id=\"{}\"", anchor)), 1, "#{}", anchor);
        }
    }

    #[tokio::test]
    async fn in_page_links_all_resolve() {
        let html = render::<Landing>().await;

        for (start, _) in html.match_indices("href=\"#") {
            let rest = &html[start + "href=\"#".len()..];
            let anchor = &rest[..rest.find('"').unwrap()];
            assert_eq!(count(&html, &format!("id=\"{}\"", anchor)), 1, "#{}", anchor);
        }
        for item in NAV_ITEMS {
            // header and footer, plus the hero's secondary link
            let expected = 2 + usize::from(item.anchor == "services");
            assert_eq!(count(&html, &format!("href=\"{}\"", item.href())), expected);
        }
    }

    #[tokio::test]
    async fn renders_one_figure_per_testimonial() {
        let html = render::<Landing>().await;

        assert_eq!(count(&html, "<figure"), TESTIMONIALS.len());
        assert_eq!(TESTIMONIALS.len(), 3);
        for testimonial in TESTIMONIALS {
            assert!(html.contains(testimonial.author));
            if let Some(role) = testimonial.role {
                assert!(html.contains(&format!(" · {}", role)));
            }
        }
    }

    #[tokio::test]
    async fn every_cta_targets_the_bot() {
        let html = render::<Landing>().await;

        let external = count(&html, "href=\"http");
        let to_bot = count(&html, &format!("href=\"{}\"", BOT_URL));
        // header, hero, services, downloads, contact
        assert_eq!(to_bot, 5);
        assert_eq!(external, to_bot);
        assert_eq!(count(&html, "target=\"_blank\""), to_bot);
    }

    #[tokio::test]
    async fn contact_heading_invites_to_the_bot() {
        let html = render::<Landing>().await;

        assert_eq!(count(&html, "<h2>Оставьте заявку в Telegram‑боте</h2>"), 1);
        // the button keeps the imperative label
        assert!(html.contains(">Оставить заявку в Telegram‑боте</a>"));
    }

    #[tokio::test]
    async fn lists_all_services_and_cases() {
        let html = render::<Landing>().await;

        for service in SERVICES {
            assert!(html.contains(service.title));
            for line in service.terms {
                assert!(html.contains(line));
            }
        }
        for case in CASES {
            assert!(html.contains(case.title));
            assert!(html.contains(case.result));
        }
    }
}
