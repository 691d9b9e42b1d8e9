use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::contact_modal::ContactModal;
use crate::components::fade_in::FadeInSection;
use crate::components::floating_cta::FloatingCta;
use crate::components::service_modal::ServiceModal;
use crate::config::CONTACT_ANCHOR_ID;
use crate::pages::content::{
    ABOUT, ABOUT_CLOSING, LOCATIONS, OFFER_CLOSING, OFFER_DETAILS, REGION, SERVICES, TAGLINE,
    VISION,
};

/// Decorative leaf: position (percent of section), size (rem), base rotation
/// and swing (deg), vertical drift (px), cycle length (s).
struct Leaf {
    top: f64,
    left: f64,
    size: f64,
    rotate: i32,
    swing: i32,
    drift: i32,
    duration: f64,
}

const HERO_LEAVES: &[Leaf] = &[
    Leaf { top: 8.0, left: 6.0, size: 10.0, rotate: 135, swing: 20, drift: -20, duration: 8.0 },
    Leaf { top: 12.0, left: 78.0, size: 12.0, rotate: 210, swing: -30, drift: 15, duration: 10.0 },
    Leaf { top: 70.0, left: 10.0, size: 8.0, rotate: 260, swing: 30, drift: -10, duration: 7.0 },
    Leaf { top: 74.0, left: 84.0, size: 9.0, rotate: 95, swing: -25, drift: 12, duration: 9.0 },
];

const CONTENT_LEAVES: &[Leaf] = &[
    Leaf { top: 4.0, left: 88.0, size: 9.0, rotate: 160, swing: 25, drift: -15, duration: 9.0 },
    Leaf { top: 18.0, left: -2.0, size: 8.0, rotate: 110, swing: -25, drift: 10, duration: 7.5 },
    Leaf { top: 36.0, left: 90.0, size: 10.0, rotate: 240, swing: 30, drift: -12, duration: 8.5 },
    Leaf { top: 52.0, left: 2.0, size: 11.0, rotate: 320, swing: -30, drift: 18, duration: 10.5 },
    Leaf { top: 68.0, left: 86.0, size: 8.0, rotate: 125, swing: 25, drift: -20, duration: 9.5 },
    Leaf { top: 84.0, left: 4.0, size: 9.0, rotate: 190, swing: -25, drift: 15, duration: 8.0 },
    Leaf { top: 28.0, left: 48.0, size: 4.0, rotate: 75, swing: 30, drift: -8, duration: 6.0 },
    Leaf { top: 60.0, left: 40.0, size: 4.0, rotate: 200, swing: -30, drift: 10, duration: 7.0 },
];

fn render_leaves(leaves: &[Leaf]) -> Html {
    leaves
        .iter()
        .map(|leaf| html! {
            <img
                class="leaf"
                src="/assets/leaf.svg"
                alt=""
                aria-hidden="true"
                style={format!(
                    "top: {}%; left: {}%; width: {}rem; --rotate: {}deg; --swing: {}deg; --drift: {}px; animation-duration: {}s;",
                    leaf.top, leaf.left, leaf.size, leaf.rotate, leaf.rotate + leaf.swing, leaf.drift, leaf.duration
                )}
            />
        })
        .collect::<Html>()
}

fn section_title(mark: &'static str, title: &'static str) -> Html {
    html! {
        <div class="section-title">
            <span class="section-mark">{mark}</span>
            <h2>{title}</h2>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let selected_service = use_state(|| None::<usize>);
    let contact_open = use_state(|| false);

    // Start at the top on first render
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(true))
    };
    let close_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(false))
    };
    let close_service = {
        let selected_service = selected_service.clone();
        Callback::from(move |_: ()| selected_service.set(None))
    };

    let service_cards = SERVICES.iter().enumerate().map(|(index, service)| {
        let onclick = {
            let selected_service = selected_service.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Opening service {}", index);
                selected_service.set(Some(index));
            })
        };
        html! {
            <div
                key={service.title}
                class="service-card"
                style={format!("transition-delay: {:.2}s;", index as f64 * 0.15)}
                onclick={onclick}
            >
                <div class="service-card-image">
                    <img src={service.image} alt={service.title} />
                    <div class="service-card-tint" style={format!("background-color: {};", service.color)}></div>
                </div>
                <div class="service-card-body">
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                </div>
            </div>
        }
    });

    let location_cards = LOCATIONS.iter().map(|location| {
        html! {
            <div key={location.city} class="location-card">
                <div class="location-header">
                    <span>{"📍"}</span>
                    <h3>{location.city}</h3>
                </div>
                <p class="location-venue">{location.venue}</p>
                <p class="location-description">{location.description}</p>
            </div>
        }
    });

    html! {
        <div class="home-page">
            <section class="hero">
                { render_leaves(HERO_LEAVES) }
                <div class="hero-content">
                    <img class="hero-logo" src="/assets/ondama-logo.svg" alt="Ondama logo" width="180" height="180" />
                    <h1>{"Ondama"}</h1>
                    <p>{TAGLINE}</p>
                </div>
            </section>

            <main class="content">
                { render_leaves(CONTENT_LEAVES) }

                <FadeInSection>
                    <section class="content-section">
                        { section_title("✦", "Notre vision") }
                        <p class="lead">{VISION}</p>
                    </section>
                </FadeInSection>

                <section class="content-section">
                    <FadeInSection>
                        { section_title("✦", "Nos accompagnements") }
                    </FadeInSection>
                    <FadeInSection>
                        <div class="services-grid">
                            { for service_cards }
                        </div>
                    </FadeInSection>
                </section>

                <FadeInSection>
                    <section class="content-section">
                        { section_title("✦", "Qui sommes-nous ?") }
                        <div class="prose">
                            { for ABOUT.iter().map(|p| html! { <p>{*p}</p> }) }
                            <p class="prose-closing">{ABOUT_CLOSING}</p>
                        </div>
                    </section>
                </FadeInSection>

                <FadeInSection>
                    <section class="content-section">
                        { section_title("✦", "Détails de nos accompagnements") }
                        <div class="offer-details">
                            { for OFFER_DETAILS.iter().map(|(heading, body)| html! {
                                <div class="offer-card">
                                    <h3>{*heading}</h3>
                                    <p>{*body}</p>
                                </div>
                            }) }
                            <p class="prose-closing">{OFFER_CLOSING}</p>
                        </div>
                    </section>
                </FadeInSection>

                <FadeInSection>
                    <section class="content-section">
                        { section_title("✦", "Nos lieux d'intervention") }
                        <p class="region">{REGION}</p>
                        <div class="locations-grid">
                            { for location_cards }
                        </div>
                    </section>
                </FadeInSection>

                <FadeInSection delay={0.2}>
                    <section id={CONTACT_ANCHOR_ID} class="content-section contact-section">
                        { section_title("✧", "Contact") }
                        <div class="contact-card">
                            <ContactForm id_prefix="inline-contact" />
                        </div>
                    </section>
                </FadeInSection>
            </main>

            <FloatingCta on_click={open_contact} />
            <ContactModal is_open={*contact_open} on_close={close_contact} />
            {
                if let Some(service) = (*selected_service).and_then(|index| SERVICES.get(index)) {
                    html! { <ServiceModal service={service} on_close={close_service} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: var(--background);
                    color: var(--foreground);
                    overflow-x: hidden;
                }
                .hero {
                    position: relative;
                    min-height: 100dvh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    overflow: hidden;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    max-width: 42rem;
                    text-align: center;
                }
                .hero-logo {
                    animation: heroIn 1s cubic-bezier(0.22, 1, 0.36, 1) both;
                }
                .hero h1 {
                    font-family: 'Crimson Text', serif;
                    font-size: 4.5rem;
                    font-weight: 600;
                    margin: 0;
                    animation: heroIn 0.8s 0.2s cubic-bezier(0.22, 1, 0.36, 1) both;
                }
                .hero p {
                    font-size: 1.25rem;
                    line-height: 1.75;
                    color: rgba(61, 52, 45, 0.7);
                    animation: heroIn 0.8s 0.4s cubic-bezier(0.22, 1, 0.36, 1) both;
                }
                .leaf {
                    position: absolute;
                    opacity: 0.15;
                    pointer-events: none;
                    transform: rotate(var(--rotate));
                    animation-name: leafSway;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }
                .content {
                    position: relative;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 8rem;
                }
                .content-section {
                    position: relative;
                    z-index: 1;
                }
                .section-title {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .section-mark {
                    font-size: 1.5rem;
                    color: var(--primary);
                }
                .section-title h2 {
                    font-family: 'Crimson Text', serif;
                    font-size: 3rem;
                    font-weight: 600;
                    margin: 0;
                }
                .lead {
                    font-size: 1.5rem;
                    line-height: 1.75;
                    max-width: 48rem;
                    color: rgba(61, 52, 45, 0.8);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    cursor: pointer;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: white;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .service-card-image {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                }
                .service-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .service-card:hover .service-card-image img {
                    transform: scale(1.05);
                }
                .service-card-tint {
                    position: absolute;
                    inset: 0;
                    opacity: 0.3;
                }
                .service-card-body {
                    padding: 1.5rem;
                }
                .service-card-body h3,
                .offer-card h3,
                .location-header h3 {
                    font-family: 'Crimson Text', serif;
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }
                .service-card-body p {
                    color: rgba(61, 52, 45, 0.7);
                    line-height: 1.6;
                    margin: 0;
                }
                .prose p {
                    font-size: 1.125rem;
                    line-height: 1.8;
                    color: rgba(61, 52, 45, 0.8);
                    max-width: 56rem;
                }
                .prose-closing {
                    font-style: italic;
                    color: var(--primary) !important;
                }
                .offer-details {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .offer-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.6);
                }
                .offer-card p {
                    line-height: 1.8;
                    color: rgba(61, 52, 45, 0.8);
                    margin: 0;
                }
                .region {
                    font-size: 1.125rem;
                    color: rgba(61, 52, 45, 0.6);
                    margin: -1rem 0 2rem;
                }
                .locations-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                    gap: 1.5rem;
                }
                .location-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: white;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                }
                .location-header {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .location-header h3 {
                    margin: 0;
                }
                .location-venue {
                    font-weight: 500;
                    color: var(--primary);
                }
                .location-description {
                    color: rgba(61, 52, 45, 0.7);
                    line-height: 1.6;
                }
                .contact-card {
                    max-width: 42rem;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.6);
                }
                .fade-in-section {
                    opacity: 0;
                    transform: translateY(40px);
                    transition-property: opacity, transform;
                    transition-duration: 0.8s;
                    transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
                }
                .fade-in-section.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                @keyframes heroIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes leafSway {
                    0%, 100% { transform: translateY(0) rotate(var(--rotate)); }
                    50% { transform: translateY(var(--drift)) rotate(var(--swing)); }
                }
                @media (max-width: 900px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 3rem;
                    }
                    .section-title h2 {
                        font-size: 2.25rem;
                    }
                    .content {
                        gap: 5rem;
                    }
                    .contact-card {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
