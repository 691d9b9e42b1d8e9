use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::overlay::Overlay;
use crate::pages::content::Service;

/// How far the header image drifts up (percent) and grows once the
/// detail pane is scrolled to the bottom.
const PARALLAX_SHIFT_PCT: f64 = 20.0;
const PARALLAX_ZOOM: f64 = 0.15;

pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

pub fn parallax_transform(progress: f64) -> String {
    let progress = progress.clamp(0.0, 1.0);
    format!(
        "transform: translateY({:.2}%) scale({:.4});",
        0.0 - PARALLAX_SHIFT_PCT * progress,
        1.0 + PARALLAX_ZOOM * progress
    )
}

/// Blank lines separate paragraphs in the long descriptions.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: &'static Service,
    pub on_close: Callback<()>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let progress = use_state(|| 0.0_f64);
    let service = props.service;

    let on_scroll = {
        let progress = progress.clone();
        Callback::from(move |e: Event| {
            let pane: Element = e.target_unchecked_into();
            progress.set(scroll_progress(
                pane.scroll_top() as f64,
                pane.scroll_height() as f64,
                pane.client_height() as f64,
            ));
        })
    };

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Overlay on_close={props.on_close.clone()} class="service-modal">
            <div class="service-modal-scroll" onscroll={on_scroll}>
                <div class="service-modal-image">
                    <img
                        src={service.image}
                        alt={service.title}
                        style={parallax_transform(*progress)}
                    />
                    <div
                        class="service-modal-tint"
                        style={format!("background: linear-gradient(to bottom, transparent 0%, {}40 100%);", service.color)}
                    ></div>
                </div>
                <div class="service-modal-body">
                    <h3>{service.title}</h3>
                    {
                        for paragraphs(service.detailed_description).map(|p| html! { <p>{p}</p> })
                    }
                    <button class="service-modal-done" onclick={on_close_button}>
                        {"Fermer"}
                    </button>
                </div>
            </div>
            <div class="service-modal-fade"></div>
            <style>
                {r#"
                .service-modal {
                    max-width: 56rem;
                    max-height: 90vh;
                    display: flex;
                    flex-direction: column;
                }
                .service-modal-scroll {
                    overflow-y: auto;
                    max-height: 90vh;
                    scrollbar-width: thin;
                }
                .service-modal-image {
                    position: relative;
                    height: 20rem;
                    overflow: hidden;
                }
                .service-modal-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transform-origin: center top;
                    will-change: transform;
                }
                .service-modal-tint {
                    position: absolute;
                    inset: 0;
                }
                .service-modal-body {
                    padding: 2.5rem;
                }
                .service-modal-body h3 {
                    font-family: 'Crimson Text', serif;
                    font-size: 2.25rem;
                    font-weight: 600;
                    color: var(--foreground);
                    margin: 0 0 1.5rem;
                }
                .service-modal-body p {
                    font-size: 1.125rem;
                    line-height: 1.75;
                    color: rgba(61, 52, 45, 0.8);
                    margin: 0 0 1rem;
                }
                .service-modal-done {
                    margin-top: 2rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: var(--foreground);
                    color: var(--background);
                    font-weight: 500;
                    cursor: pointer;
                    transition: opacity 0.2s ease;
                }
                .service-modal-done:hover {
                    opacity: 0.9;
                }
                .service-modal-fade {
                    pointer-events: none;
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 4rem;
                    background: linear-gradient(to top, var(--background), transparent);
                }
                @media (max-width: 768px) {
                    .service-modal-image {
                        height: 16rem;
                    }
                    .service-modal-body {
                        padding: 2rem;
                    }
                    .service-modal-body h3 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </Overlay>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 1000.0, 500.0), 0.0);
        assert_eq!(scroll_progress(250.0, 1000.0, 500.0), 0.5);
        assert_eq!(scroll_progress(900.0, 1000.0, 500.0), 1.0);
        // Content shorter than the pane never scrolls
        assert_eq!(scroll_progress(10.0, 400.0, 500.0), 0.0);
    }

    #[test]
    fn parallax_ends() {
        assert_eq!(
            parallax_transform(0.0),
            "transform: translateY(0.00%) scale(1.0000);"
        );
        assert_eq!(
            parallax_transform(1.0),
            "transform: translateY(-20.00%) scale(1.1500);"
        );
    }

    #[test]
    fn splits_on_blank_lines() {
        let text = "First part.\n\nSecond part.\n\n\n\nThird.";
        assert_eq!(
            paragraphs(text).collect::<Vec<_>>(),
            vec!["First part.", "Second part.", "Third."]
        );
    }
}
