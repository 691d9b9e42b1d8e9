use log::debug;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config::CONTACT_ANCHOR_ID;

/// Vertical extent of the anchor, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub bottom: f64,
}

/// The button hides while any part of the anchor is on screen.
pub fn cta_visible(anchor: Option<AnchorRect>, viewport_height: f64) -> bool {
    match anchor {
        Some(rect) => !(rect.top < viewport_height && rect.bottom > 0.0),
        None => true,
    }
}

fn measure() -> Option<bool> {
    let window = window()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let anchor = window
        .document()?
        .get_element_by_id(CONTACT_ANCHOR_ID)
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            AnchorRect {
                top: rect.top(),
                bottom: rect.bottom(),
            }
        });
    Some(cta_visible(anchor, viewport_height))
}

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub on_click: Callback<()>,
}

#[function_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if let Some(next) = measure() {
                                visible.set(next);
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        debug!("Could not watch scroll for the contact button");
                    }
                    // Initial check
                    if let Some(next) = measure() {
                        visible.set(next);
                    }
                    Box::new(move || {
                        if window
                            .remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_err()
                        {
                            debug!("Could not remove contact button scroll listener");
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <>
            <button
                class={classes!("floating-cta", (!*visible).then(|| "hidden"))}
                aria-hidden={(!*visible).to_string()}
                onclick={onclick}
            >
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
                    />
                </svg>
                <span class="floating-cta-label">{"Nous contacter"}</span>
            </button>
            <style>
                {r#"
                .floating-cta {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: var(--primary);
                    color: white;
                    font-weight: 500;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    opacity: 1;
                    transform: scale(1);
                    transition: opacity 0.3s cubic-bezier(0.22, 1, 0.36, 1),
                                transform 0.3s cubic-bezier(0.22, 1, 0.36, 1),
                                box-shadow 0.2s ease;
                }
                .floating-cta:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .floating-cta.hidden {
                    opacity: 0;
                    transform: scale(0.8);
                    pointer-events: none;
                }
                .floating-cta svg {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                @media (max-width: 768px) {
                    .floating-cta {
                        padding: 1rem 1.5rem;
                    }
                    .floating-cta svg {
                        width: 1.25rem;
                        height: 1.25rem;
                    }
                    .floating-cta-label {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn visible_while_contact_is_below_the_fold() {
        let below = AnchorRect { top: 1200.0, bottom: 1800.0 };
        assert!(cta_visible(Some(below), VIEWPORT));
    }

    #[test]
    fn hidden_while_contact_is_on_screen() {
        let partly = AnchorRect { top: 700.0, bottom: 1300.0 };
        let fully = AnchorRect { top: 100.0, bottom: 600.0 };
        let peeking_from_above = AnchorRect { top: -500.0, bottom: 1.0 };
        assert!(!cta_visible(Some(partly), VIEWPORT));
        assert!(!cta_visible(Some(fully), VIEWPORT));
        assert!(!cta_visible(Some(peeking_from_above), VIEWPORT));
    }

    #[test]
    fn edges_count_as_off_screen() {
        let at_bottom_edge = AnchorRect { top: 800.0, bottom: 1400.0 };
        let scrolled_past = AnchorRect { top: -600.0, bottom: 0.0 };
        assert!(cta_visible(Some(at_bottom_edge), VIEWPORT));
        assert!(cta_visible(Some(scrolled_past), VIEWPORT));
    }

    #[test]
    fn missing_anchor_keeps_button() {
        assert!(cta_visible(None, VIEWPORT));
    }
}
