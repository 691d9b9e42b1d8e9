use yew::prelude::*;
use web_sys::MouseEvent;

use crate::utils::scroll_lock;

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub close_on_backdrop: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Blocking layer above the page. Page scroll stays locked while mounted.
#[function_component(Overlay)]
pub fn overlay(props: &OverlayProps) -> Html {
    use_effect_with_deps(
        move |_| {
            let guard = scroll_lock::acquire();
            move || guard.release()
        },
        (),
    );

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let close_on_backdrop = props.close_on_backdrop;
        Callback::from(move |_: MouseEvent| {
            if close_on_backdrop {
                on_close.emit(());
            }
        })
    };

    // Clicks inside the panel never reach the backdrop
    let on_panel = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div class="overlay-backdrop" onclick={on_backdrop}>
            <div class={classes!("overlay-panel", props.class.clone())} onclick={on_panel}>
                <button class="overlay-close" aria-label="Fermer" onclick={on_dismiss}>
                    <span>{"×"}</span>
                </button>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .overlay-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                    animation: overlayFade 0.3s ease-out;
                }
                .overlay-panel {
                    position: relative;
                    width: 100%;
                    max-width: 42rem;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: var(--background);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    animation: overlayRise 0.3s cubic-bezier(0.22, 1, 0.36, 1);
                }
                .overlay-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 10;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(61, 52, 45, 0.05);
                    color: var(--foreground);
                    font-size: 1.5rem;
                    line-height: 1;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .overlay-close:hover {
                    background: rgba(61, 52, 45, 0.1);
                }
                @keyframes overlayFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes overlayRise {
                    from { opacity: 0; transform: translateY(20px) scale(0.9); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                "#}
            </style>
        </div>
    }
}
