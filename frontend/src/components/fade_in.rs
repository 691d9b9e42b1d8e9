use log::debug;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

/// The viewport is shrunk by this much on both ends before a section counts
/// as in view.
const REVEAL_MARGIN: f64 = 100.0;

pub fn in_reveal_zone(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN && bottom > REVEAL_MARGIN
}

#[derive(Properties, PartialEq)]
pub struct FadeInSectionProps {
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Slides its content in the first time it scrolls into view.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let deps = *revealed;
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let check = {
                    let node = node.clone();
                    let revealed = revealed.clone();
                    move || {
                        let Some(element) = node.cast::<Element>() else {
                            return;
                        };
                        let Some(viewport_height) = window()
                            .and_then(|w| w.inner_height().ok())
                            .and_then(|h| h.as_f64())
                        else {
                            return;
                        };
                        let rect = element.get_bounding_client_rect();
                        if in_reveal_zone(rect.top(), rect.bottom(), viewport_height) {
                            revealed.set(true);
                        }
                    }
                };

                check();
                let destructor: Box<dyn FnOnce()> = match window() {
                    Some(window) if !*revealed => {
                        let callback = Closure::<dyn Fn()>::new(check);
                        if window
                            .add_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .is_err()
                        {
                            debug!("Could not watch scroll for fade-in");
                        }
                        Box::new(move || {
                            if window
                                .remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                )
                                .is_err()
                            {
                                debug!("Could not remove fade-in scroll listener");
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            deps,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("fade-in-section", (*revealed).then(|| "visible"))}
            style={format!("transition-delay: {}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_to_clear_the_margin() {
        assert!(!in_reveal_zone(750.0, 1200.0, 800.0));
        assert!(in_reveal_zone(650.0, 1200.0, 800.0));
        assert!(!in_reveal_zone(-500.0, 80.0, 800.0));
        assert!(in_reveal_zone(-500.0, 150.0, 800.0));
    }
}
