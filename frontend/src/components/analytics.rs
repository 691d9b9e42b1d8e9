use log::{debug, info};
use web_sys::window;
use yew::prelude::*;

use crate::config::AnalyticsConfig;

pub const SCRIPT_ID: &str = "plausible-analytics";

pub fn script_attributes(config: &AnalyticsConfig) -> Vec<(&'static str, String)> {
    vec![
        ("id", SCRIPT_ID.to_string()),
        ("defer", String::new()),
        ("data-domain", config.domain.to_string()),
        ("data-api", config.endpoint.to_string()),
        ("src", config.script_src.to_string()),
    ]
}

fn inject(config: &AnalyticsConfig) -> Option<()> {
    let document = window()?.document()?;
    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return Some(());
    }
    let head = document.head()?;
    let script = document.create_element("script").ok()?;
    for (name, value) in script_attributes(config) {
        script.set_attribute(name, &value).ok()?;
    }
    head.append_child(&script).ok()?;
    Some(())
}

/// Loads the Plausible tracker once. Nothing waits on it and failures only
/// show up in the debug log.
#[function_component(Analytics)]
pub fn analytics() -> Html {
    use_effect_with_deps(
        move |_| {
            let config = AnalyticsConfig::default();
            if !config.enabled {
                debug!("Analytics disabled in this build");
            } else if inject(&config).is_some() {
                info!("Analytics loaded for {}", config.domain);
            } else {
                debug!("Could not inject analytics script");
            }
            || ()
        },
        (),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_points_at_the_collector() {
        let attrs = script_attributes(&AnalyticsConfig {
            enabled: true,
            ..AnalyticsConfig::default()
        });
        let get = |name: &str| {
            attrs
                .iter()
                .find(|(attr, _)| *attr == name)
                .map(|(_, value)| value.as_str())
        };

        assert_eq!(get("data-domain"), Some("ondama.fr"));
        assert_eq!(
            get("data-api"),
            Some("https://analytics.nicolasmaitre.dev/api/event")
        );
        assert_eq!(get("id"), Some(SCRIPT_ID));
        assert!(get("defer").is_some());
    }
}
