
pub const DEFAULT_MAILER_URL: &str = "https://mailer.ondama.fr";
pub const MAIL_SEND_PATH: &str = "/api/mail/send";

/// Upper bound on a single mail request. The mailer itself sets none.
pub const MAIL_TIMEOUT_MS: u32 = 15_000;

pub const ANALYTICS_DOMAIN: &str = "ondama.fr";
pub const ANALYTICS_ENDPOINT: &str = "https://analytics.nicolasmaitre.dev/api/event";
pub const ANALYTICS_SCRIPT: &str = "https://analytics.nicolasmaitre.dev/js/script.js";

/// Id of the section the floating contact button hides behind.
pub const CONTACT_ANCHOR_ID: &str = "contact-section";

#[derive(Clone, Debug, PartialEq)]
pub struct MailerConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u32,
}

impl MailerConfig {
    /// Values baked in at build time: `MAILER_URL=... MAILER_API_KEY=... trunk build`.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("MAILER_URL"), option_env!("MAILER_API_KEY"))
    }

    pub fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let base_url = match base_url {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => DEFAULT_MAILER_URL.to_string(),
        };

        Self {
            base_url,
            api_key: api_key.unwrap_or_default().to_string(),
            timeout_ms: MAIL_TIMEOUT_MS,
        }
    }

    pub fn send_url(&self) -> String {
        format!("{}{}", self.base_url, MAIL_SEND_PATH)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsConfig {
    pub domain: &'static str,
    pub endpoint: &'static str,
    pub script_src: &'static str,
    pub enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            domain: ANALYTICS_DOMAIN,
            endpoint: ANALYTICS_ENDPOINT,
            script_src: ANALYTICS_SCRIPT,
            enabled: analytics_enabled(),
        }
    }
}

#[cfg(debug_assertions)]
fn analytics_enabled() -> bool {
    false // Keep local development out of the stats
}

#[cfg(not(debug_assertions))]
fn analytics_enabled() -> bool {
    true
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_host() {
        let config = MailerConfig::from_values(None, None);
        assert_eq!(config.send_url(), "https://mailer.ondama.fr/api/mail/send");
        assert_eq!(config.api_key, "");

        let empty = MailerConfig::from_values(Some(""), Some(""));
        assert_eq!(empty.base_url, DEFAULT_MAILER_URL);
    }

    #[test]
    fn custom_base_url_gets_send_path() {
        let config = MailerConfig::from_values(Some("http://localhost:8080/"), Some("secret"));
        assert_eq!(config.send_url(), "http://localhost:8080/api/mail/send");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout_ms, 15_000);
    }
}
