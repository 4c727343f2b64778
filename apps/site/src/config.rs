use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

/// Site configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding index.html, styles.css and the rest of the static document.
    pub site_root: PathBuf,
    /// Recipient of the contact form's mailto link.
    pub contact_email: String,
    pub transition_delay: Duration,
    pub swipe_threshold_px: f64,
    pub section_order: Vec<String>,
    pub info_sections: Vec<String>,
    pub default_section: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let swipe_threshold_px = var("SWIPE_THRESHOLD_PX", "50")
            .parse::<f64>()
            .context("SWIPE_THRESHOLD_PX must be a number")?;
        ensure!(
            swipe_threshold_px.is_finite() && swipe_threshold_px >= 0.0,
            "SWIPE_THRESHOLD_PX must be a finite, non-negative number of pixels (got {swipe_threshold_px})"
        );

        Ok(Config {
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            site_root: PathBuf::from(var("SITE_ROOT", "./public")),
            contact_email: lookup("CONTACT_EMAIL")
                .filter(|v| !v.trim().is_empty())
                .context("Required environment variable 'CONTACT_EMAIL' is not set")?,
            transition_delay: Duration::from_millis(
                var("TRANSITION_DELAY_MS", "50")
                    .parse::<u64>()
                    .context("TRANSITION_DELAY_MS must be a whole number of milliseconds")?,
            ),
            swipe_threshold_px,
            section_order: split_list(&var("SECTION_ORDER", "overview,timeline,skills")),
            info_sections: split_list(&var("INFO_SECTIONS", "changelog,projects")),
            default_section: lookup("DEFAULT_SECTION").filter(|v| !v.trim().is_empty()),
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_only_contact_email() {
        let config = Config::from_lookup(lookup_from(&[("CONTACT_EMAIL", "me@example.com")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.site_root, PathBuf::from("./public"));
        assert_eq!(config.transition_delay, Duration::from_millis(50));
        assert_eq!(config.swipe_threshold_px, 50.0);
        assert_eq!(config.section_order, vec!["overview", "timeline", "skills"]);
        assert_eq!(config.info_sections, vec!["changelog", "projects"]);
        assert!(config.default_section.is_none());
    }

    #[test]
    fn test_missing_contact_email_fails() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("CONTACT_EMAIL"));
    }

    #[test]
    fn test_invalid_port_fails_with_context() {
        let err = Config::from_lookup(lookup_from(&[
            ("CONTACT_EMAIL", "me@example.com"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_swipe_threshold_must_be_finite_and_non_negative() {
        for bad in ["NaN", "inf", "-inf", "-10"] {
            let err = Config::from_lookup(lookup_from(&[
                ("CONTACT_EMAIL", "me@example.com"),
                ("SWIPE_THRESHOLD_PX", bad),
            ]))
            .unwrap_err();
            assert!(
                err.to_string().contains("SWIPE_THRESHOLD_PX"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_swipe_threshold_is_allowed() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTACT_EMAIL", "me@example.com"),
            ("SWIPE_THRESHOLD_PX", "0"),
        ]))
        .unwrap();
        assert_eq!(config.swipe_threshold_px, 0.0);
    }

    #[test]
    fn test_section_lists_are_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTACT_EMAIL", "me@example.com"),
            ("SECTION_ORDER", " overview , skills,, "),
            ("INFO_SECTIONS", ""),
            ("DEFAULT_SECTION", "skills"),
        ]))
        .unwrap();
        assert_eq!(config.section_order, vec!["overview", "skills"]);
        assert!(config.info_sections.is_empty());
        assert_eq!(config.default_section.as_deref(), Some("skills"));
    }
}
