//! Runtime feature flags for the Bookify widget.
//!
//! A feature is active when its `use_*` flag is set and its configuration
//! section is present.
//!
//! ## Available Features
//!
//! - `use_mail_relay` + `[mail_relay]`: deliver bookings through the form relay.
//!   When off, bookings are only written to the local log.

use bookify_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the mail relay is enabled at runtime.
pub fn is_mail_relay_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_mail_relay, config.mail_relay.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookify_config::MailRelayConfig;

    #[test]
    fn test_relay_needs_flag_and_section() {
        let mut config = AppConfig::default();
        assert!(!is_mail_relay_enabled(&config));

        config.use_mail_relay = true;
        assert!(!is_mail_relay_enabled(&config));

        config.mail_relay = Some(MailRelayConfig {
            endpoint: "https://relay.example/f/abc".to_string(),
            subject: "Booking".to_string(),
            timeout_secs: 30,
        });
        assert!(is_mail_relay_enabled(&config));

        config.use_mail_relay = false;
        assert!(!is_mail_relay_enabled(&config));
    }
}
