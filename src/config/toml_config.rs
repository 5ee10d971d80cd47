use crate::utils::error::{FormError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/your-form-id";
pub const DEFAULT_BOOKING_ENDPOINT: &str = "https://formspree.io/f/xlgrvzde";

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

/// Site configuration file.
///
/// ```toml
/// [relay]
/// contact_endpoint = "https://formspree.io/f/${CONTACT_FORM_ID}"
/// booking_endpoint = "https://formspree.io/f/xlgrvzde"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_contact_endpoint")]
    pub contact_endpoint: String,
    #[serde(default = "default_booking_endpoint")]
    pub booking_endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: default_contact_endpoint(),
            booking_endpoint: default_booking_endpoint(),
            timeout_seconds: None,
        }
    }
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

fn default_booking_endpoint() -> String {
    DEFAULT_BOOKING_ENDPOINT.to_string()
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` with the environment value.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("relay.contact_endpoint", &self.relay.contact_endpoint)?;
        validate_url("relay.booking_endpoint", &self.relay.booking_endpoint)?;

        if let Some(timeout) = self.relay.timeout_seconds {
            validate_positive_number("relay.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }

    pub fn contact_endpoint(&self) -> &str {
        &self.relay.contact_endpoint
    }

    pub fn booking_endpoint(&self) -> &str {
        &self.relay.booking_endpoint
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.relay.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_relay_section() {
        let toml_content = r#"
[relay]
contact_endpoint = "https://relay.example.com/f/contact"
booking_endpoint = "https://relay.example.com/f/booking"
timeout_seconds = 15
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.contact_endpoint(), "https://relay.example.com/f/contact");
        assert_eq!(config.booking_endpoint(), "https://relay.example.com/f/booking");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config.contact_endpoint(), DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(config.booking_endpoint(), DEFAULT_BOOKING_ENDPOINT);
        assert_eq!(config.request_timeout(), None);

        let config = SiteConfig::from_toml_str("[relay]\ntimeout_seconds = 3\n").unwrap();
        assert_eq!(config.contact_endpoint(), DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LEADGEN_TEST_FORM_ID", "abc123");

        let toml_content = r#"
[relay]
contact_endpoint = "https://formspree.io/f/${LEADGEN_TEST_FORM_ID}"
booking_endpoint = "https://formspree.io/f/${LEADGEN_TEST_UNSET_ID}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.contact_endpoint(), "https://formspree.io/f/abc123");
        assert_eq!(
            config.booking_endpoint(),
            "https://formspree.io/f/${LEADGEN_TEST_UNSET_ID}"
        );

        std::env::remove_var("LEADGEN_TEST_FORM_ID");
    }

    #[test]
    fn test_config_validation() {
        let config = SiteConfig::from_toml_str(
            "[relay]\ncontact_endpoint = \"invalid-url\"\n",
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(FormError::InvalidConfigValueError { ref field, .. }) if field == "relay.contact_endpoint"
        ));

        let config = SiteConfig::from_toml_str("[relay]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = SiteConfig::from_toml_str("[relay\n");
        assert!(matches!(
            result,
            Err(FormError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[relay]\nbooking_endpoint = \"http://localhost:9000/f/booking\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.booking_endpoint(), "http://localhost:9000/f/booking");
    }
}
