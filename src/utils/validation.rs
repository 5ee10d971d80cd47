use crate::utils::error::{FormError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Local part may not start with a dot and the address may not contain "..";
// both are checked outside the pattern since `regex` has no lookahead.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

// WHATWG "valid email address" as enforced by <input type="email">.
static BROWSER_EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("browser email pattern compiles")
});

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FormError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Length in UTF-16 code units, the unit a browser's `string.length` reports.
/// Characters outside the Basic Multilingual Plane count as two.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn exceeds_max_len(value: &str, max: usize) -> bool {
    text_len(value) > max
}

/// Strips surrounding whitespace, including a pasted byte-order mark.
pub fn trim_text(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Value of an `<input type="email">` as the browser validates and submits it:
/// line breaks removed, then leading and trailing ASCII whitespace stripped.
pub fn clean_email_input(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

/// Strict address shape used by the contact form.
pub fn is_email_shaped(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Looser shape accepted by a browser email input.
pub fn is_browser_email(value: &str) -> bool {
    BROWSER_EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("relay.contact_endpoint", "https://formspree.io/f/x").is_ok());
        assert!(validate_url("relay.contact_endpoint", "http://localhost:8080/f").is_ok());
        assert!(validate_url("relay.contact_endpoint", "").is_err());
        assert!(validate_url("relay.contact_endpoint", "invalid-url").is_err());
        assert!(validate_url("relay.contact_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("relay.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("relay.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("jane.o'neil+leads@mail.example.ng"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("a@b.c"));
        assert!(!is_email_shaped(".a@b.com"));
        assert!(!is_email_shaped("a..b@b.com"));
        assert!(!is_email_shaped("a.@b.com"));
        assert!(!is_email_shaped("no-at-sign.com"));
        assert!(!is_email_shaped(""));
    }

    #[test]
    fn test_browser_email_is_looser() {
        assert!(is_browser_email("a@b"));
        assert!(is_browser_email("a@b.com"));
        assert!(!is_browser_email("a@"));
        assert!(!is_browser_email("a b@c.com"));
        assert!(!is_browser_email("@c.com"));
    }

    #[test]
    fn test_text_len_counts_utf16_units() {
        assert_eq!(text_len("₦5,000"), 6);
        assert_eq!(text_len("😀"), 2);
        assert_eq!(text_len("Ada 😀"), 6);
        assert!(!exceeds_max_len("Ada", 3));
        assert!(exceeds_max_len("Adaa", 3));
        assert!(exceeds_max_len("A😀", 2));
    }

    #[test]
    fn test_trim_text_strips_byte_order_mark() {
        assert_eq!(trim_text("\u{FEFF}  Jane \t"), "Jane");
        assert_eq!(trim_text("Jane\u{FEFF}"), "Jane");
        assert_eq!(trim_text("\u{FEFF}"), "");
    }

    #[test]
    fn test_clean_email_input() {
        assert_eq!(clean_email_input(" ada@example.com "), "ada@example.com");
        assert_eq!(clean_email_input("ada@exa\nmple.com\r\n"), "ada@example.com");
        assert_eq!(clean_email_input(" \t\n "), "");
        assert_eq!(clean_email_input("ada@example.com"), "ada@example.com");
    }
}
