use crate::domain::model::{
    BookingField, BookingRequest, ContactField, ContactRequest, FieldErrors,
    NormalizedContactRequest,
};
use crate::utils::validation::{
    clean_email_input, exceeds_max_len, is_browser_email, is_email_shaped, trim_text,
};

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const PHONE_MAX_CHARS: usize = 20;
pub const MESSAGE_MAX_CHARS: usize = 2000;

pub const BOOKING_REQUIRED_MESSAGE: &str = "Please fill out this field.";
pub const BOOKING_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Checks every contact rule and returns the trimmed request, or every
/// failing field with one message each. When a field breaks several rules the
/// last rule checked wins.
pub fn validate_contact(
    request: &ContactRequest,
) -> Result<NormalizedContactRequest, FieldErrors<ContactField>> {
    let name = trim_text(&request.name);
    let email = trim_text(&request.email);
    let phone = trim_text(&request.phone);
    let message = trim_text(&request.message);

    let mut errors = FieldErrors::new();

    if name.is_empty() {
        errors.insert(ContactField::Name, "Name is required");
    }
    if exceeds_max_len(name, NAME_MAX_CHARS) {
        errors.insert(ContactField::Name, "Name must be less than 100 characters");
    }

    if !is_email_shaped(email) {
        errors.insert(ContactField::Email, "Invalid email address");
    }
    if exceeds_max_len(email, EMAIL_MAX_CHARS) {
        errors.insert(ContactField::Email, "Email must be less than 255 characters");
    }

    if exceeds_max_len(phone, PHONE_MAX_CHARS) {
        errors.insert(ContactField::Phone, "Phone must be less than 20 characters");
    }

    if message.is_empty() {
        errors.insert(ContactField::Message, "Message is required");
    }
    if exceeds_max_len(message, MESSAGE_MAX_CHARS) {
        errors.insert(
            ContactField::Message,
            "Message must be less than 2000 characters",
        );
    }

    if errors.is_empty() {
        Ok(NormalizedContactRequest::new(name, email, phone, message))
    } else {
        Err(errors)
    }
}

/// Constraints a browser enforces on the booking form before it submits:
/// `required` on name and email, and `type="email"` on email. The email is
/// checked after the browser's input cleanup; other values are checked as
/// typed, without trimming or length bounds.
pub fn validate_booking(request: &BookingRequest) -> Result<(), FieldErrors<BookingField>> {
    let mut errors = FieldErrors::new();

    if request.name.is_empty() {
        errors.insert(BookingField::Name, BOOKING_REQUIRED_MESSAGE);
    }

    let email = clean_email_input(&request.email);
    if email.is_empty() {
        errors.insert(BookingField::Email, BOOKING_REQUIRED_MESSAGE);
    } else if !is_browser_email(&email) {
        errors.insert(BookingField::Email, BOOKING_EMAIL_MESSAGE);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, phone: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_contact_is_trimmed() {
        let normalized =
            validate_contact(&contact("  Jane  ", " jane@example.com ", "  ", "\nhi\t")).unwrap();

        assert_eq!(normalized.name(), "Jane");
        assert_eq!(normalized.email(), "jane@example.com");
        assert_eq!(normalized.phone(), "");
        assert_eq!(normalized.message(), "hi");
    }

    #[test]
    fn test_trimming_is_idempotent() {
        let padded = validate_contact(&contact("  Jane  ", "a@b.com", "", "hi")).unwrap();
        let plain = validate_contact(&contact("Jane", "a@b.com", "", "hi")).unwrap();
        assert_eq!(padded, plain);
    }

    #[test]
    fn test_empty_name_is_the_only_error() {
        let errors = validate_contact(&contact("", "a@b.com", "", "hi")).unwrap_err();

        assert_eq!(errors.fields(), vec![ContactField::Name]);
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate_contact(&contact("   ", "a@b.com", "", "   ")).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![ContactField::Name, ContactField::Message]
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate_contact(&contact("", "nope", &"1".repeat(21), "")).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ContactField::Email), Some("Invalid email address"));
        assert_eq!(
            errors.get(ContactField::Phone),
            Some("Phone must be less than 20 characters")
        );
        assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
    }

    #[test]
    fn test_length_bounds() {
        let at_limit = contact(
            &"n".repeat(NAME_MAX_CHARS),
            "a@b.com",
            &"1".repeat(PHONE_MAX_CHARS),
            &"m".repeat(MESSAGE_MAX_CHARS),
        );
        assert!(validate_contact(&at_limit).is_ok());

        let over = contact(
            &"n".repeat(NAME_MAX_CHARS + 1),
            "a@b.com",
            "",
            &"m".repeat(MESSAGE_MAX_CHARS + 1),
        );
        let errors = validate_contact(&over).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Name),
            Some("Name must be less than 100 characters")
        );
        assert_eq!(
            errors.get(ContactField::Message),
            Some("Message must be less than 2000 characters")
        );
    }

    #[test]
    fn test_padding_does_not_count_towards_length() {
        let padded = format!("   {}   ", "n".repeat(NAME_MAX_CHARS));
        assert!(validate_contact(&contact(&padded, "a@b.com", "", "hi")).is_ok());
    }

    #[test]
    fn test_long_email_reports_length_message() {
        let email = format!("{}@example.com", "a".repeat(250));
        let errors = validate_contact(&contact("Jane", &email, "", "hi")).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Email),
            Some("Email must be less than 255 characters")
        );
    }

    #[test]
    fn test_booking_requires_name_and_email() {
        let errors = validate_booking(&BookingRequest::default()).unwrap_err();
        assert_eq!(errors.get(BookingField::Name), Some(BOOKING_REQUIRED_MESSAGE));
        assert_eq!(errors.get(BookingField::Email), Some(BOOKING_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_booking_email_uses_browser_rules() {
        let mut request = BookingRequest {
            name: "Ada".to_string(),
            email: "ada".to_string(),
            ..BookingRequest::default()
        };
        let errors = validate_booking(&request).unwrap_err();
        assert_eq!(errors.fields(), vec![BookingField::Email]);
        assert_eq!(errors.get(BookingField::Email), Some(BOOKING_EMAIL_MESSAGE));

        request.email = "ada@localhost".to_string();
        assert!(validate_booking(&request).is_ok());
    }

    #[test]
    fn test_contact_length_counts_utf16_units() {
        let emoji_name = "😀".repeat(NAME_MAX_CHARS / 2 + 10);
        let errors = validate_contact(&contact(&emoji_name, "a@b.com", "", "hi")).unwrap_err();
        assert_eq!(
            errors.get(ContactField::Name),
            Some("Name must be less than 100 characters")
        );

        let at_limit = "😀".repeat(NAME_MAX_CHARS / 2);
        assert!(validate_contact(&contact(&at_limit, "a@b.com", "", "hi")).is_ok());
    }

    #[test]
    fn test_contact_trims_byte_order_mark() {
        let normalized =
            validate_contact(&contact("\u{FEFF}Jane ", "a@b.com\u{FEFF}", "", " hi")).unwrap();
        assert_eq!(normalized.name(), "Jane");
        assert_eq!(normalized.email(), "a@b.com");

        let errors = validate_contact(&contact("\u{FEFF}", "a@b.com", "", "hi")).unwrap_err();
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    }

    #[test]
    fn test_booking_email_is_cleaned_before_checks() {
        let mut request = BookingRequest {
            name: "Ada".to_string(),
            email: " ada@example.com ".to_string(),
            ..BookingRequest::default()
        };
        assert!(validate_booking(&request).is_ok());

        request.email = " \t\n ".to_string();
        let errors = validate_booking(&request).unwrap_err();
        assert_eq!(errors.get(BookingField::Email), Some(BOOKING_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_booking_name_is_not_trimmed() {
        let request = BookingRequest {
            name: "   ".to_string(),
            email: "ada@example.com".to_string(),
            ..BookingRequest::default()
        };
        assert!(validate_booking(&request).is_ok());
    }

    #[test]
    fn test_booking_has_no_length_bounds() {
        let request = BookingRequest {
            name: "A".repeat(500),
            email: "ada@example.com".to_string(),
            message: "m".repeat(5000),
            ..BookingRequest::default()
        };
        assert!(validate_booking(&request).is_ok());
    }
}
