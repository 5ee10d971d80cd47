use crate::utils::validation::clean_email_input;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Raw contact form values exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edit to one contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFieldUpdate {
    Name(String),
    Email(String),
    Phone(String),
    Message(String),
}

impl ContactFieldUpdate {
    pub fn field(&self) -> ContactField {
        match self {
            ContactFieldUpdate::Name(_) => ContactField::Name,
            ContactFieldUpdate::Email(_) => ContactField::Email,
            ContactFieldUpdate::Phone(_) => ContactField::Phone,
            ContactFieldUpdate::Message(_) => ContactField::Message,
        }
    }
}

impl ContactRequest {
    /// Applies an edit and returns the field it touched.
    pub fn apply(&mut self, update: ContactFieldUpdate) -> ContactField {
        let field = update.field();
        match update {
            ContactFieldUpdate::Name(value) => self.name = value,
            ContactFieldUpdate::Email(value) => self.email = value,
            ContactFieldUpdate::Phone(value) => self.phone = value,
            ContactFieldUpdate::Message(value) => self.message = value,
        }
        field
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Trimmed contact values that passed every rule. Only built by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedContactRequest {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl NormalizedContactRequest {
    pub(crate) fn new(name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Per-field error messages, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message, replacing any earlier one for the same field.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn remove(&mut self, field: F) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> Vec<F> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl<F: Ord + Copy + fmt::Display> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Raw booking form values. Date and time come from native pickers, so they
/// are either a parsed value or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub service: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<NaiveTime>,
    pub budget: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    Service,
    Name,
    Email,
    Phone,
    Company,
    PreferredDate,
    PreferredTime,
    Budget,
    Message,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Service => "service",
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::Company => "company",
            BookingField::PreferredDate => "preferredDate",
            BookingField::PreferredTime => "preferredTime",
            BookingField::Budget => "budget",
            BookingField::Message => "message",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingFieldUpdate {
    Service(String),
    Name(String),
    Email(String),
    Phone(String),
    Company(String),
    PreferredDate(Option<NaiveDate>),
    PreferredTime(Option<NaiveTime>),
    Budget(String),
    Message(String),
}

impl BookingFieldUpdate {
    pub fn field(&self) -> BookingField {
        match self {
            BookingFieldUpdate::Service(_) => BookingField::Service,
            BookingFieldUpdate::Name(_) => BookingField::Name,
            BookingFieldUpdate::Email(_) => BookingField::Email,
            BookingFieldUpdate::Phone(_) => BookingField::Phone,
            BookingFieldUpdate::Company(_) => BookingField::Company,
            BookingFieldUpdate::PreferredDate(_) => BookingField::PreferredDate,
            BookingFieldUpdate::PreferredTime(_) => BookingField::PreferredTime,
            BookingFieldUpdate::Budget(_) => BookingField::Budget,
            BookingFieldUpdate::Message(_) => BookingField::Message,
        }
    }
}

impl BookingRequest {
    pub fn apply(&mut self, update: BookingFieldUpdate) -> BookingField {
        let field = update.field();
        match update {
            BookingFieldUpdate::Service(value) => self.service = value,
            BookingFieldUpdate::Name(value) => self.name = value,
            BookingFieldUpdate::Email(value) => self.email = value,
            BookingFieldUpdate::Phone(value) => self.phone = value,
            BookingFieldUpdate::Company(value) => self.company = value,
            BookingFieldUpdate::PreferredDate(value) => self.preferred_date = value,
            BookingFieldUpdate::PreferredTime(value) => self.preferred_time = value,
            BookingFieldUpdate::Budget(value) => self.budget = value,
            BookingFieldUpdate::Message(value) => self.message = value,
        }
        field
    }

    pub fn to_payload(&self, submitted_at: DateTime<Utc>) -> BookingPayload {
        BookingPayload {
            service: self.service.clone(),
            name: self.name.clone(),
            email: clean_email_input(&self.email),
            phone: self.phone.clone(),
            company: self.company.clone(),
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
            budget: self.budget.clone(),
            message: self.message.clone(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Wire body of a booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub service: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(serialize_with = "serialize_optional_date")]
    pub preferred_date: Option<NaiveDate>,
    #[serde(serialize_with = "serialize_optional_time")]
    pub preferred_time: Option<NaiveTime>,
    pub budget: String,
    pub message: String,
    pub timestamp: String,
}

// An untouched picker submits an empty string, not null.
fn serialize_optional_date<S: Serializer>(
    value: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_str(""),
    }
}

fn serialize_optional_time<S: Serializer>(
    value: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(time) => serializer.serialize_str(&time.format("%H:%M").to_string()),
        None => serializer.serialize_str(""),
    }
}
