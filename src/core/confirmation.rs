use crate::domain::catalog::routes;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONFIRMATION_LINKS: [Link; 2] = [
    Link {
        label: "Back to Home",
        href: routes::HOME,
    },
    Link {
        label: "Contact Us",
        href: routes::CONTACT,
    },
];

/// Thank-you page content for a completed booking. The values are shown as
/// given and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Confirmation {
    service: Option<String>,
    name: Option<String>,
}

impl Confirmation {
    pub fn new(service: Option<String>, name: Option<String>) -> Self {
        Self {
            service: service.filter(|value| !value.is_empty()),
            name: name.filter(|value| !value.is_empty()),
        }
    }

    /// Reads `service` and `name` from a query string, with or without `?`.
    /// Repeated keys keep their first value; empty values count as absent.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut service = None;
        let mut name = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "service" if service.is_none() => service = Some(value.into_owned()),
                "name" if name.is_none() => name = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::new(service, name)
    }

    /// Same as [`from_query`](Self::from_query) for a full location such as
    /// `/thank-you?name=Ada#top`.
    pub fn from_location(location: &str) -> Self {
        let without_fragment = location.split('#').next().unwrap_or_default();
        match without_fragment.split_once('?') {
            Some((_, query)) => Self::from_query(query),
            None => Self::default(),
        }
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn heading(&self) -> String {
        match &self.name {
            Some(name) => format!("Thank you, {}!", name),
            None => "Thank you!".to_string(),
        }
    }

    pub fn body(&self) -> String {
        let subject = match &self.service {
            Some(service) => format!(" for {}", service),
            None => String::new(),
        };
        format!(
            "Your booking request{} has been received. We will review it and contact you shortly to confirm details.",
            subject
        )
    }

    pub fn links(&self) -> &'static [Link] {
        &CONFIRMATION_LINKS
    }

    pub fn render(&self) -> String {
        let links = self
            .links()
            .iter()
            .map(|link| format!("[{}]({})", link.label, link.href))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n\n{}\n\n{}", self.heading(), self.body(), links)
    }
}
