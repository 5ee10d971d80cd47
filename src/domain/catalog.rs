//! Services offered on the site and the routes that lead to the booking form.

use url::form_urlencoded;

pub mod routes {
    pub const HOME: &str = "/";
    pub const CONTACT: &str = "/contact";
    pub const SERVICE_BOOKING: &str = "/service-booking";
    pub const THANK_YOU: &str = "/thank-you";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    FinancialServices,
    PropertyServices,
    ConsultingServices,
}

impl Division {
    pub const ALL: [Division; 3] = [
        Division::FinancialServices,
        Division::PropertyServices,
        Division::ConsultingServices,
    ];

    /// Also the value the division's call-to-action pre-selects on the booking form.
    pub fn title(&self) -> &'static str {
        match self {
            Division::FinancialServices => "Financial Services",
            Division::PropertyServices => "Property Services",
            Division::ConsultingServices => "Consulting Services",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Division::FinancialServices => "/financial-services",
            Division::PropertyServices => "/property",
            Division::ConsultingServices => "/consulting",
        }
    }

    pub fn services(&self) -> impl Iterator<Item = &'static ServiceOffering> + '_ {
        SERVICES.iter().filter(move |service| service.division == *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub division: Division,
}

const fn offering(title: &'static str, division: Division) -> ServiceOffering {
    ServiceOffering { title, division }
}

/// Booking select options, in display order.
pub const SERVICES: [ServiceOffering; 12] = [
    offering("Business Funding", Division::FinancialServices),
    offering("Financial Advisory", Division::FinancialServices),
    offering("Investment Guidance", Division::FinancialServices),
    offering("Corporate Finance", Division::FinancialServices),
    offering("Property Investment Advisory", Division::PropertyServices),
    offering("Development Support", Division::PropertyServices),
    offering("Asset Management", Division::PropertyServices),
    offering("Transaction Advisory", Division::PropertyServices),
    offering("Strategic Planning", Division::ConsultingServices),
    offering("Operations Optimization", Division::ConsultingServices),
    offering("Organizational Development", Division::ConsultingServices),
    offering("Innovation & Growth", Division::ConsultingServices),
];

pub fn all() -> &'static [ServiceOffering] {
    &SERVICES
}

pub fn find(title: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|service| service.title == title)
}

/// Division for a booking value, which is either a service or a division title.
pub fn division_of(value: &str) -> Option<Division> {
    find(value).map(|service| service.division).or_else(|| {
        Division::ALL
            .into_iter()
            .find(|division| division.title() == value)
    })
}

/// Deep link into the booking form with `value` pre-selected.
pub fn booking_link(value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("service", value)
        .finish();
    format!("{}?{}", routes::SERVICE_BOOKING, query)
}
