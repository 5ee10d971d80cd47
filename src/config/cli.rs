use crate::config::toml_config::SiteConfig;
use crate::domain::model::{BookingFieldUpdate, ContactFieldUpdate};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "leadgen")]
#[command(about = "Send the contact and service booking forms of the Derivative Group site")]
#[command(version)]
pub struct CliConfig {
    #[arg(long, global = true, help = "Site configuration file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Override the contact form relay endpoint")]
    pub contact_endpoint: Option<String>,

    #[arg(long, global = true, help = "Override the booking form relay endpoint")]
    pub booking_endpoint: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send a message through the contact form
    Contact(ContactArgs),
    /// Request a service booking
    Book(BookArgs),
    /// Render the booking confirmation page for a query string
    ThankYou(ThankYouArgs),
    /// List bookable services and their booking links
    Services,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

impl ContactArgs {
    pub fn updates(&self) -> Vec<ContactFieldUpdate> {
        vec![
            ContactFieldUpdate::Name(self.name.clone()),
            ContactFieldUpdate::Email(self.email.clone()),
            ContactFieldUpdate::Phone(self.phone.clone()),
            ContactFieldUpdate::Message(self.message.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct BookArgs {
    /// Query of the booking link that opened the form, e.g. "service=Asset+Management"
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long)]
    pub service: Option<String>,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub company: String,
    /// Preferred date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    /// Preferred time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,
    #[arg(long, default_value = "")]
    pub budget: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

impl BookArgs {
    /// Service is only updated when given, so a deep-linked choice survives.
    pub fn updates(&self) -> Vec<BookingFieldUpdate> {
        let mut updates = Vec::new();
        if let Some(service) = &self.service {
            updates.push(BookingFieldUpdate::Service(service.clone()));
        }
        updates.extend([
            BookingFieldUpdate::Name(self.name.clone()),
            BookingFieldUpdate::Email(self.email.clone()),
            BookingFieldUpdate::Phone(self.phone.clone()),
            BookingFieldUpdate::Company(self.company.clone()),
            BookingFieldUpdate::PreferredDate(self.date),
            BookingFieldUpdate::PreferredTime(self.time),
            BookingFieldUpdate::Budget(self.budget.clone()),
            BookingFieldUpdate::Message(self.message.clone()),
        ]);
        updates
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ThankYouArgs {
    /// Query string of the confirmation route, e.g. "service=Business+Funding&name=Ada"
    #[arg(default_value = "")]
    pub query: String,
}

fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_time(raw: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|err| format!("failed to parse '{raw}' as HH:MM ({err})"))
}

impl CliConfig {
    /// Loads the configuration file (or defaults), applies endpoint
    /// overrides, and validates the result.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut site = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(endpoint) = &self.contact_endpoint {
            site.relay.contact_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.booking_endpoint {
            site.relay.booking_endpoint = endpoint.clone();
        }

        site.validate()?;
        Ok(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::DEFAULT_BOOKING_ENDPOINT;

    #[test]
    fn test_book_args_parse_pickers() {
        let cli = CliConfig::try_parse_from([
            "leadgen",
            "book",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--date",
            "2026-11-03",
            "--time",
            "14:30",
        ])
        .unwrap();

        let Command::Book(args) = cli.command else {
            panic!("expected book command");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 11, 3));
        assert_eq!(args.time, NaiveTime::from_hms_opt(14, 30, 0));
        assert!(!args
            .updates()
            .iter()
            .any(|update| matches!(update, BookingFieldUpdate::Service(_))));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = CliConfig::try_parse_from(["leadgen", "book", "--date", "03/11/2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_override_wins() {
        let cli = CliConfig::try_parse_from([
            "leadgen",
            "contact",
            "--contact-endpoint",
            "http://localhost:8080/f/contact",
        ])
        .unwrap();

        let site = cli.site_config().unwrap();
        assert_eq!(site.contact_endpoint(), "http://localhost:8080/f/contact");
        assert_eq!(site.booking_endpoint(), DEFAULT_BOOKING_ENDPOINT);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig::try_parse_from(["leadgen", "services", "--booking-endpoint", "nope"])
            .unwrap();
        assert!(cli.site_config().is_err());
    }
}
