use anyhow::Context;
use clap::Parser;
use leadgen_forms::config::cli::Command;
use leadgen_forms::domain::catalog::{self, Division};
use leadgen_forms::domain::model::FieldErrors;
use leadgen_forms::utils::logger;
use leadgen_forms::{
    BookingForm, CliConfig, Confirmation, ConsoleNavigator, ConsoleNotifier, ContactForm,
    FormError, ReqwestRelay, SiteConfig, SubmitOutcome,
};
use std::fmt::Display;

const EXIT_INVALID: i32 = 1;
const EXIT_SUBMISSION_FAILED: i32 = 2;
const EXIT_CONFIG: i32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting leadgen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let exit_code = match run(config).await {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<FormError>() {
                Some(form_error) => {
                    tracing::error!(
                        "❌ {} (Category: {:?})",
                        form_error,
                        form_error.category()
                    );
                    eprintln!("❌ {}", form_error.user_friendly_message());
                    eprintln!("💡 Suggestion: {}", form_error.recovery_suggestion());
                }
                None => {
                    tracing::error!("❌ {:#}", e);
                    eprintln!("❌ {:#}", e);
                }
            }
            EXIT_CONFIG
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(config: CliConfig) -> anyhow::Result<i32> {
    match &config.command {
        Command::Services => {
            print_services();
            Ok(0)
        }
        Command::ThankYou(args) => {
            println!("{}", Confirmation::from_query(&args.query).render());
            Ok(0)
        }
        Command::Contact(args) => {
            let site = load_site(&config)?;
            let relay = relay_for(&site)?;
            let mut form = ContactForm::new(relay, ConsoleNotifier, site.contact_endpoint());
            for update in args.updates() {
                form.apply(update);
            }

            println!("{}", form.submit_label());
            let outcome = form.submit().await;
            Ok(report(outcome, form.errors(), None))
        }
        Command::Book(args) => {
            let site = load_site(&config)?;
            let relay = relay_for(&site)?;
            let mut form = BookingForm::new(relay, ConsoleNavigator, site.booking_endpoint());
            if let Some(link) = &args.link {
                form = form.with_query(link);
            }
            for update in args.updates() {
                form.apply(update);
            }

            println!("{}", form.submit_label());
            let outcome = form.submit().await;
            Ok(report(outcome, form.errors(), form.inline_error()))
        }
    }
}

fn load_site(config: &CliConfig) -> anyhow::Result<SiteConfig> {
    let site = config
        .site_config()
        .context("failed to load site configuration")?;
    tracing::debug!(
        "Relay endpoints: contact={}, booking={}",
        site.contact_endpoint(),
        site.booking_endpoint()
    );
    Ok(site)
}

fn relay_for(site: &SiteConfig) -> Result<ReqwestRelay, FormError> {
    ReqwestRelay::with_timeout(site.request_timeout())
}

fn report<F>(outcome: SubmitOutcome, errors: &FieldErrors<F>, inline_error: Option<&str>) -> i32
where
    F: Ord + Copy + Display,
{
    match outcome {
        SubmitOutcome::Sent => 0,
        SubmitOutcome::Invalid => {
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field, message);
            }
            EXIT_INVALID
        }
        SubmitOutcome::Failed(reason) => {
            if let Some(text) = inline_error {
                eprintln!("❌ {}", text);
            }
            tracing::debug!("Submission failed: {}", reason);
            EXIT_SUBMISSION_FAILED
        }
        SubmitOutcome::AlreadySubmitted => EXIT_SUBMISSION_FAILED,
    }
}

fn print_services() {
    for division in Division::ALL {
        println!("{} ({})", division.title(), division.route());
        for service in division.services() {
            println!("  - {:<30} {}", service.title, catalog::booking_link(service.title));
        }
        println!(
            "  * {:<30} {}",
            "Book the whole division",
            catalog::booking_link(division.title())
        );
    }
}
