use crate::core::confirmation::Confirmation;
use crate::domain::catalog::routes;
use crate::domain::ports::{Navigator, NotificationKind, Notifier};

/// Prints toasts to the terminal: successes on stdout, errors on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => {
                tracing::info!("{}", kind.title());
                println!("✅ {} {}", kind.title(), message);
            }
            NotificationKind::Error => {
                tracing::error!("{}", kind.title());
                eprintln!("❌ {}: {}", kind.title(), message);
            }
        }
    }
}

/// Follows navigations by printing the target, rendering the thank-you page
/// when that is where the form leads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, location: &str) {
        tracing::info!("Navigating to {}", location);
        println!("➡️  {}", location);

        let path = location.split(['?', '#']).next().unwrap_or_default();
        if path == routes::THANK_YOU {
            println!();
            println!("{}", Confirmation::from_location(location).render());
        }
    }
}
