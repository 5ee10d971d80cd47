use crate::domain::ports::{Navigator, NotificationKind, Notifier};
use std::sync::{Arc, Mutex};

/// Keeps every notification. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    entries: Arc<Mutex<Vec<(NotificationKind, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.push((kind, message.to_string()));
    }
}

/// Keeps every location navigated to. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    locations: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations
            .lock()
            .map(|locations| locations.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn last(&self) -> Option<String> {
        self.locations().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        let mut locations = self
            .locations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        locations.push(location.to_string());
    }
}
