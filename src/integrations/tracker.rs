// src/integrations/tracker.rs

use crate::clock::now_unix;
use crate::db::Database;
use crate::db::usage::insert_usage_event;
use crate::domain::UsageEvent;
use crate::errors::ServerError;

/// Records calculator runs. Callers go through `track`, which never fails.
pub trait UsageTracker: Send + Sync {
    fn record(&self, event: &UsageEvent) -> Result<(), ServerError>;
}

pub struct SqliteUsageTracker {
    db: Database,
}

impl SqliteUsageTracker {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl UsageTracker for SqliteUsageTracker {
    fn record(&self, event: &UsageEvent) -> Result<(), ServerError> {
        let now = now_unix();
        self.db
            .with_conn(|conn| insert_usage_event(conn, event, now))
            .map(|_| ())
    }
}

/// Fire-and-forget. Failures are logged and swallowed.
pub fn track(tracker: &dyn UsageTracker, event: UsageEvent) {
    let Some(event) = event.sanitized() else {
        log::debug!("dropping usage event with unusable tool name");
        return;
    };

    if let Err(e) = tracker.record(&event) {
        log::warn!("usage tracking failed for {}: {e}", event.tool);
    }
}
