// src/state.rs

use crate::auth::AdminGate;
use crate::config::AppConfig;
use crate::db::Database;
use crate::integrations::{
    CompsProvider, HttpCompsProvider, HttpMailRelay, MailRelay, SqliteUsageTracker, UsageTracker,
};

/// Everything a request handler needs. Shared read-only across workers.
pub struct AppState {
    pub db: Database,
    pub comps: Option<Box<dyn CompsProvider>>,
    pub relay: Option<Box<dyn MailRelay>>,
    pub tracker: Box<dyn UsageTracker>,
    pub admin: AdminGate,
}

impl AppState {
    /// Database-backed tracker, no comps, no relay, admin disabled.
    pub fn new(db: Database) -> Self {
        Self {
            tracker: Box::new(SqliteUsageTracker::new(db.clone())),
            db,
            comps: None,
            relay: None,
            admin: AdminGate::default(),
        }
    }

    /// A provider that can't be built is logged and left out; the site runs without it.
    pub fn from_config(cfg: &AppConfig, db: Database) -> Self {
        let comps = cfg.comps.as_ref().and_then(|c| match HttpCompsProvider::new(c) {
            Ok(p) => {
                log::info!("live comps enabled ({})", c.url);
                Some(Box::new(p) as Box<dyn CompsProvider>)
            }
            Err(e) => {
                log::warn!("comps provider disabled: {e}");
                None
            }
        });

        let relay = cfg.mail_relay.as_ref().and_then(|r| match HttpMailRelay::new(r) {
            Ok(m) => {
                log::info!("mail relay enabled ({})", r.url);
                Some(Box::new(m) as Box<dyn MailRelay>)
            }
            Err(e) => {
                log::warn!("mail relay disabled: {e}");
                None
            }
        });

        let admin = AdminGate::new(cfg.admin_token.as_deref());
        if !admin.is_enabled() {
            log::info!("ADMIN_TOKEN not set; admin pages are disabled");
        }

        Self {
            comps,
            relay,
            admin,
            ..Self::new(db)
        }
    }

    #[cfg(test)]
    pub fn with_comps(mut self, comps: impl CompsProvider + 'static) -> Self {
        self.comps = Some(Box::new(comps));
        self
    }

    #[cfg(test)]
    pub fn with_relay(mut self, relay: impl MailRelay + 'static) -> Self {
        self.relay = Some(Box::new(relay));
        self
    }

    #[cfg(test)]
    pub fn with_tracker(mut self, tracker: impl UsageTracker + 'static) -> Self {
        self.tracker = Box::new(tracker);
        self
    }

    #[cfg(test)]
    pub fn with_admin_token(mut self, token: &str) -> Self {
        self.admin = AdminGate::new(Some(token));
        self
    }

    pub fn comps(&self) -> Option<&dyn CompsProvider> {
        self.comps.as_deref()
    }

    pub fn relay(&self) -> Option<&dyn MailRelay> {
        self.relay.as_deref()
    }
}
