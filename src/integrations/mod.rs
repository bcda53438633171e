//! Seams to the outside world: live comps, the mail relay and usage tracking.

pub mod comps;
pub mod mail_relay;
pub mod tracker;

pub use comps::{lookup_comps, CompsLookup, CompsProvider, HttpCompsProvider};
pub use mail_relay::{relay_lead, HttpMailRelay, MailRelay};
pub use tracker::{track, SqliteUsageTracker, UsageTracker};
