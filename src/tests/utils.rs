use crate::db::connection::apply_schema;
use crate::db::Database;
use crate::domain::{LeadMessage, PropertyInputs, UsageEvent};
use crate::errors::ServerError;
use crate::integrations::comps::CompsError;
use crate::integrations::mail_relay::RelayError;
use crate::integrations::{CompsProvider, MailRelay, UsageTracker};
use crate::pricing::CompsResult;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const SCHEMA: &str = include_str!("../../sql/schema.sql");

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Fresh SQLite file with the production schema, unique per call.
pub fn init_test_db() -> Database {
    let n = NEXT_DB.fetch_add(1, Ordering::SeqCst);
    let path: PathBuf =
        std::env::temp_dir().join(format!("rent_tools_test_{}_{n}.sqlite3", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let db = Database::new(path.to_string_lossy().into_owned());
    apply_schema(&db, SCHEMA).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub fn test_state() -> AppState {
    AppState::new(init_test_db())
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

pub struct FixedComps(pub CompsResult);

impl CompsProvider for FixedComps {
    fn fetch(&self, _inputs: &PropertyInputs) -> Result<CompsResult, CompsError> {
        Ok(self.0.clone())
    }
}

pub struct DownComps;

impl CompsProvider for DownComps {
    fn fetch(&self, _inputs: &PropertyInputs) -> Result<CompsResult, CompsError> {
        Err(CompsError::Request("operation timed out".into()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingRelay {
    pub sent: Arc<Mutex<Vec<LeadMessage>>>,
    pub fail: bool,
}

impl MailRelay for RecordingRelay {
    fn send(&self, lead: &LeadMessage) -> Result<(), RelayError> {
        if self.fail {
            return Err(RelayError::ApiError("502 - bad gateway".into()));
        }
        self.sent.lock().unwrap().push(lead.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingTracker {
    pub events: Arc<Mutex<Vec<UsageEvent>>>,
}

impl RecordingTracker {
    pub fn events(&self) -> Vec<UsageEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl UsageTracker for RecordingTracker {
    fn record(&self, event: &UsageEvent) -> Result<(), ServerError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

pub struct BrokenTracker;

impl UsageTracker for BrokenTracker {
    fn record(&self, _event: &UsageEvent) -> Result<(), ServerError> {
        Err(ServerError::DbError("disk I/O error".into()))
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Same as `post_form` but marked as an htmx request.
pub fn post_htmx(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
