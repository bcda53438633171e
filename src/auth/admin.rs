// src/auth/admin.rs
use crate::auth::token::{hash_token, hashes_equal};
use http::HeaderMap;

pub const ADMIN_COOKIE: &str = "admin_token";

/// Shared-secret gate for the analytics pages. Only hashes are kept in memory.
///
/// The browser cookie holds a value derived from the token, never the token itself.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    token_hash: Option<[u8; 32]>,
    session: Option<String>,
}

impl AdminGate {
    pub fn new(token: Option<&str>) -> Self {
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        Self {
            token_hash: token.map(hash_token),
            session: token.map(session_value),
        }
    }

    /// No token configured means no admin pages at all.
    pub fn is_enabled(&self) -> bool {
        self.token_hash.is_some()
    }

    pub fn verify(&self, presented: &str) -> bool {
        let presented = presented.trim();
        match &self.token_hash {
            Some(expected) if !presented.is_empty() => {
                hashes_equal(expected, &hash_token(presented))
            }
            _ => false,
        }
    }

    /// `Set-Cookie` value issued after a successful login.
    pub fn session_cookie(&self) -> Option<String> {
        self.session.as_ref().map(|value| {
            format!("{ADMIN_COOKIE}={value}; HttpOnly; Secure; SameSite=Strict; Path=/admin")
        })
    }

    /// Session cookie, or the raw token as `Authorization: Bearer`.
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        if let Some(bearer) = bearer_token(headers) {
            return self.verify(bearer);
        }
        match (&self.session, cookie_value(headers, ADMIN_COOKIE)) {
            (Some(expected), Some(presented)) => {
                hashes_equal(expected.as_bytes(), presented.as_bytes())
            }
            _ => false,
        }
    }
}

fn session_value(token: &str) -> String {
    hash_token(&format!("rent_tools-admin-session:{token}"))
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}
