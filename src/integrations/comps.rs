// src/integrations/comps.rs
use crate::config::CompsApiConfig;
use crate::domain::PropertyInputs;
use crate::pricing::CompsResult;
use reqwest::blocking::Client;
use thiserror::Error;

const USER_AGENT: &str = concat!("rent_tools/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum CompsError {
    #[error("comps provider is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected payload: {0}")]
    Decode(String),
}

impl From<CompsError> for crate::errors::ServerError {
    fn from(e: CompsError) -> Self {
        crate::errors::ServerError::Upstream(format!("comps: {e}"))
    }
}

/// Source of live comparable-rent data.
pub trait CompsProvider: Send + Sync {
    fn fetch(&self, inputs: &PropertyInputs) -> Result<CompsResult, CompsError>;
}

/// What happened when the user asked for live comps.
#[derive(Debug, Clone, PartialEq)]
pub enum CompsLookup {
    NotRequested,
    Found(CompsResult),
    Unavailable,
}

impl CompsLookup {
    pub fn result(&self) -> Option<&CompsResult> {
        match self {
            CompsLookup::Found(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CompsLookup::Unavailable)
    }
}

/// Fetch comps if asked. Any failure degrades to heuristic-only.
pub fn lookup_comps(
    provider: Option<&dyn CompsProvider>,
    inputs: &PropertyInputs,
    requested: bool,
) -> CompsLookup {
    if !requested {
        return CompsLookup::NotRequested;
    }

    let outcome = match provider {
        Some(p) => p.fetch(inputs),
        None => Err(CompsError::NotConfigured),
    };

    match outcome {
        Ok(comps) => {
            let comps = comps.normalized();
            log::debug!(
                "comps lookup returned {} comps (point estimate: {:?})",
                comps.comps_count,
                comps.point_estimate
            );
            CompsLookup::Found(comps)
        }
        Err(e) => {
            log::warn!("comps lookup failed, falling back to heuristic: {e}");
            CompsLookup::Unavailable
        }
    }
}

pub struct HttpCompsProvider {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpCompsProvider {
    pub fn new(cfg: &CompsApiConfig) -> Result<Self, CompsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| CompsError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url: cfg.url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }
}

/// Query string sent to the provider.
pub fn query_params(inputs: &PropertyInputs) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("beds", inputs.beds.to_string()),
        ("baths", inputs.baths.to_string()),
        ("propertyType", inputs.property_type.as_str().to_string()),
    ];
    if inputs.has_sqft() {
        params.push(("sqft", inputs.sqft.to_string()));
    }
    if let Some(address) = &inputs.address {
        params.push(("address", address.clone()));
    }
    params
}

impl CompsProvider for HttpCompsProvider {
    fn fetch(&self, inputs: &PropertyInputs) -> Result<CompsResult, CompsError> {
        let mut req = self.client.get(&self.url).query(&query_params(inputs));
        if let Some(key) = &self.api_key {
            req = req.header("x-api-key", key);
        }

        let resp = req
            .send()
            .map_err(|e| CompsError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(CompsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<CompsResult>()
            .map_err(|e| CompsError::Decode(e.to_string()))
    }
}
