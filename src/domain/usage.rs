// src/domain/usage.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TOOL_RENT_ESTIMATE: &str = "rent-estimate";
pub const TOOL_CAP_RATE: &str = "cap-rate";
pub const TOOL_VACANCY_COST: &str = "vacancy-cost";
pub const TOOL_RENOVATION_ROI: &str = "renovation-roi";
pub const TOOL_READINESS: &str = "readiness";

const MAX_TOOL_NAME: usize = 64;

/// One calculator run, as sent to the usage tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub tool: String,
    #[serde(default)]
    pub inputs: Value,
    #[serde(default)]
    pub results: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UsageEvent {
    pub fn new<I: Serialize, R: Serialize>(tool: &str, inputs: &I, results: &R) -> Self {
        Self {
            tool: tool.to_string(),
            inputs: serde_json::to_value(inputs).unwrap_or(Value::Null),
            results: serde_json::to_value(results).unwrap_or(Value::Null),
            email: None,
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Trim the tool name and drop a malformed email. `None` if the tool name is unusable.
    pub fn sanitized(self) -> Option<Self> {
        let tool = self.tool.trim().to_string();
        if tool.is_empty() || tool.len() > MAX_TOOL_NAME {
            return None;
        }
        let email = crate::domain::lead::optional_email(self.email.as_deref());
        Some(Self {
            tool,
            inputs: self.inputs,
            results: self.results,
            email,
        })
    }
}
