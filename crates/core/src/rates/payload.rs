//! Parsing of the Fixer-style response envelope.
//!
//! Both endpoints answer with `{"success": bool, ...}`. On success the
//! table lives under `rates` or `symbols`; on failure an optional `error`
//! object describes the problem.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::{RateError, RateTable, Result, SymbolTable};

/// The `error` object of an unsuccessful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorInfo {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

impl ErrorInfo {
    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(code) = self.code {
            parts.push(code.to_string());
        }
        if let Some(kind) = &self.kind {
            parts.push(kind.clone());
        }
        if let Some(info) = &self.info {
            parts.push(info.clone());
        }
        parts.join(": ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatesPayload {
    pub success: bool,
    #[serde(default)]
    pub rates: Option<HashMap<String, Decimal>>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolsPayload {
    pub success: bool,
    #[serde(default)]
    pub symbols: Option<HashMap<String, String>>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

fn unsuccessful(resource: &'static str, error: Option<&ErrorInfo>) -> RateError {
    let reason = error
        .map(ErrorInfo::describe)
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "success flag was false".to_string());
    RateError::Unsuccessful { resource, reason }
}

/// Parses a rates response body into a [`RateTable`].
///
/// # Examples
///
/// ```
/// use catalogfx_core::rates::parse_rates_response;
///
/// let body = br#"{"success": true, "base": "EUR", "rates": {"EUR": 1, "USD": 1.1}}"#;
/// let rates = parse_rates_response(body).unwrap();
/// assert_eq!(rates["USD"].to_string(), "1.1");
/// ```
pub fn parse_rates_response(body: &[u8]) -> Result<RateTable> {
    let payload: RatesPayload =
        serde_json::from_slice(body).map_err(|e| RateError::InvalidPayload(e.to_string()))?;

    if !payload.success {
        return Err(unsuccessful("rates", payload.error.as_ref()));
    }

    payload
        .rates
        .ok_or_else(|| RateError::InvalidPayload("missing `rates` field".to_string()))
}

/// Parses a symbols response body into a [`SymbolTable`].
pub fn parse_symbols_response(body: &[u8]) -> Result<SymbolTable> {
    let payload: SymbolsPayload =
        serde_json::from_slice(body).map_err(|e| RateError::InvalidPayload(e.to_string()))?;

    if !payload.success {
        return Err(unsuccessful("symbols", payload.error.as_ref()));
    }

    payload
        .symbols
        .ok_or_else(|| RateError::InvalidPayload("missing `symbols` field".to_string()))
}
