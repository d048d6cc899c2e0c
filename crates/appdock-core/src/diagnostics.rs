//! Designer diagnostics.
//!
//! Every successful operation hands the host a diagnostics bundle: a
//! free-form echo of the request, a free-form echo of the response, and the
//! wall-clock execution time. The bundle is surfaced to design-time tooling
//! only, never to the end caller, but secrets must still never appear in it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;

/// Request/response echo plus timing, attached to a successful result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDiagnostic {
    pub request: Map<String, Value>,
    pub response: Map<String, Value>,
    pub started_at: DateTime<Utc>,
    pub execution_time_ms: u64,
}

/// Accumulates echo entries over the lifetime of one operation call.
/// `new()` starts the clock; `finish()` stops it.
pub struct DiagnosticBuilder {
    request: Map<String, Value>,
    response: Map<String, Value>,
    started_at: DateTime<Utc>,
    started: Instant,
}

impl DiagnosticBuilder {
    pub fn new() -> Self {
        DiagnosticBuilder {
            request: Map::new(),
            response: Map::new(),
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    pub fn request_entry(&mut self, key: &str, value: impl Into<Value>) {
        self.request.insert(key.to_string(), value.into());
    }

    pub fn response_entry(&mut self, key: &str, value: impl Into<Value>) {
        self.response.insert(key.to_string(), value.into());
    }

    pub fn finish(self) -> IntegrationDiagnostic {
        IntegrationDiagnostic {
            request: self.request,
            response: self.response,
            started_at: self.started_at,
            execution_time_ms: self.started.elapsed().as_millis() as u64,
        }
    }
}

impl Default for DiagnosticBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_request_and_response_entries() {
        let mut b = DiagnosticBuilder::new();
        b.request_entry("hostName", "sftp.example.com");
        b.request_entry("port", "22");
        b.response_entry("fileSize", 1024u64);
        let diag = b.finish();
        assert_eq!(diag.request["hostName"], "sftp.example.com");
        assert_eq!(diag.request["port"], "22");
        assert_eq!(diag.response["fileSize"], 1024);
    }

    #[test]
    fn finish_populates_execution_time() {
        let b = DiagnosticBuilder::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let diag = b.finish();
        assert!(diag.execution_time_ms >= 5);
        assert!(diag.started_at <= Utc::now());
    }

    #[test]
    fn diagnostic_serializes_camel_case() {
        let mut b = DiagnosticBuilder::new();
        b.request_entry("username", "deploy");
        let json = serde_json::to_string(&b.finish()).unwrap();
        assert!(json.contains("\"executionTimeMs\""));
        assert!(json.contains("\"startedAt\""));
        assert!(!json.contains("\"execution_time_ms\""));
    }

    #[test]
    fn diagnostic_roundtrips_through_json() {
        let mut b = DiagnosticBuilder::new();
        b.request_entry("folderId", 42i64);
        b.response_entry("fileName", "q1.csv");
        let diag = b.finish();
        let json = serde_json::to_string(&diag).unwrap();
        let back: IntegrationDiagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back.request["folderId"], 42);
        assert_eq!(back.response["fileName"], "q1.csv");
    }
}
