use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AnalysisError, AnalysisPayload};

/// Upload endpoint of a locally running analysis service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/upload-xes/";

/// Extension the service accepts; anything else is rejected before upload.
const LOG_EXTENSION: &str = ".xes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    /// `WHATIF_ANALYSIS_URL` is read at build time so wasm builds can be pointed
    /// at a deployed service without a runtime environment.
    fn default() -> Self {
        Self {
            endpoint: option_env!("WHATIF_ANALYSIS_URL")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Post an event log and decode the aggregates the service computes from it.
    ///
    /// One request, one reply: there is no retry and no partial result. The
    /// caller replaces whatever it displayed before with the returned payload.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisPayload, AnalysisError> {
        validate_upload(file_name, &bytes)?;

        info!(file = file_name, size = bytes.len(), endpoint = %self.config.endpoint, "uploading event log");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = service_message(&body);
            warn!(status = status.as_u16(), %message, "analysis service rejected upload");
            return Err(AnalysisError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let payload = AnalysisPayload::from_slice(&body).inspect_err(|err| {
            warn!(error = %err, "analysis payload failed validation");
        })?;

        for (section, len) in payload.section_sizes() {
            tracing::debug!(section, len, "decoded section");
        }
        info!(warnings = payload.warnings.len(), "analysis completed");

        Ok(payload)
    }
}

/// Mirror the service's own precondition so obviously wrong files never leave the client.
pub(crate) fn validate_upload(file_name: &str, bytes: &[u8]) -> Result<(), AnalysisError> {
    if !file_name.ends_with(LOG_EXTENSION) {
        return Err(AnalysisError::UnsupportedFile {
            name: file_name.to_string(),
        });
    }
    if bytes.is_empty() {
        return Err(AnalysisError::EmptyFile {
            name: file_name.to_string(),
        });
    }
    Ok(())
}

/// The service answers failures with `{"error": "..."}`; fall back to the raw body.
fn service_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                "no details provided".to_string()
            } else {
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_xes_files() {
        let err = validate_upload("log.csv", b"a,b").unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFile { .. }));
    }

    #[test]
    fn rejects_empty_files() {
        let err = validate_upload("log.xes", b"").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyFile { .. }));
    }

    #[test]
    fn accepts_xes_files() {
        assert!(validate_upload("run-42.xes", b"<log/>").is_ok());
    }

    #[test]
    fn service_message_prefers_error_field() {
        let body = br#"{"error": "Missing timestamp field in data."}"#;
        assert_eq!(service_message(body), "Missing timestamp field in data.");
    }

    #[test]
    fn service_message_falls_back_to_body() {
        assert_eq!(service_message(b"  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(service_message(b""), "no details provided");
    }

    #[test]
    fn service_errors_surface_their_message() {
        let err = AnalysisError::Service {
            status: 400,
            message: "Invalid or missing XES file.".into(),
        };
        assert_eq!(err.advisory(), "Invalid or missing XES file.");
    }

    #[test]
    fn default_config_points_somewhere() {
        assert!(!ClientConfig::default().endpoint.is_empty());
    }
}
