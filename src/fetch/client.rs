use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{ReportRequest, TimeEntry};
use serde_json::Value;
use ureq::Agent;
use url::Url;

/// Largest response body accepted, well above any real report.
const MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

/// Blocking HTTP client carrying the bearer token of one run.
///
/// One request per call: no retry, no timeout beyond the transport defaults.
pub struct ApiClient {
    agent: Agent,
    base: Option<Url>,
    token: String,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let token = cfg.require_token()?.to_string();

        let base = match &cfg.api_uri {
            Some(uri) => Some(base_url(uri)?),
            None => None,
        };

        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { agent, base, token })
    }

    /// Absolute targets are used as is, relative ones are joined to the
    /// configured API base.
    pub fn resolve(&self, target: &str) -> AppResult<Url> {
        match Url::parse(target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self
                    .base
                    .as_ref()
                    .ok_or_else(|| AppError::MissingApiUri(target.to_string()))?;
                Ok(base.join(target.trim_start_matches('/'))?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Perform one request and return the raw response body.
    ///
    /// - `request == None` → `GET`, `Accept: text/csv`
    /// - `request == Some` → `POST` with the JSON body, `Accept: application/json`
    ///
    /// A non-2xx status fails with [`AppError::Rejected`] carrying the parsed
    /// error body.
    pub fn fetch_bytes(&self, target: &str, request: Option<&ReportRequest>) -> AppResult<Vec<u8>> {
        let url = self.resolve(target)?;
        let auth = format!("Bearer {}", self.token);

        let mut response = match request {
            None => {
                tracing::info!(%url, "GET");
                self.agent
                    .get(url.as_str())
                    .header("Authorization", &auth)
                    .header("Accept", "text/csv")
                    .call()?
            }
            Some(req) => {
                tracing::info!(%url, employee_id = req.employee_id, "POST");
                let body = serde_json::to_vec(req)
                    .map_err(|e| AppError::Encoding(format!("request body: {e}")))?;
                self.agent
                    .post(url.as_str())
                    .header("Authorization", &auth)
                    .header("Content-Type", "application/json")
                    .header("Accept", "application/json")
                    .send(&body[..])?
            }
        };

        let status = response.status();
        let bytes = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()?;

        if !status.is_success() {
            let detail = parse_error_body(&bytes);
            tracing::warn!(status = status.as_u16(), %detail, "request rejected");
            return Err(AppError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "response received");
        Ok(bytes)
    }

    /// Fetch a JSON array of time entries (pivot source).
    pub fn fetch_entries(
        &self,
        target: &str,
        request: Option<&ReportRequest>,
    ) -> AppResult<Vec<TimeEntry>> {
        let bytes = self.fetch_bytes(target, request)?;
        Ok(TimeEntry::list_from_json(&bytes)?)
    }
}

/// Error bodies are JSON objects; anything else is kept as plain text.
fn parse_error_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).trim().to_string()))
}

/// Make sure relative joins append to the base path instead of replacing
/// its last segment.
fn base_url(uri: &str) -> AppResult<Url> {
    let mut url = Url::parse(uri)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
