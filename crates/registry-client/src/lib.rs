//! # Patrol Registry Client
//!
//! Typed GET/PATCH helper against the vehicle registry's HTTP API.
//!
//! One `RegistryClient` holds one shared `reqwest::Client` with a bounded
//! timeout and is safe to reuse across concurrent requests. Calls are
//! single-attempt - no retries; callers decide whether a failure is fatal
//! or merely degrades the operation.

pub mod dto;
pub mod error;

pub use dto::{PointsUpdate, RegistryDriver, RegistryOwner, RegistryVehicle};
pub use error::{RemoteError, RemoteResult};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default remote call timeout, overridable via configuration.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Outcome of a completed registry call.
///
/// `body` is decoded only for 2xx statuses. Any other in-range status
/// (404 in particular) leaves `body` empty and is *not* an error - callers
/// must check `status` to tell "not found" apart from success.
#[derive(Debug, Clone)]
pub struct RemoteResponse<T> {
    pub status: u16,
    pub body: Option<T>,
}

impl<T> RemoteResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// HTTP client for the vehicle registry.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Build a client for the given base URL with the given call timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RemoteResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client with the default timeout.
    pub fn with_default_timeout(base_url: impl Into<String>) -> RemoteResult<Self> {
        Self::new(base_url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Typed GET. See `RemoteResponse` for the status/body contract.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> RemoteResult<RemoteResponse<T>> {
        let res = self.http.get(self.url(path)).send().await?;
        Self::read_response(res).await
    }

    /// Typed PATCH with a JSON body. Same contract as `get`.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RemoteResult<RemoteResponse<T>> {
        let res = self.http.patch(self.url(path)).json(body).send().await?;
        Self::read_response(res).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_response<T: DeserializeOwned>(
        res: reqwest::Response,
    ) -> RemoteResult<RemoteResponse<T>> {
        let status = res.status().as_u16();
        if !(200..300).contains(&status) {
            return Ok(RemoteResponse { status, body: None });
        }
        let bytes = res.bytes().await?;
        let body =
            serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(RemoteResponse {
            status,
            body: Some(body),
        })
    }

    // ===== Typed registry endpoints =====

    pub async fn vehicle_by_registration(
        &self,
        registration: &str,
    ) -> RemoteResult<RemoteResponse<RegistryVehicle>> {
        self.get(&format!("/vehicles/{registration}")).await
    }

    pub async fn vehicle_by_owner_jmbg(
        &self,
        jmbg: &str,
    ) -> RemoteResult<RemoteResponse<RegistryVehicle>> {
        self.get(&format!("/vehicles/owner/{jmbg}")).await
    }

    pub async fn driver_by_id(&self, id: &str) -> RemoteResult<RemoteResponse<RegistryDriver>> {
        self.get(&format!("/drivers/{id}")).await
    }

    pub async fn driver_by_email(
        &self,
        email: &str,
    ) -> RemoteResult<RemoteResponse<RegistryDriver>> {
        self.get(&format!("/drivers/email/{email}")).await
    }

    /// Push a point delta onto the driver's registry record.
    pub async fn add_driver_points(
        &self,
        id: &str,
        delta: i32,
    ) -> RemoteResult<RemoteResponse<RegistryDriver>> {
        self.patch(&format!("/drivers/{id}/points"), &PointsUpdate { delta })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = RegistryClient::with_default_timeout("http://registry:8081/").unwrap();
        assert_eq!(client.base_url(), "http://registry:8081");
        assert_eq!(client.url("/vehicles/NS-123-AB"), "http://registry:8081/vehicles/NS-123-AB");
    }

    #[test]
    fn test_response_status_helpers() {
        let ok = RemoteResponse::<()> {
            status: 204,
            body: None,
        };
        assert!(ok.is_success());

        let missing = RemoteResponse::<()> {
            status: 404,
            body: None,
        };
        assert!(!missing.is_success());
        assert!(missing.is_not_found());
    }
}
