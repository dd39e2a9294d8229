use crate::remote::{
    auth_api::AuthApi,
    error::{RemoteError, Result as RemoteResult},
    login_response::LoginResponse,
    reachability::Reachability,
};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Gateway statuses meaning "the service behind me is down".
const GATEWAY_OUTAGE_STATUSES: [StatusCode; 3] = [
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// HTTP client for the remote auth service
pub struct HttpAuthApi {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpAuthApi {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service root (e.g., "http://localhost:3000/api")
    /// * `timeout` - Per-request timeout; an expired timeout counts as unreachable
    pub fn new(base_url: &str, timeout: Duration) -> RemoteResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::unreachable(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Send and split transport failures from non-success statuses.
    async fn execute(&self, req: RequestBuilder) -> RemoteResult<Response> {
        let response = req
            .send()
            .await
            .map_err(|e| RemoteError::unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if GATEWAY_OUTAGE_STATUSES.contains(&status) {
            return Err(RemoteError::unreachable(format!("gateway reported {status}")));
        }

        let message = Self::error_message(response).await;
        Err(RemoteError::rejected(status.as_u16(), message))
    }

    /// Pulls `message` (or `error.message`) out of an error body, if any.
    async fn error_message(response: Response) -> Option<String> {
        let body: Value = response.json().await.ok()?;

        body.get("message")
            .or_else(|| body.get("error").and_then(|error| error.get("message")))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> RemoteResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/login").json(&body);
        let response = self.execute(req).await?;

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| RemoteError::invalid_response(e.to_string()))
    }

    async fn register(&self, full_name: &str, email: &str, password: &str) -> RemoteResult<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RegisterRequest<'a> {
            full_name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = RegisterRequest {
            full_name,
            email,
            password,
        };
        let req = self.request(Method::POST, "/register").json(&body);
        self.execute(req).await?;
        Ok(())
    }

    async fn verify_profile(&self, token: &str) -> RemoteResult<()> {
        let req = self.request(Method::GET, "/profile").bearer_auth(token);
        self.execute(req).await?;
        Ok(())
    }

    async fn probe(&self) -> Reachability {
        match self.request(Method::GET, "").send().await {
            Ok(response) => {
                debug!("Probe answered with {}", response.status());
                Reachability::Reachable
            }
            Err(e) => {
                debug!("Probe failed: {e}");
                Reachability::Unreachable
            }
        }
    }
}
