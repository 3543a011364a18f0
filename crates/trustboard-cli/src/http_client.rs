// crates/trustboard-cli/src/http_client.rs
//
// Thin JSON client for the trustboard-daemon HTTP API.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use trustboard_rpc::error::ErrorBody;

/// Errors surfaced to CLI users.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} {kind}: {message}")]
    Api {
        status: StatusCode,
        kind: String,
        message: String,
    },
}

/// Client bound to one daemon endpoint.
#[derive(Debug, Clone)]
pub struct TrustboardClient {
    base_url: String,
    http: reqwest::Client,
}

impl TrustboardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    /// DELETE `path`, expecting an empty success response.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let resp = self.request(Method::DELETE, path).send().await?;
        check_status(resp).await.map(|_| ())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let resp = check_status(request.send().await?).await?;
        Ok(resp.json().await?)
    }
}

/// Turn a non-2xx response into `ClientError::Api`, using the server's
/// error body when it has one.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    let (kind, message) = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => (body.error, body.message),
        Err(_) => ("error".to_string(), text),
    };
    Err(ClientError::Api {
        status,
        kind,
        message,
    })
}
