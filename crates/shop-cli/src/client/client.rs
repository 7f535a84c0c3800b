//! HTTP client for the shop-server REST API.
//!
//! One request per operation, a client-imposed timeout on every call,
//! and no automatic retries; a failure is reported to the caller as-is.

use crate::{ClientError, ClientResult};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// Every network call gives up after this long.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sanitized user object as the server returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub photo: Option<String>,
    pub created_at: i64,
}

/// Successful registration: the new account id plus a session token.
#[derive(Debug, Deserialize)]
pub struct RegisterOutcome {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub token: String,
}

/// Successful login: the account and a session token.
#[derive(Debug, Deserialize)]
pub struct LoginOutcome {
    pub message: String,
    pub user: ApiUser,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateOutcome {
    pub message: String,
    pub user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct MeOutcome {
    user: ApiUser,
}

/// HTTP client for the shop REST API
pub struct ShopClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ShopClient {
    /// Create a new client for a server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute a request; non-2xx responses become [`ClientError::Api`]
    /// from the server's error envelope.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_body(
                status,
                response.json().await.unwrap_or(Value::Null),
            ));
        }

        Ok(response.json().await?)
    }

    fn error_from_body(status: StatusCode, body: Value) -> ClientError {
        let code = body["error"]["code"]
            .as_str()
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = body["error"]["message"]
            .as_str()
            .unwrap_or_else(|| status.as_str())
            .to_string();
        ClientError::api(code, message)
    }

    /// POST /register
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        photo: Option<&str>,
    ) -> ClientResult<RegisterOutcome> {
        #[derive(serde::Serialize)]
        struct RegisterRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
            photo: &'a str,
        }

        let body = RegisterRequest {
            name,
            email,
            password,
            photo: photo.unwrap_or(""),
        };
        let req = self.request(Method::POST, "/register").json(&body);
        self.execute(req).await
    }

    /// POST /login
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginOutcome> {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/login").json(&body);
        self.execute(req).await
    }

    /// PUT /users/{id}
    pub async fn update_profile(
        &self,
        user_id: &str,
        name: Option<&str>,
        photo: Option<&str>,
    ) -> ClientResult<ProfileUpdateOutcome> {
        #[derive(serde::Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            photo: Option<&'a str>,
        }

        let body = UpdateRequest { name, photo };
        let req = self
            .request(Method::PUT, &format!("/users/{}", user_id))
            .json(&body);
        self.execute(req).await
    }

    /// GET /me with a bearer token
    pub async fn me(&self, token: &str) -> ClientResult<ApiUser> {
        let req = self.request(Method::GET, "/me").bearer_auth(token);
        let outcome: MeOutcome = self.execute(req).await?;
        Ok(outcome.user)
    }
}
