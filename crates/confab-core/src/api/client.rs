//! API client for communicating with the confab REST service.
//!
//! This module provides the `ApiClient` struct: the single outbound-call
//! boundary for the application. Every request leaves through the same
//! pipeline, which reads the shared session store and attaches the bearer
//! credential when a session is present. Call sites never touch headers.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::SessionStore;
use crate::models::{Conversation, ConversationListResponse, ConversationPreview, Message, User};

use super::ApiError;

type Result<T> = std::result::Result<T, ApiError>;

// ============================================================================
// Constants
// ============================================================================

/// Request timeout applied to every outbound call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Content type sent with every request
const CONTENT_TYPE_JSON: &str = "application/json";

/// API client for the confab service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a new API client against `base_url`.
    ///
    /// The base address is fixed for the client's lifetime; it comes from
    /// deploy-time configuration, not from call sites.
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    // -------------------------------------------------------------------------
    // Request pipeline
    // -------------------------------------------------------------------------

    /// Headers attached to every outbound request: the fixed content type,
    /// plus `Authorization: Bearer <token>` when a session is present.
    ///
    /// The session store is read fresh on every call - nothing is cached, so
    /// a login or logout between two calls is reflected in the next request.
    /// An absent session leaves the authorization header unset; the call
    /// still goes out and the server decides.
    fn request_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(CONTENT_TYPE_JSON),
        );

        if let Some(token) = self.session.token() {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::InvalidToken)?;
            headers.insert(header::AUTHORIZATION, value);
        }

        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an outbound request with the shared defaults applied.
    /// All requests leave through here.
    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        Ok(self
            .client
            .request(method, self.url(path))
            .timeout(REQUEST_TIMEOUT)
            .headers(self.request_headers()?))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self.request(Method::GET, path)?.send().await?;
        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e)))
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!(path, "PUT");
        let response = self.request(Method::PUT, path)?.json(body).send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn put_empty(&self, path: &str) -> Result<()> {
        debug!(path, "PUT");
        let response = self.request(Method::PUT, path)?.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Endpoints
    // -------------------------------------------------------------------------

    /// Fetch the authenticated user's own profile.
    pub async fn get_me(&self) -> Result<User> {
        self.get("/user").await
    }

    /// Fetch every registered user.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get("/users").await
    }

    /// Fetch the authenticated user's conversation list.
    pub async fn get_my_conversations(&self) -> Result<Vec<ConversationPreview>> {
        let response: ConversationListResponse = self.get("/user/conversations").await?;
        Ok(response.conversations)
    }

    /// Fetch a single conversation's metadata.
    pub async fn get_conversation(&self, conversation_id: i64) -> Result<Conversation> {
        self.get(&format!("/conversations/{}", conversation_id))
            .await
    }

    /// Fetch the messages of a conversation.
    pub async fn get_conversation_messages(&self, conversation_id: i64) -> Result<Vec<Message>> {
        self.get(&format!("/conversations/{}/messages", conversation_id))
            .await
    }

    /// Change the authenticated user's username.
    pub async fn set_my_username(&self, username: &str) -> Result<()> {
        #[derive(Serialize)]
        struct SetUsernameRequest<'a> {
            username: &'a str,
        }

        self.put_json("/user/username", &SetUsernameRequest { username })
            .await
    }

    /// Mark every message in a conversation as read for the current user.
    pub async fn mark_conversation_read(&self, conversation_id: i64) -> Result<()> {
        self.put_empty(&format!("/conversations/{}/read", conversation_id))
            .await
    }

    /// Service liveness probe.
    pub async fn liveness(&self) -> Result<()> {
        let response = self.request(Method::GET, "/liveness")?.send().await?;
        Self::check_response(response).await?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
