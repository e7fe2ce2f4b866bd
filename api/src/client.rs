//! Ticket backend client implementation

use crate::{
    config::ApiConfig,
    error::ApiError,
    messages::{
        ApiErrorBody, ChatRequest, ChatResponse, ProcessTicketRequest, ProcessTicketResult,
        UpdateStatusRequest,
    },
    types::{Ticket, TicketId, TicketStatus},
};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::pin::Pin;

/// Abstraction over the ticket backend
///
/// # Dyn Compatibility
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of
/// `async fn` to enable trait object usage (`Arc<dyn TicketApi>`). This is
/// required for the effect system, where reducers create effects that capture
/// the API handle.
pub trait TicketApi: Send + Sync {
    /// Fetch the full ticket snapshot
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for connectivity failures, non-success statuses,
    /// or malformed response bodies.
    fn list_tickets(&self)
    -> Pin<Box<dyn Future<Output = Result<Vec<Ticket>, ApiError>> + Send + '_>>;

    /// Submit a new ticket for processing
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the backend rejects the
    /// submission with HTTP 400, other [`ApiError`] variants otherwise.
    fn process_ticket(
        &self,
        request: ProcessTicketRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessTicketResult, ApiError>> + Send + '_>>;

    /// Persist a ticket's new status
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for connectivity failures or non-success statuses.
    fn update_ticket_status(
        &self,
        id: TicketId,
        status: TicketStatus,
    ) -> Pin<Box<dyn Future<Output = Result<(), ApiError>> + Send + '_>>;

    /// Ask the account-analysis model a question about a ticket
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for connectivity failures, non-success statuses,
    /// or malformed response bodies.
    fn chat(
        &self,
        request: ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse, ApiError>> + Send + '_>>;
}

/// HTTP client for the ticket backend
#[derive(Debug, Clone)]
pub struct TicketClient {
    client: Client,
    config: ApiConfig,
}

impl TicketClient {
    /// Create a client for the given backend
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client configured from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base_url)
    }

    /// Fetch the full ticket snapshot via `GET /api/tickets`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for connectivity failures, non-success statuses,
    /// or malformed response bodies.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/tickets"))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<Vec<Ticket>>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }

    /// Submit a new ticket via `POST /api/process_ticket`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with the backend's message for HTTP
    /// 400, other [`ApiError`] variants otherwise.
    pub async fn process_ticket(
        &self,
        request: ProcessTicketRequest,
    ) -> Result<ProcessTicketResult, ApiError> {
        let response = self
            .client
            .post(self.url("/api/process_ticket"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => response
                .json::<ProcessTicketResult>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string())),
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.unwrap_or_default();
                // The backend sends { "error": "..." }; fall back to the raw
                // body when it does not.
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map_or(body, |parsed| parsed.error);
                Err(ApiError::Validation { message })
            },
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }

    /// Persist a status change via `PUT /api/update_ticket_status/{id}/status`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for connectivity failures or non-success statuses.
    pub async fn update_ticket_status(
        &self,
        id: TicketId,
        status: TicketStatus,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/api/update_ticket_status/{id}/status")))
            .json(&UpdateStatusRequest { status })
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status_code = response.status();
        if status_code.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status_code.as_u16(),
                message: body,
            })
        }
    }

    /// Ask the account-analysis model via `POST /api/chat`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for connectivity failures, non-success statuses,
    /// or malformed response bodies.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<ChatResponse>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }
}

impl TicketApi for TicketClient {
    fn list_tickets(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Ticket>, ApiError>> + Send + '_>> {
        Box::pin(self.list_tickets())
    }

    fn process_ticket(
        &self,
        request: ProcessTicketRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessTicketResult, ApiError>> + Send + '_>> {
        Box::pin(self.process_ticket(request))
    }

    fn update_ticket_status(
        &self,
        id: TicketId,
        status: TicketStatus,
    ) -> Pin<Box<dyn Future<Output = Result<(), ApiError>> + Send + '_>> {
        Box::pin(self.update_ticket_status(id, status))
    }

    fn chat(
        &self,
        request: ChatRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse, ApiError>> + Send + '_>> {
        Box::pin(self.chat(request))
    }
}
