//! Request and response bodies for the ticket backend endpoints

use crate::types::{Classification, TicketStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/process_ticket`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTicketRequest {
    /// Free-form problem description
    pub text: String,

    /// Client identifier
    pub client_id: String,

    /// Submission date, formatted `YYYY-MM-DD`
    pub date: String,

    /// Software product the ticket concerns
    pub software_type: String,
}

/// Structured result of a processed submission
///
/// The backend's analysis pipeline keeps growing fields; the typed ones are
/// what the dashboard displays, and everything else is preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProcessTicketResult {
    /// Classification assigned by the backend
    #[serde(default)]
    pub classification: Classification,

    /// Churn risk score in `[0, 100]`
    #[serde(default)]
    pub churn_score: f64,

    /// Backend display hint for the score
    #[serde(default)]
    pub churn_level: String,

    /// Narrative insight for the submission
    #[serde(default)]
    pub insight: String,

    /// Any additional fields the backend returned
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error body the backend sends with HTTP 400 responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable validation message
    pub error: String,
}

/// Body of `PUT /api/update_ticket_status/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// The new status
    pub status: TicketStatus,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question
    pub message: String,

    /// Ticket fields the model should ground its answer in
    pub context: serde_json::Value,
}

/// Response of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The model's reply
    pub reply: String,
}
