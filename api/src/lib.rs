//! # Churnboard API
//!
//! HTTP client for the ticket backend, with typed wire formats and the
//! [`TicketApi`] abstraction the dashboard's effects are written against.
//!
//! ## Example
//!
//! ```no_run
//! use churnboard_api::{ApiConfig, TicketClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from CHURNBOARD_API_URL environment variable
//!     let client = TicketClient::new(ApiConfig::from_env());
//!
//!     let tickets = client.list_tickets().await?;
//!     println!("{} tickets", tickets.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! - `GET /api/tickets` - full ticket snapshot
//! - `POST /api/process_ticket` - submit a ticket for processing
//! - `PUT /api/update_ticket_status/{id}/status` - persist a status change
//! - `POST /api/chat` - account-analysis chat

pub mod client;
pub mod config;
pub mod error;
pub mod messages;
pub mod types;

// Re-export main types for convenience
pub use client::{TicketApi, TicketClient};
pub use config::ApiConfig;
pub use error::ApiError;
pub use messages::{
    ChatRequest, ChatResponse, ProcessTicketRequest, ProcessTicketResult, UpdateStatusRequest,
};
pub use types::{Classification, Source, Ticket, TicketId, TicketStatus, Urgency};
