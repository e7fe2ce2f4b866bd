//! # Churnboard Dashboard
//!
//! The dashboard application: a polled ticket cache with optimistic status
//! edits, a pure filter/KPI engine, a validated submission flow, and the
//! account-analysis chat.
//!
//! Everything runs through one [`DashboardReducer`] driven by a store from
//! `churnboard-runtime`; the backend is reached through the `TicketApi`
//! trait from `churnboard-api`, injected via [`DashboardEnvironment`].
//!
//! # Quick Start
//!
//! ```no_run
//! use churnboard_api::TicketClient;
//! use churnboard_core::environment::SystemClock;
//! use churnboard_runtime::Store;
//! use dashboard::{DashboardAction, DashboardEnvironment, DashboardReducer, DashboardState};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = DashboardEnvironment::new(
//!     Arc::new(TicketClient::from_env()),
//!     Arc::new(SystemClock),
//! );
//! let store = Store::new(DashboardState::new(), DashboardReducer::new(), env);
//!
//! // Refresh immediately and every five seconds after
//! store
//!     .send(DashboardAction::StartPolling {
//!         interval: Duration::from_secs(5),
//!     })
//!     .await?;
//!
//! // Read derived views
//! let kpis = store.state(|s| s.kpis()).await;
//! println!("{} tickets, {} high risk", kpis.total, kpis.high_risk);
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod reducer;
pub mod types;

pub use filter::{HIGH_RISK_THRESHOLD, Kpis, RiskBand, filter_tickets, parse_ticket_date, risk_band};
pub use reducer::{
    DashboardEnvironment, DashboardReducer, FALLBACK_ANALYSIS_REPLY, SUBMIT_CONNECTIVITY_ERROR,
};
pub use types::{
    DEFAULT_POLL_INTERVAL, DEFAULT_SOFTWARE_TYPE, DashboardAction, DashboardState, Field,
    FieldError, FilterCriteria, Notice, SOFTWARE_TYPES, SubmissionForm,
};
