//! State, actions, and form types for the dashboard.

use crate::filter::{self, Kpis};
use chrono::NaiveDate;
use churnboard_api::{ProcessTicketResult, Ticket, TicketId, TicketStatus};
use std::time::Duration;

/// Default ticket cache refresh interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Software products selectable on the submission form
pub const SOFTWARE_TYPES: [&str; 8] = [
    "Phishing",
    "Correo sospechoso",
    "Acceso no autorizado",
    "Malware",
    "ERP",
    "CRM",
    "Red",
    "Otro",
];

/// Default selection for the submission form's software type
pub const DEFAULT_SOFTWARE_TYPE: &str = "ERP";

/// A blocking user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message shown to the user
    pub message: String,
}

impl Notice {
    /// Message shown when a status change could not be persisted
    pub const STATUS_SAVE_FAILED: &'static str = "No se pudo guardar el estado";

    /// Create a notice with the given message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The notice raised when persisting a status change fails
    #[must_use]
    pub fn status_save_failed() -> Self {
        Self::new(Self::STATUS_SAVE_FAILED)
    }
}

/// Criteria applied by the filter engine
///
/// All fields are optional; an empty criteria shows every ticket with a
/// parseable date. Date bounds are inclusive calendar days in local wall
/// time (`start 00:00:00` through `end 23:59:59`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Keep tickets dated on or after this day
    pub start_date: Option<NaiveDate>,

    /// Keep tickets dated on or before this day
    pub end_date: Option<NaiveDate>,

    /// Keep only tickets with exactly this status
    pub status: Option<TicketStatus>,
}

impl FilterCriteria {
    /// Reset every criterion
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no criterion is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.status.is_none()
    }
}

/// Form fields that carry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The problem description
    Text,
    /// The client identifier
    ClientId,
}

/// A per-field validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the error belongs to
    pub field: Field,

    /// Message shown next to the field
    pub message: String,
}

/// The ticket submission form
///
/// `date` is optional in the form; when absent, today's date (from the
/// injected clock) is used at submission time. `software_type` always
/// carries a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionForm {
    /// Free-form problem description
    pub text: String,

    /// Client identifier
    pub client_id: String,

    /// Submission date; defaults to today when unset
    pub date: Option<NaiveDate>,

    /// Selected software product
    pub software_type: String,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            client_id: String::new(),
            date: None,
            software_type: DEFAULT_SOFTWARE_TYPE.to_string(),
        }
    }
}

/// Complete dashboard state
///
/// `tickets` is the canonical cache, replaced wholesale by each completed
/// refresh. Everything derived from it (filtered view, KPIs) is computed on
/// demand rather than stored.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Canonical ticket cache, backend order (oldest first)
    pub tickets: Vec<Ticket>,

    /// Whether the poll timer is armed
    pub polling: bool,

    /// Interval between poll ticks
    pub poll_interval: Duration,

    /// Last refresh failure, for diagnostics only
    pub last_refresh_error: Option<String>,

    /// Blocking user-facing notification, if any
    pub notice: Option<Notice>,

    /// Active filter criteria
    pub filters: FilterCriteria,

    /// The submission form
    pub form: SubmissionForm,

    /// Validation errors from the last submission attempt
    pub field_errors: Vec<FieldError>,

    /// Whether a submission is in flight
    pub submitting: bool,

    /// Structured result of the last successful submission
    pub submission_result: Option<ProcessTicketResult>,

    /// User-facing message from the last failed submission
    pub submission_error: Option<String>,

    /// Latest account-analysis reply
    pub analysis_reply: Option<String>,
}

impl DashboardState {
    /// Create the initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            polling: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            last_refresh_error: None,
            notice: None,
            filters: FilterCriteria::default(),
            form: SubmissionForm::default(),
            field_errors: Vec::new(),
            submitting: false,
            submission_result: None,
            submission_error: None,
            analysis_reply: None,
        }
    }

    /// Look up a cached ticket by id
    #[must_use]
    pub fn ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    /// The validation message for a field, if any
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Tickets matching the active criteria, newest first
    #[must_use]
    pub fn visible_tickets(&self) -> Vec<Ticket> {
        filter::filter_tickets(&self.tickets, &self.filters)
    }

    /// Headline figures over the unfiltered cache
    #[must_use]
    pub fn kpis(&self) -> Kpis {
        Kpis::compute(&self.tickets)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// All inputs to the dashboard reducer
///
/// User intents and effect feedback share the one action type; feedback
/// variants (`RefreshCompleted`, `SubmissionFailed`, ...) are produced by
/// effects and fed back through the store.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Fetch a fresh ticket snapshot now
    Refresh,
    /// A refresh landed; replaces the cache wholesale
    RefreshCompleted {
        /// The new snapshot
        tickets: Vec<Ticket>,
    },
    /// A refresh failed; the cache is kept as-is
    RefreshFailed {
        /// Diagnostic message
        message: String,
    },

    /// Arm the poll timer (idempotent) and refresh immediately
    StartPolling {
        /// Interval between ticks
        interval: Duration,
    },
    /// The poll timer fired
    PollTick,
    /// Disarm the poll timer
    StopPolling,

    /// Advance a ticket's status (optimistic)
    SetStatus {
        /// The ticket to update
        id: TicketId,
        /// The new status
        status: TicketStatus,
    },
    /// Persisting a status change failed; the local edit is kept
    StatusUpdateFailed {
        /// The ticket whose update failed
        id: TicketId,
        /// Diagnostic message
        message: String,
    },
    /// Clear the blocking notice
    DismissNotice,

    /// Set the filter's start day
    SetStartDate(Option<NaiveDate>),
    /// Set the filter's end day
    SetEndDate(Option<NaiveDate>),
    /// Set the filter's status criterion
    SetStatusFilter(Option<TicketStatus>),
    /// Reset all filter criteria
    ClearFilters,

    /// Edit the form's problem description
    SetFormText(String),
    /// Edit the form's client identifier
    SetFormClientId(String),
    /// Edit the form's submission date
    SetFormDate(NaiveDate),
    /// Edit the form's software type
    SetFormSoftwareType(String),

    /// Validate and submit the form
    SubmitTicket,
    /// The backend accepted and processed the submission
    SubmissionSucceeded {
        /// The backend's structured analysis
        result: ProcessTicketResult,
    },
    /// The submission failed
    SubmissionFailed {
        /// User-facing message
        message: String,
    },

    /// Ask the account-analysis model a question about a ticket
    RequestAnalysis {
        /// Ticket providing the context
        id: TicketId,
        /// The user's question
        message: String,
    },
    /// The model replied
    AnalysisReceived {
        /// The reply text
        reply: String,
    },
    /// The analysis call failed; a canned reply is shown instead
    AnalysisFailed {
        /// Diagnostic message
        message: String,
    },
}
