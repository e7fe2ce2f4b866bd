//! Reducer logic for the dashboard.
//!
//! All business rules live here: polling lifecycle, the optimistic status
//! edit with its regression guard, submission validation, and the analysis
//! chat. The reducer only describes effects; the store runtime executes
//! them and feeds the result actions back in.

use crate::types::{
    DashboardAction, DashboardState, Field, FieldError, Notice, SOFTWARE_TYPES, SubmissionForm,
};
use churnboard_api::{ApiError, ChatRequest, ProcessTicketRequest, TicketApi};
use churnboard_core::{
    SmallVec,
    effect::{Effect, EffectId},
    environment::Clock,
    reducer::Reducer,
    smallvec,
};
use std::sync::Arc;
use std::time::Duration;

/// Validation message for a missing problem description
pub const TEXT_REQUIRED: &str = "La descripción del problema es obligatoria";

/// Validation message for a missing client identifier
pub const CLIENT_ID_REQUIRED: &str = "El ID del cliente es obligatorio";

/// Generic message for submission failures that carry no backend detail
pub const SUBMIT_CONNECTIVITY_ERROR: &str =
    "Error al procesar el ticket. Verifique que el servidor esté activo.";

/// Canned reply shown when the analysis service is unreachable
pub const FALLBACK_ANALYSIS_REPLY: &str =
    "Lo siento, el servicio de IA no está disponible en este momento.";

const POLL_TIMER: &str = "poll-timer";

/// Environment dependencies for the dashboard reducer
#[derive(Clone)]
pub struct DashboardEnvironment {
    /// Handle to the ticket backend
    pub api: Arc<dyn TicketApi>,

    /// Clock for the form's default submission date
    pub clock: Arc<dyn Clock>,
}

impl DashboardEnvironment {
    /// Creates a new `DashboardEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn TicketApi>, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }
}

/// Reducer for the dashboard
#[derive(Clone, Debug)]
pub struct DashboardReducer;

impl DashboardReducer {
    /// Creates a new `DashboardReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The cancellation id of the poll timer
    #[must_use]
    pub fn poll_timer_id() -> EffectId {
        EffectId::new(POLL_TIMER)
    }

    /// Validates the submission form
    fn validate_form(form: &SubmissionForm) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if form.text.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Text,
                message: TEXT_REQUIRED.to_string(),
            });
        }
        if form.client_id.trim().is_empty() {
            errors.push(FieldError {
                field: Field::ClientId,
                message: CLIENT_ID_REQUIRED.to_string(),
            });
        }
        errors
    }

    /// User-facing message for a failed submission
    ///
    /// Backend validation rejections (HTTP 400) are surfaced verbatim;
    /// everything else collapses to a generic connectivity message.
    fn submission_error_message(error: &ApiError) -> String {
        match error {
            ApiError::Validation { message } => message.clone(),
            _ => SUBMIT_CONNECTIVITY_ERROR.to_string(),
        }
    }

    /// Effect fetching a fresh ticket snapshot
    fn refresh_effect(env: &DashboardEnvironment) -> Effect<DashboardAction> {
        let api = Arc::clone(&env.api);
        Effect::Future(Box::pin(async move {
            match api.list_tickets().await {
                Ok(tickets) => Some(DashboardAction::RefreshCompleted { tickets }),
                Err(error) => Some(DashboardAction::RefreshFailed {
                    message: error.to_string(),
                }),
            }
        }))
    }

    /// Cancellable effect firing `PollTick` after the interval
    fn poll_timer_effect(interval: Duration) -> Effect<DashboardAction> {
        Effect::Cancellable {
            id: Self::poll_timer_id(),
            future: Box::pin(async move {
                tokio::time::sleep(interval).await;
                Some(DashboardAction::PollTick)
            }),
        }
    }
}

impl Default for DashboardReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Action = DashboardAction;
    type Environment = DashboardEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action keeps the flow readable
    fn reduce(
        &self,
        state: &mut DashboardState,
        action: DashboardAction,
        env: &DashboardEnvironment,
    ) -> SmallVec<[Effect<DashboardAction>; 4]> {
        match action {
            // --- Ticket cache ---
            DashboardAction::Refresh => {
                smallvec![Self::refresh_effect(env)]
            },
            DashboardAction::RefreshCompleted { tickets } => {
                state.tickets = tickets;
                state.last_refresh_error = None;
                smallvec![]
            },
            DashboardAction::RefreshFailed { message } => {
                // Stale-read tolerance: keep the previous snapshot and only
                // record the failure for diagnostics. The next poll retries.
                tracing::warn!(%message, "Ticket refresh failed");
                state.last_refresh_error = Some(message);
                smallvec![]
            },

            // --- Polling lifecycle ---
            DashboardAction::StartPolling { interval } => {
                if state.polling {
                    return smallvec![];
                }
                state.polling = true;
                state.poll_interval = interval;
                smallvec![
                    Self::refresh_effect(env),
                    Self::poll_timer_effect(interval),
                ]
            },
            DashboardAction::PollTick => {
                if !state.polling {
                    // A tick that raced a stop; the timer is already gone.
                    return smallvec![];
                }
                smallvec![
                    Self::refresh_effect(env),
                    Self::poll_timer_effect(state.poll_interval),
                ]
            },
            DashboardAction::StopPolling => {
                if !state.polling {
                    return smallvec![];
                }
                state.polling = false;
                smallvec![Effect::Cancel(Self::poll_timer_id())]
            },

            // --- Status edits ---
            DashboardAction::SetStatus { id, status } => {
                let Some(ticket) = state.tickets.iter_mut().find(|t| t.id == id) else {
                    return smallvec![];
                };
                if status <= ticket.status {
                    // Statuses only move forward
                    return smallvec![];
                }
                ticket.status = status;
                let api = Arc::clone(&env.api);
                smallvec![Effect::Future(Box::pin(async move {
                    match api.update_ticket_status(id, status).await {
                        Ok(()) => None,
                        Err(error) => Some(DashboardAction::StatusUpdateFailed {
                            id,
                            message: error.to_string(),
                        }),
                    }
                }))]
            },
            DashboardAction::StatusUpdateFailed { id, message } => {
                // The optimistic edit stays; the next poll converges the
                // cache with whatever the backend actually holds.
                tracing::warn!(ticket = %id, %message, "Status update failed");
                state.notice = Some(Notice::status_save_failed());
                smallvec![]
            },
            DashboardAction::DismissNotice => {
                state.notice = None;
                smallvec![]
            },

            // --- Filters ---
            DashboardAction::SetStartDate(date) => {
                state.filters.start_date = date;
                smallvec![]
            },
            DashboardAction::SetEndDate(date) => {
                state.filters.end_date = date;
                smallvec![]
            },
            DashboardAction::SetStatusFilter(status) => {
                state.filters.status = status;
                smallvec![]
            },
            DashboardAction::ClearFilters => {
                state.filters.clear();
                smallvec![]
            },

            // --- Submission form ---
            DashboardAction::SetFormText(text) => {
                state.form.text = text;
                state.field_errors.retain(|e| e.field != Field::Text);
                smallvec![]
            },
            DashboardAction::SetFormClientId(client_id) => {
                state.form.client_id = client_id;
                state.field_errors.retain(|e| e.field != Field::ClientId);
                smallvec![]
            },
            DashboardAction::SetFormDate(date) => {
                state.form.date = Some(date);
                smallvec![]
            },
            DashboardAction::SetFormSoftwareType(software_type) => {
                // The form offers a fixed option list; anything else is
                // ignored and the current selection stands
                if SOFTWARE_TYPES.contains(&software_type.as_str()) {
                    state.form.software_type = software_type;
                }
                smallvec![]
            },
            DashboardAction::SubmitTicket => {
                let errors = Self::validate_form(&state.form);
                if !errors.is_empty() {
                    state.field_errors = errors;
                    return smallvec![];
                }
                state.field_errors.clear();
                state.submitting = true;
                state.submission_result = None;
                state.submission_error = None;

                let date = state
                    .form
                    .date
                    .unwrap_or_else(|| env.clock.now().date_naive());
                let request = ProcessTicketRequest {
                    text: state.form.text.trim().to_string(),
                    client_id: state.form.client_id.trim().to_string(),
                    date: date.format("%Y-%m-%d").to_string(),
                    software_type: state.form.software_type.clone(),
                };
                let api = Arc::clone(&env.api);
                smallvec![Effect::Future(Box::pin(async move {
                    match api.process_ticket(request).await {
                        Ok(result) => Some(DashboardAction::SubmissionSucceeded { result }),
                        Err(error) => Some(DashboardAction::SubmissionFailed {
                            message: Self::submission_error_message(&error),
                        }),
                    }
                }))]
            },
            DashboardAction::SubmissionSucceeded { result } => {
                state.submitting = false;
                state.submission_result = Some(result);
                state.form = SubmissionForm::default();
                smallvec![]
            },
            DashboardAction::SubmissionFailed { message } => {
                state.submitting = false;
                state.submission_error = Some(message);
                smallvec![]
            },

            // --- Account analysis ---
            DashboardAction::RequestAnalysis { id, message } => {
                let Some(ticket) = state.ticket(id) else {
                    return smallvec![];
                };
                let context =
                    serde_json::to_value(ticket).unwrap_or(serde_json::Value::Null);
                state.analysis_reply = None;
                let api = Arc::clone(&env.api);
                smallvec![Effect::Future(Box::pin(async move {
                    match api.chat(ChatRequest { message, context }).await {
                        Ok(response) => Some(DashboardAction::AnalysisReceived {
                            reply: response.reply,
                        }),
                        Err(error) => Some(DashboardAction::AnalysisFailed {
                            message: error.to_string(),
                        }),
                    }
                }))]
            },
            DashboardAction::AnalysisReceived { reply } => {
                state.analysis_reply = Some(reply);
                smallvec![]
            },
            DashboardAction::AnalysisFailed { message } => {
                // The detail view must never go blank; show the canned reply.
                tracing::warn!(%message, "Analysis request failed");
                state.analysis_reply = Some(FALLBACK_ANALYSIS_REPLY.to_string());
                smallvec![]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;
    use churnboard_api::{
        ChatResponse, ProcessTicketResult, Ticket, TicketId, TicketStatus,
    };
    use churnboard_testing::{ReducerTest, assertions, test_clock};
    use std::future::Future;
    use std::pin::Pin;

    /// API stub for pure reducer tests; effects are asserted on shape, never run
    struct NoopApi;

    impl TicketApi for NoopApi {
        fn list_tickets(
            &self,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<Ticket>, ApiError>> + Send + '_>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn process_ticket(
            &self,
            _request: ProcessTicketRequest,
        ) -> Pin<Box<dyn Future<Output = Result<ProcessTicketResult, ApiError>> + Send + '_>>
        {
            Box::pin(async { Ok(ProcessTicketResult::default()) })
        }

        fn update_ticket_status(
            &self,
            _id: TicketId,
            _status: TicketStatus,
        ) -> Pin<Box<dyn Future<Output = Result<(), ApiError>> + Send + '_>> {
            Box::pin(async { Ok(()) })
        }

        fn chat(
            &self,
            _request: ChatRequest,
        ) -> Pin<Box<dyn Future<Output = Result<ChatResponse, ApiError>> + Send + '_>> {
            Box::pin(async {
                Ok(ChatResponse {
                    reply: String::new(),
                })
            })
        }
    }

    fn test_env() -> DashboardEnvironment {
        DashboardEnvironment::new(Arc::new(NoopApi), Arc::new(test_clock()))
    }

    fn ticket(id: i64, status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::new(id),
            classification: churnboard_api::Classification::Correctivo,
            source: churnboard_api::Source::Web,
            project: "ERP".to_string(),
            client_id: format!("C-{id}"),
            client_email: String::new(),
            churn_score: 40.0,
            churn_level: String::new(),
            churn_color: String::new(),
            status,
            date: "2024-01-10T09:30:00".to_string(),
            text_processed: String::new(),
            insight: String::new(),
            real_antiguedad: 1.0,
            phishing_prob: 0.0,
            urgency: None,
        }
    }

    fn state_with(tickets: Vec<Ticket>) -> DashboardState {
        DashboardState {
            tickets,
            ..DashboardState::new()
        }
    }

    #[test]
    fn refresh_emits_a_fetch() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::Refresh)
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn refresh_completed_replaces_the_cache() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(state_with(vec![ticket(1, TicketStatus::Recibido)]))
            .when_action(DashboardAction::RefreshCompleted {
                tickets: vec![
                    ticket(2, TicketStatus::Recibido),
                    ticket(3, TicketStatus::Visto),
                ],
            })
            .then_state(|state| {
                assert_eq!(state.tickets.len(), 2);
                assert!(state.ticket(TicketId::new(1)).is_none());
                assert!(state.last_refresh_error.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn refresh_failure_keeps_the_previous_snapshot() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(state_with(vec![ticket(1, TicketStatus::Recibido)]))
            .when_action(DashboardAction::RefreshFailed {
                message: "connection refused".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.tickets.len(), 1);
                assert_eq!(
                    state.last_refresh_error.as_deref(),
                    Some("connection refused")
                );
                assert!(state.notice.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn start_polling_refreshes_and_arms_the_timer() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::StartPolling {
                interval: Duration::from_millis(5000),
            })
            .then_state(|state| {
                assert!(state.polling);
                assert_eq!(state.poll_interval, Duration::from_millis(5000));
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 2);
                assertions::assert_has_future_effect(effects);
                assertions::assert_has_cancellable_effect(
                    effects,
                    &DashboardReducer::poll_timer_id(),
                );
            })
            .run();
    }

    #[test]
    fn start_polling_twice_arms_no_second_timer() {
        let mut polling = DashboardState::new();
        polling.polling = true;

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(polling)
            .when_action(DashboardAction::StartPolling {
                interval: Duration::from_millis(5000),
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn poll_tick_rearms_while_polling() {
        let mut polling = DashboardState::new();
        polling.polling = true;

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(polling)
            .when_action(DashboardAction::PollTick)
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 2);
                assertions::assert_has_cancellable_effect(
                    effects,
                    &DashboardReducer::poll_timer_id(),
                );
            })
            .run();
    }

    #[test]
    fn poll_tick_after_stop_is_inert() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::PollTick)
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn stop_polling_cancels_the_timer() {
        let mut polling = DashboardState::new();
        polling.polling = true;

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(polling)
            .when_action(DashboardAction::StopPolling)
            .then_state(|state| assert!(!state.polling))
            .then_effects(|effects| {
                assertions::assert_has_cancel_effect(
                    effects,
                    &DashboardReducer::poll_timer_id(),
                );
            })
            .run();
    }

    #[test]
    fn stop_polling_when_idle_is_a_noop() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::StopPolling)
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn set_status_applies_optimistically_and_persists() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(state_with(vec![ticket(1, TicketStatus::Recibido)]))
            .when_action(DashboardAction::SetStatus {
                id: TicketId::new(1),
                status: TicketStatus::Visto,
            })
            .then_state(|state| {
                assert_eq!(
                    state.ticket(TicketId::new(1)).unwrap().status,
                    TicketStatus::Visto
                );
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn set_status_rejects_regressions() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(state_with(vec![ticket(1, TicketStatus::Respondido)]))
            .when_action(DashboardAction::SetStatus {
                id: TicketId::new(1),
                status: TicketStatus::Visto,
            })
            .then_state(|state| {
                assert_eq!(
                    state.ticket(TicketId::new(1)).unwrap().status,
                    TicketStatus::Respondido
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn set_status_never_moves_backwards_for_any_pair() {
        for current in TicketStatus::all() {
            for target in TicketStatus::all() {
                if target > current {
                    continue;
                }
                ReducerTest::new(DashboardReducer)
                    .with_env(test_env())
                    .given_state(state_with(vec![ticket(1, current)]))
                    .when_action(DashboardAction::SetStatus {
                        id: TicketId::new(1),
                        status: target,
                    })
                    .then_state(move |state| {
                        assert_eq!(state.ticket(TicketId::new(1)).unwrap().status, current);
                    })
                    .then_effects(assertions::assert_no_effects)
                    .run();
            }
        }
    }

    #[test]
    fn software_type_only_accepts_offered_options() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::SetFormSoftwareType("CRM".to_string()))
            .then_state(|state| assert_eq!(state.form.software_type, "CRM"))
            .run();

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::SetFormSoftwareType("Nómina".to_string()))
            .then_state(|state| assert_eq!(state.form.software_type, "ERP"))
            .run();
    }

    #[test]
    fn set_status_for_unknown_ticket_is_ignored() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::SetStatus {
                id: TicketId::new(99),
                status: TicketStatus::Visto,
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn status_update_failure_raises_notice_without_rollback() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(state_with(vec![ticket(1, TicketStatus::Visto)]))
            .when_action(DashboardAction::StatusUpdateFailed {
                id: TicketId::new(1),
                message: "HTTP 500".to_string(),
            })
            .then_state(|state| {
                assert_eq!(
                    state.notice.as_ref().unwrap().message,
                    Notice::STATUS_SAVE_FAILED
                );
                // The optimistic edit stays in place
                assert_eq!(
                    state.ticket(TicketId::new(1)).unwrap().status,
                    TicketStatus::Visto
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn dismiss_notice_clears_it() {
        let mut noticed = DashboardState::new();
        noticed.notice = Some(Notice::status_save_failed());

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(noticed)
            .when_action(DashboardAction::DismissNotice)
            .then_state(|state| assert!(state.notice.is_none()))
            .run();
    }

    #[test]
    fn typing_clears_the_fields_own_error_only() {
        let mut invalid = DashboardState::new();
        invalid.field_errors = vec![
            FieldError {
                field: Field::Text,
                message: TEXT_REQUIRED.to_string(),
            },
            FieldError {
                field: Field::ClientId,
                message: CLIENT_ID_REQUIRED.to_string(),
            },
        ];

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(invalid)
            .when_action(DashboardAction::SetFormText("No funciona".to_string()))
            .then_state(|state| {
                assert!(state.field_error(Field::Text).is_none());
                assert_eq!(
                    state.field_error(Field::ClientId),
                    Some(CLIENT_ID_REQUIRED)
                );
            })
            .run();
    }

    #[test]
    fn submit_with_empty_text_fails_validation_without_network() {
        let mut drafted = DashboardState::new();
        drafted.form.client_id = "C-104".to_string();
        drafted.form.text = "   ".to_string();

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(drafted)
            .when_action(DashboardAction::SubmitTicket)
            .then_state(|state| {
                assert_eq!(state.field_error(Field::Text), Some(TEXT_REQUIRED));
                assert!(!state.submitting);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn submit_with_empty_client_id_fails_validation_without_network() {
        let mut drafted = DashboardState::new();
        drafted.form.text = "La exportación falla".to_string();

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(drafted)
            .when_action(DashboardAction::SubmitTicket)
            .then_state(|state| {
                assert_eq!(
                    state.field_error(Field::ClientId),
                    Some(CLIENT_ID_REQUIRED)
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn submit_valid_form_emits_the_request() {
        let mut drafted = DashboardState::new();
        drafted.form.text = "La exportación falla".to_string();
        drafted.form.client_id = "C-104".to_string();

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(drafted)
            .when_action(DashboardAction::SubmitTicket)
            .then_state(|state| {
                assert!(state.submitting);
                assert!(state.field_errors.is_empty());
                assert!(state.submission_error.is_none());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut submitting = DashboardState::new();
        submitting.submitting = true;
        submitting.form.text = "La exportación falla".to_string();
        submitting.form.client_id = "C-104".to_string();

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(submitting)
            .when_action(DashboardAction::SubmissionSucceeded {
                result: ProcessTicketResult::default(),
            })
            .then_state(|state| {
                assert!(!state.submitting);
                assert!(state.submission_result.is_some());
                assert!(state.form.text.is_empty());
                assert_eq!(state.form.software_type, "ERP");
            })
            .run();
    }

    #[test]
    fn failed_submission_keeps_the_form() {
        let mut submitting = DashboardState::new();
        submitting.submitting = true;
        submitting.form.text = "La exportación falla".to_string();
        submitting.form.client_id = "C-104".to_string();

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(submitting)
            .when_action(DashboardAction::SubmissionFailed {
                message: SUBMIT_CONNECTIVITY_ERROR.to_string(),
            })
            .then_state(|state| {
                assert!(!state.submitting);
                assert_eq!(
                    state.submission_error.as_deref(),
                    Some(SUBMIT_CONNECTIVITY_ERROR)
                );
                assert_eq!(state.form.text, "La exportación falla");
            })
            .run();
    }

    #[test]
    fn submission_error_messages_map_by_kind() {
        let validation = ApiError::Validation {
            message: "client_id desconocido".to_string(),
        };
        assert_eq!(
            DashboardReducer::submission_error_message(&validation),
            "client_id desconocido"
        );

        let transport = ApiError::RequestFailed("connection refused".to_string());
        assert_eq!(
            DashboardReducer::submission_error_message(&transport),
            SUBMIT_CONNECTIVITY_ERROR
        );
    }

    #[test]
    fn clear_filters_resets_criteria() {
        let mut filtered = DashboardState::new();
        filtered.filters.status = Some(TicketStatus::Visto);
        filtered.filters.start_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1);

        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(filtered)
            .when_action(DashboardAction::ClearFilters)
            .then_state(|state| assert!(state.filters.is_empty()))
            .run();
    }

    #[test]
    fn analysis_failure_falls_back_to_canned_reply() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::AnalysisFailed {
                message: "connection refused".to_string(),
            })
            .then_state(|state| {
                assert_eq!(
                    state.analysis_reply.as_deref(),
                    Some(FALLBACK_ANALYSIS_REPLY)
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn analysis_for_unknown_ticket_is_ignored() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(DashboardState::new())
            .when_action(DashboardAction::RequestAnalysis {
                id: TicketId::new(99),
                message: "¿Cuánta antigüedad tiene?".to_string(),
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn analysis_request_for_known_ticket_emits_chat_call() {
        ReducerTest::new(DashboardReducer)
            .with_env(test_env())
            .given_state(state_with(vec![ticket(1, TicketStatus::Recibido)]))
            .when_action(DashboardAction::RequestAnalysis {
                id: TicketId::new(1),
                message: "¿Cuánta antigüedad tiene?".to_string(),
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }
}
