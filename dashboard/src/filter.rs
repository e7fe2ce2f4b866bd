//! Pure filtering and derivation over the ticket cache.
//!
//! Nothing in this module performs I/O or touches the store; every function
//! maps inputs to outputs so the whole engine is testable without a runtime.

use crate::types::FilterCriteria;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use churnboard_api::Ticket;

/// Churn score above which a ticket counts as high risk in the KPIs
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;

/// Parse a ticket's wire date into a local wall-time timestamp
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS` (with optional fractional
/// seconds), and bare `YYYY-MM-DD` (taken as midnight). Returns `None` for
/// anything else; callers drop such tickets from the view rather than fail.
#[must_use]
pub fn parse_ticket_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Risk band a churn score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskBand {
    /// Score in `[0, 30]`
    Low,
    /// Score in `(30, 60]`
    Medium,
    /// Score in `(60, 80]`
    High,
    /// Score above 80
    Critical,
}

/// Band a churn score into the canonical risk levels
///
/// Single source of truth for the thresholds; every consumer (table rows,
/// detail views, KPIs' display hints) goes through here.
#[must_use]
pub fn risk_band(score: f64) -> RiskBand {
    if score > 80.0 {
        RiskBand::Critical
    } else if score > 60.0 {
        RiskBand::High
    } else if score > 30.0 {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// Apply the criteria and return matching tickets, newest first
///
/// Tickets whose `date` fails to parse are dropped. Date bounds are
/// inclusive calendar days (`start 00:00:00` through `end 23:59:59`); the
/// status criterion matches exactly. Ordering is a stable sort on the
/// parsed timestamp, descending, over the reversed backend list: the
/// backend appends, so same-timestamp tickets show the later entry first,
/// exactly as a plain reversal of the list would.
#[must_use]
pub fn filter_tickets(tickets: &[Ticket], criteria: &FilterCriteria) -> Vec<Ticket> {
    let mut dated: Vec<(NaiveDateTime, Ticket)> = tickets
        .iter()
        .rev()
        .filter_map(|ticket| parse_ticket_date(&ticket.date).map(|when| (when, ticket.clone())))
        .filter(|(when, ticket)| matches_criteria(*when, ticket, criteria))
        .collect();

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().map(|(_, ticket)| ticket).collect()
}

fn matches_criteria(when: NaiveDateTime, ticket: &Ticket, criteria: &FilterCriteria) -> bool {
    if let Some(status) = criteria.status {
        if ticket.status != status {
            return false;
        }
    }
    if let Some(start) = criteria.start_date {
        if when.date() < start {
            return false;
        }
    }
    if let Some(end) = criteria.end_date {
        if when.date() > end {
            return false;
        }
    }
    true
}

/// Headline figures shown above the ticket table
///
/// Always computed over the unfiltered cache: narrowing the view must not
/// change the headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    /// Total tickets in the cache
    pub total: usize,

    /// Mean churn score, rounded to one decimal; `0.0` when empty
    pub average_churn: f64,

    /// Tickets whose churn score exceeds [`HIGH_RISK_THRESHOLD`]
    pub high_risk: usize,
}

impl Kpis {
    /// Compute the figures for a ticket snapshot
    #[must_use]
    pub fn compute(tickets: &[Ticket]) -> Self {
        let total = tickets.len();
        let average_churn = if tickets.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let mean = tickets.iter().map(|t| t.churn_score).sum::<f64>() / total as f64;
            (mean * 10.0).round() / 10.0
        };
        let high_risk = tickets
            .iter()
            .filter(|t| t.churn_score > HIGH_RISK_THRESHOLD)
            .count();

        Self {
            total,
            average_churn,
            high_risk,
        }
    }
}
