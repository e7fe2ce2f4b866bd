//! Wire types for the ticket backend
//!
//! Field names and enum labels match the backend's JSON exactly (the labels
//! are Spanish). Deserialization is deliberately lenient: the dashboard must
//! keep rendering even when the backend sends a value it has never seen, so
//! open-set fields fall back instead of failing the whole list.

use serde::{Deserialize, Serialize};

/// Stable ticket identifier assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    /// Create a ticket id from its raw value
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw id value
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket workflow status
///
/// The variants are ordered: a ticket moves `Recibido` → `Visto` →
/// `Respondido` and never backwards. The derived `Ord` follows declaration
/// order, which is what the reducer's regression guard relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TicketStatus {
    /// Received, not yet looked at
    #[default]
    Recibido,
    /// Seen by an agent
    Visto,
    /// Answered
    Respondido,
}

impl TicketStatus {
    /// The wire label for this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recibido => "Recibido",
            Self::Visto => "Visto",
            Self::Respondido => "Respondido",
        }
    }

    /// Parse a wire label; anything unrecognized maps to `Recibido`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Visto" => Self::Visto,
            "Respondido" => Self::Respondido,
            _ => Self::Recibido,
        }
    }

    /// All statuses in workflow order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Recibido, Self::Visto, Self::Respondido]
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TicketStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// How a ticket reached the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Source {
    /// Arrived through the Gmail listener
    Email,
    /// Submitted through the dashboard form
    #[default]
    Web,
}

impl From<String> for Source {
    fn from(label: String) -> Self {
        if label == "Email" { Self::Email } else { Self::Web }
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        match source {
            Source::Email => "Email".to_string(),
            Source::Web => "Web".to_string(),
        }
    }
}

/// Backend classification of a ticket
///
/// Open set: the classifier may emit labels this client has never seen, and
/// they must round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Classification {
    /// Feature or evolution request
    Evolutivo,
    /// Defect report
    Correctivo,
    /// Any label this client does not know
    Other(String),
}

impl Default for Classification {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl Classification {
    /// The wire label for this classification
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Evolutivo => "Evolutivo",
            Self::Correctivo => "Correctivo",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Classification {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Evolutivo" => Self::Evolutivo,
            "Correctivo" => Self::Correctivo,
            _ => Self::Other(label),
        }
    }
}

impl From<Classification> for String {
    fn from(classification: Classification) -> Self {
        classification.as_str().to_string()
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency assigned by the backend's triage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    /// Low
    Baja,
    /// Medium
    Media,
    /// High
    Alta,
    /// Critical
    Critica,
    /// Any label this client does not know
    Other(String),
}

impl Urgency {
    /// The wire label for this urgency
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Baja => "Baja",
            Self::Media => "Media",
            Self::Alta => "Alta",
            Self::Critica => "Crítica",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Urgency {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Baja" => Self::Baja,
            "Media" => Self::Media,
            "Alta" => Self::Alta,
            "Crítica" => Self::Critica,
            _ => Self::Other(label),
        }
    }
}

impl From<Urgency> for String {
    fn from(urgency: Urgency) -> Self {
        urgency.as_str().to_string()
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A support ticket as delivered by `GET /api/tickets`
///
/// `date` is kept as the raw wire string. The filter engine parses it lazily,
/// so a ticket with a malformed date degrades to invisibility in the table
/// instead of failing deserialization of the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Stable identifier
    pub id: TicketId,

    /// Backend classification (open set)
    #[serde(default)]
    pub classification: Classification,

    /// Ingestion channel
    #[serde(default)]
    pub source: Source,

    /// Project the ticket belongs to
    #[serde(default)]
    pub project: String,

    /// Client identifier
    #[serde(default)]
    pub client_id: String,

    /// Client contact address
    #[serde(default)]
    pub client_email: String,

    /// Churn risk score in `[0, 100]`
    #[serde(default)]
    pub churn_score: f64,

    /// Backend display hint for the score, not authoritative
    #[serde(default)]
    pub churn_level: String,

    /// Backend display hint for the score, not authoritative
    #[serde(default)]
    pub churn_color: String,

    /// Workflow status; unknown labels default to `Recibido`
    #[serde(default)]
    pub status: TicketStatus,

    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub date: String,

    /// Normalized ticket text
    #[serde(default)]
    pub text_processed: String,

    /// Narrative insight produced by the analysis pipeline
    #[serde(default)]
    pub insight: String,

    /// Client tenure in years
    #[serde(default)]
    pub real_antiguedad: f64,

    /// Phishing probability in `[0, 100]`
    #[serde(default)]
    pub phishing_prob: f64,

    /// Triage urgency, when the backend assigned one
    #[serde(default)]
    pub urgency: Option<Urgency>,
}
