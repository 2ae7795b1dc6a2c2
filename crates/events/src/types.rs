//! Event types emitted by the orchestrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope wrapping all events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: Event,
}

impl EventEnvelope {
    /// Create a new event envelope with auto-generated ID and timestamp.
    pub fn new(event: Event) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// All possible orchestrator events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// All contexts submitted to the worker pool
    #[serde(rename = "run.started")]
    RunStarted { contexts: usize, workers: usize },

    /// The whole run finished, every unit accounted for
    #[serde(rename = "run.completed")]
    RunCompleted {
        status: String,
        elapsed_ms: u64,
        failed_units: usize,
    },

    /// One unit's processor began executing
    #[serde(rename = "unit.started")]
    UnitStarted { name: String, kind: String },

    /// One unit's processor finished
    #[serde(rename = "unit.completed")]
    UnitCompleted {
        name: String,
        status: String,
        elapsed_ms: u64,
    },

    /// Generic error event
    #[serde(rename = "error")]
    Error {
        message: String,
        context: Option<String>,
    },
}
