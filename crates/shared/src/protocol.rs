use serde::{Deserialize, Serialize};

use crate::domain::{SlotId, SortDirection};

/// Events the host UI feeds into a sort session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum InboundEvent {
    StartRequested { count: usize },
    SortToggleRequested,
    ValueClicked { value: u32 },
    ResetRequested,
}

/// Immutable render payloads and notices a session emits to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UiNotice {
    FullRender {
        values: Vec<u32>,
        slots: Vec<SlotId>,
    },
    StepRender {
        i: usize,
        j: usize,
        values: Vec<u32>,
        slots: Vec<SlotId>,
        highlight_ms: u64,
    },
    Busy,
    InvalidCount {
        min: usize,
        max: usize,
    },
    ValueTooLarge {
        threshold: u32,
    },
    SortComplete {
        direction: SortDirection,
    },
    EntryScreen,
}

impl UiNotice {
    /// Message shown to the user for notices that are not renders.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Busy => Some("Please wait until the sorting is done.".to_string()),
            Self::InvalidCount { min, max } => {
                Some(format!("Please enter a number between {min} and {max}."))
            }
            Self::ValueTooLarge { threshold } => Some(format!(
                "Please select a value smaller or equal to {threshold}."
            )),
            _ => None,
        }
    }
}
