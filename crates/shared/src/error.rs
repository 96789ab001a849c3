use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::UiNotice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidCount,
    Busy,
    ValueTooLarge,
}

/// Recoverable rejections. None of them mutates session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid count input '{input}': expected a number between {min} and {max}")]
    InvalidCountInput {
        input: String,
        min: usize,
        max: usize,
    },
    #[error("a sort animation is still running")]
    AnimationBusy,
    #[error("clicked value {value} is above the reshuffle threshold {threshold}")]
    ValueAboveThreshold { value: u32, threshold: u32 },
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCountInput { .. } => ErrorCode::InvalidCount,
            Self::AnimationBusy => ErrorCode::Busy,
            Self::ValueAboveThreshold { .. } => ErrorCode::ValueTooLarge,
        }
    }

    pub fn to_notice(&self) -> UiNotice {
        match self {
            Self::InvalidCountInput { min, max, .. } => UiNotice::InvalidCount {
                min: *min,
                max: *max,
            },
            Self::AnimationBusy => UiNotice::Busy,
            Self::ValueAboveThreshold { threshold, .. } => UiNotice::ValueTooLarge {
                threshold: *threshold,
            },
        }
    }
}

impl From<SessionError> for UiNotice {
    fn from(value: SessionError) -> Self {
        value.to_notice()
    }
}
