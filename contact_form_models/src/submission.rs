use serde::{Deserialize, Serialize};

/// Lifecycle of the last submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A relay request is in flight.
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_sending(self) -> bool {
        self == Self::Sending
    }
}

/// Kind of the status message, determines how it is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Error,
}
