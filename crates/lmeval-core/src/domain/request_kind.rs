//! Execution modes a request can ask a model backend for.

use serde::{Deserialize, Serialize};

use super::error::InstanceError;

/// How a model backend interprets an instance's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Log-probability of a continuation given a context.
    Loglikelihood,

    /// Log-probability of a whole text, scored over rolling windows.
    LoglikelihoodRolling,

    /// Free-form generation until a stop sequence is produced.
    GenerateUntil,

    /// Choice among candidate continuations, scored by log-likelihood.
    MultipleChoice,
}

impl RequestKind {
    /// Every kind, in declaration order.
    pub const ALL: [RequestKind; 4] = [
        RequestKind::Loglikelihood,
        RequestKind::LoglikelihoodRolling,
        RequestKind::GenerateUntil,
        RequestKind::MultipleChoice,
    ];

    /// Wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Loglikelihood => "loglikelihood",
            RequestKind::LoglikelihoodRolling => "loglikelihood_rolling",
            RequestKind::GenerateUntil => "generate_until",
            RequestKind::MultipleChoice => "multiple_choice",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestKind {
    type Err = InstanceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RequestKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InstanceError::UnknownRequestKind(s.to_string()))
    }
}
