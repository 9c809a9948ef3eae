use crate::metrics::{Evaluation, MetricResult};
use serde::Serialize;
use strum::Display;

/// What one plugin invocation produced.
#[derive(Debug)]
pub enum PluginOutcome {
    /// The plugin returned zero or more well-formed results.
    Contributed(Vec<MetricResult>),

    /// The plugin returned an error or panicked.
    Failed(ohno::AppError),

    /// The plugin returned a shape the engine does not accept, described here.
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Contributed,
    Failed,
    Rejected,
}

impl PluginOutcome {
    /// Normalize a plugin's return value.
    ///
    /// Any result with a blank name rejects the whole evaluation; nothing from it is kept.
    #[must_use]
    pub fn from_evaluation(evaluation: Evaluation) -> Self {
        let malformed = match &evaluation {
            Evaluation::None => 0,
            Evaluation::Single(result) => usize::from(!result.is_well_formed()),
            Evaluation::Many(results) => results.iter().filter(|r| !r.is_well_formed()).count(),
        };

        if malformed > 0 {
            return Self::Rejected(format!("{} with {malformed} unnamed result(s)", evaluation.shape()));
        }

        Self::Contributed(evaluation.into_results())
    }

    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Contributed(_) => OutcomeKind::Contributed,
            Self::Failed(_) => OutcomeKind::Failed,
            Self::Rejected(_) => OutcomeKind::Rejected,
        }
    }

    #[must_use]
    pub const fn result_count(&self) -> usize {
        match self {
            Self::Contributed(results) => results.len(),
            _ => 0,
        }
    }
}
