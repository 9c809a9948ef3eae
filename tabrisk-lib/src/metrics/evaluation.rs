use super::MetricResult;

/// What a plugin hands back from one evaluation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Evaluation {
    /// The plugin had nothing to report for this input.
    #[default]
    None,

    Single(MetricResult),

    /// Several results, reported in the given order.
    Many(Vec<MetricResult>),
}

impl Evaluation {
    /// Number of results carried by this evaluation.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Many(results) => results.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A short description of the evaluation's shape, for diagnostics.
    #[must_use]
    pub fn shape(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Single(_) => "single result".to_string(),
            Self::Many(results) => format!("list of {} results", results.len()),
        }
    }

    #[must_use]
    pub fn into_results(self) -> Vec<MetricResult> {
        match self {
            Self::None => Vec::new(),
            Self::Single(result) => vec![result],
            Self::Many(results) => results,
        }
    }
}

impl From<MetricResult> for Evaluation {
    fn from(result: MetricResult) -> Self {
        Self::Single(result)
    }
}

impl From<Vec<MetricResult>> for Evaluation {
    fn from(results: Vec<MetricResult>) -> Self {
        Self::Many(results)
    }
}

impl From<Option<MetricResult>> for Evaluation {
    fn from(result: Option<MetricResult>) -> Self {
        result.map_or(Self::None, Self::Single)
    }
}
