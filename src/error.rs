use thiserror::Error;

use crate::request::PlotKind;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while turning a chart request into an engine configuration.
///
/// All of these are produced before the engine is invoked, so a failed
/// request never reaches the renderer half-built.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("shape mismatch in {context}: expected {expected} values, found {found}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("missing required field `{field}` for {kind} chart")]
    MissingRequiredField { field: &'static str, kind: PlotKind },

    #[error("unsupported plot type `{0}`")]
    UnsupportedPlotType(String),

    #[error("duplicate series name `{0}`")]
    DuplicateName(String),

    #[error("non-numeric value at position {index} of `{field}`")]
    NonNumeric { field: String, index: usize },

    #[error("invalid {axis}-axis limits: min={min}, max={max}")]
    InvalidLimits { axis: char, min: f64, max: f64 },

    #[error("invalid chart request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("chart engine failed: {0}")]
    Engine(String),
}

impl ChartError {
    pub(crate) fn shape(context: impl Into<String>, expected: usize, found: usize) -> Self {
        ChartError::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }
}
