// Library exports for c3plot

pub mod csv_reader;
pub mod data;
pub mod error;
pub mod parser;
pub mod request;
pub mod runtime;
pub mod telemetry;

// Normalization pipeline
pub mod ir;
pub mod resolve;
pub mod transform;
pub mod scale;
pub mod legend;
pub mod compiler;
pub mod engine;

pub use compiler::{ChartPlan, EngineConfig};
pub use engine::{ChartEngine, ChartWidget, JsonEngine};
pub use error::{ChartError, ChartResult};
pub use ir::{Column, SeriesSet};
pub use request::{ChartRequest, Colors, Datum, Grouping, LegendOptions, PlotKind, SeriesType};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Pretty-print serialized plans.
    #[serde(default)]
    pub pretty: bool,
}

fn default_width() -> u32 { 800 }
fn default_height() -> u32 { 600 }

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            pretty: false,
        }
    }
}

/// Validate and reshape a request into its normalized series set.
pub fn normalize(request: &ChartRequest) -> ChartResult<SeriesSet> {
    let resolved = resolve::resolve_request(request)?;
    Ok(transform::reshape(resolved))
}

/// Full pipeline: request to engine configuration plus post-render annotations.
pub fn build_chart(request: &ChartRequest) -> ChartResult<ChartPlan> {
    normalize(request).map(compiler::compile_chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let opts: RenderOptions = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
        assert_eq!((opts.width, opts.height), (800, 600));
        assert!(opts.pretty);
    }

    #[test]
    fn test_build_chart_from_json_payload() {
        let req = ChartRequest::from_json_str(
            r#"{"plotKind": "bar", "height": [4, 5], "ylab": "count", "col": "steelblue"}"#,
        )
        .unwrap();
        let plan = build_chart(&req).unwrap();
        let data = &plan.config.data;
        assert_eq!(data.columns.as_ref().unwrap()[0].tag, "count");
        assert_eq!(data.colors["count"], "steelblue");
    }
}
