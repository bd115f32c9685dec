//! Hand-off to the chart engine and the host-facing widget lifecycle.

use tracing::{debug, trace, warn};

use crate::compiler::ChartPlan;
use crate::error::{ChartError, ChartResult};
use crate::request::ChartRequest;
use crate::RenderOptions;

/// The rendering collaborator: consumes a finished plan, returns a chart handle.
pub trait ChartEngine {
    type Handle;

    fn generate(&mut self, plan: &ChartPlan, options: &RenderOptions) -> ChartResult<Self::Handle>;
}

/// Engine that renders a plan to its JSON text. Used by the command-line host.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEngine;

impl ChartEngine for JsonEngine {
    type Handle = String;

    fn generate(&mut self, plan: &ChartPlan, options: &RenderOptions) -> ChartResult<String> {
        let text = if options.pretty {
            serde_json::to_string_pretty(plan)
        } else {
            serde_json::to_string(plan)
        };
        text.map_err(|e| ChartError::Engine(format!("failed to serialize chart plan: {e}")))
    }
}

/// One chart instance bound to a host element.
///
/// Owns its engine and the handle of the last successful render. Instances
/// share nothing with each other.
pub struct ChartWidget<E: ChartEngine> {
    engine: E,
    options: RenderOptions,
    handle: Option<E::Handle>,
}

impl<E: ChartEngine> ChartWidget<E> {
    pub fn new(engine: E, options: RenderOptions) -> Self {
        Self {
            engine,
            options,
            handle: None,
        }
    }

    /// Normalize `request` and render it. On any error the previous chart is
    /// dropped, so the host shows nothing rather than a stale chart.
    pub fn render_value(&mut self, request: &ChartRequest) -> ChartResult<&E::Handle> {
        self.handle = None;
        let plan = crate::build_chart(request).inspect_err(|err| {
            warn!(error = %err, "chart request rejected");
        })?;
        debug!(
            width = self.options.width,
            height = self.options.height,
            annotations = plan.annotations.len(),
            "handing plan to engine"
        );
        let handle = self.engine.generate(&plan, &self.options)?;
        Ok(&*self.handle.insert(handle))
    }

    /// Resize hook. The engine keeps its own size; nothing is re-rendered.
    pub fn resize(&mut self, width: u32, height: u32) {
        trace!(width, height, "resize ignored");
    }

    pub fn handle(&self) -> Option<&E::Handle> {
        self.handle.as_ref()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the plans it receives.
    #[derive(Default)]
    struct RecordingEngine {
        plans: Vec<ChartPlan>,
    }

    impl ChartEngine for RecordingEngine {
        type Handle = usize;

        fn generate(&mut self, plan: &ChartPlan, _options: &RenderOptions) -> ChartResult<usize> {
            self.plans.push(plan.clone());
            Ok(self.plans.len())
        }
    }

    #[test]
    fn test_render_keeps_handle() {
        let mut widget = ChartWidget::new(RecordingEngine::default(), RenderOptions::default());
        let req = ChartRequest::pie(["a", "b"], [3.0, 7.0]);
        assert_eq!(*widget.render_value(&req).unwrap(), 1);
        assert_eq!(widget.handle(), Some(&1));
    }

    #[test]
    fn test_invalid_request_never_reaches_engine() {
        let mut widget = ChartWidget::new(RecordingEngine::default(), RenderOptions::default());
        widget.render_value(&ChartRequest::pie(["a"], [1.0])).unwrap();

        let bad = ChartRequest::pie(["a", "b"], [1.0]);
        assert!(widget.render_value(&bad).is_err());
        assert!(widget.handle().is_none());
        assert_eq!(widget.engine.plans.len(), 1);
    }

    #[test]
    fn test_resize_is_a_no_op() {
        let mut widget = ChartWidget::new(RecordingEngine::default(), RenderOptions::default());
        widget.render_value(&ChartRequest::bar([1.0])).unwrap();
        widget.resize(100, 50);
        assert_eq!(widget.handle(), Some(&1));
        assert_eq!(widget.engine.plans.len(), 1);
        assert_eq!(widget.options().width, 800);
    }

    #[test]
    fn test_json_engine_output() {
        let mut widget = ChartWidget::new(JsonEngine, RenderOptions::default());
        let text = widget.render_value(&ChartRequest::bar([1.0, 2.0])).unwrap();
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["config"]["data"]["columns"][0][0], "height");
        assert_eq!(value["config"]["data"]["type"], "bar");
    }
}
