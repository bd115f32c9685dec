//! Axis configuration: limits, padding, tick formatting and categorical axes.

use serde::Serialize;

use crate::error::{ChartError, ChartResult};
use crate::request::Limits;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AxisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Axis>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<AxisLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick: Option<Tick>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub text: String,
    pub position: LabelPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPosition {
    OuterCenter,
    OuterMiddle,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Tick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TickFormat>,
}

/// Named tick formatter. The host maps `exponential` to `v => v.toExponential()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickFormat {
    Exponential,
}

/// Validate optional limits for one axis.
pub fn resolve_limits(axis: char, limits: Option<Limits>) -> ChartResult<Option<(f64, f64)>> {
    match limits {
        None => Ok(None),
        Some(Limits { min, max }) if min.is_finite() && max.is_finite() && min <= max => {
            Ok(Some((min, max)))
        }
        Some(Limits { min, max }) => Err(ChartError::InvalidLimits { axis, min, max }),
    }
}

/// Categorical x axis showing `categories` in the given order.
pub fn category_axis(categories: &[String]) -> Axis {
    Axis {
        axis_type: Some(AxisType::Category),
        categories: Some(categories.to_vec()),
        ..Default::default()
    }
}

/// Independent axis of a scatter-like chart.
///
/// Ticks never snap to the data points (`fit: false`). When limits are given
/// the padding is zeroed so the drawn range equals the limits.
pub fn x_axis(label: Option<&str>, limits: Option<(f64, f64)>, scientific: bool) -> Axis {
    let mut axis = Axis {
        label: label.map(|text| AxisLabel {
            text: text.to_string(),
            position: LabelPosition::OuterCenter,
        }),
        tick: Some(Tick {
            fit: Some(false),
            format: scientific.then_some(TickFormat::Exponential),
        }),
        ..Default::default()
    };
    if let Some((min, max)) = limits {
        axis.min = Some(min);
        axis.max = Some(max);
        axis.padding = Some(Padding {
            left: Some(0.0),
            right: Some(0.0),
            ..Default::default()
        });
    }
    axis
}

/// Dependent axis. Also used by bar charts, which never set limits.
pub fn y_axis(label: Option<&str>, limits: Option<(f64, f64)>, scientific: bool) -> Axis {
    let mut axis = Axis {
        label: label.map(|text| AxisLabel {
            text: text.to_string(),
            position: LabelPosition::OuterMiddle,
        }),
        tick: scientific.then_some(Tick {
            fit: None,
            format: Some(TickFormat::Exponential),
        }),
        ..Default::default()
    };
    if let Some((min, max)) = limits {
        axis.min = Some(min);
        axis.max = Some(max);
        axis.padding = Some(Padding {
            top: Some(0.0),
            bottom: Some(0.0),
            ..Default::default()
        });
    }
    axis
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limits_zero_padding() {
        let axis = x_axis(Some("time"), Some((0.0, 10.0)), false);
        assert_eq!(
            serde_json::to_value(&axis).unwrap(),
            json!({
                "min": 0.0,
                "max": 10.0,
                "padding": {"left": 0.0, "right": 0.0},
                "label": {"text": "time", "position": "outer-center"},
                "tick": {"fit": false}
            })
        );
    }

    #[test]
    fn test_no_limits_no_padding() {
        let axis = y_axis(Some("temp"), None, false);
        assert!(axis.padding.is_none());
        assert!(axis.min.is_none() && axis.max.is_none());
        assert!(axis.tick.is_none());
    }

    #[test]
    fn test_scientific_ticks() {
        let x = x_axis(None, None, true);
        assert_eq!(x.tick.unwrap().format, Some(TickFormat::Exponential));
        let y = y_axis(None, Some((1.0, 2.0)), true);
        assert_eq!(
            serde_json::to_value(&y).unwrap(),
            json!({
                "min": 1.0,
                "max": 2.0,
                "padding": {"top": 0.0, "bottom": 0.0},
                "tick": {"format": "exponential"}
            })
        );
    }

    #[test]
    fn test_category_axis() {
        let axis = category_axis(&["a".to_string(), "b".to_string()]);
        assert_eq!(
            serde_json::to_value(&axis).unwrap(),
            json!({"type": "category", "categories": ["a", "b"]})
        );
    }

    #[test]
    fn test_resolve_limits() {
        assert_eq!(resolve_limits('x', None).unwrap(), None);
        assert_eq!(
            resolve_limits('x', Some(Limits { min: 1.0, max: 2.0 })).unwrap(),
            Some((1.0, 2.0))
        );
        assert!(matches!(
            resolve_limits('y', Some(Limits { min: 3.0, max: 2.0 })),
            Err(ChartError::InvalidLimits { axis: 'y', .. })
        ));
        assert!(resolve_limits('x', Some(Limits { min: f64::NAN, max: 2.0 })).is_err());
    }
}
