//! Compile a normalized series set into the engine's configuration schema.

use indexmap::IndexMap;
use serde::Serialize;

use crate::ir::{Column, SeriesData, SeriesSet};
use crate::legend::{LegendConfig, LegendTitle};
use crate::request::SeriesType;
use crate::scale::AxisConfig;

/// Everything handed to the engine for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlan {
    pub config: EngineConfig,
    /// Steps the host runs after the engine has drawn the chart.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Annotation {
    LegendTitle(LegendTitle),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineConfig {
    pub data: DataConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<AxisConfig>,
    pub legend: LegendConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<PointConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<ZoomConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie: Option<PieConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<IndexMap<String, Option<f64>>>,
    #[serde(rename = "type")]
    pub chart_type: SeriesType,
    /// Always present; empty leaves every series on the engine's palette.
    pub colors: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointConfig {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoomConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleConfig {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TooltipConfig {
    pub grouped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieConfig {
    pub label: PieLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieLabel {
    /// Formatter identifier, resolved by the host.
    pub format: String,
}

/// Compile a series set into the engine configuration plus post-render steps.
pub fn compile_chart(set: SeriesSet) -> ChartPlan {
    let scatter_like = set.series_type.is_scatter_like();

    let (columns, xs, json) = match set.data {
        SeriesData::Columns { columns, xs } => (Some(columns), Some(xs), None),
        SeriesData::Indexed { columns } => (Some(columns), None, None),
        SeriesData::Labeled(values) => (None, None, Some(values)),
    };

    let annotations = set
        .legend
        .title
        .clone()
        .map(Annotation::LegendTitle)
        .into_iter()
        .collect();

    let config = EngineConfig {
        data: DataConfig {
            columns,
            xs,
            json,
            chart_type: set.series_type,
            colors: set.colors,
        },
        axis: set.axis,
        legend: LegendConfig::from(&set.legend),
        point: set.show_points.map(|show| PointConfig { show }),
        zoom: set.zoom.map(|enabled| ZoomConfig { enabled }),
        title: set.title.map(|text| TitleConfig { text }),
        tooltip: scatter_like.then_some(TooltipConfig { grouped: false }),
        pie: set
            .label_format
            .map(|format| PieConfig { label: PieLabel { format } }),
    };

    ChartPlan {
        config,
        annotations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::LegendSpec;
    use crate::request::Datum;
    use serde_json::json;

    fn scatter_set() -> SeriesSet {
        let mut xs = IndexMap::new();
        xs.insert("y".to_string(), "xCol".to_string());
        SeriesSet {
            series_type: SeriesType::Scatter,
            data: SeriesData::Columns {
                columns: vec![
                    Column::new("xCol", vec![Datum::Number(1.0)]),
                    Column::new("y", vec![Datum::Number(2.0)]),
                ],
                xs,
            },
            colors: IndexMap::new(),
            axis: None,
            legend: LegendSpec::hidden(),
            title: Some("T".into()),
            show_points: Some(true),
            zoom: Some(false),
            label_format: None,
        }
    }

    #[test]
    fn test_compile_scatter_json() {
        let plan = compile_chart(scatter_set());
        assert!(plan.annotations.is_empty());
        assert_eq!(
            serde_json::to_value(&plan).unwrap(),
            json!({
                "config": {
                    "data": {
                        "columns": [["xCol", 1.0], ["y", 2.0]],
                        "xs": {"y": "xCol"},
                        "type": "scatter",
                        "colors": {}
                    },
                    "legend": {"show": false},
                    "point": {"show": true},
                    "zoom": {"enabled": false},
                    "title": {"text": "T"},
                    "tooltip": {"grouped": false}
                }
            })
        );
    }

    #[test]
    fn test_legend_title_becomes_annotation() {
        let mut set = scatter_set();
        set.legend = LegendSpec::multi(true, None, Some("Species".into()));
        let plan = compile_chart(set);
        assert_eq!(plan.annotations.len(), 1);
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            value["annotations"][0],
            json!({"kind": "legendTitle", "text": "Species", "offsetPx": 20.0, "fontSizePx": 12})
        );
        assert_eq!(value["config"]["legend"], json!({"show": true}));
    }

    #[test]
    fn test_pie_label_format() {
        let mut values = IndexMap::new();
        values.insert("a".to_string(), Some(3.0));
        let set = SeriesSet {
            series_type: SeriesType::Pie,
            data: SeriesData::Labeled(values),
            colors: IndexMap::new(),
            axis: None,
            legend: LegendSpec::default(),
            title: None,
            show_points: None,
            zoom: None,
            label_format: Some("value".into()),
        };
        let value = serde_json::to_value(compile_chart(set)).unwrap();
        assert_eq!(value["config"]["data"]["json"], json!({"a": 3.0}));
        assert_eq!(value["config"]["pie"], json!({"label": {"format": "value"}}));
        assert_eq!(value["config"]["legend"], json!({}));
        assert!(value["config"].get("tooltip").is_none());
    }
}
