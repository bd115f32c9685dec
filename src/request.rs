//! Host payload for a single chart render.
//!
//! A `ChartRequest` mirrors the record the embedding environment hands over at
//! render time. Every option is an `Option<T>`: a JSON `null` and a missing key
//! both mean "not given", never zero or empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, ChartResult};
use crate::legend::LegendPosition;

/// Chart kind: decides which reshaping rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Pie,
    Bar,
    /// Points and lines (scatter, line, spline, step, area...).
    ScatterLike,
}

impl PlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotKind::Pie => "pie",
            PlotKind::Bar => "bar",
            PlotKind::ScatterLike => "scatter",
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlotKind {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s {
            "pie" => Ok(PlotKind::Pie),
            "bar" => Ok(PlotKind::Bar),
            "scatter" | "scatterLike" | "scatter_like" => Ok(PlotKind::ScatterLike),
            other => Err(ChartError::UnsupportedPlotType(other.to_string())),
        }
    }
}

/// Series type of a scatter-like chart, named the way the engine names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesType {
    #[default]
    Scatter,
    Line,
    Spline,
    Step,
    Area,
    AreaSpline,
    AreaStep,
    Bar,
    Pie,
}

impl SeriesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesType::Scatter => "scatter",
            SeriesType::Line => "line",
            SeriesType::Spline => "spline",
            SeriesType::Step => "step",
            SeriesType::Area => "area",
            SeriesType::AreaSpline => "area-spline",
            SeriesType::AreaStep => "area-step",
            SeriesType::Bar => "bar",
            SeriesType::Pie => "pie",
        }
    }

    /// Whether this type can be drawn by the scatter/line reshaper.
    pub fn is_scatter_like(&self) -> bool {
        !matches!(self, SeriesType::Bar | SeriesType::Pie)
    }
}

impl FromStr for SeriesType {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s {
            "scatter" => Ok(SeriesType::Scatter),
            "line" => Ok(SeriesType::Line),
            "spline" => Ok(SeriesType::Spline),
            "step" => Ok(SeriesType::Step),
            "area" => Ok(SeriesType::Area),
            "area-spline" | "area_spline" => Ok(SeriesType::AreaSpline),
            "area-step" | "area_step" => Ok(SeriesType::AreaStep),
            "bar" => Ok(SeriesType::Bar),
            "pie" => Ok(SeriesType::Pie),
            other => Err(ChartError::UnsupportedPlotType(other.to_string())),
        }
    }
}

impl Serialize for SeriesType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One observation: a number, a categorical label, or a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Text(String),
    Missing,
}

impl Datum {
    /// Interpret a raw table cell. Empty cells and `NA` become gaps.
    pub fn parse(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() || trimmed == "NA" {
            return Datum::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Datum::Number(v),
            _ => Datum::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Datum::Missing)
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Number(v)
    }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self {
        Datum::Number(v as f64)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Datum::Missing)
    }
}

/// Colors as sent by the host: one color, or one per label/group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colors {
    One(String),
    Many(Vec<String>),
}

impl Colors {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Colors::One(c) => std::slice::from_ref(c),
            Colors::Many(cs) => cs,
        }
    }
}

/// Axis limits, sent as a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl From<[f64; 2]> for Limits {
    fn from([min, max]: [f64; 2]) -> Self {
        Limits { min, max }
    }
}

impl From<Limits> for [f64; 2] {
    fn from(l: Limits) -> Self {
        [l.min, l.max]
    }
}

/// Several named sub-series drawn on one chart, each with its own x values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grouping {
    #[serde(alias = "group_names")]
    pub group_names: Vec<String>,
    /// Independent values, positionally matched with `group_names`.
    pub x: Vec<Vec<Datum>>,
    /// Dependent values, positionally matched with `group_names`.
    pub y: Vec<Vec<Datum>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default)]
    pub position: Option<LegendPosition>,
    #[serde(default, alias = "text")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    #[serde(alias = "plot_kind")]
    pub plot_kind: String,
    #[serde(default, alias = "plot_type")]
    pub plot_type: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default, alias = "independentValues")]
    pub x: Option<Vec<Datum>>,
    #[serde(default, alias = "dependentValues", alias = "height", alias = "values")]
    pub y: Option<Vec<Datum>>,
    #[serde(default, alias = "grouped_data")]
    pub grouping: Option<Grouping>,
    #[serde(default, alias = "col", alias = "colHex", alias = "col_hex")]
    pub colors: Option<Colors>,
    #[serde(default)]
    pub xlab: Option<String>,
    #[serde(default)]
    pub ylab: Option<String>,
    #[serde(default, alias = "main")]
    pub title: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub xlim: Option<Limits>,
    #[serde(default)]
    pub ylim: Option<Limits>,
    #[serde(default, alias = "sci_x")]
    pub sci_x: Option<bool>,
    #[serde(default, alias = "sci_y")]
    pub sci_y: Option<bool>,
    #[serde(default, alias = "show_points")]
    pub show_points: Option<bool>,
    #[serde(default)]
    pub zoom: Option<bool>,
    #[serde(default)]
    pub legend: Option<LegendOptions>,
    #[serde(default, alias = "label_function")]
    pub label_format: Option<String>,
}

impl ChartRequest {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn pie<L, V>(labels: L, values: V) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<Datum>,
    {
        Self {
            plot_kind: PlotKind::Pie.as_str().to_string(),
            labels: Some(labels.into_iter().map(Into::into).collect()),
            y: Some(values.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn bar<V>(height: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<Datum>,
    {
        Self {
            plot_kind: PlotKind::Bar.as_str().to_string(),
            y: Some(height.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn scatter<X, Y>(x: X, y: Y) -> Self
    where
        X: IntoIterator,
        X::Item: Into<Datum>,
        Y: IntoIterator,
        Y::Item: Into<Datum>,
    {
        Self {
            plot_kind: PlotKind::ScatterLike.as_str().to_string(),
            x: Some(x.into_iter().map(Into::into).collect()),
            y: Some(y.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn grouped(grouping: Grouping) -> Self {
        Self {
            plot_kind: PlotKind::ScatterLike.as_str().to_string(),
            grouping: Some(grouping),
            ..Default::default()
        }
    }

    pub fn with_series_type(mut self, series_type: SeriesType) -> Self {
        self.plot_type = Some(series_type.as_str().to_string());
        self
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_ylab(mut self, ylab: impl Into<String>) -> Self {
        self.ylab = Some(ylab.into());
        self
    }

    pub fn with_categories<C>(mut self, categories: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }
}
