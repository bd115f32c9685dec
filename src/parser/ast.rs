// Abstract Syntax Tree for the chart pipeline DSL

use crate::request::SeriesType;

/// Complete plot specification
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub geom: Geom,
    pub labels: Option<Labels>,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub sci_x: bool,
    pub sci_y: bool,
    pub legend: Option<LegendArgs>,
    /// Literal colors, in series order
    pub colors: Vec<String>,
}

/// The single chart-drawing command of a pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Geom {
    ScatterLike(ScatterGeom),
    Bar(BarGeom),
    Pie(PieGeom),
}

/// scatter(), line(), spline(), step(), area(), area_spline(), area_step()
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterGeom {
    pub series_type: SeriesType,
    pub x: Option<String>,
    pub y: Option<String>,
    /// Column whose distinct values split the rows into series
    pub group: Option<String>,
    pub points: Option<bool>,
    pub zoom: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarGeom {
    pub y: Option<String>,
    /// Column holding category names for the x axis
    pub x: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieGeom {
    pub labels: Option<String>,
    pub values: Option<String>,
    pub format: Option<String>,
}

/// Plot labels (title, axes)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Labels {
    pub title: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendArgs {
    pub show: Option<bool>,
    pub position: Option<String>,
    pub title: Option<String>,
}
