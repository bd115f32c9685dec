use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::legend::{LegendPosition, LegendSpec};
use crate::request::{Datum, SeriesType};
use crate::scale::AxisConfig;

// =============================================================================
// Phase 1: Resolution
// =============================================================================

/// A validated request, classified into the shapes the reshapers know about.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedChart {
    Pie(PieSeries),
    Bar(BarSeries),
    Scatter(ScatterSeries),
    GroupedScatter(GroupedSeries),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub colors: Option<Vec<String>>,
    pub label_format: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub height: Vec<Option<f64>>,
    pub ylab: Option<String>,
    pub categories: Option<Vec<String>>,
    pub color: Option<String>,
    pub title: Option<String>,
}

/// Options shared by both scatter-like shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterOptions {
    pub series_type: SeriesType,
    pub xlab: Option<String>,
    pub ylab: Option<String>,
    pub title: Option<String>,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub sci_x: bool,
    pub sci_y: bool,
    pub show_points: bool,
    pub zoom: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub x: Vec<Datum>,
    pub y: Vec<Option<f64>>,
    pub color: Option<String>,
    pub options: ScatterOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSeries {
    pub groups: Vec<Group>,
    pub colors: Option<Vec<String>>,
    pub legend_show: bool,
    pub legend_position: Option<LegendPosition>,
    pub legend_title: Option<String>,
    pub options: ScatterOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub x: Vec<Datum>,
    pub y: Vec<Option<f64>>,
}

// =============================================================================
// Phase 2: Reshaping
// =============================================================================

/// A tagged, ordered sequence of values: one axis or one data series.
///
/// Serializes the way the engine reads columns: `[tag, v1, v2, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub tag: String,
    pub values: Vec<Datum>,
}

impl Column {
    pub fn new(tag: impl Into<String>, values: Vec<Datum>) -> Self {
        Self {
            tag: tag.into(),
            values,
        }
    }

    pub fn numeric(tag: impl Into<String>, values: &[Option<f64>]) -> Self {
        Self::new(tag, values.iter().map(|v| Datum::from(*v)).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(&self.tag)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// The data part of a normalized chart.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// Column-oriented series with an explicit dependent → independent mapping.
    Columns {
        columns: Vec<Column>,
        xs: IndexMap<String, String>,
    },
    /// Dependent-only columns (bars), drawn against the implicit index axis.
    Indexed { columns: Vec<Column> },
    /// Label → value pairs (pie slices), in label order.
    Labeled(IndexMap<String, Option<f64>>),
}

/// Normalized series set: everything the compiler needs to build the engine
/// configuration for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    pub series_type: SeriesType,
    pub data: SeriesData,
    pub colors: IndexMap<String, String>,
    pub axis: Option<AxisConfig>,
    pub legend: LegendSpec,
    pub title: Option<String>,
    pub show_points: Option<bool>,
    pub zoom: Option<bool>,
    pub label_format: Option<String>,
}

impl SeriesSet {
    pub fn columns(&self) -> &[Column] {
        match &self.data {
            SeriesData::Columns { columns, .. } | SeriesData::Indexed { columns } => columns,
            SeriesData::Labeled(_) => &[],
        }
    }

    /// Dependent tag → independent column tag. Empty unless x columns are used.
    pub fn xs(&self) -> Option<&IndexMap<String, String>> {
        match &self.data {
            SeriesData::Columns { xs, .. } => Some(xs),
            _ => None,
        }
    }

    pub fn labeled_values(&self) -> Option<&IndexMap<String, Option<f64>>> {
        match &self.data {
            SeriesData::Labeled(values) => Some(values),
            _ => None,
        }
    }
}
