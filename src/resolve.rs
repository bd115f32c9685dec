use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::ir::{
    BarSeries, Group, GroupedSeries, PieSeries, ResolvedChart, ScatterOptions, ScatterSeries,
};
use crate::request::{ChartRequest, Colors, Datum, Grouping, PlotKind, SeriesType};
use crate::scale::resolve_limits;

/// Validate a request and classify it into one of the reshapeable shapes.
pub fn resolve_request(req: &ChartRequest) -> ChartResult<ResolvedChart> {
    let kind: PlotKind = req.plot_kind.parse()?;
    let series_type = req
        .plot_type
        .as_deref()
        .map(str::parse::<SeriesType>)
        .transpose()?;

    debug!(%kind, ?series_type, grouped = req.grouping.is_some(), "resolving chart request");

    match kind {
        PlotKind::Pie => resolve_pie(req).map(ResolvedChart::Pie),
        PlotKind::Bar => resolve_bar(req).map(ResolvedChart::Bar),
        PlotKind::ScatterLike => {
            let series_type = series_type.unwrap_or_default();
            if !series_type.is_scatter_like() {
                return Err(ChartError::UnsupportedPlotType(series_type.as_str().to_string()));
            }
            let options = resolve_scatter_options(req, series_type)?;
            match &req.grouping {
                Some(grouping) => {
                    resolve_grouped(req, grouping, options).map(ResolvedChart::GroupedScatter)
                }
                None => resolve_scatter(req, options).map(ResolvedChart::Scatter),
            }
        }
    }
}

fn resolve_pie(req: &ChartRequest) -> ChartResult<PieSeries> {
    let labels = require(req.labels.as_ref(), "labels", PlotKind::Pie)?;
    let values = require(req.y.as_ref(), "values", PlotKind::Pie)?;
    check_len("pie values", labels.len(), values.len())?;
    check_unique(labels)?;

    Ok(PieSeries {
        labels: labels.clone(),
        values: numeric("values", values)?,
        colors: positional_colors(req.colors.as_ref(), labels.len(), "pie colors")?,
        label_format: req.label_format.clone(),
        title: req.title.clone(),
    })
}

fn resolve_bar(req: &ChartRequest) -> ChartResult<BarSeries> {
    let height = require(req.y.as_ref(), "height", PlotKind::Bar)?;
    if let Some(categories) = &req.categories {
        check_len("bar categories", height.len(), categories.len())?;
    }

    Ok(BarSeries {
        height: numeric("height", height)?,
        ylab: req.ylab.clone(),
        categories: req.categories.clone(),
        color: single_color(req.colors.as_ref(), "bar colors")?,
        title: req.title.clone(),
    })
}

fn resolve_scatter_options(req: &ChartRequest, series_type: SeriesType) -> ChartResult<ScatterOptions> {
    Ok(ScatterOptions {
        series_type,
        xlab: req.xlab.clone(),
        ylab: req.ylab.clone(),
        title: req.title.clone(),
        xlim: resolve_limits('x', req.xlim)?,
        ylim: resolve_limits('y', req.ylim)?,
        sci_x: req.sci_x.unwrap_or(false),
        sci_y: req.sci_y.unwrap_or(false),
        show_points: req.show_points.unwrap_or(true),
        zoom: req.zoom.unwrap_or(false),
    })
}

fn resolve_scatter(req: &ChartRequest, options: ScatterOptions) -> ChartResult<ScatterSeries> {
    let x = require(req.x.as_ref(), "x", PlotKind::ScatterLike)?;
    let y = require(req.y.as_ref(), "y", PlotKind::ScatterLike)?;
    check_len("scatter series", x.len(), y.len())?;

    if req.legend.as_ref().is_some_and(|l| l.title.is_some()) {
        warn!("legend title ignored: single-series charts have no legend");
    }

    Ok(ScatterSeries {
        x: x.clone(),
        y: numeric("y", y)?,
        color: single_color(req.colors.as_ref(), "scatter colors")?,
        options,
    })
}

fn resolve_grouped(
    req: &ChartRequest,
    grouping: &Grouping,
    options: ScatterOptions,
) -> ChartResult<GroupedSeries> {
    let names = &grouping.group_names;
    if names.is_empty() {
        return Err(ChartError::MissingRequiredField {
            field: "grouping.groupNames",
            kind: PlotKind::ScatterLike,
        });
    }
    check_unique(names)?;
    check_len("grouping.x", names.len(), grouping.x.len())?;
    check_len("grouping.y", names.len(), grouping.y.len())?;

    if req.x.is_some() || req.y.is_some() {
        warn!("top-level x/y ignored for a grouped request");
    }

    let mut groups = Vec::with_capacity(names.len());
    for ((name, x), y) in names.iter().zip(&grouping.x).zip(&grouping.y) {
        check_len(format!("group `{name}`"), x.len(), y.len())?;
        groups.push(Group {
            name: name.clone(),
            x: x.clone(),
            y: numeric(&format!("grouping.y[{name}]"), y)?,
        });
    }

    let legend = req.legend.clone().unwrap_or_default();

    Ok(GroupedSeries {
        groups,
        colors: positional_colors(req.colors.as_ref(), names.len(), "group colors")?,
        legend_show: legend.show.unwrap_or(true),
        legend_position: legend.position,
        legend_title: legend.title,
        options,
    })
}

fn require<'a, T>(field: Option<&'a T>, name: &'static str, kind: PlotKind) -> ChartResult<&'a T> {
    field.ok_or(ChartError::MissingRequiredField { field: name, kind })
}

fn check_len(context: impl Into<String>, expected: usize, found: usize) -> ChartResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(ChartError::shape(context, expected, found))
    }
}

fn check_unique(names: &[String]) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ChartError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}

/// Dependent values must be numbers; gaps are kept as `None`.
fn numeric(field: &str, values: &[Datum]) -> ChartResult<Vec<Option<f64>>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Datum::Number(v) => Ok(Some(*v)),
            gap if gap.is_missing() => Ok(None),
            _ => Err(ChartError::NonNumeric {
                field: field.to_string(),
                index,
            }),
        })
        .collect()
}

/// One color for a single-series chart. An empty list counts as no color.
fn single_color(colors: Option<&Colors>, context: &str) -> ChartResult<Option<String>> {
    match colors.map(Colors::as_slice) {
        None | Some([]) => Ok(None),
        Some([color]) => Ok(Some(color.clone())),
        Some(many) => Err(ChartError::shape(context, 1, many.len())),
    }
}

/// One color per label or group, in order. An empty list counts as no colors.
fn positional_colors(
    colors: Option<&Colors>,
    expected: usize,
    context: &str,
) -> ChartResult<Option<Vec<String>>> {
    match colors.map(Colors::as_slice) {
        None | Some([]) => Ok(None),
        Some(list) if list.len() == expected => Ok(Some(list.to_vec())),
        Some(list) => Err(ChartError::shape(context, expected, list.len())),
    }
}
