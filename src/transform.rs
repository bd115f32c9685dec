use indexmap::IndexMap;
use tracing::debug;

use crate::ir::{
    BarSeries, Column, GroupedSeries, PieSeries, ResolvedChart, ScatterSeries, SeriesData,
    SeriesSet,
};
use crate::legend::LegendSpec;
use crate::request::SeriesType;
use crate::scale::{category_axis, x_axis, y_axis, AxisConfig};

/// Tag of the independent column of an ungrouped scatter-like chart.
pub const DEFAULT_X_TAG: &str = "xCol";
/// Tag of the dependent column when no y-axis label is given.
pub const DEFAULT_Y_TAG: &str = "y";
/// Tag of the bar series when no y-axis label is given.
pub const DEFAULT_BAR_TAG: &str = "height";

/// Main entry point: reshape a resolved chart into its normalized series set.
pub fn reshape(chart: ResolvedChart) -> SeriesSet {
    match chart {
        ResolvedChart::Pie(p) => reshape_pie(p),
        ResolvedChart::Bar(b) => reshape_bar(b),
        ResolvedChart::Scatter(s) => reshape_scatter(s),
        ResolvedChart::GroupedScatter(g) => reshape_grouped(g),
    }
}

fn reshape_pie(pie: PieSeries) -> SeriesSet {
    let colors = color_map(&pie.labels, pie.colors);
    let values: IndexMap<String, Option<f64>> = pie.labels.into_iter().zip(pie.values).collect();
    debug!(slices = values.len(), colors = colors.len(), "reshaped pie");

    SeriesSet {
        series_type: SeriesType::Pie,
        data: SeriesData::Labeled(values),
        colors,
        axis: None,
        legend: LegendSpec::default(),
        title: pie.title,
        show_points: None,
        zoom: None,
        label_format: pie.label_format,
    }
}

fn reshape_bar(bar: BarSeries) -> SeriesSet {
    // The tag names the series and keys its color: bars share one color.
    let tag = bar.ylab.clone().unwrap_or_else(|| DEFAULT_BAR_TAG.to_string());
    let column = Column::numeric(tag.clone(), &bar.height);

    let mut colors = IndexMap::new();
    if let Some(color) = bar.color {
        colors.insert(tag, color);
    }

    let axis = AxisConfig {
        x: bar.categories.as_deref().map(category_axis),
        y: bar.ylab.as_deref().map(|label| y_axis(Some(label), None, false)),
    };
    debug!(bars = column.len(), categorical = axis.x.is_some(), "reshaped bar");

    SeriesSet {
        series_type: SeriesType::Bar,
        data: SeriesData::Indexed {
            columns: vec![column],
        },
        colors,
        axis: Some(axis),
        legend: LegendSpec::hidden(),
        title: bar.title,
        show_points: None,
        zoom: None,
        label_format: None,
    }
}

fn reshape_scatter(series: ScatterSeries) -> SeriesSet {
    let opts = series.options;
    let y_tag = opts.ylab.clone().unwrap_or_else(|| DEFAULT_Y_TAG.to_string());
    let x_tag = unique_tag(DEFAULT_X_TAG.to_string(), |t| t == y_tag);

    let mut xs = IndexMap::new();
    xs.insert(y_tag.clone(), x_tag.clone());

    let mut colors = IndexMap::new();
    if let Some(color) = series.color {
        colors.insert(y_tag.clone(), color);
    }

    let columns = vec![
        Column::new(x_tag, series.x),
        Column::numeric(y_tag, &series.y),
    ];
    debug!(points = columns[1].len(), "reshaped ungrouped scatter");

    SeriesSet {
        series_type: opts.series_type,
        data: SeriesData::Columns { columns, xs },
        colors,
        axis: Some(AxisConfig {
            x: Some(x_axis(opts.xlab.as_deref(), opts.xlim, opts.sci_x)),
            y: Some(y_axis(opts.ylab.as_deref(), opts.ylim, opts.sci_y)),
        }),
        legend: LegendSpec::hidden(),
        title: opts.title,
        show_points: Some(opts.show_points),
        zoom: Some(opts.zoom),
        label_format: None,
    }
}

fn reshape_grouped(series: GroupedSeries) -> SeriesSet {
    let opts = series.options;
    let names: Vec<String> = series.groups.iter().map(|g| g.name.clone()).collect();

    let mut x_columns = Vec::with_capacity(names.len());
    let mut y_columns = Vec::with_capacity(names.len());
    let mut xs = IndexMap::with_capacity(names.len());

    for (i, group) in series.groups.into_iter().enumerate() {
        // Index-derived, and kept clear of every group name.
        let x_tag = unique_tag(format!("x{i}"), |t| names.iter().any(|n| n == t));
        xs.insert(group.name.clone(), x_tag.clone());
        x_columns.push(Column::new(x_tag, group.x));
        y_columns.push(Column::numeric(group.name, &group.y));
    }

    let mut columns = x_columns;
    columns.extend(y_columns);

    let colors = color_map(&names, series.colors);
    debug!(groups = names.len(), colors = colors.len(), "reshaped grouped scatter");

    SeriesSet {
        series_type: opts.series_type,
        data: SeriesData::Columns { columns, xs },
        colors,
        axis: Some(AxisConfig {
            x: Some(x_axis(opts.xlab.as_deref(), opts.xlim, opts.sci_x)),
            y: Some(y_axis(opts.ylab.as_deref(), opts.ylim, opts.sci_y)),
        }),
        legend: LegendSpec::multi(
            series.legend_show,
            series.legend_position,
            series.legend_title,
        ),
        title: opts.title,
        show_points: Some(opts.show_points),
        zoom: Some(opts.zoom),
        label_format: None,
    }
}

/// Append `_` to `base` until `taken` no longer claims it.
fn unique_tag(mut base: String, taken: impl Fn(&str) -> bool) -> String {
    while taken(&base) {
        base.push('_');
    }
    base
}

/// Positional colors keyed by series tag. No colors means an empty map.
fn color_map(tags: &[String], colors: Option<Vec<String>>) -> IndexMap<String, String> {
    match colors {
        Some(colors) => tags.iter().cloned().zip(colors).collect(),
        None => IndexMap::new(),
    }
}
