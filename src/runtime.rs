// Runtime executor for the chart pipeline DSL

use crate::data::PlotData;
use crate::engine::{ChartWidget, JsonEngine};
use crate::legend::LegendPosition;
use crate::parser::ast::{BarGeom, Geom, LegendArgs, PieGeom, PlotSpec, ScatterGeom};
use crate::request::{ChartRequest, Colors, LegendOptions, Limits, PlotKind};
use crate::RenderOptions;
use anyhow::{anyhow, Context, Result};
use tracing::debug;

/// Render a plot specification to the JSON text of its chart plan
pub fn render_plot(spec: &PlotSpec, data: &PlotData, options: RenderOptions) -> Result<String> {
    let request = build_request(spec, data)?;
    let mut widget = ChartWidget::new(JsonEngine, options);
    let text = widget
        .render_value(&request)
        .context("Failed to build chart")?;
    Ok(text.clone())
}

/// Turn a parsed pipeline plus its data table into a chart request
pub fn build_request(spec: &PlotSpec, data: &PlotData) -> Result<ChartRequest> {
    let mut request = match &spec.geom {
        Geom::ScatterLike(geom) => scatter_request(geom, spec, data)?,
        Geom::Bar(geom) => bar_request(geom, spec, data)?,
        Geom::Pie(geom) => pie_request(geom, data)?,
    };

    request.title = spec.labels.as_ref().and_then(|l| l.title.clone());
    request.colors = match spec.colors.len() {
        0 => None,
        1 => Some(Colors::One(spec.colors[0].clone())),
        _ => Some(Colors::Many(spec.colors.clone())),
    };

    debug!(kind = %request.plot_kind, rows = data.rows.len(), "built chart request from pipeline");
    Ok(request)
}

fn scatter_request(geom: &ScatterGeom, spec: &PlotSpec, data: &PlotData) -> Result<ChartRequest> {
    let series_type = geom.series_type.as_str();
    let x_col = required(&geom.x, series_type, "x")?;
    let y_col = required(&geom.y, series_type, "y")?;

    let mut request = match &geom.group {
        Some(group_col) => ChartRequest::grouped(
            data.split_by(group_col, x_col, y_col)
                .with_context(|| format!("Failed to group rows by '{}'", group_col))?,
        ),
        None => ChartRequest::scatter(data.column(x_col)?, data.column(y_col)?),
    }
    .with_series_type(geom.series_type);

    // Axis labels default to the column names
    let labels = spec.labels.clone().unwrap_or_default();
    request.xlab = Some(labels.x.unwrap_or_else(|| x_col.to_string()));
    request.ylab = Some(labels.y.unwrap_or_else(|| y_col.to_string()));

    request.xlim = spec.xlim.map(|(min, max)| Limits { min, max });
    request.ylim = spec.ylim.map(|(min, max)| Limits { min, max });
    request.sci_x = Some(spec.sci_x);
    request.sci_y = Some(spec.sci_y);
    request.show_points = geom.points;
    request.zoom = geom.zoom;
    request.legend = spec.legend.as_ref().map(legend_options).transpose()?;

    Ok(request)
}

fn bar_request(geom: &BarGeom, spec: &PlotSpec, data: &PlotData) -> Result<ChartRequest> {
    let y_col = required(&geom.y, PlotKind::Bar.as_str(), "y")?;
    let ylab = spec
        .labels
        .as_ref()
        .and_then(|l| l.y.clone())
        .unwrap_or_else(|| y_col.to_string());

    let mut request = ChartRequest::bar(data.column(y_col)?).with_ylab(ylab);
    if let Some(x_col) = &geom.x {
        request = request.with_categories(data.labels(x_col)?);
    }
    Ok(request)
}

fn pie_request(geom: &PieGeom, data: &PlotData) -> Result<ChartRequest> {
    let labels_col = required(&geom.labels, PlotKind::Pie.as_str(), "labels")?;
    let values_col = required(&geom.values, PlotKind::Pie.as_str(), "values")?;

    let mut request = ChartRequest::pie(data.labels(labels_col)?, data.column(values_col)?);
    request.label_format = geom.format.clone();
    Ok(request)
}

fn legend_options(args: &LegendArgs) -> Result<LegendOptions> {
    let position = args
        .position
        .as_deref()
        .map(|p| match p {
            "bottom" => Ok(LegendPosition::Bottom),
            "right" => Ok(LegendPosition::Right),
            "inset" => Ok(LegendPosition::Inset),
            other => Err(anyhow!(
                "Unknown legend position '{}' (expected bottom, right or inset)",
                other
            )),
        })
        .transpose()?;

    Ok(LegendOptions {
        show: args.show,
        position,
        title: args.title.clone(),
    })
}

fn required<'a>(arg: &'a Option<String>, command: &str, name: &str) -> Result<&'a str> {
    arg.as_deref()
        .ok_or_else(|| anyhow!("{}() requires a '{}:' column", command, name))
}
