// Pipeline parser for the chart DSL

use super::ast::{Geom, Labels, LegendArgs, PlotSpec};
use super::geom::parse_geom;
use super::labels::parse_labs;
use super::legend::{parse_colors, parse_legend};
use super::lexer::ws;
use super::scale::{parse_scale_command, ScaleCommand};
use anyhow::{anyhow, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{eof, map, opt},
    multi::separated_list0,
    error::{Error, ErrorKind},
    IResult,
};

#[derive(Debug)]
enum PipelineComponent {
    Geom(Geom),
    Labels(Labels),
    Scale(ScaleCommand),
    Legend(LegendArgs),
    Colors(Vec<String>),
}

fn parse_pipeline_component(input: &str) -> IResult<&str, PipelineComponent> {
    alt((
        map(parse_geom, PipelineComponent::Geom),
        map(parse_labs, PipelineComponent::Labels),
        map(parse_scale_command, PipelineComponent::Scale),
        map(parse_legend, PipelineComponent::Legend),
        map(parse_colors, PipelineComponent::Colors),
    ))(input)
}

/// Parse a complete plot specification
/// Format: [df |] component | component | ...
pub fn parse_plot_spec(input: &str) -> IResult<&str, PlotSpec> {
    // Optional: consume leading "df"
    let (input, _) = opt(ws(tag("df")))(input)?;

    // If input starts with "|", consume it
    let (input, _) = opt(ws(tag("|")))(input)?;

    let (input, components) = separated_list0(
        ws(tag("|")),
        parse_pipeline_component
    )(input)?;

    // Consume trailing whitespace and ensure end of input
    let (input, _) = ws(eof)(input)?;

    let mut geoms = Vec::new();
    let mut labels = None;
    let mut xlim = None;
    let mut ylim = None;
    let mut sci_x = false;
    let mut sci_y = false;
    let mut legend = None;
    let mut colors = Vec::new();

    for comp in components {
        match comp {
            PipelineComponent::Geom(g) => geoms.push(g),
            // Later commands override earlier ones
            PipelineComponent::Labels(l) => labels = Some(l),
            PipelineComponent::Scale(ScaleCommand::XLim(min, max)) => xlim = Some((min, max)),
            PipelineComponent::Scale(ScaleCommand::YLim(min, max)) => ylim = Some((min, max)),
            PipelineComponent::Scale(ScaleCommand::SciX) => sci_x = true,
            PipelineComponent::Scale(ScaleCommand::SciY) => sci_y = true,
            PipelineComponent::Legend(l) => legend = Some(l),
            PipelineComponent::Colors(c) => colors = c,
        }
    }

    // Exactly one chart per pipeline
    if geoms.len() != 1 {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    let geom = geoms.remove(0);

    Ok((
        input,
        PlotSpec {
            geom,
            labels,
            xlim,
            ylim,
            sci_x,
            sci_y,
            legend,
            colors,
        },
    ))
}

/// Parse a pipeline string into a `PlotSpec`, with a readable error.
pub fn parse_pipeline(input: &str) -> Result<PlotSpec> {
    match parse_plot_spec(input) {
        Ok((_, spec)) => Ok(spec),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) if e.code == ErrorKind::Verify => Err(
            anyhow!("Pipeline must contain exactly one chart command (scatter, line, bar, pie, ...)"),
        ),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(anyhow!("Parse error near '{}'", e.input.trim()))
        }
        Err(nom::Err::Incomplete(_)) => Err(anyhow!("Parse error: incomplete input")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SeriesType;

    #[test]
    fn test_parse_single_geom() {
        let (_, spec) = parse_plot_spec("scatter(x: a, y: b)").unwrap();
        assert!(matches!(spec.geom, Geom::ScatterLike(_)));
        assert!(spec.labels.is_none());
        assert!(!spec.sci_x && !spec.sci_y);
    }

    #[test]
    fn test_parse_with_df_prefix() {
        let (_, spec) = parse_plot_spec("df | line(x: a, y: b)").unwrap();
        match spec.geom {
            Geom::ScatterLike(s) => assert_eq!(s.series_type, SeriesType::Line),
            other => panic!("Expected scatter-like geom, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_full_pipeline() {
        let input = r##"scatter(x: len, y: width, group: species)
            | labs(title: "Iris", x: "Length")
            | xlim(0, 10) | ylim(-1, 5)
            | scale_y_sci()
            | legend(position: "right", title: "Species")
            | colors("#1f77b4", "#ff7f0e")"##;
        let (_, spec) = parse_plot_spec(input).unwrap();
        assert_eq!(spec.labels.unwrap().title.as_deref(), Some("Iris"));
        assert_eq!(spec.xlim, Some((0.0, 10.0)));
        assert_eq!(spec.ylim, Some((-1.0, 5.0)));
        assert!(!spec.sci_x);
        assert!(spec.sci_y);
        assert_eq!(spec.legend.unwrap().title.as_deref(), Some("Species"));
        assert_eq!(spec.colors, vec!["#1f77b4", "#ff7f0e"]);
    }

    #[test]
    fn test_parse_plot_spec_trailing_pipe() {
        assert!(parse_plot_spec("bar(y: n) |").is_err());
    }

    #[test]
    fn test_parse_plot_spec_missing_geom() {
        assert!(parse_plot_spec(r#"labs(title: "x")"#).is_err());
        assert!(parse_plot_spec("").is_err());
    }

    #[test]
    fn test_parse_plot_spec_two_geoms() {
        assert!(parse_plot_spec("bar(y: n) | pie(labels: a, values: n)").is_err());
    }

    #[test]
    fn test_parse_pipeline_messages() {
        let err = parse_pipeline(r#"labs(title: "x")"#).unwrap_err();
        assert!(err.to_string().contains("exactly one chart command"));

        let err = parse_pipeline("bar(y: n) | bogus()").unwrap_err();
        assert!(err.to_string().contains("Parse error"));
    }
}
