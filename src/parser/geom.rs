// Geometry (geom) parser for the chart pipeline DSL

use super::ast::{BarGeom, Geom, PieGeom, ScatterGeom};
use super::lexer::{bool_literal, identifier, string_literal, ws};
use crate::request::SeriesType;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, not, peek, value},
    multi::separated_list0,
    sequence::{preceded, terminated},
    IResult,
};

#[derive(Debug, Clone)]
enum Arg {
    Column(&'static str, String),
    Flag(&'static str, bool),
    Text(&'static str, String),
}

/// Series-type keyword. Longer names are tried first so `area_spline` is not
/// read as `area`.
fn series_type(input: &str) -> IResult<&str, SeriesType> {
    terminated(
        alt((
            value(SeriesType::AreaSpline, tag("area_spline")),
            value(SeriesType::AreaStep, tag("area_step")),
            value(SeriesType::Area, tag("area")),
            value(SeriesType::Scatter, tag("scatter")),
            value(SeriesType::Spline, tag("spline")),
            value(SeriesType::Step, tag("step")),
            value(SeriesType::Line, tag("line")),
        )),
        peek(not(identifier)),
    )(input)
}

/// Parse a scatter-like geometry
/// Format: line(x: time, y: temp, group: site, points: false, zoom: true)
pub fn parse_scatter_like(input: &str) -> IResult<&str, Geom> {
    let (input, series_type) = ws(series_type)(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("x:")), ws(identifier)), |c| Arg::Column("x", c)),
            map(preceded(ws(tag("y:")), ws(identifier)), |c| Arg::Column("y", c)),
            map(preceded(ws(tag("group:")), ws(identifier)), |c| Arg::Column("group", c)),
            map(preceded(ws(tag("points:")), ws(bool_literal)), |b| Arg::Flag("points", b)),
            map(preceded(ws(tag("zoom:")), ws(bool_literal)), |b| Arg::Flag("zoom", b)),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut geom = ScatterGeom {
        series_type,
        ..Default::default()
    };
    for arg in args {
        match arg {
            Arg::Column("x", c) => geom.x = Some(c),
            Arg::Column("y", c) => geom.y = Some(c),
            Arg::Column("group", c) => geom.group = Some(c),
            Arg::Flag("points", b) => geom.points = Some(b),
            Arg::Flag("zoom", b) => geom.zoom = Some(b),
            _ => {}
        }
    }

    Ok((input, Geom::ScatterLike(geom)))
}

/// Parse a bar geometry
/// Format: bar(y: count) or bar(y: count, x: fruit)
pub fn parse_bar(input: &str) -> IResult<&str, Geom> {
    let (input, _) = ws(terminated(tag("bar"), peek(not(identifier))))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("x:")), ws(identifier)), |c| Arg::Column("x", c)),
            map(preceded(ws(tag("y:")), ws(identifier)), |c| Arg::Column("y", c)),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut geom = BarGeom::default();
    for arg in args {
        match arg {
            Arg::Column("x", c) => geom.x = Some(c),
            Arg::Column("y", c) => geom.y = Some(c),
            _ => {}
        }
    }

    Ok((input, Geom::Bar(geom)))
}

/// Parse a pie geometry
/// Format: pie(labels: fruit, values: count, format: "pct")
pub fn parse_pie(input: &str) -> IResult<&str, Geom> {
    let (input, _) = ws(terminated(tag("pie"), peek(not(identifier))))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("labels:")), ws(identifier)), |c| Arg::Column("labels", c)),
            map(preceded(ws(tag("values:")), ws(identifier)), |c| Arg::Column("values", c)),
            map(preceded(ws(tag("format:")), ws(string_literal)), |s| Arg::Text("format", s)),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut geom = PieGeom::default();
    for arg in args {
        match arg {
            Arg::Column("labels", c) => geom.labels = Some(c),
            Arg::Column("values", c) => geom.values = Some(c),
            Arg::Text("format", s) => geom.format = Some(s),
            _ => {}
        }
    }

    Ok((input, Geom::Pie(geom)))
}

/// Parse any geometry
pub fn parse_geom(input: &str) -> IResult<&str, Geom> {
    alt((parse_scatter_like, parse_bar, parse_pie))(input)
}
