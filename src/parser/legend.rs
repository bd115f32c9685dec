// Legend and color commands

use nom::{
    bytes::complete::tag,
    character::complete::char,
    multi::{separated_list0, separated_list1},
    branch::alt,
    combinator::map,
    sequence::preceded,
    IResult,
};
use crate::parser::ast::LegendArgs;
use crate::parser::lexer::{bool_literal, string_literal, ws};

/// Format: legend(show: true, position: "right", title: "Species")
pub fn parse_legend(input: &str) -> IResult<&str, LegendArgs> {
    let (input, _) = ws(tag("legend"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("show:")), ws(bool_literal)), |b| ("show", Some(b), None::<String>)),
            map(preceded(ws(tag("position:")), ws(string_literal)), |s| ("position", None::<bool>, Some(s))),
            map(preceded(ws(tag("title:")), ws(string_literal)), |s| ("title", None, Some(s))),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut legend = LegendArgs::default();
    for (key, flag, text) in args {
        match key {
            "show" => legend.show = flag,
            "position" => legend.position = text,
            "title" => legend.title = text,
            _ => {}
        }
    }

    Ok((input, legend))
}

/// Format: colors("#1f77b4", "#ff7f0e")
pub fn parse_colors(input: &str) -> IResult<&str, Vec<String>> {
    let (input, _) = ws(tag("colors"))(input)?;
    let (input, _) = ws(char('('))(input)?;
    let (input, colors) = separated_list1(ws(char(',')), ws(string_literal))(input)?;
    let (input, _) = ws(char(')'))(input)?;
    Ok((input, colors))
}
