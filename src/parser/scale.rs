use nom::{
    bytes::complete::tag,
    character::complete::char,
    branch::alt,
    combinator::map,
    sequence::delimited,
    IResult,
};
use crate::parser::lexer::{number_literal, ws};

/// Axis-level command: limits or scientific tick notation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleCommand {
    XLim(f64, f64),
    YLim(f64, f64),
    SciX,
    SciY,
}

pub fn parse_scale_x_sci(input: &str) -> IResult<&str, ScaleCommand> {
    let (input, _) = ws(tag("scale_x_sci"))(input)?;
    let (input, _) = delimited(ws(char('(')), ws(tag("")), ws(char(')')))(input)?;
    Ok((input, ScaleCommand::SciX))
}

pub fn parse_scale_y_sci(input: &str) -> IResult<&str, ScaleCommand> {
    let (input, _) = ws(tag("scale_y_sci"))(input)?;
    let (input, _) = delimited(ws(char('(')), ws(tag("")), ws(char(')')))(input)?;
    Ok((input, ScaleCommand::SciY))
}

fn limits(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, _) = ws(char('('))(input)?;
    let (input, min) = ws(number_literal)(input)?;
    let (input, _) = ws(char(','))(input)?;
    let (input, max) = ws(number_literal)(input)?;
    let (input, _) = ws(char(')'))(input)?;
    Ok((input, (min, max)))
}

pub fn parse_xlim(input: &str) -> IResult<&str, ScaleCommand> {
    let (input, _) = ws(tag("xlim"))(input)?;
    map(limits, |(min, max)| ScaleCommand::XLim(min, max))(input)
}

pub fn parse_ylim(input: &str) -> IResult<&str, ScaleCommand> {
    let (input, _) = ws(tag("ylim"))(input)?;
    map(limits, |(min, max)| ScaleCommand::YLim(min, max))(input)
}

pub fn parse_scale_command(input: &str) -> IResult<&str, ScaleCommand> {
    alt((parse_scale_x_sci, parse_scale_y_sci, parse_xlim, parse_ylim))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limits() {
        assert_eq!(parse_scale_command("xlim(0, 10)"), Ok(("", ScaleCommand::XLim(0.0, 10.0))));
        assert_eq!(parse_scale_command("ylim( -2.5 , 1e3 )"), Ok(("", ScaleCommand::YLim(-2.5, 1000.0))));
    }

    #[test]
    fn test_parse_sci() {
        assert_eq!(parse_scale_command("scale_x_sci()"), Ok(("", ScaleCommand::SciX)));
        assert_eq!(parse_scale_command("scale_y_sci( )"), Ok(("", ScaleCommand::SciY)));
    }

    #[test]
    fn test_parse_limits_needs_two_values() {
        assert!(parse_scale_command("xlim(0)").is_err());
    }
}
