// labs(): chart title and axis labels

use crate::parser::ast::Labels;
use crate::parser::lexer::{string_literal, ws};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::value,
    multi::separated_list0,
    sequence::{delimited, pair, terminated},
    IResult,
};

#[derive(Debug, Clone, Copy)]
enum LabelKey {
    Title,
    X,
    Y,
}

/// One `key: "text"` argument
fn label_arg(input: &str) -> IResult<&str, (LabelKey, String)> {
    pair(
        terminated(
            ws(alt((
                value(LabelKey::Title, tag("title")),
                value(LabelKey::X, tag("x")),
                value(LabelKey::Y, tag("y")),
            ))),
            char(':'),
        ),
        ws(string_literal),
    )(input)
}

/// Format: labs(title: "Iris", x: "Sepal length", y: "Sepal width")
pub fn parse_labs(input: &str) -> IResult<&str, Labels> {
    let (input, _) = ws(tag("labs"))(input)?;
    let (input, args) = delimited(
        ws(char('(')),
        separated_list0(ws(char(',')), label_arg),
        ws(char(')')),
    )(input)?;

    let labels = args
        .into_iter()
        .fold(Labels::default(), |mut labels, (key, text)| {
            match key {
                LabelKey::Title => labels.title = Some(text),
                LabelKey::X => labels.x = Some(text),
                LabelKey::Y => labels.y = Some(text),
            }
            labels
        });

    Ok((input, labels))
}
