use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_until},
    character::complete::{
        alphanumeric1, anychar, char, multispace0, not_line_ending, one_of, satisfy,
    },
    combinator::{map, not, peek, recognize, value, verify},
    multi::{many0_count, many1_count},
    sequence::{delimited, preceded, terminated},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span<'a> {
    Code(&'a str),
    Literal(&'a str),
}

pub fn scan_references(source: &str) -> Vec<&str> {
    let mut input = source;
    let mut references = vec![];

    while let Ok((rest, reference)) = token(input) {
        references.extend(reference);

        if rest.len() == input.len() {
            break;
        }

        input = rest;
    }

    references
}

pub fn split_spans(source: &str) -> Vec<Span<'_>> {
    let mut input = source;
    let mut start = 0;
    let mut spans = vec![];

    while !input.is_empty() {
        let offset = source.len() - input.len();

        if let Ok((rest, literal)) = recognize(alt((comment, string))).parse(input) {
            if start < offset {
                spans.push(Span::Code(&source[start..offset]));
            }

            spans.push(Span::Literal(literal));
            start = source.len() - rest.len();
            input = rest;
        } else if let Ok((rest, _)) = alt((word, recognize(anychar))).parse(input) {
            input = rest;
        } else {
            break;
        }
    }

    if start < source.len() {
        spans.push(Span::Code(&source[start..]));
    }

    spans
}

fn token(input: &str) -> IResult<&str, Option<&str>> {
    alt((
        value(None, comment),
        map(reference, Some),
        value(None, string),
        value(None, word),
        value(None, anychar),
    ))
    .parse(input)
}

fn reference(input: &str) -> IResult<&str, &str> {
    alt((call("import"), call("require"), import, export)).parse(input)
}

fn call(name: &'static str) -> impl Fn(&str) -> IResult<&str, &str> {
    move |input| {
        delimited(
            (keyword(name), multispace0, char('('), multispace0),
            string_literal,
            (multispace0, char(')')),
        )
        .parse(input)
    }
}

fn import(input: &str) -> IResult<&str, &str> {
    preceded(
        (keyword("import"), multispace0),
        alt((
            string_literal,
            preceded(
                (clause, multispace0, keyword("from"), multispace0),
                string_literal,
            ),
        )),
    )
    .parse(input)
}

fn export(input: &str) -> IResult<&str, &str> {
    preceded(
        (
            keyword("export"),
            clause,
            multispace0,
            keyword("from"),
            multispace0,
        ),
        string_literal,
    )
    .parse(input)
}

fn clause(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many1_count(preceded(
            multispace0,
            alt((
                value((), one_of("{},*")),
                value((), verify(word, |word: &str| word != "from")),
            )),
        )),
    )
    .parse(input)
}

fn keyword(name: &'static str) -> impl Fn(&str) -> IResult<&str, ()> {
    move |input| value((), terminated(tag(name), peek(not(word_character)))).parse(input)
}

fn string_literal(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), is_not("\"\\\n"), char('"')),
        delimited(char('\''), is_not("'\\\n"), char('\'')),
    ))
    .parse(input)
}

fn string(input: &str) -> IResult<&str, ()> {
    alt((quoted('"'), quoted('\''), quoted('`'))).parse(input)
}

fn quoted(quote: char) -> impl Fn(&str) -> IResult<&str, ()> {
    move |input| {
        value(
            (),
            (
                char(quote),
                many0_count(alt((
                    value((), (char('\\'), anychar)),
                    value((), satisfy(|character| character != quote && character != '\\')),
                ))),
                char(quote),
            ),
        )
        .parse(input)
    }
}

fn comment(input: &str) -> IResult<&str, ()> {
    alt((
        value((), (tag("//"), not_line_ending)),
        value((), (tag("/*"), take_until("*/"), tag("*/"))),
    ))
    .parse(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    recognize(many1_count(word_character)).parse(input)
}

fn word_character(input: &str) -> IResult<&str, &str> {
    alt((alphanumeric1, tag("_"), tag("$"))).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scan_nothing() {
        assert_eq!(scan_references(""), Vec::<&str>::new());
        assert_eq!(scan_references("const x = 1;"), Vec::<&str>::new());
    }

    #[test]
    fn scan_imports() {
        assert_eq!(
            scan_references(
                r#"
import React from "react";
import { render } from 'react-dom';
import * as utilities from "./utilities";
import "./style.css";
import {
  a,
  b,
} from "./multiline";
"#
            ),
            [
                "react",
                "react-dom",
                "./utilities",
                "./style.css",
                "./multiline"
            ]
        );
    }

    #[test]
    fn scan_exports() {
        assert_eq!(
            scan_references(
                "export { a } from \"./a\";\nexport * from './b';\nexport const c = 1;"
            ),
            ["./a", "./b"]
        );
    }

    #[test]
    fn scan_calls() {
        assert_eq!(
            scan_references(
                "const a = require(\"./a\");\nconst b = await import( './b' );\nrequire(name);"
            ),
            ["./a", "./b"]
        );
    }

    #[test]
    fn keep_source_order() {
        assert_eq!(
            scan_references("require(\"./b\");\nimport a from \"./a\";\nrequire(\"./b\");"),
            ["./b", "./a", "./b"]
        );
    }

    #[test]
    fn skip_comments() {
        assert_eq!(
            scan_references(
                "// import a from \"./a\";\n/* require(\"./b\") */\nimport c from \"./c\";"
            ),
            ["./c"]
        );
    }

    #[test]
    fn skip_strings() {
        assert_eq!(
            scan_references(
                r#"const s = "require('./a')"; const t = `import b from "./b"`; require('./c');"#
            ),
            ["./c"]
        );
    }

    #[test]
    fn skip_escaped_quotes() {
        assert_eq!(
            scan_references(r#"const s = "\"require('./a')"; require("./b");"#),
            ["./b"]
        );
    }

    #[test]
    fn skip_identifiers_containing_keywords() {
        assert_eq!(
            scan_references("myrequire(\"./a\"); reimport(\"./b\"); import_(\"./c\");"),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn skip_import_meta() {
        assert_eq!(
            scan_references("const url = import.meta.url;\nconst from = 1;"),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn scan_clauses_with_from_in_names() {
        assert_eq!(
            scan_references(
                "import { fromEvent } from \"rxjs\"; import platform from './platform'; import { a as from2 } from \"./c\";"
            ),
            ["rxjs", "./platform", "./c"]
        );
        assert_eq!(
            scan_references("export { transform as fromJson } from \"./json\";"),
            ["./json"]
        );
        assert_eq!(
            scan_references("import fromage, { from_ } from \"./cheese\";"),
            ["./cheese"]
        );
    }

    #[test]
    fn skip_exports_without_from() {
        assert_eq!(
            scan_references("export { a, b };\nconst c = from(\"./c\");"),
            Vec::<&str>::new()
        );
    }

    #[test]
    fn split_comments_and_strings() {
        assert_eq!(
            split_spans("a(\"b\"); // c\nd;"),
            [
                Span::Code("a("),
                Span::Literal("\"b\""),
                Span::Code("); "),
                Span::Literal("// c"),
                Span::Code("\nd;"),
            ]
        );
        assert_eq!(split_spans("'a'"), [Span::Literal("'a'")]);
        assert_eq!(split_spans("a /* b"), [Span::Code("a /* b")]);
        assert_eq!(split_spans(""), Vec::<Span>::new());
    }

    #[test]
    fn scan_unterminated_comment() {
        assert_eq!(
            scan_references("require(\"./a\"); /* open"),
            ["./a"]
        );
    }
}
