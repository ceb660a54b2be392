use crate::ast::{Alias, Define, Entry, Environment, Module, Rule, Statement, VariableDefinition};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, line_ending, none_of, space1},
    combinator::{all_consuming, eof, map, not, opt, peek, recognize, value},
    multi::{many0, many0_count, many1_count},
    sequence::preceded,
};

const NAME_TERMINATORS: &str = " \t\r\n=";

pub fn module(input: &str) -> IResult<&str, Module<'_>> {
    map(
        all_consuming((opt(line_break), many0(statement), blank)),
        |(_, statements, _)| Module::new(statements),
    )
    .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        map(alias, Statement::from),
        map(define, Statement::from),
        map(entry, Statement::from),
        map(environment, Statement::from),
        map(rule, Statement::from),
        map(variable_definition, Statement::from),
    ))
    .parse(input)
}

fn variable_definition(input: &str) -> IResult<&str, VariableDefinition<'_>> {
    map(
        (identifier, sign("="), opt(string_line), line_end),
        |(name, _, value, _)| VariableDefinition::new(name, value.unwrap_or_default()),
    )
    .parse(input)
}

fn entry(input: &str) -> IResult<&str, Entry<'_>> {
    map(
        (keyword("entry"), identifier, sign("="), string_line, line_end),
        |(_, name, _, path, _)| Entry::new(name, path),
    )
    .parse(input)
}

fn alias(input: &str) -> IResult<&str, Alias<'_>> {
    map(
        (keyword("alias"), name, sign("="), string_line, line_end),
        |(_, prefix, _, path, _)| Alias::new(prefix, path),
    )
    .parse(input)
}

fn define(input: &str) -> IResult<&str, Define<'_>> {
    map(
        (keyword("define"), name, sign("="), string_line, line_end),
        |(_, name, _, value, _)| Define::new(name, value),
    )
    .parse(input)
}

fn environment(input: &str) -> IResult<&str, Environment<'_>> {
    map(
        (
            keyword("env"),
            identifier,
            opt(preceded(sign("="), opt(string_line))),
            line_end,
        ),
        |(_, name, default, _)| Environment::new(name, default.map(Option::unwrap_or_default)),
    )
    .parse(input)
}

fn rule(input: &str) -> IResult<&str, Rule<'_>> {
    map(
        (
            keyword("rule"),
            identifier,
            line_end,
            many0(preceded(indent, variable_definition)),
        ),
        |(_, name, _, variable_definitions)| Rule::new(name, variable_definitions),
    )
    .parse(input)
}

fn string_line(input: &str) -> IResult<&str, &str> {
    map(recognize(many1_count(none_of("\n"))), str::trim).parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    token(recognize(many1_count(none_of(NAME_TERMINATORS)))).parse(input)
}

fn keyword(name: &'static str) -> impl Fn(&str) -> IResult<&str, ()> {
    move |input| value((), token((tag(name), peek(not(word_character))))).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    token(recognize((
        alt((alpha1, tag("_"))),
        many0_count(word_character),
    )))
    .parse(input)
}

fn word_character(input: &str) -> IResult<&str, &str> {
    alt((alphanumeric1, tag("_"))).parse(input)
}

fn sign(sign: &'static str) -> impl Fn(&str) -> IResult<&str, ()> {
    move |input| value((), token(tag(sign))).parse(input)
}

fn token<'a, O>(
    mut parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    move |input| {
        let (input, _) = blank(input)?;

        parser.parse(input)
    }
}

fn indent(input: &str) -> IResult<&str, ()> {
    value((), space1).parse(input)
}

fn blank(input: &str) -> IResult<&str, ()> {
    value((), many0_count(alt((value((), space1), comment)))).parse(input)
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), (tag("#"), many0_count(none_of("\n")))).parse(input)
}

fn line_end(input: &str) -> IResult<&str, ()> {
    alt((line_break, value((), eof))).parse(input)
}

fn line_break(input: &str) -> IResult<&str, ()> {
    value((), many1_count((blank, line_ending))).parse(input)
}
