use super::{Alias, Define, Entry, Environment, Rule, VariableDefinition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement<'a> {
    Alias(Alias<'a>),
    Define(Define<'a>),
    Entry(Entry<'a>),
    Environment(Environment<'a>),
    Rule(Rule<'a>),
    VariableDefinition(VariableDefinition<'a>),
}

impl<'a> From<Alias<'a>> for Statement<'a> {
    fn from(alias: Alias<'a>) -> Self {
        Self::Alias(alias)
    }
}

impl<'a> From<Define<'a>> for Statement<'a> {
    fn from(define: Define<'a>) -> Self {
        Self::Define(define)
    }
}

impl<'a> From<Entry<'a>> for Statement<'a> {
    fn from(entry: Entry<'a>) -> Self {
        Self::Entry(entry)
    }
}

impl<'a> From<Environment<'a>> for Statement<'a> {
    fn from(environment: Environment<'a>) -> Self {
        Self::Environment(environment)
    }
}

impl<'a> From<Rule<'a>> for Statement<'a> {
    fn from(rule: Rule<'a>) -> Self {
        Self::Rule(rule)
    }
}

impl<'a> From<VariableDefinition<'a>> for Statement<'a> {
    fn from(definition: VariableDefinition<'a>) -> Self {
        Self::VariableDefinition(definition)
    }
}
