use super::scanner::{Span, split_spans};
use crate::ir::{Mode, Pattern};
use regex::Captures;
use std::{borrow::Cow, collections::BTreeMap};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformContext {
    mode: Mode,
    public_path: String,
    definitions: BTreeMap<String, String>,
    pattern: Option<Pattern>,
}

impl TransformContext {
    pub fn new(
        mode: Mode,
        public_path: impl Into<String>,
        definitions: BTreeMap<String, String>,
    ) -> Result<Self, regex::Error> {
        let pattern = if definitions.is_empty() {
            None
        } else {
            Some(Pattern::new(&definition_pattern(
                definitions.keys().map(String::as_str),
            ))?)
        };

        Ok(Self {
            mode,
            public_path: public_path.into(),
            definitions,
            pattern,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    pub fn definitions(&self) -> &BTreeMap<String, String> {
        &self.definitions
    }

    /// Replaces every compile-time constant in a script with its literal.
    /// Comments and strings are left untouched.
    pub fn replace_definitions<'a>(&self, source: &'a str) -> Cow<'a, str> {
        let Some(pattern) = &self.pattern else {
            return source.into();
        };
        let spans = split_spans(source);

        if !spans
            .iter()
            .any(|span| matches!(span, Span::Code(code) if pattern.regex().is_match(code)))
        {
            return source.into();
        }

        spans
            .into_iter()
            .map(|span| match span {
                Span::Code(code) => pattern.regex().replace_all(code, |captures: &Captures| {
                    self.definitions
                        .get(&captures[0])
                        .cloned()
                        .unwrap_or_else(|| captures[0].into())
                }),
                Span::Literal(literal) => literal.into(),
            })
            .collect::<String>()
            .into()
    }
}

fn definition_pattern<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut names = names.into_iter().collect::<Vec<_>>();
    // Longer names win over their own prefixes.
    names.sort_by(|one, other| other.len().cmp(&one.len()).then(one.cmp(other)));

    names
        .into_iter()
        .map(|name| {
            format!(
                "{}{}{}",
                if name.starts_with(is_word_character) {
                    "\\b"
                } else {
                    ""
                },
                regex::escape(name),
                if name.ends_with(is_word_character) {
                    "\\b"
                } else {
                    ""
                },
            )
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn is_word_character(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}
