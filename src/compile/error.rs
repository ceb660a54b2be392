use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigurationError {
    DuplicateEntry(String),
    EmptyTransforms(String),
    EnvironmentVariableNotFound(String),
    InvalidRegex { name: String, message: String },
    InvalidValue { name: String, value: String },
    MissingEntry,
    OutputOverlapsSource { directory: PathBuf, source: PathBuf },
    RuleTestMissing(String),
    TransformNotFound { rule: String, transform: String },
    UnknownRuleVariable { rule: String, variable: String },
    UnknownVariable(String),
}

impl Error for ConfigurationError {}

impl Display for ConfigurationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::DuplicateEntry(name) => write!(formatter, "entry \"{name}\" defined twice"),
            Self::EmptyTransforms(rule) => {
                write!(formatter, "rule \"{rule}\" uses no transforms")
            }
            Self::EnvironmentVariableNotFound(name) => {
                write!(formatter, "environment variable \"{name}\" not defined")
            }
            Self::InvalidRegex { name, message } => {
                write!(formatter, "invalid regular expression in \"{name}\": {message}")
            }
            Self::InvalidValue { name, value } => {
                write!(formatter, "invalid value \"{value}\" for \"{name}\"")
            }
            Self::MissingEntry => write!(formatter, "no entry defined"),
            Self::OutputOverlapsSource { directory, source } => write!(
                formatter,
                "output directory {} contains source {}",
                directory.display(),
                source.display()
            ),
            Self::RuleTestMissing(rule) => write!(formatter, "rule \"{rule}\" has no test"),
            Self::TransformNotFound { rule, transform } => {
                write!(
                    formatter,
                    "transform \"{transform}\" used by rule \"{rule}\" not found"
                )
            }
            Self::UnknownRuleVariable { rule, variable } => {
                write!(
                    formatter,
                    "unknown variable \"{variable}\" in rule \"{rule}\""
                )
            }
            Self::UnknownVariable(name) => write!(formatter, "unknown variable \"{name}\""),
        }
    }
}
