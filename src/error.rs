use crate::{
    build::BuildError, compile::ConfigurationError, emit::EmitError, parse::ParseError,
    serve::ServeError,
};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Build(BuildError),
    Configuration(ConfigurationError),
    Emit(EmitError),
    Other(String),
    Parse(ParseError),
    Serve(ServeError),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Build(error) => write!(formatter, "{}", error),
            Self::Configuration(error) => write!(formatter, "{}", error),
            Self::Emit(error) => write!(formatter, "{}", error),
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Parse(error) => write!(formatter, "{}", error),
            Self::Serve(error) => write!(formatter, "{}", error),
        }
    }
}

impl From<BuildError> for ApplicationError {
    fn from(error: BuildError) -> Self {
        match error {
            BuildError::Emit(error) => Self::Emit(error),
            error => Self::Build(error),
        }
    }
}

impl From<ConfigurationError> for ApplicationError {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error)
    }
}

impl From<EmitError> for ApplicationError {
    fn from(error: EmitError) -> Self {
        Self::Emit(error)
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<ParseError> for ApplicationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ServeError> for ApplicationError {
    fn from(error: ServeError) -> Self {
        match error {
            ServeError::Build(error) => error.into(),
            error => Self::Serve(error),
        }
    }
}
