mod error;
mod parser;

pub use self::error::ParseError;
use crate::ast::Module;

pub fn parse(source: &str) -> Result<Module<'_>, ParseError> {
    parser::module(source)
        .map(|(_, module)| module)
        .map_err(|error| ParseError::new(source, error))
}
