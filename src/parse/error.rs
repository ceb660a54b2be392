use std::{
    error::Error,
    fmt::{self, Display},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(source: &str, error: nom::Err<nom::error::Error<&str>>) -> Self {
        Self {
            message: match error {
                nom::Err::Error(error) | nom::Err::Failure(error) => format!(
                    "invalid configuration syntax at line {}",
                    source[..source.len() - error.input.len()]
                        .matches('\n')
                        .count()
                        + 1
                ),
                nom::Err::Incomplete(_) => "unexpected end of configuration".into(),
            },
        }
    }
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", &self.message)
    }
}
