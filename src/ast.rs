mod alias;
mod define;
mod entry;
mod environment;
mod module;
mod rule;
mod statement;
mod variable_definition;

pub use alias::*;
pub use define::*;
pub use entry::*;
pub use environment::*;
pub use module::*;
pub use rule::*;
pub use statement::*;
pub use variable_definition::*;
