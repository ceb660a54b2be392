mod alias;
mod configuration;
mod entry;
mod mode;
mod optimization;
mod output;
mod passthrough;
mod pattern;
mod resolution;
mod rule;
mod rule_set;
mod server;

pub use alias::*;
pub use configuration::*;
pub use entry::*;
pub use mode::*;
pub use optimization::*;
pub use output::*;
pub use passthrough::*;
pub use pattern::*;
pub use resolution::*;
pub use rule::*;
pub use rule_set::*;
pub use server::*;
