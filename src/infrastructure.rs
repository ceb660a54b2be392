mod console;
mod file_system;

pub use console::*;
pub use file_system::*;
