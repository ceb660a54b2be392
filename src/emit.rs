mod bundle;
mod document;
mod error;
mod output;
mod writer;

pub use self::{
    bundle::emit,
    document::{DOCUMENT_NAME, render_document},
    error::EmitError,
    output::BuildOutput,
    writer::write_output,
};
