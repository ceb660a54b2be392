mod arguments;
mod ast;
mod build;
mod chunk;
mod compile;
mod context;
mod emit;
mod error;
mod graph;
mod hash;
mod infrastructure;
mod ir;
mod log;
mod optimize;
mod options;
mod parse;
mod serve;
mod transform;

use arguments::Arguments;
use clap::Parser;
use compile::{Overrides, compile};
use context::Context;
use error::ApplicationError;
use infrastructure::{OsConsole, OsFileSystem};
use ir::Mode;
use options::Options;
use parse::parse;
use std::{
    env::{current_dir, set_current_dir, vars},
    path::Path,
    process::exit,
    sync::Arc,
    time::Duration,
};
use tokio::time::sleep;
use transform::TransformRegistry;

const DEFAULT_CONFIGURATION_FILE: &str = "weft.conf";

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let context = Arc::new(Context::new(
        OsConsole::new(),
        OsFileSystem::new(),
        Options {
            debug: arguments.debug,
            job_limit: arguments.job_limit,
            profile: arguments.profile,
        },
    ));

    if let Err(error) = execute(&context, &arguments).await {
        let message = format!(
            "{}{}\n",
            arguments.log_prefix.as_deref().unwrap_or_default(),
            error
        );

        if context
            .console()
            .lock()
            .await
            .write_stderr(message.as_bytes())
            .await
            .is_err()
        {
            eprint!("{}", message);
        }

        // Delay for the error message to be written completely hopefully.
        sleep(Duration::from_millis(1)).await;

        exit(1)
    }
}

async fn execute(context: &Arc<Context>, arguments: &Arguments) -> Result<(), ApplicationError> {
    if let Some(directory) = &arguments.directory {
        set_current_dir(directory)?;
    }

    let path = context
        .file_system()
        .canonicalize_path(Path::new(
            arguments
                .file
                .as_deref()
                .unwrap_or(DEFAULT_CONFIGURATION_FILE),
        ))
        .await
        .map_err(|error| ApplicationError::Other(error.to_string()))?;
    let source = String::from_utf8(
        context
            .file_system()
            .read_file(&path)
            .await
            .map_err(|error| ApplicationError::Other(error.to_string()))?,
    )
    .map_err(|_| {
        ApplicationError::Other(format!("{} is not valid UTF-8", path.display()))
    })?;
    let root_directory = path.parent().unwrap_or(Path::new("/"));
    let registry = Arc::new(TransformRegistry::default());

    let configuration = Arc::new(compile(
        &parse(&source)?,
        root_directory,
        &vars().collect(),
        &Overrides {
            mode: arguments
                .mode
                .map(Mode::from)
                .or(arguments.serve.then_some(Mode::Development)),
            output: arguments
                .output
                .as_ref()
                .map(|directory| current_dir().map(|current| current.join(directory)))
                .transpose()?,
            port: arguments.port,
        },
        &registry,
    )?);

    debug!(
        context,
        "compiled {} entries and {} rules from {}",
        configuration.entries().len(),
        configuration.rules().rules().len(),
        path.display()
    );

    if arguments.serve {
        serve::serve(context, &configuration, &registry).await?;
    } else {
        let output = build::run(context, &configuration, &registry).await?;

        if !arguments.quiet {
            for (name, content) in output.files() {
                log!(context, "{} ({} bytes)", name, content.len());
            }
        }
    }

    Ok(())
}
