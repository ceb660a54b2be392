use crate::ir::Mode;
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[clap(about = "Content-addressed module bundler for web front-ends", version)]
pub struct Arguments {
    #[clap(short, help = "Set a configuration file")]
    pub file: Option<String>,
    #[clap(short = 'C', help = "Set a working directory")]
    pub directory: Option<String>,
    #[clap(long, help = "Serve output in memory and rebuild it on file changes")]
    pub serve: bool,
    #[clap(long, help = "Set a build mode", env = "WEFT_MODE")]
    pub mode: Option<ModeArgument>,
    #[clap(long, help = "Set an output directory", env = "OUTPUT_DIR")]
    pub output: Option<String>,
    #[clap(long, help = "Set a development server port", env = "DEV_SERVER_PORT")]
    pub port: Option<u16>,
    #[clap(short, long, help = "Set a job limit")]
    pub job_limit: Option<usize>,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show no summary of output files")]
    pub quiet: bool,
    #[clap(long, help = "Show debug logs", env = "WEFT_DEBUG")]
    pub debug: bool,
    #[clap(long, help = "Show profile timings", env = "WEFT_PROFILE")]
    pub profile: bool,
}

#[derive(Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ModeArgument {
    Development,
    Production,
}

impl From<ModeArgument> for Mode {
    fn from(mode: ModeArgument) -> Self {
        match mode {
            ModeArgument::Development => Self::Development,
            ModeArgument::Production => Self::Production,
        }
    }
}
