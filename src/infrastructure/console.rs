use async_trait::async_trait;
use std::{fmt::Debug, io};
use tokio::io::{AsyncWriteExt, Stderr, Stdout, stderr, stdout};

#[async_trait]
pub trait Console: Debug {
    async fn write_stdout(&mut self, buffer: &[u8]) -> Result<(), io::Error>;
    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), io::Error>;
}

#[derive(Debug)]
pub struct OsConsole {
    stdout: Stdout,
    stderr: Stderr,
}

impl OsConsole {
    pub fn new() -> Self {
        Self {
            stdout: stdout(),
            stderr: stderr(),
        }
    }
}

#[async_trait]
impl Console for OsConsole {
    async fn write_stdout(&mut self, src: &[u8]) -> Result<(), io::Error> {
        self.stdout.write_all(src).await?;
        self.stdout.flush().await
    }

    async fn write_stderr(&mut self, src: &[u8]) -> Result<(), io::Error> {
        self.stderr.write_all(src).await?;
        self.stderr.flush().await
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct NullConsole;

#[cfg(test)]
#[async_trait]
impl Console for NullConsole {
    async fn write_stdout(&mut self, _: &[u8]) -> Result<(), io::Error> {
        Ok(())
    }

    async fn write_stderr(&mut self, _: &[u8]) -> Result<(), io::Error> {
        Ok(())
    }
}
