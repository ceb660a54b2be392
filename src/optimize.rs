use crate::{emit::BuildOutput, ir::Compression};
use flate2::{Compression as Level, write::GzEncoder};
use std::io::{self, Write};

const COMPRESSED_EXTENSION: &str = ".gz";

pub fn compress(output: &mut BuildOutput, compression: &Compression) -> Result<usize, io::Error> {
    let files = output
        .files()
        .iter()
        .filter(|(name, content)| {
            !name.ends_with(COMPRESSED_EXTENSION)
                && compression.test().is_match(name)
                && content.len() as u64 > compression.threshold()
        })
        .map(|(name, content)| Ok((format!("{name}{COMPRESSED_EXTENSION}"), gzip(content)?)))
        .collect::<Result<Vec<_>, io::Error>>()?;
    let count = files.len();

    for (name, content) in files {
        output.insert(name, content);
    }

    Ok(count)
}

fn gzip(content: &[u8]) -> Result<Vec<u8>, io::Error> {
    let mut encoder = GzEncoder::new(vec![], Level::best());

    encoder.write_all(content)?;
    encoder.finish()
}
