use crate::marathon::{codec, ServiceMarathon};
use crate::{Config, EdgeLbError, Result};
use log::{info, warn};
use tokio::io::{self, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

// Reads, decodes and re-emits every selector. Returns how many were written.
pub async fn run<R, W>(config: &Config, stdin: &mut R, out: &mut W) -> Result<usize>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = read_input(config, stdin).await?;
    let selectors = codec::from_str_many(&input)?;
    info!("Read {} selector(s)", selectors.len());

    write_selectors(out, &selectors, config.pretty).await?;
    Ok(selectors.len())
}

pub async fn read_input<R>(config: &Config, stdin: &mut R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    match config.input_path() {
        Some(path) => {
            info!("Reading selectors from {}", path);
            tokio::fs::read_to_string(path).await.map_err(|e| {
                EdgeLbError::IOError(io::Error::new(e.kind(), format!("{}: {}", path, e)))
            })
        }
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

// One selector per line. Returns the number of selectors with no fields set.
pub async fn write_selectors<W>(
    out: &mut W,
    selectors: &[ServiceMarathon],
    pretty: bool,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut empty = 0;

    for (i, selector) in selectors.iter().enumerate() {
        if selector.is_empty() {
            warn!("Selector {} has no fields set", i);
            empty += 1;
        }

        let rendered = if pretty {
            codec::to_string_pretty(selector)?
        } else {
            codec::to_string(selector)?
        };

        out.write_all(rendered.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }

    out.flush().await?;
    Ok(empty)
}
