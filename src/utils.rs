use {
    crate::{
        error::{Error, Result},
        pool::WorkerPool,
    },
    std::{net::IpAddr, path::Path},
    tokio::{
        fs::File,
        io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    },
    tracing::warn,
};

/// Reads one nameserver IP per line, skipping blanks and entries that aren't addresses.
pub async fn return_nameservers(file: &Path) -> Result<Vec<IpAddr>> {
    let buffer = tokio::fs::read_to_string(file)
        .await
        .map_err(|source| Error::ResolversFile {
            path: file.to_path_buf(),
            source,
        })?;

    let nameservers: Vec<IpAddr> = buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.parse() {
            Ok(ip) => Some(ip),
            Err(e) => {
                warn!("Skipping nameserver {line}: {e}");
                None
            }
        })
        .collect();

    if nameservers.is_empty() {
        return Err(Error::NoNameservers {
            path: file.to_path_buf(),
        });
    }
    Ok(nameservers)
}

pub async fn open_input(file: &Path) -> Result<BufReader<File>> {
    File::open(file)
        .await
        .map(BufReader::new)
        .map_err(|source| Error::InputFile {
            path: file.to_path_buf(),
            source,
        })
}

/// Feeds every trimmed, non-empty line of `reader` into the pool and returns how many
/// were submitted. Lines that aren't valid UTF-8 are decoded lossily and still processed.
/// A read error stops feeding; lines already queued still get processed.
pub async fn submit_lines<R>(reader: R, file: &Path, pool: &WorkerPool) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut segments = reader.split(b'\n');
    let mut submitted = 0;

    while let Some(segment) = segments
        .next_segment()
        .await
        .map_err(|source| Error::InputFile {
            path: file.to_path_buf(),
            source,
        })?
    {
        let line = String::from_utf8_lossy(&segment);
        let input = line.trim();
        if !input.is_empty() {
            pool.submit(input.to_owned()).await?;
            submitted += 1;
        }
    }

    Ok(submitted)
}
