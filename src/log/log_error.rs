use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures inside the file sink.
///
/// These never reach the code that issued the log call; the sink reports them
/// on stderr and carries on with the next record.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Prints a sink failure to the fallback diagnostic channel.
pub(crate) fn report(err: &LogError) {
    eprintln!("zlog: {err}");
}
