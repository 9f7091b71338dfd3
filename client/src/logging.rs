use std::{fs::File, path::Path, sync::Mutex};

use tracing::Level;

use crate::error::ClientError;

/// stdout is taken up by the game itself, so events are only recorded when a log file is given.
pub fn init(log_file: Option<&Path>, verbose: bool) -> Result<(), ClientError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| ClientError::LogFile {
        path: path.to_owned(),
        source,
    })?;
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(ClientError::Subscriber)
}
