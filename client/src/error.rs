use std::{error::Error, fmt::Display, io, path::PathBuf};

use tracing::subscriber::SetGlobalDefaultError;

#[derive(Debug)]
pub enum ClientError {
    Terminal(io::Error),
    LogFile { path: PathBuf, source: io::Error },
    Subscriber(SetGlobalDefaultError),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Terminal(err) => write!(f, "terminal error: {err}"),
            ClientError::LogFile { path, source } => {
                write!(f, "failed to create log file {}: {source}", path.display())
            }
            ClientError::Subscriber(err) => Display::fmt(err, f),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Terminal(err) => Some(err),
            ClientError::LogFile { source, .. } => Some(source),
            ClientError::Subscriber(err) => Some(err),
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Terminal(err)
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, io, path::PathBuf};

    use crate::error::ClientError;

    #[test]
    fn display() {
        let err = ClientError::from(io::Error::new(io::ErrorKind::Other, "not a tty"));
        assert_eq!(err.to_string(), "terminal error: not a tty");
        let err = ClientError::LogFile {
            path: PathBuf::from("/nope/cpong.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(
            err.to_string(),
            "failed to create log file /nope/cpong.log: no such directory"
        );
        assert!(err.source().is_some());
    }
}
