use std::{fmt, io, path::PathBuf};

use thiserror::Error;

// basic error type enum to pattern match on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DirectoryExists,
    PermissionDenied,
    IoFailure,
    SubprocessFailure,
    InvalidBundle,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorKind::DirectoryExists => "DirectoryExists",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailure => "IoFailure",
            ErrorKind::SubprocessFailure => "SubprocessFailure",
            ErrorKind::InvalidBundle => "InvalidBundle",
            ErrorKind::Config => "Config",
        };

        write!(f, "{}", message)
    }
}

/// Everything that can stop a run of gotemplate.
///
/// File system variants carry the phase they happened in, the rendered
/// message always starts with that phase.
#[derive(Error, Debug)]
pub enum GoTemplateError {
    #[error("{phase}: {} already exists", path.display())]
    DirectoryExists { phase: String, path: PathBuf },

    #[error("{phase}: permission denied -- {}", path.display())]
    PermissionDenied {
        phase: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{phase}: {source}")]
    Io {
        phase: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with {}", exit_code_string(*code))]
    Subprocess { command: String, code: Option<i32> },

    #[error("bad template bundle path -- {0}")]
    InvalidBundlePath(String),

    #[error("cant read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad config: {0}")]
    ConfigParse(String),
}

fn exit_code_string(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => String::from("no exit status"),
    }
}

impl GoTemplateError {
    /// sort an io error in to the right variant for the phase it happened in
    pub fn from_io<S, P>(phase: S, path: P, source: io::Error) -> Self
    where
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let phase = phase.into();
        let path = path.into();

        match source.kind() {
            io::ErrorKind::AlreadyExists => {
                GoTemplateError::DirectoryExists { phase, path }
            }
            io::ErrorKind::PermissionDenied => {
                GoTemplateError::PermissionDenied {
                    phase,
                    path,
                    source,
                }
            }
            _ => GoTemplateError::Io {
                phase,
                path,
                source,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GoTemplateError::DirectoryExists { .. } => {
                ErrorKind::DirectoryExists
            }
            GoTemplateError::PermissionDenied { .. } => {
                ErrorKind::PermissionDenied
            }
            GoTemplateError::Io { .. } => ErrorKind::IoFailure,
            GoTemplateError::Subprocess { .. } => {
                ErrorKind::SubprocessFailure
            }
            GoTemplateError::InvalidBundlePath(_) => ErrorKind::InvalidBundle,
            GoTemplateError::ConfigRead { .. }
            | GoTemplateError::ConfigParse(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, GoTemplateError>;
