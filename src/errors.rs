//! Error handling for snapshot acceptance.
//!
//! Every failure the crate can produce is a filesystem failure: either the
//! directory walk broke, or a single rename did. Keep-going runs fold the
//! individual failures into one `Partial` report so the CLI can render them
//! together through miette.

use std::{
    io,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum AcceptError {
    #[error("failed to walk directory '{}'", .path.display())]
    #[diagnostic(
        code(accept::walk),
        help("check that the directory exists and is readable")
    )]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to rename '{}' to '{}'", .from.display(), .to.display())]
    #[diagnostic(code(accept::rename))]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} failure(s) while accepting snapshots ({accepted} accepted)", .failures.len())]
    #[diagnostic(
        code(accept::partial),
        help("fix the failures listed below and run again; accepted files stay accepted")
    )]
    Partial {
        accepted: usize,
        #[related]
        failures: Vec<AcceptError>,
    },
}

impl AcceptError {
    /// Builds a walk error, preferring the path walkdir reports over the root.
    pub fn walk(root: &Path, source: walkdir::Error) -> Self {
        let path = source.path().unwrap_or(root).to_path_buf();
        AcceptError::Walk { path, source }
    }

    /// Stable diagnostic code, used by tests and log lines.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Walk { .. } => "accept::walk",
            Self::Rename { .. } => "accept::rename",
            Self::Partial { .. } => "accept::partial",
        }
    }
}

/// Prints an AcceptError with full miette diagnostics.
pub fn print_error(error: AcceptError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_message_counts_failures() {
        let failure = AcceptError::Rename {
            from: PathBuf::from("a/Foo.received.txt"),
            to: PathBuf::from("a/Foo.verified.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = AcceptError::Partial {
            accepted: 3,
            failures: vec![failure],
        };
        assert_eq!(
            err.to_string(),
            "1 failure(s) while accepting snapshots (3 accepted)"
        );
        assert_eq!(err.code(), "accept::partial");
        assert_eq!(err.related().map(|r| r.count()), Some(1));
    }

    #[test]
    fn rename_message_names_both_paths() {
        let err = AcceptError::Rename {
            from: PathBuf::from("Foo.received.txt"),
            to: PathBuf::from("Foo.verified.txt"),
            source: io::Error::new(io::ErrorKind::Other, "busy"),
        };
        assert_eq!(
            err.to_string(),
            "failed to rename 'Foo.received.txt' to 'Foo.verified.txt'"
        );
    }
}
