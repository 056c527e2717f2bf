//! Fatal build failures, as a typed enum so the engine stays embeddable:
//! only the CLI driver turns one of these into a process exit code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// A build script registered two steps with the same output.
    #[error("duplicate step {0:?}")]
    DuplicateStep(String),

    /// A target has no registered step and no file on disk.
    #[error("missing rule to build {0:?}")]
    MissingRule(String),

    /// An action's subprocess exited non-zero (or died to a signal,
    /// folded to 128 + signo).
    #[error("step terminated with exit code {code}: {command}")]
    CommandFailed { command: String, code: i32 },

    /// An action's subprocess could not be started at all.
    #[error("spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// A Process action with an empty argument vector.
    #[error("step for {0:?} has an empty command line")]
    EmptyCommand(String),

    /// stat() failed for a reason other than the file being absent.
    #[error("stat {path}: {source}")]
    Stat {
        path: String,
        source: std::io::Error,
    },
}
