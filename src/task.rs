//! Runs the actions of a stale step.  Unaware of the build graph; just
//! command execution, one action at a time.

use crate::error::BuildError;
use crate::graph::{Action, Step};
use crate::progress::Console;
use std::os::unix::process::ExitStatusExt;

/// Run a step's actions in order, stopping at the first failure.  Each
/// action is echoed to the console before it runs.
pub fn execute(step: &Step, console: &Console) -> Result<(), BuildError> {
    for action in &step.actions {
        match action {
            Action::Callback(f) => {
                console.callback();
                f();
            }
            Action::Process(argv) => {
                console.command(&argv.join(" "));
                run_command(&step.output, argv, console)?;
            }
        }
    }
    Ok(())
}

/// Spawn one subprocess and block until it exits.
fn run_command(output: &str, argv: &[String], console: &Console) -> Result<(), BuildError> {
    let (prog, args) = match argv.split_first() {
        Some(parts) => parts,
        None => return Err(BuildError::EmptyCommand(output.to_owned())),
    };
    let command = argv.join(" ");
    let status = std::process::Command::new(prog)
        .args(args)
        .status()
        .map_err(|source| BuildError::Spawn {
            command: command.clone(),
            source,
        })?;
    if status.success() {
        return Ok(());
    }

    let code = match status.code() {
        Some(code) => code,
        None => {
            // Killed by a signal; fold into the shell's 128+n convention.
            let sig = status.signal().unwrap_or(0);
            if sig == libc::SIGINT {
                console.error("interrupted");
            }
            128 + sig
        }
    };
    Err(BuildError::CommandFailed { command, code })
}
