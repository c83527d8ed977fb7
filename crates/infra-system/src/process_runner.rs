// Process command runner
// Synchronous child execution with captured streams and uniform diagnostics

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use tracing::{debug, error, info};

use sienapipe_core::domain::{CommandResult, CommandSpec};
use sienapipe_core::port::{CommandRunner, ExecutionError};

/// Command runner backed by `std::process`.
///
/// Every external tool the pipeline shells out to goes through this adapter
/// so diagnostics are uniform: start/finish records at info, command line and
/// working directory at debug, captured streams echoed at debug on success
/// and at error on failure. Any failure is returned to the caller after
/// logging so the pipeline halts instead of continuing with missing output.
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn effective_cwd(spec: &CommandSpec) -> Result<PathBuf, ExecutionError> {
        match spec.cwd() {
            Some(dir) => Ok(dir.to_path_buf()),
            None => std::env::current_dir().map_err(|e| ExecutionError::Unexpected {
                step_name: spec.step_name().to_string(),
                message: format!("cannot resolve current directory: {e}"),
            }),
        }
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult, ExecutionError> {
        let step = spec.step_name();
        info!(step = %step, "Running step");
        debug!(command = %spec.command_line(), "Executing command");

        let cwd = Self::effective_cwd(spec)?;
        debug!(working_dir = %cwd.display(), "Working directory");

        let started = Instant::now();
        let output = Command::new(spec.executable())
            .args(spec.args())
            .current_dir(&cwd)
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!(
                    step = %step,
                    executable = %spec.executable(),
                    "Executable not found"
                );
                error!("Ensure the path to the executable is correct and it has execute permissions");
                return Err(ExecutionError::ExecutableNotFound {
                    step_name: step.to_string(),
                    executable: spec.executable().to_string(),
                });
            }
            Err(e) => {
                error!(step = %step, error = %e, "Unexpected error while running step");
                return Err(ExecutionError::Unexpected {
                    step_name: step.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            // code() is None when the child died from a signal
            let exit_code = output.status.code().unwrap_or(-1);
            error!(step = %step, exit_code = exit_code, "Step failed");
            error!(command = %spec.command_line(), "Command");
            if !stdout.trim().is_empty() {
                error!(stdout = %stdout.trim(), "Captured stdout");
            }
            if !stderr.trim().is_empty() {
                error!(stderr = %stderr.trim(), "Captured stderr");
            }
            return Err(ExecutionError::ExecutionFailed {
                step_name: step.to_string(),
                exit_code,
                command: spec.tokens().to_vec(),
                stdout,
                stderr,
            });
        }

        info!(
            step = %step,
            duration_ms = started.elapsed().as_millis() as u64,
            "Step completed successfully"
        );
        if !stdout.trim().is_empty() {
            debug!(step = %step, stdout = %stdout.trim(), "Step stdout");
        }
        if !stderr.trim().is_empty() {
            debug!(step = %step, stderr = %stderr.trim(), "Step stderr");
        }

        Ok(CommandResult {
            exit_code: 0,
            stdout,
            stderr,
        })
    }
}
