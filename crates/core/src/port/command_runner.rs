// Command Runner Port
// Abstraction for executing external pipeline tools

use crate::domain::{CommandResult, CommandSpec};
use thiserror::Error;

/// Execution errors
///
/// Every variant is logged at error severity by the adapter before it is
/// returned, so the pipeline's outer handler sees both a log trail and a
/// typed error.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The child ran but exited with a non-zero code.
    #[error("Step '{step_name}' failed with exit code {exit_code}")]
    ExecutionFailed {
        step_name: String,
        exit_code: i32,
        command: Vec<String>,
        stdout: String,
        stderr: String,
    },

    /// The executable named by the first token could not be located.
    #[error("Executable '{executable}' not found for step '{step_name}'")]
    ExecutableNotFound {
        step_name: String,
        executable: String,
    },

    /// Any other spawn or capture failure.
    #[error("Unexpected error during step '{step_name}': {message}")]
    Unexpected { step_name: String, message: String },
}

/// Command Runner trait
///
/// Implementations:
/// - ProcessCommandRunner: spawns an external process (infra-system)
/// - MockCommandRunner: canned behavior for tests (below)
pub trait CommandRunner: Send + Sync {
    /// Execute an external tool synchronously and wait for it to exit.
    ///
    /// Blocks the calling thread for the lifetime of the child. There is no
    /// timeout and no cancellation; the call returns only when the child
    /// terminates.
    ///
    /// # Errors
    /// - ExecutionError::ExecutionFailed if the child exits non-zero
    /// - ExecutionError::ExecutableNotFound if the executable cannot be located
    /// - ExecutionError::Unexpected for any other spawn/capture failure
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Succeed with the given stdout/stderr text
        Success { stdout: String, stderr: String },
        /// Fail with the given exit code
        FailExit(i32),
        /// Report the executable as missing
        NotFound,
    }

    /// Mock Command Runner for testing callers
    pub struct MockCommandRunner {
        behavior: Arc<Mutex<MockBehavior>>,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockCommandRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn new_success(stdout: impl Into<String>) -> Self {
            Self::new(MockBehavior::Success {
                stdout: stdout.into(),
                stderr: String::new(),
            })
        }

        pub fn new_fail(exit_code: i32) -> Self {
            Self::new(MockBehavior::FailExit(exit_code))
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    impl CommandRunner for MockCommandRunner {
        fn run(&self, spec: &CommandSpec) -> Result<CommandResult, ExecutionError> {
            *self.call_count.lock().unwrap() += 1;

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Success { stdout, stderr } => Ok(CommandResult {
                    exit_code: 0,
                    stdout,
                    stderr,
                }),
                MockBehavior::FailExit(exit_code) => Err(ExecutionError::ExecutionFailed {
                    step_name: spec.step_name().to_string(),
                    exit_code,
                    command: spec.tokens().to_vec(),
                    stdout: String::new(),
                    stderr: String::new(),
                }),
                MockBehavior::NotFound => Err(ExecutionError::ExecutableNotFound {
                    step_name: spec.step_name().to_string(),
                    executable: spec.executable().to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{MockBehavior, MockCommandRunner};
    use super::*;

    #[test]
    fn test_mock_success() {
        let runner = MockCommandRunner::new_success("aligned 12 structures\n");
        let spec = CommandSpec::new("align", ["siena"]).unwrap();

        let result = runner.run(&spec).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "aligned 12 structures\n");
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn test_mock_failure_carries_command() {
        let runner = MockCommandRunner::new_fail(2);
        let spec = CommandSpec::new("align", ["siena", "--bad-flag"]).unwrap();

        let err = runner.run(&spec).unwrap_err();
        match err {
            ExecutionError::ExecutionFailed {
                exit_code, command, ..
            } => {
                assert_eq!(exit_code, 2);
                assert_eq!(command, vec!["siena", "--bad-flag"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mock_not_found_names_executable() {
        let runner = MockCommandRunner::new(MockBehavior::NotFound);
        let spec = CommandSpec::new("align", ["siena"]).unwrap();

        let err = runner.run(&spec).unwrap_err();
        assert!(matches!(
            err,
            ExecutionError::ExecutableNotFound { ref executable, .. } if executable == "siena"
        ));
    }
}
