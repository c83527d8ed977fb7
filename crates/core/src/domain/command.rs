// Command Domain Model
// One external tool invocation: tokens, step label, optional working directory

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{DomainError, Result};

/// One external tool invocation, built by the caller per pipeline step.
///
/// The first token names the executable, the rest are its arguments. The
/// step name is a human-readable label used only for diagnostics. The
/// working directory is optional; adapters fall back to the process current
/// directory when it is not set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    tokens: Vec<String>,
    step_name: String,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a command spec from a step label and an ordered token list.
    ///
    /// # Errors
    /// - DomainError::EmptyCommand if the token list is empty
    /// - DomainError::EmptyStepName if the label is empty
    pub fn new<I, S>(step_name: impl Into<String>, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let step_name = step_name.into();
        if step_name.trim().is_empty() {
            return Err(DomainError::EmptyStepName);
        }
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(DomainError::EmptyCommand);
        }
        Ok(Self {
            tokens,
            step_name,
            cwd: None,
        })
    }

    /// Set the working directory the command runs in.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Append an argument token.
    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Append a path argument, coerced to its textual form.
    pub fn arg_path(mut self, path: impl AsRef<Path>) -> Self {
        self.tokens.push(path.as_ref().display().to_string());
        self
    }

    pub fn step_name(&self) -> &str {
        &self.step_name
    }

    /// The executable token (first element of the command line).
    pub fn executable(&self) -> &str {
        &self.tokens[0]
    }

    /// Argument tokens following the executable.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Full command line joined with spaces, for diagnostics only.
    pub fn command_line(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Outcome of a completed external tool invocation.
///
/// Only produced for children that exited with code 0; failures are
/// reported through ExecutionError instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_construction() {
        let spec = CommandSpec::new("align", ["siena", "--query", "site.pdb"]).unwrap();
        assert_eq!(spec.step_name(), "align");
        assert_eq!(spec.executable(), "siena");
        assert_eq!(spec.args(), &["--query", "site.pdb"]);
        assert_eq!(spec.command_line(), "siena --query site.pdb");
        assert!(spec.cwd().is_none());
    }

    #[test]
    fn test_empty_tokens_rejected() {
        let result = CommandSpec::new("align", Vec::<String>::new());
        assert!(matches!(result, Err(DomainError::EmptyCommand)));
    }

    #[test]
    fn test_empty_step_name_rejected() {
        let result = CommandSpec::new("  ", ["siena"]);
        assert!(matches!(result, Err(DomainError::EmptyStepName)));
    }

    #[test]
    fn test_path_arguments_coerced() {
        let spec = CommandSpec::new("align", ["siena"])
            .unwrap()
            .arg("--out")
            .arg_path(Path::new("results/ensemble"));
        assert_eq!(spec.args(), &["--out", "results/ensemble"]);
    }

    #[test]
    fn test_with_cwd() {
        let spec = CommandSpec::new("align", ["siena"])
            .unwrap()
            .with_cwd("/tmp/work");
        assert_eq!(spec.cwd(), Some(Path::new("/tmp/work")));
    }
}
