use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A single non-interactive external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Shell-like rendering for messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// PackageManagerRunner port for invoking the package manager
///
/// # Async Support
/// Implementations must be `Send + Sync` so promotions of different
/// dependencies can run concurrently.
#[async_trait]
pub trait PackageManagerRunner: Send + Sync {
    /// Runs the command to completion, with no stdin attached
    ///
    /// A non-zero exit is returned as a normal [`CommandOutput`].
    ///
    /// # Errors
    /// Returns an error if:
    /// - The program cannot be spawned (`CommandSpawnError`)
    /// - The command exceeds `invocation.timeout` (`CommandTimeout`)
    async fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutput>;
}
