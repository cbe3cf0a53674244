use crate::ports::outbound::{CommandInvocation, CommandOutput, PackageManagerRunner};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// PnpmCommandRunner adapter for running pnpm as a child process
///
/// The child gets no stdin and is killed if the future is dropped, which is
/// what happens when the timeout fires. A killed install may leave
/// `node_modules` or the lockfile partially updated.
pub struct PnpmCommandRunner;

impl PnpmCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PnpmCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageManagerRunner for PnpmCommandRunner {
    async fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutput> {
        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CatalogError::CommandSpawnError {
                command: invocation.display(),
                details: e.to_string(),
            })?;

        let output = tokio::time::timeout(invocation.timeout, child.wait_with_output())
            .await
            .map_err(|_| CatalogError::CommandTimeout {
                command: invocation.display(),
                timeout_secs: invocation.timeout.as_secs(),
            })?
            .map_err(|e| CatalogError::CommandSpawnError {
                command: invocation.display(),
                details: e.to_string(),
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
