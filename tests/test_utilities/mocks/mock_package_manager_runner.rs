use async_trait::async_trait;
use pnpm_catalog::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type RunHook = Arc<dyn Fn(&CommandInvocation) + Send + Sync>;

/// Mock PackageManagerRunner that records invocations instead of running pnpm
#[derive(Clone)]
pub struct MockPackageManagerRunner {
    invocations: Arc<Mutex<Vec<CommandInvocation>>>,
    exit_code: Option<i32>,
    stderr: String,
    delay: Duration,
    spawn_failure: bool,
    on_success: Option<RunHook>,
    running: Arc<AtomicUsize>,
    max_running: Arc<AtomicUsize>,
}

impl MockPackageManagerRunner {
    /// A runner whose commands all exit with code 0
    pub fn succeeding() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            exit_code: Some(0),
            stderr: String::new(),
            delay: Duration::ZERO,
            spawn_failure: false,
            on_success: None,
            running: Arc::new(AtomicUsize::new(0)),
            max_running: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self {
            exit_code: Some(exit_code),
            stderr: stderr.to_string(),
            ..Self::succeeding()
        }
    }

    pub fn unspawnable() -> Self {
        Self {
            spawn_failure: true,
            ..Self::succeeding()
        }
    }

    /// Each run takes this long; longer than the invocation timeout means a timeout
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs after a successful command, e.g. to simulate pnpm editing manifests
    pub fn on_success(mut self, hook: impl Fn(&CommandInvocation) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(hook));
        self
    }

    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Highest number of commands that were running at the same time
    pub fn max_concurrent_runs(&self) -> usize {
        self.max_running.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PackageManagerRunner for MockPackageManagerRunner {
    async fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutput> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.spawn_failure {
            return Err(CatalogError::CommandSpawnError {
                command: invocation.display(),
                details: "No such file or directory (os error 2)".to_string(),
            }
            .into());
        }

        let now_running = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_running.fetch_max(now_running, Ordering::SeqCst);

        let timed_out = self.delay > invocation.timeout;
        tokio::time::sleep(self.delay.min(invocation.timeout)).await;
        self.running.fetch_sub(1, Ordering::SeqCst);

        if timed_out {
            return Err(CatalogError::CommandTimeout {
                command: invocation.display(),
                timeout_secs: invocation.timeout.as_secs(),
            }
            .into());
        }

        if self.exit_code == Some(0) {
            if let Some(hook) = &self.on_success {
                hook(invocation);
            }
        }

        Ok(CommandOutput {
            exit_code: self.exit_code,
            stdout: String::new(),
            stderr: self.stderr.clone(),
        })
    }
}
