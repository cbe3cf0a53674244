/// Process adapters for invoking the package manager
mod pnpm_runner;

pub use pnpm_runner::PnpmCommandRunner;
