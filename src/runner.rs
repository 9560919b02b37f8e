use crate::result::Result;

/// Captured result of one client invocation: exit code plus separate
/// stdout/stderr text.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Exit code of the client process; `None` if it was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Trait for executing a single SQL statement against a database endpoint
pub trait StatementRunner {
    fn run_statement(&self, sql: &str) -> Result<RunOutput>;
}
