use crate::{
    result::Result,
    runner::{RunOutput, StatementRunner},
};
use std::process::Command;

/// Executes statements with `fbcli` inside a Docker container, one process
/// per statement. fbcli writes a URL header plus the JSON response to stderr.
pub struct DockerClientRunner {
    container: String,
}

impl DockerClientRunner {
    pub fn new(container: impl Into<String>) -> Self {
        DockerClientRunner {
            container: container.into(),
        }
    }
}

impl StatementRunner for DockerClientRunner {
    fn run_statement(&self, sql: &str) -> Result<RunOutput> {
        log::debug!("docker exec -i {} fbcli --command <{} bytes>", self.container, sql.len());
        let output = Command::new("docker")
            .args(["exec", "-i", &self.container, "fbcli", "--command", sql])
            .output()?;
        Ok(RunOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
