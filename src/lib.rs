pub mod response;
pub mod result;
pub mod runner;
pub mod runner_docker;
pub mod seeder;
pub mod splitter;

// Re-export types for convenience
pub use response::{extract_payload, payload_has_errors};
pub use result::{Result, SeedError};
pub use runner::{RunOutput, StatementRunner};
pub use runner_docker::DockerClientRunner;
pub use splitter::split_sql_statements;

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
pub use serde_json::Value as JsonValue;
