use crate::{
    response,
    result::{Result, SeedError},
    runner::StatementRunner,
    splitter,
};
use std::fs;
use std::path::Path;

const PREVIEW_LEN: usize = 100;

/// Read a SQL file, split it into statements and execute them in order.
/// Returns the number of statements executed.
pub fn seed_file(runner: &impl StatementRunner, path: &Path) -> Result<usize> {
    let sql_text = fs::read_to_string(path)?;
    let statements = splitter::split_sql_statements(&sql_text);
    println!("Split into {} statements.", statements.len());
    seed_statements(runner, &statements)?;
    Ok(statements.len())
}

/// Execute statements one by one with progress output, failing fast on the
/// first non-zero exit status. For seeding the exit code is the failure
/// signal; the client's stdout/stderr are echoed for diagnostics on failure.
pub fn seed_statements(runner: &impl StatementRunner, statements: &[String]) -> Result<()> {
    let total = statements.len();
    for (i, statement) in statements.iter().enumerate() {
        let index = i + 1;
        println!("[{index}/{total}] {}", preview(statement));
        let output = runner.run_statement(statement)?;
        if !output.success() {
            println!("---- client stdout ----");
            println!("{}", output.stdout.trim_end());
            eprintln!("---- client stderr ----");
            eprintln!("{}", output.stderr.trim_end());
            return Err(SeedError::StatementFailed {
                index,
                status: output.status,
            });
        }
    }
    println!("Executed {total} statements successfully.");
    Ok(())
}

/// Run smoke queries after seeding. A query fails on a non-zero exit status
/// or on a JSON response whose `errors` field is non-empty.
pub fn run_smoke_queries(runner: &impl StatementRunner, queries: &[String]) -> Result<()> {
    for (i, query) in queries.iter().enumerate() {
        let index = i + 1;
        println!("[smoke {index}] {query}");
        let output = runner.run_statement(query)?;

        // Echo both streams for visibility
        let stdout_text = output.stdout.trim();
        let stderr_text = output.stderr.trim();
        if !stdout_text.is_empty() {
            println!("{stdout_text}");
        }
        if !stderr_text.is_empty() {
            println!("{stderr_text}");
        }

        if !output.success() {
            return Err(SeedError::SmokeFailed {
                index,
                status: output.status,
            });
        }

        // fbcli has been seen writing the JSON response to either stream
        let payload = response::extract_payload(&output.stdout)
            .or_else(|| response::extract_payload(&output.stderr));
        if let Some(payload) = payload {
            if response::payload_has_errors(&payload) {
                let errors = serde_json::to_string_pretty(&payload)?;
                return Err(SeedError::SmokeErrors { index, errors });
            }
        }
    }
    if !queries.is_empty() {
        println!("All {} smoke queries passed.", queries.len());
    }
    Ok(())
}

/// One-line preview of a statement for progress output
fn preview(statement: &str) -> String {
    let flat = statement.replace('\n', " ");
    let short: String = flat.chars().take(PREVIEW_LEN).collect();
    if flat.chars().count() > PREVIEW_LEN {
        format!("{short}…")
    } else {
        short
    }
}
