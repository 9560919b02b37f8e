/// Quote- and comment-aware splitting of a SQL script into single statements
use once_cell::sync::Lazy;
use regex::Regex;

// Regex compiled once as a lazy static for performance
static BLOCK_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Scanner quote context. At most one quote kind is open at a time, which the
/// enum enforces structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Normal,
    InSingleQuote,
    InDoubleQuote,
}

/// Split a SQL script into individual trimmed statements.
///
/// A `;` delimits statements only outside quoted literals. Line comments
/// (`--` to end of line) are recognized outside quotes and contribute nothing
/// to the output. Block comments (`/* ... */`) are stripped from the whole
/// input before scanning; stripping runs before quote tracking, so a `/*`
/// sequence inside a string literal is stripped too — seed files processed by
/// this tool rely on that exact ordering, do not move it under quote tracking.
/// Doubled single quotes (`''`) inside a literal are preserved verbatim and
/// do not close the literal. Empty or whitespace-only segments are dropped.
/// A trailing statement without a terminating `;` is still emitted.
///
/// Purely lexical: never validates SQL, never fails. Unterminated quotes or
/// comments at end of input degrade into a final flush of whatever was
/// accumulated.
pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let stripped = BLOCK_COMMENT_REGEX.replace_all(sql, "");
    let text = stripped.replace("\r\n", "\n");

    let chars: Vec<char> = text.chars().collect();
    let mut statements = Vec::new();
    let mut buf = String::new();
    let mut state = QuoteState::Normal;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        // -- line comments, only outside quotes; consume through end of line
        if state == QuoteState::Normal && ch == '-' && chars.get(i + 1) == Some(&'-') {
            match chars[i..].iter().position(|&c| c == '\n') {
                Some(offset) => {
                    i += offset + 1;
                    continue;
                }
                // comment runs to end of input
                None => break,
            }
        }

        if ch == '\'' && state != QuoteState::InDoubleQuote {
            // doubled single quote is an escaped quote, not a toggle
            if chars.get(i + 1) == Some(&'\'') {
                buf.push_str("''");
                i += 2;
                continue;
            }
            state = match state {
                QuoteState::InSingleQuote => QuoteState::Normal,
                _ => QuoteState::InSingleQuote,
            };
            buf.push(ch);
            i += 1;
            continue;
        }

        if ch == '"' && state != QuoteState::InSingleQuote {
            state = match state {
                QuoteState::InDoubleQuote => QuoteState::Normal,
                _ => QuoteState::InDoubleQuote,
            };
            buf.push(ch);
            i += 1;
            continue;
        }

        if ch == ';' && state == QuoteState::Normal {
            flush_statement(&mut buf, &mut statements);
            i += 1;
            continue;
        }

        buf.push(ch);
        i += 1;
    }

    // trailing statement without a terminating `;`
    flush_statement(&mut buf, &mut statements);
    statements
}

fn flush_statement(buf: &mut String, statements: &mut Vec<String>) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
    buf.clear();
}
