use tracing::trace;

use crate::error::PrepareError;
use crate::row::Row;
use crate::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};

/// A validated statement, ready to run against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

/// Parses one line of input.
///
/// Returns `Ok(None)` for an empty line, which callers should skip silently.
pub fn prepare(input: &str) -> Result<Option<Statement>, PrepareError> {
    if input.is_empty() {
        return Ok(None);
    }

    let prepared = if input.starts_with("select") {
        Ok(Statement::Select)
    } else if input.starts_with("insert") {
        prepare_insert(input)
    } else {
        Err(PrepareError::UnrecognizedStatement(input.to_string()))
    };

    trace!(input, ?prepared, "statement prepared");
    prepared.map(Some)
}

// insert <id> <username> <email>
fn prepare_insert(input: &str) -> Result<Statement, PrepareError> {
    let mut tokens = input.split_whitespace().skip(1);
    let (Some(id), Some(username), Some(email)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(PrepareError::MalformedInsert(input.to_string()));
    };

    let id = parse_id(id).ok_or_else(|| PrepareError::MalformedInsert(input.to_string()))??;

    if username.len() > COLUMN_USERNAME_SIZE || email.len() > COLUMN_EMAIL_SIZE {
        return Err(PrepareError::FieldTooLong);
    }

    Ok(Statement::Insert(Row::new(id, username, email)))
}

// `None` when the token is not an integer that fits the column. A leading
// "-<digits>" is negative no matter what follows it.
fn parse_id(token: &str) -> Option<Result<u32, PrepareError>> {
    if let Some(rest) = token.strip_prefix('-') {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        if rest.bytes().take(digits).all(|b| b == b'0') {
            // "-0" is still zero.
            return (digits == rest.len()).then_some(Ok(0));
        }
        return Some(Err(PrepareError::NegativeId));
    }
    token.parse::<u32>().ok().map(Ok)
}
