//! First-move extraction from PGN movetext.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No blank header/movetext separator line, or nothing after it.
    #[error("no movetext section found in PGN")]
    MissingMovetext,
}

/// Locate the first played move in a PGN block: the movetext is the line
/// immediately after the first blank line, and the first whitespace-
/// delimited element of it is the first move token. The token still
/// carries its move-number prefix; callers normalize it afterwards.
pub fn first_move(pgn_text: &str) -> Result<String, ExtractError> {
    let lines: Vec<&str> = pgn_text.lines().collect();
    let separator = lines
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or(ExtractError::MissingMovetext)?;

    lines
        .get(separator + 1)
        .and_then(|movetext| movetext.split_whitespace().next())
        .map(str::to_string)
        .ok_or(ExtractError::MissingMovetext)
}
