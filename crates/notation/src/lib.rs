//! Free-form algebraic chess notation: normalization, parsing, and
//! equivalence matching against a puzzle's canonical answer.
//!
//! Everything here is pure and stateless. Normalization and parsing are
//! total — malformed input degrades to a descriptor that simply fails the
//! match instead of raising an error. Only PGN extraction can fail.

pub mod matcher;
pub mod pgn;
pub mod san;
pub mod token;

pub use matcher::matches;
pub use pgn::{first_move, ExtractError};
pub use san::{parse, CheckMark, ParsedMove, Piece};
pub use token::normalize;

/// Run the full pipeline: extract the puzzle's first solution move from
/// `pgn_text`, then decide whether `user_input` denotes the same move.
pub fn check_answer(pgn_text: &str, user_input: &str) -> Result<bool, ExtractError> {
    let answer_token = pgn::first_move(pgn_text)?;
    let answer = san::parse(&token::normalize(&answer_token));
    let candidate = san::parse(&token::normalize(user_input));
    Ok(matcher::matches(&answer, &candidate))
}
