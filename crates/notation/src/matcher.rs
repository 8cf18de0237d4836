//! Equivalence of a user's parsed move against the canonical answer.

use crate::san::ParsedMove;

/// Partial-specificity equivalence: piece and destination must agree, and
/// any optional detail the candidate *does* carry (capture marker, check
/// mark, origin disambiguator) must agree with the answer. Details the
/// candidate omits are tolerated.
///
/// The asymmetry is deliberate: users are not forced to type full
/// disambiguating notation, but extra detail they volunteer has to be
/// consistent with the true answer.
pub fn matches(answer: &ParsedMove, candidate: &ParsedMove) -> bool {
    if candidate.piece != answer.piece || candidate.destination != answer.destination {
        return false;
    }
    if candidate.captured && !answer.captured {
        return false;
    }
    if candidate.check_mark.is_some() && candidate.check_mark != answer.check_mark {
        return false;
    }
    if candidate.origin.is_some() && candidate.origin != answer.origin {
        return false;
    }
    true
}
