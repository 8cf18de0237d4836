//! Structured decoding of a normalized move token.

use serde::Serialize;

/// A chess piece, identified by its algebraic-notation letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Piece {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl Piece {
    pub fn from_letter(c: char) -> Option<Piece> {
        match c {
            'K' => Some(Piece::King),
            'Q' => Some(Piece::Queen),
            'B' => Some(Piece::Bishop),
            'N' => Some(Piece::Knight),
            'R' => Some(Piece::Rook),
            'P' => Some(Piece::Pawn),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Piece::King => 'K',
            Piece::Queen => 'Q',
            Piece::Bishop => 'B',
            Piece::Knight => 'N',
            Piece::Rook => 'R',
            Piece::Pawn => 'P',
        }
    }
}

/// Trailing check or checkmate annotation. Absence is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckMark {
    Check,
    Checkmate,
}

/// The structured decoding of a normalized move token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMove {
    /// Moved piece. `None` only for degenerate tokens whose first
    /// character is not a piece letter.
    pub piece: Option<Piece>,
    /// Target square, file then rank (e.g. `"f3"`).
    pub destination: String,
    /// Check/checkmate mark, taken from the token's final character only.
    pub check_mark: Option<CheckMark>,
    /// Whether the token carries the capture marker `x`.
    pub captured: bool,
    /// Single-character origin disambiguator (file or rank), present only
    /// in the 4-character simplest form (piece + origin + destination).
    pub origin: Option<char>,
}

/// Decompose a normalized token into a `ParsedMove`.
///
/// Total over any input. Tokens shorter than piece + destination produce
/// degenerate fields; the matcher judges those unequal to any real move.
pub fn parse(token: &str) -> ParsedMove {
    let piece = token.chars().next().and_then(Piece::from_letter);

    let check_stripped: String = token.chars().filter(|&c| !matches!(c, '+' | '#')).collect();
    let destination = last_two(&check_stripped);

    // Check marks only ever occur as the final character.
    let check_mark = match token.chars().last() {
        Some('#') => Some(CheckMark::Checkmate),
        Some('+') => Some(CheckMark::Check),
        _ => None,
    };

    let captured = token.contains('x');

    let simplest: String = token
        .chars()
        .filter(|&c| !matches!(c, 'x' | '+' | '#'))
        .collect();
    // Four characters means piece + disambiguator + destination.
    let origin = if simplest.chars().count() == 4 {
        simplest.chars().nth(1)
    } else {
        None
    };

    ParsedMove {
        piece,
        destination,
        check_mark,
        captured,
        origin,
    }
}

fn last_two(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let start = chars.len().saturating_sub(2);
    chars[start..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_knight_move() {
        let mv = parse("Nf3");
        assert_eq!(mv.piece, Some(Piece::Knight));
        assert_eq!(mv.destination, "f3");
        assert!(!mv.captured);
        assert_eq!(mv.check_mark, None);
        assert_eq!(mv.origin, None);
    }

    #[test]
    fn test_parse_pawn_capture_with_check() {
        let mv = parse("Pexd5+");
        assert_eq!(mv.piece, Some(Piece::Pawn));
        assert_eq!(mv.destination, "d5");
        assert!(mv.captured);
        assert_eq!(mv.check_mark, Some(CheckMark::Check));
    }

    #[test]
    fn test_parse_disambiguator() {
        let mv = parse("Nbd7");
        assert_eq!(mv.piece, Some(Piece::Knight));
        assert_eq!(mv.destination, "d7");
        assert_eq!(mv.origin, Some('b'));
    }

    #[test]
    fn test_parse_disambiguator_with_markers() {
        // Markers are removed before the 4-character length test.
        let mv = parse("Raxe1+");
        assert_eq!(mv.piece, Some(Piece::Rook));
        assert_eq!(mv.destination, "e1");
        assert!(mv.captured);
        assert_eq!(mv.check_mark, Some(CheckMark::Check));
        assert_eq!(mv.origin, Some('a'));
    }

    #[test]
    fn test_parse_checkmate() {
        let mv = parse("Qh5#");
        assert_eq!(mv.piece, Some(Piece::Queen));
        assert_eq!(mv.destination, "h5");
        assert_eq!(mv.check_mark, Some(CheckMark::Checkmate));
    }

    #[test]
    fn test_parse_is_total_on_degenerate_input() {
        let mv = parse("");
        assert_eq!(mv.piece, None);
        assert_eq!(mv.destination, "");
        assert!(!mv.captured);

        let mv = parse("e");
        assert_eq!(mv.piece, None);
        assert_eq!(mv.destination, "e");
    }

    #[test]
    fn test_piece_letter_round_trip() {
        for c in ['K', 'Q', 'B', 'N', 'R', 'P'] {
            assert_eq!(Piece::from_letter(c).map(|p| p.letter()), Some(c));
        }
        assert_eq!(Piece::from_letter('e'), None);
    }
}
