//! Raw token normalization — strips presentation artifacts from a move
//! token as typed by a user or pulled out of PGN movetext.

/// Letters that identify a piece in algebraic notation, pawn included.
/// `P` is accepted so an already-explicit pawn token passes through
/// unchanged.
const PIECE_LETTERS: [char; 6] = ['K', 'Q', 'B', 'N', 'R', 'P'];

/// Normalize a raw move token:
///
/// 1. Trim surrounding whitespace.
/// 2. Drop any move-number prefix: everything up to and including the
///    *last* `.` in the token. Using the last dot handles both `"12.Ra5"`
///    and the ellipsis form `"12...Ra5"` used for the second player.
/// 3. If no piece letter is present, insert the pawn marker `P`
///    immediately before the two-character destination square.
///
/// Total over any input; a malformed token normalizes to a short/garbage
/// string that downstream parsing degrades on gracefully.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();

    let stripped = match trimmed.rfind('.') {
        Some(dot) => &trimmed[dot + 1..],
        None => trimmed,
    };

    if stripped.chars().any(|c| PIECE_LETTERS.contains(&c)) {
        return stripped.to_string();
    }

    // Implicit pawn move: insert the marker two characters before the end.
    let chars: Vec<char> = stripped.chars().collect();
    if chars.len() < 2 {
        return stripped.to_string();
    }
    let split = chars.len() - 2;
    let mut out = String::with_capacity(chars.len() + 1);
    out.extend(&chars[..split]);
    out.push('P');
    out.extend(&chars[split..]);
    out
}
