//! End-to-end tests of the notation pipeline: PGN extraction through
//! normalization, parsing, and matching.

use chess_notation::{check_answer, first_move, matches, normalize, parse, CheckMark, Piece};

#[test]
fn test_puzzle_scenario_pawn_opening() {
    let pgn = "[Event \"Puzzle\"]\n\n1.e4 e5 2.Nf3";

    let answer_token = first_move(pgn).unwrap();
    assert_eq!(answer_token, "1.e4");

    let normalized = normalize(&answer_token);
    assert_eq!(normalized, "Pe4");

    let answer = parse(&normalized);
    assert_eq!(answer.piece, Some(Piece::Pawn));
    assert_eq!(answer.destination, "e4");
    assert!(!answer.captured);
    assert_eq!(answer.check_mark, None);

    // The user types the conventional short form.
    let candidate = parse(&normalize("e4"));
    assert_eq!(candidate, answer);
    assert!(matches(&answer, &candidate));
}

#[test]
fn test_puzzle_scenario_checkmate_with_details_omitted() {
    let pgn = "[Event \"Puzzle\"]\n[FEN \"...\"]\n\n23.Qxh7# 1-0";

    assert_eq!(check_answer(pgn, "Qh7"), Ok(true));
    assert_eq!(check_answer(pgn, "Qxh7#"), Ok(true));
    assert_eq!(check_answer(pgn, "Qh7+"), Ok(false));
    assert_eq!(check_answer(pgn, "Kh7"), Ok(false));
}

#[test]
fn test_puzzle_scenario_black_ellipsis_answer() {
    let pgn = "[Event \"Puzzle\"]\n\n14...Nbd7 15.O-O";

    let answer = parse(&normalize(&first_move(pgn).unwrap()));
    assert_eq!(answer.piece, Some(Piece::Knight));
    assert_eq!(answer.destination, "d7");
    assert_eq!(answer.origin, Some('b'));

    assert_eq!(check_answer(pgn, "Nd7"), Ok(true));
    assert_eq!(check_answer(pgn, "Nfd7"), Ok(false));
}

#[test]
fn test_user_input_with_stray_move_number() {
    let pgn = "[Event \"Puzzle\"]\n\n1.Nf3 d5";
    // Users sometimes echo the move number back.
    assert_eq!(check_answer(pgn, "1.Nf3"), Ok(true));
    assert_eq!(check_answer(pgn, " Nf3 "), Ok(true));
}

#[test]
fn test_check_mark_parsing_through_pipeline() {
    let mv = parse(&normalize("4.Qh5+"));
    assert_eq!(mv.piece, Some(Piece::Queen));
    assert_eq!(mv.check_mark, Some(CheckMark::Check));

    let mv = parse(&normalize("Qh5#"));
    assert_eq!(mv.check_mark, Some(CheckMark::Checkmate));
}

#[test]
fn test_malformed_pgn_is_an_extraction_error() {
    assert!(check_answer("[Event \"Puzzle\"] 1.e4", "e4").is_err());
    assert!(check_answer("", "e4").is_err());
}

#[test]
fn test_garbage_input_is_just_incorrect() {
    let pgn = "[Event \"Puzzle\"]\n\n1.e4 e5";
    assert_eq!(check_answer(pgn, "hello there"), Ok(false));
    assert_eq!(check_answer(pgn, ""), Ok(false));
    assert_eq!(check_answer(pgn, "!!"), Ok(false));
}
