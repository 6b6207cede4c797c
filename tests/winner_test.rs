//! Tests for winner evaluation over whole boards.

use time_travel_tictactoe::{Board, Mark, Position, Square, rules};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_top_row_x() {
    assert_eq!(rules::check_winner(&board("XXX OO. ...")), Some(Mark::X));
}

#[test]
fn test_full_board_without_line() {
    assert_eq!(rules::check_winner(&board("XOX OXO OXO")), None);
}

#[test]
fn test_no_line_means_no_winner() {
    // Boards where no triple is held by a single mark.
    let boards = [
        "...  ...  ...",
        "X..  ...  ...",
        "XO.  ...  ...",
        "XX.  OO.  ...",
        "X.O  .O.  X..",
        "XOX  ...  OXO",
    ];
    for b in boards {
        let b = board(b);
        let has_line = rules::LINES.iter().any(|line| {
            let first = b.get(line[0]);
            first != Square::Empty && line.iter().all(|p| b.get(*p) == first)
        });
        assert!(!has_line);
        assert_eq!(rules::check_winner(&b), None);
    }
}

#[test]
fn test_column_and_diagonal() {
    assert_eq!(rules::check_winner(&board(".O. XOX .O.")), Some(Mark::O));
    assert_eq!(rules::check_winner(&board("X.O .XO ..X")), Some(Mark::X));
}

#[test]
fn test_winning_line_reports_triple() {
    let (mark, line) = rules::winning_line(&board("O.. XO. XXO")).expect("winner");
    assert_eq!(mark, Mark::O);
    assert_eq!(line, [Position::TopLeft, Position::Center, Position::BottomRight]);
}

#[test]
fn test_is_full() {
    assert!(rules::is_full(&board("XOX OXO OXO")));
    assert!(!rules::is_full(&board("XOX OXO OX.")));
}
