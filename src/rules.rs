use crate::board::{Board, Cell, DIRECTIONS, Position};

/// Returns the opponent stones captured by `player` placing at `pos`.
/// An empty result means the move is illegal.
pub fn flippable(board: &Board, pos: Position, player: Cell) -> Vec<Position> {
    if !player.is_stone() || board.get(pos) != Cell::Empty {
        return Vec::new();
    }

    let opp = player.opponent();
    let mut flips = Vec::new();

    for (dr, dc) in DIRECTIONS {
        let mut line = Vec::new();
        let mut cursor = pos.offset(dr, dc);

        while let Some(square) = cursor {
            if board.get(square) != opp {
                break;
            }
            line.push(square);
            cursor = square.offset(dr, dc);
        }

        let closed = cursor.is_some_and(|square| board.get(square) == player);
        if closed && !line.is_empty() {
            flips.extend(line);
        }
    }

    flips
}

pub fn is_legal(board: &Board, pos: Position, player: Cell) -> bool {
    !flippable(board, pos, player).is_empty()
}

/// Legal moves for `player` in row-major order.
pub fn legal_moves(board: &Board, player: Cell) -> Vec<Position> {
    board
        .squares()
        .filter(|&(pos, cell)| cell == Cell::Empty && is_legal(board, pos, player))
        .map(|(pos, _)| pos)
        .collect()
}

pub fn mobility(board: &Board, player: Cell) -> usize {
    legal_moves(board, player).len()
}

/// Places one stone and flips captured stones.
/// Returns flipped positions; an empty result leaves the board untouched.
pub fn apply(board: &mut Board, pos: Position, player: Cell) -> Vec<Position> {
    let flips = flippable(board, pos, player);
    if flips.is_empty() {
        return flips;
    }

    board.set(pos, player);
    for &square in &flips {
        board.set(square, player);
    }
    flips
}

/// Plays a hypothetical move on a copy of `board`.
/// Returns the resulting board and the number of flipped stones.
pub fn simulate(board: &Board, pos: Position, player: Cell) -> (Board, usize) {
    let mut next = *board;
    let flipped = apply(&mut next, pos, player).len();
    (next, flipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        assert_eq!(
            legal_moves(&board, Cell::Black),
            vec![at(2, 3), at(3, 2), at(4, 5), at(5, 4)]
        );
        for pos in legal_moves(&board, Cell::Black) {
            assert_eq!(flippable(&board, pos, Cell::Black).len(), 1);
        }
    }

    #[test]
    fn occupied_square_is_never_flippable() {
        let board = Board::new();

        for (pos, cell) in board.squares() {
            if cell.is_stone() {
                assert!(flippable(&board, pos, Cell::Black).is_empty());
                assert!(flippable(&board, pos, Cell::White).is_empty());
            }
        }
    }

    #[test]
    fn ray_running_off_board_captures_nothing() {
        let board = Board::from_rows(&[
            "WW......",
            ".WW.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        assert!(flippable(&board, at(0, 2), Cell::Black).is_empty());
        assert!(flippable(&board, at(1, 3), Cell::Black).is_empty());
    }

    #[test]
    fn adjacent_own_stone_is_a_zero_length_ray() {
        let board = Board::from_rows(&[
            "........",
            "........",
            "........",
            "...BW...",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        assert!(flippable(&board, at(3, 2), Cell::Black).is_empty());
        assert_eq!(flippable(&board, at(3, 5), Cell::Black), vec![at(3, 4)]);
    }

    #[test]
    fn captures_are_collected_along_every_closed_ray() {
        let board = Board::from_rows(&[
            "B..B..B.",
            ".W.W.W..",
            "..WWW...",
            "BWW.WWWB",
            "..WWW...",
            ".W.W.W..",
            "B..B..B.",
            "........",
        ])
        .unwrap();

        let mut flips = flippable(&board, at(3, 3), Cell::Black);
        flips.sort();

        assert_eq!(flips.len(), 17);
        assert!(flips.contains(&at(1, 1)));
        assert!(flips.contains(&at(3, 6)));
        assert!(flips.contains(&at(5, 5)));
    }

    #[test]
    fn apply_places_and_flips_and_illegal_apply_is_a_no_op() {
        let mut board = Board::new();

        let flips = apply(&mut board, at(2, 3), Cell::Black);

        assert_eq!(flips, vec![at(3, 3)]);
        assert_eq!(board.get(at(2, 3)), Cell::Black);
        assert_eq!(board.get(at(3, 3)), Cell::Black);
        assert_eq!(board.count().black, 4);
        assert_eq!(board.count().white, 1);

        let before = board;
        assert!(apply(&mut board, at(0, 0), Cell::White).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn simulate_leaves_source_board_untouched() {
        let board = Board::new();

        let (next, flipped) = simulate(&board, at(5, 4), Cell::Black);

        assert_eq!(flipped, 1);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(at(4, 4)), Cell::Black);
    }

    #[test]
    fn empty_player_has_no_moves() {
        assert!(legal_moves(&Board::new(), Cell::Empty).is_empty());
    }
}
