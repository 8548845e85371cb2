use once_cell::sync::Lazy;

use super::Position;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

/// On-board targets of a fixed set of jumps, per origin square index.
pub(crate) type JumpTable = [Vec<Position>; 64];

fn build_jump_table(deltas: &[(isize, isize)]) -> JumpTable {
    std::array::from_fn(|idx| {
        let from = Position::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

pub(crate) static KNIGHT_TARGETS: Lazy<JumpTable> = Lazy::new(|| build_jump_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<JumpTable> = Lazy::new(|| build_jump_table(&KING_DELTAS));
