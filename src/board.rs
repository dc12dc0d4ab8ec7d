use crate::types::Player;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight ray steps on the flattened board:
/// right, left, down, up, down-left, up-right, down-right, up-left.
pub const DIRECTIONS: [i32; 8] = [1, -1, 8, -8, 7, -7, 9, -9];

/// Occupancy of a single square. Legal destinations are kept in a
/// derived structure beside the grid, never written into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

/// One capturing line: placing on `destination` recolors every square
/// strictly between `origin` and `destination` along `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub origin: usize,
    pub destination: usize,
    pub step: i32,
}

/// Reversi board state as a flat row-major grid of 64 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates the initial board:
    /// d4=light, e4=dark, d5=dark, e5=light.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        cells[27] = Cell::Light;
        cells[28] = Cell::Dark;
        cells[35] = Cell::Dark;
        cells[36] = Cell::Light;
        Self { cells }
    }

    /// Builds a board from two disjoint occupancy masks.
    pub fn from_masks(dark: u64, light: u64) -> Self {
        debug_assert_eq!(dark & light, 0, "masks must not overlap");

        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (pos, cell) in cells.iter_mut().enumerate() {
            if dark & (1u64 << pos) != 0 {
                *cell = Cell::Dark;
            } else if light & (1u64 << pos) != 0 {
                *cell = Cell::Light;
            }
        }
        Self { cells }
    }

    pub fn cell(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Returns `(dark_count, light_count)` by a full recount.
    pub fn count(&self) -> (u8, u8) {
        let mut dark = 0;
        let mut light = 0;
        for cell in &self.cells {
            match cell {
                Cell::Dark => dark += 1,
                Cell::Light => light += 1,
                Cell::Empty => {}
            }
        }
        (dark, light)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=dark, 2=light.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = match self.cells[pos] {
                Cell::Empty => 0,
                Cell::Dark => 1,
                Cell::Light => 2,
            };
        }
        board
    }

    /// Scans all eight rays from every anchor of `player`'s color and
    /// returns every capturing line found. A destination reachable
    /// from several anchors yields one candidate per line; all are
    /// retained so a placement can flip every span.
    pub fn scan_moves(&self, player: Player) -> Vec<Move> {
        let me = player.cell();
        let opp = player.opponent().cell();
        let mut moves = Vec::new();

        for anchor in 0..NUM_SQUARES {
            if self.cells[anchor] != me {
                continue;
            }
            for step in DIRECTIONS {
                if let Some(mv) = self.scan_ray(anchor, step, opp) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// Walks one ray outward from `anchor`, clipped at `ray_end`. The
    /// immediately adjacent square must be the opponent's; the first
    /// non-opponent square after that decides: empty yields a
    /// candidate, own color or the board edge yields nothing.
    fn scan_ray(&self, anchor: usize, step: i32, opp: Cell) -> Option<Move> {
        let end = ray_end(anchor / BOARD_SIZE, anchor % BOARD_SIZE, step) as i32;
        if anchor as i32 == end {
            return None;
        }

        let mut pos = anchor as i32 + step;
        if self.cells[pos as usize] != opp {
            return None;
        }
        while pos != end && self.cells[pos as usize] == opp {
            pos += step;
        }

        if self.cells[pos as usize] == Cell::Empty {
            Some(Move {
                origin: anchor,
                destination: pos as usize,
                step,
            })
        } else {
            None
        }
    }

    /// Recolors the squares strictly between the candidate's origin
    /// and destination. The destination itself is set by the caller.
    pub(crate) fn flip_span(&mut self, mv: Move, color: Cell) {
        let mut pos = mv.origin as i32 + mv.step;
        while pos != mv.destination as i32 {
            self.cells[pos as usize] = color;
            pos += mv.step;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the last square reachable from `(row, col)` along `step`
/// without wrapping to another row or leaving the board. Returns the
/// starting index itself when there is no room in that direction.
pub fn ray_end(row: usize, col: usize, step: i32) -> usize {
    let (dr, dc) = step_offsets(step);
    let row_span = match dr {
        1 => BOARD_SIZE - 1 - row,
        -1 => row,
        _ => usize::MAX,
    };
    let col_span = match dc {
        1 => BOARD_SIZE - 1 - col,
        -1 => col,
        _ => usize::MAX,
    };
    let span = row_span.min(col_span) as i32;

    ((row * BOARD_SIZE + col) as i32 + span * step) as usize
}

fn step_offsets(step: i32) -> (i32, i32) {
    match step {
        1 => (0, 1),
        -1 => (0, -1),
        8 => (1, 0),
        -8 => (-1, 0),
        7 => (1, -1),
        -7 => (-1, 1),
        9 => (1, 1),
        -9 => (-1, -1),
        _ => unreachable!("not a ray step: {step}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    fn bit(pos: usize) -> u64 {
        1u64 << pos
    }

    /// Reference walk: step (dr, dc) from (row, col) while on board.
    fn naive_ray_end(row: usize, col: usize, step: i32) -> usize {
        let (dr, dc) = step_offsets(step);
        let (mut r, mut c) = (row as i32, col as i32);
        while (0..8).contains(&(r + dr)) && (0..8).contains(&(c + dc)) {
            r += dr;
            c += dc;
        }
        (r as usize) * BOARD_SIZE + c as usize
    }

    #[test]
    fn t01_ray_end_matches_naive_walk_for_all_squares_and_directions() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                for step in DIRECTIONS {
                    assert_eq!(
                        ray_end(row, col, step),
                        naive_ray_end(row, col, step),
                        "ray_end mismatch at ({row}, {col}) step {step}"
                    );
                }
            }
        }
    }

    #[test]
    fn initial_dark_moves_are_four_expected_squares() {
        let board = Board::new();

        let moves = board.scan_moves(Player::Dark);
        let mut destinations: Vec<usize> = moves.iter().map(|mv| mv.destination).collect();
        destinations.sort_unstable();

        // d3, c4, f5, e6
        assert_eq!(
            destinations,
            vec![idx(2, 3), idx(3, 2), idx(4, 5), idx(5, 4)]
        );
        // Each opening destination is reached through exactly one line.
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn scan_does_not_wrap_from_rightmost_column_to_next_row() {
        // Dark anchor on h3; without clipping, stepping +1 would cross
        // the opponent disc on a4 and land on the empty b4.
        let board = Board::from_masks(bit(idx(2, 7)), bit(idx(3, 0)));

        assert!(board.scan_moves(Player::Dark).is_empty());
    }

    #[test]
    fn scan_requires_at_least_one_crossed_opponent_disc() {
        // Lone dark disc: every open ray starts on an empty square.
        let board = Board::from_masks(bit(idx(0, 0)), 0);

        assert!(board.scan_moves(Player::Dark).is_empty());
    }

    #[test]
    fn scan_stops_at_own_color_without_candidate() {
        // a1 dark, b1 light, c1 dark: the rightward ray ends on own
        // color, and no other ray crosses an opponent disc.
        let board = Board::from_masks(bit(idx(0, 0)) | bit(idx(0, 2)), bit(idx(0, 1)));

        assert!(board.scan_moves(Player::Dark).is_empty());
    }

    #[test]
    fn scan_finds_no_candidate_when_opponent_run_reaches_the_edge() {
        // f1..h1 light with a dark anchor on e1: the run is still on
        // opponent discs when the ray hits the edge.
        let dark = bit(idx(0, 4));
        let light = bit(idx(0, 5)) | bit(idx(0, 6)) | bit(idx(0, 7));
        let board = Board::from_masks(dark, light);

        assert!(board.scan_moves(Player::Dark).is_empty());
    }

    #[test]
    fn one_destination_retains_a_candidate_per_flanking_line() {
        // Lights on b1 and b2, dark anchors on a1 and a3: the empty c1
        // is flanked horizontally from a1 and diagonally from a3.
        let dark = bit(idx(0, 0)) | bit(idx(2, 0));
        let light = bit(idx(0, 1)) | bit(idx(1, 1));
        let board = Board::from_masks(dark, light);

        let moves = board.scan_moves(Player::Dark);
        let mut to_c1: Vec<&Move> = moves
            .iter()
            .filter(|mv| mv.destination == idx(0, 2))
            .collect();
        to_c1.sort_by_key(|mv| mv.origin);

        assert_eq!(to_c1.len(), 2);
        assert_eq!((to_c1[0].origin, to_c1[0].step), (idx(0, 0), 1));
        assert_eq!((to_c1[1].origin, to_c1[1].step), (idx(2, 0), -7));
    }

    #[test]
    fn flip_span_recolors_strictly_between_origin_and_destination() {
        let dark = bit(idx(0, 0));
        let light = bit(idx(0, 1)) | bit(idx(0, 2));
        let mut board = Board::from_masks(dark, light);

        board.flip_span(
            Move {
                origin: idx(0, 0),
                destination: idx(0, 3),
                step: 1,
            },
            Cell::Dark,
        );

        assert_eq!(board.cell(idx(0, 0)), Cell::Dark);
        assert_eq!(board.cell(idx(0, 1)), Cell::Dark);
        assert_eq!(board.cell(idx(0, 2)), Cell::Dark);
        assert_eq!(board.cell(idx(0, 3)), Cell::Empty);
    }

    #[test]
    fn count_and_to_array_agree_with_masks() {
        let dark = bit(0) | bit(63);
        let light = bit(27) | bit(36) | bit(44);
        let board = Board::from_masks(dark, light);

        assert_eq!(board.count(), (2, 3));
        assert!(!board.is_full());

        let cells = board.to_array();
        assert_eq!(cells[0], 1);
        assert_eq!(cells[63], 1);
        assert_eq!(cells[27], 2);
        assert_eq!(cells[1], 0);
    }

    #[test]
    fn full_board_is_detected() {
        let dark = u64::MAX >> 32;
        let board = Board::from_masks(dark, !dark);

        assert!(board.is_full());
        assert_eq!(board.count(), (32, 32));
    }
}
