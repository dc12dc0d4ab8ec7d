use std::cmp::Ordering;

use crate::board::{Board, Move, NUM_SQUARES};
use crate::types::{GameResult, GameState, Player};

/// Position sentinel for a forced pass: no disc is placed but the
/// turn still advances.
pub const PASS: i32 = -1;

/// One Reversi game: board, side to move, scores, and the derived
/// legal-move cache for the side to move.
///
/// All operations are total. Invalid input leaves the state untouched
/// and signals nothing; the hosting layer is expected to offer only
/// legal destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Option<Player>,
    dark_score: u8,
    light_score: u8,
    candidates: Vec<Move>,
    legal: u64,
    is_game_over: bool,
    is_pass: bool,
    winner: Option<String>,
}

impl Game {
    /// Starts a game at the canonical opening: four center discs,
    /// dark to move, scores 2-2, initial legal moves computed.
    pub fn new() -> Self {
        let board = Board::new();
        let candidates = board.scan_moves(Player::Dark);
        let legal = destination_mask(&candidates);
        let (dark_score, light_score) = board.count();

        Self {
            board,
            current_player: Some(Player::Dark),
            dark_score,
            light_score,
            candidates,
            legal,
            is_game_over: false,
            is_pass: false,
            winner: None,
        }
    }

    /// Places a disc for the side to move, or advances past a stuck
    /// player when called with [`PASS`].
    ///
    /// Silently ignored without touching any state: positions outside
    /// `[-1, 63]`, positions that are not current legal destinations,
    /// and any call once the game is over.
    pub fn place(&mut self, position: i32) {
        if self.is_game_over {
            return;
        }
        if !(PASS..NUM_SQUARES as i32).contains(&position) {
            return;
        }
        let Some(player) = self.current_player else {
            return;
        };

        if position != PASS {
            let pos = position as usize;
            if self.legal & (1u64 << pos) == 0 {
                return;
            }

            let color = player.cell();
            self.board.set(pos, color);
            for &mv in &self.candidates {
                if mv.destination == pos {
                    self.board.flip_span(mv, color);
                }
            }

            let (dark, light) = self.board.count();
            self.dark_score = dark;
            self.light_score = light;
        }

        let next = player.opponent();
        self.current_player = Some(next);
        self.candidates = self.board.scan_moves(next);
        self.legal = destination_mask(&self.candidates);
        self.check_game_over();
    }

    pub fn current_player(&self) -> Option<Player> {
        self.current_player
    }

    pub fn score(&self, player: Player) -> u8 {
        match player {
            Player::Dark => self.dark_score,
            Player::Light => self.light_score,
        }
    }

    /// Returns `(dark_score, light_score)`.
    pub fn scores(&self) -> (u8, u8) {
        (self.dark_score, self.light_score)
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// True while the side to move has no legal placement and the
    /// host must advance it with `place(PASS)`.
    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    pub fn winner_message(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Every retained capturing line for the side to move.
    pub fn legal_moves(&self) -> &[Move] {
        &self.candidates
    }

    /// Legal destination squares as a bitmask.
    pub fn legal_destinations(&self) -> u64 {
        self.legal
    }

    /// A copy of the 64 cells: 0=empty, 1=dark, 2=light.
    pub fn board_snapshot(&self) -> [u8; NUM_SQUARES] {
        self.board.to_array()
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.map(Player::index).unwrap_or(0),
            dark_count: self.dark_score,
            light_count: self.light_score,
            legal_moves: bitmask_to_indices(self.legal),
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            winner: self.winner.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        GameResult {
            winner: match self.dark_score.cmp(&self.light_score) {
                Ordering::Greater => Player::Dark.index(),
                Ordering::Less => Player::Light.index(),
                Ordering::Equal => 0,
            },
            dark_count: self.dark_score,
            light_count: self.light_score,
        }
    }

    /// Terminal state machine, run after every turn switch. A full
    /// board ends the game outright. A stuck mover sets the pass flag
    /// the first time and ends the game the second consecutive time.
    fn check_game_over(&mut self) {
        if self.board.is_full() {
            self.is_game_over = true;
        } else if self.candidates.is_empty() {
            if self.is_pass {
                self.is_game_over = true;
                self.is_pass = false;
            } else {
                self.is_pass = true;
            }
        } else {
            self.is_pass = false;
        }

        if self.is_game_over {
            self.winner = Some(
                match self.dark_score.cmp(&self.light_score) {
                    Ordering::Greater => "Dark is the winner!",
                    Ordering::Less => "Light is the winner!",
                    Ordering::Equal => "Tie!",
                }
                .to_string(),
            );
            self.current_player = None;
            self.candidates.clear();
            self.legal = 0;
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current: Player) {
        self.board = board;
        self.current_player = Some(current);
        self.candidates = board.scan_moves(current);
        self.legal = destination_mask(&self.candidates);
        let (dark, light) = board.count();
        self.dark_score = dark;
        self.light_score = light;
        self.is_game_over = false;
        self.is_pass = false;
        self.winner = None;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn destination_mask(moves: &[Move]) -> u64 {
    moves
        .iter()
        .fold(0u64, |mask, mv| mask | (1u64 << mv.destination))
}

fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        let idx = bits.trailing_zeros() as u8;
        out.push(idx);
        bits &= bits - 1;
    }

    out
}
