use serde::Serialize;

use crate::board::Cell;

/// A side in the game. Dark always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// The disc color this side plays.
    pub fn cell(self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }

    /// Wire encoding: 1=dark, 2=light (0 is reserved for "no player").
    pub fn index(self) -> u8 {
        match self {
            Player::Dark => 1,
            Player::Light => 2,
        }
    }
}

/// Public game state returned across the hosting boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells, row-major: 0=empty, 1=dark, 2=light.
    pub board: Vec<u8>,
    /// 1=dark, 2=light, 0 once the game is over.
    pub current_player: u8,
    pub dark_count: u8,
    pub light_count: u8,
    /// Legal destination indices for the side to move, ascending.
    /// Empty once the game is over.
    pub legal_moves: Vec<u8>,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` while the side to move is stuck and the host must
    ///   advance it with a forced pass.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Set exactly when `is_game_over` becomes true.
    pub winner: Option<String>,
}

/// Final standing, meaningful once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 1=dark, 2=light, 0 for a tie.
    pub winner: u8,
    pub dark_count: u8,
    pub light_count: u8,
}
