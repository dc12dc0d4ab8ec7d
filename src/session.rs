use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::game::Game;

/// Per-session game storage for the hosting layer. Each session key
/// owns exactly one game, created at session start and dropped with
/// the session. The engine itself stays an explicit value; only this
/// store knows about keys.
#[derive(Debug, Default)]
pub struct SessionStore {
    games: HashMap<String, Game>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Binds a fresh game to `key`, replacing any game already stored
    /// under it, and returns the new game.
    pub fn start(&mut self, key: impl Into<String>) -> &mut Game {
        match self.games.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(Game::new());
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(Game::new()),
        }
    }

    pub fn game(&self, key: &str) -> Option<&Game> {
        self.games.get(key)
    }

    pub fn game_mut(&mut self, key: &str) -> Option<&mut Game> {
        self.games.get_mut(key)
    }

    /// Releases the game bound to `key`. Returns whether a game was
    /// actually stored under it.
    pub fn end(&mut self, key: &str) -> bool {
        self.games.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
