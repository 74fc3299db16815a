use serde::{Deserialize, Serialize};

use super::GameState;
use crate::error::ActionError;

/// A user or timer input to the game.
///
/// The JSON form mirrors the front-end dispatch objects:
/// `{"type":"columnSelected","payload":{"columnIndex":3}}`,
/// `{"type":"gameTicked"}` and `{"type":"gameReset"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum GameAction {
    #[serde(rename_all = "camelCase")]
    ColumnSelected { column_index: usize },
    GameTicked,
    GameReset,
}

impl GameAction {
    /// Parse one JSON action. Unknown `type` tags and malformed payloads are
    /// rejected.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        serde_json::from_str(input).map_err(|source| ActionError::Malformed {
            input: input.trim().to_string(),
            source,
        })
    }
}

/// Apply `action` to `state`, producing the next snapshot.
pub fn reduce(state: &GameState, action: GameAction) -> GameState {
    match action {
        GameAction::ColumnSelected { column_index } => state.select_column(column_index),
        GameAction::GameTicked => state.tick(),
        GameAction::GameReset => state.reset(),
    }
}
