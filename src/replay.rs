//! Headless playback of JSON action scripts.

use std::io::BufRead;

use tracing::debug;

use crate::animation::settle;
use crate::error::ReplayError;
use crate::game::{reduce, GameAction, GameState};

/// Playback options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Tick every dropped piece to rest right after its `columnSelected`
    pub settle: bool,
}

/// Apply every action in `script`, one JSON object per line, starting from
/// the initial state. Blank lines and lines starting with `#` are skipped.
///
/// Stops at the first malformed line.
pub fn replay<R: BufRead>(script: R, options: ReplayOptions) -> Result<GameState, ReplayError> {
    let mut state = GameState::initial();
    for (index, line) in script.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| ReplayError::Read {
            line: line_number,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action = GameAction::parse(trimmed).map_err(|source| ReplayError::Action {
            line: line_number,
            source,
        })?;
        state = reduce(&state, action);
        if options.settle && matches!(action, GameAction::ColumnSelected { .. }) {
            let (settled, ticks) = settle(&state);
            debug!(line = line_number, ticks, "settled dropped piece");
            state = settled;
        }
        debug!(line = line_number, ?action, status = ?state.status(), "applied action");
    }
    Ok(state)
}
