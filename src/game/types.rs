use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Identifier of a registered bot. `0` is reserved for unowned cells.
pub type BotId = u32;

/// Cell value of a cell nobody has marked.
pub const UNOWNED: BotId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

impl Direction {
    /// Unknown tokens map to `Stay`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            _ => Direction::Stay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenState {
    Up,
    Down,
}

impl PenState {
    /// Only `pd` puts the pen down.
    pub fn from_token(token: &str) -> Self {
        match token {
            "pd" => PenState::Down,
            _ => PenState::Up,
        }
    }
}

/// What a bot wants to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotAction {
    pub pen: PenState,
    pub direction: Direction,
}

impl BotAction {
    pub fn new(pen: PenState, direction: Direction) -> Self {
        Self { pen, direction }
    }

    /// Pen up, no movement.
    pub fn idle() -> Self {
        Self::new(PenState::Up, Direction::Stay)
    }

    /// Strict parser for the `<pen>:<direction>` text protocol.
    ///
    /// Only the field count is checked: unknown pen tokens lift the pen and
    /// unknown directions keep the bot in place.
    pub fn try_parse(response: &str) -> Result<Self, ProtocolError> {
        let fields: Vec<&str> = response.split(':').collect();
        match fields.as_slice() {
            [pen, direction] => Ok(Self::new(
                PenState::from_token(pen),
                Direction::from_token(direction),
            )),
            _ => Err(ProtocolError::Malformed {
                response: response.to_string(),
                fields: fields.len(),
            }),
        }
    }

    /// Fail-soft parser: a malformed response becomes [`BotAction::idle`].
    pub fn parse(response: &str) -> Self {
        Self::try_parse(response).unwrap_or_else(|err| {
            warn!("[Protocol] Ignoring bot response: {}", err);
            Self::idle()
        })
    }
}
