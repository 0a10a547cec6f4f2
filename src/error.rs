//! Error types shared by the registry, the configuration and the bot protocol.
//!
//! Nothing raised here stops a running simulation: configuration errors surface
//! before a run starts, protocol errors are logged and turned into an idle move.

use thiserror::Error;

/// Errors raised while building a simulation or its configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("max rounds must be at least 1")]
    ZeroRounds,
    #[error("frame rate must be at least 1 fps")]
    ZeroFrameRate,
    #[error("{count} bots registered but the palette only has {palette} colours")]
    PaletteExhausted { count: usize, palette: usize },
}

/// Errors raised when a bot response does not follow `<pen>:<direction>`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("expected two `:`-separated fields, got {fields} in {response:?}")]
    Malformed { response: String, fields: usize },
}
