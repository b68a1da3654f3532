use alloc::string::String;
use thiserror::Error;

use crate::{GamePhase, TileKey};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Unknown symbol set `{0}`")]
    UnknownSymbolSet(String),
    #[error("Command not accepted while the game is in the {0:?} phase")]
    InvalidPhase(GamePhase),
    #[error("No tile with key {0} in the current deck")]
    InvalidTileKey(TileKey),
}

pub type Result<T> = core::result::Result<T, GameError>;
