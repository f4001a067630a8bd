//! Chat-surface wire model for Lights Out: who is interacting, what they
//! pressed, and the message rendered back to them.

pub use error::*;
pub use interaction::*;
pub use message::*;

mod error;
mod interaction;
mod message;

/// Name of the slash command that starts a game.
pub const LIGHTS_COMMAND: &str = "lights";

/// Name of the command option carrying the difficulty.
pub const DIFFICULTY_OPTION: &str = "diff";

/// Ephemeral reply to someone pressing a button on a game that is not theirs.
pub const FOREIGN_SESSION_NOTICE: &str =
    "That move was rejected. Maybe you tried to play someone else's game?";

/// Line appended to the game message once the board is solved.
pub const COMPLETION_NOTICE: &str = "Game over!";
