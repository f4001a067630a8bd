//! Platform-neutral Lights Out bot: keeps one game per user and turns chat
//! interactions into engine moves and re-rendered messages.

pub use bot::*;
pub use console::*;
pub use gateway::*;
pub use session::*;

mod bot;
mod console;
mod gateway;
mod session;
