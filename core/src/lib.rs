//! Lights Out puzzle engine: a fixed square board of lights where activating a
//! cell flips it and its orthogonal neighbors, and the puzzle is solved once
//! every light is off.

#![no_std]

extern crate alloc;

pub use board::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod difficulty;
mod engine;
mod error;
mod generator;
mod types;
mod view;
