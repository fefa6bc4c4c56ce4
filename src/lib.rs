//! Core logic and terminal frontend for Esnake, a fixed-grid arcade snake.
//!
//! The gameplay modules ([`snake`], [`food`], [`game`]) are pure state
//! machines with no terminal dependency; the frame driver in the binary
//! wires them to ratatui/crossterm through [`renderer`] and [`tick`].

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod tick;
