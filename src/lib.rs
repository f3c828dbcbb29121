//! Wrap-around Snake: a snake on a toroidal grid that grows when it eats and
//! dies when it runs into itself.
//!
//! [`game::GameState`] holds the whole simulation. The binary drives it with a
//! [`clock::TickTimer`] and an [`input::InputSource`] and draws it through
//! [`renderer`].

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
