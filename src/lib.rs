//! # Drop Four
//!
//! Connect Four built around an immutable state machine in which every
//! dropped piece falls one row per tick before it is scored.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state machine, actions
//! - [`animation`]: Tick timing for falling pieces
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Log subscriber setup
//! - [`replay`]: Headless playback of JSON action scripts
//! - [`error`]: Structured error types

pub mod animation;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod replay;
pub mod ui;
