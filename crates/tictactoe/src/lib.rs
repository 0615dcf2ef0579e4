//! Terminal shell for the tic-tac-toe engine.
//!
//! The shell owns everything the engine does not: reading configuration,
//! turning key presses and mouse clicks into placements, and drawing the
//! board. Rules live in [`tictactoe_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod layout;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ShellConfig};
pub use replay::{MoveParseError, ReplayReport, parse_move};
