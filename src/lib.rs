//! A four-function desktop calculator: a typed input state machine with a
//! GTK front end (feature `gui`) and a line-oriented console front end.

pub mod calculator;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod state;
pub mod token;
#[cfg(feature = "gui")]
pub mod ui;

pub use calculator::{Calculator, Normalization};
pub use config::Config;
pub use display::{Controller, DisplaySurface, MemoryDisplay};
pub use error::{CalcError, ConfigError};
pub use state::{reduce, Phase, State, Trace};
pub use token::{Operator, Token};
