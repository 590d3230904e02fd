//! A die with a configurable number of sides.
//!
//! A [`Die`] has between 1 and 255 sides and always shows a face value in
//! `1..=sides`. Dice roll from a process-wide generator by default, or from
//! any caller-supplied [`rand::Rng`] for reproducible results.

pub mod config;
pub mod die;
pub mod error;
pub mod source;

pub use config::RollerConfig;
pub use die::{DEFAULT_SIDES, Die, MAX_SIDES, MIN_SIDES};
pub use error::{DieError, DieResult};
pub use source::reseed_shared;
