//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_LOG_LEVEL, ENV_VOCABULARY_PATH, MAX_TEXT_LENGTH,
};
pub use env::Config;
