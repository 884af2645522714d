//! Helpers shared by the Agora binaries: logger setup and JST time utilities.

pub mod logger;
pub mod time;
