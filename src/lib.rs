pub use crate::errors::AcceptError;

pub mod accept;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
