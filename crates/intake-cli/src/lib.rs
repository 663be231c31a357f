//! Library components of the intake processing CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
