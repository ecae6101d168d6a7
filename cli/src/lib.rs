pub mod audio;
pub mod commands;
pub mod context;
pub mod logging;
pub mod repl;
pub mod session;
pub mod stats_file;

pub use context::CliContext;
