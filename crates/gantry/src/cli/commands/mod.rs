//! CLI commands

mod check;
mod init;
mod resolve;
mod status;

pub use check::CheckCommand;
pub use init::InitCommand;
pub use resolve::ResolveCommand;
pub use status::StatusCommand;
