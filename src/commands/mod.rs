//! CLI command implementations

mod check;
mod init;
mod rules;

pub use check::check;
pub use init::init;
pub use rules::rules;
