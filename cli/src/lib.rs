pub mod commands;
pub mod logging;
pub mod repl;
pub mod session;

pub use repl::readline;
pub use session::Session;
