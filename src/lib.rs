pub mod app;
pub mod cli;
pub mod logging;

pub use app::Application;
pub use cli::{Cli, Command};
