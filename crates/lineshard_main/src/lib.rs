mod cli;
mod env;
mod info;
mod log;
mod report;
mod run;

pub use cli::Cli;
pub use env::load_dot_env;
pub use info::Info;
pub use log::init_tracing;
pub use report::Report;
pub use run::run;
