pub mod cli;

pub use cli::{parse_cli_args, Action, Cli, Commands, Config};
