mod args;
mod commands;

pub use args::{parse_args, Cli, ParseOutcome, USAGE};
pub use commands::{handle_fetch, print_usage};
