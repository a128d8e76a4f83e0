use std::process::ExitCode;

use hf_fetch::cli::{handle_fetch, parse_args, print_usage, ParseOutcome};
use hf_fetch::logging;

fn main() -> ExitCode {
    // Load .env file if it exists (searches current dir and parent dirs)
    let _ = dotenvy::dotenv();
    logging::init();

    let cli = match parse_args(std::env::args_os()) {
        ParseOutcome::Run(cli) => *cli,
        ParseOutcome::Usage(e) => {
            tracing::warn!("{}", e.render().to_string().trim_end());
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let (request, options) = cli.into_parts();
    if handle_fetch(&request, &options) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
