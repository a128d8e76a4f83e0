use colored::*;

use crate::fetch::{fetch, FetchOptions, FetchRequest};

/// Run one fetch and report the outcome. Returns `true` on success.
pub fn handle_fetch(request: &FetchRequest, options: &FetchOptions) -> bool {
    match fetch(request, options) {
        Ok(path) => {
            println!("{} {}", "Downloaded to:".green(), path.display());
            true
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            false
        }
    }
}

pub fn print_usage() {
    println!("{}", super::args::USAGE);
}
