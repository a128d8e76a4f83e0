use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::fetch::{FetchOptions, FetchRequest, DEFAULT_ENDPOINT, DEFAULT_REVISION};

pub const USAGE: &str = "Usage: hf-fetch <repo_id> <filename> <output_path> <token>";

#[derive(Parser, Debug)]
#[command(name = "hf-fetch")]
#[command(about = "Download a single file from a Hugging Face model repository", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Model repository id, e.g. google/gemma-2b-it
    #[arg(allow_hyphen_values = true)]
    pub repo_id: String,

    /// File to download from the repository
    #[arg(allow_hyphen_values = true)]
    pub filename: String,

    /// Where to write the file; the hub cache goes in a .cache folder beside it
    #[arg(allow_hyphen_values = true)]
    pub output_path: PathBuf,

    /// Hugging Face access token
    #[arg(allow_hyphen_values = true)]
    pub token: String,

    /// Branch, tag, or commit to download from
    #[arg(long, env = "HF_REVISION", default_value = DEFAULT_REVISION)]
    pub revision: String,

    /// Hub endpoint (mirrors and self-hosted hubs)
    #[arg(long, env = "HF_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Show a download progress bar
    #[arg(long, env = "HF_FETCH_PROGRESS")]
    pub progress: bool,
}

impl Cli {
    pub fn into_parts(self) -> (FetchRequest, FetchOptions) {
        let request = FetchRequest {
            repo_id: self.repo_id,
            filename: self.filename,
            output_path: self.output_path,
            token: self.token,
        };
        let options = FetchOptions {
            endpoint: self.endpoint,
            revision: self.revision,
            progress: self.progress,
        };
        (request, options)
    }
}

#[derive(Debug)]
pub enum ParseOutcome {
    Run(Box<Cli>),
    /// Wrong argument count or a bad flag value.
    Usage(clap::Error),
}

pub fn parse_args<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => ParseOutcome::Run(Box::new(cli)),
        Err(e) => ParseOutcome::Usage(e),
    }
}
