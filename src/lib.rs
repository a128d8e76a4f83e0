//! Download one file from a Hugging Face model repository to a local path.
//!
//! The hub cache lives in a `.cache` folder next to the output file; downloading,
//! resuming and cache reuse are handled by `hf-hub`.

pub mod cli;
pub mod fetch;
pub mod logging;

pub use fetch::{cache_dir_for, copy_preserving_metadata, fetch, FetchOptions, FetchRequest};
