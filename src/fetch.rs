use anyhow::{Context, Result};
use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};
use std::fmt;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";
pub const DEFAULT_REVISION: &str = "main";

/// Name of the cache folder created next to the output file.
pub const CACHE_DIR_NAME: &str = ".cache";

/// One file to pull from a model repository.
#[derive(Clone)]
pub struct FetchRequest {
    pub repo_id: String,
    pub filename: String,
    pub output_path: PathBuf,
    pub token: String,
}

impl fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchRequest")
            .field("repo_id", &self.repo_id)
            .field("filename", &self.filename)
            .field("output_path", &self.output_path)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Hub settings that do not come from the positional arguments.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub endpoint: String,
    pub revision: String,
    pub progress: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            revision: DEFAULT_REVISION.to_string(),
            progress: false,
        }
    }
}

/// `parent(output_path)/.cache`. A bare file name resolves against the current directory.
pub fn cache_dir_for(output_path: &Path) -> PathBuf {
    output_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CACHE_DIR_NAME)
}

/// Download `request.filename` into the hub cache and copy it to `request.output_path`.
///
/// Cached content is reused and interrupted downloads are resumed by `hf-hub`;
/// this function never forces a re-download. The cached copy is left in place.
pub fn fetch(request: &FetchRequest, options: &FetchOptions) -> Result<PathBuf> {
    let cache_dir = cache_dir_for(&request.output_path);
    tracing::debug!("Using cache directory {}", cache_dir.display());

    fs::create_dir_all(&cache_dir).with_context(|| {
        format!("Failed to create cache directory {}", cache_dir.display())
    })?;

    let api = ApiBuilder::new()
        .with_endpoint(options.endpoint.clone())
        .with_cache_dir(cache_dir)
        .with_token(Some(request.token.clone()))
        .with_progress(options.progress)
        .build()
        .context("Failed to build Hugging Face client")?;

    let repo = api.repo(Repo::with_revision(
        request.repo_id.clone(),
        RepoType::Model,
        options.revision.clone(),
    ));

    tracing::info!(
        "Fetching {}/{} (revision {})",
        request.repo_id,
        request.filename,
        options.revision
    );
    let cached = repo.get(&request.filename).with_context(|| {
        format!(
            "Failed to download {} from {}",
            request.filename, request.repo_id
        )
    })?;
    tracing::debug!("Cached at {}", cached.display());

    copy_preserving_metadata(&cached, &request.output_path).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            cached.display(),
            request.output_path.display()
        )
    })?;

    tracing::info!("Copied to {}", request.output_path.display());
    Ok(request.output_path.clone())
}

/// Copy `src` over `dst`, keeping permissions and access/modification times.
///
/// The bytes are staged in a temp file next to `dst` and renamed into place,
/// so `dst` is either untouched or complete.
pub fn copy_preserving_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;
    let dst_dir = match dst.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dst_dir)?;
    let mut reader = File::open(src)?;
    io::copy(&mut reader, staged.as_file_mut())?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    staged.as_file().set_times(times)?;
    staged.as_file().set_permissions(metadata.permissions())?;

    staged.persist(dst).map_err(|e| e.error)?;
    Ok(())
}
