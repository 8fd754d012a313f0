//! Mapping on-disk content files to in-engine asset paths.
//!
//! `Content/Maps/Arena.umap` becomes `/Game/Maps/Arena`. Only binary asset
//! packages under the project's `Content/` root qualify.

/// Project-relative content root. Paths are matched against this prefix.
pub const CONTENT_ROOT: &str = "Content/";

/// Mount point of the project's content in the engine.
pub const DEFAULT_ASSET_PATH: &str = "/Game";

/// Package extensions treated as assets (compared case-insensitively).
pub const ASSET_EXTENSIONS: [&str; 2] = [".uasset", ".umap"];

/// Asset path for a project-relative file, or `None` if it is not an asset.
pub fn asset_path_for(file: &str) -> Option<String> {
    let relative = file.strip_prefix(CONTENT_ROOT)?;

    let lower = relative.to_ascii_lowercase();
    let extension = ASSET_EXTENSIONS.iter().find(|ext| lower.ends_with(*ext))?;
    let stem = &relative[..relative.len() - extension.len()];
    if stem.is_empty() {
        return None;
    }

    let mut path = format!("{DEFAULT_ASSET_PATH}/{}", stem.replace('\\', "/"));
    while path.contains("//") {
        path = path.replace("//", "/");
    }
    Some(path)
}

/// Asset paths for every qualifying file, in input order.
pub fn asset_paths_for<I, S>(files: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    files
        .into_iter()
        .filter_map(|file| asset_path_for(file.as_ref()))
        .collect()
}
