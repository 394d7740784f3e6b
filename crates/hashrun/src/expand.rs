//! Explicit glob expansion of `<data_dir>/<letter>*<extension>`, with shell semantics.

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// The pattern as a shell would see it, e.g. `../data/a*.in`.
pub fn pattern(data_dir: &Path, letter: char, extension: &str) -> String {
    data_dir
        .join(format!("{letter}*{extension}"))
        .to_string_lossy()
        .into_owned()
}

fn matcher(letter: char, extension: &str) -> Result<GlobMatcher> {
    let glob = format!(
        "{}*{}",
        globset::escape(&letter.to_string()),
        globset::escape(extension)
    );
    Ok(GlobBuilder::new(&glob)
        .literal_separator(true)
        .build()
        .with_context(|| format!("invalid input pattern '{glob}'"))?
        .compile_matcher())
}

/// Expand the input pattern for one letter into solver arguments.
///
/// Matches are direct entries of `data_dir`, sorted by name. When nothing
/// matches (or `data_dir` can't be read) the unexpanded pattern is returned
/// as the only argument, the way a shell without `nullglob` passes it on.
pub fn expand(data_dir: &Path, letter: char, extension: &str) -> Result<Vec<String>> {
    let matcher = matcher(letter, extension)?;

    let mut names: Vec<_> = WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping unreadable entry under {}: {err}", data_dir.display());
                None
            }
        })
        .map(|e| e.file_name().to_owned())
        .filter(|name| matcher.is_match(name))
        .collect();

    if names.is_empty() {
        return Ok(vec![pattern(data_dir, letter, extension)]);
    }

    names.sort();
    Ok(names
        .into_iter()
        .map(|name| data_dir.join(name).to_string_lossy().into_owned())
        .collect())
}
