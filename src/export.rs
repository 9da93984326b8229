//! Bulk export of the gazetteer dataset.
//!
//! The listing endpoint is paginated; each page carries a `features` array and
//! a `next` link that is null on the last page. The dump functions follow
//! those links until the end and write what they find to local files. A full
//! dump issues one request per page and can take a long time.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::client::GazetteerClient;
use crate::error::{HistogisError, Result};
use crate::http::HttpClient;

/// Extension of single-feature files written by [`dump_all_file_per_feature`].
pub const FEATURE_FILE_EXTENSION: &str = "geojson";

/// Writes every listing page as one JSON line into a timestamped file in `dir`.
///
/// Each line is the page's `features` array. The file is named
/// `histogis_dump__YYYY-MM-DD__HH-MM-SS.txt`.
///
/// # Errors
///
/// Returns [`HistogisError::Transport`] if a page cannot be fetched,
/// [`HistogisError::Export`] if a page has no `features` array, and
/// [`HistogisError::IoError`] if the file cannot be written.
pub fn dump_all<C: HttpClient>(client: &GazetteerClient<C>, dir: &Path) -> Result<PathBuf> {
    let name = chrono::Local::now()
        .format("histogis_dump__%Y-%m-%d__%H-%M-%S.txt")
        .to_string();
    let path = dir.join(name);
    let mut writer = BufWriter::new(File::create(&path)?);

    for_each_page(client, |url, page| {
        let features = features_of(page, url)?;
        serde_json::to_writer(&mut writer, features).map_err(std::io::Error::from)?;
        writer.write_all(b"\n")?;
        info!(url = url, features = features.len(), "Wrote page");
        Ok(())
    })?;

    writer.flush()?;
    Ok(path)
}

/// Writes every feature of the dataset to `{dir}/{slugged_name}.geojson`.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns [`HistogisError::Export`] if a feature has no usable
/// `properties.slugged_name`, otherwise the errors of [`dump_all`].
pub fn dump_all_file_per_feature<C: HttpClient>(
    client: &GazetteerClient<C>,
    dir: &Path,
) -> Result<usize> {
    let mut written = 0;

    for_each_page(client, |url, page| {
        for feature in features_of(page, url)? {
            let path = dir.join(format!("{}.{FEATURE_FILE_EXTENSION}", slug_of(feature)?));
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer(&mut writer, feature).map_err(std::io::Error::from)?;
            writer.flush()?;
            info!(path = %path.display(), "Wrote feature");
            written += 1;
        }
        Ok(())
    })?;

    Ok(written)
}

/// Merges the `*.geojson` files of `source_dir` into a JSON Lines file.
///
/// Files are read in file name order and each is written compactly on its
/// own line of `target`.
///
/// # Errors
///
/// Returns [`HistogisError::Export`] if a source file is not valid JSON and
/// [`HistogisError::IoError`] on any file system failure.
pub fn merge_single_files(source_dir: &Path, target: &Path) -> Result<PathBuf> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(FEATURE_FILE_EXTENSION)
        {
            sources.push(path);
        }
    }
    sources.sort();

    let mut writer = BufWriter::new(File::create(target)?);
    for source in &sources {
        let text = fs::read_to_string(source)?;
        let data: Value = serde_json::from_str(&text).map_err(|e| {
            HistogisError::Export(format!("{} is not valid JSON: {e}", source.display()))
        })?;
        serde_json::to_writer(&mut writer, &data).map_err(std::io::Error::from)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    info!(files = sources.len(), target = %target.display(), "Merged feature files");
    Ok(target.to_path_buf())
}

/// Calls `f` with each listing page, following `next` links.
fn for_each_page<C, F>(client: &GazetteerClient<C>, mut f: F) -> Result<()>
where
    C: HttpClient,
    F: FnMut(&str, &Value) -> Result<()>,
{
    let mut next = Some(client.list_endpoint().to_string());
    while let Some(url) = next {
        let page = client.get_json(&url)?;
        f(&url, &page)?;
        next = page.get("next").and_then(Value::as_str).map(String::from);
    }
    Ok(())
}

fn features_of<'a>(page: &'a Value, url: &str) -> Result<&'a Vec<Value>> {
    page.get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| HistogisError::Export(format!("Page {url} has no features array")))
}

fn slug_of(feature: &Value) -> Result<&str> {
    let slug = feature
        .pointer("/properties/slugged_name")
        .and_then(Value::as_str)
        .ok_or_else(|| HistogisError::Export("Feature has no slugged_name".to_string()))?;

    if slug.is_empty() || slug.contains(['/', '\\']) || slug == "." || slug == ".." {
        return Err(HistogisError::Export(format!(
            "Unusable slugged_name for a file name: {slug:?}"
        )));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slug_of() {
        let feature = json!({"properties": {"slugged_name": "oberoesterreich-1860"}});
        assert_eq!(slug_of(&feature).unwrap(), "oberoesterreich-1860");
    }

    #[test]
    fn test_slug_rejects_paths() {
        for bad in ["../etc", "a/b", "", ".."] {
            let feature = json!({"properties": {"slugged_name": bad}});
            assert!(matches!(slug_of(&feature), Err(HistogisError::Export(_))));
        }
        assert!(slug_of(&json!({"properties": {}})).is_err());
    }

    #[test]
    fn test_features_of_requires_array() {
        let page = json!({"count": 0, "features": null});
        assert!(features_of(&page, "http://x").is_err());
        let page = json!({"features": [1, 2]});
        assert_eq!(features_of(&page, "http://x").unwrap().len(), 2);
    }
}
