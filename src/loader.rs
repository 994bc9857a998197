use crate::error::{KeyFitError, KfResult};
use crate::layouts::Layout;
use crate::profile::{parse_key_token, Finger, Hand, KeyProfile};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct LayoutFile {
    name: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    keys: HashMap<String, KeyProfile>,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    key: String,
    distance: f32,
    hand: Hand,
    finger: Finger,
}

fn collect_profiles<I>(name: &str, entries: I) -> KfResult<HashMap<char, KeyProfile>>
where
    I: IntoIterator<Item = (String, KeyProfile)>,
{
    let mut profiles = HashMap::new();
    for (token, profile) in entries {
        let c = parse_key_token(&token)
            .map_err(|e| KeyFitError::Validation(format!("layout '{}': {}", name, e)))?;
        if profiles.insert(c, profile).is_some() {
            return Err(KeyFitError::Validation(format!(
                "layout '{}': key {:?} is defined twice",
                name, c
            )));
        }
    }
    Ok(profiles)
}

/// Parses a JSON layout definition:
/// `{ "name": .., "enabled": .., "keys": { "a": { "distance": 0, "hand": "left", "finger": "pinky" } } }`
pub fn parse_json_layout<R: Read>(reader: R) -> KfResult<Layout> {
    let file: LayoutFile = serde_json::from_reader(reader)?;
    let profiles = collect_profiles(&file.name, file.keys)?;
    Ok(Layout::new(file.name, profiles)?.with_enabled(file.enabled))
}

/// Parses a `key,distance,hand,finger` table.
pub fn parse_csv_layout<R: Read>(name: &str, reader: R) -> KfResult<Layout> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize::<CsvRow>() {
        let row = result?;
        rows.push((row.key, KeyProfile::new(row.distance, row.hand, row.finger)));
    }

    let profiles = collect_profiles(name, rows)?;
    Layout::new(name, profiles)
}

/// Loads one layout file, picking the format from the extension.
pub fn load_layout_file<P: AsRef<Path>>(path: P) -> KfResult<Layout> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let layout = match ext.as_deref() {
        Some("json") => parse_json_layout(File::open(path)?)?,
        Some("csv") => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| {
                    KeyFitError::Config(format!("cannot derive a layout name from {:?}", path))
                })?;
            parse_csv_layout(stem, File::open(path)?)?
        }
        _ => {
            return Err(KeyFitError::Config(format!(
                "unsupported layout file {:?} (expected .json or .csv)",
                path
            )))
        }
    };

    debug!("Loaded layout '{}' from {:?}", layout.name(), path);
    Ok(layout)
}

/// Loads every `.json`/`.csv` layout in `dir`, sorted by file name.
pub fn load_layout_dir<P: AsRef<Path>>(dir: P) -> KfResult<Vec<Layout>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("json") || e.eq_ignore_ascii_case("csv") => {
                paths.push(path)
            }
            _ => warn!("Skipping non-layout file {:?}", path),
        }
    }
    paths.sort();

    let layouts = paths
        .iter()
        .map(load_layout_file)
        .collect::<KfResult<Vec<_>>>()?;

    info!("Loaded {} layout file(s) from {:?}", layouts.len(), dir);
    Ok(layouts)
}
