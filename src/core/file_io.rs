use std::path::Path;

use serde::de::DeserializeOwned;

/// Reads and parses a JSON parameter file.
pub fn load_params<T: DeserializeOwned>(
    params_path: impl AsRef<Path>,
) -> Result<T, Box<dyn std::error::Error>> {
    let path = params_path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("unable to read param file {}: {}", path.display(), err))?;
    let params = serde_json::from_str(&text)
        .map_err(|err| format!("unable to parse param file {}: {}", path.display(), err))?;
    log::info!("Loaded parameters from: {}", path.display());
    Ok(params)
}
