//! The two diagrams, built as explicit [`crate::figure::Figure`] values.
//!
//! - [`lemniscate`]: arc length of `r² = 4cos(2θ)` over `θ ∈ [π/8, 3π/8]`
//! - [`cardioid`]: the cardioid `r = 3(1 + cos θ)` against the limaçon `r = 2 + 4cos θ`
//!
//! Each scene has an options struct with a [`Default`] matching the published diagram.
//! Options deserialize with serde, and missing fields fall back to the defaults, so a
//! config file only needs the values it changes.
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

mod args;
pub use args::{SceneArgs, SceneOptions};

pub mod cardioid;
pub mod lemniscate;

/// Loads scene options from a JSON file
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`] if it does not
/// describe valid options.
pub fn load_options<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::lemniscate::LemniscateOptions;

    #[test]
    fn test_load_options() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("polarplot_options_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "samples": 50 }"#).unwrap();

        let options: LemniscateOptions = load_options(&path).unwrap();
        assert_eq!(options.samples, 50);
        assert_eq!(options.quadrature.limit, 100);

        std::fs::write(&path, r#"{ "samples": "many" }"#).unwrap();
        let result = load_options::<LemniscateOptions>(&path);
        assert!(matches!(result, Err(Error::Config(_))));

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            load_options::<LemniscateOptions>(&path),
            Err(Error::Io(_))
        ));
    }
}
