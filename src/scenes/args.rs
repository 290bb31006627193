//! `key=value` command-line arguments shared by the scene binaries.
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::{
    error::{Error, Result},
    figure::Figure,
    scenes::{cardioid::CardioidOptions, lemniscate::LemniscateOptions, load_options},
};

/// Options a scene binary can load and override from the command line
pub trait SceneOptions: DeserializeOwned + Default {
    /// Overrides the number of samples per curve
    fn set_samples(&mut self, samples: usize);
}
impl SceneOptions for LemniscateOptions {
    fn set_samples(&mut self, samples: usize) {
        self.samples = samples;
    }
}
impl SceneOptions for CardioidOptions {
    fn set_samples(&mut self, samples: usize) {
        self.samples = samples;
    }
}

/// Parsed arguments of a scene binary
///
/// - `config=<path>`: load options from JSON
/// - `samples=<n>`: override the sample count, after any config file
/// - `json=<path>`: write the figure as JSON
/// - `png=<path>`: render the figure (`plotting` feature)
/// - `help`, `--help`, `-h`: show usage
#[derive(Debug, Clone, Default)]
pub struct SceneArgs<T> {
    /// Scene options, defaulted or loaded from `config=`
    pub options: T,

    /// Where to write the figure as JSON
    pub json: Option<PathBuf>,

    /// Where to render the figure as PNG
    pub png: Option<PathBuf>,
}
impl<T: SceneOptions> SceneArgs<T> {
    /// Parses arguments, not including the program name
    ///
    /// Returns `Ok(None)` if help was requested.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an unknown argument or a bad `samples=` value, and
    /// any error from [`load_options`] for `config=`.
    pub fn parse<I>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut options = T::default();
        let mut samples = None;
        let mut json = None;
        let mut png = None;

        for arg in args {
            let arg = arg.as_ref();
            if matches!(arg, "help" | "--help" | "-h") {
                return Ok(None);
            }

            if let Some(path) = arg.strip_prefix("config=") {
                options = load_options(path)?;
            } else if let Some(value) = arg.strip_prefix("samples=") {
                let n = value
                    .parse::<usize>()
                    .map_err(|_| Error::Config(format!("Invalid samples value: {value}")))?;
                samples = Some(n);
            } else if let Some(path) = arg.strip_prefix("json=") {
                json = Some(PathBuf::from(path));
            } else if let Some(path) = arg.strip_prefix("png=") {
                png = Some(PathBuf::from(path));
            } else {
                return Err(Error::Config(format!("Unknown argument: {arg}")));
            }
        }

        if let Some(samples) = samples {
            options.set_samples(samples);
        }

        Ok(Some(Self { options, json, png }))
    }
}
impl<T> SceneArgs<T> {
    /// Writes the requested outputs for a built figure
    ///
    /// # Errors
    /// Returns an error if a file cannot be written, or if `png=` was given without the
    /// `plotting` feature.
    pub fn write_outputs(&self, figure: &Figure) -> Result<()> {
        if let Some(path) = &self.json {
            figure.write_json(path)?;
            log::info!("wrote figure to {}", path.display());
        }

        if let Some(path) = &self.png {
            render(figure, path)?;
            log::info!("rendered figure to {}", path.display());
        }
        Ok(())
    }
}

#[cfg(feature = "plotting")]
fn render(figure: &Figure, path: &std::path::Path) -> Result<()> {
    let options = crate::plotting::PlotOptions::default();
    crate::plotting::render_to_file(figure, path, &options)?;
    Ok(())
}

#[cfg(not(feature = "plotting"))]
fn render(_: &Figure, path: &std::path::Path) -> Result<()> {
    Err(Error::Config(format!(
        "Cannot write {}: built without the `plotting` feature",
        path.display()
    )))
}
