//! Rendering figures to images
//!
//! Mainly used through the [`crate::render!`] macro.
//! - [`crate::assert_on_curve!`] uses this on failure if the `plotting` feature is active
//!
//! You can also implement [`RenderBackend`] for another target, or use
//! [`render_to_file`] directly for more control (I also expose [`plotters`] directly)
//!
//! The [`crate::plot_filename!`] macro can be used to generate a unique filename for each image.
//! - This is how the asserts get a filename on failure
use std::path::Path;

use crate::figure::{Color, Figure};

mod backend;
pub use backend::*;

/// Options for rendering
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Size of the output image in pixels
    pub size: (u32, u32),

    /// Background fill
    pub background: Color,

    /// Whether to draw the figure's axes
    pub show_axes: bool,
}
impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            size: (1280, 720),
            background: Color::Black,
            show_axes: true,
        }
    }
}

/// Renders a figure to a PNG file with the plotters backend
///
/// # Errors
/// Returns an error if the image cannot be drawn or written.
pub fn render_to_file(
    figure: &Figure,
    path: &Path,
    options: &PlotOptions,
) -> Result<(), backend::plotters::Error> {
    let root = backend::plotters::Root::new(path, options)?;
    let mut canvas = backend::plotters::Backend::new_canvas(&root, options)?;
    canvas.add_figure(figure, options.show_axes)?;
    canvas.finalize()?;
    log::debug!("rendered '{}' to {}", figure.title(), path.display());
    Ok(())
}

/// Render a [`Figure`] to a PNG file.
///
/// Generates a filename based on the source file and line number.
/// - Creates the necessary directories if they don't exist.
/// - If prefix is specified, it is prepended to the filename.
///
/// Evaluates to `Result<PathBuf, plotting::plotters::Error>` with the path that was written.
///
/// # Examples
/// ```ignore
/// render!(figure)?;
/// render!(figure, prefix = "lemniscate")?;
/// render!(figure, { size: (640, 360), show_axes: false }, prefix = "bare")?;
/// ```
#[macro_export]
macro_rules! render {
    ($figure:expr, { $( $name:ident : $value:expr ),* $(,)? } $( , prefix = $prefix:expr )?) => {{
        #[allow(unused_mut)] let mut options = $crate::plotting::PlotOptions::default();
        $( options.$name = $value; )*

        #[allow(unused)] let mut prefix: Option<String> = None; $( prefix = Some($prefix.to_string()); )?
        let path = $crate::plot_filename!(prefix);

        $crate::plotting::render_to_file(&$figure, &path, &options).map(|()| path)
    }};

    ($figure:expr $( , prefix = $prefix:expr )?) => {
        $crate::render!($figure, {} $(, prefix = $prefix)?)
    };
}

/// Generate a filename for an image: `target/plot_output/{file}_line_{line}.png`
///
/// Creates the necessary directories if they don't exist.
///
/// `plot_filename!(Some("prefix"))` will prepend `prefix_` to the filename.
#[macro_export]
macro_rules! plot_filename {
    ($prefix:expr) => {{
        let prefix: Option<String> = $prefix.map(|s| s.to_string());
        let prefix = match prefix {
            Some(p) if !p.is_empty() => format!("{p}_"),
            _ => String::new(),
        };

        let file = file!().replace(['/', '\\', '.'], "_");
        let line = line!();

        let target_dir = ::std::env::var("TARGET_DIR").unwrap_or_else(|_| "target".into());
        let plots_dir = ::std::path::Path::new(&target_dir).join("plot_output");
        let _ = std::fs::create_dir_all(&plots_dir);

        let filename = format!("{prefix}{file}_line_{line}.png");

        plots_dir.join(filename)
    }};
}
