use crate::figure::{Element, Figure, Marker, Polyline, Text};

use super::PlotOptions;

pub mod plotters;

/// Trait for render backends
///
/// Backends receive elements in display coordinates, in drawing order.
pub trait RenderBackend {
    /// Error type for the render backend
    type Error: std::error::Error;

    /// Root type for the render backend
    type Root;

    /// Create a new canvas covering the display frame on the given root
    ///
    /// # Errors
    /// Returns an error if the canvas cannot be created.
    fn new_canvas(root: &Self::Root, options: &PlotOptions) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Add a connected stroke
    ///
    /// # Errors
    /// Returns an error if the canvas cannot be modified.
    fn add_polyline(&mut self, polyline: &Polyline) -> Result<(), Self::Error>;

    /// Add a dot and its label
    ///
    /// # Errors
    /// Returns an error if the canvas cannot be modified.
    fn add_marker(&mut self, marker: &Marker) -> Result<(), Self::Error>;

    /// Add free text
    ///
    /// # Errors
    /// Returns an error if the canvas cannot be modified.
    fn add_text(&mut self, text: &Text) -> Result<(), Self::Error>;

    /// Finalize the canvas and write it to the output
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn finalize(self) -> Result<(), Self::Error>;

    /// Add any element
    ///
    /// # Errors
    /// Returns an error if the canvas cannot be modified.
    fn add_element(&mut self, element: &Element) -> Result<(), Self::Error> {
        match element {
            Element::Polyline(polyline) => {
                // Lines need two points; a lone point is drawn as nothing
                if polyline.points.len() < 2 {
                    return Ok(());
                }
                self.add_polyline(polyline)
            }
            Element::Marker(marker) => self.add_marker(marker),
            Element::Text(text) => self.add_text(text),
        }
    }

    /// Add every element of a figure, after its axes if `with_axes` is set
    ///
    /// Axes that cannot be mapped are skipped with a warning.
    ///
    /// # Errors
    /// Returns an error if the canvas cannot be modified.
    fn add_figure(&mut self, figure: &Figure, with_axes: bool) -> Result<(), Self::Error> {
        if with_axes {
            match figure.axis_elements() {
                Ok(axes) => {
                    for element in &axes {
                        self.add_element(element)?;
                    }
                }
                Err(e) => log::warn!("skipping axes of '{}': {e}", figure.title()),
            }
        }

        for element in figure.elements() {
            self.add_element(element)?;
        }
        Ok(())
    }
}
