//! Render backend using the `plotters` crate
//!
//! Draws directly in display coordinates: the bitmap covers the whole
//! [`FRAME_WIDTH`] × [`FRAME_HEIGHT`] frame, with `+y` up.
//!
//! Uses the bitmap backend to create PNG files.
//!
//! Text uses the system `sans-serif` font. If no font can be loaded, text is skipped with
//! a warning and the rest of the figure is still drawn.
use std::path::Path;

use plotters::{
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    figure::{self, text_height, Direction, Marker, Polyline, FRAME_HEIGHT, FRAME_WIDTH},
    plotting::{PlotOptions, RenderBackend},
};

const FONT_FAMILY: &str = "sans-serif";

/// Stroke width that spans one display unit
const STROKE_WIDTH_PER_UNIT: f64 = 100.0;

/// A drawing area root for plotters
///
/// Will create a PNG file at the given path, filled with the background color
pub struct Root<'a>(DrawingArea<BitMapBackend<'a>, Shift>);
impl<'a> AsRef<DrawingArea<BitMapBackend<'a>, Shift>> for Root<'a> {
    fn as_ref(&self) -> &DrawingArea<BitMapBackend<'a>, Shift> {
        &self.0
    }
}
impl<'a> Root<'a> {
    /// Create a new drawing area root for plotters
    ///
    /// # Errors
    /// Returns an error if the background cannot be filled.
    pub fn new(path: &'a Path, options: &PlotOptions) -> Result<Self, Error> {
        let backend = BitMapBackend::new(path, options.size);
        let root = IntoDrawingArea::into_drawing_area(backend);
        root.fill(&rgba(options.background, 1.0))?;
        Ok(Self(root))
    }
}

/// Plotters backend for rendering figures
pub struct Backend<'root> {
    area: DrawingArea<BitMapBackend<'root>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    px_per_unit: f64,
}
impl Backend<'_> {
    fn stroke_px(&self, width: f64) -> u32 {
        pixels(width * self.px_per_unit / STROKE_WIDTH_PER_UNIT)
    }

    fn font_px(&self, font_size: f64) -> f64 {
        text_height(font_size) * self.px_per_unit
    }

    /// Draws text, logging instead of failing when the text cannot be drawn
    fn draw_text(
        &self,
        text: &str,
        at: (f64, f64),
        color: figure::Color,
        font_size: f64,
        pos: Pos,
    ) {
        let style = (FONT_FAMILY, self.font_px(font_size))
            .into_font()
            .color(&rgba(color, 1.0))
            .pos(pos);
        if let Err(e) = self.area.draw(&Text::new(text.to_string(), at, style)) {
            log::warn!("could not draw text '{text}': {e}");
        }
    }
}
impl<'root> RenderBackend for Backend<'root> {
    type Error = Error;
    type Root = Root<'root>;

    fn new_canvas(root: &Self::Root, options: &PlotOptions) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let (half_w, half_h) = (FRAME_WIDTH / 2.0, FRAME_HEIGHT / 2.0);
        let root = root.as_ref();
        let area = root.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
            -half_w..half_w,
            -half_h..half_h,
            root.get_pixel_range(),
        ));

        Ok(Self {
            area,
            px_per_unit: f64::from(options.size.1) / FRAME_HEIGHT,
        })
    }

    fn add_polyline(&mut self, polyline: &Polyline) -> Result<(), Self::Error> {
        let style = rgba(polyline.style.color, polyline.style.opacity)
            .stroke_width(self.stroke_px(polyline.style.stroke_width));
        let points: Vec<(f64, f64)> = polyline.points.iter().map(|p| (p.x, p.y)).collect();
        self.area.draw(&PathElement::new(points, style))?;
        Ok(())
    }

    fn add_marker(&mut self, marker: &Marker) -> Result<(), Self::Error> {
        let center = (marker.position.x, marker.position.y);
        let radius = pixels(marker.radius * self.px_per_unit);
        self.area
            .draw(&Circle::new(center, radius, rgba(marker.color, 1.0).filled()))?;

        if let (Some(label), Some(anchor)) = (&marker.label, marker.label_anchor()) {
            self.draw_text(
                &label.text,
                (anchor.x, anchor.y),
                label.color,
                label.font_size,
                alignment(label.direction),
            );
        }
        Ok(())
    }

    fn add_text(&mut self, text: &figure::Text) -> Result<(), Self::Error> {
        self.draw_text(
            &text.text,
            (text.position.x, text.position.y),
            text.color,
            text.font_size,
            Pos::new(HPos::Center, VPos::Center),
        );
        Ok(())
    }

    fn finalize(self) -> Result<(), Self::Error> {
        self.area.present()?;
        Ok(())
    }
}

/// Text alignment so a label extends away from its object
fn alignment(direction: Direction) -> Pos {
    let (h, v) = match direction {
        Direction::Right => (HPos::Left, VPos::Center),
        Direction::Left => (HPos::Right, VPos::Center),
        Direction::Up => (HPos::Center, VPos::Bottom),
        Direction::Down => (HPos::Center, VPos::Top),
        Direction::UpLeft => (HPos::Right, VPos::Bottom),
        Direction::UpRight => (HPos::Left, VPos::Bottom),
        Direction::DownLeft => (HPos::Right, VPos::Top),
        Direction::DownRight => (HPos::Left, VPos::Top),
    };
    Pos::new(h, v)
}

fn rgba(color: figure::Color, opacity: f64) -> RGBAColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b).mix(opacity)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixels(value: f64) -> u32 {
    value.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Error occurring during rendering
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error drawing the figure
    #[error("Error drawing figure: {0}")]
    Draw(#[from] DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>),
}
