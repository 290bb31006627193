//! Explicit scene description for diagrams.
//!
//! A [`Figure`] is an ordered list of [`Element`]s in display coordinates, plus the
//! [`AxesConfig`] they were mapped through. It is the value handed to a rendering
//! collaborator: the `plotting` backend draws it to PNG, and [`Figure::to_json`]
//! exports it for anything else.
//!
//! Display coordinates use a frame of [`FRAME_WIDTH`] × [`FRAME_HEIGHT`] units centered
//! on the origin, with `+y` up.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    coords::AxesConfig,
    error::Result,
    value::{Point, Vector},
};

/// Width of the display frame
pub const FRAME_WIDTH: f64 = 14.222_222_222_222_221;

/// Height of the display frame
pub const FRAME_HEIGHT: f64 = 8.0;

/// Default distance between a marker and its label
pub const DEFAULT_BUFF: f64 = 0.25;

/// Default marker radius
pub const DEFAULT_MARKER_RADIUS: f64 = 0.08;

/// Default font size for labels
pub const DEFAULT_FONT_SIZE: f64 = 24.0;

const TICK_SIZE: f64 = 0.1;
const AXIS_STROKE_WIDTH: f64 = 2.0;

/// Named colors used by the diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// `#FFFFFF`
    White,
    /// `#888888`
    Gray,
    /// `#F7D96F`
    Yellow,
    /// `#83C167`
    Green,
    /// `#FC6255`
    Red,
    /// `#58C4DD`
    Blue,
    /// `#FF862F`
    Orange,
    /// `#D147BD`
    Pink,
    /// `#000000`
    Black,
}
impl Color {
    /// The color as 8-bit RGB
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xFF, 0xFF, 0xFF),
            Color::Gray => (0x88, 0x88, 0x88),
            Color::Yellow => (0xF7, 0xD9, 0x6F),
            Color::Green => (0x83, 0xC1, 0x67),
            Color::Red => (0xFC, 0x62, 0x55),
            Color::Blue => (0x58, 0xC4, 0xDD),
            Color::Orange => (0xFF, 0x86, 0x2F),
            Color::Pink => (0xD1, 0x47, 0xBD),
            Color::Black => (0x00, 0x00, 0x00),
        }
    }
}

/// Stroke style of a polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stroke color
    pub color: Color,

    /// Opacity in `[0, 1]`
    pub opacity: f64,

    /// Stroke width, in points
    pub stroke_width: f64,
}
impl Style {
    /// An opaque stroke
    #[must_use]
    pub const fn stroke(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            opacity: 1.0,
            stroke_width,
        }
    }

    /// Sets the opacity, clamped to `[0, 1]`
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Side of an object that a label is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `+y`
    Up,
    /// `−y`
    Down,
    /// `−x`
    Left,
    /// `+x`
    Right,
    /// `(−1, 1)`
    UpLeft,
    /// `(1, 1)`
    UpRight,
    /// `(−1, −1)`
    DownLeft,
    /// `(1, −1)`
    DownRight,
}
impl Direction {
    /// The direction as a vector; diagonals are not normalized
    #[must_use]
    pub fn vector(self) -> Vector {
        let (x, y) = match self {
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::UpLeft => (-1.0, 1.0),
            Direction::UpRight => (1.0, 1.0),
            Direction::DownLeft => (-1.0, -1.0),
            Direction::DownRight => (1.0, -1.0),
        };
        Vector::new(x, y)
    }
}

/// Text attached to a marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Label text
    pub text: String,

    /// Text color
    pub color: Color,

    /// Which side of the marker the label sits on
    pub direction: Direction,

    /// Gap between the marker and the label
    pub buff: f64,

    /// Extra offset applied after placement
    pub nudge: Vector,

    /// Font size, in points
    pub font_size: f64,
}
impl Label {
    /// A label to the right of its marker, with default spacing and size
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            direction: Direction::Right,
            buff: DEFAULT_BUFF,
            nudge: Vector::zeros(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Places the label on the given side, `buff` units away
    #[must_use]
    pub fn next_to(mut self, direction: Direction, buff: f64) -> Self {
        self.direction = direction;
        self.buff = buff;
        self
    }

    /// Shifts the label after placement
    #[must_use]
    pub fn nudged(mut self, nudge: Vector) -> Self {
        self.nudge = nudge;
        self
    }

    /// Sets the font size
    #[must_use]
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Where the label's near edge goes, for an object at `at` with the given radius
    ///
    /// Renderers align the text so it extends away from the object along
    /// [`Label::direction`].
    #[must_use]
    pub fn anchor(&self, at: &Point, radius: f64) -> Point {
        at + self.direction.vector() * (radius + self.buff) + self.nudge
    }
}

/// A dot, optionally labeled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Center, in display coordinates
    pub position: Point,

    /// Fill color
    pub color: Color,

    /// Dot radius
    pub radius: f64,

    /// Attached label
    pub label: Option<Label>,
}
impl Marker {
    /// An unlabeled dot of the default radius
    #[must_use]
    pub fn new(position: Point, color: Color) -> Self {
        Self {
            position,
            color,
            radius: DEFAULT_MARKER_RADIUS,
            label: None,
        }
    }

    /// Sets the dot radius
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Attaches a label
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Anchor position of the label, if there is one
    #[must_use]
    pub fn label_anchor(&self) -> Option<Point> {
        self.label
            .as_ref()
            .map(|label| label.anchor(&self.position, self.radius))
    }
}

/// Free-standing text, centered on its position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The text
    pub text: String,

    /// Center, in display coordinates
    pub position: Point,

    /// Text color
    pub color: Color,

    /// Font size, in points
    pub font_size: f64,
}
impl Text {
    /// Creates a text element
    pub fn new(text: impl Into<String>, position: Point, color: Color, font_size: f64) -> Self {
        Self {
            text: text.into(),
            position,
            color,
            font_size,
        }
    }
}

/// An ordered point sequence drawn as a connected stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Vertices, in display coordinates
    pub points: Vec<Point>,

    /// Stroke style
    pub style: Style,
}

/// One drawable item of a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A connected stroke
    Polyline(Polyline),

    /// A dot with an optional label
    Marker(Marker),

    /// Free text
    Text(Text),
}

/// A complete diagram in display coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    title: String,
    axes: Option<AxesConfig>,
    elements: Vec<Element>,
}
impl Figure {
    /// Creates an empty figure
    pub fn new(title: impl Into<String>, axes: Option<AxesConfig>) -> Self {
        Self {
            title: title.into(),
            axes,
            elements: Vec::new(),
        }
    }

    /// Title of the figure
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Axes the elements were mapped through, if any
    #[must_use]
    pub fn axes(&self) -> Option<&AxesConfig> {
        self.axes.as_ref()
    }

    /// Elements in drawing order
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Adds a polyline
    ///
    /// An empty point sequence adds nothing.
    pub fn push_polyline(&mut self, points: impl Into<Vec<Point>>, style: Style) -> &mut Self {
        let points = points.into();
        if points.is_empty() {
            log::debug!("skipping empty polyline in '{}'", self.title);
        } else {
            self.elements
                .push(Element::Polyline(Polyline { points, style }));
        }
        self
    }

    /// Adds a marker
    pub fn push_marker(&mut self, marker: Marker) -> &mut Self {
        self.elements.push(Element::Marker(marker));
        self
    }

    /// Adds free text
    pub fn push_text(&mut self, text: Text) -> &mut Self {
        self.elements.push(Element::Text(text));
        self
    }

    /// Axis lines, tick marks and axis labels for [`Figure::axes`]
    ///
    /// # Errors
    /// Returns [`crate::error::Error::DegenerateAxis`] if the axes cannot be mapped.
    pub fn axis_elements(&self) -> Result<Vec<Element>> {
        let Some(axes) = &self.axes else {
            return Ok(Vec::new());
        };
        let map = axes.coord_map()?;
        let style = Style::stroke(Color::White, AXIS_STROKE_WIDTH);

        let (x, y) = (axes.x_range, axes.y_range);
        let mut elements = vec![
            Element::Polyline(Polyline {
                points: vec![map.c2p(x.min, 0.0), map.c2p(x.max, 0.0)],
                style,
            }),
            Element::Polyline(Polyline {
                points: vec![map.c2p(0.0, y.min), map.c2p(0.0, y.max)],
                style,
            }),
        ];

        let half = Vector::new(0.0, TICK_SIZE / 2.0);
        for tick in x.ticks() {
            let at = map.c2p(tick, 0.0);
            elements.push(Element::Polyline(Polyline {
                points: vec![at - half, at + half],
                style,
            }));
        }

        let half = Vector::new(TICK_SIZE / 2.0, 0.0);
        for tick in y.ticks() {
            let at = map.c2p(0.0, tick);
            elements.push(Element::Polyline(Polyline {
                points: vec![at - half, at + half],
                style,
            }));
        }

        let x_label = map.c2p(x.max, 0.0) + Vector::new(0.0, -0.35);
        let y_label = map.c2p(0.0, y.max) + Vector::new(0.35, 0.0);
        elements.push(Element::Text(Text::new("x", x_label, Color::White, DEFAULT_FONT_SIZE)));
        elements.push(Element::Text(Text::new("y", y_label, Color::White, DEFAULT_FONT_SIZE)));

        Ok(elements)
    }

    /// Serializes the figure as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes [`Figure::to_json`] to a file
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Vertical position of a title placed `buff` below the top edge of the frame
#[must_use]
pub fn top_edge(buff: f64, font_size: f64) -> f64 {
    FRAME_HEIGHT / 2.0 - buff - text_height(font_size) / 2.0
}

/// Vertical position of text placed `buff` above the bottom edge of the frame
#[must_use]
pub fn bottom_edge(buff: f64, font_size: f64) -> f64 {
    -FRAME_HEIGHT / 2.0 + buff + text_height(font_size) / 2.0
}

/// Approximate height of a line of text, in display units
#[must_use]
pub fn text_height(font_size: f64) -> f64 {
    font_size / 90.0
}
