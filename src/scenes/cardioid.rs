//! The cardioid `r = 3(1 + cos θ)` and the limaçon `r = 2 + 4cos θ` on shared axes,
//! with their tabulated intersection angles marked.
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::{
    annotate::{
        annotate, cardioid_limacon_intersections, check_intersections, IntersectionCheck,
        SpecialPoint,
    },
    coords::AxesConfig,
    curve::{Cardioid, Limacon, PolarCurve},
    error::Result,
    figure::{text_height, top_edge, Color, Figure, Marker, Style, Text},
    sampler::{sample, PointSequence},
    value::Point,
};

/// Title of the diagram
pub const TITLE: &str = "Cardioid & Limacon Intersections";

const TITLE_SIZE: f64 = 30.0;
const EQUATION_SIZE: f64 = 24.0;
const EQUATION_OFFSET: f64 = 1.6;

/// Options for the cardioid / limaçon diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardioidOptions {
    /// First curve, drawn in blue; markers are placed on it
    pub cardioid: Cardioid,

    /// Second curve, drawn in red
    pub limacon: Limacon,

    /// Axes both curves are drawn on
    pub axes: AxesConfig,

    /// Samples per curve over `[0, 2π]`
    pub samples: usize,

    /// Angles to mark
    pub intersections: Vec<SpecialPoint>,
}
impl Default for CardioidOptions {
    fn default() -> Self {
        Self {
            cardioid: Cardioid::default(),
            limacon: Limacon::default(),
            axes: AxesConfig::cardioid(),
            samples: 500,
            intersections: cardioid_limacon_intersections(),
        }
    }
}

/// The built diagram and the values behind it
#[derive(Debug, Clone)]
pub struct CardioidScene {
    /// Everything to draw
    pub figure: Figure,

    /// Samples of the cardioid
    pub cardioid: PointSequence,

    /// Samples of the limaçon
    pub limacon: PointSequence,

    /// One marker per tabulated angle
    pub markers: Vec<Marker>,

    /// How well each tabulated angle holds as an intersection
    pub checks: Vec<IntersectionCheck>,
}

/// Builds the cardioid / limaçon diagram
///
/// # Errors
/// Returns [`crate::error::Error::DegenerateAxis`] if the axes cannot be mapped.
pub fn build(options: &CardioidOptions) -> Result<CardioidScene> {
    let map = options.axes.coord_map()?;
    let mut figure = Figure::new(TITLE, Some(options.axes));

    let title_y = top_edge(0.3, TITLE_SIZE);
    figure.push_text(Text::new(
        TITLE,
        Point::new(0.0, title_y),
        Color::Yellow,
        TITLE_SIZE,
    ));

    let equation_y = title_y - (text_height(TITLE_SIZE) + text_height(EQUATION_SIZE)) / 2.0 - 0.2;
    figure.push_text(Text::new(
        options.cardioid.equation(),
        Point::new(-EQUATION_OFFSET, equation_y),
        Color::Blue,
        EQUATION_SIZE,
    ));
    figure.push_text(Text::new(
        options.limacon.equation(),
        Point::new(EQUATION_OFFSET, equation_y),
        Color::Red,
        EQUATION_SIZE,
    ));

    let cardioid = sample(&options.cardioid, 0.0, TAU, options.samples, &map);
    let limacon = sample(&options.limacon, 0.0, TAU, options.samples, &map);
    figure.push_polyline(cardioid.points(), Style::stroke(Color::Blue, 3.0));
    figure.push_polyline(limacon.points(), Style::stroke(Color::Red, 3.0));

    let markers = annotate(&options.cardioid, &options.intersections, &map);
    for marker in &markers {
        figure.push_marker(marker.clone());
    }

    let checks = check_intersections(&options.cardioid, &options.limacon, &options.intersections);
    log::info!(
        "built '{TITLE}': {}/{} tabulated intersections hold",
        checks.iter().filter(|c| c.holds()).count(),
        checks.len()
    );

    Ok(CardioidScene {
        figure,
        cardioid,
        limacon,
        markers,
        checks,
    })
}
