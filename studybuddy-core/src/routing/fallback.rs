use geo::{Coord, Point};

use crate::model::Pathway;

/// Approximate centre of the Braamfontein East campus, `[lng, lat]`
pub const CAMPUS_CENTER: Point<f64> = Point(Coord {
    x: 28.0305,
    y: -26.1929,
});

/// Connects two snapped points whose closest pathways never cross.
///
/// The returned sequence must start at `start` and end at `end`.
pub trait FallbackStrategy {
    fn connect(&self, start: Point<f64>, end: Point<f64>, pathways: &[Pathway]) -> Vec<Point<f64>>;
}

/// Bridges disjoint pathways through one fixed connector point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViaCampusCenter {
    pub center: Point<f64>,
}

impl ViaCampusCenter {
    pub fn new(center: Point<f64>) -> Self {
        Self { center }
    }
}

impl Default for ViaCampusCenter {
    fn default() -> Self {
        Self::new(CAMPUS_CENTER)
    }
}

impl FallbackStrategy for ViaCampusCenter {
    fn connect(&self, start: Point<f64>, end: Point<f64>, _: &[Pathway]) -> Vec<Point<f64>> {
        vec![start, self.center, end]
    }
}

/// Straight line between the two points
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLine;

impl FallbackStrategy for DirectLine {
    fn connect(&self, start: Point<f64>, end: Point<f64>, _: &[Pathway]) -> Vec<Point<f64>> {
        vec![start, end]
    }
}
