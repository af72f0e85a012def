use geo::{Line, LineString, Point};

/// Named walkable polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Pathway {
    pub name: String,
    /// Ordered vertices, `x` is longitude, `y` is latitude
    pub coordinates: LineString<f64>,
}

impl Pathway {
    pub fn new(name: impl Into<String>, coordinates: LineString<f64>) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Builds a pathway from `(lng, lat)` pairs
    pub fn from_lng_lat(name: impl Into<String>, points: &[(f64, f64)]) -> Self {
        Self::new(name, LineString::from(points.to_vec()))
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point<f64>> + '_ {
        self.coordinates.coords().map(|coord| Point::from(*coord))
    }

    /// Consecutive vertex pairs; empty for pathways with fewer than two vertices
    pub fn segments(&self) -> impl Iterator<Item = Line<f64>> + '_ {
        self.coordinates.lines()
    }

    pub fn len(&self) -> usize {
        self.coordinates.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.0.is_empty()
    }
}
