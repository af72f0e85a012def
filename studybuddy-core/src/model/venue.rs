use geo::Point;

/// Named point of interest on campus
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Stable identifier used by the front end
    pub id: String,
    /// Display name
    pub name: String,
    /// `x` is longitude, `y` is latitude
    pub coordinates: Point<f64>,
}

impl Venue {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Point<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
        }
    }

    pub fn lng(&self) -> f64 {
        self.coordinates.x()
    }

    pub fn lat(&self) -> f64 {
        self.coordinates.y()
    }
}
