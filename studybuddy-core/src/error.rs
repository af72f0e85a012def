use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Venue not found: {0}")]
    VenueNotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
