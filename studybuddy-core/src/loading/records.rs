//! CSV campus data records, laid out like GTFS `stops.txt` and `shapes.txt`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use geo::{LineString, Point};
use itertools::Itertools;
use serde::Deserialize;

use crate::{Error, Pathway, Venue};

#[derive(Debug, Deserialize)]
pub struct VenueRecord {
    pub venue_id: String,
    pub venue_name: String,
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, Deserialize)]
pub struct PathwayPointRecord {
    pub pathway_name: String,
    pub point_sequence: u32,
    pub lng: f64,
    pub lat: f64,
}

impl From<VenueRecord> for Venue {
    fn from(record: VenueRecord) -> Self {
        Venue::new(
            record.venue_id.trim(),
            record.venue_name.trim(),
            Point::new(record.lng, record.lat),
        )
    }
}

/// Reads every well-formed row; malformed rows are skipped
pub fn deserialize_csv<T, R>(reader: R) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<T>()
        .filter_map(|row| {
            row.map_err(|e| log::debug!("Skipping malformed CSV row: {e}"))
                .ok()
        })
        .collect()
}

pub fn read_venues<R: Read>(reader: R) -> Vec<Venue> {
    deserialize_csv::<VenueRecord, _>(reader)
        .into_iter()
        .map(Venue::from)
        .collect()
}

/// Groups point rows by pathway name and orders them by `point_sequence`.
///
/// Pathways keep the order in which their names first appear.
pub fn read_pathways<R: Read>(reader: R) -> Vec<Pathway> {
    let rows = deserialize_csv::<PathwayPointRecord, _>(reader);

    let names: Vec<String> = rows
        .iter()
        .map(|row| row.pathway_name.clone())
        .unique()
        .collect();
    let mut grouped = rows.into_iter().into_group_map_by(|row| row.pathway_name.clone());

    names
        .into_iter()
        .filter_map(|name| {
            let mut points = grouped.remove(&name)?;
            points.sort_by_key(|row| row.point_sequence);
            let line: LineString<f64> = points.iter().map(|row| (row.lng, row.lat)).collect();
            Some(Pathway::new(name, line))
        })
        .collect()
}

pub fn load_venues(path: &Path) -> Result<Vec<Venue>, Error> {
    Ok(read_venues(open(path)?))
}

pub fn load_pathways(path: &Path) -> Result<Vec<Pathway>, Error> {
    Ok(read_pathways(open(path)?))
}

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        ))
    })
}
