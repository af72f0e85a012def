//! This module is responsible for loading campus venues and pathways,
//! either from CSV files or from the built-in Wits dataset, and building
//! a [`CampusMap`](crate::CampusMap).

mod builder;
mod builtin;
mod config;
pub mod records;

pub use builder::create_campus_map;
pub use builtin::{builtin_campus_map, builtin_pathways, builtin_venues};
pub use config::CampusDataConfig;
