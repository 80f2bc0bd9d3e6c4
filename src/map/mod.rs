//! Map data: disease colours, the location catalog, and the built-in map.

pub mod catalog;
pub mod disease;
pub mod standard;

pub use catalog::{LocationId, LocationInfo, MapCatalog, MapCatalogBuilder};
pub use disease::{Disease, DiseaseCounts, DiseaseStatus};
pub use standard::{standard_map, STANDARD_MAP_NAME, STANDARD_START};
