//! Static map catalog: locations, their colour, population and neighbours.
//!
//! The catalog is read-only once built and shared between sessions behind an
//! `Arc`. Adjacency is stored symmetrically: linking `a` to `b` also links `b`
//! to `a`.
//!
//! ## Example
//!
//! ```
//! use outbreak_engine::map::{Disease, LocationId, MapCatalog};
//!
//! let map = MapCatalog::builder("triangle")
//!     .location("Alpha", Disease::Blue, 100)
//!     .location("Beta", Disease::Blue, 200)
//!     .location("Gamma", Disease::Red, 300)
//!     .link("Alpha", "Beta")
//!     .link("Beta", "Gamma")
//!     .starting_location("Alpha")
//!     .build()
//!     .unwrap();
//!
//! assert!(map.is_adjacent(&LocationId::new("Beta"), &LocationId::new("Alpha")));
//! assert!(!map.is_adjacent(&LocationId::new("Alpha"), &LocationId::new("Gamma")));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::disease::Disease;
use crate::core::error::{GameError, Result};

/// Location (city) name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Static data for one location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationInfo {
    pub id: LocationId,
    pub disease: Disease,
    pub population: u64,
    pub neighbors: Vec<LocationId>,
}

/// Read-only map topology.
#[derive(Clone, Debug)]
pub struct MapCatalog {
    name: String,
    locations: FxHashMap<LocationId, LocationInfo>,
    /// Declaration order, used wherever iteration order matters (deck building).
    order: Vec<LocationId>,
    starting_location: LocationId,
}

impl MapCatalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> MapCatalogBuilder {
        MapCatalogBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &LocationId) -> Option<&LocationInfo> {
        self.locations.get(id)
    }

    /// Look up a location, failing with `NoSuchLocation`.
    pub fn location(&self, id: &LocationId) -> Result<&LocationInfo> {
        self.locations
            .get(id)
            .ok_or_else(|| GameError::NoSuchLocation(id.clone()))
    }

    /// Colour of a location.
    pub fn disease_of(&self, id: &LocationId) -> Result<Disease> {
        self.location(id).map(|info| info.disease)
    }

    pub fn neighbors(&self, id: &LocationId) -> Result<&[LocationId]> {
        self.location(id).map(|info| info.neighbors.as_slice())
    }

    /// Population of a location; 0 for unknown locations.
    #[must_use]
    pub fn population(&self, id: &LocationId) -> u64 {
        self.locations.get(id).map_or(0, |info| info.population)
    }

    #[must_use]
    pub fn is_adjacent(&self, a: &LocationId, b: &LocationId) -> bool {
        self.locations
            .get(a)
            .is_some_and(|info| info.neighbors.contains(b))
    }

    /// Location ids in declaration order.
    #[must_use]
    pub fn location_ids(&self) -> &[LocationId] {
        &self.order
    }

    /// Locations in declaration order.
    pub fn locations(&self) -> impl Iterator<Item = &LocationInfo> {
        self.order.iter().filter_map(|id| self.locations.get(id))
    }

    #[must_use]
    pub fn starting_location(&self) -> &LocationId {
        &self.starting_location
    }
}

// === Builder ===

/// Incremental builder for a `MapCatalog`.
///
/// Errors (duplicates, dangling links, missing start) are collected and
/// reported by `build()`.
#[derive(Clone, Debug, Default)]
pub struct MapCatalogBuilder {
    name: String,
    locations: Vec<LocationInfo>,
    index: FxHashMap<LocationId, usize>,
    links: Vec<(LocationId, LocationId)>,
    starting_location: Option<LocationId>,
    problems: Vec<String>,
}

impl MapCatalogBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declare a location.
    #[must_use]
    pub fn location(mut self, name: &str, disease: Disease, population: u64) -> Self {
        let id = LocationId::new(name);
        if self.index.contains_key(&id) {
            self.problems.push(format!("duplicate location {id}"));
            return self;
        }
        self.index.insert(id.clone(), self.locations.len());
        self.locations.push(LocationInfo {
            id,
            disease,
            population,
            neighbors: Vec::new(),
        });
        self
    }

    /// Declare a two-way link between two locations.
    #[must_use]
    pub fn link(mut self, a: &str, b: &str) -> Self {
        self.links.push((LocationId::new(a), LocationId::new(b)));
        self
    }

    #[must_use]
    pub fn starting_location(mut self, name: &str) -> Self {
        self.starting_location = Some(LocationId::new(name));
        self
    }

    /// Validate and freeze the catalog.
    pub fn build(mut self) -> Result<MapCatalog> {
        let links = std::mem::take(&mut self.links);
        for (a, b) in links {
            if a == b {
                self.problems.push(format!("{a} is linked to itself"));
                continue;
            }
            let (Some(&ia), Some(&ib)) = (self.index.get(&a), self.index.get(&b)) else {
                self.problems.push(format!("link {a} - {b} names an unknown location"));
                continue;
            };
            if !self.locations[ia].neighbors.contains(&b) {
                self.locations[ia].neighbors.push(b.clone());
            }
            if !self.locations[ib].neighbors.contains(&a) {
                self.locations[ib].neighbors.push(a);
            }
        }

        let starting_location = match self.starting_location.take() {
            Some(start) if self.index.contains_key(&start) => Some(start),
            Some(start) => {
                self.problems.push(format!("unknown starting location {start}"));
                None
            }
            None => {
                self.problems.push("no starting location".to_string());
                None
            }
        };

        if !self.problems.is_empty() {
            return Err(GameError::Consistency(format!(
                "map {}: {}",
                self.name,
                self.problems.join("; ")
            )));
        }
        let Some(starting_location) = starting_location else {
            return Err(GameError::Consistency(format!("map {}: no starting location", self.name)));
        };

        let order = self.locations.iter().map(|info| info.id.clone()).collect();
        let locations = self
            .locations
            .into_iter()
            .map(|info| (info.id.clone(), info))
            .collect();

        Ok(MapCatalog {
            name: self.name,
            locations,
            order,
            starting_location,
        })
    }
}
