//! Mission name resolution.
//!
//! Maps free-form mission names (e.g. "Curiosity", "mer - b", "Percy") onto
//! the directory key each mission uses on the PDS imaging node. Names follow
//! the aliases SPICE accepts for the rover NAIF codes. Unknown names are
//! passed through lowercased so newly archived missions keep working before
//! the catalog learns about them.

mod catalog;

use std::fmt;

pub use catalog::CatalogEntry;

/// Missions known to the compiled-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mission {
    /// Mars 2020 (Perseverance).
    Mars2020,
    /// Mars Science Laboratory (Curiosity).
    Msl,
    /// Mars Exploration Rover A (Spirit).
    MerA,
    /// Mars Exploration Rover B (Opportunity).
    MerB,
}

impl Mission {
    /// All catalog missions, in lookup order.
    pub fn all() -> &'static [Mission] {
        &[Mission::Mars2020, Mission::Msl, Mission::MerA, Mission::MerB]
    }

    /// Directory name of the mission on the PDS imaging node.
    pub fn key(self) -> &'static str {
        match self {
            Mission::Mars2020 => "mars2020",
            Mission::Msl => "msl",
            Mission::MerA => "mera",
            Mission::MerB => "merb",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mission::Mars2020 => "Mars 2020 (Perseverance)",
            Mission::Msl => "Mars Science Laboratory (Curiosity)",
            Mission::MerA => "Mars Exploration Rover A (Spirit)",
            Mission::MerB => "Mars Exploration Rover B (Opportunity)",
        }
    }

    /// NAIF integer code of the spacecraft.
    pub fn naif_id(self) -> i32 {
        self.entry().naif_id
    }

    /// Accepted names, in uppercase comparison form.
    pub fn aliases(self) -> &'static [&'static str] {
        self.entry().aliases
    }

    fn entry(self) -> &'static CatalogEntry {
        // CATALOG rows follow the variant order.
        &catalog::CATALOG[self as usize]
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of resolving a mission name: a catalog mission, or the raw name
/// lowercased when nothing in the catalog matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionKey {
    Known(Mission),
    Unlisted(String),
}

impl MissionKey {
    pub fn as_str(&self) -> &str {
        match self {
            MissionKey::Known(m) => m.key(),
            MissionKey::Unlisted(s) => s,
        }
    }
}

impl fmt::Display for MissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for MissionKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// The full catalog, in lookup order.
pub fn catalog() -> &'static [CatalogEntry] {
    &catalog::CATALOG
}

/// Resolves a free-form mission name to its archive key. Never fails.
///
/// Matching trims surrounding whitespace and ignores ASCII letter case only;
/// other characters compare by code point. Names that match no alias come
/// back as `MissionKey::Unlisted` holding the input ASCII-lowercased.
pub fn resolve_mission(name: &str) -> MissionKey {
    let normalized = name.trim().to_ascii_uppercase();
    match catalog::lookup(&normalized) {
        Some(entry) => MissionKey::Known(entry.mission),
        None => MissionKey::Unlisted(name.to_ascii_lowercase()),
    }
}
