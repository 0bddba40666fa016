//! Compiled-in mission catalog.

use super::Mission;

/// One catalog row: a mission, its NAIF spacecraft code, and the names it answers to.
///
/// Aliases are stored in uppercase comparison form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub mission: Mission,
    pub naif_id: i32,
    pub aliases: &'static [&'static str],
}

/// Lookup order, one row per `Mission` in variant order. Alias sets must stay
/// pairwise disjoint.
pub(crate) static CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        mission: Mission::Mars2020,
        naif_id: -168,
        aliases: &["PERSEVERANCE", "MARS 2020", "MARS2020", "M2020", "M20", "PERCY"],
    },
    CatalogEntry {
        mission: Mission::Msl,
        naif_id: -76,
        aliases: &["CURIOSITY", "MSL", "MARS SCIENCE LABORATORY"],
    },
    CatalogEntry {
        mission: Mission::MerA,
        naif_id: -254,
        aliases: &[
            "SPIRIT",
            "MER-2",
            "MER 2",
            "MER-A",
            "MER - A",
            "MER A",
            "MARS EXPLORATION ROVER - A",
        ],
    },
    CatalogEntry {
        mission: Mission::MerB,
        naif_id: -253,
        aliases: &[
            "OPPORTUNITY",
            "MER-1",
            "MER 1",
            "MER-B",
            "MER - B",
            "MER B",
            "MARS EXPLORATION ROVER - B",
            "OPPY",
        ],
    },
];

/// Returns the entry whose aliases contain `normalized` (already uppercased).
pub(crate) fn lookup(normalized: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.aliases.iter().any(|alias| *alias == normalized))
}
