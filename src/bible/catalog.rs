//! Version Catalog
//!
//! The fixed table of translations this service knows how to serve. The
//! catalog is immutable for the process lifetime; `VersionStore::list_versions`
//! filters it down to entries whose backing file is actually present.

use crate::bible::text::VerseNumbering;

/// One known translation: identifier, display name, abbreviation, and the
/// verse-numbering rule its backing data file was exported with.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub numbering: VerseNumbering,
}

/// All translations the service can serve.
///
/// The cache in `VersionStore` grows at most to this table's size, which is
/// why unbounded memoization is acceptable there. If this catalog ever stops
/// being a small fixed table, the store needs an eviction policy.
pub const CATALOG: &[CatalogEntry] = &[
    entry("kjv", "King James Version", "KJV", VerseNumbering::Positional),
    entry("nkjv", "New King James Version", "NKJV", VerseNumbering::Positional),
    entry("esv", "English Standard Version", "ESV", VerseNumbering::Positional),
    entry("niv", "New International Version", "NIV", VerseNumbering::Positional),
    entry("nlt", "New Living Translation", "NLT", VerseNumbering::Positional),
    entry("nasb", "New American Standard Bible", "NASB", VerseNumbering::Positional),
    entry("csb", "Christian Standard Bible", "CSB", VerseNumbering::Positional),
    entry("hcsb", "Holman Christian Standard Bible", "HCSB", VerseNumbering::Positional),
    entry("rsv", "Revised Standard Version", "RSV", VerseNumbering::Positional),
    entry("nrsv", "New Revised Standard Version", "NRSV", VerseNumbering::Positional),
    entry("amp", "Amplified Bible", "AMP", VerseNumbering::Positional),
    entry("msg", "The Message", "MSG", VerseNumbering::Positional),
    entry("erv", "Easy-to-Read Version", "ERV", VerseNumbering::Positional),
    entry("gnt", "Good News Translation", "GNT", VerseNumbering::Positional),
    entry("icb", "International Children's Bible", "ICB", VerseNumbering::Positional),
    entry("nirv", "New International Reader's Version", "NIrV", VerseNumbering::Positional),
    entry("net", "New English Translation", "NET", VerseNumbering::Positional),
    entry("leb", "Lexham English Bible", "LEB", VerseNumbering::Positional),
    entry("web", "World English Bible", "WEB", VerseNumbering::Positional),
    entry("asv", "American Standard Version", "ASV", VerseNumbering::Positional),
    entry("bbe", "Bible in Basic English", "BBE", VerseNumbering::Positional),
    // Legacy gzip exports below carry "<number> <text>" verse strings.
    entry("ylt", "Young's Literal Translation", "YLT", VerseNumbering::Prefixed),
    entry("darby", "Darby Translation", "DARBY", VerseNumbering::Prefixed),
    entry("wbt", "Webster's Bible Translation", "WBT", VerseNumbering::Prefixed),
    entry("geneva", "Geneva Bible (1599)", "GNV", VerseNumbering::Prefixed),
    entry("kjv1611", "King James Version (1611)", "KJV1611", VerseNumbering::Prefixed),
    entry("douay", "Douay-Rheims Bible", "DRA", VerseNumbering::Prefixed),
    entry("rotherham", "Rotherham's Emphasized Bible", "EBR", VerseNumbering::Prefixed),
];

const fn entry(
    id: &'static str,
    name: &'static str,
    abbreviation: &'static str,
    numbering: VerseNumbering,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        abbreviation,
        numbering,
    }
}

/// Looks up a catalog entry by its identifier.
pub fn find(version_id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == version_id)
}
