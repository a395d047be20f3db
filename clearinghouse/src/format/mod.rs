//! Textual CRS encodings of [`ProjectionDefinition`]s.
//!
//! Every encoding is a pure function of the definition:
//!
//! * [`wkt1`] - OGC WKT version 1 (`PROJCS[...]`), also used as ESRI WKT and `.prj` content;
//! * [`wkt2`] - ISO 19162:2019 WKT version 2 (`PROJCRS[...]`);
//! * [`proj_string`] - PROJ command line string, only for projections with a PROJ alias;
//! * [`json`] - structured JSON document.
//!
//! [`render`] retrieves any of them by [`FormatKey`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::definition::ProjectionDefinition;
use crate::error::ClearinghouseError;

mod compat;
mod json;
pub mod parameters;
mod proj;
mod wkt1;
mod wkt2;

pub use compat::{summary, vendor_wkt, Compatibility, VendorWkt};
pub use json::{json, json_document, JsonDocument};
pub use proj::proj_string;
pub use wkt1::wkt1;
pub use wkt2::wkt2;

/// Whitespace layout of WKT output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Single line without spaces, for machines.
    Compact,
    /// One clause per line with two-space indentation, for humans.
    Pretty,
}

impl Layout {
    /// Separator between the arguments of one clause.
    pub(crate) fn sep(self) -> &'static str {
        match self {
            Layout::Compact => ",",
            Layout::Pretty => ", ",
        }
    }

    /// Line break followed by the indentation of the given nesting level.
    pub(crate) fn line(self, level: usize) -> String {
        match self {
            Layout::Compact => String::new(),
            Layout::Pretty => format!("\n{}", "  ".repeat(level)),
        }
    }
}

/// Identifies one of the text artifacts produced for a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatKey {
    /// WKT-1, human readable.
    Wkt1Pretty,
    /// WKT-1, single line.
    Wkt1,
    /// WKT-2, human readable.
    Wkt2Pretty,
    /// WKT-2, single line.
    Wkt2,
    /// ESRI WKT.
    EsriWkt,
    /// Content of a shapefile `.prj` file.
    Prj,
    /// PROJ string.
    ProjString,
    /// JSON document.
    Json,
}

impl FormatKey {
    /// All keys in presentation order.
    pub const ALL: [FormatKey; 8] = [
        FormatKey::Wkt1Pretty,
        FormatKey::Wkt1,
        FormatKey::Wkt2Pretty,
        FormatKey::Wkt2,
        FormatKey::EsriWkt,
        FormatKey::Prj,
        FormatKey::ProjString,
        FormatKey::Json,
    ];

    /// Stable string key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKey::Wkt1Pretty => "wkt1-html",
            FormatKey::Wkt1 => "wkt1-ogc",
            FormatKey::Wkt2Pretty => "wkt2-html",
            FormatKey::Wkt2 => "wkt2-ogc",
            FormatKey::EsriWkt => "esri-wkt",
            FormatKey::Prj => "prj",
            FormatKey::ProjString => "proj",
            FormatKey::Json => "json",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FormatKey::Wkt1Pretty => "WKT-1 (Readable)",
            FormatKey::Wkt1 => "OGC WKT-1",
            FormatKey::Wkt2Pretty => "WKT-2 (Readable)",
            FormatKey::Wkt2 => "OGC WKT-2",
            FormatKey::EsriWkt => "ESRI WKT",
            FormatKey::Prj => ".PRJ",
            FormatKey::ProjString => "PROJ String",
            FormatKey::Json => "JSON",
        }
    }

    /// Name of the file the artifact is downloaded as, for the artifacts offered for download.
    pub fn file_name(&self, id: &str) -> Option<String> {
        match self {
            FormatKey::Prj => Some(format!("{id}.prj")),
            FormatKey::Wkt2Pretty => Some(format!("{id}_wkt2.txt")),
            FormatKey::Json => Some(format!("{id}.json")),
            _ => None,
        }
    }
}

impl Display for FormatKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKey {
    type Err = ClearinghouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ClearinghouseError::Configuration(format!("unknown format key {s:?}")))
    }
}

/// Produces the artifact for the given key. Returns `None` if the projection cannot be
/// expressed in that format (PROJ string of a projection without a PROJ alias).
pub fn render(definition: &ProjectionDefinition, key: FormatKey) -> Option<String> {
    let text = match key {
        FormatKey::Wkt1Pretty => wkt1(definition, Layout::Pretty),
        FormatKey::Wkt1 | FormatKey::Prj => wkt1(definition, Layout::Compact),
        FormatKey::Wkt2Pretty => wkt2(definition, Layout::Pretty),
        FormatKey::Wkt2 => wkt2(definition, Layout::Compact),
        FormatKey::EsriWkt => vendor_wkt(definition).wkt,
        FormatKey::ProjString => return proj_string(definition),
        FormatKey::Json => json(definition),
    };

    Some(text)
}

/// Shortest decimal representation of a parameter value: `0`, `-96`, `0.9996`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Negative zero prints as plain 0.
        return "0".to_string();
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FOURNIER_GLOBULAR_I, NICOLOSI_GLOBULAR};

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-96.0), "-96");
        assert_eq!(format_number(0.9996), "0.9996");
        assert_eq!(format_number(500_000.0), "500000");
        assert_eq!(format_number(29.5), "29.5");
    }

    #[test]
    fn format_keys_round_trip_through_strings() {
        for key in FormatKey::ALL {
            assert_eq!(key.as_str().parse::<FormatKey>(), Ok(key));
        }

        assert!("wkt3".parse::<FormatKey>().is_err());
    }

    #[test]
    fn download_file_names() {
        assert_eq!(
            FormatKey::Prj.file_name("robinson").as_deref(),
            Some("robinson.prj")
        );
        assert_eq!(
            FormatKey::Wkt2Pretty.file_name("robinson").as_deref(),
            Some("robinson_wkt2.txt")
        );
        assert_eq!(
            FormatKey::Json.file_name("robinson").as_deref(),
            Some("robinson.json")
        );
        assert_eq!(FormatKey::Wkt1.file_name("robinson"), None);
    }

    #[test]
    fn render_dispatches_by_key() {
        let compact = render(&NICOLOSI_GLOBULAR, FormatKey::Wkt1).unwrap();
        assert_eq!(render(&NICOLOSI_GLOBULAR, FormatKey::Prj).unwrap(), compact);
        assert_eq!(
            render(&NICOLOSI_GLOBULAR, FormatKey::EsriWkt).unwrap(),
            compact
        );
        assert!(render(&NICOLOSI_GLOBULAR, FormatKey::ProjString).is_some());
        assert!(render(&FOURNIER_GLOBULAR_I, FormatKey::ProjString).is_none());
    }

    #[test]
    fn emitters_are_idempotent() {
        for key in FormatKey::ALL {
            assert_eq!(
                render(&NICOLOSI_GLOBULAR, key),
                render(&NICOLOSI_GLOBULAR, key)
            );
        }
    }
}
