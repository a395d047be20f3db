use crate::definition::{DatumKind, ProjectionDefinition};
use crate::format::{format_number, parameters, proj_string, wkt1, Layout};

/// How well the ESRI software stack handles a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    /// The projection is registered by ESRI under the given well-known id.
    FullySupported {
        /// ESRI well-known id.
        wkid: u32,
    },
    /// Not registered by ESRI. Tools that accept PROJ strings can still use the projection.
    Limited {
        /// PROJ string to use instead of the WKID.
        proj_string: String,
    },
    /// Not expressible in ESRI software.
    Unsupported,
}

impl Compatibility {
    /// Classifies the definition: ESRI WKID first, PROJ alias second.
    pub fn of(definition: &ProjectionDefinition) -> Self {
        if let Some(wkid) = definition.esri_wkid() {
            return Self::FullySupported { wkid };
        }

        match proj_string(definition) {
            Some(proj_string) => Self::Limited { proj_string },
            None => Self::Unsupported,
        }
    }

    /// Short human readable description.
    pub fn note(&self) -> String {
        match self {
            Self::FullySupported { wkid } => format!("Fully supported (WKID {wkid})"),
            Self::Limited { .. } => "Limited: use the PROJ string".to_string(),
            Self::Unsupported => "Not supported".to_string(),
        }
    }
}

/// ESRI flavoured WKT with the compatibility note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorWkt {
    /// WKT-1 text as read by ESRI software.
    pub wkt: String,
    /// Support level of the projection.
    pub compatibility: Compatibility,
}

/// ESRI WKT of the definition. The text is the compact WKT-1 encoding.
pub fn vendor_wkt(definition: &ProjectionDefinition) -> VendorWkt {
    VendorWkt {
        wkt: wkt1(definition, Layout::Compact),
        compatibility: Compatibility::of(definition),
    }
}

fn parameter_suffix(name: &str) -> &'static str {
    if ["Meridian", "Parallel", "Latitude"]
        .iter()
        .any(|word| name.contains(word))
    {
        "°"
    } else if name.contains("ing") {
        " m"
    } else {
        ""
    }
}

/// Human readable rows describing the WKT-1 encoding: `(label, value)`.
pub fn summary(definition: &ProjectionDefinition) -> Vec<(String, String)> {
    let datum = match definition.datum() {
        DatumKind::Sphere => "D_Sphere (R = 6,371,000 m)",
        DatumKind::Wgs84 => "D_WGS_1984",
    };

    let mut rows = vec![
        (
            "Projection Name".to_string(),
            definition.canonical_name().into_owned(),
        ),
        ("Datum".to_string(), datum.to_string()),
        (
            "Projection Method".to_string(),
            definition.name().to_string(),
        ),
    ];
    rows.extend(definition.parameters().iter().map(|p| {
        (
            parameters::humanize(p.name()),
            format!("{}{}", format_number(p.value()), parameter_suffix(p.name())),
        )
    }));
    rows.push(("Linear Unit".to_string(), "Meter (1.0)".to_string()));

    rows
}
