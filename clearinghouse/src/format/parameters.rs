//! Lookup tables of the closed parameter vocabulary.

use std::fmt::{Display, Formatter};

use ahash::{HashMap, HashMapExt};
use lazy_static::lazy_static;

/// Unit family of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Degrees.
    Angle,
    /// Metres.
    Length,
    /// Dimensionless ratio.
    Scale,
}

impl UnitKind {
    /// Unit name used in WKT-2 and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Angle => "degree",
            UnitKind::Length => "metre",
            UnitKind::Scale => "unity",
        }
    }
}

impl Display for UnitKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How one parameter of the vocabulary is encoded in the different formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Name as used in WKT-1, e.g. `Central_Meridian`.
    pub name: &'static str,
    /// EPSG display name used in WKT-2.
    pub display_name: &'static str,
    /// EPSG parameter code.
    pub epsg_code: u32,
    /// Unit family.
    pub unit: UnitKind,
    /// Key of the PROJ string flag, e.g. `lon_0`.
    pub proj_flag: &'static str,
}

/// The closed parameter vocabulary.
pub static PARAMETER_TABLE: [ParameterSpec; 8] = [
    ParameterSpec {
        name: "Central_Meridian",
        display_name: "Longitude of natural origin",
        epsg_code: 8802,
        unit: UnitKind::Angle,
        proj_flag: "lon_0",
    },
    ParameterSpec {
        name: "False_Easting",
        display_name: "False easting",
        epsg_code: 8806,
        unit: UnitKind::Length,
        proj_flag: "x_0",
    },
    ParameterSpec {
        name: "False_Northing",
        display_name: "False northing",
        epsg_code: 8807,
        unit: UnitKind::Length,
        proj_flag: "y_0",
    },
    ParameterSpec {
        name: "Scale_Factor",
        display_name: "Scale factor at natural origin",
        epsg_code: 8805,
        unit: UnitKind::Scale,
        proj_flag: "k",
    },
    ParameterSpec {
        name: "Standard_Parallel_1",
        display_name: "Latitude of 1st standard parallel",
        epsg_code: 8823,
        unit: UnitKind::Angle,
        proj_flag: "lat_1",
    },
    ParameterSpec {
        name: "Standard_Parallel_2",
        display_name: "Latitude of 2nd standard parallel",
        epsg_code: 8824,
        unit: UnitKind::Angle,
        proj_flag: "lat_2",
    },
    ParameterSpec {
        name: "Latitude_Of_Origin",
        display_name: "Latitude of natural origin",
        epsg_code: 8801,
        unit: UnitKind::Angle,
        proj_flag: "lat_0",
    },
    ParameterSpec {
        name: "Latitude_Of_Center",
        display_name: "Latitude of projection centre",
        epsg_code: 8811,
        unit: UnitKind::Angle,
        proj_flag: "lat_0",
    },
];

lazy_static! {
    static ref PARAMETER_INDEX: HashMap<&'static str, &'static ParameterSpec> = {
        let mut index = HashMap::with_capacity(PARAMETER_TABLE.len());
        for spec in &PARAMETER_TABLE {
            index.insert(spec.name, spec);
        }
        index
    };
}

/// Encoding of a known parameter.
pub fn lookup(name: &str) -> Option<&'static ParameterSpec> {
    let spec = PARAMETER_INDEX.get(name).copied();
    if spec.is_none() {
        log::debug!("Parameter {name} is not in the vocabulary, using fallback encoding");
    }

    spec
}

/// Name with underscores replaced by spaces.
pub fn humanize(name: &str) -> String {
    name.replace('_', " ")
}

/// Display name of the parameter for WKT-2. Unknown parameters are humanized.
pub fn display_name(name: &str) -> String {
    match lookup(name) {
        Some(spec) => spec.display_name.to_string(),
        None => humanize(name),
    }
}

/// Unit family of the parameter. Unknown parameters are angular.
pub fn unit_kind(name: &str) -> UnitKind {
    lookup(name).map_or(UnitKind::Angle, |spec| spec.unit)
}

/// EPSG code of the parameter, if it is a standardized one.
pub fn epsg_code(name: &str) -> Option<u32> {
    lookup(name).map(|spec| spec.epsg_code)
}

/// Key of the PROJ flag. Unknown parameters use their lowercased name.
pub fn proj_flag(name: &str) -> String {
    match lookup(name) {
        Some(spec) => spec.proj_flag.to_string(),
        None => name.to_lowercase(),
    }
}
