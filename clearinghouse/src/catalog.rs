//! Built-in projection definitions.
//!
//! The catalog is immutable process-wide data. Use [`Registry::builtin`](crate::Registry::builtin)
//! to look definitions up by id.

use std::borrow::Cow;

use clearinghouse_types::geo::ProjectionFamily;

use crate::definition::{Classification, DatumKind, Parameter, ProjectionDefinition, Properties};

static ORIGIN_PARAMETERS: [Parameter; 3] = [
    Parameter::new("Central_Meridian", 0.0),
    Parameter::new("False_Easting", 0.0),
    Parameter::new("False_Northing", 0.0),
];

static WORLD_MERCATOR_PARAMETERS: [Parameter; 4] = [
    Parameter::new("False_Easting", 0.0),
    Parameter::new("False_Northing", 0.0),
    Parameter::new("Central_Meridian", 0.0),
    Parameter::new("Standard_Parallel_1", 0.0),
];

static TRANSVERSE_MERCATOR_PARAMETERS: [Parameter; 5] = [
    Parameter::new("False_Easting", 500_000.0),
    Parameter::new("False_Northing", 0.0),
    Parameter::new("Central_Meridian", 0.0),
    Parameter::new("Scale_Factor", 0.9996),
    Parameter::new("Latitude_Of_Origin", 0.0),
];

static CONTIGUOUS_USA_LCC_PARAMETERS: [Parameter; 6] = [
    Parameter::new("False_Easting", 0.0),
    Parameter::new("False_Northing", 0.0),
    Parameter::new("Central_Meridian", -96.0),
    Parameter::new("Standard_Parallel_1", 33.0),
    Parameter::new("Standard_Parallel_2", 45.0),
    Parameter::new("Latitude_Of_Origin", 39.0),
];

/// Nicolosi Globular. Not registered with ESRI or EPSG, available in PROJ as `nicol`.
pub static NICOLOSI_GLOBULAR: ProjectionDefinition = ProjectionDefinition {
    id: Cow::Borrowed("nicolosi-globular"),
    name: Cow::Borrowed("Nicolosi Globular"),
    canonical_name: None,
    datum: DatumKind::Sphere,
    parameters: Cow::Borrowed(&ORIGIN_PARAMETERS),
    proj_alias: Some(Cow::Borrowed("nicol")),
    esri_wkid: None,
    epsg: None,
    classification: Cow::Borrowed(&[
        Classification::Globular,
        Classification::Pseudoconical,
        Classification::Compromise,
    ]),
    properties: Properties {
        conformal: false,
        equal_area: false,
        equidistant: false,
        compromise: true,
        hemisphere: true,
    },
    inventor: Some(Cow::Borrowed(
        "Abū Rayḥān al-Bīrūnī (reinvented by Giovanni Battista Nicolosi, 1660)",
    )),
    year: Some(1000),
    wiki_url: Some(Cow::Borrowed(
        "https://en.wikipedia.org/wiki/Nicolosi_globular_projection",
    )),
    proj_url: Some(Cow::Borrowed(
        "https://proj.org/en/stable/operations/projections/nicol.html",
    )),
    family: Some(ProjectionFamily::NicolosiGlobular),
};

/// Robinson, registered by ESRI as World_Robinson (54030).
pub static ROBINSON: ProjectionDefinition = ProjectionDefinition {
    id: Cow::Borrowed("robinson"),
    name: Cow::Borrowed("Robinson"),
    canonical_name: None,
    datum: DatumKind::Wgs84,
    parameters: Cow::Borrowed(&ORIGIN_PARAMETERS),
    proj_alias: Some(Cow::Borrowed("robin")),
    esri_wkid: Some(54030),
    epsg: None,
    classification: Cow::Borrowed(&[
        Classification::Pseudocylindrical,
        Classification::Compromise,
    ]),
    properties: Properties {
        conformal: false,
        equal_area: false,
        equidistant: false,
        compromise: true,
        hemisphere: false,
    },
    inventor: Some(Cow::Borrowed("Arthur H. Robinson")),
    year: Some(1963),
    wiki_url: Some(Cow::Borrowed(
        "https://en.wikipedia.org/wiki/Robinson_projection",
    )),
    proj_url: Some(Cow::Borrowed(
        "https://proj.org/en/stable/operations/projections/robin.html",
    )),
    family: Some(ProjectionFamily::Robinson),
};

/// Mercator on WGS 84. Registered both by ESRI (54004) and EPSG (3395).
pub static MERCATOR: ProjectionDefinition = ProjectionDefinition {
    id: Cow::Borrowed("mercator"),
    name: Cow::Borrowed("Mercator"),
    canonical_name: None,
    datum: DatumKind::Wgs84,
    parameters: Cow::Borrowed(&WORLD_MERCATOR_PARAMETERS),
    proj_alias: Some(Cow::Borrowed("merc")),
    esri_wkid: Some(54004),
    epsg: Some(3395),
    classification: Cow::Borrowed(&[Classification::Cylindrical, Classification::Conformal]),
    properties: Properties {
        conformal: true,
        equal_area: false,
        equidistant: false,
        compromise: false,
        hemisphere: false,
    },
    inventor: Some(Cow::Borrowed("Gerardus Mercator")),
    year: Some(1569),
    wiki_url: Some(Cow::Borrowed(
        "https://en.wikipedia.org/wiki/Mercator_projection",
    )),
    proj_url: Some(Cow::Borrowed(
        "https://proj.org/en/stable/operations/projections/merc.html",
    )),
    family: None,
};

/// Transverse Mercator with UTM-like parameters.
pub static TRANSVERSE_MERCATOR: ProjectionDefinition = ProjectionDefinition {
    id: Cow::Borrowed("transverse-mercator"),
    name: Cow::Borrowed("Transverse Mercator"),
    canonical_name: None,
    datum: DatumKind::Wgs84,
    parameters: Cow::Borrowed(&TRANSVERSE_MERCATOR_PARAMETERS),
    proj_alias: Some(Cow::Borrowed("tmerc")),
    esri_wkid: None,
    epsg: None,
    classification: Cow::Borrowed(&[Classification::Cylindrical, Classification::Conformal]),
    properties: Properties {
        conformal: true,
        equal_area: false,
        equidistant: false,
        compromise: false,
        hemisphere: false,
    },
    inventor: Some(Cow::Borrowed("Johann Heinrich Lambert")),
    year: Some(1772),
    wiki_url: Some(Cow::Borrowed(
        "https://en.wikipedia.org/wiki/Transverse_Mercator_projection",
    )),
    proj_url: Some(Cow::Borrowed(
        "https://proj.org/en/stable/operations/projections/tmerc.html",
    )),
    family: None,
};

/// Lambert Conformal Conic as used for the contiguous USA (ESRI 102004).
pub static LAMBERT_CONFORMAL_CONIC: ProjectionDefinition = ProjectionDefinition {
    id: Cow::Borrowed("lambert-conformal-conic"),
    name: Cow::Borrowed("Lambert Conformal Conic"),
    canonical_name: None,
    datum: DatumKind::Wgs84,
    parameters: Cow::Borrowed(&CONTIGUOUS_USA_LCC_PARAMETERS),
    proj_alias: Some(Cow::Borrowed("lcc")),
    esri_wkid: Some(102004),
    epsg: None,
    classification: Cow::Borrowed(&[Classification::Conic, Classification::Conformal]),
    properties: Properties {
        conformal: true,
        equal_area: false,
        equidistant: false,
        compromise: false,
        hemisphere: false,
    },
    inventor: Some(Cow::Borrowed("Johann Heinrich Lambert")),
    year: Some(1772),
    wiki_url: Some(Cow::Borrowed(
        "https://en.wikipedia.org/wiki/Lambert_conformal_conic_projection",
    )),
    proj_url: Some(Cow::Borrowed(
        "https://proj.org/en/stable/operations/projections/lcc.html",
    )),
    family: None,
};

/// Fournier's first globular projection. Known to neither PROJ nor any registry.
pub static FOURNIER_GLOBULAR_I: ProjectionDefinition = ProjectionDefinition {
    id: Cow::Borrowed("fournier-globular-i"),
    name: Cow::Borrowed("Fournier Globular I"),
    canonical_name: None,
    datum: DatumKind::Sphere,
    parameters: Cow::Borrowed(&[]),
    proj_alias: None,
    esri_wkid: None,
    epsg: None,
    classification: Cow::Borrowed(&[
        Classification::Globular,
        Classification::Polyconic,
        Classification::Compromise,
    ]),
    properties: Properties {
        conformal: false,
        equal_area: false,
        equidistant: false,
        compromise: true,
        hemisphere: true,
    },
    inventor: Some(Cow::Borrowed("Georges Fournier")),
    year: Some(1643),
    wiki_url: None,
    proj_url: None,
    family: None,
};

/// All built-in definitions in catalog order.
pub static CATALOG: [&ProjectionDefinition; 6] = [
    &NICOLOSI_GLOBULAR,
    &ROBINSON,
    &MERCATOR,
    &TRANSVERSE_MERCATOR,
    &LAMBERT_CONFORMAL_CONIC,
    &FOURNIER_GLOBULAR_I,
];
