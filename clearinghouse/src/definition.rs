//! Authority-agnostic description of a projection: its identity, reference surface, ordered
//! parameters and descriptive metadata.
//!
//! Definitions of the built-in [catalog](crate::catalog) are `static` values. Definitions
//! coming from elsewhere are created with [`ProjectionDefinitionBuilder`], which validates
//! them.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use clearinghouse_types::geo::{Datum, ProjectionFamily};
use serde::Serialize;

use crate::error::{ClearinghouseError, Result};

/// Reference surface a projection is defined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DatumKind {
    /// Sphere with the radius of 6 371 000 m.
    Sphere,
    /// WGS 84 ellipsoid.
    Wgs84,
}

impl DatumKind {
    /// Numeric parameters of the surface.
    pub fn datum(&self) -> Datum {
        match self {
            DatumKind::Sphere => Datum::SPHERE,
            DatumKind::Wgs84 => Datum::WGS84,
        }
    }
}

/// Named projection parameter, e.g. `Central_Meridian = 0`.
///
/// Angular values are in degrees, linear values in metres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: Cow<'static, str>,
    value: f64,
}

impl Parameter {
    /// Creates a new parameter.
    pub const fn new(name: &'static str, value: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value,
        }
    }

    /// Creates a parameter with a name built at runtime.
    pub fn owned(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            value,
        }
    }

    /// Parameter name, e.g. `False_Easting`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Parameters used when a definition does not list any.
pub static DEFAULT_PARAMETERS: [Parameter; 3] = [
    Parameter::new("Central_Meridian", 0.0),
    Parameter::new("False_Easting", 0.0),
    Parameter::new("False_Northing", 0.0),
];

/// Geometric class of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Classification {
    Azimuthal,
    Compromise,
    Conformal,
    Conic,
    Cylindrical,
    Globular,
    Polyconic,
    Pseudoconical,
    Pseudocylindrical,
}

impl Classification {
    /// Lowercase name of the class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Azimuthal => "azimuthal",
            Classification::Compromise => "compromise",
            Classification::Conformal => "conformal",
            Classification::Conic => "conic",
            Classification::Cylindrical => "cylindrical",
            Classification::Globular => "globular",
            Classification::Polyconic => "polyconic",
            Classification::Pseudoconical => "pseudoconical",
            Classification::Pseudocylindrical => "pseudocylindrical",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric properties a projection preserves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Properties {
    pub conformal: bool,
    pub equal_area: bool,
    pub equidistant: bool,
    pub compromise: bool,
    /// The projection shows one hemisphere at a time.
    pub hemisphere: bool,
}

/// Code of a projection in an external registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authority {
    /// Registry name: `ESRI`, `EPSG` or `PROJ`.
    pub authority: &'static str,
    /// Code inside the registry.
    pub code: AuthorityCode,
}

/// Registry code. Numeric for ESRI and EPSG, textual for PROJ aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum AuthorityCode {
    Number(u32),
    Text(String),
}

/// Description of one projection of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionDefinition {
    pub(crate) id: Cow<'static, str>,
    pub(crate) name: Cow<'static, str>,
    pub(crate) canonical_name: Option<Cow<'static, str>>,
    pub(crate) datum: DatumKind,
    pub(crate) parameters: Cow<'static, [Parameter]>,
    pub(crate) proj_alias: Option<Cow<'static, str>>,
    pub(crate) esri_wkid: Option<u32>,
    pub(crate) epsg: Option<u32>,
    pub(crate) classification: Cow<'static, [Classification]>,
    pub(crate) properties: Properties,
    pub(crate) inventor: Option<Cow<'static, str>>,
    pub(crate) year: Option<i32>,
    pub(crate) wiki_url: Option<Cow<'static, str>>,
    pub(crate) proj_url: Option<Cow<'static, str>>,
    pub(crate) family: Option<ProjectionFamily>,
}

impl ProjectionDefinition {
    /// Starts building a definition with the given id and display name.
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> ProjectionDefinitionBuilder {
        ProjectionDefinitionBuilder::new(id, name)
    }

    /// Stable lowercase-hyphenated identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used in `PROJCS` and `PROJECTION` clauses of WKT-1. Unless set explicitly, this is
    /// the display name with spaces replaced by underscores.
    pub fn canonical_name(&self) -> Cow<'_, str> {
        match &self.canonical_name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.name.replace(' ', "_")),
        }
    }

    /// Reference surface.
    pub fn datum(&self) -> DatumKind {
        self.datum
    }

    /// Parameters as declared. Can be empty.
    pub fn declared_parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Parameters to encode: the declared ones, or [`DEFAULT_PARAMETERS`] if none are declared.
    pub fn parameters(&self) -> &[Parameter] {
        if self.parameters.is_empty() {
            &DEFAULT_PARAMETERS
        } else {
            &self.parameters
        }
    }

    /// Value of the named parameter.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters()
            .iter()
            .find(|p| p.name() == name)
            .map(Parameter::value)
    }

    /// Central meridian in degrees. Zero if the definition does not set it.
    pub fn central_meridian(&self) -> f64 {
        self.parameter("Central_Meridian").unwrap_or(0.0)
    }

    /// PROJ transform-family code, e.g. `robin`.
    pub fn proj_alias(&self) -> Option<&str> {
        self.proj_alias.as_deref()
    }

    /// Well-known id in the ESRI projection engine.
    pub fn esri_wkid(&self) -> Option<u32> {
        self.esri_wkid
    }

    /// Code in the EPSG dataset.
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// Registry entry of the projection: ESRI if registered there, EPSG otherwise.
    pub fn registry_authority(&self) -> Option<Authority> {
        if let Some(wkid) = self.esri_wkid {
            return Some(Authority {
                authority: "ESRI",
                code: AuthorityCode::Number(wkid),
            });
        }

        self.epsg.map(|code| Authority {
            authority: "EPSG",
            code: AuthorityCode::Number(code),
        })
    }

    /// Primary identifier: the registry entry, or the PROJ alias (`custom` if there is none).
    pub fn primary_authority(&self) -> Authority {
        self.registry_authority().unwrap_or_else(|| Authority {
            authority: "PROJ",
            code: AuthorityCode::Text(self.proj_alias().unwrap_or("custom").to_string()),
        })
    }

    /// Geometric classes of the projection.
    pub fn classification(&self) -> &[Classification] {
        &self.classification
    }

    /// Preserved properties.
    pub fn properties(&self) -> Properties {
        self.properties
    }

    /// Inventor of the projection.
    pub fn inventor(&self) -> Option<&str> {
        self.inventor.as_deref()
    }

    /// Year of invention. Negative values are years BCE.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Year of invention as `1963 CE` or `150 BCE`.
    pub fn era(&self) -> Option<String> {
        self.year.map(|year| {
            if year < 0 {
                format!("{} BCE", year.unsigned_abs())
            } else {
                format!("{year} CE")
            }
        })
    }

    /// Wikipedia article.
    pub fn wiki_url(&self) -> Option<&str> {
        self.wiki_url.as_deref()
    }

    /// PROJ documentation page.
    pub fn proj_url(&self) -> Option<&str> {
        self.proj_url.as_deref()
    }

    /// Forward transform family, if the projection can be evaluated numerically.
    pub fn family(&self) -> Option<ProjectionFamily> {
        self.family
    }
}

/// Builder of validated [`ProjectionDefinition`]s.
///
/// ```
/// use clearinghouse::definition::{DatumKind, ProjectionDefinition};
///
/// let definition = ProjectionDefinition::builder("winkel-tripel", "Winkel Tripel")
///     .with_datum(DatumKind::Wgs84)
///     .with_parameter("Central_Meridian", 0.0)
///     .with_parameter("Standard_Parallel_1", 50.467)
///     .with_proj_alias("wintri")
///     .build()
///     .expect("valid definition");
///
/// assert_eq!(definition.canonical_name(), "Winkel_Tripel");
/// ```
#[derive(Debug, Clone)]
pub struct ProjectionDefinitionBuilder {
    id: String,
    name: String,
    canonical_name: Option<String>,
    datum: Option<DatumKind>,
    parameters: Vec<Parameter>,
    proj_alias: Option<String>,
    esri_wkid: Option<u32>,
    epsg: Option<u32>,
    classification: Vec<Classification>,
    properties: Properties,
    inventor: Option<String>,
    year: Option<i32>,
    wiki_url: Option<String>,
    proj_url: Option<String>,
    family: Option<ProjectionFamily>,
}

impl ProjectionDefinitionBuilder {
    /// Creates a builder with the given id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            canonical_name: None,
            datum: None,
            parameters: Vec::new(),
            proj_alias: None,
            esri_wkid: None,
            epsg: None,
            classification: Vec::new(),
            properties: Properties::default(),
            inventor: None,
            year: None,
            wiki_url: None,
            proj_url: None,
            family: None,
        }
    }

    /// Sets the name used in WKT-1 clauses.
    pub fn with_canonical_name(mut self, name: impl Into<String>) -> Self {
        self.canonical_name = Some(name.into());
        self
    }

    /// Sets the reference surface. Required.
    pub fn with_datum(mut self, datum: DatumKind) -> Self {
        self.datum = Some(datum);
        self
    }

    /// Appends a parameter. The order of calls is the order of encoding.
    ///
    /// If any parameters are set, `Central_Meridian`, `False_Easting` and `False_Northing` that
    /// were not set are added in front of them with the value of 0.
    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.push(Parameter::owned(name, value));
        self
    }

    /// Sets the PROJ transform-family code.
    pub fn with_proj_alias(mut self, alias: impl Into<String>) -> Self {
        self.proj_alias = Some(alias.into());
        self
    }

    /// Sets the ESRI well-known id.
    pub fn with_esri_wkid(mut self, wkid: u32) -> Self {
        self.esri_wkid = Some(wkid);
        self
    }

    /// Sets the EPSG code.
    pub fn with_epsg(mut self, code: u32) -> Self {
        self.epsg = Some(code);
        self
    }

    /// Appends a geometric class.
    pub fn with_classification(mut self, class: Classification) -> Self {
        if !self.classification.contains(&class) {
            self.classification.push(class);
        }
        self
    }

    /// Sets preserved properties.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Sets the inventor and the year of invention (negative for BCE).
    pub fn with_origin(mut self, inventor: impl Into<String>, year: i32) -> Self {
        self.inventor = Some(inventor.into());
        self.year = Some(year);
        self
    }

    /// Sets the Wikipedia article.
    pub fn with_wiki_url(mut self, url: impl Into<String>) -> Self {
        self.wiki_url = Some(url.into());
        self
    }

    /// Sets the PROJ documentation page.
    pub fn with_proj_url(mut self, url: impl Into<String>) -> Self {
        self.proj_url = Some(url.into());
        self
    }

    /// Links the definition to a forward transform implementation.
    pub fn with_family(mut self, family: ProjectionFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Validates the collected values and builds the definition.
    ///
    /// Fails if the id is not lowercase-hyphenated, the name is blank, the datum is not set, a
    /// name contains a double quote or a parameter value is not finite.
    pub fn build(self) -> Result<ProjectionDefinition> {
        let Self {
            id,
            name,
            canonical_name,
            datum,
            parameters,
            proj_alias,
            esri_wkid,
            epsg,
            classification,
            properties,
            inventor,
            year,
            wiki_url,
            proj_url,
            family,
        } = self;

        if !is_valid_id(&id) {
            return Err(ClearinghouseError::Configuration(format!(
                "invalid projection id {id:?}: expected lowercase words separated by hyphens"
            )));
        }

        if name.trim().is_empty() {
            return Err(ClearinghouseError::Configuration(format!(
                "projection {id} has an empty name"
            )));
        }

        let Some(datum) = datum else {
            return Err(ClearinghouseError::Configuration(format!(
                "projection {id} has no datum"
            )));
        };

        // Names are written between double quotes in WKT.
        for text in std::iter::once(name.as_str())
            .chain(canonical_name.as_deref())
            .chain(parameters.iter().map(Parameter::name))
        {
            if text.contains('"') {
                return Err(ClearinghouseError::Configuration(format!(
                    "name {text:?} of projection {id} contains a double quote"
                )));
            }
        }

        for parameter in &parameters {
            if parameter.name().trim().is_empty() {
                return Err(ClearinghouseError::Configuration(format!(
                    "projection {id} has a parameter without a name"
                )));
            }

            if !parameter.value().is_finite() {
                return Err(ClearinghouseError::Configuration(format!(
                    "parameter {} of projection {id} is not a finite number",
                    parameter.name()
                )));
            }
        }

        if let Some(alias) = &proj_alias {
            if alias.is_empty() || alias.contains(char::is_whitespace) {
                return Err(ClearinghouseError::Configuration(format!(
                    "invalid PROJ alias {alias:?} of projection {id}"
                )));
            }
        }

        let parameters = with_required_parameters(&id, parameters);

        Ok(ProjectionDefinition {
            id: Cow::Owned(id),
            name: Cow::Owned(name),
            canonical_name: canonical_name.map(Cow::Owned),
            datum,
            parameters: Cow::Owned(parameters),
            proj_alias: proj_alias.map(Cow::Owned),
            esri_wkid,
            epsg,
            classification: Cow::Owned(classification),
            properties,
            inventor: inventor.map(Cow::Owned),
            year,
            wiki_url: wiki_url.map(Cow::Owned),
            proj_url: proj_url.map(Cow::Owned),
            family,
        })
    }
}

/// Prepends the [`DEFAULT_PARAMETERS`] missing from a non-empty parameter list. An empty list is
/// kept empty, encoders fall back to the defaults for it.
fn with_required_parameters(id: &str, parameters: Vec<Parameter>) -> Vec<Parameter> {
    if parameters.is_empty() {
        return parameters;
    }

    let mut completed: Vec<Parameter> = DEFAULT_PARAMETERS
        .iter()
        .filter(|required| parameters.iter().all(|p| p.name() != required.name()))
        .cloned()
        .collect();
    if !completed.is_empty() {
        log::debug!(
            "Projection {id} does not declare {} parameters, using 0",
            completed.len()
        );
    }

    completed.extend(parameters);
    completed
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.split('-').all(|word| {
            !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use insta::assert_compact_debug_snapshot;

    use super::*;

    fn builder() -> ProjectionDefinitionBuilder {
        ProjectionDefinition::builder("test-projection", "Test Projection")
            .with_datum(DatumKind::Sphere)
    }

    #[test]
    fn build_requires_datum() {
        let result = ProjectionDefinition::builder("no-datum", "No Datum").build();
        assert_compact_debug_snapshot!(result, @r#"Err(Configuration("projection no-datum has no datum"))"#);
    }

    #[test]
    fn build_rejects_malformed_ids() {
        for id in ["", "Upper", "two  words", "trailing-", "-leading", "double--hyphen", "snake_case"] {
            let result = ProjectionDefinition::builder(id, "Name")
                .with_datum(DatumKind::Sphere)
                .build();
            assert_matches!(result, Err(ClearinghouseError::Configuration(_)), "{id:?}");
        }
    }

    #[test]
    fn build_rejects_non_finite_parameters() {
        let result = builder().with_parameter("False_Easting", f64::NAN).build();
        assert_compact_debug_snapshot!(result, @r#"Err(Configuration("parameter False_Easting of projection test-projection is not a finite number"))"#);
    }

    #[test]
    fn build_rejects_blank_name_and_alias() {
        let result = ProjectionDefinition::builder("blank", "  ")
            .with_datum(DatumKind::Sphere)
            .build();
        assert_matches!(result, Err(ClearinghouseError::Configuration(_)));

        let result = builder().with_proj_alias("two words").build();
        assert_matches!(result, Err(ClearinghouseError::Configuration(_)));
    }

    #[test]
    fn canonical_name_defaults_to_underscored_name() {
        let definition = builder().build().unwrap();
        assert_eq!(definition.canonical_name(), "Test_Projection");

        let definition = builder().with_canonical_name("Custom").build().unwrap();
        assert_eq!(definition.canonical_name(), "Custom");
    }

    #[test]
    fn empty_parameters_fall_back_to_defaults() {
        let definition = builder().build().unwrap();
        assert!(definition.declared_parameters().is_empty());
        assert_eq!(definition.parameters(), &DEFAULT_PARAMETERS);
        assert_eq!(definition.central_meridian(), 0.0);
    }

    #[test]
    fn parameter_lookup() {
        let definition = builder()
            .with_parameter("Central_Meridian", -96.0)
            .with_parameter("Standard_Parallel_1", 33.0)
            .build()
            .unwrap();
        assert_eq!(definition.central_meridian(), -96.0);
        assert_eq!(definition.parameter("Standard_Parallel_1"), Some(33.0));
        assert_eq!(definition.parameter("Scale_Factor"), None);
    }

    #[test]
    fn build_rejects_double_quotes_in_names() {
        let result = ProjectionDefinition::builder("quoted", "Bad \"Name\"")
            .with_datum(DatumKind::Sphere)
            .build();
        assert_compact_debug_snapshot!(result, @r#"Err(Configuration("name \"Bad \\\"Name\\\"\" of projection quoted contains a double quote"))"#);

        let result = builder().with_canonical_name("Bad\"Canonical").build();
        assert_matches!(result, Err(ClearinghouseError::Configuration(_)));

        let result = builder().with_parameter("Azimuth\"", 1.0).build();
        assert_matches!(result, Err(ClearinghouseError::Configuration(_)));
    }

    #[test]
    fn missing_origin_parameters_are_prepended() {
        let definition = builder()
            .with_parameter("Scale_Factor", 1.0)
            .with_parameter("False_Easting", 500_000.0)
            .build()
            .unwrap();
        let names: Vec<&str> = definition.parameters().iter().map(Parameter::name).collect();
        assert_compact_debug_snapshot!(names, @r#"["Central_Meridian", "False_Northing", "Scale_Factor", "False_Easting"]"#);
        assert_eq!(definition.parameter("False_Easting"), Some(500_000.0));
        assert_eq!(definition.parameter("False_Northing"), Some(0.0));
    }

    #[test]
    fn complete_parameters_keep_declared_order() {
        let definition = builder()
            .with_parameter("False_Northing", 10.0)
            .with_parameter("Central_Meridian", 20.0)
            .with_parameter("False_Easting", 30.0)
            .build()
            .unwrap();
        let names: Vec<&str> = definition.parameters().iter().map(Parameter::name).collect();
        assert_eq!(names, ["False_Northing", "Central_Meridian", "False_Easting"]);
    }

    #[test]
    fn registry_authority_prefers_esri() {
        let definition = builder().with_epsg(3395).with_esri_wkid(54004).build().unwrap();
        assert_compact_debug_snapshot!(definition.primary_authority(), @r#"Authority { authority: "ESRI", code: Number(54004) }"#);

        let definition = builder().with_epsg(3395).build().unwrap();
        assert_compact_debug_snapshot!(definition.primary_authority(), @r#"Authority { authority: "EPSG", code: Number(3395) }"#);

        let definition = builder().with_proj_alias("nicol").build().unwrap();
        assert_eq!(definition.registry_authority(), None);
        assert_compact_debug_snapshot!(definition.primary_authority(), @r#"Authority { authority: "PROJ", code: Text("nicol") }"#);

        let definition = builder().build().unwrap();
        assert_compact_debug_snapshot!(definition.primary_authority(), @r#"Authority { authority: "PROJ", code: Text("custom") }"#);
    }

    #[test]
    fn era() {
        let ancient = builder().with_origin("Hipparchus", -150).build().unwrap();
        assert_eq!(ancient.era().as_deref(), Some("150 BCE"));

        let modern = builder().with_origin("Robinson", 1963).build().unwrap();
        assert_eq!(modern.era().as_deref(), Some("1963 CE"));

        assert_eq!(builder().build().unwrap().era(), None);
    }
}
