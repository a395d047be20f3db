use ahash::{HashMap, HashMapExt};
use clearinghouse_types::cartesian::Point2d;
use clearinghouse_types::geo::impls::GeoPoint2d;
use clearinghouse_types::geo::{Datum, Projection, ProjectionFamily};
use lazy_static::lazy_static;

use crate::catalog::CATALOG;
use crate::definition::ProjectionDefinition;
use crate::error::{ClearinghouseError, Result};
use crate::format::{self, FormatKey};

lazy_static! {
    static ref BUILTIN: Registry = Registry::new(CATALOG.iter().map(|d| (*d).clone()))
        .unwrap_or_else(|err| {
            log::error!("Built-in catalog is not valid: {err}");
            Registry::default()
        });
}

/// Set of projection definitions with unique ids.
///
/// The registry is the entry point for retrieving the text artifacts of a projection by
/// [`FormatKey`] and for evaluating forward transforms of the projections that have one.
///
/// ```
/// use clearinghouse::format::FormatKey;
/// use clearinghouse::Registry;
///
/// let registry = Registry::builtin();
/// let proj = registry.render("nicolosi-globular", FormatKey::ProjString).unwrap();
/// assert_eq!(proj, "+proj=nicol +lon_0=0 +x_0=0 +y_0=0 +R=6371000 +units=m +no_defs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: Vec<ProjectionDefinition>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates a registry. Fails with [`ClearinghouseError::DuplicateId`] if two definitions
    /// share an id.
    pub fn new(definitions: impl IntoIterator<Item = ProjectionDefinition>) -> Result<Self> {
        let definitions: Vec<ProjectionDefinition> = definitions.into_iter().collect();
        let mut index = HashMap::with_capacity(definitions.len());
        for (i, definition) in definitions.iter().enumerate() {
            if index.insert(definition.id().to_string(), i).is_some() {
                return Err(ClearinghouseError::DuplicateId(definition.id().to_string()));
            }
        }

        Ok(Self { definitions, index })
    }

    /// Registry of the built-in [catalog](crate::catalog).
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Definition with the given id.
    pub fn get(&self, id: &str) -> Option<&ProjectionDefinition> {
        let definition = self.index.get(id).map(|&i| &self.definitions[i]);
        if definition.is_none() {
            log::debug!("Projection {id} is not registered");
        }

        definition
    }

    fn require(&self, id: &str) -> Result<&ProjectionDefinition> {
        self.get(id)
            .ok_or_else(|| ClearinghouseError::NotFound(id.to_string()))
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectionDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Forward transform family of the projection, if it can be evaluated.
    pub fn transform(&self, id: &str) -> Option<ProjectionFamily> {
        self.get(id).and_then(ProjectionDefinition::family)
    }

    /// Text artifact of the projection in the given format.
    pub fn render(&self, id: &str, key: FormatKey) -> Result<String> {
        let definition = self.require(id)?;
        format::render(definition, key).ok_or_else(|| ClearinghouseError::FormatUnavailable {
            id: id.to_string(),
            format: key,
        })
    }

    /// All artifacts of the projection in [`FormatKey::ALL`] order. Formats the projection
    /// cannot be expressed in are skipped.
    pub fn render_all(&self, id: &str) -> Result<Vec<(FormatKey, String)>> {
        let definition = self.require(id)?;
        Ok(FormatKey::ALL
            .into_iter()
            .filter_map(|key| format::render(definition, key).map(|text| (key, text)))
            .collect())
    }

    /// Projection of the definition on a sphere of the given radius, centered on the
    /// definition's central meridian.
    pub fn projection(
        &self,
        id: &str,
        radius: f64,
    ) -> Result<Box<dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>>> {
        let definition = self.require(id)?;
        let family = definition
            .family()
            .ok_or_else(|| ClearinghouseError::TransformUnavailable(id.to_string()))?;
        let datum = Datum::sphere(radius)?;

        Ok(family.get_projection(datum, definition.central_meridian()))
    }

    /// Forward-projects a point given in degrees onto a sphere of the given radius. The
    /// definition's central meridian is honoured.
    pub fn project(&self, id: &str, lat: f64, lon: f64, radius: f64) -> Result<Point2d> {
        let definition = self.require(id)?;
        let family = definition
            .family()
            .ok_or_else(|| ClearinghouseError::TransformUnavailable(id.to_string()))?;
        let datum = Datum::sphere(radius)?;

        log::debug!("Projecting ({lat}, {lon}) with {id}");
        Ok(family.forward(
            lat.to_radians(),
            lon.to_radians(),
            definition.central_meridian().to_radians(),
            datum.semimajor(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use clearinghouse_types::cartesian::CartesianPoint2d;
    use clearinghouse_types::latlon;
    use clearinghouse_types::ClearinghouseTypesError;
    use insta::assert_compact_debug_snapshot;

    use super::*;
    use crate::catalog::{NICOLOSI_GLOBULAR, ROBINSON};
    use crate::definition::DatumKind;

    #[test]
    fn builtin_contains_catalog() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), CATALOG.len());
        assert!(!registry.is_empty());
        let ids: Vec<&str> = registry.iter().map(|d| d.id()).collect();
        assert_compact_debug_snapshot!(ids, @r#"["nicolosi-globular", "robinson", "mercator", "transverse-mercator", "lambert-conformal-conic", "fournier-globular-i"]"#);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Registry::new([
            NICOLOSI_GLOBULAR.clone(),
            ROBINSON.clone(),
            NICOLOSI_GLOBULAR.clone(),
        ]);
        assert_compact_debug_snapshot!(result.map(|r| r.len()), @r#"Err(DuplicateId("nicolosi-globular"))"#);
    }

    #[test]
    fn lookup() {
        let registry = Registry::builtin();
        assert_eq!(registry.get("robinson"), Some(&ROBINSON));
        assert_eq!(registry.get("winkel-tripel"), None);
        assert_eq!(
            registry.transform("robinson"),
            Some(ProjectionFamily::Robinson)
        );
        assert_eq!(registry.transform("mercator"), None);
        assert_eq!(registry.transform("winkel-tripel"), None);
    }

    #[test]
    fn render_errors() {
        let registry = Registry::builtin();
        assert_compact_debug_snapshot!(registry.render("winkel-tripel", FormatKey::Wkt1), @r#"Err(NotFound("winkel-tripel"))"#);
        assert_compact_debug_snapshot!(registry.render("fournier-globular-i", FormatKey::ProjString), @r#"Err(FormatUnavailable { id: "fournier-globular-i", format: ProjString })"#);
    }

    #[test]
    fn render_all_skips_unavailable_formats() {
        let registry = Registry::builtin();

        let all = registry.render_all("nicolosi-globular").unwrap();
        assert_eq!(all.len(), FormatKey::ALL.len());

        let keys: Vec<FormatKey> = registry
            .render_all("fournier-globular-i")
            .unwrap()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys.len(), FormatKey::ALL.len() - 1);
        assert!(!keys.contains(&FormatKey::ProjString));
    }

    #[test]
    fn project_uses_family_and_central_meridian() {
        let definition = ProjectionDefinition::builder("shifted-robinson", "Shifted Robinson")
            .with_datum(DatumKind::Sphere)
            .with_parameter("Central_Meridian", 30.0)
            .with_family(ProjectionFamily::Robinson)
            .build()
            .unwrap();
        let registry = Registry::new([definition]).unwrap();

        let on_meridian = registry.project("shifted-robinson", 45.0, 30.0, 1.0).unwrap();
        assert_abs_diff_eq!(on_meridian.x(), 0.0);
        assert_abs_diff_eq!(on_meridian.y(), 1.3523 * 0.5571, epsilon = 1e-9);
    }

    #[test]
    fn project_equator_with_nicolosi() {
        let registry = Registry::builtin();
        let point = registry
            .project("nicolosi-globular", 0.0, 90.0, 6_371_000.0)
            .unwrap();
        assert_abs_diff_eq!(
            point.x(),
            6_371_000.0 * std::f64::consts::FRAC_PI_2,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(point.y(), 0.0);
    }

    #[test]
    fn project_errors() {
        let registry = Registry::builtin();
        assert_matches!(
            registry.project("mercator", 0.0, 0.0, 1.0),
            Err(ClearinghouseError::TransformUnavailable(_))
        );
        assert_matches!(
            registry.project("robinson", 0.0, 0.0, -1.0),
            Err(ClearinghouseError::Transform(ClearinghouseTypesError::InvalidRadius(_)))
        );
        assert_matches!(
            registry.project("winkel-tripel", 0.0, 0.0, 1.0),
            Err(ClearinghouseError::NotFound(_))
        );
    }

    #[test]
    fn boxed_projection_agrees_with_project() {
        let registry = Registry::builtin();
        let projection = registry.projection("robinson", 1000.0).unwrap();
        let projected = projection.project(&latlon!(-20.0, 75.0)).unwrap();
        let expected = registry.project("robinson", -20.0, 75.0, 1000.0).unwrap();
        assert_abs_diff_eq!(projected.x(), expected.x(), epsilon = 1e-9);
        assert_abs_diff_eq!(projected.y(), expected.y(), epsilon = 1e-9);
    }
}
