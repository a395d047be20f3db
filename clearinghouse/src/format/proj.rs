use crate::definition::{DatumKind, ProjectionDefinition};
use crate::format::{format_number, parameters};

/// PROJ command line string, e.g. `+proj=nicol +lon_0=0 +x_0=0 +y_0=0 +R=6371000 +units=m +no_defs`.
///
/// Returns `None` if the definition has no PROJ alias.
pub fn proj_string(definition: &ProjectionDefinition) -> Option<String> {
    let Some(alias) = definition.proj_alias() else {
        log::debug!("Projection {} has no PROJ alias", definition.id());
        return None;
    };

    let mut tokens = vec![format!("+proj={alias}")];
    tokens.extend(definition.parameters().iter().map(|p| {
        format!(
            "+{}={}",
            parameters::proj_flag(p.name()),
            format_number(p.value())
        )
    }));
    tokens.push(
        match definition.datum() {
            DatumKind::Sphere => "+R=6371000",
            DatumKind::Wgs84 => "+datum=WGS84",
        }
        .to_string(),
    );
    tokens.push("+units=m".to_string());
    tokens.push("+no_defs".to_string());

    Some(tokens.join(" "))
}

#[cfg(test)]
mod tests {
    use insta::assert_compact_debug_snapshot;

    use super::*;
    use crate::catalog::{
        FOURNIER_GLOBULAR_I, LAMBERT_CONFORMAL_CONIC, NICOLOSI_GLOBULAR, ROBINSON,
        TRANSVERSE_MERCATOR,
    };

    #[test]
    fn sphere() {
        assert_compact_debug_snapshot!(proj_string(&NICOLOSI_GLOBULAR), @r#"Some("+proj=nicol +lon_0=0 +x_0=0 +y_0=0 +R=6371000 +units=m +no_defs")"#);
    }

    #[test]
    fn wgs84() {
        assert_compact_debug_snapshot!(proj_string(&ROBINSON), @r#"Some("+proj=robin +lon_0=0 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs")"#);
        assert_compact_debug_snapshot!(proj_string(&LAMBERT_CONFORMAL_CONIC), @r#"Some("+proj=lcc +x_0=0 +y_0=0 +lon_0=-96 +lat_1=33 +lat_2=45 +lat_0=39 +datum=WGS84 +units=m +no_defs")"#);
        assert_compact_debug_snapshot!(proj_string(&TRANSVERSE_MERCATOR), @r#"Some("+proj=tmerc +x_0=500000 +y_0=0 +lon_0=0 +k=0.9996 +lat_0=0 +datum=WGS84 +units=m +no_defs")"#);
    }

    #[test]
    fn missing_alias() {
        assert_eq!(proj_string(&FOURNIER_GLOBULAR_I), None);
    }

    #[test]
    fn unknown_parameter_is_lowercased() {
        let definition = ProjectionDefinition::builder("oblique", "Oblique")
            .with_datum(DatumKind::Sphere)
            .with_parameter("Azimuth", 30.0)
            .with_proj_alias("omerc")
            .build()
            .unwrap();
        assert_compact_debug_snapshot!(proj_string(&definition), @r#"Some("+proj=omerc +lon_0=0 +x_0=0 +y_0=0 +azimuth=30 +R=6371000 +units=m +no_defs")"#);
    }

    #[test]
    fn tokens_are_well_formed() {
        let text = proj_string(&LAMBERT_CONFORMAL_CONIC).unwrap();
        assert!(text.ends_with(" +no_defs"));
        for token in text.split(' ') {
            assert!(token.starts_with('+'), "{token}");
            if token != "+no_defs" {
                assert_eq!(token.matches('=').count(), 1, "{token}");
            }
        }
    }
}
