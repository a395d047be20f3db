use serde::Serialize;

use crate::definition::{Authority, Classification, DatumKind, ProjectionDefinition};
use crate::format::{parameters, proj_string};

/// Structured JSON description of a projected CRS, see [`json_document`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct JsonDocument<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub id: Authority,
    #[serde(rename = "baseGeographicCRS")]
    pub base_geographic_crs: BaseGeographicCrs,
    pub conversion: Conversion<'a>,
    pub coordinate_system: CoordinateSystem,
    pub proj_string: Option<String>,
    pub metadata: Metadata<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct BaseGeographicCrs {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub datum: JsonDatum,
    pub prime_meridian: PrimeMeridian,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct JsonDatum {
    pub name: &'static str,
    pub ellipsoid: Ellipsoid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Ellipsoid {
    pub name: &'static str,
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct PrimeMeridian {
    pub name: &'static str,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct Conversion<'a> {
    pub name: &'a str,
    pub method: Method<'a>,
    pub parameters: Vec<JsonParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Method<'a> {
    pub name: &'a str,
    pub proj_alias: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct JsonParameter {
    pub name: String,
    pub value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct CoordinateSystem {
    pub subtype: &'static str,
    pub axis: [Axis; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct Axis {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub direction: &'static str,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Metadata<'a> {
    pub inventor: Option<&'a str>,
    pub year_invented: Option<i32>,
    #[serde(rename = "esriWKID")]
    pub esri_wkid: Option<u32>,
    pub epsg: Option<u32>,
    pub classification: &'a [Classification],
    pub conformal: bool,
    pub equal_area: bool,
    pub equidistant: bool,
    pub compromise: bool,
    pub hemisphere: bool,
    pub proj_url: Option<&'a str>,
    pub wiki_url: Option<&'a str>,
}

fn base_geographic_crs(datum_kind: DatumKind) -> BaseGeographicCrs {
    let (name, datum_name, ellipsoid_name) = match datum_kind {
        DatumKind::Sphere => ("GCS Sphere", "Sphere", "Sphere"),
        DatumKind::Wgs84 => ("WGS 84", "World Geodetic System 1984", "WGS 84"),
    };
    let datum = datum_kind.datum();

    BaseGeographicCrs {
        kind: "GeographicCRS",
        name,
        datum: JsonDatum {
            name: datum_name,
            ellipsoid: Ellipsoid {
                name: ellipsoid_name,
                semi_major_axis: datum.semimajor(),
                inverse_flattening: datum.inv_flattening(),
            },
        },
        prime_meridian: PrimeMeridian {
            name: "Greenwich",
            longitude: 0.0,
        },
    }
}

const CARTESIAN_EN: CoordinateSystem = CoordinateSystem {
    subtype: "Cartesian",
    axis: [
        Axis {
            name: "Easting",
            abbreviation: "E",
            direction: "east",
            unit: "metre",
        },
        Axis {
            name: "Northing",
            abbreviation: "N",
            direction: "north",
            unit: "metre",
        },
    ],
};

/// Builds the JSON document of the definition.
pub fn json_document(definition: &ProjectionDefinition) -> JsonDocument<'_> {
    let properties = definition.properties();

    JsonDocument {
        kind: "ProjectedCRS",
        name: definition.name(),
        id: definition.primary_authority(),
        base_geographic_crs: base_geographic_crs(definition.datum()),
        conversion: Conversion {
            name: definition.name(),
            method: Method {
                name: definition.name(),
                proj_alias: definition.proj_alias(),
            },
            parameters: definition
                .parameters()
                .iter()
                .map(|p| JsonParameter {
                    name: parameters::humanize(p.name()),
                    value: p.value(),
                    unit: parameters::unit_kind(p.name()).name(),
                })
                .collect(),
        },
        coordinate_system: CARTESIAN_EN,
        proj_string: proj_string(definition),
        metadata: Metadata {
            inventor: definition.inventor(),
            year_invented: definition.year(),
            esri_wkid: definition.esri_wkid(),
            epsg: definition.epsg(),
            classification: definition.classification(),
            conformal: properties.conformal,
            equal_area: properties.equal_area,
            equidistant: properties.equidistant,
            compromise: properties.compromise,
            hemisphere: properties.hemisphere,
            proj_url: definition.proj_url(),
            wiki_url: definition.wiki_url(),
        },
    }
}

/// Pretty-printed JSON document of the definition.
pub fn json(definition: &ProjectionDefinition) -> String {
    // All maps of the document have string keys and all numbers are finite.
    serde_json::to_string_pretty(&json_document(definition))
        .expect("failed to serialize projection JSON document")
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::catalog::{FOURNIER_GLOBULAR_I, MERCATOR, NICOLOSI_GLOBULAR, TRANSVERSE_MERCATOR};

    fn parse(definition: &ProjectionDefinition) -> Value {
        serde_json::from_str(&super::json(definition)).unwrap()
    }

    #[test]
    fn key_order() {
        let text = super::json(&NICOLOSI_GLOBULAR);
        let keys = [
            "\"type\"",
            "\"name\"",
            "\"id\"",
            "\"baseGeographicCRS\"",
            "\"conversion\"",
            "\"coordinateSystem\"",
            "\"projString\"",
            "\"metadata\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn projection_without_registry_code() {
        let value = parse(&NICOLOSI_GLOBULAR);
        assert_eq!(value["type"], "ProjectedCRS");
        assert_eq!(value["id"], json!({"authority": "PROJ", "code": "nicol"}));
        assert_eq!(
            value["baseGeographicCRS"]["datum"]["ellipsoid"]["semiMajorAxis"],
            6371000.0
        );
        assert_eq!(value["conversion"]["method"]["projAlias"], "nicol");
        assert_eq!(
            value["projString"],
            "+proj=nicol +lon_0=0 +x_0=0 +y_0=0 +R=6371000 +units=m +no_defs"
        );
        assert_eq!(value["metadata"]["yearInvented"], 1000);
        assert_eq!(value["metadata"]["esriWKID"], Value::Null);
        assert_eq!(
            value["metadata"]["classification"],
            json!(["globular", "pseudoconical", "compromise"])
        );
        assert_eq!(value["metadata"]["hemisphere"], true);
    }

    #[test]
    fn registry_code_prefers_esri() {
        let value = parse(&MERCATOR);
        assert_eq!(value["id"], json!({"authority": "ESRI", "code": 54004}));
        assert_eq!(value["metadata"]["epsg"], 3395);
        assert_eq!(value["baseGeographicCRS"]["name"], "WGS 84");
    }

    #[test]
    fn parameters_are_humanized_with_units() {
        let value = parse(&TRANSVERSE_MERCATOR);
        assert_eq!(
            value["conversion"]["parameters"],
            json!([
                {"name": "False Easting", "value": 500000.0, "unit": "metre"},
                {"name": "False Northing", "value": 0.0, "unit": "metre"},
                {"name": "Central Meridian", "value": 0.0, "unit": "degree"},
                {"name": "Scale Factor", "value": 0.9996, "unit": "unity"},
                {"name": "Latitude Of Origin", "value": 0.0, "unit": "degree"},
            ])
        );
    }

    #[test]
    fn missing_alias_is_null() {
        let value = parse(&FOURNIER_GLOBULAR_I);
        assert_eq!(value["id"], json!({"authority": "PROJ", "code": "custom"}));
        assert_eq!(value["conversion"]["method"]["projAlias"], Value::Null);
        assert_eq!(value["projString"], Value::Null);
        assert_eq!(value["metadata"]["wikiUrl"], Value::Null);
        assert_eq!(value["conversion"]["parameters"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn ellipsoid_follows_datum() {
        let value = parse(&MERCATOR);
        let ellipsoid = &value["baseGeographicCRS"]["datum"]["ellipsoid"];
        assert_eq!(ellipsoid["semiMajorAxis"], 6378137.0);
        assert_eq!(ellipsoid["inverseFlattening"], 298.257223563);

        let value = parse(&NICOLOSI_GLOBULAR);
        let ellipsoid = &value["baseGeographicCRS"]["datum"]["ellipsoid"];
        assert_eq!(ellipsoid["inverseFlattening"], 0.0);
    }

    #[test]
    fn axes() {
        let value = parse(&NICOLOSI_GLOBULAR);
        let axes = value["coordinateSystem"]["axis"].as_array().unwrap();
        assert_eq!(axes[0]["direction"], "east");
        assert_eq!(axes[1]["direction"], "north");
    }
}
