use crate::definition::{DatumKind, ProjectionDefinition};
use crate::format::{format_number, Layout};

struct GeogCs {
    name: &'static str,
    datum: &'static str,
    spheroid: &'static str,
    semimajor: &'static str,
    inv_flattening: &'static str,
}

const SPHERE_GEOGCS: GeogCs = GeogCs {
    name: "GCS_Sphere",
    datum: "D_Sphere",
    spheroid: "Sphere",
    semimajor: "6371000.0",
    inv_flattening: "0.0",
};

const WGS84_GEOGCS: GeogCs = GeogCs {
    name: "GCS_WGS_1984",
    datum: "D_WGS_1984",
    spheroid: "WGS_1984",
    semimajor: "6378137.0",
    inv_flattening: "298.257223563",
};

fn geogcs(datum: DatumKind) -> &'static GeogCs {
    match datum {
        DatumKind::Sphere => &SPHERE_GEOGCS,
        DatumKind::Wgs84 => &WGS84_GEOGCS,
    }
}

/// OGC WKT-1 (`PROJCS[...]`) encoding.
///
/// Parameters are written in the declared order without units; the geographic CRS is
/// selected by the datum.
pub fn wkt1(definition: &ProjectionDefinition, layout: Layout) -> String {
    let name = definition.canonical_name();
    let gcs = geogcs(definition.datum());
    let sep = layout.sep();
    let (l0, l1, l2, l3) = (layout.line(0), layout.line(1), layout.line(2), layout.line(3));

    let parameters: Vec<String> = definition
        .parameters()
        .iter()
        .map(|p| {
            format!(
                "{l1}PARAMETER[\"{}\",{sep}{}]",
                p.name(),
                format_number(p.value())
            )
        })
        .collect();

    format!(
        "PROJCS[\"{name}\",{l1}GEOGCS[\"{gcs_name}\",{l2}DATUM[\"{datum}\",{l3}SPHEROID[\"{spheroid}\",{sep}{a},{sep}{rf}]{l2}],{l2}PRIMEM[\"Greenwich\",{sep}0.0],{l2}UNIT[\"Degree\",{sep}0.0174532925199433]{l1}],{l1}PROJECTION[\"{name}\"],{parameters},{l1}UNIT[\"Meter\",{sep}1.0]{l0}]",
        gcs_name = gcs.name,
        datum = gcs.datum,
        spheroid = gcs.spheroid,
        a = gcs.semimajor,
        rf = gcs.inv_flattening,
        parameters = parameters.join(","),
    )
}
