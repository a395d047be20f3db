use crate::definition::{DatumKind, Parameter, ProjectionDefinition};
use crate::format::parameters::{self, UnitKind};
use crate::format::{format_number, Layout};

struct BaseGeogCrs {
    name: &'static str,
    datum: &'static str,
    ellipsoid: &'static str,
    semimajor: &'static str,
    inv_flattening: &'static str,
    epsg: u32,
}

const SPHERE_BASE: BaseGeogCrs = BaseGeogCrs {
    name: "GCS Sphere",
    datum: "Sphere",
    ellipsoid: "Sphere",
    semimajor: "6371000",
    inv_flattening: "0",
    epsg: 4047,
};

const WGS84_BASE: BaseGeogCrs = BaseGeogCrs {
    name: "WGS 84",
    datum: "World Geodetic System 1984",
    ellipsoid: "WGS 84",
    semimajor: "6378137",
    inv_flattening: "298.257223563",
    epsg: 4326,
};

fn base_geog_crs(datum: DatumKind) -> &'static BaseGeogCrs {
    match datum {
        DatumKind::Sphere => &SPHERE_BASE,
        DatumKind::Wgs84 => &WGS84_BASE,
    }
}

fn unit_clause(unit: UnitKind, layout: Layout) -> String {
    let sep = layout.sep();
    match unit {
        UnitKind::Angle => format!("ANGLEUNIT[\"degree\",{sep}0.0174532925199433]"),
        UnitKind::Length => format!("LENGTHUNIT[\"metre\",{sep}1]"),
        UnitKind::Scale => format!("SCALEUNIT[\"unity\",{sep}1]"),
    }
}

fn parameter_clause(parameter: &Parameter, layout: Layout) -> String {
    let sep = layout.sep();
    let (l2, l3) = (layout.line(2), layout.line(3));
    let name = parameter.name();

    let mut clause = format!(
        "{l2}PARAMETER[\"{}\",{sep}{},{l3}{}",
        parameters::display_name(name),
        format_number(parameter.value()),
        unit_clause(parameters::unit_kind(name), layout),
    );
    if let Some(code) = parameters::epsg_code(name) {
        clause.push_str(&format!(",{l3}ID[\"EPSG\",{sep}{code}]"));
    }
    clause.push(']');

    clause
}

/// ISO 19162:2019 WKT-2 (`PROJCRS[...]`) encoding.
///
/// Every parameter carries its unit and, for the standardized ones, the EPSG parameter code.
/// The conversion method is identified by the PROJ alias, or `custom` if there is none.
pub fn wkt2(definition: &ProjectionDefinition, layout: Layout) -> String {
    let name = definition.name();
    let base = base_geog_crs(definition.datum());
    let alias = definition.proj_alias().unwrap_or("custom");
    let sep = layout.sep();
    let (l0, l1, l2, l3, l4) = (
        layout.line(0),
        layout.line(1),
        layout.line(2),
        layout.line(3),
        layout.line(4),
    );

    let parameters: Vec<String> = definition
        .parameters()
        .iter()
        .map(|p| parameter_clause(p, layout))
        .collect();

    let metre = unit_clause(UnitKind::Length, layout);
    let degree = unit_clause(UnitKind::Angle, layout);

    format!(
        "PROJCRS[\"{name}\",\
         {l1}BASEGEOGCRS[\"{base_name}\",\
         {l2}DATUM[\"{datum}\",\
         {l3}ELLIPSOID[\"{ellipsoid}\",{sep}{a},{sep}{rf},\
         {l4}{metre}]\
         {l2}],\
         {l2}PRIMEM[\"Greenwich\",{sep}0,\
         {l3}{degree}],\
         {l2}ID[\"EPSG\",{sep}{base_epsg}]\
         {l1}],\
         {l1}CONVERSION[\"{name}\",\
         {l2}METHOD[\"{name}\",\
         {l3}ID[\"PROJ\",{sep}\"{alias}\"]],\
         {parameters}\
         {l1}],\
         {l1}CS[Cartesian,{sep}2],\
         {l2}AXIS[\"(E)\",{sep}east,{l3}ORDER[1],{l3}{metre}],\
         {l2}AXIS[\"(N)\",{sep}north,{l3}ORDER[2],{l3}{metre}]\
         {l0}]",
        base_name = base.name,
        datum = base.datum,
        ellipsoid = base.ellipsoid,
        a = base.semimajor,
        rf = base.inv_flattening,
        base_epsg = base.epsg,
        parameters = parameters.join(","),
    )
}
