//! Clearinghouse is a reference catalog of cartographic map projections. For every projection
//! it produces interoperable text descriptions of the coordinate reference system, and for some
//! of them it can also evaluate the forward transform from geographic to planar coordinates.
//!
//! # Quick start
//!
//! ```
//! use clearinghouse::format::FormatKey;
//! use clearinghouse::Registry;
//!
//! let registry = Registry::builtin();
//!
//! let wkt = registry.render("robinson", FormatKey::Wkt1).unwrap();
//! assert!(wkt.starts_with(r#"PROJCS["Robinson",GEOGCS["GCS_WGS_1984""#));
//!
//! let point = registry.project("robinson", 0.0, 0.0, 6_371_000.0).unwrap();
//! assert_eq!((point.x, point.y), (0.0, 0.0));
//! ```
//!
//! # Main components
//!
//! * [`ProjectionDefinition`](definition::ProjectionDefinition) describes a projection without
//!   committing to any encoding: datum, ordered parameters, registry codes and metadata. The
//!   built-in definitions live in the [`catalog`], custom ones are made with
//!   [`ProjectionDefinitionBuilder`](definition::ProjectionDefinitionBuilder).
//! * The [`format`] module turns a definition into WKT-1, WKT-2, ESRI WKT, a `.prj` file, a
//!   PROJ string or a JSON document. All encoders are pure functions.
//! * The forward transforms (Nicolosi Globular and Robinson) are implemented in
//!   [`clearinghouse_types`], see [`ProjectionFamily`](clearinghouse_types::geo::ProjectionFamily).
//! * [`Registry`] ties it together: it looks definitions up by id, retrieves their artifacts by
//!   [`FormatKey`](format::FormatKey) and forward-projects points.

pub mod catalog;
pub mod definition;
pub mod error;
pub mod format;
mod registry;

pub use clearinghouse_types;
pub use error::ClearinghouseError;
pub use registry::Registry;
