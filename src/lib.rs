// Storepin clustering engine
// Groups storefront records into named geographic clusters for map rendering

#![deny(
    clippy::mutable_key_type,
    clippy::map_entry,
    clippy::boxed_local,
    clippy::let_unit_value,
    clippy::redundant_allocation,
    clippy::bool_comparison,
    clippy::bind_instead_of_map,
    clippy::vec_box,
    clippy::while_let_loop,
    clippy::useless_asref,
    clippy::repeat_once,
    clippy::deref_addrof,
    clippy::suspicious_map,
    clippy::single_char_pattern,
    clippy::for_kv_map,
    clippy::let_and_return,
    clippy::iter_nth,
    clippy::iter_cloned_collect,
    clippy::cmp_owned,
    clippy::op_ref
)]

#[macro_use]
extern crate serde;

pub mod address_resolution;
pub mod marker_clustering;
pub mod region_catalog;
pub mod zoom_tier;

use compact_str::CompactString;
use geo_types::Point;

pub const WGS_84_SRID: u32 = 4326;

/// A single storefront as delivered by the repository layer.
/// The clustering engine never mutates these; addresses are free text
/// exactly as entered upstream.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoreRecord {
    pub id: CompactString,
    pub address: String,
    pub coordinate: Point<f64>,
}
