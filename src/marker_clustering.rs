// Cluster aggregation: partition, bucket, emit
//
// One clustering pass is pure and synchronous; it is re-run in full on every
// viewport or zoom change. Records whose address resolves to no catalog
// region are silently left out of the output. That is policy, not a bug:
// the only failure mode here is under-clustering.

use crate::StoreRecord;
use crate::address_resolution::{coarse_region, fine_region};
use crate::region_catalog::{GYEONGGI_KEY, Region, SEOUL_KEY, metro_regions, national_regions};
use crate::zoom_tier::ZoomTier;
use ahash::AHashMap;
use compact_str::CompactString;
use geo_types::Point;
use itertools::{Either, Itertools};

/// Immutable cluster output consumed by the marker-rendering layer.
/// The anchor is the catalog region's curated point, never a centroid of
/// the members, so markers do not jitter across repeated zooms.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClusterMarkerData {
    pub display_name: CompactString,
    pub anchor: Point<f64>,
    pub count: usize,
}

/// Per-call mutable bucket for one catalog region. Pre-seeded with count 0
/// so empty regions can be filtered cheaply at emit time, appended to while
/// bucketing, converted to `ClusterMarkerData` at the end, then dropped.
struct ClusterAccumulator<'a> {
    region: &'a Region,
    members: Vec<&'a StoreRecord>,
    count: usize,
    // seam for per-call anchor overrides; nothing sets it today
    override_anchor: Option<Point<f64>>,
}

impl<'a> ClusterAccumulator<'a> {
    fn seeded(region: &'a Region) -> ClusterAccumulator<'a> {
        ClusterAccumulator {
            region,
            members: Vec::new(),
            count: 0,
            override_anchor: None,
        }
    }

    fn append(&mut self, record: &'a StoreRecord) {
        self.members.push(record);
        self.count += 1;
    }

    fn into_marker_data(self) -> ClusterMarkerData {
        debug_assert_eq!(self.count, self.members.len());
        ClusterMarkerData {
            display_name: self.region.name.clone(),
            anchor: self.override_anchor.unwrap_or(self.region.anchor),
            count: self.count,
        }
    }
}

/// Groups records into named clusters for the given zoom.
///
/// Seoul/Gyeonggi records are bucketed at district granularity while the
/// rest of the country is bucketed at metropolitan/province granularity,
/// side by side, whatever the (clustering) tier. Only `Detailed` differs:
/// it short-circuits to an empty list so the host renders raw markers.
pub fn cluster_records(records: &[StoreRecord], zoom: f64) -> Vec<ClusterMarkerData> {
    let tier = ZoomTier::from_zoom(zoom);
    if !tier.clusters() {
        return Vec::new();
    }

    let (metro, rest): (Vec<&StoreRecord>, Vec<&StoreRecord>) =
        records.iter().partition_map(|record| {
            match coarse_region(&record.address) {
                SEOUL_KEY | GYEONGGI_KEY => Either::Left(record),
                _ => Either::Right(record),
            }
        });

    tracing::debug!(
        metro = metro.len(),
        rest = rest.len(),
        ?tier,
        "partitioned records for clustering"
    );

    let mut clusters = bucket(&metro, metro_regions(), |record| {
        fine_region(&record.address, metro_regions())
    });
    clusters.extend(bucket(&rest, national_regions(), |record| {
        fine_region(coarse_region(&record.address), national_regions())
    }));
    clusters
}

/// Buckets one partition into its catalog. Accumulators live in a flat
/// array addressed through a region-name index map, keeping the catalog
/// itself untouched and shareable across concurrent calls.
fn bucket<'a>(
    records: &[&'a StoreRecord],
    catalog: &'a [Region],
    resolve: impl Fn(&StoreRecord) -> Option<&'a Region>,
) -> Vec<ClusterMarkerData> {
    let mut accumulators: Vec<ClusterAccumulator> =
        catalog.iter().map(ClusterAccumulator::seeded).collect();
    let index: AHashMap<&str, usize> = catalog
        .iter()
        .enumerate()
        .map(|(i, r)| (r.name.as_str(), i))
        .collect();

    for &record in records {
        match resolve(record).and_then(|r| index.get(r.name.as_str())) {
            Some(&i) => accumulators[i].append(record),
            None => {
                tracing::debug!(id = %record.id, "address matched no catalog region, dropped");
            }
        }
    }

    accumulators
        .into_iter()
        .filter(|acc| acc.count > 0)
        .map(ClusterAccumulator::into_marker_data)
        .collect()
}
