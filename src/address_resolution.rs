// Heuristic free-text address to catalog region resolution
//
// This is deliberately not a gazetteer. Real addresses can miss or collide;
// downstream behaviour (and tests) depend on the exact first-token /
// substring-containment semantics, so do not tighten the matching here.

use crate::region_catalog::{GYEONGGI_KEY, Region, SEOUL_KEY};

/// Extracts the coarse province/metro key from an address.
///
/// Looks only at the first whitespace-delimited token: anything containing
/// "서울" maps to the canonical Seoul key, anything containing "경기" to the
/// Gyeonggi key, everything else is returned verbatim. An address with no
/// tokens comes back unchanged.
pub fn coarse_region(address: &str) -> &str {
    match address.split_whitespace().next() {
        Some(first) if first.contains(SEOUL_KEY) => SEOUL_KEY,
        Some(first) if first.contains(GYEONGGI_KEY) => GYEONGGI_KEY,
        Some(first) => first,
        None => address,
    }
}

/// Finds the catalog region whose sub-region token appears in the address.
///
/// Candidates are scanned in catalog order and the first match wins; there
/// is no scoring or ranking. `None` means the record will not appear in any
/// cluster.
pub fn fine_region<'a>(address: &str, candidates: &'a [Region]) -> Option<&'a Region> {
    candidates.iter().find(|r| {
        r.sub_region_tokens
            .iter()
            .any(|token| address.contains(token.as_str()))
    })
}
