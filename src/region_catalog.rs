// Static region catalog for marker clustering
// Table ordering is load-bearing: address resolution is first-match, so the
// literal order below is the tie-break for ambiguous addresses.

use compact_str::CompactString;
use geo_types::Point;
use lazy_static::lazy_static;

/// Canonical coarse key for the Seoul metro group.
pub const SEOUL_KEY: &str = "서울";
/// Canonical coarse key for the Gyeonggi metro group.
pub const GYEONGGI_KEY: &str = "경기";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionTier {
    District,
    Metropolitan,
    Province,
}

/// One entry of the clustering catalog: a display name, the address
/// substrings that identify it, and a curated anchor coordinate.
///
/// Anchors are fixed, hand-picked points (roughly the district or city
/// office), never recomputed from cluster members, so markers stay put
/// across repeated zooms.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub name: CompactString,
    pub sub_region_tokens: Vec<CompactString>,
    pub anchor: Point<f64>,
    pub tier: RegionTier,
}

fn region(name: &str, tokens: &[&str], lat: f64, lon: f64, tier: RegionTier) -> Region {
    Region {
        name: CompactString::from(name),
        sub_region_tokens: tokens.iter().map(|t| CompactString::from(*t)).collect(),
        anchor: Point::new(lon, lat),
        tier,
    }
}

lazy_static! {
    /// The 25 Seoul districts, in administrative-code order.
    static ref SEOUL_DISTRICTS: Vec<Region> = {
        use RegionTier::District;
        vec![
            region("종로구", &["종로구", "종로"], 37.5735, 126.9790, District),
            // short stem "중" would swallow 중랑구 addresses, full name only
            region("중구", &["중구"], 37.5641, 126.9979, District),
            region("용산구", &["용산구", "용산"], 37.5326, 126.9905, District),
            region("성동구", &["성동구", "성동"], 37.5634, 127.0371, District),
            region("광진구", &["광진구", "광진"], 37.5385, 127.0823, District),
            region("동대문구", &["동대문구", "동대문"], 37.5744, 127.0396, District),
            region("중랑구", &["중랑구", "중랑"], 37.6066, 127.0927, District),
            region("성북구", &["성북구", "성북"], 37.5894, 127.0167, District),
            region("강북구", &["강북구", "강북"], 37.6396, 127.0257, District),
            region("도봉구", &["도봉구", "도봉"], 37.6688, 127.0471, District),
            region("노원구", &["노원구", "노원"], 37.6542, 127.0568, District),
            region("은평구", &["은평구", "은평"], 37.6027, 126.9291, District),
            region("서대문구", &["서대문구", "서대문"], 37.5791, 126.9368, District),
            region("마포구", &["마포구", "마포"], 37.5663, 126.9014, District),
            region("양천구", &["양천구", "양천"], 37.5170, 126.8664, District),
            region("강서구", &["강서구", "강서"], 37.5509, 126.8495, District),
            region("구로구", &["구로구", "구로"], 37.4954, 126.8874, District),
            region("금천구", &["금천구", "금천"], 37.4569, 126.8956, District),
            region("영등포구", &["영등포구", "영등포"], 37.5264, 126.8963, District),
            region("동작구", &["동작구", "동작"], 37.5124, 126.9393, District),
            region("관악구", &["관악구", "관악"], 37.4784, 126.9516, District),
            region("서초구", &["서초구", "서초"], 37.4837, 127.0324, District),
            region("강남구", &["강남구", "강남"], 37.5172, 127.0473, District),
            region("송파구", &["송파구", "송파"], 37.5145, 127.1059, District),
            region("강동구", &["강동구", "강동"], 37.5301, 127.1238, District),
        ]
    };

    /// Gyeonggi cities and counties. 남양주시 must stay ahead of 양주시:
    /// the "양주" stem is contained in 남양주 addresses.
    static ref GYEONGGI_CITIES: Vec<Region> = {
        use RegionTier::District;
        vec![
            region("수원시", &["수원시", "수원"], 37.2636, 127.0286, District),
            region("성남시", &["성남시", "성남"], 37.4201, 127.1262, District),
            region("고양시", &["고양시", "고양"], 37.6584, 126.8320, District),
            region("용인시", &["용인시", "용인"], 37.2411, 127.1776, District),
            region("부천시", &["부천시", "부천"], 37.5034, 126.7660, District),
            region("안산시", &["안산시", "안산"], 37.3219, 126.8309, District),
            region("안양시", &["안양시", "안양"], 37.3943, 126.9568, District),
            region("남양주시", &["남양주시", "남양주"], 37.6360, 127.2165, District),
            region("화성시", &["화성시", "화성"], 37.1995, 126.8312, District),
            region("평택시", &["평택시", "평택"], 36.9921, 127.1129, District),
            region("의정부시", &["의정부시", "의정부"], 37.7381, 127.0337, District),
            region("시흥시", &["시흥시", "시흥"], 37.3800, 126.8029, District),
            region("파주시", &["파주시", "파주"], 37.7599, 126.7802, District),
            region("김포시", &["김포시", "김포"], 37.6153, 126.7156, District),
            region("광명시", &["광명시", "광명"], 37.4786, 126.8646, District),
            region("광주시", &["광주시", "광주"], 37.4294, 127.2550, District),
            region("군포시", &["군포시", "군포"], 37.3617, 126.9352, District),
            region("오산시", &["오산시", "오산"], 37.1499, 127.0775, District),
            region("이천시", &["이천시", "이천"], 37.2720, 127.4350, District),
            region("양주시", &["양주시", "양주"], 37.7852, 127.0458, District),
            region("안성시", &["안성시", "안성"], 37.0080, 127.2797, District),
            region("구리시", &["구리시", "구리"], 37.5943, 127.1296, District),
            region("포천시", &["포천시", "포천"], 37.8949, 127.2003, District),
            region("의왕시", &["의왕시", "의왕"], 37.3448, 126.9683, District),
            region("하남시", &["하남시", "하남"], 37.5393, 127.2148, District),
            region("여주시", &["여주시", "여주"], 37.2982, 127.6372, District),
            region("동두천시", &["동두천시", "동두천"], 37.9036, 127.0606, District),
            region("과천시", &["과천시", "과천"], 37.4291, 126.9877, District),
            region("양평군", &["양평군", "양평"], 37.4917, 127.4875, District),
            region("가평군", &["가평군", "가평"], 37.8315, 127.5096, District),
            region("연천군", &["연천군", "연천"], 38.0966, 127.0750, District),
        ]
    };

    /// Combined metro-group catalog, Seoul districts first. This is the
    /// candidate order handed to the fine resolver for Seoul/Gyeonggi
    /// addresses.
    static ref METRO_REGIONS: Vec<Region> = SEOUL_DISTRICTS
        .iter()
        .cloned()
        .chain(GYEONGGI_CITIES.iter().cloned())
        .collect();

    /// Rest-of-country catalog: metropolitan cities then provinces.
    /// Tokens are matched against the coarse first-token key, so both
    /// "부산" and "부산광역시" resolve to the Busan entry.
    static ref NATIONAL_REGIONS: Vec<Region> = {
        use RegionTier::{Metropolitan, Province};
        vec![
            region("부산", &["부산"], 35.1796, 129.0756, Metropolitan),
            region("대구", &["대구"], 35.8714, 128.6014, Metropolitan),
            region("인천", &["인천"], 37.4563, 126.7052, Metropolitan),
            region("광주", &["광주"], 35.1595, 126.8526, Metropolitan),
            region("대전", &["대전"], 36.3504, 127.3845, Metropolitan),
            region("울산", &["울산"], 35.5384, 129.3114, Metropolitan),
            region("세종", &["세종"], 36.4800, 127.2890, Metropolitan),
            region("강원", &["강원"], 37.8228, 128.1555, Province),
            region("충북", &["충북", "충청북도"], 36.6357, 127.4917, Province),
            region("충남", &["충남", "충청남도"], 36.6588, 126.6728, Province),
            region("전북", &["전북", "전라북도"], 35.7175, 127.1530, Province),
            region("전남", &["전남", "전라남도"], 34.8161, 126.4629, Province),
            region("경북", &["경북", "경상북도"], 36.4919, 128.8889, Province),
            region("경남", &["경남", "경상남도"], 35.4606, 128.2132, Province),
            region("제주", &["제주"], 33.4996, 126.5312, Province),
        ]
    };
}

pub fn seoul_districts() -> &'static [Region] {
    &SEOUL_DISTRICTS
}

pub fn gyeonggi_cities() -> &'static [Region] {
    &GYEONGGI_CITIES
}

pub fn metro_regions() -> &'static [Region] {
    &METRO_REGIONS
}

pub fn national_regions() -> &'static [Region] {
    &NATIONAL_REGIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn assert_unique_names(catalog: &[Region]) {
        let names: AHashSet<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_names_unique_per_table() {
        assert_unique_names(seoul_districts());
        assert_unique_names(gyeonggi_cities());
        assert_unique_names(metro_regions());
        assert_unique_names(national_regions());
    }

    #[test]
    fn test_every_region_matches_its_own_name() {
        for catalog in [metro_regions(), national_regions()] {
            for r in catalog {
                assert!(!r.sub_region_tokens.is_empty(), "{} has no tokens", r.name);
                assert!(
                    r.sub_region_tokens
                        .iter()
                        .any(|t| r.name.contains(t.as_str())),
                    "{} does not match its own tokens",
                    r.name
                );
            }
        }
    }

    #[test]
    fn test_catalog_ordering_is_stable() {
        assert_eq!(seoul_districts()[0].name, "종로구");
        assert_eq!(metro_regions()[0].name, "종로구");

        let pos = |name: &str| {
            metro_regions()
                .iter()
                .position(|r| r.name == name)
                .unwrap()
        };
        assert!(pos("강남구") < pos("강동구"));
        // 남양주 addresses contain the 양주 stem, order disambiguates
        assert!(pos("남양주시") < pos("양주시"));
        // Gyeonggi table follows the full Seoul table
        assert!(pos("강동구") < pos("수원시"));
    }

    #[test]
    fn test_anchors_inside_korea() {
        for catalog in [metro_regions(), national_regions()] {
            for r in catalog {
                let (lon, lat) = (r.anchor.x(), r.anchor.y());
                assert!((33.0..=39.0).contains(&lat), "{} lat {}", r.name, lat);
                assert!((124.0..=132.0).contains(&lon), "{} lon {}", r.name, lon);
            }
        }
    }

    #[test]
    fn test_national_tiers() {
        assert!(
            national_regions()
                .iter()
                .all(|r| r.tier != RegionTier::District)
        );
        assert!(
            metro_regions()
                .iter()
                .all(|r| r.tier == RegionTier::District)
        );
    }
}
