//! Destination catalog and enrichment.
//!
//! The country service only supplies reference data; everything travel
//! related (status badge, transport routes, price, rating) is synthesized
//! here from the caller's random number generator.

use gomate_types::{
    CountryRecord, Destination, DestinationId, DestinationStatus, TransportKind, TransportOption,
};
use rand::seq::SliceRandom;
use std::collections::HashSet;
use rand::Rng;

/// Country names a fetch samples from.
pub const CANDIDATE_COUNTRIES: [&str; 15] = [
    "france",
    "japan",
    "italy",
    "spain",
    "thailand",
    "australia",
    "brazil",
    "canada",
    "greece",
    "egypt",
    "india",
    "mexico",
    "turkey",
    "uae",
    "uk",
];

/// Number of destinations in one fetch.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Placeholder for fields the country service left empty.
const NOT_AVAILABLE: &str = "N/A";

/// Pick `count` distinct candidate names in random order.
///
/// `count` is clamped to the size of the candidate list.
pub fn sample_countries<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let mut names = CANDIDATE_COUNTRIES.to_vec();
    names.shuffle(rng);
    names.truncate(count);
    names
}

/// Lowest position whose `dest-N` id is not used by any of `taken`.
pub fn free_position<'a>(taken: impl IntoIterator<Item = &'a Destination>) -> usize {
    let used: HashSet<&str> = taken.into_iter().map(|d| d.id.as_str()).collect();
    (0..)
        .find(|&index| !used.contains(DestinationId::for_position(index).as_str()))
        .unwrap_or_default()
}

/// Build the destination at `index` of a batch from a country record.
pub fn enrich<R: Rng + ?Sized>(index: usize, country: &CountryRecord, rng: &mut R) -> Destination {
    let name = country.name.common.clone();
    let status = DestinationStatus::ALL[rng.gen_range(0..DestinationStatus::ALL.len())];

    Destination {
        id: DestinationId::for_position(index),
        description: format!("Explore the beautiful {}", name),
        name,
        capital: or_not_available(country.first_capital()),
        region: country.region.clone(),
        status,
        flag: country.flags.png.clone(),
        population: country.population,
        languages: country.language_list(),
        currency: or_not_available(country.first_currency_name()),
        timezone: or_not_available(country.first_timezone()),
        area: country.area,
        transport_options: transport_options(rng),
        avg_price: format!("${}", rng.gen_range(500..1500)),
        rating: format!("{:.1}", rng.gen_range(3.0..5.0_f64)),
    }
}

/// One option per transport kind with an illustrative route count.
fn transport_options<R: Rng + ?Sized>(rng: &mut R) -> Vec<TransportOption> {
    TransportKind::ALL
        .iter()
        .map(|&kind| {
            let routes = match kind {
                TransportKind::Bus => rng.gen_range(10..60),
                TransportKind::Train => rng.gen_range(5..35),
                TransportKind::Metro => rng.gen_range(3..23),
            };
            TransportOption { kind, routes }
        })
        .collect()
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn japan() -> CountryRecord {
        serde_json::from_str(
            r#"{
                "name": {"common": "Japan"},
                "capital": ["Tokyo"],
                "region": "Asia",
                "flags": {"png": "https://flagcdn.com/w320/jp.png"},
                "population": 125836021,
                "languages": {"jpn": "Japanese"},
                "currencies": {"JPY": {"name": "Japanese yen", "symbol": "¥"}},
                "timezones": ["UTC+09:00"],
                "area": 377930.0
            }"#,
        )
        .unwrap()
    }

    fn bare() -> CountryRecord {
        serde_json::from_str(r#"{"name":{"common":"Bare"},"flags":{"png":""}}"#).unwrap()
    }

    #[test]
    fn sample_has_requested_size_without_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let names = sample_countries(&mut rng, DEFAULT_SAMPLE_SIZE);
        assert_eq!(names.len(), 10);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(names.iter().all(|n| CANDIDATE_COUNTRIES.contains(n)));
    }

    #[test]
    fn sample_is_clamped_to_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_countries(&mut rng, 100).len(), CANDIDATE_COUNTRIES.len());
    }

    #[test]
    fn same_seed_same_sample() {
        let a = sample_countries(&mut StdRng::seed_from_u64(42), 10);
        let b = sample_countries(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn enrich_copies_reference_data() {
        let mut rng = StdRng::seed_from_u64(3);
        let d = enrich(0, &japan(), &mut rng);

        assert_eq!(d.id, "dest-1");
        assert_eq!(d.name, "Japan");
        assert_eq!(d.capital, "Tokyo");
        assert_eq!(d.region, "Asia");
        assert_eq!(d.description, "Explore the beautiful Japan");
        assert_eq!(d.languages, "Japanese");
        assert_eq!(d.currency, "Japanese yen");
        assert_eq!(d.timezone, "UTC+09:00");
        assert_eq!(d.population, 125_836_021);
        assert_eq!(d.area, Some(377_930.0));
    }

    #[test]
    fn enrich_fills_missing_fields_with_placeholder() {
        let mut rng = StdRng::seed_from_u64(3);
        let d = enrich(4, &bare(), &mut rng);
        assert_eq!(d.id, "dest-5");
        assert_eq!(d.capital, "N/A");
        assert_eq!(d.currency, "N/A");
        assert_eq!(d.timezone, "N/A");
        assert_eq!(d.languages, "");
    }

    #[test]
    fn synthesized_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for i in 0..200 {
            let d = enrich(i, &japan(), &mut rng);

            let kinds: Vec<TransportKind> = d.transport_options.iter().map(|o| o.kind).collect();
            assert_eq!(kinds, TransportKind::ALL);
            for option in &d.transport_options {
                let range = match option.kind {
                    TransportKind::Bus => 10..=59,
                    TransportKind::Train => 5..=34,
                    TransportKind::Metro => 3..=22,
                };
                assert!(range.contains(&option.routes), "{:?}", option);
            }

            let price: u32 = d.avg_price.trim_start_matches('$').parse().unwrap();
            assert!(d.avg_price.starts_with('$'));
            assert!((500..=1499).contains(&price));

            let rating: f64 = d.rating.parse().unwrap();
            assert!((3.0..=5.0).contains(&rating));
            assert_eq!(d.rating.split('.').nth(1).map(str::len), Some(1));
        }
    }

    #[test]
    fn free_position_skips_taken_ids() {
        let mut rng = StdRng::seed_from_u64(8);
        let none: Vec<Destination> = Vec::new();
        assert_eq!(free_position(&none), 0);

        let taken = vec![enrich(0, &japan(), &mut rng), enrich(2, &bare(), &mut rng)];
        assert_eq!(free_position(&taken), 1);

        let taken = vec![enrich(1, &japan(), &mut rng), enrich(0, &bare(), &mut rng)];
        assert_eq!(free_position(&taken), 2);
    }

    #[test]
    fn enrichment_is_deterministic_for_a_seed() {
        let a = enrich(0, &japan(), &mut StdRng::seed_from_u64(5));
        let b = enrich(0, &japan(), &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
