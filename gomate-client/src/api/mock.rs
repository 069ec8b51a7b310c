//! Offline implementation of [`RemoteApi`].
//!
//! Serves built-in country fixtures for every catalog candidate and accepts
//! a single demo account. Allows counting calls and forcing failures for
//! verification.

use super::{ApiError, RemoteApi};
use async_trait::async_trait;
use gomate_types::{
    CountryFlags, CountryName, CountryRecord, Currency, LoginRequest, LoginResponse,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Username accepted by [`MockApi`].
pub const MOCK_USERNAME: &str = "emilys";

/// Password accepted by [`MockApi`].
pub const MOCK_PASSWORD: &str = "emilyspass";

/// Offline remote API.
///
/// Clones share counters and failure settings.
#[derive(Debug, Default, Clone)]
pub struct MockApi {
    inner: Arc<Mutex<MockApiInner>>,
}

#[derive(Debug, Default)]
struct MockApiInner {
    login_calls: usize,
    country_calls: usize,
    fail_next_login: Option<String>,
    failing_countries: HashSet<String>,
}

impl MockApi {
    /// Create a mock with the default fixtures.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockApiInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of `login()` calls so far.
    pub fn login_calls(&self) -> usize {
        self.lock().login_calls
    }

    /// Number of `country()` calls so far.
    pub fn country_calls(&self) -> usize {
        self.lock().country_calls
    }

    /// Total remote calls so far.
    pub fn total_calls(&self) -> usize {
        let inner = self.lock();
        inner.login_calls + inner.country_calls
    }

    /// Cause the next `login()` to be rejected with `message`.
    pub fn fail_next_login(&self, message: &str) {
        self.lock().fail_next_login = Some(message.to_string());
    }

    /// Make every lookup of `name` fail until cleared.
    pub fn fail_country(&self, name: &str) {
        self.lock().failing_countries.insert(name.to_lowercase());
    }

    /// Stop failing lookups.
    pub fn clear_failures(&self) {
        let mut inner = self.lock();
        inner.fail_next_login = None;
        inner.failing_countries.clear();
    }
}

#[async_trait]
impl RemoteApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let mut inner = self.lock();
        inner.login_calls += 1;

        if let Some(message) = inner.fail_next_login.take() {
            return Err(ApiError::Rejected(message));
        }

        if request.username != MOCK_USERNAME || request.password != MOCK_PASSWORD {
            return Err(ApiError::Rejected("Invalid credentials".to_string()));
        }

        Ok(LoginResponse {
            id: 1,
            username: MOCK_USERNAME.to_string(),
            email: "emily.johnson@x.dummyjson.com".to_string(),
            first_name: "Emily".to_string(),
            last_name: "Johnson".to_string(),
            token: "mock-access-token".to_string(),
        })
    }

    async fn country(&self, name: &str) -> Result<CountryRecord, ApiError> {
        let key = name.to_lowercase();
        {
            let mut inner = self.lock();
            inner.country_calls += 1;

            if inner.failing_countries.contains(&key) {
                return Err(ApiError::Status {
                    url: format!("mock://countries/name/{}", key),
                    status: 503,
                });
            }
        }

        fixture(&key).ok_or(ApiError::NoMatch(key))
    }
}

/// Reference facts for one fixture country.
struct Fixture {
    key: &'static str,
    common: &'static str,
    code: &'static str,
    capital: &'static str,
    region: &'static str,
    population: u64,
    languages: &'static [(&'static str, &'static str)],
    currency: (&'static str, &'static str, &'static str),
    timezone: &'static str,
    area: f64,
}

#[rustfmt::skip]
const FIXTURES: &[Fixture] = &[
    Fixture { key: "france", common: "France", code: "fr", capital: "Paris", region: "Europe", population: 67_391_582, languages: &[("fra", "French")], currency: ("EUR", "Euro", "€"), timezone: "UTC+01:00", area: 551_695.0 },
    Fixture { key: "japan", common: "Japan", code: "jp", capital: "Tokyo", region: "Asia", population: 125_836_021, languages: &[("jpn", "Japanese")], currency: ("JPY", "Japanese yen", "¥"), timezone: "UTC+09:00", area: 377_930.0 },
    Fixture { key: "italy", common: "Italy", code: "it", capital: "Rome", region: "Europe", population: 59_554_023, languages: &[("ita", "Italian")], currency: ("EUR", "Euro", "€"), timezone: "UTC+01:00", area: 301_336.0 },
    Fixture { key: "spain", common: "Spain", code: "es", capital: "Madrid", region: "Europe", population: 47_351_567, languages: &[("spa", "Spanish")], currency: ("EUR", "Euro", "€"), timezone: "UTC+01:00", area: 505_992.0 },
    Fixture { key: "thailand", common: "Thailand", code: "th", capital: "Bangkok", region: "Asia", population: 69_799_978, languages: &[("tha", "Thai")], currency: ("THB", "Thai baht", "฿"), timezone: "UTC+07:00", area: 513_120.0 },
    Fixture { key: "australia", common: "Australia", code: "au", capital: "Canberra", region: "Oceania", population: 25_687_041, languages: &[("eng", "English")], currency: ("AUD", "Australian dollar", "$"), timezone: "UTC+10:00", area: 7_692_024.0 },
    Fixture { key: "brazil", common: "Brazil", code: "br", capital: "Brasília", region: "Americas", population: 212_559_409, languages: &[("por", "Portuguese")], currency: ("BRL", "Brazilian real", "R$"), timezone: "UTC-03:00", area: 8_515_767.0 },
    Fixture { key: "canada", common: "Canada", code: "ca", capital: "Ottawa", region: "Americas", population: 38_005_238, languages: &[("eng", "English"), ("fra", "French")], currency: ("CAD", "Canadian dollar", "$"), timezone: "UTC-05:00", area: 9_984_670.0 },
    Fixture { key: "greece", common: "Greece", code: "gr", capital: "Athens", region: "Europe", population: 10_715_549, languages: &[("ell", "Greek")], currency: ("EUR", "Euro", "€"), timezone: "UTC+02:00", area: 131_990.0 },
    Fixture { key: "egypt", common: "Egypt", code: "eg", capital: "Cairo", region: "Africa", population: 102_334_403, languages: &[("ara", "Arabic")], currency: ("EGP", "Egyptian pound", "£"), timezone: "UTC+02:00", area: 1_002_450.0 },
    Fixture { key: "india", common: "India", code: "in", capital: "New Delhi", region: "Asia", population: 1_380_004_385, languages: &[("eng", "English"), ("hin", "Hindi")], currency: ("INR", "Indian rupee", "₹"), timezone: "UTC+05:30", area: 3_287_590.0 },
    Fixture { key: "mexico", common: "Mexico", code: "mx", capital: "Mexico City", region: "Americas", population: 128_932_753, languages: &[("spa", "Spanish")], currency: ("MXN", "Mexican peso", "$"), timezone: "UTC-06:00", area: 1_964_375.0 },
    Fixture { key: "turkey", common: "Turkey", code: "tr", capital: "Ankara", region: "Asia", population: 84_339_067, languages: &[("tur", "Turkish")], currency: ("TRY", "Turkish lira", "₺"), timezone: "UTC+03:00", area: 783_562.0 },
    Fixture { key: "uae", common: "United Arab Emirates", code: "ae", capital: "Abu Dhabi", region: "Asia", population: 9_890_400, languages: &[("ara", "Arabic")], currency: ("AED", "United Arab Emirates dirham", "د.إ"), timezone: "UTC+04:00", area: 83_600.0 },
    Fixture { key: "uk", common: "United Kingdom", code: "gb", capital: "London", region: "Europe", population: 67_215_293, languages: &[("eng", "English")], currency: ("GBP", "British pound", "£"), timezone: "UTC+00:00", area: 242_900.0 },
];

fn fixture(key: &str) -> Option<CountryRecord> {
    let f = FIXTURES.iter().find(|f| f.key == key)?;
    let (code, name, symbol) = f.currency;

    Some(CountryRecord {
        name: CountryName {
            common: f.common.to_string(),
        },
        capital: vec![f.capital.to_string()],
        region: f.region.to_string(),
        flags: CountryFlags {
            png: format!("https://flagcdn.com/w320/{}.png", f.code),
        },
        population: f.population,
        languages: f
            .languages
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect(),
        currencies: BTreeMap::from([(
            code.to_string(),
            Currency {
                name: name.to_string(),
                symbol: Some(symbol.to_string()),
            },
        )]),
        timezones: vec![f.timezone.to_string()],
        area: Some(f.area),
    })
}
