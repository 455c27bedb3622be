use serde::Deserialize;

/// One country as returned by the catalog service
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "CountryPayload")]
pub struct CountryRecord {
    pub common_name: String,
    pub region: String,
    pub flag_glyph: String,
    /// Three-letter code, the only key used for lookups
    pub id: String,
}

impl CountryRecord {
    pub fn new(
        id: impl Into<String>,
        common_name: impl Into<String>,
        region: impl Into<String>,
        flag_glyph: impl Into<String>,
    ) -> Self {
        CountryRecord {
            common_name: common_name.into(),
            region: region.into(),
            flag_glyph: flag_glyph.into(),
            id: id.into(),
        }
    }

    /// Case-insensitive match of an already lowercased needle against name or region
    pub fn matches(&self, needle: &str) -> bool {
        self.common_name.to_lowercase().contains(needle)
            || self.region.to_lowercase().contains(needle)
    }
}

/// Wire shape of a restcountries entry
#[derive(Deserialize)]
struct CountryPayload {
    name: CountryName,
    region: String,
    flag: String,
    cca3: String,
}

#[derive(Deserialize)]
struct CountryName {
    common: String,
}

impl From<CountryPayload> for CountryRecord {
    fn from(payload: CountryPayload) -> Self {
        CountryRecord {
            common_name: payload.name.common,
            region: payload.region,
            flag_glyph: payload.flag,
            id: payload.cca3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{"name":{"common":"France","official":"French Republic"},"region":"Europe","flag":"🇫🇷","cca3":"FRA"}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, CountryRecord::new("FRA", "France", "Europe", "🇫🇷"));
    }

    #[test]
    fn test_matches_name_or_region() {
        let record = CountryRecord::new("FRA", "France", "Europe", "🇫🇷");
        assert!(record.matches("fra"));
        assert!(record.matches("urop"));
        assert!(!record.matches("asia"));
    }
}
