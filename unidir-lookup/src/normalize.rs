//! Normalization of raw upstream records.
//!
//! Pure functions only; all I/O and policy live elsewhere.

use std::collections::BTreeSet;

use unidir_core::types::{RawUniversity, UniversityRecord};

/// Maps a raw upstream record into the stable entity shape.
///
/// Total over well-formed input: missing sequences were already defaulted to
/// empty during deserialization, and a missing or empty state/province
/// becomes `None` rather than an empty string.
pub fn normalize(raw: RawUniversity) -> UniversityRecord {
    UniversityRecord {
        name: raw.name,
        country: raw.country,
        country_code: raw.alpha_two_code,
        domains: raw.domains,
        web_pages: raw.web_pages,
        state_province: raw.state_province.filter(|s| !s.is_empty()),
    }
}

/// Collects the distinct country names from a set of raw records.
///
/// Distinctness is exact-string (case-sensitive, as the upstream delivers
/// them); the result is sorted ascending.
pub fn distinct_countries(records: &[RawUniversity]) -> Vec<String> {
    let countries: BTreeSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
    countries.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn raw(country: &str) -> RawUniversity {
        RawUniversity {
            name: "U".into(),
            country: country.into(),
            alpha_two_code: None,
            domains: Vec::new(),
            web_pages: Vec::new(),
            state_province: None,
        }
    }

    #[test]
    fn test_normalize_full_record() {
        let raw = RawUniversity {
            name: "Tsinghua University".into(),
            country: "China".into(),
            alpha_two_code: Some("CN".into()),
            domains: vec!["tsinghua.edu.cn".into()],
            web_pages: vec!["https://www.tsinghua.edu.cn/".into()],
            state_province: None,
        };

        let record = normalize(raw);

        assert_eq!(record.name, "Tsinghua University");
        assert_eq!(record.country, "China");
        assert_eq!(record.country_code.as_deref(), Some("CN"));
        assert_eq!(record.domains, vec!["tsinghua.edu.cn"]);
        assert_eq!(record.web_pages, vec!["https://www.tsinghua.edu.cn/"]);
        assert!(record.state_province.is_none());
    }

    #[test_case(None => None ; "absent stays absent")]
    #[test_case(Some("".into()) => None ; "empty becomes absent")]
    #[test_case(Some("Ontario".into()) => Some("Ontario".to_string()) ; "value passes through")]
    fn test_normalize_state_province(input: Option<String>) -> Option<String> {
        let mut r = raw("Canada");
        r.state_province = input;
        normalize(r).state_province
    }

    #[test]
    fn test_normalize_preserves_sequence_order() {
        let mut r = raw("X");
        r.domains = vec!["b.edu".into(), "a.edu".into()];
        let record = normalize(r);
        assert_eq!(record.domains, vec!["b.edu", "a.edu"]);
    }

    #[test]
    fn test_distinct_countries_sorted_and_deduped() {
        let records: Vec<RawUniversity> =
            ["USA", "Japan", "usa", "Japan"].iter().map(|c| raw(c)).collect();

        // Exact-string distinctness: "USA" and "usa" are different values.
        assert_eq!(distinct_countries(&records), vec!["Japan", "USA", "usa"]);
    }

    #[test]
    fn test_distinct_countries_empty_input() {
        assert!(distinct_countries(&[]).is_empty());
    }
}
