//! Age and nicotine limits by country

use crate::error::CoreError;
use crate::models::ComplianceRule;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceBook {
    rules: BTreeMap<String, ComplianceRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceVerdict {
    pub rule: ComplianceRule,
    pub age: u32,
    pub allowed: bool,
}

impl ComplianceBook {
    /// Index rules by country; the first row for a country wins
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = ComplianceRule>,
    {
        let mut indexed = BTreeMap::new();
        for rule in rules {
            if indexed.contains_key(&rule.country) {
                warn!(country = %rule.country, "Duplicate compliance rule ignored");
                continue;
            }
            indexed.insert(rule.country.clone(), rule);
        }
        Self { rules: indexed }
    }

    pub fn lookup(&self, country: &str) -> Result<&ComplianceRule, CoreError> {
        self.rules
            .get(country)
            .ok_or_else(|| CoreError::not_found("country", country))
    }

    /// Check whether someone of `age` may buy in `country`
    pub fn check(&self, country: &str, age: u32) -> Result<ComplianceVerdict, CoreError> {
        let rule = self.lookup(country)?;
        Ok(ComplianceVerdict {
            rule: rule.clone(),
            age,
            allowed: age >= rule.min_age,
        })
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(country: &str, min_age: u32, nicotine: f64) -> ComplianceRule {
        ComplianceRule {
            country: country.to_string(),
            min_age,
            max_nicotine_mgml: nicotine,
        }
    }

    #[test]
    fn test_check_age_boundary() {
        let book = ComplianceBook::from_rules(vec![rule("UAE", 21, 20.0)]);
        assert!(!book.check("UAE", 20).unwrap().allowed);
        assert!(book.check("UAE", 21).unwrap().allowed);
        assert!(book.check("UAE", 65).unwrap().allowed);
    }

    #[test]
    fn test_unknown_country() {
        let book = ComplianceBook::from_rules(vec![rule("UK", 18, 20.0)]);
        let err = book.check("Atlantis", 30).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { kind: "country", .. }));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let book = ComplianceBook::from_rules(vec![rule("US", 21, 59.0), rule("US", 18, 10.0)]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup("US").unwrap().min_age, 21);
    }
}
