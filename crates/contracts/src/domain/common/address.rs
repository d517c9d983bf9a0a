use crate::shared::validation::Problems;
use serde::{Deserialize, Serialize};

/// Postal address embedded in promotors, warehouses and drivers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(deserialize_with = "crate::shared::lenient::string")]
    pub pin_code: String,
}

impl Address {
    pub fn check(&self, label: &str, problems: &mut Problems) {
        problems.pincode(&self.pin_code, &format!("{label} pincode"));
    }

    /// One-line rendering for tables.
    pub fn summary(&self) -> String {
        [self.street.as_str(), self.city.as_str(), self.state.as_str(), self.pin_code.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_skips_blank_parts() {
        let address = Address {
            street: "12 MG Road".into(),
            city: "Bengaluru".into(),
            state: String::new(),
            pin_code: "560001".into(),
        };
        assert_eq!(address.summary(), "12 MG Road, Bengaluru, 560001");
    }

    #[test]
    fn bad_pincode_is_reported_with_label() {
        let address = Address {
            pin_code: "056000".into(),
            ..Default::default()
        };
        let mut problems = Problems::new();
        address.check("Current address", &mut problems);
        assert_eq!(
            problems.messages(),
            ["Current address pincode must be 6 digits and cannot start with 0"]
        );
    }
}
