// src/domain/property.rs

use crate::domain::normalize;
use crate::forms::FormData;
use serde::Serialize;

pub const MAX_BEDS: u32 = 10;
pub const MAX_BATHS: f64 = 10.0;
pub const MIN_CONDITION: u8 = 1;
pub const MAX_CONDITION: u8 = 5;
pub const AVERAGE_CONDITION: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Condo,
    Duplex,
    Apartment,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Duplex,
        PropertyType::Apartment,
    ];

    /// Case-insensitive. Unknown text falls back to the neutral `Duplex`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("house") | Some("single_family") => PropertyType::House,
            Some("condo") | Some("townhome") => PropertyType::Condo,
            Some("apartment") | Some("apt") => PropertyType::Apartment,
            _ => PropertyType::Duplex,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Duplex => "duplex",
            PropertyType::Apartment => "apartment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Condo => "Condo / Townhome",
            PropertyType::Duplex => "Duplex",
            PropertyType::Apartment => "Apartment",
        }
    }
}

/// Property attributes for one rent calculation, already clamped to their domains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyInputs {
    pub property_type: PropertyType,
    /// 0 = studio.
    pub beds: u32,
    /// Half-bath increments.
    pub baths: f64,
    /// 0 = unknown; the sqft term is left out of the model.
    pub sqft: f64,
    pub parking: bool,
    /// 1..=5, 3 is average.
    pub condition: u8,
    /// 0 = not priced yet; no verdict is shown.
    pub current_rent: f64,
    /// Only forwarded to the comps provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Default for PropertyInputs {
    fn default() -> Self {
        Self {
            property_type: PropertyType::Duplex,
            beds: 0,
            baths: 0.0,
            sqft: 0.0,
            parking: false,
            condition: AVERAGE_CONDITION,
            current_rent: 0.0,
            address: None,
        }
    }
}

impl PropertyInputs {
    /// Normalize raw form fields. Never fails.
    pub fn from_form(form: &FormData) -> Self {
        Self {
            property_type: PropertyType::parse(form.get("property_type")),
            beds: normalize::count(form.get("beds"), MAX_BEDS),
            baths: normalize::half_steps(form.get("baths"), MAX_BATHS),
            sqft: normalize::amount(form.get("sqft")),
            parking: normalize::flag(form.get("parking")),
            condition: normalize::rating(
                form.get("condition"),
                MIN_CONDITION,
                MAX_CONDITION,
                AVERAGE_CONDITION,
            ),
            current_rent: normalize::amount(form.get("current_rent")),
            address: form.text("address"),
        }
    }

    pub fn has_sqft(&self) -> bool {
        self.sqft > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_parsing_is_lenient() {
        assert_eq!(PropertyType::parse(Some("HOUSE")), PropertyType::House);
        assert_eq!(PropertyType::parse(Some(" condo ")), PropertyType::Condo);
        assert_eq!(PropertyType::parse(Some("apartment")), PropertyType::Apartment);
        assert_eq!(PropertyType::parse(Some("castle")), PropertyType::Duplex);
        assert_eq!(PropertyType::parse(None), PropertyType::Duplex);
    }

    #[test]
    fn from_form_reads_every_field() {
        let form = FormData::from_pairs(&[
            ("property_type", "house"),
            ("beds", "3"),
            ("baths", "2"),
            ("sqft", "1,450"),
            ("parking", "on"),
            ("condition", "3"),
            ("current_rent", "$2,150"),
            ("address", " 12 Elm St "),
        ]);

        let inputs = PropertyInputs::from_form(&form);
        assert_eq!(
            inputs,
            PropertyInputs {
                property_type: PropertyType::House,
                beds: 3,
                baths: 2.0,
                sqft: 1450.0,
                parking: true,
                condition: 3,
                current_rent: 2150.0,
                address: Some("12 Elm St".to_string()),
            }
        );
    }

    #[test]
    fn garbage_form_normalizes_to_defaults() {
        let form = FormData::from_pairs(&[
            ("beds", "-1"),
            ("baths", "many"),
            ("sqft", "-900"),
            ("condition", "11"),
            ("current_rent", "n/a"),
        ]);

        let inputs = PropertyInputs::from_form(&form);
        assert_eq!(inputs.beds, 0);
        assert_eq!(inputs.baths, 0.0);
        assert_eq!(inputs.sqft, 0.0);
        assert_eq!(inputs.condition, 5);
        assert_eq!(inputs.current_rent, 0.0);
        assert!(!inputs.has_sqft());
    }

    #[test]
    fn empty_form_matches_default() {
        assert_eq!(
            PropertyInputs::from_form(&FormData::default()),
            PropertyInputs::default()
        );
    }
}
