//! Variant groups of a product (`Size: S / M / L`, `Weight: 500g / 1kg`).
//!
//! The form keeps variants as text drafts: every option field is whatever
//! the user typed. Each editing operation returns a new list in which only
//! the addressed group or option differs from the input.

use crate::shared::lenient;
use crate::shared::list_editors::{push, remove_at, update_at};
use serde::{Deserialize, Serialize};

// ============================================================================
// Form drafts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantGroupDraft {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    pub options: Vec<VariantOptionDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOptionDraft {
    #[serde(deserialize_with = "lenient::string")]
    pub value: String,
    #[serde(deserialize_with = "lenient::string")]
    pub price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub quantity: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Value,
    Price,
    Quantity,
    Sku,
}

pub fn add_group(groups: &[VariantGroupDraft]) -> Vec<VariantGroupDraft> {
    push(
        groups,
        VariantGroupDraft {
            name: String::new(),
            options: vec![VariantOptionDraft::default()],
        },
    )
}

pub fn remove_group(groups: &[VariantGroupDraft], group: usize) -> Vec<VariantGroupDraft> {
    remove_at(groups, group)
}

pub fn rename_group(groups: &[VariantGroupDraft], group: usize, name: &str) -> Vec<VariantGroupDraft> {
    update_at(groups, group, |g| g.name = name.to_string())
}

pub fn add_option(groups: &[VariantGroupDraft], group: usize) -> Vec<VariantGroupDraft> {
    update_at(groups, group, |g| g.options.push(VariantOptionDraft::default()))
}

pub fn remove_option(groups: &[VariantGroupDraft], group: usize, option: usize) -> Vec<VariantGroupDraft> {
    update_at(groups, group, |g| g.options = remove_at(&g.options, option))
}

pub fn update_option(
    groups: &[VariantGroupDraft],
    group: usize,
    option: usize,
    field: OptionField,
    text: &str,
) -> Vec<VariantGroupDraft> {
    update_at(groups, group, |g| {
        g.options = update_at(&g.options, option, |o| {
            let slot = match field {
                OptionField::Value => &mut o.value,
                OptionField::Price => &mut o.price,
                OptionField::Quantity => &mut o.quantity,
                OptionField::Sku => &mut o.sku,
            };
            *slot = text.to_string();
        });
    })
}

// ============================================================================
// Submitted shape
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantGroup {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    pub options: Vec<VariantOption>,
}

/// Blank numeric fields stay absent (`None`), never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOption {
    #[serde(deserialize_with = "lenient::string")]
    pub value: String,
    #[serde(deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "String::is_empty")]
    pub sku: String,
}

/// Drops groups without a name and options without a value.
pub fn prune(groups: Vec<VariantGroup>) -> Vec<VariantGroup> {
    groups
        .into_iter()
        .filter(|g| !g.name.trim().is_empty())
        .map(|mut g| {
            g.name = g.name.trim().to_string();
            g.options.retain(|o| !o.value.trim().is_empty());
            g
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<VariantGroupDraft> {
        serde_json::from_value(json!([
            { "name": "Size", "options": [
                { "value": "S", "price": 100, "quantity": 5, "sku": "TS-S" },
                { "value": "M", "price": "110", "quantity": "", "sku": "" }
            ]},
            { "name": "Colour", "options": [ { "value": "Red" } ] }
        ]))
        .unwrap()
    }

    #[test]
    fn drafts_accept_numbers_from_the_backend() {
        let groups = sample();
        assert_eq!(groups[0].options[0].price, "100");
        assert_eq!(groups[0].options[0].quantity, "5");
    }

    #[test]
    fn add_group_starts_with_one_blank_option() {
        let groups = add_group(&sample());
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2].options, vec![VariantOptionDraft::default()]);
    }

    #[test]
    fn option_update_touches_only_its_target() {
        let before = sample();
        let after = update_option(&before, 0, 1, OptionField::Price, "120");

        assert_eq!(after[0].options[1].price, "120");
        assert_eq!(after[0].options[1].value, before[0].options[1].value);
        assert_eq!(after[0].options[0], before[0].options[0]);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn group_and_option_removal() {
        let before = sample();
        let after = remove_option(&before, 0, 0);
        assert_eq!(after[0].options.len(), 1);
        assert_eq!(after[0].options[0].value, "M");
        assert_eq!(after[1], before[1]);

        let after = remove_group(&before, 0);
        assert_eq!(after, vec![before[1].clone()]);
    }

    #[test]
    fn rename_and_add_option() {
        let after = add_option(&rename_group(&sample(), 1, "Color"), 1);
        assert_eq!(after[1].name, "Color");
        assert_eq!(after[1].options.len(), 2);
    }

    #[test]
    fn submitted_shape_prunes_blanks_and_keeps_blank_numbers_absent() {
        let mut drafts = sample();
        drafts = add_group(&drafts); // unnamed, dropped
        drafts = add_option(&drafts, 1); // blank value, dropped

        let parsed: Vec<VariantGroup> =
            serde_json::from_value(serde_json::to_value(&drafts).unwrap()).unwrap();
        let pruned = prune(parsed);

        assert_eq!(pruned.len(), 2);
        assert_eq!(pruned[1].options.len(), 1);
        let medium = &pruned[0].options[1];
        assert_eq!(medium.price, Some(110.0));
        assert_eq!(medium.quantity, None);

        let wire = serde_json::to_value(medium).unwrap();
        assert_eq!(wire, json!({ "value": "M", "price": 110.0 }));
    }
}
