//! # Hot Sauces
//!
//! The single record the catalog stores.
//!
//! ## Schema
//! - id (**i64**): assigned by the store on creation, never changes afterwards
//! - brandName, sauceName (**string**): short text, default empty
//! - description, url (**string**): long text, default empty
//! - heat (**i32**): Scoville rating, default 0, no upper bound enforced here
//!
//! ## Updates
//! A PUT body is a [`HotSauceChanges`] where every attribute is optional. Absent or `null`
//! keeps the stored value, anything present replaces it, so `""` and `0` clear a field.
//!
//! Older clients send a full record and expect empty strings and zero heat to mean
//! "unchanged". [`HotSauceChanges::from_defaults`] converts such a record, at the cost of
//! never being able to clear a field.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HotSauce {
    pub id: i64,
    pub brand_name: String,
    pub sauce_name: String,
    pub description: String,
    pub url: String,
    pub heat: i32,
}

/// POST body. Carries no id, the store assigns one on save.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct NewHotSauce {
    pub brand_name: String,
    pub sauce_name: String,
    pub description: String,
    pub url: String,
    pub heat: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HotSauceChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sauce_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat: Option<i32>,
}

impl From<NewHotSauce> for HotSauce {
    fn from(sauce: NewHotSauce) -> Self {
        Self {
            id: 0,
            brand_name: sauce.brand_name,
            sauce_name: sauce.sauce_name,
            description: sauce.description,
            url: sauce.url,
            heat: sauce.heat,
        }
    }
}

impl HotSauce {
    pub fn merge(&self, changes: HotSauceChanges) -> HotSauce {
        HotSauce {
            id: self.id,
            brand_name: changes
                .brand_name
                .unwrap_or_else(|| self.brand_name.clone()),
            sauce_name: changes
                .sauce_name
                .unwrap_or_else(|| self.sauce_name.clone()),
            description: changes
                .description
                .unwrap_or_else(|| self.description.clone()),
            url: changes.url.unwrap_or_else(|| self.url.clone()),
            heat: changes.heat.unwrap_or(self.heat),
        }
    }
}

impl HotSauceChanges {
    /// Empty strings and zero heat become `None`. The record's id is dropped.
    pub fn from_defaults(sauce: HotSauce) -> Self {
        fn non_empty(value: String) -> Option<String> {
            (!value.is_empty()).then_some(value)
        }

        Self {
            brand_name: non_empty(sauce.brand_name),
            sauce_name: non_empty(sauce.sauce_name),
            description: non_empty(sauce.description),
            url: non_empty(sauce.url),
            heat: (sauce.heat != 0).then_some(sauce.heat),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
