//! # Filtering
//!
//! Backs `GET /api/hotsauces`. The whole catalog is loaded and filtered in process, the
//! dataset is a handful of records so no store-side query is worth it.
//!
//! ## Parameters
//! - `brandNameFilter`, `sauceNameFilter`, `descFilter`: case-insensitive substring, empty matches all
//! - `minHeat`, `maxHeat`: inclusive bounds, defaults 0 and [`MAX_SCOVILLE`]
//!
//! A heat bound that is not a whole number rejects the request with a 400 instead of being
//! silently replaced by its default. An inverted range is not an error, it just matches nothing.
//! Results keep store order. No paging, no sorting.
use serde::Deserialize;

use crate::{error::AppError, sauce::HotSauce, utils::parse_heat};

/// At this point it's no longer food but a weapon.
pub const MAX_SCOVILLE: i32 = 3_000_000;
pub const MIN_SCOVILLE: i32 = 0;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SauceQuery {
    pub brand_name_filter: Option<String>,
    pub sauce_name_filter: Option<String>,
    pub desc_filter: Option<String>,
    pub min_heat: Option<String>,
    pub max_heat: Option<String>,
}

/// Needles are stored case-folded one char at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SauceFilter {
    brand_name: String,
    sauce_name: String,
    description: String,
    min_heat: i32,
    max_heat: i32,
}

impl Default for SauceFilter {
    fn default() -> Self {
        Self {
            brand_name: String::new(),
            sauce_name: String::new(),
            description: String::new(),
            min_heat: MIN_SCOVILLE,
            max_heat: MAX_SCOVILLE,
        }
    }
}

impl TryFrom<SauceQuery> for SauceFilter {
    type Error = AppError;

    fn try_from(query: SauceQuery) -> Result<Self, Self::Error> {
        let lower = |needle: Option<String>| fold_case(&needle.unwrap_or_default());

        Ok(Self {
            min_heat: parse_heat("minHeat", query.min_heat.as_deref(), MIN_SCOVILLE)?,
            max_heat: parse_heat("maxHeat", query.max_heat.as_deref(), MAX_SCOVILLE)?,
            brand_name: lower(query.brand_name_filter),
            sauce_name: lower(query.sauce_name_filter),
            description: lower(query.desc_filter),
        })
    }
}

impl SauceFilter {
    #[cfg(test)]
    fn with_heat(mut self, min_heat: i32, max_heat: i32) -> Self {
        self.min_heat = min_heat;
        self.max_heat = max_heat;
        self
    }

    pub fn matches(&self, sauce: &HotSauce) -> bool {
        contains(&sauce.brand_name, &self.brand_name)
            && contains(&sauce.sauce_name, &self.sauce_name)
            && contains(&sauce.description, &self.description)
            && (self.min_heat..=self.max_heat).contains(&sauce.heat)
    }

    pub fn apply(&self, sauces: Vec<HotSauce>) -> Vec<HotSauce> {
        sauces
            .into_iter()
            .filter(|sauce| self.matches(sauce))
            .collect()
    }
}

/// Lowercases one char at a time, so a letter folds the same way wherever it sits in a word.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn contains(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || fold_case(haystack).contains(needle)
}
