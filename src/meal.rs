//! Meal domain types and response parsing.
//!
//! TheMealDB serves each recipe as a flat JSON object with up to 20
//! ingredient/measure pairs addressed by positional key (`strIngredient1`,
//! `strMeasure1`, ...). The wire keys are resolved once at parse time; the
//! rest of the application only ever sees [`Meal`] with its fixed-size slot
//! sequence.

use serde_json::Value;
use thiserror::Error;

/// Number of positional ingredient slots in a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// Errors produced by the meal client and response parsing.
#[derive(Debug, Error)]
pub enum MealError {
    /// Transport-level failures from HTTP requests, including body decoding.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response was valid JSON but not shaped like a meal listing.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },
}

impl MealError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// One positional ingredient slot of a meal record.
///
/// A slot whose `ingredient` is `None` terminates the ingredient listing;
/// anything stored in later slots is never shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// One recipe record as returned by the search API.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub name: String,
    pub thumbnail: String,
    pub area: String,
    pub category: String,
    pub instructions: String,
    pub source_url: Option<String>,
    slots: Vec<IngredientSlot>,
}

impl Meal {
    /// Parses one element of the `meals` array.
    ///
    /// Only the display name is mandatory; everything else falls back to a
    /// placeholder so a sparse record still renders.
    ///
    /// # Errors
    ///
    /// Returns `MealError::Parse` if the entry is not an object or carries no
    /// `strMeal` field.
    pub fn from_json(value: &Value) -> Result<Self, MealError> {
        if !value.is_object() {
            return Err(MealError::parse("meal entry is not an object"));
        }

        let name = value
            .get("strMeal")
            .and_then(Value::as_str)
            .ok_or_else(|| MealError::parse("meal entry missing 'strMeal'"))?
            .to_string();

        let mut slots = Vec::with_capacity(INGREDIENT_SLOTS);
        for i in 1..=INGREDIENT_SLOTS {
            slots.push(IngredientSlot {
                ingredient: non_empty_str(value, &format!("strIngredient{i}")),
                measure: non_empty_str(value, &format!("strMeasure{i}")),
            });
        }

        Ok(Self {
            name,
            thumbnail: str_or(value, "strMealThumb", ""),
            area: str_or(value, "strArea", "Unknown"),
            category: str_or(value, "strCategory", "Unknown"),
            instructions: str_or(value, "strInstructions", ""),
            source_url: non_empty_str(value, "strSource"),
            slots,
        })
    }

    /// The positional ingredient slots, in wire order.
    #[must_use]
    pub fn ingredient_slots(&self) -> &[IngredientSlot] {
        &self.slots
    }

    /// Builds the display entries for the detail view's ingredient listing.
    ///
    /// Slots are scanned in order; each populated slot yields one
    /// "`<measure> <ingredient>`" entry and the scan stops at the first slot
    /// with no ingredient, even if later slots hold values.
    #[must_use]
    pub fn ingredient_list(&self) -> Vec<String> {
        let mut entries = Vec::new();
        for slot in &self.slots {
            let Some(ingredient) = &slot.ingredient else {
                break;
            };
            match slot.measure.as_deref().map(str::trim) {
                Some(measure) if !measure.is_empty() => {
                    entries.push(format!("{measure} {ingredient}"));
                }
                _ => entries.push(ingredient.clone()),
            }
        }
        entries
    }
}

/// Reads a string field, treating `null`, a missing key and `""` as absent.
fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn str_or(value: &Value, key: &str, fallback: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MealMother;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn parses_core_fields() {
        let meal = MealMother::with_name("Arrabiata");
        assert_eq!(meal.name, "Arrabiata");
        assert_eq!(meal.area, "Italian");
        assert_eq!(meal.category, "Pasta");
        assert!(meal.thumbnail.contains("arrabiata"));
        assert_eq!(meal.ingredient_slots().len(), INGREDIENT_SLOTS);
    }

    #[test]
    fn rejects_entry_without_name() {
        let err = Meal::from_json(&json!({ "strArea": "Italian" })).unwrap_err();
        assert!(matches!(err, MealError::Parse { .. }));

        let err = Meal::from_json(&json!("not an object")).unwrap_err();
        assert!(matches!(err, MealError::Parse { .. }));
    }

    #[test]
    fn missing_tags_fall_back_to_placeholder() {
        let meal = Meal::from_json(&json!({ "strMeal": "Mystery Stew" })).unwrap();
        assert_eq!(meal.area, "Unknown");
        assert_eq!(meal.category, "Unknown");
        assert!(meal.instructions.is_empty());
        assert!(meal.source_url.is_none());
    }

    #[test]
    fn ingredient_scan_stops_at_first_gap() {
        // Slots 1-3 populated, slot 4 absent, slot 5 populated again. The
        // entry in slot 5 must be ignored.
        let meal = Meal::from_json(&json!({
            "strMeal": "Gap Test",
            "strIngredient1": "Penne", "strMeasure1": "1 pound",
            "strIngredient2": "Olive oil", "strMeasure2": "1/4 cup",
            "strIngredient3": "Garlic", "strMeasure3": "3 cloves",
            "strIngredient5": "Basil", "strMeasure5": "a handful",
        }))
        .unwrap();

        let entries = meal.ingredient_list();
        assert_eq!(
            entries,
            vec!["1 pound Penne", "1/4 cup Olive oil", "3 cloves Garlic"]
        );
    }

    #[rstest]
    #[case::null_terminates(json!(null))]
    #[case::empty_terminates(json!(""))]
    fn absent_ingredient_markers_terminate_the_scan(#[case] marker: Value) {
        let meal = Meal::from_json(&json!({
            "strMeal": "Terminator",
            "strIngredient1": "Salt", "strMeasure1": "1 tsp",
            "strIngredient2": marker,
            "strIngredient3": "Pepper", "strMeasure3": "1 tsp",
        }))
        .unwrap();

        assert_eq!(meal.ingredient_list(), vec!["1 tsp Salt"]);
    }

    #[test]
    fn missing_measure_yields_bare_ingredient() {
        let meal = Meal::from_json(&json!({
            "strMeal": "Measureless",
            "strIngredient1": "Lime",
        }))
        .unwrap();

        assert_eq!(meal.ingredient_list(), vec!["Lime"]);
    }

    #[test]
    fn full_twenty_slots_are_all_listed() {
        let meal = MealMother::with_ingredients("Everything Soup", INGREDIENT_SLOTS);
        assert_eq!(meal.ingredient_list().len(), INGREDIENT_SLOTS);
    }
}
