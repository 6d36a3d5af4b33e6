//! Shared test fixtures: JSON factories shaped like TheMealDB responses.
#![allow(dead_code)]

use serde_json::{Map, Value, json};

use crate::meal::Meal;

/// Builds one meal entry as `search.php` would serve it.
pub fn meal_json(name: &str, ingredients: usize) -> Value {
    let slug = name.to_lowercase().replace(' ', "-");
    let mut entry = Map::new();
    entry.insert("strMeal".into(), json!(name));
    entry.insert(
        "strMealThumb".into(),
        json!(format!("https://www.themealdb.com/images/media/meals/{slug}.jpg")),
    );
    entry.insert("strArea".into(), json!("Italian"));
    entry.insert("strCategory".into(), json!("Pasta"));
    entry.insert(
        "strInstructions".into(),
        json!("Bring a large pot of water to a boil.\nCook until done.\nServe hot."),
    );
    entry.insert(
        "strSource".into(),
        json!(format!("https://example.test/recipes/{slug}")),
    );
    for i in 1..=ingredients {
        entry.insert(format!("strIngredient{i}"), json!(format!("Ingredient {i}")));
        entry.insert(format!("strMeasure{i}"), json!(format!("{i} cups")));
    }
    Value::Object(entry)
}

/// Wraps meal entries in the `{"meals": [...]}` envelope.
pub fn search_body(meals: Vec<Value>) -> Value {
    json!({ "meals": meals })
}

pub struct MealMother;

impl MealMother {
    #[must_use]
    pub fn with_name(name: &str) -> Meal {
        Meal::from_json(&meal_json(name, 4)).expect("fixture meal should parse")
    }

    #[must_use]
    pub fn with_ingredients(name: &str, count: usize) -> Meal {
        Meal::from_json(&meal_json(name, count)).expect("fixture meal should parse")
    }
}
