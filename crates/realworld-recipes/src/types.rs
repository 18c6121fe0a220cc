use serde::{Deserialize, Serialize};

/// Response of `recipes/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipe {
    pub results: Vec<RecipeSummary>,
    /// Prefix for the relative `image` names in `results`
    #[serde(default)]
    pub base_uri: String,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl SearchRecipe {
    /// Absolute image URL for a search result
    pub fn image_url(&self, summary: &RecipeSummary) -> Option<String> {
        summary
            .image
            .as_ref()
            .map(|image| format!("{}{}", self.base_uri, image))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Response of `recipes/{id}/information`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_deserialization_and_image_url() {
        let search: SearchRecipe = serde_json::from_value(serde_json::json!({
            "results": [
                {"id": 215435, "title": "Three-Cheese Pizza", "readyInMinutes": 45, "servings": 8,
                 "image": "three-cheese-pizza-215435.jpg"},
                {"id": 1, "title": "No Image"}
            ],
            "baseUri": "https://spoonacular.com/recipeImages/",
            "offset": 0,
            "number": 10,
            "totalResults": 2
        }))
        .unwrap();

        assert_eq!(search.total_results, 2);
        assert_eq!(search.results[0].ready_in_minutes, Some(45));
        assert_eq!(
            search.image_url(&search.results[0]).as_deref(),
            Some("https://spoonacular.com/recipeImages/three-cheese-pizza-215435.jpg")
        );
        assert!(search.image_url(&search.results[1]).is_none());
    }

    #[test]
    fn test_recipe_ingredients_default_empty() {
        let recipe: Recipe = serde_json::from_value(serde_json::json!({
            "id": 716429,
            "title": "Pasta with Garlic"
        }))
        .unwrap();
        assert!(recipe.extended_ingredients.is_empty());
        assert!(recipe.summary.is_none());
    }
}
