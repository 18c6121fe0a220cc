//! Spoonacular recipe client for the meal planner.

pub mod client;
pub mod types;

pub use client::{api_config, RecipeClient, RECIPE_API};
pub use types::{Ingredient, Recipe, RecipeSummary, SearchRecipe};
