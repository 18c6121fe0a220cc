//! Text rendering for command results.

use realworld_core::AppError;
use realworld_marvel::{Characters, Comics};
use realworld_recipes::{Recipe, SearchRecipe};
use realworld_weather::{CurrentWeather, LocationTracker, TemperatureUnit, WindDirection};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
    println!("{}", json);
    Ok(())
}

/// The error view: a single user-facing line.
pub fn error_view(error: &AppError) {
    eprintln!("Error: {}", error.user_message());
}

pub fn comics(comics: &Comics) {
    println!(
        "Comics: page {} of {} ({} total)",
        comics.page() + 1,
        comics.last_page() + 1,
        comics.total
    );
    for comic in &comics.results {
        match comic.page_count {
            Some(pages) if pages > 0 => println!("  #{:<8} {} ({} pages)", comic.id, comic.title, pages),
            _ => println!("  #{:<8} {}", comic.id, comic.title),
        }
    }
    if comics.has_next() {
        println!("Next: realworld comics {}", comics.page() + 1);
    }
}

pub fn characters(name: &str, characters: &Characters) {
    println!("Characters matching {:?}: {}", name, characters.total);
    for character in &characters.results {
        if character.description.is_empty() {
            println!("  {}", character.name);
        } else {
            println!("  {} - {}", character.name, character.description);
        }
    }
}

pub fn recipes(query: &str, found: &SearchRecipe) {
    println!("Recipes for {:?}: {}", query, found.total_results);
    for summary in &found.results {
        let minutes = summary
            .ready_in_minutes
            .map(|m| format!(" ({} min)", m))
            .unwrap_or_default();
        println!("  {:<8} {}{}", summary.id, summary.title, minutes);
    }
}

pub fn recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    if let Some(servings) = recipe.servings {
        println!("Serves {}", servings);
    }
    if let Some(minutes) = recipe.ready_in_minutes {
        println!("Ready in {} minutes", minutes);
    }
    if !recipe.extended_ingredients.is_empty() {
        println!("Ingredients:");
        for ingredient in &recipe.extended_ingredients {
            println!("  - {}", ingredient.original);
        }
    }
    if let Some(url) = &recipe.source_url {
        println!("Source: {}", url);
    }
}

pub fn weather(tracker: &LocationTracker, current: &CurrentWeather, unit: TemperatureUnit) {
    if let Some(coords) = tracker.coords() {
        let place = current.place_name.as_deref().unwrap_or("Current location");
        println!("{} ({:.4}, {:.4})", place, coords.latitude, coords.longitude);
    }
    println!(
        "{:.1}{} feels like {:.1}{}, {}",
        current.temperature,
        unit.symbol(),
        current.feels_like,
        unit.symbol(),
        current.condition.description()
    );
    println!("Humidity {}%", current.humidity);
    println!("Wind {:.1} {}", current.wind_speed, unit.speed_unit());
    wind(&WindDirection::new(current.wind_degrees));
}

pub fn wind(wind: &WindDirection) {
    println!("{}", wind);
    println!("{}", wind.screen_reader_text());
}
