pub mod config;
pub mod error;
pub mod export;
pub mod filename;
pub mod loader;
pub mod model;
pub mod resolver;

use std::path::PathBuf;

use log::info;

pub use crate::config::{load_config, ExportConfig};
pub use error::ExportError;
pub use export::{
    render_front_matter, ExportRecipe, Exporter, IngredientEntry, IngredientGroup, Ingredients,
};
pub use filename::sanitize_title;
pub use loader::{load_book, parse_book};
pub use model::{Category, Ingredient, IngredientSet, Recipe, RecipeBook, User};
pub use resolver::References;

/// Outcome of a completed export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Written files, in recipe order
    pub files: Vec<PathBuf>,
}

/// Export every recipe of an already loaded book into `config.output_dir`.
///
/// Stops at the first recipe that cannot be serialized or written; files
/// written before that point are left in place.
pub fn export_book(
    book: &RecipeBook,
    config: &ExportConfig,
) -> Result<ExportSummary, ExportError> {
    let refs = References::from_book(book);
    let mut exporter =
        Exporter::new(&refs, &config.output_dir).unique_filenames(config.unique_filenames);

    let mut summary = ExportSummary::default();
    for recipe in &book.recipes {
        summary.files.push(exporter.export(recipe)?);
    }
    Ok(summary)
}

/// Load the book named by `config.input` and export all of its recipes
pub fn run(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    info!("Reading {}", config.input.display());
    let book = load_book(&config.input)?;
    info!(
        "Loaded {} recipes, {} categories, {} users",
        book.recipes.len(),
        book.categories.len(),
        book.users.len()
    );

    let summary = export_book(&book, config)?;
    info!(
        "Exported {} recipes to {}",
        summary.files.len(),
        config.output_dir.display()
    );
    Ok(summary)
}
