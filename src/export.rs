use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::ExportError;
use crate::filename::sanitize_title;
use crate::model::{IngredientSet, Recipe};
use crate::resolver::References;

/// A recipe in the shape it takes in the front matter of the exported file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecipe {
    pub title: String,
    pub author: String,
    pub source: String,
    pub categories: Vec<String>,
    pub cook_time: i64,
    pub prep_time: i64,
    pub preheat: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Ingredients>,
    pub directions: Vec<String>,
    pub notes: Vec<String>,
}

/// Ingredient list of a recipe.
///
/// Recipes with one ingredient set get a flat list, recipes with several get
/// one named group per set. Both are written under the same `ingredients` key.
#[derive(Debug, Clone, PartialEq)]
pub enum Ingredients {
    Simple(Vec<IngredientEntry>),
    Grouped(Vec<IngredientGroup>),
}

/// Serialized as a single-key mapping `description: amount`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientEntry {
    pub description: String,
    pub amount: String,
}

/// Serialized as a single-key mapping `name: [entries]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientGroup {
    pub name: String,
    pub entries: Vec<IngredientEntry>,
}

impl Serialize for Ingredients {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ingredients::Simple(entries) => entries.serialize(serializer),
            Ingredients::Grouped(groups) => groups.serialize(serializer),
        }
    }
}

impl Serialize for IngredientEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.description, &self.amount)?;
        map.end()
    }
}

impl Serialize for IngredientGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.entries)?;
        map.end()
    }
}

fn entries(set: &IngredientSet) -> Vec<IngredientEntry> {
    set.ingredients
        .iter()
        .filter(|ing| !ing.is_blank())
        .map(|ing| IngredientEntry {
            description: ing.description.clone(),
            amount: ing.amount.clone(),
        })
        .collect()
}

impl Ingredients {
    /// Pick the ingredient shape for a recipe's sets; `None` when it has none
    pub fn from_sets(sets: &[IngredientSet]) -> Option<Self> {
        match sets {
            [] => None,
            [only] => Some(Ingredients::Simple(entries(only))),
            _ => Some(Ingredients::Grouped(
                sets.iter()
                    .map(|set| IngredientGroup {
                        name: set.name.clone(),
                        entries: entries(set),
                    })
                    .collect(),
            )),
        }
    }
}

impl ExportRecipe {
    pub fn new(recipe: &Recipe, refs: &References) -> Self {
        ExportRecipe {
            title: recipe.name.clone(),
            author: refs.user_name(recipe.submitted_by).to_string(),
            source: recipe.source.clone(),
            categories: recipe
                .category_ids
                .iter()
                .map(|&id| refs.category_name(id).to_string())
                .collect(),
            cook_time: recipe.cook_time,
            prep_time: recipe.prep_time,
            preheat: recipe.preheat.clone(),
            date: recipe.create_date.clone(),
            ingredients: Ingredients::from_sets(&recipe.ingredient_sets),
            directions: recipe.steps.clone(),
            notes: recipe.notes.clone(),
        }
    }
}

/// Render `recipe` as a Markdown document made of a single front-matter block
pub fn render_front_matter(recipe: &ExportRecipe) -> Result<String, ExportError> {
    let yaml = serde_yaml::to_string(recipe)?;
    Ok(format!("---\n{}---\n\n", yaml))
}

/// Writes one Markdown file per recipe into an output directory
#[derive(Debug)]
pub struct Exporter<'a> {
    refs: &'a References,
    output_dir: PathBuf,
    unique_filenames: bool,
    used_names: HashSet<String>,
}

impl<'a> Exporter<'a> {
    pub fn new(refs: &'a References, output_dir: impl Into<PathBuf>) -> Self {
        Exporter {
            refs,
            output_dir: output_dir.into(),
            unique_filenames: false,
            used_names: HashSet::new(),
        }
    }

    /// Append `-2`, `-3`, ... to names already written during this run
    /// instead of overwriting the earlier file
    pub fn unique_filenames(mut self, enabled: bool) -> Self {
        self.unique_filenames = enabled;
        self
    }

    /// Export a single recipe, returning the path of the written file
    pub fn export(&mut self, recipe: &Recipe) -> Result<PathBuf, ExportError> {
        let export = ExportRecipe::new(recipe, self.refs);
        let document = render_front_matter(&export)?;

        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        let name = self.file_stem(&export.title);
        let path = self.output_dir.join(format!("{}.md", name));
        fs::write(&path, document).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        info!("Wrote {}", path.display());
        Ok(path)
    }

    fn file_stem(&mut self, title: &str) -> String {
        let base = sanitize_title(title);
        if !self.unique_filenames {
            return base;
        }

        let mut name = base.clone();
        let mut suffix = 2;
        while !self.used_names.insert(name.clone()) {
            debug!("File name {} already used, trying suffix {}", name, suffix);
            name = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        name
    }
}
