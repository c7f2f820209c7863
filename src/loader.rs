use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Deserializer};

use crate::error::ExportError;
use crate::model::{Category, Ingredient, IngredientSet, Recipe, RecipeBook, User};

#[derive(Debug, Deserialize)]
struct XmlBook {
    #[serde(default)]
    categories: XmlCategories,
    #[serde(default)]
    users: XmlUsers,
    #[serde(default)]
    recipes: XmlRecipes,
}

#[derive(Debug, Default, Deserialize)]
struct XmlCategories {
    #[serde(rename = "category", default)]
    items: Vec<XmlCategory>,
}

#[derive(Debug, Deserialize)]
struct XmlCategory {
    #[serde(rename = "@id", default, deserialize_with = "lenient_int")]
    id: i64,
    #[serde(rename = "@name", default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct XmlUsers {
    #[serde(rename = "user", default)]
    items: Vec<XmlUser>,
}

#[derive(Debug, Deserialize)]
struct XmlUser {
    #[serde(rename = "@id", default, deserialize_with = "lenient_int")]
    id: i64,
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@email", default)]
    email: String,
    #[serde(rename = "@username", default)]
    username: String,
}

#[derive(Debug, Default, Deserialize)]
struct XmlRecipes {
    #[serde(rename = "recipe", default)]
    items: Vec<XmlRecipe>,
}

#[derive(Debug, Deserialize)]
struct XmlRecipe {
    #[serde(rename = "@id", default, deserialize_with = "lenient_int")]
    id: i64,
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@source", default)]
    source: String,
    #[serde(rename = "@cooktime", default, deserialize_with = "lenient_int")]
    cook_time: i64,
    #[serde(rename = "@preptime", default, deserialize_with = "lenient_int")]
    prep_time: i64,
    #[serde(rename = "@preheat", default)]
    preheat: String,
    #[serde(rename = "@createdate", default)]
    create_date: String,
    #[serde(rename = "@submittedby", default, deserialize_with = "lenient_int")]
    submitted_by: i64,
    #[serde(rename = "ingredientset", default)]
    ingredient_sets: Vec<XmlIngredientSet>,
    #[serde(default)]
    steps: XmlSteps,
    #[serde(rename = "note", default)]
    notes: Vec<XmlText>,
    #[serde(default)]
    rcs: XmlCategoryRefs,
}

#[derive(Debug, Deserialize)]
struct XmlIngredientSet {
    #[serde(rename = "@id", default, deserialize_with = "lenient_int")]
    id: i64,
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "ingredient", default)]
    ingredients: Vec<XmlIngredient>,
}

#[derive(Debug, Deserialize)]
struct XmlIngredient {
    #[serde(rename = "@amount", default)]
    amount: String,
    #[serde(rename = "@description", default)]
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct XmlSteps {
    #[serde(rename = "step", default)]
    items: Vec<XmlText>,
}

/// Character data of a `<step>` or `<note>`. Inline markup and comments may
/// split the text into several pieces; only the direct text is kept.
#[derive(Debug, Deserialize)]
struct XmlText {
    #[serde(rename = "$value", default)]
    pieces: Vec<XmlTextPiece>,
}

#[derive(Debug, Deserialize)]
enum XmlTextPiece {
    #[serde(rename = "$text")]
    Text(String),
    #[serde(other)]
    Element,
}

impl XmlText {
    fn into_text(self) -> String {
        self.pieces
            .into_iter()
            .filter_map(|piece| match piece {
                XmlTextPiece::Text(text) => Some(text),
                XmlTextPiece::Element => None,
            })
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
struct XmlCategoryRefs {
    #[serde(rename = "rc", default)]
    items: Vec<XmlCategoryRef>,
}

#[derive(Debug, Deserialize)]
struct XmlCategoryRef {
    #[serde(rename = "@id", default, deserialize_with = "lenient_int")]
    id: i64,
}

/// Integer attributes are written by hand-edited exports too: an empty value
/// reads as zero and surrounding whitespace is ignored.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(serde::de::Error::custom)
}

impl From<XmlBook> for RecipeBook {
    fn from(xml: XmlBook) -> Self {
        RecipeBook {
            categories: xml
                .categories
                .items
                .into_iter()
                .map(|c| Category {
                    id: c.id,
                    name: c.name,
                })
                .collect(),
            users: xml
                .users
                .items
                .into_iter()
                .map(|u| User {
                    id: u.id,
                    name: u.name,
                    email: u.email,
                    username: u.username,
                })
                .collect(),
            recipes: xml.recipes.items.into_iter().map(Recipe::from).collect(),
        }
    }
}

impl From<XmlRecipe> for Recipe {
    fn from(xml: XmlRecipe) -> Self {
        Recipe {
            id: xml.id,
            name: xml.name,
            source: xml.source,
            cook_time: xml.cook_time,
            prep_time: xml.prep_time,
            preheat: xml.preheat,
            create_date: xml.create_date,
            submitted_by: xml.submitted_by,
            category_ids: xml.rcs.items.into_iter().map(|rc| rc.id).collect(),
            ingredient_sets: xml
                .ingredient_sets
                .into_iter()
                .map(|set| IngredientSet {
                    id: set.id,
                    name: set.name,
                    ingredients: set
                        .ingredients
                        .into_iter()
                        .map(|ing| Ingredient {
                            amount: ing.amount,
                            description: ing.description,
                        })
                        .collect(),
                })
                .collect(),
            steps: xml.steps.items.into_iter().map(XmlText::into_text).collect(),
            notes: xml.notes.into_iter().map(XmlText::into_text).collect(),
        }
    }
}

/// Parse an rbook XML document held in memory
pub fn parse_book(xml: &str) -> Result<RecipeBook, ExportError> {
    let raw: XmlBook = quick_xml::de::from_str(xml)?;
    let book = RecipeBook::from(raw);
    debug!("{:#?}", book.recipes);
    Ok(book)
}

/// Read and parse the rbook XML document at `path`
pub fn load_book(path: impl AsRef<Path>) -> Result<RecipeBook, ExportError> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_book(&xml)
}
