//! In-memory recipe book, mirroring the rbook export schema.
//!
//! Ids are kept as they appear in the document; nothing here checks that
//! references between recipes, users and categories actually resolve.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
}

/// One ingredient line. Either field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingredient {
    pub amount: String,
    pub description: String,
}

impl Ingredient {
    /// A line with neither amount nor description is padding left by the
    /// source editor, not an ingredient.
    pub fn is_blank(&self) -> bool {
        self.amount.is_empty() && self.description.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub source: String,
    /// Minutes
    pub cook_time: i64,
    /// Minutes
    pub prep_time: i64,
    pub preheat: String,
    pub create_date: String,
    pub submitted_by: i64,
    /// Category ids in document order
    pub category_ids: Vec<i64>,
    pub ingredient_sets: Vec<IngredientSet>,
    pub steps: Vec<String>,
    pub notes: Vec<String>,
}
