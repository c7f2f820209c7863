use std::collections::HashMap;

use log::debug;

use crate::model::RecipeBook;

/// Lookup tables used to denormalize recipe references into names.
///
/// Built once per run and only read afterwards. Duplicate ids in the source
/// document resolve to the last entry seen.
#[derive(Debug, Clone, Default)]
pub struct References {
    categories: HashMap<i64, String>,
    users: HashMap<i64, String>,
}

impl References {
    pub fn from_book(book: &RecipeBook) -> Self {
        let mut categories = HashMap::with_capacity(book.categories.len());
        for category in &book.categories {
            categories.insert(category.id, category.name.clone());
        }

        let mut users = HashMap::with_capacity(book.users.len());
        for user in &book.users {
            users.insert(user.id, user.name.clone());
        }

        debug!("Categories map: {:?}", categories);
        debug!("Users map: {:?}", users);

        References { categories, users }
    }

    /// Name of the category with `id`, or an empty string if there is none
    pub fn category_name(&self, id: i64) -> &str {
        match self.categories.get(&id) {
            Some(name) => name,
            None => {
                debug!("No category with id {}", id);
                ""
            }
        }
    }

    /// Name of the user with `id`, or an empty string if there is none
    pub fn user_name(&self, id: i64) -> &str {
        match self.users.get(&id) {
            Some(name) => name,
            None => {
                debug!("No user with id {}", id);
                ""
            }
        }
    }
}
