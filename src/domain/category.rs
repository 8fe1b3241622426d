// SPDX-License-Identifier: MPL-2.0
//! Category domain types.
//!
//! Categories reference their grouping [`CategoryType`] by id. The navigation
//! menu reads them through a [`CategoryIndex`] built once per category list
//! instead of filtering the whole list for every type on every render.

use std::collections::HashMap;

/// Identifier of a [`CategoryType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryTypeId(pub u64);

/// Identifier of a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u64);

/// A grouping label under which categories are displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryType {
    pub id: CategoryTypeId,
    pub name: String,
}

/// A specific service category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub category_name: String,
    pub category_type: CategoryTypeId,
}

/// Categories grouped by type id, preserving the server order within a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    by_type: HashMap<CategoryTypeId, Vec<Category>>,
}

impl CategoryIndex {
    /// Builds the index in a single pass over the category list.
    #[must_use]
    pub fn build(categories: &[Category]) -> Self {
        let mut by_type: HashMap<CategoryTypeId, Vec<Category>> = HashMap::new();
        for category in categories {
            by_type
                .entry(category.category_type)
                .or_default()
                .push(category.clone());
        }
        Self { by_type }
    }

    /// Returns the categories of one type; empty when the type has none.
    #[must_use]
    pub fn categories_of(&self, type_id: CategoryTypeId) -> &[Category] {
        self.by_type.get(&type_id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
