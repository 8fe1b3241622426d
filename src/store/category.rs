// SPDX-License-Identifier: MPL-2.0
//! Category slice: type list, category list, and the derived index.

use crate::domain::category::{Category, CategoryIndex, CategoryType};
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct CategorySlice {
    types: Vec<CategoryType>,
    categories: Vec<Category>,
    index: CategoryIndex,
}

impl CategorySlice {
    /// A failed fetch leaves the previous list untouched; the menu simply
    /// renders whatever is known.
    pub(super) fn set_types(&mut self, result: Result<Vec<CategoryType>, ApiError>) {
        if let Ok(types) = result {
            self.types = types;
        }
    }

    /// The index is rebuilt here and only here.
    pub(super) fn set_categories(&mut self, result: Result<Vec<Category>, ApiError>) {
        if let Ok(categories) = result {
            self.index = CategoryIndex::build(&categories);
            self.categories = categories;
        }
    }

    pub(super) fn types(&self) -> &[CategoryType] {
        &self.types
    }

    pub(super) fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(super) fn index(&self) -> &CategoryIndex {
        &self.index
    }
}
