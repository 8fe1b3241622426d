// SPDX-License-Identifier: MPL-2.0
//! Category service port.

use super::ApiFuture;
use crate::domain::category::{Category, CategoryType};

/// Port for the category catalogue. Both lists are fetched whole; there is
/// no pagination.
pub trait CategoryApi: Send + Sync {
    fn fetch_category_types(&self) -> ApiFuture<Vec<CategoryType>>;

    fn fetch_categories(&self) -> ApiFuture<Vec<Category>>;
}
