// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::{CatalogProduct, NewCatalogProduct};
use crate::error::DomainError;

/// Validates a sale price before it is recorded.
///
/// # Errors
///
/// Returns `DomainError::InvalidSalePrice` if the price is zero, negative,
/// or not a finite number.
pub fn validate_sale_price(price: f64) -> Result<(), DomainError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::InvalidSalePrice(price.to_string()));
    }
    Ok(())
}

/// Validates that there is at least one product to audit.
///
/// # Errors
///
/// Returns `DomainError::NoProducts` if the list is empty.
pub const fn validate_products_present(products: &[CatalogProduct]) -> Result<(), DomainError> {
    if products.is_empty() {
        return Err(DomainError::NoProducts);
    }
    Ok(())
}

/// Validates a product before it is added to the catalog.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or whitespace
/// - The listed price is negative or not finite
pub fn validate_new_product(product: &NewCatalogProduct) -> Result<(), DomainError> {
    if product.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Product name cannot be empty",
        )));
    }

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(DomainError::InvalidProductPrice(product.price.to_string()));
    }

    Ok(())
}

/// Validates an item name.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty or whitespace.
pub fn validate_item_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Item name cannot be empty",
        )));
    }
    Ok(())
}
