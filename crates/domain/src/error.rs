// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An audit was requested over an empty product list.
    NoProducts,
    /// A sale price was zero, negative, or not a finite number.
    InvalidSalePrice(String),
    /// A product's listed price is negative or not a finite number.
    InvalidProductPrice(String),
    /// A product or item name is empty.
    InvalidName(String),
    /// A sale was recorded against a product with no remaining stock.
    OutOfStock {
        /// The catalog product identifier.
        product_id: i64,
        /// The product name.
        name: String,
    },
    /// The catalog product does not exist.
    ProductNotFound(i64),
    /// A page identifier could not be parsed.
    InvalidPageId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoProducts => write!(f, "No products available to audit"),
            Self::InvalidSalePrice(price) => {
                write!(f, "Invalid sale price '{price}': must be greater than 0")
            }
            Self::InvalidProductPrice(price) => {
                write!(f, "Invalid product price '{price}': must be 0 or greater")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::OutOfStock { product_id, name } => {
                write!(f, "Product '{name}' ({product_id}) is out of stock")
            }
            Self::ProductNotFound(id) => write!(f, "Product {id} not found"),
            Self::InvalidPageId(value) => write!(f, "Invalid page id '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
