//! Session-scoped cart: an ordered list of selected products. Lines are
//! keyed by product id; adding a product already in the cart bumps its
//! quantity instead of duplicating the row.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::round2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image_url: Option<String>,
    pub category_name: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be positive")]
    NonPositiveQuantity,
    #[error("product {0} is not in the cart")]
    NotInCart(i32),
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge the item into the cart, keyed by product id.
    pub fn add(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => line.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    pub fn remove(&mut self, product_id: i32) {
        self.items.retain(|line| line.product_id != product_id);
    }

    /// Set a line to an exact quantity. Zero is rejected; use [`Cart::remove`]
    /// or [`Cart::decrement`] to drop a line.
    pub fn update_quantity(&mut self, product_id: i32, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::NonPositiveQuantity);
        }
        let line = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Take one unit off a line; removing the last unit removes the line
    /// entirely.
    pub fn decrement(&mut self, product_id: i32) -> Result<(), CartError> {
        let line = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        if line.quantity > 1 {
            line.quantity -= 1;
        } else {
            self.remove(product_id);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn subtotal(&self) -> f64 {
        round2(
            self.items
                .iter()
                .map(|line| line.price * f64::from(line.quantity))
                .sum(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoop(product_id: i32, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id,
            name: format!("Scoop {product_id}"),
            price,
            quantity,
            image_url: None,
            category_name: None,
        }
    }

    #[test]
    fn adding_same_product_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(scoop(1, 4.99, 1));
        cart.add(scoop(1, 4.99, 2));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(scoop(1, 4.99, 2));
        cart.add(scoop(2, 6.49, 1));
        assert_eq!(cart.subtotal(), 16.47);
    }

    #[test]
    fn update_quantity_rejects_zero() {
        let mut cart = Cart::new();
        cart.add(scoop(1, 4.99, 2));
        assert_eq!(
            cart.update_quantity(1, 0),
            Err(CartError::NonPositiveQuantity)
        );
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn update_quantity_requires_existing_line() {
        let mut cart = Cart::new();
        assert_eq!(cart.update_quantity(7, 1), Err(CartError::NotInCart(7)));
    }

    #[test]
    fn decrementing_last_unit_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(scoop(1, 4.99, 2));
        cart.decrement(1).unwrap();
        assert_eq!(cart.items()[0].quantity, 1);
        cart.decrement(1).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_and_clear_drop_lines() {
        let mut cart = Cart::new();
        cart.add(scoop(1, 4.99, 1));
        cart.add(scoop(2, 5.99, 1));
        cart.remove(1);
        assert_eq!(cart.items().len(), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0.0);
    }
}
