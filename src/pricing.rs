//! Order arithmetic: subtotal, tax, delivery fee, promo discount, total.
//! All money values are rounded to 2 decimal places at each step, matching
//! what the storefront shows the customer.

use serde::Serialize;

use crate::cart::Cart;
use crate::config::PricingConfig;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery: f64,
    pub discount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromoOutcome {
    /// Code matched; carries the discount amount.
    Applied(f64),
    /// Unknown code: zero discount plus a notice for the customer.
    Rejected,
}

/// Case-insensitive match against the configured promo code. A match is
/// worth the configured percentage of the subtotal.
pub fn apply_promo(pricing: &PricingConfig, subtotal: f64, code: &str) -> PromoOutcome {
    if code.eq_ignore_ascii_case(&pricing.promo_code) {
        PromoOutcome::Applied(round2(subtotal * pricing.promo_rate))
    } else {
        PromoOutcome::Rejected
    }
}

/// Totals for the cart as it stands. The delivery fee only applies to
/// non-empty carts.
pub fn quote(pricing: &PricingConfig, cart: &Cart, discount: f64) -> Totals {
    let subtotal = cart.subtotal();
    let tax = round2(subtotal * pricing.tax_rate);
    let delivery = if cart.is_empty() {
        0.0
    } else {
        pricing.delivery_fee
    };
    Totals {
        subtotal,
        tax,
        delivery,
        discount,
        total: round2(subtotal + tax + delivery - discount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn cart_with(entries: &[(i32, f64, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(product_id, price, quantity) in entries {
            cart.add(CartItem {
                product_id,
                name: format!("Scoop {product_id}"),
                price,
                quantity,
                image_url: None,
                category_name: None,
            });
        }
        cart
    }

    #[test]
    fn quote_matches_the_documented_scenario() {
        // 4.99 x 2 at 8% tax and 3.99 delivery
        let totals = quote(&PricingConfig::default(), &cart_with(&[(1, 4.99, 2)]), 0.0);
        assert_eq!(totals.subtotal, 9.98);
        assert_eq!(totals.tax, 0.80);
        assert_eq!(totals.delivery, 3.99);
        assert_eq!(totals.total, 14.77);
    }

    #[test]
    fn empty_cart_skips_the_delivery_fee() {
        let totals = quote(&PricingConfig::default(), &Cart::new(), 0.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.delivery, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn welcome10_gives_ten_percent_of_subtotal() {
        let pricing = PricingConfig::default();
        assert_eq!(
            apply_promo(&pricing, 50.00, "WELCOME10"),
            PromoOutcome::Applied(5.00)
        );
        // case-insensitive
        assert_eq!(
            apply_promo(&pricing, 50.00, "welcome10"),
            PromoOutcome::Applied(5.00)
        );
        assert_eq!(apply_promo(&pricing, 50.00, "SCOOPS20"), PromoOutcome::Rejected);
    }

    #[test]
    fn discount_is_subtracted_from_the_total() {
        let pricing = PricingConfig::default();
        let cart = cart_with(&[(1, 25.00, 2)]);
        let PromoOutcome::Applied(discount) = apply_promo(&pricing, cart.subtotal(), "WELCOME10")
        else {
            panic!("promo should apply");
        };
        let totals = quote(&pricing, &cart, discount);
        assert_eq!(totals.discount, 5.00);
        // 50 + 4 + 3.99 - 5
        assert_eq!(totals.total, 52.99);
    }

    #[test]
    fn round2_snaps_float_noise_to_cents() {
        assert_eq!(round2(9.98 * 0.08), 0.80);
        assert_eq!(round2(9.98 * 0.10), 1.00);
        assert_eq!(round2(4.99 * 2.0 + 6.49), 16.47);
    }
}
