use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::repo::CatalogStore;
use crate::config::PricingConfig;
use crate::error::{ApiError, FieldError};
use crate::pricing::round2;

use super::dto::CreateOrderRequest;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Client floats are compared to recomputed values with a half-cent
/// tolerance, so clients that round differently still pass on honest data.
fn money_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.005
}

/// Schema-level checks on the order payload. Returns every problem found,
/// not just the first.
pub fn validate(req: &CreateOrderRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if req.subtotal <= 0.0 {
        errors.push(FieldError::new("subtotal", "must be positive"));
    }
    if req.tax < 0.0 {
        errors.push(FieldError::new("tax", "must not be negative"));
    }
    if req.delivery < 0.0 {
        errors.push(FieldError::new("delivery", "must not be negative"));
    }
    if req.total <= 0.0 {
        errors.push(FieldError::new("total", "must be positive"));
    }
    if let Some(email) = req.customer_email.as_deref() {
        if !is_valid_email(email) {
            errors.push(FieldError::new("customerEmail", "must be a valid email"));
        }
    }
    if req.items.is_empty() {
        errors.push(FieldError::new("items", "must not be empty"));
    }
    for (i, item) in req.items.iter().enumerate() {
        if item.product_id <= 0 {
            errors.push(FieldError::new(
                format!("items[{i}].productId"),
                "must be positive",
            ));
        }
        if item.quantity <= 0 {
            errors.push(FieldError::new(
                format!("items[{i}].quantity"),
                "must be a positive integer",
            ));
        }
        if item.price <= 0.0 {
            errors.push(FieldError::new(
                format!("items[{i}].price"),
                "must be positive",
            ));
        }
    }

    errors
}

/// Recompute the totals from authoritative catalog prices and reject any
/// mismatch with the client-supplied figures. The implied discount must be
/// zero or exactly the configured promo percentage.
pub async fn verify_totals(
    catalog: &dyn CatalogStore,
    pricing: &PricingConfig,
    req: &CreateOrderRequest,
) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    let mut subtotal = 0.0;

    for (i, item) in req.items.iter().enumerate() {
        match catalog.product_by_id(item.product_id).await? {
            Some(product) => {
                if !money_eq(item.price, product.price) {
                    errors.push(FieldError::new(
                        format!("items[{i}].price"),
                        format!("does not match the catalog price {:.2}", product.price),
                    ));
                }
                subtotal += product.price * f64::from(item.quantity);
            }
            None => errors.push(FieldError::new(
                format!("items[{i}].productId"),
                "unknown product",
            )),
        }
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let subtotal = round2(subtotal);
    let tax = round2(subtotal * pricing.tax_rate);
    let delivery = if req.items.is_empty() {
        0.0
    } else {
        pricing.delivery_fee
    };

    if !money_eq(req.subtotal, subtotal) {
        errors.push(FieldError::new(
            "subtotal",
            format!("expected {subtotal:.2} from catalog prices"),
        ));
    }
    if !money_eq(req.tax, tax) {
        errors.push(FieldError::new("tax", format!("expected {tax:.2}")));
    }
    if !money_eq(req.delivery, delivery) {
        errors.push(FieldError::new(
            "delivery",
            format!("expected {delivery:.2}"),
        ));
    }

    let discount = round2(req.subtotal + req.tax + req.delivery - req.total);
    let promo_discount = round2(subtotal * pricing.promo_rate);
    if discount < -0.005 {
        errors.push(FieldError::new("total", "exceeds the sum of the charges"));
    } else if !money_eq(discount, 0.0) && !money_eq(discount, promo_discount) {
        errors.push(FieldError::new(
            "total",
            "discount does not match any active promotion",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repo::MemCatalog;
    use crate::orders::dto::OrderItemRequest;

    fn request(items: Vec<OrderItemRequest>, subtotal: f64, tax: f64, total: f64) -> CreateOrderRequest {
        CreateOrderRequest {
            subtotal,
            tax,
            delivery: 3.99,
            total,
            customer_name: None,
            customer_email: None,
            items,
        }
    }

    fn vanilla_two_scoops() -> CreateOrderRequest {
        // vanilla-cloud is product 1 at 4.99
        request(
            vec![OrderItemRequest {
                product_id: 1,
                quantity: 2,
                price: 4.99,
            }],
            9.98,
            0.80,
            14.77,
        )
    }

    #[test]
    fn accepts_well_formed_payload() {
        assert!(validate(&vanilla_two_scoops()).is_empty());
    }

    #[test]
    fn rejects_negative_price_item() {
        let mut req = vanilla_two_scoops();
        req.items[0].price = -4.99;
        let errors = validate(&req);
        assert!(errors.iter().any(|e| e.field == "items[0].price"));
    }

    #[test]
    fn rejects_bad_email_and_empty_items() {
        let mut req = vanilla_two_scoops();
        req.customer_email = Some("not-an-email".into());
        req.items.clear();
        let errors = validate(&req);
        assert!(errors.iter().any(|e| e.field == "customerEmail"));
        assert!(errors.iter().any(|e| e.field == "items"));
    }

    #[tokio::test]
    async fn verifies_honest_totals() {
        let catalog = MemCatalog::seeded();
        let pricing = PricingConfig::default();
        verify_totals(&catalog, &pricing, &vanilla_two_scoops())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn accepts_promo_discounted_total() {
        let catalog = MemCatalog::seeded();
        let pricing = PricingConfig::default();
        let mut req = vanilla_two_scoops();
        // 10% off 9.98 = 1.00 after rounding
        req.total = round2(req.total - 1.00);
        verify_totals(&catalog, &pricing, &req).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_tampered_subtotal() {
        let catalog = MemCatalog::seeded();
        let pricing = PricingConfig::default();
        let mut req = vanilla_two_scoops();
        req.subtotal = 0.98;
        req.tax = 0.08;
        req.total = 5.05;
        let err = verify_totals(&catalog, &pricing, &req).await.unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == "subtotal"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_unknown_product() {
        let catalog = MemCatalog::seeded();
        let pricing = PricingConfig::default();
        let mut req = vanilla_two_scoops();
        req.items[0].product_id = 999;
        let err = verify_totals(&catalog, &pricing, &req).await.unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == "items[0].productId"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejects_made_up_discount() {
        let catalog = MemCatalog::seeded();
        let pricing = PricingConfig::default();
        let mut req = vanilla_two_scoops();
        req.total = 10.00; // 4.77 off, no promo gives that
        let err = verify_totals(&catalog, &pricing, &req).await.unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.field == "total"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
