//! Checkout orchestration: cart totals, promo application, order
//! persistence, then payment. Order creation must succeed before the
//! payment step can start; a failed submission leaves the flow idle with
//! the cart intact so the customer can retry.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::cart::Cart;
use crate::config::PricingConfig;
use crate::orders::repo::{NewOrder, Order, OrderStore};
use crate::payments::{PaymentGateway, PaymentOutcome};
use crate::pricing::{apply_promo, quote, PromoOutcome, Totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    OrderSubmitted,
    PaymentPending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("the cart is empty")]
    EmptyCart,
    #[error("cannot {action} while checkout is {state:?}")]
    WrongState {
        action: &'static str,
        state: CheckoutState,
    },
    #[error("order could not be placed")]
    OrderFailed(#[source] anyhow::Error),
    #[error("payment could not be processed")]
    PaymentFailed(#[source] anyhow::Error),
    #[error("payment was declined")]
    PaymentDeclined,
}

pub struct Checkout {
    orders: Arc<dyn OrderStore>,
    gateway: Arc<dyn PaymentGateway>,
    pricing: PricingConfig,
    cart: Cart,
    discount: f64,
    state: CheckoutState,
    order: Option<Order>,
}

impl Checkout {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        gateway: Arc<dyn PaymentGateway>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            orders,
            gateway,
            pricing,
            cart: Cart::new(),
            discount: 0.0,
            state: CheckoutState::Idle,
            order: None,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Try a promo code against the current subtotal. A rejected code
    /// resets any previously applied discount.
    pub fn apply_promo(&mut self, code: &str) -> PromoOutcome {
        let outcome = apply_promo(&self.pricing, self.cart.subtotal(), code);
        self.discount = match outcome {
            PromoOutcome::Applied(discount) => discount,
            PromoOutcome::Rejected => 0.0,
        };
        outcome
    }

    pub fn totals(&self) -> Totals {
        quote(&self.pricing, &self.cart, self.discount)
    }

    /// Idle -> OrderSubmitted. Persists the order and one line item per
    /// cart line. On store failure the flow stays idle and payment never
    /// starts.
    pub async fn place_order(
        &mut self,
        customer: CustomerInfo,
    ) -> Result<&Order, CheckoutError> {
        if self.state != CheckoutState::Idle {
            return Err(CheckoutError::WrongState {
                action: "place an order",
                state: self.state,
            });
        }
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let totals = self.totals();
        let order = self
            .orders
            .create_order(NewOrder {
                subtotal: totals.subtotal,
                tax: totals.tax,
                delivery: totals.delivery,
                total: totals.total,
                customer_name: customer.name,
                customer_email: customer.email,
            })
            .await
            .map_err(|e| {
                warn!(error = %e, "order submission failed, staying idle");
                CheckoutError::OrderFailed(e)
            })?;

        for line in self.cart.items() {
            self.orders
                .create_order_item(order.id, line.product_id, line.quantity as i32, line.price)
                .await
                .map_err(CheckoutError::OrderFailed)?;
        }

        info!(order_id = order.id, total = order.total, "order submitted");
        self.state = CheckoutState::OrderSubmitted;
        Ok(self.order.insert(order))
    }

    /// OrderSubmitted -> PaymentPending -> Succeeded or Failed. Success
    /// clears the cart and resets the discount; failure keeps both so the
    /// customer can try again after a [`Checkout::reset`].
    pub async fn pay(&mut self) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::OrderSubmitted {
            return Err(CheckoutError::WrongState {
                action: "pay",
                state: self.state,
            });
        }
        let total = self.order.as_ref().map(|o| o.total).unwrap_or_default();

        self.state = CheckoutState::PaymentPending;
        match self.gateway.charge(total).await {
            Ok(PaymentOutcome::Approved) => {
                info!(total, "payment approved");
                self.cart.clear();
                self.discount = 0.0;
                self.state = CheckoutState::Succeeded;
                Ok(())
            }
            Ok(PaymentOutcome::Declined) => {
                warn!(total, "payment declined");
                self.state = CheckoutState::Failed;
                Err(CheckoutError::PaymentDeclined)
            }
            Err(e) => {
                warn!(error = %e, "payment gateway error");
                self.state = CheckoutState::Failed;
                Err(CheckoutError::PaymentFailed(e))
            }
        }
    }

    /// Back to idle after a success or failure. The cart is left as-is.
    pub fn reset(&mut self) {
        self.state = CheckoutState::Idle;
        self.order = None;
    }
}
