//! Payment gateway capability. Checkout only sees the trait, so the
//! simulated gateway can be swapped for a real processor without touching
//! the orchestration.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved,
    Declined,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: f64) -> anyhow::Result<PaymentOutcome>;
}

/// Stand-in processor: waits a fixed delay, then approves unconditionally.
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, amount: f64) -> anyhow::Result<PaymentOutcome> {
        tokio::time::sleep(self.delay).await;
        debug!(amount, "simulated charge approved");
        Ok(PaymentOutcome::Approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_gateway_always_approves() {
        let gateway = SimulatedGateway::new(Duration::ZERO);
        assert_eq!(gateway.charge(14.77).await.unwrap(), PaymentOutcome::Approved);
    }
}
