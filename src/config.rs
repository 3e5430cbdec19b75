/// Knobs for the checkout arithmetic. Defaults mirror the storefront:
/// 8% tax, a flat 3.99 delivery fee, and a single 10%-off promo code.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub tax_rate: f64,
    pub delivery_fee: f64,
    pub promo_code: String,
    pub promo_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            delivery_fee: 3.99,
            promo_code: "WELCOME10".into(),
            promo_rate: 0.10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub pricing: PricingConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = PricingConfig::default();
        let pricing = PricingConfig {
            tax_rate: env_parse("TAX_RATE").unwrap_or(defaults.tax_rate),
            delivery_fee: env_parse("DELIVERY_FEE").unwrap_or(defaults.delivery_fee),
            promo_code: std::env::var("PROMO_CODE").unwrap_or(defaults.promo_code),
            promo_rate: env_parse("PROMO_RATE").unwrap_or(defaults.promo_rate),
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parse("APP_PORT").unwrap_or(8080),
            pricing,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}
