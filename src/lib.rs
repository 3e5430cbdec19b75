//! Storefront backend for the Clouds ice-cream delivery shop: catalog and
//! order APIs over an in-memory store, plus the cart/pricing/checkout domain
//! logic the browser client drives.

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod orders;
pub mod payments;
pub mod pricing;
pub mod state;
