//! Rust client for the Razorpay REST API.
//!
//! The entry point is [`Client`]: construct it with API credentials (or from
//! `RAZORPAY_*` environment variables) and reach resource operations through
//! its accessors. Request fields travel as [`Params`] mappings built with the
//! [`params!`] macro; responses come back as typed entities populated
//! strictly from the response body.
//!
//! ```no_run
//! # async fn demo() -> razorpay::Result<()> {
//! use razorpay::{params, Client};
//!
//! let client = Client::from_env()?;
//!
//! let invoice = client
//!     .invoices()
//!     .create(params! {
//!         "customer_id": "cust_6vRXClWqnLhV14",
//!         "amount": 100,
//!         "currency": "INR",
//!         "description": "Test description",
//!     })
//!     .await?;
//!
//! let issued = invoice.issue(&client).await?;
//! println!("issued at {:?}", issued.issued_at);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod resources;
pub mod transport;
pub mod utility;

pub use client::Client;
pub use config::Config;
pub use self::core::{ApiError, Collection, Entity, Error, Result};
pub use resources::{Customer, Customers, Invoice, Invoices, Payment, Payments};
pub use transport::{Method, Params, Transport};
pub use utility::{verify_payment_signature, verify_webhook_signature};

// Expansion target for `params!`; lets the macro work in crates that do not
// depend on serde_json themselves.
#[doc(hidden)]
pub use serde_json;
