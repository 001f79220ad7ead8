//! Typed API entities and the per-resource operation handles.

pub mod customer;
pub mod invoice;
pub mod payment;

pub use customer::{Customer, Customers};
pub use invoice::{Invoice, Invoices};
pub use payment::{Payment, Payments};
