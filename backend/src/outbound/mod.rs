//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL via Diesel, used when a database URL is set.
//! - **memory**: process-local store used otherwise.
//!
//! Adapters translate between domain types and storage representations and
//! carry no business rules.

pub mod memory;
pub mod persistence;
