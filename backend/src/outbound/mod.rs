//! Outbound adapters implementing the domain's repository ports.
//!
//! - **persistence**: PostgreSQL via Diesel and a bb8 pool.
//! - **memory**: process-local store for tests and throwaway runs.
//! - **unconfigured**: refuses every call so handlers answer 503.
//!
//! Adapters translate between domain types and storage representations and
//! carry no business rules.

pub mod memory;
pub mod persistence;
pub mod unconfigured;
