//! Customer name lookup for job rows.

use movecrm_core::types::CustomerId;
use movecrm_entity::Customer;

/// Label shown when a job's customer cannot be found.
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// Find the name of `id` in a fetched customer list.
///
/// Linear scan; the lists involved are small.
pub fn resolve_customer_name(customers: &[Customer], id: CustomerId) -> &str {
    customers
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_CUSTOMER)
}
