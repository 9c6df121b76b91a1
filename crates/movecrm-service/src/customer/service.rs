//! Customer list, create, and delete.

use std::sync::Arc;

use tracing::info;

use movecrm_core::error::AppError;
use movecrm_core::events::{ChangeKind, RecordEvent, RecordKind};
use movecrm_core::traits::RecordStore;
use movecrm_core::types::CustomerId;
use movecrm_entity::Customer;

use crate::context::RequestContext;
use crate::customer::form::CustomerForm;
use crate::feed::ChangeFeed;

/// Manages the customer collection.
#[derive(Debug, Clone)]
pub struct CustomerManager {
    /// Customer store.
    store: Arc<dyn RecordStore<Customer>>,
    /// Where mutations are announced.
    feed: ChangeFeed,
}

impl CustomerManager {
    /// Creates a new customer manager.
    pub fn new(store: Arc<dyn RecordStore<Customer>>, feed: ChangeFeed) -> Self {
        Self { store, feed }
    }

    /// Fetch every customer.
    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.store.list().await
    }

    /// Validate the form and create the customer.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        form: CustomerForm,
    ) -> Result<Customer, AppError> {
        let draft = form.into_draft()?;
        let customer = self.store.create(draft).await?;

        info!(
            customer_id = %customer.id,
            name = %customer.name,
            by = %ctx.username,
            "Customer created"
        );
        self.feed.publish(RecordEvent::new(
            RecordKind::Customer,
            customer.id,
            ChangeKind::Created,
        ));

        Ok(customer)
    }

    /// Delete a customer. Jobs referencing it are left in place.
    pub async fn delete(&self, ctx: &RequestContext, id: CustomerId) -> Result<(), AppError> {
        self.store.delete(id).await?;

        info!(customer_id = %id, by = %ctx.username, "Customer deleted");
        self.feed
            .publish(RecordEvent::new(RecordKind::Customer, id, ChangeKind::Deleted));

        Ok(())
    }
}
