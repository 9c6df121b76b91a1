//! The customers tab.

use tracing::error;

use movecrm_core::events::RecordKind;
use movecrm_core::types::CustomerId;
use movecrm_entity::Customer;

use crate::context::RequestContext;
use crate::customer::{CustomerForm, CustomerManager};
use crate::feed::ChangeFeed;

use super::staleness::StaleTracker;

/// Customer table plus the add-customer form.
#[derive(Debug)]
pub struct CustomerBoard {
    manager: CustomerManager,
    tracker: StaleTracker,
    loading: bool,
    customers: Vec<Customer>,
    form: CustomerForm,
    form_open: bool,
}

impl CustomerBoard {
    /// Create a board subscribed to `feed`. Nothing is fetched until `show`.
    pub fn new(manager: CustomerManager, feed: &ChangeFeed) -> Self {
        Self {
            manager,
            tracker: StaleTracker::new(feed.subscribe(), &[RecordKind::Customer]),
            loading: false,
            customers: Vec::new(),
            form: CustomerForm::default(),
            form_open: false,
        }
    }

    /// Bring the board up to date if anything it shows has changed.
    pub async fn show(&mut self) {
        if self.tracker.poll() {
            self.refresh().await;
        }
    }

    /// Re-fetch the customer list. On failure the previous rows stay.
    pub async fn refresh(&mut self) {
        self.tracker.clear();
        self.loading = true;
        match self.manager.list().await {
            Ok(customers) => self.customers = customers,
            Err(e) => error!(error = %e, "Error loading customers"),
        }
        self.loading = false;
    }

    /// Submit the form. On success the form is cleared and hidden and the
    /// list re-fetched; on failure it stays open and filled.
    pub async fn submit(&mut self, ctx: &RequestContext) -> bool {
        match self.manager.create(ctx, self.form.clone()).await {
            Ok(_) => {
                self.form = CustomerForm::default();
                self.form_open = false;
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(error = %e, "Error creating customer");
                false
            }
        }
    }

    /// Delete a customer and re-fetch. No confirmation, no undo.
    pub async fn delete(&mut self, ctx: &RequestContext, id: CustomerId) -> bool {
        match self.manager.delete(ctx, id).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(error = %e, customer_id = %id, "Error deleting customer");
                false
            }
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// "Add Customer" / "Cancel". Closing keeps what was typed.
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }
}
