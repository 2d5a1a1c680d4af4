//! Страница "Payments & Invoices" (роль finance)

use contracts::domain::a002_invoice::fixtures::demo_invoices;
use contracts::domain::a002_invoice::{Invoice, InvoiceStatus};
use contracts::shared::{CommandError, CommandResult};
use serde::Serialize;

use crate::session::ListSession;
use crate::stats::sum_where;

/// Сводные карточки финансовой страницы
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicesSummary {
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub overdue_amount: f64,
    pub total_invoices: usize,
}

pub struct InvoicesPage {
    pub session: ListSession<Invoice>,
}

impl InvoicesPage {
    pub fn new() -> Self {
        Self::with_invoices(demo_invoices())
    }

    pub fn with_invoices(invoices: Vec<Invoice>) -> Self {
        Self {
            session: ListSession::seed(invoices).expect("invoice fixtures have unique ids"),
        }
    }

    /// Напоминание о платеже; уместно только для pending/overdue
    pub fn send_reminder(&mut self, id: &str) -> CommandResult<()> {
        let invoice_state = self
            .session
            .store()
            .get(id)
            .map(|invoice| (invoice.awaits_payment(), invoice.status.code()));
        match invoice_state {
            Some((true, _)) => {
                self.session.notifications.success("Payment reminder sent");
                Ok(())
            }
            Some((false, status_code)) => {
                let err = CommandError::validation(format!(
                    "invoice '{}' is not awaiting payment (status '{}')",
                    id, status_code
                ));
                self.session.notifications.error(err.message.clone());
                Err(err)
            }
            None => {
                let err = CommandError::not_found(format!("invoice '{}' not found", id));
                self.session.notifications.error(err.message.clone());
                Err(err)
            }
        }
    }

    pub fn generate_pdf(&mut self, id: &str) -> CommandResult<()> {
        if self.session.store().get(id).is_none() {
            let err = CommandError::not_found(format!("invoice '{}' not found", id));
            self.session.notifications.error(err.message.clone());
            return Err(err);
        }
        self.session.notifications.success("Invoice PDF generated");
        Ok(())
    }

    pub fn export_report(&mut self) {
        self.session
            .notifications
            .success("Financial report exported");
    }

    pub fn summary(&self) -> InvoicesSummary {
        let invoices = self.session.all();
        let total_by = |status: InvoiceStatus| {
            sum_where(invoices, |i: &Invoice| i.status == status, |i| i.total)
        };
        InvoicesSummary {
            total_revenue: total_by(InvoiceStatus::Paid),
            pending_amount: total_by(InvoiceStatus::Pending),
            overdue_amount: total_by(InvoiceStatus::Overdue),
            total_invoices: invoices.len(),
        }
    }
}

impl Default for InvoicesPage {
    fn default() -> Self {
        Self::new()
    }
}
