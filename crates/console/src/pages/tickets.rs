//! Страница "Support Tickets" (роль support)

use contracts::domain::a004_support_ticket::fixtures::demo_tickets;
use contracts::domain::a004_support_ticket::{Ticket, TicketPriority, TicketStatus};
use contracts::shared::{CommandError, CommandResult};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::flow::set_status;
use crate::session::ListSession;
use crate::stats::count;

/// Ростер операторов поддержки; первый — дефолт кнопки "Assign"
pub static SUPPORT_AGENTS: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["Carol White"]);

/// Сводные карточки страницы тикетов
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketsSummary {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub urgent: usize,
}

pub struct TicketsPage {
    pub session: ListSession<Ticket>,
}

impl TicketsPage {
    pub fn new() -> Self {
        Self::with_tickets(demo_tickets())
    }

    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            session: ListSession::seed(tickets).expect("ticket fixtures have unique ids"),
        }
    }

    /// Прямое назначение статуса; дата последнего обновления сдвигается
    pub fn set_status(&mut self, id: &str, status: TicketStatus) -> CommandResult<Ticket> {
        match set_status(self.session.store_mut(), id, status) {
            Ok(ticket) => {
                self.session
                    .notifications
                    .success(format!("Ticket status updated to {}", status.code()));
                Ok(ticket)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn assign(&mut self, id: &str, agent: &str) -> CommandResult<Ticket> {
        let result = self
            .session
            .store_mut()
            .replace(id, |ticket| {
                ticket.assigned_to = Some(agent.to_string());
            })
            .map(|ticket| ticket.clone());
        match result {
            Ok(ticket) => {
                self.session
                    .notifications
                    .success(format!("Ticket assigned to {}", agent));
                Ok(ticket)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Назначить дефолтного оператора из ростера
    pub fn assign_default(&mut self, id: &str) -> CommandResult<Ticket> {
        self.assign(id, SUPPORT_AGENTS[0])
    }

    pub fn send_response(&mut self, id: &str) -> CommandResult<()> {
        if self.session.store().get(id).is_none() {
            let err = CommandError::not_found(format!("ticket '{}' not found", id));
            self.session.notifications.error(err.message.clone());
            return Err(err);
        }
        self.session
            .notifications
            .success("Response sent to customer");
        Ok(())
    }

    pub fn summary(&self) -> TicketsSummary {
        let tickets = self.session.all();
        TicketsSummary {
            open: count(tickets, |t| t.status == TicketStatus::Open),
            in_progress: count(tickets, |t| t.status == TicketStatus::InProgress),
            resolved: count(tickets, |t| t.status == TicketStatus::Resolved),
            urgent: count(tickets, |t| t.priority == TicketPriority::Urgent),
        }
    }
}

impl Default for TicketsPage {
    fn default() -> Self {
        Self::new()
    }
}
