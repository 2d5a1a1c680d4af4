//! Страница "Seller KYC" (роль onboarding)

use contracts::domain::a003_kyc_application::fixtures::demo_applications;
use contracts::domain::a003_kyc_application::{KycApplication, KycStatus};
use contracts::domain::common::StatusRecord;
use contracts::shared::CommandResult;
use serde::Serialize;

use crate::flow::set_status;
use crate::session::ListSession;
use crate::stats::count;

/// Сводные карточки страницы KYC
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KycSummary {
    pub pending: usize,
    pub under_review: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub struct KycPage {
    pub session: ListSession<KycApplication>,
}

impl KycPage {
    pub fn new() -> Self {
        Self::with_applications(demo_applications())
    }

    pub fn with_applications(applications: Vec<KycApplication>) -> Self {
        Self {
            session: ListSession::seed(applications).expect("kyc fixtures have unique ids"),
        }
    }

    pub fn approve(&mut self, id: &str) -> CommandResult<KycApplication> {
        match set_status(self.session.store_mut(), id, KycStatus::Approved) {
            Ok(application) => {
                self.session
                    .notifications
                    .success("KYC application approved");
                Ok(application)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Отклонить заявку; непустая причина сохраняется в записи
    pub fn reject(&mut self, id: &str, reason: &str) -> CommandResult<KycApplication> {
        let reason = reason.trim();
        let result = self
            .session
            .store_mut()
            .replace(id, |application| {
                application.set_status(KycStatus::Rejected);
                application.rejection_reason = if reason.is_empty() {
                    None
                } else {
                    Some(reason.to_string())
                };
            })
            .map(|application| application.clone());
        match result {
            Ok(application) => {
                self.session
                    .notifications
                    .success("KYC application rejected");
                Ok(application)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn mark_under_review(&mut self, id: &str) -> CommandResult<KycApplication> {
        match set_status(self.session.store_mut(), id, KycStatus::UnderReview) {
            Ok(application) => {
                self.session
                    .notifications
                    .info("KYC application marked for review");
                Ok(application)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn summary(&self) -> KycSummary {
        let applications = self.session.all();
        let by_status =
            |status: KycStatus| count(applications, |a: &KycApplication| a.status == status);
        KycSummary {
            pending: by_status(KycStatus::Pending),
            under_review: by_status(KycStatus::UnderReview),
            approved: by_status(KycStatus::Approved),
            rejected: by_status(KycStatus::Rejected),
        }
    }
}

impl Default for KycPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::NotificationKind;

    #[test]
    fn test_fixture_summary() {
        let summary = KycPage::new().summary();
        assert_eq!(
            (summary.pending, summary.under_review, summary.approved, summary.rejected),
            (1, 1, 1, 0)
        );
    }

    #[test]
    fn test_approve_from_any_status() {
        let mut page = KycPage::new();
        // Заявка уже на проверке; прямое назначение это допускает
        let application = page.approve("KYC002").unwrap();
        assert_eq!(application.status, KycStatus::Approved);
        assert_eq!(page.summary().approved, 2);
    }

    #[test]
    fn test_reject_stores_reason() {
        let mut page = KycPage::new();
        let application = page.reject("KYC001", "Address proof is illegible").unwrap();
        assert_eq!(application.status, KycStatus::Rejected);
        assert_eq!(
            application.rejection_reason.as_deref(),
            Some("Address proof is illegible")
        );
    }

    #[test]
    fn test_reject_with_blank_reason() {
        let mut page = KycPage::new();
        let application = page.reject("KYC001", "   ").unwrap();
        assert_eq!(application.rejection_reason, None);
    }

    #[test]
    fn test_mark_under_review_is_info() {
        let mut page = KycPage::new();
        page.mark_under_review("KYC001").unwrap();
        let notification = page.session.notifications.current().unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(notification.message, "KYC application marked for review");
    }
}
