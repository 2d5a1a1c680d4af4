use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Searchable, StatusRecord};

/// Статус KYC-заявки продавца.
///
/// Статус назначается напрямую (approve / reject / mark for review),
/// таблицы переходов у этого домена нет — любой член набора валиден
/// из любого текущего статуса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn code(&self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::UnderReview => "under_review",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            KycStatus::Pending => "Pending",
            KycStatus::UnderReview => "Under Review",
            KycStatus::Approved => "Approved",
            KycStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<KycStatus> {
        vec![
            KycStatus::Pending,
            KycStatus::UnderReview,
            KycStatus::Approved,
            KycStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Чек-лист документов заявки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSet {
    pub business_license: bool,
    pub tax_certificate: bool,
    pub identity_proof: bool,
    pub address_proof: bool,
}

impl DocumentSet {
    pub const TOTAL: usize = 4;

    pub fn submitted_count(&self) -> usize {
        [
            self.business_license,
            self.tax_certificate,
            self.identity_proof,
            self.address_proof,
        ]
        .iter()
        .filter(|submitted| **submitted)
        .count()
    }

    /// Прогресс для колонки "Documents": "3/4"
    pub fn progress(&self) -> String {
        format!("{}/{}", self.submitted_count(), Self::TOTAL)
    }

    pub fn is_complete(&self) -> bool {
        self.submitted_count() == Self::TOTAL
    }
}

/// KYC-заявка продавца (страница "Seller KYC" роли onboarding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycApplication {
    pub id: String,
    pub seller_name: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub tax_id: String,
    pub status: KycStatus,
    pub submitted_date: NaiveDate,
    pub documents: DocumentSet,
    /// Причина отклонения, заполняется при reject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl Record for KycApplication {
    fn id(&self) -> &str {
        &self.id
    }
}

impl StatusRecord for KycApplication {
    type Status = KycStatus;

    fn status(&self) -> KycStatus {
        self.status
    }

    fn set_status(&mut self, status: KycStatus) {
        self.status = status;
    }

    fn status_code(&self) -> &'static str {
        self.status.code()
    }
}

impl Searchable for KycApplication {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.seller_name.clone(),
            self.business_name.clone(),
            self.email.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_progress() {
        let complete = DocumentSet {
            business_license: true,
            tax_certificate: true,
            identity_proof: true,
            address_proof: true,
        };
        assert_eq!(complete.progress(), "4/4");
        assert!(complete.is_complete());

        let partial = DocumentSet {
            address_proof: false,
            ..complete
        };
        assert_eq!(partial.progress(), "3/4");
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(KycStatus::UnderReview.code(), "under_review");
        assert_eq!(KycStatus::from_code("under_review"), Some(KycStatus::UnderReview));
        assert_eq!(KycStatus::UnderReview.display_name(), "Under Review");
    }
}
