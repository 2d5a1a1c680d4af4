//! Страница "Delivery Proof" (роль delivery)

use contracts::domain::a008_delivery_proof::fixtures::demo_proofs;
use contracts::domain::a008_delivery_proof::DeliveryProof;
use contracts::shared::CommandResult;
use serde::Serialize;

use crate::session::ListSession;
use crate::stats::count;

/// Сводные карточки подтверждений доставки
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofsSummary {
    pub total_deliveries: usize,
    pub with_photo: usize,
    pub with_signature: usize,
}

pub struct ProofsPage {
    pub session: ListSession<DeliveryProof>,
}

impl ProofsPage {
    pub fn new() -> Self {
        Self::with_proofs(demo_proofs())
    }

    pub fn with_proofs(proofs: Vec<DeliveryProof>) -> Self {
        Self {
            session: ListSession::seed(proofs).expect("proof fixtures have unique ids"),
        }
    }

    /// Видимый срез: у подтверждений нет статуса, только поиск
    pub fn visible(&self) -> Vec<&DeliveryProof> {
        self.session.searched()
    }

    pub fn upload_photo(&mut self, id: &str) -> CommandResult<DeliveryProof> {
        let result = self
            .session
            .store_mut()
            .replace(id, |proof| proof.photo = true)
            .map(|proof| proof.clone());
        match result {
            Ok(proof) => {
                self.session
                    .notifications
                    .success("Photo uploaded successfully");
                Ok(proof)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn capture_signature(&mut self, id: &str) -> CommandResult<DeliveryProof> {
        let result = self
            .session
            .store_mut()
            .replace(id, |proof| proof.signature = true)
            .map(|proof| proof.clone());
        match result {
            Ok(proof) => {
                self.session.notifications.success("Signature captured");
                Ok(proof)
            }
            Err(err) => {
                self.session.notifications.error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn summary(&self) -> ProofsSummary {
        let proofs = self.session.all();
        ProofsSummary {
            total_deliveries: proofs.len(),
            with_photo: count(proofs, |p| p.photo),
            with_signature: count(proofs, |p| p.signature),
        }
    }
}

impl Default for ProofsPage {
    fn default() -> Self {
        Self::new()
    }
}
