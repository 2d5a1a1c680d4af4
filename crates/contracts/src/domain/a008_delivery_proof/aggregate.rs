use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Searchable};

/// Подтверждение доставки (страница "Delivery Proof").
///
/// Единственный домен без классифицирующего статуса: запись
/// описывает уже состоявшуюся доставку, меняются только отметки о
/// фото и подписи.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryProof {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub address: String,
    pub delivered_date: NaiveDate,
    pub delivered_time: NaiveTime,
    pub signature: bool,
    pub photo: bool,
    pub notes: String,
}

impl DeliveryProof {
    /// Полный комплект подтверждений: и фото, и подпись
    pub fn is_documented(&self) -> bool {
        self.signature && self.photo
    }
}

impl Record for DeliveryProof {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for DeliveryProof {
    fn search_fields(&self) -> Vec<String> {
        vec![self.order_number.clone(), self.customer_name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_delivery_proof::fixtures::demo_proofs;

    #[test]
    fn test_search_covers_order_number_and_customer() {
        let proofs = demo_proofs();
        assert!(proofs[0].matches_filter("del001"));
        assert!(proofs[0].matches_filter("john"));
        assert!(!proofs[0].matches_filter("uptown"));
    }

    #[test]
    fn test_is_documented() {
        let proofs = demo_proofs();
        assert!(proofs[0].is_documented());
        assert!(!proofs[2].is_documented());
    }
}
