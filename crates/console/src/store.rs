use std::collections::HashSet;

use contracts::domain::common::Record;
use contracts::shared::CommandError;
use thiserror::Error;

/// Ошибки хранилища записей
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record '{0}' not found")]
    NotFound(String),

    #[error("duplicate record id '{0}'")]
    DuplicateId(String),

    #[error("record '{0}' changed id during replace")]
    IdChanged(String),
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::NotFound(_) => CommandError::not_found(err.to_string()),
            StoreError::DuplicateId(_) | StoreError::IdChanged(_) => {
                CommandError::conflict(err.to_string())
            }
        }
    }
}

/// In-memory хранилище записей одной страницы консоли.
///
/// Владеет коллекцией эксклюзивно в рамках сессии страницы; порядок
/// вставки сохраняется при любых операциях. Замена записи — только
/// целиком по идентификатору.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> RecordStore<T> {
    /// Засеять хранилище начальной коллекцией.
    ///
    /// Дубликат идентификатора — ошибка: инвариант уникальности
    /// держится с момента создания.
    pub fn seed(records: Vec<T>) -> Result<Self, StoreError> {
        let mut seen: HashSet<String> = HashSet::new();
        for record in &records {
            if !seen.insert(record.id().to_string()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self { records })
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Заменить запись по идентификатору, сохранив её позицию.
    ///
    /// Смена идентификатора внутри `updater` отклоняется целиком:
    /// хранилище остаётся в исходном состоянии, дубликат невозможен.
    pub fn replace(
        &mut self,
        id: &str,
        updater: impl FnOnce(&mut T),
    ) -> Result<&T, StoreError>
    where
        T: Clone,
    {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let mut updated = self.records[index].clone();
        updater(&mut updated);
        if updated.id() != id {
            return Err(StoreError::IdChanged(id.to_string()));
        }
        self.records[index] = updated;
        Ok(&self.records[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::fixtures::demo_orders;
    use contracts::domain::a001_order::OrderStatus;
    use contracts::domain::common::StatusRecord;

    #[test]
    fn test_seed_preserves_insertion_order() {
        let store = RecordStore::seed(demo_orders()).unwrap();
        let ids: Vec<&str> = store.all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD001", "ORD002", "ORD003"]);
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let mut orders = demo_orders();
        orders[2].id = "ORD001".to_string();
        assert_eq!(
            RecordStore::seed(orders).unwrap_err(),
            StoreError::DuplicateId("ORD001".to_string())
        );
    }

    #[test]
    fn test_replace_updates_exactly_one_record_in_place() {
        let mut store = RecordStore::seed(demo_orders()).unwrap();
        let before = store.all().to_vec();

        store
            .replace("ORD002", |o| o.set_status(OrderStatus::Delivered))
            .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[1].id, "ORD002");
        assert_eq!(store.all()[1].status, OrderStatus::Delivered);
        assert_eq!(store.all()[0], before[0]);
        assert_eq!(store.all()[2], before[2]);
    }

    #[test]
    fn test_replace_rejects_id_change() {
        let mut store = RecordStore::seed(demo_orders()).unwrap();
        let err = store
            .replace("ORD003", |o| o.id = "ORD001".to_string())
            .unwrap_err();
        assert_eq!(err, StoreError::IdChanged("ORD003".to_string()));

        // Хранилище не тронуто, дубликата нет
        let ids: Vec<&str> = store.all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD001", "ORD002", "ORD003"]);
    }

    #[test]
    fn test_replace_missing_id_is_not_found() {
        let mut store = RecordStore::seed(demo_orders()).unwrap();
        let err = store
            .replace("ORD999", |o| o.set_status(OrderStatus::Cancelled))
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound("ORD999".to_string()));
    }
}
