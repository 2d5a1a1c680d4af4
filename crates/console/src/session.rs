//! Сессия списка: хранилище + состояние поиска и фильтра страницы

use contracts::domain::common::{Record, Searchable, StatusRecord};

use crate::filter::{filter_records, search_records, STATUS_FILTER_ALL};
use crate::notify::NotificationHub;
use crate::store::{RecordStore, StoreError};

/// Состояние одной страницы-списка консоли.
///
/// Владеет хранилищем записей, текущим поисковым запросом, фильтром
/// по статусу и уведомлением. Создаётся на время жизни страницы и
/// никем не разделяется.
#[derive(Debug, Clone)]
pub struct ListSession<T: Record> {
    store: RecordStore<T>,
    pub search_query: String,
    pub status_filter: String,
    pub notifications: NotificationHub,
}

impl<T: Record + Searchable + Clone> ListSession<T> {
    pub fn seed(records: Vec<T>) -> Result<Self, StoreError> {
        Ok(Self {
            store: RecordStore::seed(records)?,
            search_query: String::new(),
            status_filter: STATUS_FILTER_ALL.to_string(),
            notifications: NotificationHub::new(),
        })
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<T> {
        &mut self.store
    }

    pub fn all(&self) -> &[T] {
        self.store.all()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_status_filter(&mut self, status_filter: impl Into<String>) {
        self.status_filter = status_filter.into();
    }

    /// Видимый срез для доменов без статуса: только текстовый поиск
    pub fn searched(&self) -> Vec<&T> {
        search_records(self.store.all(), &self.search_query)
    }

    /// Видимый срез таблицы: поиск AND фильтр по статусу
    pub fn visible(&self) -> Vec<&T>
    where
        T: StatusRecord,
    {
        filter_records(self.store.all(), &self.search_query, &self.status_filter)
    }
}
