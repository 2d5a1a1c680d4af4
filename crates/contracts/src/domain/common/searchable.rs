/// Trait для типов данных, поддерживающих текстовый поиск
pub trait Searchable {
    /// Значения полей, участвующих в поиске
    fn search_fields(&self) -> Vec<String>;

    /// Проверяет, соответствует ли запись поисковому запросу.
    ///
    /// Совпадение — case-insensitive вхождение подстроки в любое из
    /// полей. Пустой запрос соответствует всем записям. Запрос не
    /// обрезается: строка из пробелов ищется буквально, как в UI.
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
