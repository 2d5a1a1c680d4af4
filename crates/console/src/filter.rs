//! Фильтрация списков: текстовый поиск и фильтр по статусу

use contracts::domain::common::{Searchable, StatusRecord};

/// Сентинел "показать все статусы"
pub const STATUS_FILTER_ALL: &str = "all";

/// Отфильтровать записи по поисковому запросу и коду статуса.
///
/// Оба предиката соединяются по AND; `"all"` отключает фильтр по
/// статусу. Порядок результата равен порядку входа, записи не
/// мутируются.
pub fn filter_records<'a, T>(
    records: &'a [T],
    query: &str,
    status_filter: &str,
) -> Vec<&'a T>
where
    T: Searchable + StatusRecord,
{
    records
        .iter()
        .filter(|record| {
            record.matches_filter(query)
                && (status_filter == STATUS_FILTER_ALL
                    || record.status_code() == status_filter)
        })
        .collect()
}

/// Только текстовый поиск — для доменов без статуса (delivery proof)
pub fn search_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| record.matches_filter(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_kyc_application::fixtures::demo_applications;
    use contracts::domain::a004_support_ticket::fixtures::demo_tickets;

    #[test]
    fn test_empty_query_with_all_returns_everything() {
        let apps = demo_applications();
        let visible = filter_records(&apps, "", STATUS_FILTER_ALL);
        assert_eq!(visible.len(), apps.len());
    }

    #[test]
    fn test_query_maria_finds_single_application() {
        let apps = demo_applications();
        let visible = filter_records(&apps, "maria", STATUS_FILTER_ALL);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].seller_name, "Maria Garcia");

        // Регистр не влияет
        let visible = filter_records(&apps, "MARIA", STATUS_FILTER_ALL);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_predicates_are_anded() {
        let tickets = demo_tickets();
        // "john" совпадает с TKT001 (John Doe) и TKT003 (Bob Johnson),
        // но только TKT001 в работе
        let visible = filter_records(&tickets, "john", "in_progress");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "TKT001");
    }

    #[test]
    fn test_result_keeps_input_order() {
        let tickets = demo_tickets();
        let visible = filter_records(&tickets, "", "in_progress");
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TKT001", "TKT004"]);
    }

    #[test]
    fn test_unknown_status_filter_matches_nothing() {
        let tickets = demo_tickets();
        assert!(filter_records(&tickets, "", "archived").is_empty());
    }
}
