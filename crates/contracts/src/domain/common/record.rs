/// Базовый трейт доменной записи консоли.
///
/// Идентификатор уникален в пределах одного хранилища страницы и
/// не меняется после создания записи.
pub trait Record {
    /// Идентификатор записи ("ORD001", "TKT002", ...)
    fn id(&self) -> &str;

    /// Хук после любой записи статуса (тикеты обновляют `last_update`)
    fn touch(&mut self) {}
}

/// Запись с классифицирующим статусом из закрытого доменного набора.
pub trait StatusRecord: Record {
    type Status: Copy + Eq + std::fmt::Debug;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// Код статуса для фильтра и сводных карточек ("in_progress", "paid", ...)
    fn status_code(&self) -> &'static str;
}
