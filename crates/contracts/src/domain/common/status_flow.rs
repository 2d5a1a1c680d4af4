/// Таблица переходов статуса: из текущего статуса либо один легальный
/// следующий, либо терминал. Чистая функция, цепочка всегда конечна.
pub trait StatusFlow: Copy + Eq + Sized {
    /// Следующий статус или `None` для терминального
    fn next(self) -> Option<Self>;

    fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Полная цепочка от текущего статуса до терминала включительно
    fn chain(self) -> Vec<Self> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(next) = current.next() {
            chain.push(next);
            current = next;
        }
        chain
    }
}
