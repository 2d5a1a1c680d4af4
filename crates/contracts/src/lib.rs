//! Контракты административной консоли: доменные типы, статусы,
//! таблицы переходов и демонстрационные данные страниц.

pub mod domain;
pub mod enums;
pub mod shared;
