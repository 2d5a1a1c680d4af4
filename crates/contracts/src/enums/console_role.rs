use serde::{Deserialize, Serialize};

/// Роли административной консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleRole {
    Admin,
    Moderator,
    Finance,
    Onboarding,
    Support,
    Delivery,
}

impl ConsoleRole {
    /// Получить код роли
    pub fn code(&self) -> &'static str {
        match self {
            ConsoleRole::Admin => "admin",
            ConsoleRole::Moderator => "moderator",
            ConsoleRole::Finance => "finance",
            ConsoleRole::Onboarding => "onboarding",
            ConsoleRole::Support => "support",
            ConsoleRole::Delivery => "delivery",
        }
    }

    /// Получить человекочитаемое название раздела
    pub fn display_name(&self) -> &'static str {
        match self {
            ConsoleRole::Admin => "Admin Dashboard",
            ConsoleRole::Moderator => "Product Moderator Dashboard",
            ConsoleRole::Finance => "Finance Dashboard",
            ConsoleRole::Onboarding => "Onboarding Dashboard",
            ConsoleRole::Support => "Support Dashboard",
            ConsoleRole::Delivery => "Delivery Dashboard",
        }
    }

    /// Базовый путь раздела в роутере
    pub fn route(&self) -> String {
        format!("/{}", self.code())
    }

    /// Получить все роли консоли
    pub fn all() -> Vec<ConsoleRole> {
        vec![
            ConsoleRole::Admin,
            ConsoleRole::Moderator,
            ConsoleRole::Finance,
            ConsoleRole::Onboarding,
            ConsoleRole::Support,
            ConsoleRole::Delivery,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|role| role.code() == code)
    }
}

impl std::fmt::Display for ConsoleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
