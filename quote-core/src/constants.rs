/// Обязательные поля каждой цитаты, в порядке проверки
pub const REQUIRED_FIELDS: [&str; 3] = ["text", "author", "category"];

/// Ключ массива цитат во входном и экспортируемом JSON
pub const QUOTES_KEY: &str = "quotes";

/// Подпись для автора с пустым значением
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Подпись для пустой категории
pub const UNCATEGORIZED: &str = "uncategorized";

/// Сколько авторов попадает в `top_authors` статистики
pub const TOP_AUTHORS_LIMIT: usize = 5;
