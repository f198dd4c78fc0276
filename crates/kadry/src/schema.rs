//! Fixed input schema of the résumé CSV export.
//!
//! Column names match the raw export verbatim, including the Cyrillic
//! headers and the composite free-text columns the feature encoder
//! derives structured features from.

/// Salary column; becomes the prediction target.
pub const TARGET_COLUMN: &str = "ЗП";

/// Composite free-text gender/age column.
pub const GENDER_AGE_COLUMN: &str = "Пол, возраст";

/// City composite column ("City, <other info>").
pub const CITY_COLUMN: &str = "Город";

/// Employment type column.
pub const EMPLOYMENT_COLUMN: &str = "Занятость";

/// Work schedule column.
pub const SCHEDULE_COLUMN: &str = "График";

/// Desired position free-text column.
pub const POSITION_COLUMN: &str = "Ищет работу на должность:";

/// Free-text work experience column.
pub const EXPERIENCE_COLUMN: &str = "Опыт (двойное нажатие для полной версии)";

/// Car ownership column.
pub const AUTO_COLUMN: &str = "Авто";

/// Raw columns carrying unstructured or unused text, dropped without
/// transformation at the end of encoding. Absence is not an error.
pub const UNUSED_COLUMNS: [&str; 4] = [
    "Последенее/нынешнее место работы",
    "Последеняя/нынешняя должность",
    "Образование и ВУЗ",
    "Обновление резюме",
];

/// Sentinel filled into missing text values.
pub const MISSING_TEXT: &str = "unknown";
