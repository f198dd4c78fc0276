#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod features;
pub mod loader;
pub mod missing;
pub mod outliers;
pub mod salary;
pub mod text;

pub use features::FeatureEncoder;
pub use features::role::RoleGroup;
pub use loader::CsvLoader;
pub use missing::MissingValueFiller;
pub use outliers::OutlierClipper;
pub use salary::SalaryNormalizer;
pub use text::TextNormalizer;
