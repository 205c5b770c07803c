pub mod catalog;
pub mod db_catalog;
pub mod index;
pub mod memory_catalog;
pub mod ordering;
pub mod validation;
pub mod workdays;

pub use catalog::HolidayCatalog;
pub use db_catalog::DbCatalog;
pub use index::HolidayIndex;
pub use memory_catalog::MemoryCatalog;
pub use ordering::holiday_order;
pub use workdays::{count_working_days_between, is_weekend};
