// mig-domain library entry point
pub mod delivery_unit;
pub mod error;
pub mod file_record;
pub mod path;
pub mod user_data;
pub use delivery_unit::{DeliveryUnitRecord, MIGRATION_VENDOR};
pub use error::DomainError;
pub use file_record::FileRecord;
pub use path::{decompose, PathProjection};
pub use user_data::{DeliveryUnitEntry, UserData};
