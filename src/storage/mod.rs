pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryRestaurantStore;
pub use postgres::PgRestaurantStore;
pub use store::{assign_missing_ids, new_document_id, RestaurantStore};
