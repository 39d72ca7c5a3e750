pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::error::ServiceError;
pub use app::service::MenuService;
pub use domain::model::{Cuisine, Dish, Image, Restaurant};
pub use storage::{MemoryRestaurantStore, PgRestaurantStore, RestaurantStore};
