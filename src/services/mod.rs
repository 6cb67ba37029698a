pub mod analytics;
pub mod users;
pub mod warehouse;

pub use users::UserService;
pub use warehouse::WarehouseService;
