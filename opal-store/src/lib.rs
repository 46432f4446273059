pub mod app_config;
pub mod database;
pub mod history_repo;
pub mod product_repo;

pub use database::DbClient;
pub use history_repo::PgHistoryRepository;
pub use product_repo::PgProductRepository;
