pub mod product;
pub mod history;
pub mod repository;

pub use product::ProductRecord;
pub use history::OptimizationRun;
pub use repository::{OptimizationHistoryRepository, ProductRepository};
