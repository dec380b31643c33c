pub mod app_config;
pub mod seed;

pub use app_config::Config;
pub use seed::{build_inventory, sample_catalog, ItemSpec};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] voyage_catalog::CatalogError),
}

pub type StoreResult<T> = Result<T, StoreError>;
