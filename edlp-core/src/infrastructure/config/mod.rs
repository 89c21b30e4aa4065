pub mod settings;

pub use settings::{AppConfig, StoreBackend, load_app_config};
