mod index;
mod notes;

pub use index::config as index_config;
pub use notes::config as api_config;
