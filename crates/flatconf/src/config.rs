mod layer;
pub mod loader;
mod store;

pub use layer::{Layer, LayerBuilder, LayerObject};
pub use loader::{find_config_file, load_layers, load_rule_catalog, parse_layers, CONFIG_FILE_NAME};
pub use store::ConfigStore;
