//! Reading `config.toml`, with first-run creation of a commented default.

mod loader;
mod paths;
mod template;

pub use loader::{load_default, load_from_path};
pub use paths::{create_default_config, default_config_path};

#[cfg(test)]
mod tests;
