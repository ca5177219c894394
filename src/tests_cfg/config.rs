use std::path::Path;

use crate::{config::Config, environment::Environment};

/// `config/test.yaml`, as shipped.
#[must_use]
pub fn test_config() -> Config {
    Config::from_folder(&Environment::Test, Path::new(crate::config::CONFIG_FOLDER))
        .expect("load config/test.yaml")
}
