mod config;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, ConfigResult};
