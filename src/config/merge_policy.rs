//! Merge rules: defaults first, then files, then environment.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("compare.buffer_size", super::DEFAULT_BUFFER_SIZE as i64)?
        .set_default("compare.size_short_circuit", true)?
        .set_default("compare.follow_symlinks", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
