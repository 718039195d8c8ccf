//! Environment source: DIRCOMPARE__<SECTION>__<KEY>, e.g. DIRCOMPARE__COMPARE__WORKERS=4

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "DIRCOMPARE";

/// Add the environment source to builder.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("compare.ignore_patterns"),
    )
}
