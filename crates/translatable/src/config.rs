use serde::{Deserialize, Serialize};

///
/// Config
///
/// Engine configuration owned by the host. Resolution entry points take
/// `&Config` and read it on every call; the engine never retains a copy,
/// so host-side changes are visible on the next resolution.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Derive column suffixes from the full locale identifier
    /// (`title_nl_be`) instead of the language subtag alone (`title_nl`).
    pub full_locale: bool,

    /// Getter policy for fields declared without an explicit option:
    /// scan the default locale and then every available translation when
    /// the direct lookup is blank.
    pub use_default: bool,
}

impl Config {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            full_locale: false,
            use_default: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
