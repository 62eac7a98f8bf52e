//! Settings for the command-line front end.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults (`sha256`, `concat`)
//! 2. `CRYPTOCORE_HASH_ALGORITHM` / `CRYPTOCORE_IDENTITY_FRAMING`
//! 3. `-c key=value` overrides, applied in command-line order

use anyhow::{bail, Context, Result};
use cryptocore_hash::{ArtifactHasher, Framing, HashAlgorithm};
use tracing::debug;

pub const ENV_ALGORITHM: &str = "CRYPTOCORE_HASH_ALGORITHM";
pub const ENV_FRAMING: &str = "CRYPTOCORE_IDENTITY_FRAMING";

pub const KEY_ALGORITHM: &str = "hash.algorithm";
pub const KEY_FRAMING: &str = "identity.framing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub algorithm: HashAlgorithm,
    pub framing: Framing,
}

impl Settings {
    /// Resolve settings from the process environment and `-c` overrides.
    pub fn load(overrides: &[String]) -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok(), overrides)
    }

    /// Resolve settings with an injectable environment lookup.
    pub fn resolve(env: impl Fn(&str) -> Option<String>, overrides: &[String]) -> Result<Self> {
        let mut settings = Self::default();

        for (var, key) in [(ENV_ALGORITHM, KEY_ALGORITHM), (ENV_FRAMING, KEY_FRAMING)] {
            if let Some(value) = env(var).filter(|v| !v.is_empty()) {
                settings
                    .set(key, &value)
                    .with_context(|| format!("bad value in ${var}"))?;
            }
        }

        for entry in overrides {
            let Some((key, value)) = entry.split_once('=') else {
                bail!("bogus config parameter: {entry}");
            };
            settings.set(key.trim(), value.trim())?;
        }

        debug!(algorithm = %settings.algorithm, framing = %settings.framing, "resolved settings");
        Ok(settings)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_ascii_lowercase().as_str() {
            KEY_ALGORITHM => self.algorithm = value.parse()?,
            KEY_FRAMING => self.framing = value.parse()?,
            _ => bail!("unknown config key '{key}'"),
        }
        Ok(())
    }

    pub fn hasher(&self) -> ArtifactHasher {
        ArtifactHasher::new(self.algorithm, self.framing)
    }
}
