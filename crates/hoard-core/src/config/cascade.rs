//! Ordered fallback across configuration sources
//!
//! The first source that produces a config wins outright. Sources that fail
//! are reported (when verbose) and passed over, except for sources that simply
//! have no config to offer; sources added with a skip condition that holds
//! are never touched.

use std::path::PathBuf;
use std::sync::Arc;

use super::default::DefaultSource;
use super::env::EnvironmentSource;
use super::file::{FileSource, XdgSource};
use super::traits::{ConfigError, ConfigResult, ConfigSource};
use super::types::HoardConfig;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::{debug_log, log_warn, trace_log};

/// A config together with the source that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub config: HoardConfig,
    /// Name of the winning source
    pub source: String,
}

struct Candidate {
    source: Box<dyn ConfigSource>,
    skip: bool,
}

/// Tries configuration sources in order until one succeeds
///
/// # Example
///
/// ```
/// use hoard_core::config::{Cascade, DefaultSource, FileSource};
///
/// let resolved = Cascade::new()
///     .source_unless(true, FileSource::new("never-read.toml"))
///     .source(DefaultSource::new())
///     .resolve()
///     .unwrap();
/// assert_eq!(resolved.source, "default config");
/// ```
pub struct Cascade {
    candidates: Vec<Candidate>,
    logger: SharedLogger,
    verbose: bool,
}

impl Default for Cascade {
    fn default() -> Self {
        Self::new()
    }
}

impl Cascade {
    /// An empty, quiet cascade
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            logger: Arc::new(NoOpLogger::new()),
            verbose: false,
        }
    }

    /// Report source failures to `logger` when `verbose` is set
    pub fn with_logger(mut self, logger: SharedLogger, verbose: bool) -> Self {
        self.logger = logger;
        self.verbose = verbose;
        self
    }

    /// Append a source that is always tried
    pub fn source(self, source: impl ConfigSource + 'static) -> Self {
        self.source_unless(false, source)
    }

    /// Append a source that is bypassed entirely when `skip` is true
    pub fn source_unless(mut self, skip: bool, source: impl ConfigSource + 'static) -> Self {
        self.candidates.push(Candidate {
            source: Box::new(source),
            skip,
        });
        self
    }

    /// Number of sources, skipped ones included
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Names of the sources that will be tried, in order
    pub fn active_sources(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter(|c| !c.skip)
            .map(|c| c.source.name())
            .collect()
    }

    /// Run the cascade
    ///
    /// Returns [`ConfigError::Exhausted`] when every source was skipped or
    /// failed.
    pub fn resolve(&self) -> ConfigResult<ResolvedConfig> {
        let mut tried = Vec::new();

        for candidate in self.candidates.iter().filter(|c| !c.skip) {
            let name = candidate.source.name();
            trace_log!("trying config source {}", name);
            match candidate.source.load() {
                Ok(config) => {
                    debug_log!("resolved hoard config from {}", name);
                    return Ok(ResolvedConfig {
                        config,
                        source: name.to_string(),
                    });
                }
                Err(e) if e.is_absent() => {
                    trace_log!("no config at {}", name);
                    tried.push(name.to_string());
                }
                Err(e) => {
                    if self.verbose {
                        log_warn!(self.logger, "could not load config from {}: {}", name, e);
                    }
                    tried.push(name.to_string());
                }
            }
        }

        Err(ConfigError::Exhausted(tried))
    }
}

impl std::fmt::Debug for Cascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sources: Vec<String> = self
            .candidates
            .iter()
            .map(|c| {
                if c.skip {
                    format!("{} (skipped)", c.source.name())
                } else {
                    c.source.name().to_string()
                }
            })
            .collect();
        f.debug_struct("Cascade")
            .field("sources", &sources)
            .field("verbose", &self.verbose)
            .finish()
    }
}

/// The daemon's canonical cascade: environment, file, XDG, defaults
///
/// The environment source is only consulted when `use_env` is set and the
/// file source only when a path (or `-` for stdin) is given. Defaults come
/// last, so this cascade always resolves.
pub fn hoard_config_cascade(
    use_env: bool,
    config_file: Option<PathBuf>,
    logger: SharedLogger,
    verbose: bool,
) -> Cascade {
    let skip_file = config_file.is_none();
    Cascade::new()
        .with_logger(logger, verbose)
        .source_unless(!use_env, EnvironmentSource::default())
        .source_unless(skip_file, FileSource::new(config_file.unwrap_or_default()))
        .source(XdgSource::new())
        .source(DefaultSource::new())
}
