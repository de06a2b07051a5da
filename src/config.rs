// src/config.rs

use clap::ValueEnum;
use logging::{DebugFlag, InfoFlag, LogFormat};
use ndb_version::{OWN_VERSION, VersionNumber};
use std::path::PathBuf;

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for an assessment run.
#[derive(Clone, Debug)]
pub struct CompatConfig {
    pub log_format: LogFormat,
    pub verbose: u8,
    pub info: Vec<InfoFlag>,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
    pub log_file: Option<(PathBuf, Option<String>)>,
    pub colored: bool,
    pub timestamps: bool,
    /// Baseline for the exact-match rule; the compiled-in build by default.
    pub own: VersionNumber,
    pub output: OutputFormat,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            verbose: 0,
            info: Vec::new(),
            debug: Vec::new(),
            quiet: false,
            log_file: None,
            colored: true,
            timestamps: false,
            own: OWN_VERSION,
            output: OutputFormat::Text,
        }
    }
}

impl CompatConfig {
    /// Create a new builder for [`CompatConfig`].
    pub fn builder() -> CompatConfigBuilder {
        CompatConfigBuilder::default()
    }
}

/// Builder for [`CompatConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct CompatConfigBuilder {
    cfg: CompatConfig,
}

impl CompatConfigBuilder {
    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn info(mut self, info: Vec<InfoFlag>) -> Self {
        self.cfg.info = info;
        self
    }

    pub fn debug(mut self, debug: Vec<DebugFlag>) -> Self {
        self.cfg.debug = debug;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn log_file(mut self, log_file: Option<(PathBuf, Option<String>)>) -> Self {
        self.cfg.log_file = log_file;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.cfg.colored = colored;
        self
    }

    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.cfg.timestamps = timestamps;
        self
    }

    pub fn own(mut self, own: VersionNumber) -> Self {
        self.cfg.own = own;
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.cfg.output = output;
        self
    }

    pub fn build(self) -> CompatConfig {
        self.cfg
    }
}
