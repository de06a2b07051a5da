// src/run.rs

use logging::{SubscriberConfig, subscriber};
use ndb_version::{Classifier, VersionNumber};
use tracing::subscriber::with_default;

use crate::config::CompatConfig;
use crate::error::Result;
use crate::{PeerReport, assess};

pub(crate) fn subscriber_config(cfg: &CompatConfig) -> SubscriberConfig {
    SubscriberConfig::builder()
        .format(cfg.log_format)
        .verbose(cfg.verbose)
        .info(&cfg.info)
        .debug(&cfg.debug)
        .quiet(cfg.quiet)
        .log_file(cfg.log_file.clone())
        .colored(cfg.colored)
        .timestamps(cfg.timestamps)
        .build()
}

/// Runs `f` with the logging described by `cfg` installed for this thread.
pub fn with_config<T>(cfg: &CompatConfig, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let sub = subscriber(subscriber_config(cfg))?;
    with_default(sub, || {
        tracing::info!(
            target: "info::config",
            own = %cfg.own,
            "comparing peers against own build {}",
            cfg.own
        );
        tracing::debug!(
            target: "debug::config",
            own = %cfg.own,
            output = ?cfg.output,
            verbose = cfg.verbose,
            "configuration loaded"
        );
        f()
    })
}

/// Classifies every peer against `cfg.own`, logging per `cfg`.
pub fn assess_with_config(peers: &[VersionNumber], cfg: &CompatConfig) -> Result<Vec<PeerReport>> {
    with_config(cfg, || {
        let classifier = Classifier::new(cfg.own);
        Ok(peers.iter().map(|&p| assess(p, &classifier)).collect())
    })
}

pub fn assess_all(peers: &[VersionNumber]) -> Result<Vec<PeerReport>> {
    assess_with_config(peers, &CompatConfig::default())
}
