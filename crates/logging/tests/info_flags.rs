// crates/logging/tests/info_flags.rs
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use clap::ValueEnum;
use logging::{DebugFlag, InfoFlag};
use tracing::level_filters::LevelFilter;
use tracing::subscriber::with_default;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, writer::MakeWriter},
    layer::SubscriberExt,
};

#[derive(Clone, Default)]
struct VecWriter(Arc<Mutex<Vec<u8>>>);

struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

impl Write for VecWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for VecWriter {
    type Writer = VecWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        VecWriterGuard(self.0.clone())
    }
}

fn emit_info(flag: InfoFlag) {
    match flag {
        InfoFlag::Tier => tracing::info!(target: "info::tier", "tier"),
        InfoFlag::Feature => tracing::info!(target: "info::feature", "feature"),
        InfoFlag::Config => tracing::info!(target: "info::config", "config"),
    }
}

fn emit_debug(flag: DebugFlag) {
    match flag {
        DebugFlag::Classify => tracing::trace!(target: "debug::classify", "classify"),
        DebugFlag::Feature => tracing::trace!(target: "debug::feature", "feature"),
        DebugFlag::Parse => tracing::trace!(target: "debug::parse", "parse"),
        DebugFlag::Config => tracing::trace!(target: "debug::config", "config"),
    }
}

fn captured(directive: Option<String>, emit: impl FnOnce()) -> bool {
    let writer = VecWriter::default();
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy("");
    if let Some(d) = directive {
        filter = filter.add_directive(d.parse().unwrap());
    }
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer.clone()));
    with_default(subscriber, emit);
    let empty = writer.0.lock().unwrap().is_empty();
    !empty
}

#[test]
fn each_info_flag_enables_when_specified() {
    for &flag in InfoFlag::value_variants() {
        assert!(!captured(None, || emit_info(flag)), "{}", flag.as_str());
        assert!(
            captured(Some(format!("{}=info", flag.target())), || emit_info(flag)),
            "{} did not emit output",
            flag.as_str()
        );
    }
}

#[test]
fn each_debug_flag_enables_when_specified() {
    for &flag in DebugFlag::value_variants() {
        assert!(!captured(None, || emit_debug(flag)), "{}", flag.as_str());
        assert!(
            captured(Some(format!("{}=trace", flag.target())), || emit_debug(flag)),
            "{} did not emit output",
            flag.as_str()
        );
    }
}
