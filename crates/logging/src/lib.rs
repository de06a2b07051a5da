// crates/logging/src/lib.rs

use std::fs::OpenOptions;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{
    EnvFilter, Layer, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

mod flags;
mod formatter;
mod json_format;
mod sink;

pub use flags::{DebugFlag, InfoFlag, LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::CompatFormatter;
pub use json_format::JsonFormatter;

use crate::sink::{FileWriter, LogWriter};

fn base_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

fn directive(target: &str, level: &str) -> io::Result<Directive> {
    format!("{target}={level}")
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        info,
        debug,
        quiet,
        log_file,
        colored,
        timestamps,
    } = cfg;
    let mut level = base_level(verbose, quiet);
    if !quiet {
        if !debug.is_empty() && level < LevelFilter::DEBUG {
            level = LevelFilter::DEBUG;
        } else if !info.is_empty() && level < LevelFilter::INFO {
            level = LevelFilter::INFO;
        }
    }
    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if !quiet {
        for flag in &info {
            filter = filter.add_directive(directive(flag.target(), "info")?);
        }
        for flag in &debug {
            filter = filter.add_directive(directive(flag.target(), "trace")?);
        }
    }

    let base = tracing_fmt::layer()
        .with_writer(LogWriter)
        .with_target(false)
        .with_level(false)
        .with_ansi(colored);
    let fmt_layer = match (format, timestamps) {
        (LogFormat::Json, _) => base.event_format(JsonFormatter::new(timestamps)).boxed(),
        (LogFormat::Text, true) => base
            .event_format(CompatFormatter::new(Some("%t [%p] %m".to_string())))
            .boxed(),
        (LogFormat::Text, false) => base.event_format(CompatFormatter::new(None)).boxed(),
    };

    let file_layer = if let Some((path, fmt)) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let base = tracing_fmt::layer()
            .with_writer(FileWriter { file })
            .with_ansi(false);
        let layer = match fmt.as_deref() {
            Some("json") => base.event_format(JsonFormatter::default()).boxed(),
            Some(template) => base
                .event_format(CompatFormatter::new(Some(template.to_string())))
                .boxed(),
            None => base
                .event_format(CompatFormatter::new(Some("%t [%p] %l %m".to_string())))
                .boxed(),
        };
        Some(layer)
    } else {
        None
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(file_layer);
    Ok(Box::new(registry))
}

pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Expands backslash escapes (`\n`, `\t`, `\\`, `\xHH`, octal `\NNN`) in
/// log templates supplied on the command line.
pub fn parse_escapes(input: &str) -> String {
    let mut out = String::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('e') => out.push('\x1b'),
            Some('\\') => out.push('\\'),
            Some('x') => {
                let mut val = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match chars.peek().and_then(|p| p.to_digit(16)) {
                        Some(d) => {
                            val = (val << 4) + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    tracing::warn!("invalid hex escape sequence");
                    out.push('x');
                } else if let Some(ch) = char::from_u32(val) {
                    out.push(ch);
                }
            }
            Some(c @ '0'..='7') => {
                let mut val = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|p| p.to_digit(8)) {
                        Some(d) => {
                            val = (val << 3) + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if let Some(ch) = char::from_u32(val) {
                    out.push(ch);
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
