// crates/logging/src/formatter.rs
use crate::parse_escapes;
use std::collections::HashMap;
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Plain-text event formatter.
///
/// Without a template the message is word-wrapped to `$COLUMNS` (80 when
/// unset). With a template, `%` tokens are substituted per event:
/// `%t` local time, `%p` pid, `%l` level, `%T` target, `%m` message,
/// `%v` the `peer` or `version` field, `%%` a literal percent.
///
/// When the writer accepts ANSI escapes, warnings and errors are coloured:
/// the whole message in the plain layout, the `%l` token in a template.
pub struct CompatFormatter {
    tokens: Option<Vec<Token>>,
}

impl CompatFormatter {
    pub fn new(format: Option<String>) -> Self {
        let tokens = format.map(|f| {
            let fmt = parse_escapes(&f);
            parse_tokens(&fmt)
        });
        Self { tokens }
    }

    fn columns() -> usize {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&c| c > 0)
            .unwrap_or(80)
    }

    fn wrap(msg: &str, width: usize) -> String {
        let mut out = String::new();
        let mut line_len = 0usize;
        for word in msg.split_whitespace() {
            let wlen = word.len();
            if line_len == 0 {
                out.push_str(word);
                line_len = wlen;
            } else if line_len + 1 + wlen > width {
                out.push('\n');
                out.push_str(word);
                line_len = wlen;
            } else {
                out.push(' ');
                out.push_str(word);
                line_len += 1 + wlen;
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Lit(String),
    Percent,
    Time,
    Pid,
    Level,
    Target,
    Message,
    Version,
}

fn parse_tokens(fmt: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = fmt.chars();
    let mut lit = String::new();
    while let Some(c) = chars.next() {
        if c != '%' {
            lit.push(c);
            continue;
        }
        let next = chars.next();
        let token = match next {
            Some('%') => Token::Percent,
            Some('t') => Token::Time,
            Some('p') => Token::Pid,
            Some('l') => Token::Level,
            Some('T') => Token::Target,
            Some('m') => Token::Message,
            Some('v') => Token::Version,
            _ => {
                lit.push('%');
                lit.extend(next);
                continue;
            }
        };
        if !lit.is_empty() {
            tokens.push(Token::Lit(std::mem::take(&mut lit)));
        }
        tokens.push(token);
    }
    if !lit.is_empty() {
        tokens.push(Token::Lit(lit));
    }
    tokens
}

struct MsgVisitor {
    msg: String,
    fields: HashMap<String, String>,
}

impl MsgVisitor {
    fn new() -> Self {
        Self {
            msg: String::new(),
            fields: HashMap::new(),
        }
    }
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(value);
        } else {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(&format!("{value:?}"));
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{value:?}"));
        }
    }
}

const RESET: &str = "\x1b[0m";

fn level_color(level: &Level) -> Option<&'static str> {
    match *level {
        Level::ERROR => Some("\x1b[31m"),
        Level::WARN => Some("\x1b[33m"),
        _ => None,
    }
}

fn push_styled(out: &mut String, text: &str, color: Option<&str>) {
    match color {
        Some(c) => {
            out.push_str(c);
            out.push_str(text);
            out.push_str(RESET);
        }
        None => out.push_str(text),
    }
}

fn format_time() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).unwrap_or_default()
}

impl<S, N> FormatEvent<S, N> for CompatFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::new();
        event.record(&mut visitor);
        let level = event.metadata().level();
        let color = if writer.has_ansi_escapes() {
            level_color(level)
        } else {
            None
        };
        if let Some(tokens) = &self.tokens {
            let mut out = String::new();
            for tok in tokens {
                match tok {
                    Token::Lit(s) => out.push_str(s),
                    Token::Percent => out.push('%'),
                    Token::Time => out.push_str(&format_time()),
                    Token::Pid => out.push_str(&std::process::id().to_string()),
                    Token::Level => push_styled(&mut out, level.as_str(), color),
                    Token::Target => out.push_str(event.metadata().target()),
                    Token::Message => out.push_str(&visitor.msg),
                    Token::Version => {
                        if let Some(v) = visitor
                            .fields
                            .get("peer")
                            .or_else(|| visitor.fields.get("version"))
                        {
                            out.push_str(v);
                        }
                    }
                }
            }
            writer.write_str(&out)?;
            writer.write_char('\n')
        } else {
            let msg = if visitor.msg.is_empty() {
                event.metadata().target()
            } else {
                &visitor.msg
            };
            let width = Self::columns();
            let wrapped = Self::wrap(msg, width);
            let mut out = String::new();
            for (i, line) in wrapped.lines().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                push_styled(&mut out, line, color);
            }
            writer.write_str(&out)?;
            writer.write_char('\n')
        }
    }
}
