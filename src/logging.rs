//! Routes `log` output (and `tracing` events, through its `log` feature) to a caller supplied
//! writer. Machine-readable logfmt by default, the human format when the destination is a
//! terminal. Whether it is a terminal is the caller's call.

use std::borrow::Cow;
use std::io::Write;

use env_logger::fmt::Formatter;
use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter, Record, SetLoggerError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `t=... lvl=... msg=...` lines.
    #[default]
    Logfmt,
    /// env_logger's own format, with colours where the destination takes them.
    Terminal,
}

impl LogFormat {
    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Self::Terminal
        } else {
            Self::Logfmt
        }
    }
}

pub struct LogOutput {
    writer: Box<dyn Write + Send>,
    format: LogFormat,
    level: LevelFilter,
}

impl LogOutput {
    /// Only errors are logged unless RUST_LOG says otherwise.
    pub fn new(writer: impl Write + Send + 'static, is_terminal: bool) -> Self {
        Self {
            writer: Box::new(writer),
            format: LogFormat::for_terminal(is_terminal),
            level: LevelFilter::Error,
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// The default level, RUST_LOG still takes precedence.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    pub fn builder(self) -> Builder {
        let mut builder = Builder::new();
        builder
            .filter_level(self.level)
            .parse_default_env()
            .target(Target::Pipe(self.writer));
        match self.format {
            LogFormat::Logfmt => {
                builder.write_style(WriteStyle::Never).format(write_logfmt);
            }
            LogFormat::Terminal => {
                builder
                    .write_style(WriteStyle::Always)
                    .format_timestamp_millis();
            }
        }
        builder
    }

    /// Installs this as the process-wide logger. Fails if one was already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        self.builder().try_init()
    }
}

fn write_logfmt(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let t = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%z");
    writeln!(
        buf,
        "t={} lvl={} msg={} target={}",
        t,
        level_abbrev(record.level()),
        logfmt_value(&record.args().to_string()),
        logfmt_value(record.target()),
    )
}

fn level_abbrev(level: Level) -> &'static str {
    match level {
        Level::Error => "eror",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug => "dbug",
        Level::Trace => "trce",
    }
}

fn logfmt_value(value: &str) -> Cow<str> {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c <= ' ' || c == '=' || c == '"' || c == '\\');
    if !needs_quotes {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
