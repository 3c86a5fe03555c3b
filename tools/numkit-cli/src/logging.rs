//! Console logging for the numkit CLI
//!
//! Log lines go to stderr so stdout only carries command results.

use colored::{ColoredString, Colorize};
use tracing::Level;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
    EnvFilter,
};

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Bracketed level tag, colored the same way as the CLI's own messages
fn level_tag(level: &Level) -> ColoredString {
    let tag = format_level(level);
    match *level {
        Level::TRACE => tag.magenta(),
        Level::DEBUG => tag.blue(),
        Level::INFO => tag.green(),
        Level::WARN => tag.yellow(),
        Level::ERROR => tag.red().bold(),
    }
}

/// Event formatter that outputs: `HH:MM:SS.mmm [LEVEL] message`
///
/// The CLI is short-lived, so only the time of day is printed. With `ansi`
/// off (`--no-color` or a non-terminal consumer) the level tag is plain text.
struct BracketedLevelFormat {
    ansi: bool,
}

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(writer, "{} ", now.format("%H:%M:%S%.3f"))?;

        let level = event.metadata().level();
        if self.ansi && writer.has_ansi_escapes() {
            write!(writer, "{} ", level_tag(level))?;
        } else {
            write!(writer, "{} ", format_level(level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Default filter when `RUST_LOG` is not set
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes priority over the `--verbose` flag.
pub fn init(verbose: bool, ansi: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_ansi(ansi)
        .event_format(BracketedLevelFormat { ansi })
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
