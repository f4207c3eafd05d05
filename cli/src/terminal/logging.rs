use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use cafe_common::config::Config;

/// Prints one line per event: a colored level symbol, then the fields.
///
/// With `-vv` the event target is printed too, so resolver and transport
/// lines can be told apart.
pub struct CafeFormatter {
    show_target: bool,
}

impl CafeFormatter {
    pub fn new(verbosity: u8) -> Self {
        Self {
            show_target: verbosity >= 2,
        }
    }
}

fn level_symbol(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for CafeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{} ", level_symbol(meta.level()))?;

        if self.show_target {
            write!(writer, "{} ", format!("{}:", meta.target()).bright_black())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber on stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cfg.verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(CafeFormatter::new(cfg.verbosity))
        .with_writer(std::io::stderr)
        .init();
}
