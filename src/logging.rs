//! Logging setup
//!
//! In `github` mode every event becomes one stdout line prefixed with the
//! matching workflow command, so errors and notices show up as annotations.

use crate::cli::LogFormat;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Default filter; HTTP client internals only above warn
const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

/// Install the global subscriber; later calls are no-ops
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = match format {
        LogFormat::Github => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .event_format(GitHubFormat)
            .try_init(),
        LogFormat::Plain => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

/// Workflow command prefix for a level
///
/// Info events flagged with `notice = true` become notices.
pub fn workflow_prefix(level: Level, notice: bool) -> &'static str {
    match level {
        Level::ERROR => "::error::",
        Level::WARN => "::warning::",
        Level::INFO if notice => "::notice::",
        Level::INFO => "",
        Level::DEBUG => "::debug::",
        Level::TRACE => "::debug::Trace: ",
    }
}

/// Event formatter emitting GitHub workflow commands
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubFormat;

impl<S, N> FormatEvent<S, N> for GitHubFormat
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
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let prefix = workflow_prefix(*event.metadata().level(), visitor.notice);
        writeln!(writer, "{}{}{}", prefix, visitor.message, visitor.fields)
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
    notice: bool,
}

impl Visit for EventVisitor {
    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "notice" {
            self.notice = value;
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
