//! File-backed deploy log
//!
//! Every deploy builds its own `tracing` dispatcher that appends
//! `YYYY-MM-DD HH:MM:SS,mmm - LEVEL - message` lines to the site's log file.
//! With `-v` the same events are mirrored to stderr.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::domain::ports::DeployLogFactory;
use crate::error::DeployResult;

/// Opens append-mode log files, one dispatcher per deploy
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLogFactory {
    verbose: u8,
}

impl FileLogFactory {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    fn stderr_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::OFF,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

impl DeployLogFactory for FileLogFactory {
    fn open(&self, log_file: &Path) -> DeployResult<Dispatch> {
        if let Some(dir) = log_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;

        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(LogLineFormat)
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .with_filter(LevelFilter::INFO);

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(self.stderr_level());

        let subscriber = tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer);

        Ok(Dispatch::new(subscriber))
    }
}

/// `<local time> - <LEVEL> - <message and fields>`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
