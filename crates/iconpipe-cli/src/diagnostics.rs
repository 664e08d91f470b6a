//! Bridges core pipeline events to the CLI.

use crate::output::OutputFormatter;
use iconpipe_core::PipelineEvent;
use iconpipe_core::PipelineObserver;
use iconpipe_core::TracingObserver;

/// Observer that logs every event and shows it through the formatter.
pub struct CliObserver<'a> {
    formatter: &'a dyn OutputFormatter,
    tracing: TracingObserver,
}

impl<'a> CliObserver<'a> {
    pub fn new(formatter: &'a dyn OutputFormatter) -> Self {
        Self {
            formatter,
            tracing: TracingObserver,
        }
    }
}

impl PipelineObserver for CliObserver<'_> {
    fn on_event(&mut self, event: &PipelineEvent) {
        self.tracing.on_event(event);
        self.formatter.format_event(event);
    }
}
