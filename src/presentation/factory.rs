//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{
    ConsoleEventSink, FileLogFactory, FtpConnector, GeneratorBuilder, JsonEventSink,
};
use crate::ui::UiContext;

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<GeneratorBuilder, FtpConnector, FileLogFactory>;

/// Event sink matching the output mode
pub fn create_event_sink(ui: &UiContext) -> Arc<dyn DeployEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(*ui))
    }
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(ui: &UiContext) -> ConcreteDeployUseCase {
    DeployUseCase::new(
        GeneratorBuilder::new(),
        FtpConnector::new(),
        FileLogFactory::new(ui.verbose),
    )
    .with_events(create_event_sink(ui))
}
