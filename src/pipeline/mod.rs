// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod cleanup;
pub mod extract;
mod orchestrator;
pub mod plot;
mod progress;
pub mod stage;
pub mod transcode;

pub use cleanup::remove_intermediate;
pub use extract::{ProcessExit, attribute_failure, extract_metadata};
pub use orchestrator::{PipelineOrchestrator, PipelineReport};
pub use plot::plot_metadata;
pub use progress::{BAR_WIDTH, ProgressFrame, ProgressTracker};
pub use stage::Stage;
pub use transcode::{consume_progress, transcode};
