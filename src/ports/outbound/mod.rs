/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, bundled data).
pub mod allow_list_provider;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_reader;

pub use allow_list_provider::AllowListProvider;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::SbomReader;
