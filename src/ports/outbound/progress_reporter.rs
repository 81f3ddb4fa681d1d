/// ProgressReporter port for reporting progress during a check
///
/// Messages are diagnostics: adapters must keep them off the stream the
/// report is written to.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
