use crate::application::dto::{CheckRequest, CheckResponse};
use crate::license_check::domain::{AllowList, Component, SbomDocument};
use crate::license_check::services::{BaselineFilter, LicensePolicy};
use crate::ports::inbound::LicenseCheckPort;
use crate::ports::outbound::{AllowListProvider, ProgressReporter, SbomReader};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// CheckLicensesUseCase - Core use case for the license compliance check
///
/// Loads the allow-list and every input document up front, then runs the
/// baseline exclusion and license approval steps over the primary SBOM.
///
/// # Type Parameters
/// * `SR` - SbomReader implementation
/// * `ALP` - AllowListProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckLicensesUseCase<SR, ALP, PR> {
    sbom_reader: SR,
    allow_list_provider: ALP,
    progress_reporter: PR,
}

impl<SR, ALP, PR> CheckLicensesUseCase<SR, ALP, PR>
where
    SR: SbomReader,
    ALP: AllowListProvider,
    PR: ProgressReporter,
{
    /// Creates a new CheckLicensesUseCase with injected dependencies
    pub fn new(sbom_reader: SR, allow_list_provider: ALP, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            allow_list_provider,
            progress_reporter,
        }
    }

    /// Executes the license check
    ///
    /// # Errors
    /// Fails without producing a partial result if the allow-list is unusable,
    /// if any input cannot be read or parsed, or if the baseline document has
    /// no `components` field.
    pub fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        // Step 1: Load everything before filtering
        let allow_list = self.load_allow_list()?;
        let sbom = self.read_and_report_sbom(&request.sbom_path, "SBOM")?;
        let baseline = request
            .baseline_path
            .as_deref()
            .map(|path| self.read_and_report_sbom(path, "baseline SBOM"))
            .transpose()?;

        let components = sbom.components();

        // Step 2: Drop components the baseline already accounts for
        let candidates = match baseline.as_ref().zip(request.baseline_path.as_deref()) {
            Some((baseline, path)) => self.exclude_baseline_components(components, baseline, path)?,
            None => components.iter().collect(),
        };
        let excluded_by_baseline = components.len() - candidates.len();

        // Step 3: Keep components with an unapproved license
        let violations: Vec<Component> = LicensePolicy::new(&allow_list)
            .retain_unapproved(candidates)
            .into_iter()
            .cloned()
            .collect();

        self.progress_reporter.report_completion(&format!(
            "🔎 Checked {} component(s), {} with unapproved licenses",
            components.len() - excluded_by_baseline,
            violations.len()
        ));

        Ok(CheckResponse::new(
            violations,
            components.len(),
            excluded_by_baseline,
        ))
    }

    fn load_allow_list(&self) -> Result<AllowList> {
        let allow_list = self.allow_list_provider.load_allow_list()?;

        if allow_list.is_empty() {
            return Err(SbomError::AllowListError {
                details: "the allow-list contains no license identifiers".to_string(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "📋 Loaded {} approved license identifier(s)",
            allow_list.len()
        ));
        Ok(allow_list)
    }

    fn read_and_report_sbom(&self, path: &Path, label: &str) -> Result<SbomDocument> {
        self.progress_reporter
            .report(&format!("📖 Loading {} from: {}", label, path.display()));

        let document = self.sbom_reader.read_sbom(path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s)",
            document.components().len()
        ));
        Ok(document)
    }

    /// Applies the baseline filter
    ///
    /// A baseline without a `components` field is rejected rather than
    /// treated as empty, since that would report every component as new.
    fn exclude_baseline_components<'a>(
        &self,
        components: &'a [Component],
        baseline: &SbomDocument,
        baseline_path: &Path,
    ) -> Result<Vec<&'a Component>> {
        let baseline_components =
            baseline
                .declared_components()
                .ok_or_else(|| SbomError::BaselineMissingComponents {
                    path: baseline_path.to_path_buf(),
                })?;

        let filter = BaselineFilter::new(baseline_components);
        let candidates = filter.filter(components);

        self.progress_reporter.report(&format!(
            "🧹 Excluded {} component(s) already present in the baseline",
            components.len() - candidates.len()
        ));
        Ok(candidates)
    }
}

impl<SR, ALP, PR> LicenseCheckPort for CheckLicensesUseCase<SR, ALP, PR>
where
    SR: SbomReader,
    ALP: AllowListProvider,
    PR: ProgressReporter,
{
    fn check(&self, request: CheckRequest) -> Result<CheckResponse> {
        self.execute(request)
    }
}
