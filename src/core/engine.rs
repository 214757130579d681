use crate::adapters::decoder_for;
use crate::core::report::build_report;
use crate::core::resolver::resolve_input;
use crate::domain::model::ProductReport;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

pub struct ReportEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ReportEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Resolve, decode, then select. Any error ends the run.
    pub fn run(&self) -> Result<ProductReport> {
        let mut input = resolve_input(self.config.input_path(), self.config.format_override())?;
        tracing::info!(
            "Reading {} as {}",
            input.path.display(),
            input.format
        );

        let products = decoder_for(input.format).decode(&mut input.file)?;
        tracing::info!("Decoded {} products", products.len());

        let report = build_report(&products)?;
        tracing::debug!(
            most_expensive = %report.most_expensive.name,
            highest_rated = %report.highest_rated.name,
            "Report ready"
        );

        Ok(report)
    }
}
