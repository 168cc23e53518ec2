use crate::core::eligibility::{compute_eligibility, validate_submission};
use crate::core::qr::IssuedPass;
use crate::domain::model::{BatchReport, Eligibility, PassSummary, ReportFormat, VisitorInput};
use crate::domain::ports::{BatchSettings, Storage};
use crate::utils::error::{PassError, Result};
use chrono::NaiveDate;

/// Evaluates a CSV of visitor submissions (`name,dob` headers) against a
/// single `today` and stores a pass report.
pub struct BatchRunner<S: Storage, C: BatchSettings> {
    storage: S,
    config: C,
}

impl<S: Storage, C: BatchSettings> BatchRunner<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn read_visitors(&self) -> Result<Vec<VisitorInput>> {
        let data = self.storage.read_file(self.config.input())?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut visitors = Vec::new();
        for row in reader.deserialize() {
            let visitor: VisitorInput = row?;
            visitors.push(visitor);
        }
        tracing::debug!("Read {} visitor rows from {}", visitors.len(), self.config.input());
        Ok(visitors)
    }

    /// `invalid` counts rows with an unusable date of birth. In strict mode
    /// those rows (and any other rejected row) are left out of the report;
    /// otherwise they are reported as `NaN`/`Not Eligible` and also counted
    /// under `not_eligible`.
    pub fn evaluate(&self, visitors: Vec<VisitorInput>, today: NaiveDate) -> (Vec<PassSummary>, usize) {
        let strict = self.config.strict();
        let mut summaries = Vec::with_capacity(visitors.len());
        let mut invalid = 0;

        for (index, visitor) in visitors.into_iter().enumerate() {
            if strict {
                if let Err(e) = validate_submission(&visitor, today) {
                    // 第 1 列是標題
                    tracing::warn!("⚠️ Skipping row {}: {}", index + 2, e);
                    invalid += 1;
                    continue;
                }
            }

            let result = compute_eligibility(&visitor.name, &visitor.dob, today);
            if result.age.years().is_none() {
                invalid += 1;
            }
            summaries.push(PassSummary::new(visitor, result));
        }

        (summaries, invalid)
    }

    pub fn encode(&self, summaries: &[PassSummary]) -> Result<Vec<u8>> {
        match self.config.report_format() {
            ReportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record(["name", "dob", "age", "eligibility"])?;
                for summary in summaries {
                    let age = summary.age.to_string();
                    writer.write_record([
                        summary.name.as_str(),
                        summary.dob.as_str(),
                        age.as_str(),
                        summary.eligibility.label(),
                    ])?;
                }
                writer
                    .into_inner()
                    .map_err(|e| PassError::IoError(e.into_error()))
            }
            ReportFormat::Json => {
                let passes = summaries
                    .iter()
                    .map(IssuedPass::new)
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_json::to_vec_pretty(&passes)?)
            }
        }
    }

    pub fn run(&self, today: NaiveDate) -> Result<BatchReport> {
        tracing::info!("📥 Reading visitors from {}", self.config.input());
        let visitors = self.read_visitors()?;
        let total = visitors.len();

        let (summaries, invalid) = self.evaluate(visitors, today);
        let eligible = summaries
            .iter()
            .filter(|s| s.eligibility == Eligibility::Eligible)
            .count();
        let not_eligible = summaries.len() - eligible;

        let output_file = self.config.output_file();
        let encoded = self.encode(&summaries)?;
        self.storage.write_file(&output_file, &encoded)?;

        tracing::info!(
            "📊 {} visitors: {} eligible, {} not eligible, {} invalid",
            total,
            eligible,
            not_eligible,
            invalid
        );

        Ok(BatchReport {
            total,
            eligible,
            not_eligible,
            invalid,
            output_path: output_file,
        })
    }
}
