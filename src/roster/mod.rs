//! Batch checking of a roster of repository addresses.
//!
//! The roster is a CSV or Excel file with a header row. One column holds repository
//! addresses (any form accepted by [`RepositoryUrl`]); two status columns are appended
//! when missing and filled in for every selected row whose address could be parsed.
//! Results go to `<name>_processed.<ext>` unless another output path is given.

mod error;
mod sheet;

use std::{collections::HashMap, path::PathBuf};

use chrono::{DateTime, Utc};
use futures::{stream, StreamExt};
use strum::Display;

use crate::{
    backends::FetchError,
    config::Config,
    git::{Platform, RepositoryUrl},
    monitor::{Analyzer, MonitorRequest},
};

pub use self::error::RosterError;
pub use self::sheet::{processed_path, read_records, write_records, SheetFormat};

pub const ACCESSIBLE_COLUMN: &str = "accessible";
pub const SUBMISSION_COLUMN: &str = "submission";
pub const DEFAULT_REPOSITORY_COLUMN: &str = "repository";
pub const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubmissionStatus {
    #[strum(serialize = "on time")]
    OnTime,
    #[strum(serialize = "late")]
    Late,
    #[strum(serialize = "no deadline")]
    NoDeadline,
    #[strum(serialize = "commits but no recent push")]
    CommitsWithoutPush,
    #[strum(serialize = "empty repository")]
    EmptyRepository,
    #[strum(serialize = "analysis failed")]
    AnalysisFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Address missing or not understood; the row is left untouched.
    Skipped,
    Inaccessible,
    Checked(SubmissionStatus),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub rows: usize,
    pub skipped: usize,
    pub inaccessible: usize,
    pub on_time: usize,
    pub late: usize,
    pub undetermined: usize,
}

impl RosterSummary {
    fn record(&mut self, outcome: RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Skipped => self.skipped += 1,
            RowOutcome::Inaccessible => self.inaccessible += 1,
            RowOutcome::Checked(SubmissionStatus::OnTime) => self.on_time += 1,
            RowOutcome::Checked(SubmissionStatus::Late) => self.late += 1,
            RowOutcome::Checked(_) => self.undetermined += 1,
        }
    }
}

/// Inclusive range of roster rows, numbered from 1 with the header as row 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    start: usize,
    end: Option<usize>,
}

impl RowRange {
    pub fn new(start: usize, end: Option<usize>) -> Result<Self, RosterError> {
        let invalid = RosterError::InvalidRowRange {
            start,
            end: end.unwrap_or(start),
        };
        match end {
            _ if start < 2 => Err(invalid),
            Some(end) if end < start => Err(invalid),
            _ => Ok(Self { start, end }),
        }
    }

    /// Zero-based record indices covered by the range, given the total row count.
    fn indices(&self, total: usize) -> Result<std::ops::Range<usize>, RosterError> {
        let end = self.end.unwrap_or(total);
        if end > total {
            return Err(RosterError::RowOutOfRange { end, total });
        }

        Ok(self.start - 1..end.max(self.start - 1))
    }
}

impl Default for RowRange {
    fn default() -> Self {
        Self { start: 2, end: None }
    }
}

#[derive(Debug, Clone)]
pub struct RosterOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub repository_column: String,
    pub deadline: Option<DateTime<Utc>>,
    pub concurrency: usize,
    pub rows: RowRange,
}

impl RosterOptions {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: None,
            repository_column: DEFAULT_REPOSITORY_COLUMN.into(),
            deadline: None,
            concurrency: DEFAULT_CONCURRENCY,
            rows: RowRange::default(),
        }
    }

    pub fn output_path(&self) -> Result<PathBuf, RosterError> {
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => processed_path(&self.input),
        }
    }
}

#[derive(Debug)]
pub struct RosterChecker {
    config: Config,
    analyzers: HashMap<Platform, Analyzer>,
}

impl RosterChecker {
    pub fn new(config: Config, analyzers: HashMap<Platform, Analyzer>) -> Self {
        Self { config, analyzers }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let analyzers = [Platform::GitHub, Platform::Gitee]
            .into_iter()
            .map(|p| Analyzer::from_config(p, config).map(|a| (p, a)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self::new(config.clone(), analyzers))
    }

    #[tracing::instrument(skip(self, deadline))]
    pub async fn check_repository(&self, address: &str, deadline: Option<DateTime<Utc>>) -> RowOutcome {
        let url = match RepositoryUrl::parse(address) {
            Ok(url) => url,
            Err(e) => {
                tracing::info!(error = %e, "skipping row");
                return RowOutcome::Skipped;
            }
        };

        let analyzer = match self.analyzers.get(&url.platform()) {
            Some(a) => a,
            None => {
                tracing::warn!(platform = %url.platform(), "no client configured");
                return RowOutcome::Skipped;
            }
        };

        let token = self.config.token_for(url.platform()).cloned();
        let request = MonitorRequest::new(url.path().clone(), url.platform())
            .with_token(token)
            .with_deadline(deadline);

        let result = match analyzer.try_analyze(&request).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "repository not accessible");
                return RowOutcome::Inaccessible;
            }
        };

        if !result.is_found() {
            let status = match analyzer
                .fetcher()
                .has_commits(request.repository(), request.token())
                .await
            {
                Ok(true) => SubmissionStatus::CommitsWithoutPush,
                Ok(false) => SubmissionStatus::EmptyRepository,
                Err(e) => {
                    tracing::warn!(error = %e, "could not check commits");
                    SubmissionStatus::AnalysisFailed
                }
            };
            return RowOutcome::Checked(status);
        }

        RowOutcome::Checked(match result.submitted_before() {
            Some(true) => SubmissionStatus::OnTime,
            Some(false) => SubmissionStatus::Late,
            None if deadline.is_none() => SubmissionStatus::NoDeadline,
            None => SubmissionStatus::AnalysisFailed,
        })
    }

    /// Check the selected rows of the roster and write the result file.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, options: &RosterOptions) -> Result<RosterSummary, RosterError> {
        let output = options.output_path()?;
        let mut records = read_records(&options.input)?;
        if records.len() < 2 {
            return Err(RosterError::Empty(options.input.clone()));
        }
        let selected = options.rows.indices(records.len())?;

        let repository_idx = find_column(&records[0], &options.repository_column, false)
            .ok_or_else(|| RosterError::MissingColumn(options.repository_column.clone()))?;
        let accessible_idx = ensure_column(&mut records, ACCESSIBLE_COLUMN);
        let submission_idx = ensure_column(&mut records, SUBMISSION_COLUMN);

        let addresses: Vec<Option<String>> = records[selected.clone()]
            .iter()
            .map(|r| r.get(repository_idx).cloned())
            .collect();

        let outcomes: Vec<RowOutcome> = stream::iter(addresses)
            .map(|address| async move {
                match address {
                    Some(a) => self.check_repository(&a, options.deadline).await,
                    None => RowOutcome::Skipped,
                }
            })
            .buffered(options.concurrency.max(1))
            .collect()
            .await;

        let mut summary = RosterSummary::default();
        for (record, outcome) in records[selected].iter_mut().zip(outcomes) {
            summary.record(outcome);
            match outcome {
                RowOutcome::Skipped => {}
                RowOutcome::Inaccessible => record[accessible_idx] = "no".into(),
                RowOutcome::Checked(status) => {
                    record[accessible_idx] = "yes".into();
                    record[submission_idx] = status.to_string();
                }
            }
        }

        write_records(&output, &records)?;

        tracing::info!(?summary, output = %output.display(), "roster processed");

        Ok(summary)
    }
}

fn find_column(header: &[String], name: &str, exact: bool) -> Option<usize> {
    let name = name.to_lowercase();
    header.iter().position(|h| {
        let h = h.trim().to_lowercase();
        if exact {
            h == name
        } else {
            h.contains(&name)
        }
    })
}

/// Index of the named column, appending it when missing.
///
/// A new column goes after the widest row so that no existing cell is reused.
/// All rows are then padded to a common width.
fn ensure_column(records: &mut [Vec<String>], name: &str) -> usize {
    let idx = match find_column(&records[0], name, true) {
        Some(idx) => idx,
        None => {
            let width = records.iter().map(Vec::len).max().unwrap_or(0);
            records[0].resize(width, String::new());
            records[0].push(name.into());
            width
        }
    };

    let width = records.iter().map(Vec::len).max().unwrap_or(0);
    for record in records.iter_mut() {
        if record.len() < width {
            record.resize(width, String::new());
        }
    }

    idx
}
