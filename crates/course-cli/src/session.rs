//! One interactive run: load, sort, filter and report.
//!
//! Each choice comes from [`SessionOptions`] when given on the command line
//! and is otherwise prompted for, in the same order the report needs it.
//! Unknown sort keys and filter selectors are not fatal: the session logs a
//! warning, leaves the order unchanged or selects nothing, and carries on.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use course_core::{select, sort_records};
use course_ingest::load_records;
use course_model::{SortKey, YearFilter};
use tracing::{info, info_span, warn};

use crate::prompt::{FILENAME_PROMPT, FILTER_PROMPT, Prompter, SORT_PROMPT};
use crate::report::{write_json_report, write_loaded_count, write_table_report, write_text_report};

/// How the selected courses are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// One line per course, as printed by the interactive tool.
    #[default]
    Text,
    /// Bordered tables.
    Table,
    /// A single JSON document.
    Json,
}

/// Choices supplied up front; missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub file: Option<PathBuf>,
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub output: OutputStyle,
}

/// Counts reported back to the caller once the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub loaded: usize,
    pub selected: usize,
}

/// Run the whole pipeline, writing the report to `out`.
///
/// # Errors
///
/// Fails when no filename is available, the data file cannot be opened, or
/// writing to `out` or the prompt stream fails. Unreadable or malformed
/// lines only cut the load short.
pub fn run_session<R, P, W>(
    options: &SessionOptions,
    prompter: &mut Prompter<R, P>,
    out: &mut W,
) -> Result<SessionOutcome>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let path = match &options.file {
        Some(path) => path.clone(),
        None => match prompter.ask_token(FILENAME_PROMPT)? {
            Some(name) => PathBuf::from(name),
            None => bail!("no data filename given"),
        },
    };

    let loaded = load_records(&path)?;
    let mut records = loaded.into_records();
    info!(path = %path.display(), records = records.len(), "loaded course records");
    if options.output != OutputStyle::Json {
        write_loaded_count(out, records.len()).context("write report")?;
        out.flush().context("write report")?;
    }

    let sort_answer = match &options.sort {
        Some(answer) => Some(answer.clone()),
        None => prompter.ask_token(SORT_PROMPT)?,
    };
    let sort = resolve_sort_key(sort_answer.as_deref());
    if let Some(key) = sort {
        let span = info_span!("sort", key = %key);
        span.in_scope(|| sort_records(&mut records, key));
    }

    let filter_answer = match &options.filter {
        Some(answer) => Some(answer.clone()),
        None => prompter.ask_char(FILTER_PROMPT)?.map(String::from),
    };
    let filter = resolve_year_filter(filter_answer.as_deref());
    let selection = select(&records, filter);
    info!(
        selected = selection.len(),
        total = records.len(),
        "selected course records"
    );

    let written = match options.output {
        OutputStyle::Text => write_text_report(out, &selection),
        OutputStyle::Table => write_table_report(out, &selection),
        OutputStyle::Json => write_json_report(out, records.len(), sort, &selection),
    };
    written.context("write report")?;
    out.flush().context("write report")?;

    Ok(SessionOutcome {
        loaded: records.len(),
        selected: selection.len(),
    })
}

/// Parse a sort answer; anything unrecognised keeps the loaded order.
pub fn resolve_sort_key(answer: Option<&str>) -> Option<SortKey> {
    let Some(answer) = answer else {
        warn!("no sort key given, keeping file order");
        return None;
    };
    match answer.parse::<SortKey>() {
        Ok(key) => Some(key),
        Err(error) => {
            warn!(%error, "keeping file order");
            None
        }
    }
}

/// Parse a filter answer; anything unrecognised selects no course.
pub fn resolve_year_filter(answer: Option<&str>) -> Option<YearFilter> {
    let Some(answer) = answer else {
        warn!("no filter selector given, selecting no courses");
        return None;
    };
    match answer.parse::<YearFilter>() {
        Ok(filter) => Some(filter),
        Err(error) => {
            warn!(%error, "selecting no courses");
            None
        }
    }
}
