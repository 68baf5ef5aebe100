//! Extraction session — the per-run workflow state machine.
//!
//! A [`Session`] walks Idle → Loading stop words → Reading input →
//! Counting → Displaying → Idle. Any I/O failure drops straight back to
//! Idle with the current result cleared, so a stale map is never displayed
//! as current. Saving is only possible while a result exists.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::freq::FrequencyMap;
use crate::observer::{
    NoopObserver, SessionObserver, StageClock, StageReport, STAGE_COUNT, STAGE_READ,
    STAGE_STOPWORDS,
};
use crate::report;
use crate::stopwords::StopWordSet;

/// A completed extraction: the source file and its tag frequencies.
#[derive(Debug, Clone)]
pub struct Extraction {
    source: PathBuf,
    tags: FrequencyMap,
}

impl Extraction {
    /// Path of the input file the tags were extracted from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The tag frequencies.
    pub fn tags(&self) -> &FrequencyMap {
        &self.tags
    }
}

/// Owns the current extraction result and runs the workflow.
///
/// Execution is strictly sequential: `extract` takes `&mut self` and is the
/// only writer; `render` and `save` borrow the result read-only.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Extraction>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current extraction, if the last run succeeded.
    pub fn current(&self) -> Option<&Extraction> {
        self.current.as_ref()
    }

    /// Run a full extraction with the default (no-op) observer.
    pub fn extract(&mut self, input: &Path, stop_words: &Path) -> Result<&Extraction> {
        self.extract_with(input, stop_words, &mut NoopObserver)
    }

    /// Run a full extraction, notifying `observer` at each stage boundary.
    ///
    /// The result replaces (never merges with) any previous extraction. On
    /// failure the session returns to idle with no current extraction; the
    /// previous result is not kept.
    pub fn extract_with(
        &mut self,
        input: &Path,
        stop_words: &Path,
        observer: &mut impl SessionObserver,
    ) -> Result<&Extraction> {
        // A failed run must not leave the previous result visible.
        self.current = None;

        observer.on_stage_start(STAGE_STOPWORDS);
        let clock = StageClock::start();
        let stop_set = StopWordSet::from_file(stop_words)?;
        let report = StageReport::with_items(clock.elapsed(), stop_set.len() as u64);
        observer.on_stage_end(STAGE_STOPWORDS, &report);
        debug!(stop_words = stop_set.len(), "stop-word list loaded");

        observer.on_stage_start(STAGE_READ);
        let clock = StageClock::start();
        let content = fs::read_to_string(input).map_err(|source| Error::InputRead {
            path: input.to_path_buf(),
            source,
        })?;
        let report = StageReport::with_items(clock.elapsed(), content.len() as u64);
        observer.on_stage_end(STAGE_READ, &report);

        observer.on_stage_start(STAGE_COUNT);
        let clock = StageClock::start();
        let tags = FrequencyMap::extract(&content, &stop_set);
        let report = StageReport::with_items(clock.elapsed(), tags.len() as u64);
        observer.on_stage_end(STAGE_COUNT, &report);
        info!(
            source = %input.display(),
            tags = tags.len(),
            occurrences = tags.total(),
            "extraction complete"
        );

        Ok(&*self.current.insert(Extraction {
            source: input.to_path_buf(),
            tags,
        }))
    }

    /// Render the current extraction as report text.
    ///
    /// Returns [`Error::NoData`] if no extraction has succeeded yet.
    pub fn render(&self) -> Result<String> {
        let current = self.current.as_ref().ok_or(Error::NoData)?;
        Ok(report::render(&current.source, &current.tags))
    }

    /// Save the current extraction's report to `target`.
    ///
    /// Read-only with respect to the frequency map. Returns
    /// [`Error::NoData`] if no extraction has succeeded yet.
    pub fn save(&self, target: &Path) -> Result<()> {
        let current = self.current.as_ref().ok_or(Error::NoData)?;
        report::save(target, &current.source, &current.tags)
    }
}
