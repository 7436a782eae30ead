use crate::constants::{LOADING_MESSAGE, MATCH_BAR_WIDTH, NO_MATCH_MESSAGE, QUERY_PROMPT};
use crate::models::{DiagnosisConfig, KnowledgeBase, MatchResult, SymptomMatcher};
use crate::utils::render_match_bar;
use log::{debug, info};
use std::fmt;
use std::time::Instant;

/// Everything the screen displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub is_loading: bool,
    pub results: Option<Vec<MatchResult>>,
}

/// The phase of the interaction, derived from [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase<'a> {
    Idle,
    Loading,
    Result(&'a [MatchResult]),
}

#[derive(Debug, Clone)]
struct PendingDiagnosis {
    query: String,
    ready_at: Instant,
}

/// Interactive controller for the diagnosis screen.
///
/// A submission moves the view into `Loading` and records when its result becomes due. The
/// owner drives time forward by calling [`DiagnosisView::poll`]; once the deadline passes the
/// diagnosis for the submitted query is computed and replaces any previous result. An in-flight
/// diagnosis cannot be cancelled, and further submissions are refused until it lands.
pub struct DiagnosisView<'a> {
    matcher: SymptomMatcher<'a>,
    config: &'a DiagnosisConfig,
    state: ViewState,
    pending: Option<PendingDiagnosis>,
}

impl<'a> DiagnosisView<'a> {
    pub fn new(config: &'a DiagnosisConfig, knowledge_base: &'a KnowledgeBase) -> Self {
        Self {
            matcher: SymptomMatcher::new(config, knowledge_base),
            config,
            state: ViewState::default(),
            pending: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> ViewPhase<'_> {
        if self.state.is_loading {
            ViewPhase::Loading
        } else {
            match &self.state.results {
                Some(results) => ViewPhase::Result(results),
                None => ViewPhase::Idle,
            }
        }
    }

    /// Replaces the text in the input field. Does not affect a diagnosis already in flight.
    pub fn set_query(&mut self, query: &str) {
        self.state.query = query.to_string();
    }

    /// Mirrors the submit button being enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading && !self.state.query.trim().is_empty()
    }

    /// Submits the current query at time `now`.
    ///
    /// Returns `false`, leaving the view untouched, when the query is blank or a diagnosis is
    /// already loading.
    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.can_submit() {
            debug!("Ignoring submission of {:?}", self.state.query);
            return false;
        }

        let ready_at = now + self.config.simulated_latency;

        self.pending = Some(PendingDiagnosis {
            query: self.state.query.clone(),
            ready_at,
        });
        self.state.is_loading = true;

        info!("Analyzing symptoms {:?}", self.state.query);

        true
    }

    /// When the in-flight diagnosis becomes due, if any.
    pub fn ready_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.ready_at)
    }

    /// Applies the in-flight diagnosis if its delay has elapsed by `now`.
    ///
    /// Returns `true` when a result was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        let is_due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.ready_at);

        if !is_due {
            return false;
        }

        let Some(pending) = self.pending.take() else {
            return false;
        };

        let results = self.matcher.process_query(&pending.query);

        info!("Diagnosis ready with {} suggestion(s)", results.len());

        self.state.results = Some(results);
        self.state.is_loading = false;

        true
    }

    /// Renders the screen as plain text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiagnosisView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", QUERY_PROMPT)?;
        writeln!(f, "> {}", self.state.query)?;

        match self.phase() {
            ViewPhase::Idle => {}
            ViewPhase::Loading => {
                writeln!(f)?;
                writeln!(f, "{}", LOADING_MESSAGE)?;
            }
            ViewPhase::Result(results) => {
                writeln!(f)?;
                writeln!(f, "Diagnosis Suggestions")?;

                if results.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "{}", NO_MATCH_MESSAGE)?;
                }

                for result in results {
                    writeln!(f)?;
                    writeln!(
                        f,
                        "{}  {}% match",
                        result.name.to_uppercase(),
                        result.match_percent
                    )?;
                    writeln!(
                        f,
                        "{}",
                        render_match_bar(result.match_percent, MATCH_BAR_WIDTH)
                    )?;
                    writeln!(f, "Evidence: {}", result.evidence)?;
                }
            }
        }

        Ok(())
    }
}
