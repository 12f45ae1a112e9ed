//! Search session orchestration
//!
//! One session per navigation activation. Holds the query state machine,
//! decides between full scans and incremental narrowing, schedules the
//! skim re-search, and hands match sets to the tagging collaborator. All
//! mutation happens on the host's event loop: search calls enqueue their
//! redraw/handoff effects, and `pump` drains them in order.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use crate::error::BeaconError;
use crate::finder::editor::{EditorOps, Tagger};
use crate::finder::highlight::{HighlightManager, ViewMark};
use crate::finder::scanner;
use crate::finder::spec::{Matcher, SearchSpec};
use crate::finder::trigger::Trigger;

/// Match counts below this no longer benefit from debounced skimming:
/// every candidate can carry a single-letter tag.
pub const SINGLE_TAG_LIMIT: usize = 26;

/// Settle delay for the deferred skim re-search.
pub const DEFAULT_SKIM_DELAY: Duration = Duration::from_millis(350);

/// Effects a search enqueues for the next `pump`. Redraw reads whatever
/// match set is current at drain time; the handoff carries the snapshot
/// from its own search.
#[derive(Debug)]
enum Effect {
    Redraw,
    Handoff { results: HashSet<usize> },
}

/// A live search session.
pub struct Session {
    query: String,
    shift_select: bool,
    skim: bool,
    spec: SearchSpec,
    results: HashSet<usize>,
    highlights: HighlightManager,
    trigger: Trigger,
    skim_delay: Duration,
    pending: VecDeque<Effect>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_skim_delay(DEFAULT_SKIM_DELAY)
    }

    pub fn with_skim_delay(skim_delay: Duration) -> Self {
        Self {
            query: String::new(),
            shift_select: false,
            skim: false,
            spec: SearchSpec::default(),
            results: HashSet::new(),
            highlights: HighlightManager::new(),
            trigger: Trigger::new(),
            skim_delay,
            pending: VecDeque::new(),
        }
    }

    /// The current query, case-normalized.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True iff the raw last character of the query was typed uppercase:
    /// the jump should extend the selection instead of moving the caret.
    pub fn is_shift_select_enabled(&self) -> bool {
        self.shift_select
    }

    /// True while in the provisional single-character state, pending more
    /// input or the settle timer.
    pub fn is_skim(&self) -> bool {
        self.skim
    }

    /// The current match set.
    pub fn results(&self) -> &HashSet<usize> {
        &self.results
    }

    /// The active search specification.
    pub fn spec(&self) -> &SearchSpec {
        &self.spec
    }

    /// Visible match highlights, minus the ones pruned after tagging.
    pub fn results_in_view(&self) -> &[ViewMark] {
        self.highlights.in_view()
    }

    /// Assign a new query.
    ///
    /// Empty values are ignored. A single-character query enters skim; a
    /// longer one searches, or drops its last character when that
    /// character is not a valid continuation of any cached match.
    pub fn set_query<E: EditorOps, T: Tagger>(
        &mut self,
        raw: &str,
        editor: &E,
        tagger: &mut T,
        now: Instant,
    ) {
        if raw.is_empty() {
            return;
        }
        self.shift_select = raw.chars().next_back().is_some_and(char::is_uppercase);

        let normalized = raw.to_lowercase();
        // The cache only accelerates extensions; a shrink or replacement
        // drops it and rescans in full.
        let is_extension = normalized.starts_with(self.query.as_str());
        if !is_extension {
            self.results.clear();
        }
        self.query = normalized;

        if self.query.chars().count() == 1 {
            self.skim(editor, tagger, now);
        } else if is_extension {
            self.search_or_backtrack(editor, tagger, now);
        } else {
            self.search_current(editor, tagger);
        }
    }

    /// Run a pattern search. Invalidates tag state up front, since pattern
    /// results are not comparable to the previous set. A malformed pattern
    /// surfaces here and leaves the session untouched.
    pub fn search_pattern<E: EditorOps, T: Tagger>(
        &mut self,
        pattern: &str,
        editor: &E,
        tagger: &mut T,
    ) -> Result<(), BeaconError> {
        let spec = SearchSpec::pattern(pattern);
        let matcher = spec.compile()?;
        tagger.reset();
        self.run_search(spec, &matcher, editor, tagger);
        Ok(())
    }

    /// Poll the deferred skim re-search. Fires at most once per skim
    /// entry, re-entering the normal search path with whatever query is
    /// current; inert when the query has since emptied.
    pub fn tick<E: EditorOps, T: Tagger>(&mut self, now: Instant, editor: &E, tagger: &T) {
        if self.trigger.fire_if_due(now) && !self.query.is_empty() {
            log::debug!("skim settle: re-searching {:?}", self.query);
            self.search_current(editor, tagger);
        }
    }

    /// Time until the skim trigger is due, for the host's poll timeout.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.trigger.time_left(now)
    }

    /// Drain queued redraw/handoff effects. Call once per event-loop turn,
    /// after input handling and ticking.
    pub fn pump<E: EditorOps, T: Tagger>(&mut self, editor: &mut E, tagger: &mut T) {
        while let Some(effect) = self.pending.pop_front() {
            match effect {
                Effect::Redraw => {
                    if self.results.len() < SINGLE_TAG_LIMIT {
                        self.skim = false;
                    }
                    self.highlights
                        .redraw(&self.results, &self.spec, &self.query, editor);
                }
                Effect::Handoff { results } => {
                    tagger.mark_or_jump(&self.spec, &results);
                    self.highlights.prune_discarded(tagger, editor);
                    self.skim = false;
                    editor.repaint_tag_markers();
                }
            }
        }
    }

    /// Tear the session down: clear the surface and every piece of search
    /// state. Idempotent, and safe at any point including mid-skim-delay;
    /// the armed trigger deliberately survives and fires into the
    /// empty-query no-op.
    pub fn discard<E: EditorOps>(&mut self, editor: &mut E) {
        editor.clear_highlights();
        self.query.clear();
        self.shift_select = false;
        self.skim = false;
        self.spec = SearchSpec::default();
        self.results.clear();
        self.highlights.clear();
        self.pending.clear();
    }

    fn apply_query<E: EditorOps, T: Tagger>(&mut self, editor: &E, tagger: &mut T, now: Instant) {
        if self.query.chars().count() == 1 {
            self.skim(editor, tagger, now);
        } else {
            self.search_or_backtrack(editor, tagger, now);
        }
    }

    /// Single-character queries churn too many highlights to settle on
    /// every keystroke: search once immediately, then re-search whatever
    /// the query has become after the settle delay.
    fn skim<E: EditorOps, T: Tagger>(&mut self, editor: &E, tagger: &mut T, now: Instant) {
        self.skim = true;
        log::debug!("skim entry for {:?}", self.query);
        self.search_current(editor, tagger);
        self.trigger.arm(now, self.skim_delay);
    }

    fn search_or_backtrack<E: EditorOps, T: Tagger>(
        &mut self,
        editor: &E,
        tagger: &mut T,
        now: Instant,
    ) {
        if self.is_plausible(editor, tagger) {
            self.search_current(editor, tagger);
        } else {
            // The appended character continues no match; drop it instead
            // of flashing an empty result set.
            log::debug!("dropping invalid continuation from {:?}", self.query);
            self.query.pop();
            self.apply_query(editor, tagger, now);
        }
    }

    /// A grown query is plausible iff some cached match still continues
    /// under it, or its tail is being consumed by the tagger.
    fn is_plausible<E: EditorOps, T: Tagger>(&self, editor: &E, tagger: &T) -> bool {
        scanner::any_match_continues(editor.text(), &self.results, &self.query)
            || tagger.has_tag_suffix(&self.query)
    }

    /// Literal search for the current query.
    fn search_current<E: EditorOps, T: Tagger>(&mut self, editor: &E, tagger: &T) {
        let spec = SearchSpec::literal(&self.query);
        let matcher = Matcher::literal(spec.string_to_find());
        self.run_search(spec, &matcher, editor, tagger);
    }

    fn run_search<E: EditorOps, T: Tagger>(
        &mut self,
        spec: SearchSpec,
        matcher: &Matcher,
        editor: &E,
        tagger: &T,
    ) {
        self.spec = spec;

        self.results = if !matcher.is_pattern() && !self.results.is_empty() {
            // Refinement: filter the cached set instead of rescanning the
            // whole buffer.
            scanner::narrow(editor.text(), &self.results, self.spec.string_to_find())
        } else {
            scanner::scan(editor, matcher)
        };
        log::debug!(
            "search {:?} -> {} match(es)",
            self.spec.string_to_find(),
            self.results.len()
        );

        // A tag-selection suffix means the extra characters belong to the
        // tagger; repainting the match layer would fight the tag markers.
        if !tagger.has_tag_suffix(&self.query) {
            self.pending.push_back(Effect::Redraw);
        }
        self.pending.push_back(Effect::Handoff {
            results: self.results.clone(),
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
