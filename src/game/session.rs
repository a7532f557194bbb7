use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::config::GameConfig;
use super::deck::{build_deck, grid_columns};
use super::error::{ConfigError, GameError};
use super::presenter::Presenter;
use super::scheduler::{Scheduler, TaskId};
use super::state::{Card, CardId, ComparisonPhase, Face, LevelOutcome, Selection, SessionStats};
use super::timer::{ElapsedTimer, format_mm_ss};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionTask {
    Tick,
    HideMismatch { first: CardId, second: CardId },
    AnnounceCompletion,
}

/// One player's game: the current level's deck, the comparison in progress,
/// counters, the timer, and every pending delayed continuation.
///
/// Starting a level (including [`restart`](Self::restart) and
/// [`advance_level`](Self::advance_level)) cancels everything still queued,
/// so a hide or an announcement scheduled for the old deck can never touch
/// the new one.
pub struct GameSession<P: Presenter> {
    config: GameConfig,
    presenter: P,
    rng: StdRng,
    scheduler: Scheduler<SessionTask>,
    level: usize,
    cards: Vec<Card>,
    moves: u32,
    matched_pairs: usize,
    selection: Selection,
    timer: ElapsedTimer,
    outcome: LevelOutcome,
    pending_hide: Option<TaskId>,
    pending_announce: Option<TaskId>,
}

impl<P: Presenter> GameSession<P> {
    /// Creates a session on level 1 with an OS-seeded shuffle.
    pub fn new(config: GameConfig, presenter: P) -> Result<Self, ConfigError> {
        Self::with_rng(config, presenter, StdRng::from_os_rng())
    }

    /// Like [`new`](Self::new) but every deck is reproducible from `seed`.
    pub fn with_seed(config: GameConfig, presenter: P, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, presenter, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GameConfig, presenter: P, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = GameSession {
            config,
            presenter,
            rng,
            scheduler: Scheduler::new(),
            level: 1,
            cards: Vec::new(),
            moves: 0,
            matched_pairs: 0,
            selection: Selection::default(),
            timer: ElapsedTimer::default(),
            outcome: LevelOutcome::Playing,
            pending_hide: None,
            pending_announce: None,
        };
        session.restart();
        Ok(session)
    }

    pub fn start_level(&mut self, level: usize) -> Result<(), GameError> {
        let Some(pair_count) = self.config.pair_count(level) else {
            return Err(GameError::InvalidLevel {
                level,
                level_count: self.config.level_count(),
            });
        };
        self.load_level(level, pair_count);
        Ok(())
    }

    pub fn advance_level(&mut self) -> Result<(), GameError> {
        self.start_level(self.level + 1)
    }

    pub fn restart(&mut self) {
        // Config validation guarantees at least one level.
        let pair_count = self.config.levels[0];
        self.load_level(1, pair_count);
    }

    fn load_level(&mut self, level: usize, pair_count: usize) {
        self.scheduler.cancel_all();
        self.pending_hide = None;
        self.pending_announce = None;

        self.level = level;
        self.moves = 0;
        self.matched_pairs = 0;
        self.timer = ElapsedTimer::default();
        self.selection.clear();
        self.outcome = LevelOutcome::Playing;
        self.cards = build_deck(&self.config.symbols, pair_count, &mut self.rng);

        debug!(level, pair_count, cards = self.cards.len(), "level started");

        let level_count = self.config.level_count();
        self.presenter.level_started(level, level_count, pair_count);
        self.presenter.moves_changed(0);
        self.presenter.pairs_changed(0, pair_count);
        self.presenter.time_changed(&format_mm_ss(0));
        self.presenter
            .deck_initialized(&self.cards, grid_columns(self.cards.len()));
    }

    /// Flips a face-down card. Returns whether the activation was taken.
    ///
    /// Ignored while a mismatch is on display, for the card already picked,
    /// for matched or unknown cards.
    pub fn activate_card(&mut self, card: CardId) -> bool {
        if self.selection.input_locked {
            trace!(%card, "activation ignored: board locked");
            return false;
        }
        if self.selection.first_pick == Some(card) {
            trace!(%card, "activation ignored: already picked");
            return false;
        }
        match self.cards.get(card.index()) {
            Some(target) if target.is_hidden() => {}
            Some(target) => {
                trace!(%card, face = target.face.as_str(), "activation ignored: not face down");
                return false;
            }
            None => {
                trace!(%card, "activation ignored: no such card");
                return false;
            }
        }

        if self.timer.can_start() {
            let tick = self
                .scheduler
                .schedule_repeating(self.config.tick_period(), SessionTask::Tick);
            self.timer.start(tick);
            debug!(level = self.level, "timer started");
        }

        self.set_face(card, Face::Revealed);

        let Some(first) = self.selection.first_pick else {
            self.selection.first_pick = Some(card);
            return true;
        };

        self.selection.second_pick = Some(card);
        self.moves = self.moves.saturating_add(1);
        self.presenter.moves_changed(self.moves);
        self.evaluate_match(first, card);
        true
    }

    fn evaluate_match(&mut self, first: CardId, second: CardId) {
        let is_match = self.cards[first.index()].pairs_with(&self.cards[second.index()]);

        if is_match {
            self.set_face(first, Face::Matched);
            self.set_face(second, Face::Matched);
            self.matched_pairs += 1;
            let total = self.pair_count();
            self.presenter.pairs_changed(self.matched_pairs, total);
            self.selection.clear();
            debug!(
                %first,
                %second,
                matched = self.matched_pairs,
                total,
                "pair matched"
            );

            if self.matched_pairs == total {
                self.complete_level();
            }
        } else {
            self.selection.input_locked = true;
            let hide = self.scheduler.schedule_once(
                self.config.mismatch_delay(),
                SessionTask::HideMismatch { first, second },
            );
            self.pending_hide = Some(hide);
            debug!(%first, %second, moves = self.moves, "mismatch");
        }
    }

    fn complete_level(&mut self) {
        if self.outcome != LevelOutcome::Playing {
            return;
        }
        if let Some(tick) = self.timer.stop() {
            self.scheduler.cancel(tick);
        }
        self.outcome = LevelOutcome::Completed;
        let announce = self
            .scheduler
            .schedule_once(self.config.completion_delay(), SessionTask::AnnounceCompletion);
        self.pending_announce = Some(announce);
        debug!(
            level = self.level,
            moves = self.moves,
            seconds = self.timer.seconds(),
            "level cleared"
        );
    }

    /// Feeds `elapsed` time into the session, firing every task that falls
    /// due in deadline order.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some((id, task)) = self.scheduler.pop_due(until) {
            self.run_task(id, task);
        }
        self.scheduler.advance_to(until);
    }

    fn run_task(&mut self, id: TaskId, task: SessionTask) {
        match task {
            SessionTask::Tick => {
                let seconds = self.timer.tick();
                trace!(?id, seconds, "tick");
                self.presenter.time_changed(&format_mm_ss(seconds));
            }
            SessionTask::HideMismatch { first, second } => {
                self.pending_hide = None;
                self.set_face(first, Face::Hidden);
                self.set_face(second, Face::Hidden);
                self.selection.clear();
                trace!(?id, %first, %second, "mismatch hidden");
            }
            SessionTask::AnnounceCompletion => {
                self.pending_announce = None;
                self.outcome = LevelOutcome::Announced;
                let time = self.timer.formatted();
                if self.has_next_level() {
                    debug!(level = self.level, "announcing level complete");
                    self.presenter.level_complete(self.moves, &time, true);
                } else {
                    debug!(level = self.level, "announcing game complete");
                    self.presenter.game_complete(self.moves, &time);
                }
            }
        }
    }

    fn set_face(&mut self, card: CardId, face: Face) {
        self.cards[card.index()].face = face;
        self.presenter.card_state_changed(card, face);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn level_count(&self) -> usize {
        self.config.level_count()
    }

    pub fn has_next_level(&self) -> bool {
        self.level < self.config.level_count()
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, card: CardId) -> Option<&Card> {
        self.cards.get(card.index())
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            moves: self.moves,
            matched_pairs: self.matched_pairs,
            elapsed_seconds: self.timer.seconds(),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn phase(&self) -> ComparisonPhase {
        self.selection.phase()
    }

    pub fn outcome(&self) -> LevelOutcome {
        self.outcome
    }

    pub fn timer(&self) -> &ElapsedTimer {
        &self.timer
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.seconds()
    }

    /// Virtual time fed in so far.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Deadline of the next queued task of any kind, including ticks.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// True while a mismatch-hide or completion announcement is queued.
    pub fn has_pending_delay(&self) -> bool {
        self.pending_hide.is_some() || self.pending_announce.is_some()
    }

    /// Time left until the nearest queued hide or announcement.
    pub fn next_delay_in(&self) -> Option<Duration> {
        [self.pending_hide, self.pending_announce]
            .into_iter()
            .flatten()
            .filter_map(|id| self.scheduler.deadline(id))
            .min()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }
}
