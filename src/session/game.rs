//! The game session: deck, board, hint and stats for one game.

use rustc_hash::FxHashSet;

use super::hint::HintState;
use super::stats::{GameStats, StatsSnapshot};
use crate::cards::Card;
use crate::core::{GameRng, Result, SessionConfig};
use crate::rules::{self, MatchTriple};
use crate::zones::{Board, Deck};

/// One game of SET and the session that hosts it.
///
/// Owns the deck, board, hint and stats of the current game. All of them
/// are replaced together by [`GameSession::new_game`].
///
/// ## Usage
///
/// ```
/// use set_engine::core::SessionConfig;
/// use set_engine::session::GameSession;
///
/// let mut session = GameSession::new(SessionConfig::new().with_seed(42));
/// assert_eq!(session.board().len(), 12);
///
/// if let Some(triple) = session.find_all_matches().first().copied() {
///     let [i, j, k] = triple.indices();
///     session.remove_match(i, j, k).unwrap();
///     assert_eq!(session.stats().sets_found, 1);
/// }
/// ```
///
/// Not internally synchronized; share across threads behind a lock.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    /// Root of the seed chain for follow-up games.
    root_rng: GameRng,
    /// Seed of the current game. `None` for staged decks.
    seed: Option<u64>,
    deck: Deck,
    board: Board,
    hint: HintState,
    stats: GameStats,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    /// Start a new session and deal its first game.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = config.seed.initial_rng();
        let seed = rng.seed();
        let deck = Deck::new_shuffled(&mut rng);
        Self::start(config, rng, Some(seed), deck)
    }

    /// Start a session whose first game deals from `deck` (top first).
    ///
    /// Used to stage specific puzzle states.
    pub fn with_deck(config: SessionConfig, deck: Deck) -> Self {
        let rng = config.seed.initial_rng();
        Self::start(config, rng, None, deck)
    }

    fn start(config: SessionConfig, root_rng: GameRng, seed: Option<u64>, deck: Deck) -> Self {
        let mut session = Self {
            config,
            root_rng,
            seed,
            deck,
            board: Board::new(),
            hint: HintState::new(),
            stats: GameStats::new(),
        };
        log::debug!("new game: seed {:?}, {} cards in deck", session.seed, session.deck.len());
        session.deal(session.config.initial_deal);
        session
    }

    /// Discard the current game and deal a fresh one, reseeding per policy.
    pub fn new_game(&mut self) {
        let mut rng = self.config.seed.next_rng(&mut self.root_rng);
        self.seed = Some(rng.seed());
        self.deck = Deck::new_shuffled(&mut rng);
        self.board = Board::new();
        self.hint = HintState::new();
        self.stats = GameStats::new();
        log::debug!("new game: seed {:?}", self.seed);
        self.deal(self.config.initial_deal);
    }

    // === Dealing ===

    /// Move up to `count` cards from the deck to the end of the board.
    ///
    /// Returns the number actually dealt, which is less than `count` only
    /// when the deck runs out.
    pub fn deal(&mut self, count: usize) -> usize {
        let drawn = self.deck.draw(count);
        let dealt = drawn.len();
        self.board.extend(drawn);
        self.stats.record_dealt(dealt);

        if dealt < count {
            log::debug!("deck exhausted: dealt {} of {} requested", dealt, count);
        } else {
            log::debug!("dealt {} cards, {} left in deck", dealt, self.deck.len());
        }
        dealt
    }

    /// Deal the replenish count (three cards by default).
    pub fn deal_three(&mut self) -> usize {
        self.deal(self.config.replenish_count)
    }

    // === Rules ===

    /// Whether three cards form a match.
    #[must_use]
    pub fn is_match(a: &Card, b: &Card, c: &Card) -> bool {
        rules::is_match(a, b, c)
    }

    /// Whether the cards at three distinct board positions form a match.
    pub fn is_match_at(&self, i: usize, j: usize, k: usize) -> Result<bool> {
        self.board.check_triple([i, j, k])?;
        let cards = self.board.cards();
        Ok(rules::is_match(&cards[i], &cards[j], &cards[k]))
    }

    /// Every match on the board, lexicographically ascending.
    #[must_use]
    pub fn find_all_matches(&self) -> Vec<MatchTriple> {
        rules::find_all_matches(self.board.cards())
    }

    // === Hints ===

    /// Show or hide the hint. Returns the new visibility.
    ///
    /// Showing searches the board and records the first match; the hint
    /// counter only increases when a match was found.
    pub fn toggle_hint(&mut self) -> bool {
        if self.hint.is_visible() {
            self.hint.hide();
            return false;
        }

        let found = rules::first_match(self.board.cards());
        if let Some(triple) = found {
            self.stats.record_hint();
            log::debug!("hint shown: {}", triple);
        } else {
            log::debug!("hint shown: no match on board");
        }
        self.hint.show(found);
        true
    }

    /// Whether board `index` is highlighted by the visible hint.
    #[must_use]
    pub fn is_hint_card(&self, index: usize) -> bool {
        self.hint.is_hint_card(index)
    }

    #[must_use]
    pub fn hint(&self) -> &HintState {
        &self.hint
    }

    // === Removal ===

    /// Remove three cards, replenish, count a found set and hide the hint.
    ///
    /// Does not check that the cards form a match; see [`Self::claim_match`].
    /// Indices must be in bounds and pairwise distinct, otherwise an error
    /// is returned and nothing changes. Returns the number of replacement
    /// cards dealt.
    pub fn remove_match(&mut self, i: usize, j: usize, k: usize) -> Result<usize> {
        let removed = self.board.remove_triple([i, j, k])?;
        log::debug!(
            "removed {}, {}, {} at ({}, {}, {})",
            removed[0],
            removed[1],
            removed[2],
            i,
            j,
            k
        );

        let replenished = self.deal(self.config.replenish_count);
        self.stats.record_set();
        self.hint.hide();
        Ok(replenished)
    }

    /// Remove three cards only if they form a match.
    ///
    /// Returns whether a match was removed.
    pub fn claim_match(&mut self, i: usize, j: usize, k: usize) -> Result<bool> {
        if !self.is_match_at(i, j, k)? {
            log::debug!("({}, {}, {}) is not a match", i, j, k);
            return Ok(false);
        }
        self.remove_match(i, j, k)?;
        Ok(true)
    }

    // === Board Access ===

    #[must_use]
    pub fn board(&self) -> &[Card] {
        self.board.cards()
    }

    /// Copy of the card at `index`, if in range.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.board.get(index)
    }

    /// Copy of the card at `index`, or the zero card if out of range.
    ///
    /// Kept for renderers that may hold indices from before the board
    /// shrank; prefer [`Self::card_at`] elsewhere.
    #[must_use]
    pub fn card_at_or_default(&self, index: usize) -> Card {
        self.board.get(index).unwrap_or_default()
    }

    /// Overwrite one board slot directly.
    ///
    /// Bypasses deck accounting and stats, so it can introduce duplicates.
    pub fn set_card_at(&mut self, index: usize, card: Card) -> Result<()> {
        let previous = self.board.set(index, card)?;
        log::trace!("edited slot {}: {} -> {}", index, previous, card);
        Ok(())
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// A card that appears more than once across deck and board, if any.
    ///
    /// Only direct edits can cause one.
    #[must_use]
    pub fn duplicate_card(&self) -> Option<Card> {
        let mut seen = FxHashSet::default();
        self.deck
            .cards()
            .iter()
            .chain(self.board.cards())
            .copied()
            .find(|&card| !seen.insert(card))
    }

    // === Stats ===

    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    #[must_use]
    pub fn game_stats(&self) -> &GameStats {
        &self.stats
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Shuffle seed of the current game; `None` if the deck was staged.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
