//! Game engine: deck ownership, the round loop, and final scoring.
//!
//! ## Phases
//!
//! ```text
//! Pending --authorize--> Ready --start--> Playing --(deck < 2)--> Finished
//!    |
//!    +--(rejected)--> Unauthorized
//! ```
//!
//! Each round draws two cards (first to `PlayerId::FIRST`), resolves them
//! with [`resolve_round`], and moves the loser's just-drawn card to the
//! winner. Across every round the deck plus both hands always hold exactly
//! the number of cards the deck was built with.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::resolver::resolve_round;
use crate::cards::{Card, Deck};
use crate::core::{
    GameConfig, GameError, GameRng, Player, PlayerId, Players, ScoringPolicy,
};
use crate::events::{EventSink, GameEvent};
use crate::store::{Authorizer, LeaderboardSink};

/// Lifecycle of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, names not yet checked.
    Pending,
    /// At least one name failed the authorization check. Terminal.
    Unauthorized,
    /// Both names authorized, no deck yet.
    Ready,
    /// Deck built, rounds in progress.
    Playing,
    /// Deck exhausted, outcome available. Terminal.
    Finished,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Pending => "pending",
            GamePhase::Unauthorized => "unauthorized",
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Final tally of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,

    /// Policy `result` was computed with.
    pub scoring: ScoringPolicy,

    /// Rounds played.
    pub rounds: u32,

    /// Cards held by each seat, in seat order.
    pub cards: [usize; 2],

    /// Cards left in the deck (1 for odd deck sizes, otherwise 0).
    pub undealt: usize,

    pub last_round_winner: Option<PlayerId>,
}

impl GameOutcome {
    /// Score the final hands under `scoring`.
    #[must_use]
    pub fn score(
        scoring: ScoringPolicy,
        cards: [usize; 2],
        last_round_winner: Option<PlayerId>,
    ) -> GameResult {
        match scoring {
            ScoringPolicy::CardCount => match cards[0].cmp(&cards[1]) {
                std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
                std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
                std::cmp::Ordering::Equal => GameResult::Draw,
            },
            ScoringPolicy::LastRound => last_round_winner.map_or(GameResult::Draw, GameResult::Winner),
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.winner()
    }

    /// Cards held by the winner, used as the leaderboard score.
    #[must_use]
    pub fn margin(&self) -> Option<usize> {
        self.winner().map(|p| self.cards[p.index()])
    }
}

/// What happened in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// Cards dealt this round, in seat order.
    pub drawn: [Card; 2],
    pub winner: PlayerId,
    /// The loser's card, now at the top of the winner's hand.
    pub moved: Card,
}

/// A single two-player game.
///
/// Owns the deck and both players for the game's lifetime.
///
/// ## Example
///
/// ```
/// use color_war::core::GameConfig;
/// use color_war::events::NullSink;
/// use color_war::rules::{GameEngine, GamePhase};
///
/// let mut engine = GameEngine::new(GameConfig::new().with_seed(7), "ada", "bob");
/// let outcome = engine.run(&|_: &str| true, &mut NullSink).unwrap();
///
/// assert_eq!(engine.phase(), GamePhase::Finished);
/// assert_eq!(outcome.rounds, 15);
/// assert_eq!(outcome.cards[0] + outcome.cards[1], 30);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    phase: GamePhase,
    players: Players,
    deck: Deck,
    /// Cards in the deck at construction, the conserved total.
    deck_size: usize,
    seed: Option<u64>,
    rounds: u32,
    last_round_winner: Option<PlayerId>,
    /// Cards dealt by `draw_round` and not yet settled by `transfer`.
    contested: Option<[Card; 2]>,
    recorded: bool,
}

impl GameEngine {
    /// Create a game for two named players.
    pub fn new(config: GameConfig, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            seed: config.seed,
            config,
            phase: GamePhase::Pending,
            players: Players::new(Player::new(first), Player::new(second)),
            deck: Deck::default(),
            deck_size: 0,
            rounds: 0,
            last_round_winner: None,
            contested: None,
            recorded: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards the deck was built with (0 before `start`).
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Seed the deck was (or will be) built from.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn last_round_winner(&self) -> Option<PlayerId> {
        self.last_round_winner
    }

    /// Cards currently in the deck and both hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.players.total_cards()
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    // === Lifecycle ===

    /// Check both names against `authorizer`.
    ///
    /// On rejection the game becomes `Unauthorized` and nothing else is
    /// touched.
    pub fn authorize(&mut self, authorizer: &dyn Authorizer) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Pending)?;

        let rejected: Vec<String> = self
            .players
            .iter()
            .map(|(_, p)| p.name.as_str())
            .filter(|name| !authorizer.is_authorized(name))
            .map(str::to_owned)
            .collect();

        if rejected.is_empty() {
            self.phase = GamePhase::Ready;
            Ok(())
        } else {
            warn!(names = ?rejected, "players not authorized");
            self.phase = GamePhase::Unauthorized;
            Err(GameError::Unauthorized { names: rejected })
        }
    }

    /// Build the deck and begin play.
    ///
    /// A deck of fewer than two cards finishes the game immediately with
    /// zero rounds. Returns the seed the deck was built from.
    pub fn start(&mut self, sink: &mut dyn EventSink) -> Result<u64, GameError> {
        self.expect_phase(GamePhase::Ready)?;

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();
        self.deck = Deck::build(&self.config.deck, &mut rng)?;
        self.deck_size = self.deck.len();
        self.seed = Some(seed);
        self.phase = GamePhase::Playing;

        info!(
            deck_size = self.deck_size,
            seed,
            scoring = %self.config.scoring,
            "starting game"
        );
        sink.emit(&GameEvent::GameStarted {
            deck_size: self.deck_size,
            seed,
        });

        if self.deck.len() < 2 {
            self.finish();
            self.emit_finished(sink);
        }
        Ok(seed)
    }

    /// Deal the two front cards of the deck, first to `PlayerId::FIRST`.
    ///
    /// Fails without dealing anything if fewer than two cards remain, or if
    /// the previous draw has not been settled with [`GameEngine::transfer`].
    pub fn draw_round(&mut self) -> Result<(Card, Card), GameError> {
        self.expect_phase(GamePhase::Playing)?;
        if self.contested.is_some() {
            return Err(GameError::UnsettledRound);
        }
        if self.deck.len() < 2 {
            return Err(GameError::DeckExhausted);
        }

        let first = self.deck.draw().ok_or(GameError::DeckExhausted)?;
        let second = self.deck.draw().ok_or(GameError::DeckExhausted)?;
        self.players[PlayerId::FIRST].hand.push(first);
        self.players[PlayerId::SECOND].hand.push(second);
        self.contested = Some([first, second]);
        Ok((first, second))
    }

    /// Settle the drawn round: the loser's contested card goes to `winner`.
    ///
    /// Completes the round, so it succeeds once per [`GameEngine::draw_round`]
    /// and fails with `NoContestedRound` otherwise. The game finishes here
    /// when fewer than two cards remain.
    pub fn transfer(&mut self, winner: PlayerId) -> Result<Card, GameError> {
        self.expect_phase(GamePhase::Playing)?;
        let contested = self.contested.ok_or(GameError::NoContestedRound)?;
        let loser = winner.opponent();

        let (to, from) = self.players.pair_mut(winner);
        let card = from.hand.pop_last().ok_or(GameError::EmptyHand(loser))?;
        debug_assert_eq!(card, contested[loser.index()], "moved card was not contested");
        to.hand.push(card);

        self.contested = None;
        self.rounds += 1;
        self.last_round_winner = Some(winner);
        debug_assert_eq!(
            self.total_cards(),
            self.deck_size,
            "card count changed during round {}",
            self.rounds
        );

        if self.deck.len() < 2 {
            self.finish();
        }
        Ok(card)
    }

    /// Play one full round: draw, resolve, transfer.
    ///
    /// Emits `GameFinished` when the round ends the game.
    pub fn play_round(&mut self, sink: &mut dyn EventSink) -> Result<RoundReport, GameError> {
        let (first, second) = self.draw_round()?;
        sink.emit(&GameEvent::CardDrawn {
            player: PlayerId::FIRST,
            card: first,
        });
        sink.emit(&GameEvent::CardDrawn {
            player: PlayerId::SECOND,
            card: second,
        });

        let winner = resolve_round(first, second).player();
        let moved = self.transfer(winner)?;
        debug!(
            round = self.rounds,
            first = %first,
            second = %second,
            winner = %winner,
            "round resolved"
        );
        sink.emit(&GameEvent::RoundResolved {
            round: self.rounds,
            winner,
            moved,
        });

        if self.phase == GamePhase::Finished {
            self.emit_finished(sink);
        }

        Ok(RoundReport {
            round: self.rounds,
            drawn: [first, second],
            winner,
            moved,
        })
    }

    fn finish(&mut self) {
        self.phase = GamePhase::Finished;
        let outcome = self.compute_outcome();
        info!(
            rounds = outcome.rounds,
            first_cards = outcome.cards[0],
            second_cards = outcome.cards[1],
            result = ?outcome.result,
            "game finished"
        );
    }

    fn emit_finished(&self, sink: &mut dyn EventSink) {
        sink.emit(&GameEvent::GameFinished {
            outcome: self.compute_outcome(),
        });
    }

    fn compute_outcome(&self) -> GameOutcome {
        let cards = self.players.card_counts();
        GameOutcome {
            result: GameOutcome::score(self.config.scoring, cards, self.last_round_winner),
            scoring: self.config.scoring,
            rounds: self.rounds,
            cards,
            undealt: self.deck.len(),
            last_round_winner: self.last_round_winner,
        }
    }

    /// Final tally; only available once `Finished`.
    pub fn outcome(&self) -> Result<GameOutcome, GameError> {
        self.expect_phase(GamePhase::Finished)?;
        Ok(self.compute_outcome())
    }

    /// Authorize (if still pending), start, and play until the deck runs out.
    ///
    /// A rejection emits `GameEvent::Rejected` before returning the error.
    pub fn run(
        &mut self,
        authorizer: &dyn Authorizer,
        sink: &mut dyn EventSink,
    ) -> Result<GameOutcome, GameError> {
        if self.phase == GamePhase::Pending {
            if let Err(err) = self.authorize(authorizer) {
                if let GameError::Unauthorized { names } = &err {
                    sink.emit(&GameEvent::Rejected {
                        names: names.clone(),
                    });
                }
                return Err(err);
            }
        }

        self.start(sink)?;
        while self.phase == GamePhase::Playing {
            self.play_round(sink)?;
        }
        self.outcome()
    }

    // === Results ===

    /// Name of the winning player, if the game is finished and not drawn.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        let winner = self.outcome().ok()?.winner()?;
        Some(self.players[winner].name.as_str())
    }

    /// Cards held by the winner, if any.
    #[must_use]
    pub fn margin(&self) -> Option<usize> {
        self.outcome().ok()?.margin()
    }

    /// Record the winner on `board`.
    ///
    /// Returns `Ok(false)` for a draw or when the result was already
    /// recorded.
    pub fn record_result(&mut self, board: &mut dyn LeaderboardSink) -> Result<bool, GameError> {
        let outcome = self.outcome()?;
        let Some(winner) = outcome.winner() else {
            return Ok(false);
        };
        if self.recorded {
            debug!("result already recorded");
            return Ok(false);
        }

        let margin = outcome.cards[winner.index()];
        board.record_result(&self.players[winner].name, margin)?;
        self.recorded = true;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::events::{EventLog, NullSink};

    fn allow_all(_: &str) -> bool {
        true
    }

    fn ready_engine(config: GameConfig) -> GameEngine {
        let mut engine = GameEngine::new(config, "ada", "bob");
        engine.authorize(&allow_all).unwrap();
        engine
    }

    /// Engine in `Playing` with a fixed deck.
    fn playing_engine(cards: &[Card], scoring: ScoringPolicy) -> GameEngine {
        let mut engine = ready_engine(GameConfig::new().with_scoring(scoring));
        engine.deck = Deck::from_cards(cards.iter().copied());
        engine.deck_size = cards.len();
        engine.seed = Some(0);
        engine.phase = GamePhase::Playing;
        engine
    }

    #[test]
    fn test_new_engine_is_pending() {
        let engine = GameEngine::new(GameConfig::new(), "ada", "bob");
        assert_eq!(engine.phase(), GamePhase::Pending);
        assert_eq!(engine.player(PlayerId::FIRST).name, "ada");
        assert_eq!(engine.player(PlayerId::SECOND).name, "bob");
        assert_eq!(engine.total_cards(), 0);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut engine = GameEngine::new(GameConfig::new().with_seed(1), "ada", "eve");
        let err = engine.authorize(&|name: &str| name == "ada").unwrap_err();

        match err {
            GameError::Unauthorized { names } => assert_eq!(names, vec!["eve".to_string()]),
            other => panic!("Unexpected error: {other}"),
        }
        assert_eq!(engine.phase(), GamePhase::Unauthorized);
        assert!(engine.deck().is_empty());
        assert_eq!(engine.players().total_cards(), 0);

        // Terminal: cannot start
        assert!(matches!(
            engine.start(&mut NullSink),
            Err(GameError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn test_start_requires_authorization() {
        let mut engine = GameEngine::new(GameConfig::new(), "ada", "bob");
        let err = engine.start(&mut NullSink).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidPhase {
                expected: GamePhase::Ready,
                actual: GamePhase::Pending
            }
        ));
    }

    #[test]
    fn test_capacity_error_before_hands_touched() {
        let mut engine = ready_engine(GameConfig::new().with_deck_size(31).with_seed(1));
        let err = engine.start(&mut NullSink).unwrap_err();

        assert!(matches!(err, GameError::Capacity { requested: 31, available: 30 }));
        assert_eq!(engine.phase(), GamePhase::Ready);
        assert_eq!(engine.players().total_cards(), 0);
    }

    #[test]
    fn test_draw_round_deals_in_seat_order() {
        let a = Card::new(1, Color::Red);
        let b = Card::new(2, Color::Red);
        let c = Card::new(3, Color::Red);
        let mut engine = playing_engine(&[a, b, c], ScoringPolicy::CardCount);

        assert_eq!(engine.draw_round().unwrap(), (a, b));
        assert_eq!(engine.player(PlayerId::FIRST).hand.last(), Some(a));
        assert_eq!(engine.player(PlayerId::SECOND).hand.last(), Some(b));
        assert_eq!(engine.deck().len(), 1);
        assert_eq!(engine.players().total_cards(), 2);
    }

    #[test]
    fn test_draw_round_needs_two_cards() {
        let a = Card::new(1, Color::Red);
        let mut engine = playing_engine(&[a], ScoringPolicy::CardCount);

        assert!(matches!(engine.draw_round(), Err(GameError::DeckExhausted)));
        assert_eq!(engine.deck().len(), 1);
        assert_eq!(engine.players().total_cards(), 0);
    }

    #[test]
    fn test_draw_round_requires_settled_round() {
        let cards = [
            Card::new(1, Color::Red),
            Card::new(2, Color::Red),
            Card::new(3, Color::Red),
            Card::new(4, Color::Red),
        ];
        let mut engine = playing_engine(&cards, ScoringPolicy::CardCount);
        engine.draw_round().unwrap();

        assert!(matches!(engine.draw_round(), Err(GameError::UnsettledRound)));
        assert_eq!(engine.deck().len(), 2);
        assert_eq!(engine.players().card_counts(), [1, 1]);
    }

    #[test]
    fn test_transfer_moves_contested_card() {
        let a = Card::new(1, Color::Red);
        let b = Card::new(2, Color::Red);
        let mut engine = playing_engine(&[a, b], ScoringPolicy::CardCount);
        engine.draw_round().unwrap();

        let moved = engine.transfer(PlayerId::SECOND).unwrap();
        assert_eq!(moved, a);
        assert!(engine.player(PlayerId::FIRST).hand.is_empty());
        assert_eq!(engine.player(PlayerId::SECOND).hand.as_slice(), &[b, a]);
    }

    #[test]
    fn test_transfer_requires_drawn_round() {
        let cards = [Card::new(1, Color::Red), Card::new(2, Color::Red)];
        let mut engine = playing_engine(&cards, ScoringPolicy::CardCount);

        assert!(matches!(
            engine.transfer(PlayerId::FIRST),
            Err(GameError::NoContestedRound)
        ));
        assert_eq!(engine.rounds(), 0);
    }

    #[test]
    fn test_second_transfer_in_round_rejected() {
        let cards = [
            Card::new(10, Color::Yellow),
            Card::new(4, Color::Yellow),
            Card::new(3, Color::Red),
            Card::new(3, Color::Black),
            Card::new(6, Color::Red),
            Card::new(8, Color::Black),
        ];
        let mut engine = playing_engine(&cards, ScoringPolicy::CardCount);

        engine.draw_round().unwrap();
        engine.transfer(PlayerId::FIRST).unwrap();

        engine.draw_round().unwrap();
        assert_eq!(engine.transfer(PlayerId::SECOND).unwrap(), cards[2]);
        assert!(matches!(
            engine.transfer(PlayerId::SECOND),
            Err(GameError::NoContestedRound)
        ));

        // The card won in round 1 stays with its winner
        assert_eq!(
            engine.player(PlayerId::FIRST).hand.as_slice(),
            &[cards[0], cards[1]]
        );
        assert_eq!(
            engine.player(PlayerId::SECOND).hand.as_slice(),
            &[cards[3], cards[2]]
        );
        assert_eq!(engine.rounds(), 2);
        assert_eq!(engine.total_cards(), 6);
    }

    #[test]
    fn test_manual_rounds_reach_finished() {
        let a = Card::new(1, Color::Red);
        let b = Card::new(2, Color::Black);
        let mut engine = playing_engine(&[a, b], ScoringPolicy::LastRound);

        let (first, second) = engine.draw_round().unwrap();
        let winner = resolve_round(first, second).player();
        engine.transfer(winner).unwrap();

        assert_eq!(engine.phase(), GamePhase::Finished);
        assert_eq!(engine.rounds(), 1);
        assert_eq!(engine.last_round_winner(), Some(PlayerId::FIRST));

        let outcome = engine.outcome().unwrap();
        assert_eq!(outcome.cards, [2, 0]);
        assert_eq!(outcome.result, GameResult::Winner(PlayerId::FIRST));
        assert!(matches!(
            engine.play_round(&mut NullSink),
            Err(GameError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn test_play_round_report_and_events() {
        let red5 = Card::new(5, Color::Red);
        let yellow3 = Card::new(3, Color::Yellow);
        let mut engine = playing_engine(&[red5, yellow3], ScoringPolicy::CardCount);
        let mut log = EventLog::new();

        let report = engine.play_round(&mut log).unwrap();
        assert_eq!(report.round, 1);
        assert_eq!(report.drawn, [red5, yellow3]);
        assert_eq!(report.winner, PlayerId::SECOND);
        assert_eq!(report.moved, red5);

        assert_eq!(engine.phase(), GamePhase::Finished);
        assert_eq!(log.len(), 4);
        assert!(matches!(log.events()[3], GameEvent::GameFinished { .. }));
    }

    #[test]
    fn test_card_count_scoring() {
        // Round 1: second wins (red vs yellow). Round 2: first wins (red vs black).
        // Round 3: first wins (7 red vs 2 red).
        let cards = [
            Card::new(5, Color::Red),
            Card::new(3, Color::Yellow),
            Card::new(1, Color::Red),
            Card::new(9, Color::Black),
            Card::new(7, Color::Red),
            Card::new(2, Color::Red),
        ];
        let mut engine = playing_engine(&cards, ScoringPolicy::CardCount);
        while engine.phase() == GamePhase::Playing {
            engine.play_round(&mut NullSink).unwrap();
        }

        let outcome = engine.outcome().unwrap();
        assert_eq!(outcome.rounds, 3);
        assert_eq!(outcome.cards, [4, 2]);
        assert_eq!(outcome.result, GameResult::Winner(PlayerId::FIRST));
        assert_eq!(outcome.margin(), Some(4));
        assert_eq!(engine.winner_name(), Some("ada"));
    }

    #[test]
    fn test_last_round_scoring() {
        // First wins two rounds, second wins the last one.
        let cards = [
            Card::new(1, Color::Red),
            Card::new(9, Color::Black),
            Card::new(7, Color::Red),
            Card::new(2, Color::Red),
            Card::new(5, Color::Yellow),
            Card::new(9, Color::Yellow),
        ];
        let mut engine = playing_engine(&cards, ScoringPolicy::LastRound);
        while engine.phase() == GamePhase::Playing {
            engine.play_round(&mut NullSink).unwrap();
        }

        let outcome = engine.outcome().unwrap();
        assert_eq!(outcome.cards, [4, 2]);
        assert_eq!(outcome.last_round_winner, Some(PlayerId::SECOND));
        assert_eq!(outcome.result, GameResult::Winner(PlayerId::SECOND));
        assert_eq!(outcome.margin(), Some(2));
    }

    #[test]
    fn test_score_draw_cases() {
        assert_eq!(
            GameOutcome::score(ScoringPolicy::CardCount, [3, 3], Some(PlayerId::FIRST)),
            GameResult::Draw
        );
        assert_eq!(
            GameOutcome::score(ScoringPolicy::LastRound, [0, 0], None),
            GameResult::Draw
        );
    }

    #[test]
    fn test_tiny_deck_finishes_immediately() {
        for size in [0, 1] {
            let mut engine = ready_engine(GameConfig::new().with_deck_size(size).with_seed(3));
            let mut log = EventLog::new();
            engine.start(&mut log).unwrap();

            assert_eq!(engine.phase(), GamePhase::Finished);
            let outcome = engine.outcome().unwrap();
            assert_eq!(outcome.rounds, 0);
            assert_eq!(outcome.undealt, size);
            assert_eq!(outcome.result, GameResult::Draw);
            assert_eq!(log.len(), 2);
        }
    }

    #[test]
    fn test_odd_deck_leaves_one_undealt() {
        let mut engine = GameEngine::new(GameConfig::new().with_deck_size(7).with_seed(11), "a", "b");
        let outcome = engine.run(&allow_all, &mut NullSink).unwrap();

        assert_eq!(outcome.rounds, 3);
        assert_eq!(outcome.undealt, 1);
        assert_eq!(outcome.cards[0] + outcome.cards[1], 6);
    }

    #[test]
    fn test_run_emits_rejected() {
        let mut engine = GameEngine::new(GameConfig::new(), "ada", "bob");
        let mut log = EventLog::new();
        let result = engine.run(&|_: &str| false, &mut log);

        assert!(result.is_err());
        assert_eq!(
            log.events(),
            &[GameEvent::Rejected {
                names: vec!["ada".into(), "bob".into()]
            }]
        );
    }

    #[test]
    fn test_seed_reproduces_game() {
        let config = GameConfig::new().with_seed(2024);
        let mut a = GameEngine::new(config.clone(), "a", "b");
        let mut b = GameEngine::new(config, "a", "b");

        let out_a = a.run(&allow_all, &mut NullSink).unwrap();
        let out_b = b.run(&allow_all, &mut NullSink).unwrap();

        assert_eq!(out_a, out_b);
        assert_eq!(a.players(), b.players());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let mut engine = ready_engine(GameConfig::new().with_deck_size(4));
        assert_eq!(engine.seed(), None);
        let seed = engine.start(&mut NullSink).unwrap();
        assert_eq!(engine.seed(), Some(seed));
    }

    #[test]
    fn test_outcome_requires_finished() {
        let engine = GameEngine::new(GameConfig::new(), "a", "b");
        assert!(engine.outcome().is_err());
        assert_eq!(engine.winner_name(), None);
        assert_eq!(engine.margin(), None);
    }

    #[test]
    fn test_game_result_winner() {
        assert_eq!(
            GameResult::Winner(PlayerId::SECOND).winner(),
            Some(PlayerId::SECOND)
        );
        assert_eq!(GameResult::Draw.winner(), None);
    }
}
