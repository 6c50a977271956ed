//! The match aggregate and its builder.

use crate::board::Board;
use crate::dice::{DiceSource, Recording};
use crate::error::SetupError;
use crate::lifecycle::Phase;
use crate::observer::{FinishObserver, FinishSummary, Observers, StateObserver, TurnObserver};
use crate::outcome::MoveOutcome;
use crate::player::Player;
use crate::record::GameRecord;
use crate::rules::MovementRule;
use crate::turn_order::TurnOrder;
use std::collections::HashSet;
use tracing::{info, instrument};

/// A single match: board, roster, movement rule, dice, and history.
///
/// Single-threaded; one caller drives turns and observers run inline.
#[derive(Debug)]
pub struct Game<D> {
    pub(crate) board: Board,
    pub(crate) turn_order: TurnOrder,
    pub(crate) rule: Box<dyn MovementRule>,
    pub(crate) dice: D,
    pub(crate) record: GameRecord,
    pub(crate) phase: Phase,
    pub(crate) observers: Observers,
    pub(crate) aborted: bool,
}

impl<D: DiceSource> Game<D> {
    /// Creates a match that has not started yet.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NoPlayers`] for an empty roster,
    /// [`SetupError::DuplicatePlayer`] if two players share a name, and
    /// [`SetupError::InvalidPlayer`] if a player starts off the board.
    #[instrument(skip_all, fields(ring = board.ring_size(), tail = board.tail_size(), players = players.len()))]
    pub fn new(
        board: Board,
        players: Vec<Player>,
        rule: Box<dyn MovementRule>,
        dice: D,
    ) -> Result<Self, SetupError> {
        let mut names = HashSet::new();
        for player in &players {
            if !names.insert(player.name()) {
                return Err(SetupError::DuplicatePlayer(player.name().to_string()));
            }
            if board.validate_progress(player.progress()).is_err() {
                return Err(SetupError::InvalidPlayer(format!(
                    "{} starts at progress {} beyond end {}",
                    player.name(),
                    player.progress(),
                    board.end_progress()
                )));
            }
        }

        let turn_order = TurnOrder::new(players)?;
        info!(?rule, "Game created");
        Ok(Self {
            board,
            turn_order,
            rule,
            dice,
            record: GameRecord::new(),
            phase: Phase::NotStarted,
            observers: Observers::default(),
            aborted: false,
        })
    }
}

impl<D> Game<D> {
    /// Starts a builder.
    pub fn builder() -> GameBuilder<D> {
        GameBuilder::default()
    }

    /// The board geometry.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All players in roster order.
    pub fn players(&self) -> &[Player] {
        self.turn_order.players()
    }

    /// The player who moves next.
    pub fn current_player(&self) -> &Player {
        self.turn_order.current()
    }

    /// Looks a player up by name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players().iter().find(|p| p.name() == name)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a player reached the end square.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// True after a fatal error stopped the match.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// The player whose move won the match.
    pub fn winner(&self) -> Option<&Player> {
        if !self.is_over() {
            return None;
        }
        let outcome = self.record.outcomes().iter().rev().find(|o| o.won())?;
        self.player(outcome.player())
    }

    /// Every executed turn, forfeits included.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Effective turns across all players.
    pub fn total_turns(&self) -> u32 {
        self.players().iter().map(Player::turns_taken).sum()
    }

    /// The movement rule chain.
    pub fn rule(&self) -> &dyn MovementRule {
        self.rule.as_ref()
    }

    /// The dice source.
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Registers a phase-change observer.
    pub fn subscribe_state(&mut self, observer: impl StateObserver + 'static) {
        self.observers.add_state(Box::new(observer));
    }

    /// Registers a turn observer.
    pub fn subscribe_turn(&mut self, observer: impl TurnObserver + 'static) {
        self.observers.add_turn(Box::new(observer));
    }

    /// Registers a finish observer.
    pub fn subscribe_finish(&mut self, observer: impl FinishObserver + 'static) {
        self.observers.add_finish(Box::new(observer));
    }

    /// Registers one observer for all three event kinds.
    ///
    /// The observer is cloned per kind, so clones must share their state
    /// (as [`EventLog`](crate::EventLog) does) to see every event.
    pub fn subscribe_all<O>(&mut self, observer: O)
    where
        O: StateObserver + TurnObserver + FinishObserver + Clone + 'static,
    {
        self.subscribe_state(observer.clone());
        self.subscribe_turn(observer.clone());
        self.subscribe_finish(observer);
    }

    /// Registers a closure called on every phase change.
    pub fn on_state_changed(&mut self, f: impl FnMut(Phase, Phase) + 'static) {
        self.subscribe_state(f);
    }

    /// Registers a closure called after every turn.
    pub fn on_turn_played(&mut self, f: impl FnMut(&MoveOutcome, &Player) + 'static) {
        self.subscribe_turn(f);
    }

    /// Registers a closure called when the match finishes.
    pub fn on_game_finished(&mut self, f: impl FnMut(&FinishSummary) + 'static) {
        self.subscribe_finish(f);
    }
}

impl<D: DiceSource> Game<Recording<D>> {
    /// Every roll drawn so far, in order.
    pub fn rolls(&self) -> &[u32] {
        self.dice.rolls()
    }
}

// ─────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────

/// Step-by-step construction of a [`Game`].
#[derive(Debug)]
pub struct GameBuilder<D> {
    board: Option<Board>,
    players: Vec<Player>,
    rule: Option<Box<dyn MovementRule>>,
    dice: Option<D>,
}

impl<D> Default for GameBuilder<D> {
    fn default() -> Self {
        Self {
            board: None,
            players: Vec::new(),
            rule: None,
            dice: None,
        }
    }
}

impl<D: DiceSource> GameBuilder<D> {
    /// Sets the board.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Appends a player to the roster.
    pub fn player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Appends several players to the roster.
    pub fn players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        self.players.extend(players);
        self
    }

    /// Sets the movement rule chain.
    pub fn rule(mut self, rule: impl MovementRule + 'static) -> Self {
        self.rule = Some(Box::new(rule));
        self
    }

    /// Sets the dice source.
    pub fn dice(mut self, dice: D) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Finishes construction.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingCollaborator`] if the board, rule, or
    /// dice were never set, and any error from [`Game::new`].
    #[instrument(skip(self))]
    pub fn build(self) -> Result<Game<D>, SetupError> {
        let board = self.board.ok_or(SetupError::MissingCollaborator("board"))?;
        let rule = self.rule.ok_or(SetupError::MissingCollaborator("rule"))?;
        let dice = self.dice.ok_or(SetupError::MissingCollaborator("dice"))?;
        Game::new(board, self.players, rule, dice)
    }
}
