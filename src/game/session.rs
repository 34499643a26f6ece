//! Game session: the board of record, turn order, history and score

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Position, Side};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Side),
    Draw,
}

impl GameOutcome {
    /// Swap the winner perspective (A <-> B). Useful when mirroring games.
    pub fn swap_sides(self) -> Self {
        match self {
            GameOutcome::Win(side) => GameOutcome::Win(side.opponent()),
            GameOutcome::Draw => GameOutcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Win(side) => Some(side),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(side) => write!(f, "{side} wins"),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// How a session decides that a move won the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinRule {
    /// The mover wins when its move completes a line
    Positional,
    /// Whole-board check that ignores every line while either side is still
    /// entirely on its home row
    #[default]
    StartRowGuarded,
}

impl WinRule {
    /// Winner after `mover` has moved on `board`, if any
    pub fn winner_after_move(self, board: &Board, mover: Side) -> Option<Side> {
        match self {
            WinRule::Positional => board.is_winning(mover).then_some(mover),
            WinRule::StartRowGuarded => board.start_row_guarded_winner(),
        }
    }
}

impl fmt::Display for WinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WinRule::Positional => "positional",
            WinRule::StartRowGuarded => "start-row-guarded",
        })
    }
}

impl FromStr for WinRule {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" | "lines" => Ok(WinRule::Positional),
            "start-row-guarded" | "start_row_guarded" | "guarded" => Ok(WinRule::StartRowGuarded),
            _ => Err(crate::Error::ParseWinRule {
                input: s.to_string(),
                expected: "positional, start-row-guarded".to_string(),
            }),
        }
    }
}

/// What happens when the side to move has no legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockedPolicy {
    /// The blocked side loses
    #[default]
    Loss,
    /// The game is drawn
    Draw,
}

impl fmt::Display for BlockedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockedPolicy::Loss => "loss",
            BlockedPolicy::Draw => "draw",
        })
    }
}

impl FromStr for BlockedPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loss" | "lose" => Ok(BlockedPolicy::Loss),
            "draw" => Ok(BlockedPolicy::Draw),
            _ => Err(crate::Error::ParseBlockedPolicy {
                input: s.to_string(),
                expected: "loss, draw".to_string(),
            }),
        }
    }
}

/// House rules for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRules {
    pub win_rule: WinRule,
    pub blocked_policy: BlockedPolicy,
}

/// Running score across games of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub a_wins: u32,
    pub b_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Side::A) => self.a_wins += 1,
            GameOutcome::Win(Side::B) => self.b_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::A => self.a_wins,
            Side::B => self.b_wins,
        }
    }
}

/// A move together with the side that made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub mv: Move,
}

/// A game in progress, owned by the caller.
///
/// The search code never touches a session: callers hand [`GameSession::board`] to a
/// strategy and feed the returned move back through [`GameSession::play`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    rules: SessionRules,
    initial: Board,
    first_to_move: Side,
    board: Board,
    to_move: Side,
    history: Vec<MoveRecord>,
    outcome: Option<GameOutcome>,
    scoreboard: Scoreboard,
}

impl GameSession {
    /// Start from the standard position with A to move
    pub fn new(rules: SessionRules) -> Self {
        Self::from_parts(Board::start(), Side::A, rules)
    }

    /// Start from an arbitrary position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] unless each side has three pieces.
    pub fn from_board(board: Board, to_move: Side, rules: SessionRules) -> crate::Result<Self> {
        board.validate_piece_counts()?;
        let mut session = Self::from_parts(board, to_move, rules);
        session.settle_blocked_turn();
        Ok(session)
    }

    fn from_parts(board: Board, to_move: Side, rules: SessionRules) -> Self {
        GameSession {
            rules,
            initial: board,
            first_to_move: to_move,
            board,
            to_move,
            history: Vec::new(),
            outcome: None,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of moves played in the current game
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn rules(&self) -> SessionRules {
        self.rules
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Legal moves for the side to move (none once the game is over)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_moves(self.to_move)
    }

    /// Destinations to highlight after selecting `from`.
    ///
    /// Empty unless `from` holds a piece of the side to move and the game is running.
    pub fn legal_destinations_from(&self, from: Position) -> Vec<Position> {
        if self.is_over() || self.board.get(from) != self.to_move.to_cell() {
            return Vec::new();
        }
        self.board.legal_destinations(from)
    }

    /// Play a move for the side to move.
    ///
    /// Returns the outcome if this move ended the game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended and
    /// [`crate::Error::IllegalMove`] for a move the side to move cannot make.
    pub fn play(&mut self, mv: Move) -> crate::Result<Option<GameOutcome>> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.to_move;
        self.board = self.board.make_move(mv, mover)?;
        self.history.push(MoveRecord { side: mover, mv });
        tracing::trace!(side = %mover, %mv, ply = self.history.len(), "move played");

        if let Some(winner) = self.rules.win_rule.winner_after_move(&self.board, mover) {
            self.finish(GameOutcome::Win(winner));
            return Ok(self.outcome);
        }

        self.to_move = mover.opponent();
        self.settle_blocked_turn();
        Ok(self.outcome)
    }

    /// End an unfinished game as a draw (e.g. on a ply limit).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game already has an outcome.
    pub fn declare_draw(&mut self) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }
        self.finish(GameOutcome::Draw);
        Ok(())
    }

    /// Back to the standard start position, keeping rules and score
    pub fn reset(&mut self) {
        let scoreboard = self.scoreboard;
        *self = Self::new(self.rules);
        self.scoreboard = scoreboard;
    }

    /// Boards from the initial position through every move played
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move no longer replays, which indicates corrupted
    /// history (e.g. a hand-edited serialized session).
    pub fn state_sequence(&self) -> crate::Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.history.len() + 1);
        let mut board = self.initial;
        states.push(board);
        for record in &self.history {
            board = board.make_move(record.mv, record.side)?;
            states.push(board);
        }
        Ok(states)
    }

    /// Side that moved first in the current game
    pub fn first_to_move(&self) -> Side {
        self.first_to_move
    }

    fn settle_blocked_turn(&mut self) {
        if self.outcome.is_some() || !self.board.is_blocked(self.to_move) {
            return;
        }
        let outcome = match self.rules.blocked_policy {
            BlockedPolicy::Loss => GameOutcome::Win(self.to_move.opponent()),
            BlockedPolicy::Draw => GameOutcome::Draw,
        };
        tracing::debug!(side = %self.to_move, %outcome, "side to move is blocked");
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
        self.scoreboard.record(outcome);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionRules::default())
    }
}
