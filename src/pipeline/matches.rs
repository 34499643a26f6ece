//! Match pipeline: repeated games between two strategies

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::{PlayerSpec, SearchConfig},
    game::{GameOutcome, GameSession, SessionRules, Side},
    ports::{GameSummary, Observer, SearchStrategy},
    search::strategy_for,
};

/// Match configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games
    pub num_games: usize,

    /// Games still running after this many plies are drawn
    pub max_plies: usize,

    /// Alternate which contender plays A
    pub swap_sides: bool,

    /// Win rule and blocked policy for every game
    pub rules: SessionRules,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            swap_sides: true,
            rules: SessionRules::default(),
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn with_games(mut self, num_games: usize) -> Self {
        self.num_games = num_games;
        self
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn with_swap_sides(mut self, swap_sides: bool) -> Self {
        self.swap_sides = swap_sides;
        self
    }

    pub fn with_rules(mut self, rules: SessionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations that cannot produce a meaningful match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for zero games or a zero ply limit.
    pub fn validate(&self) -> Result<()> {
        if self.num_games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "a match needs at least one game".to_string(),
            });
        }
        if self.max_plies == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_plies must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Side the first contender plays in game `game_num`
    pub fn first_contender_side(&self, game_num: usize) -> Side {
        if self.swap_sides && game_num % 2 == 1 {
            Side::B
        } else {
            Side::A
        }
    }
}

/// A named strategy together with the configuration it searches with
pub struct Contender {
    pub name: String,
    pub strategy: Box<dyn SearchStrategy>,
    pub config: SearchConfig,
}

impl Contender {
    pub fn new(name: String, strategy: Box<dyn SearchStrategy>, config: SearchConfig) -> Self {
        Self {
            name,
            strategy,
            config,
        }
    }

    /// Build a contender from a command-line player spec such as `minimax:hard`
    pub fn from_spec(spec: &PlayerSpec, seed: Option<u64>) -> Self {
        Self::new(
            spec.to_string(),
            strategy_for(spec.config.strategy, seed),
            spec.config,
        )
    }
}

/// Result of a match, from the first contender's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub first: String,
    pub second: String,

    /// Total games played
    pub total_games: usize,

    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,

    /// Games drawn by the ply limit (included in `draws`)
    pub truncated: usize,

    pub first_win_rate: f64,
    pub second_win_rate: f64,
    pub draw_rate: f64,

    /// Average plies per game
    pub average_plies: f64,
}

impl MatchResult {
    /// Tally finished games
    pub fn from_games(first: &str, second: &str, games: &[GameSummary]) -> Self {
        let total_games = games.len();
        let first_wins = games.iter().filter(|g| g.first_contender_won()).count();
        let second_wins = games.iter().filter(|g| g.second_contender_won()).count();
        let draws = total_games - first_wins - second_wins;
        let truncated = games.iter().filter(|g| g.truncated).count();
        let total_plies: usize = games.iter().map(|g| g.plies).sum();

        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            first: first.to_string(),
            second: second.to_string(),
            total_games,
            first_wins,
            second_wins,
            draws,
            truncated,
            first_win_rate: rate(first_wins),
            second_win_rate: rate(second_wins),
            draw_rate: rate(draws),
            average_plies: if total_games > 0 {
                total_plies as f64 / total_games as f64
            } else {
                0.0
            },
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a match between two contenders and reports to observers
pub struct MatchPipeline {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchPipeline {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run all games of the match.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid, a strategy returns no move in a
    /// live game ([`Error::NoLegalMoves`]) or an observer fails.
    pub fn run(&mut self, first: &mut Contender, second: &mut Contender) -> Result<MatchResult> {
        self.config.validate()?;

        if let Some(seed) = self.config.seed {
            first.strategy.reseed(seed);
            second.strategy.reseed(seed.wrapping_add(1));
        }

        tracing::info!(
            first = %first.name,
            second = %second.name,
            games = self.config.num_games,
            "match started"
        );
        for observer in &mut self.observers {
            observer.on_match_start(self.config.num_games)?;
        }

        let mut games = Vec::with_capacity(self.config.num_games);
        for game_num in 0..self.config.num_games {
            let summary = self.play_game(game_num, first, second)?;
            for observer in &mut self.observers {
                observer.on_game_end(&summary)?;
            }
            games.push(summary);
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let result = MatchResult::from_games(&first.name, &second.name, &games);
        tracing::info!(
            first_wins = result.first_wins,
            second_wins = result.second_wins,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    /// Play one game; the first contender's side depends on `game_num`
    pub fn play_game(
        &mut self,
        game_num: usize,
        first: &mut Contender,
        second: &mut Contender,
    ) -> Result<GameSummary> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let first_side = self.config.first_contender_side(game_num);
        let mut session = GameSession::new(self.config.rules);

        let (outcome, truncated) = loop {
            if let Some(outcome) = session.outcome() {
                break (outcome, false);
            }
            if session.ply() >= self.config.max_plies {
                session.declare_draw()?;
                tracing::warn!(
                    game = game_num,
                    plies = session.ply(),
                    "game reached the ply limit and was drawn"
                );
                break (GameOutcome::Draw, true);
            }

            let side = session.to_move();
            let contender = if side == first_side {
                &mut *first
            } else {
                &mut *second
            };
            let board = *session.board();
            let mv = contender
                .strategy
                .choose_move(&board, side, &contender.config)
                .ok_or_else(|| Error::NoLegalMoves {
                    side: side.to_string(),
                    board: board.encode(),
                })?;

            for observer in &mut self.observers {
                observer.on_move(game_num, session.ply(), &board, side, mv, &contender.name)?;
            }
            session.play(mv)?;
        };

        tracing::debug!(
            game = game_num,
            %outcome,
            plies = session.ply(),
            first_side = %first_side,
            "game finished"
        );

        Ok(GameSummary {
            game_num,
            first_contender_side: first_side,
            outcome,
            plies: session.ply(),
            truncated,
            final_board: *session.board(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Difficulty, StrategyKind},
        search::RandomStrategy,
    };

    fn random(name: &str, seed: u64) -> Contender {
        Contender::new(
            name.to_string(),
            Box::new(RandomStrategy::with_seed(seed)),
            SearchConfig::new(StrategyKind::Random, Difficulty::Easy),
        )
    }

    #[test]
    fn test_match_pipeline() {
        let config = MatchConfig::default().with_games(10).with_seed(Some(42));
        let mut pipeline = MatchPipeline::new(config);
        let mut first = random("first", 1);
        let mut second = random("second", 2);

        let result = pipeline.run(&mut first, &mut second).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.first_wins + result.second_wins + result.draws, 10);
        assert!(result.average_plies > 0.0);
    }

    #[test]
    fn test_sides_alternate() {
        let config = MatchConfig::default();
        assert_eq!(config.first_contender_side(0), Side::A);
        assert_eq!(config.first_contender_side(1), Side::B);
        let config = config.with_swap_sides(false);
        assert_eq!(config.first_contender_side(1), Side::A);
    }

    #[test]
    fn test_ply_limit_draws() {
        let config = MatchConfig::default().with_games(1).with_max_plies(1);
        let mut pipeline = MatchPipeline::new(config);
        let summary = pipeline
            .play_game(0, &mut random("first", 3), &mut random("second", 4))
            .unwrap();
        assert_eq!(summary.plies, 1);
        assert!(summary.truncated);
        assert_eq!(summary.outcome, GameOutcome::Draw);
    }

    #[test]
    fn test_zero_games_rejected() {
        let mut pipeline = MatchPipeline::new(MatchConfig::default().with_games(0));
        let err = pipeline
            .run(&mut random("first", 1), &mut random("second", 2))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_seeded_matches_repeat() {
        let config = MatchConfig::default().with_games(6).with_seed(Some(9));
        let a = MatchPipeline::new(config)
            .run(&mut random("first", 0), &mut random("second", 0))
            .unwrap();
        let b = MatchPipeline::new(config)
            .run(&mut random("first", 5), &mut random("second", 6))
            .unwrap();
        assert_eq!(a, b);
    }
}
