use std::time::Duration;

use super::{Color, RoundGenerator, Stack};

/// Default length of one game.
pub const GAME_DURATION: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Result of checking a complete player stack against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Stacks were identical; a new target has been dealt.
    Matched { points: u32 },
    /// Player stack was cleared; the target is kept.
    Mismatched,
}

/// Emitted once when the clock runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverReport {
    pub final_score: u32,
    /// True when `final_score` beat the previous high score and should be
    /// persisted.
    pub new_high_score: bool,
}

/// A timed game: the current round plus score and clock.
///
/// Every operation is total. Calls that make no sense in the current phase
/// (undo on an empty stack, ticking after game over, ...) leave the session
/// untouched.
pub struct Session {
    generator: RoundGenerator,
    duration: Duration,
    elapsed: Duration,
    target: Stack,
    player: Stack,
    score: u32,
    high_score: u32,
    game_over: bool,
}

impl Session {
    /// Start a new game, dealing the first target immediately.
    pub fn new(mut generator: RoundGenerator, duration: Duration, high_score: u32) -> Self {
        let target = generator.generate();
        tracing::debug!(height = target.len(), "session started");
        Session {
            generator,
            duration,
            elapsed: Duration::ZERO,
            target,
            player: Stack::new(),
            score: 0,
            high_score,
            game_over: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Stack the player has to reproduce
    pub fn target(&self) -> &Stack {
        &self.target
    }

    /// Stack the player has built so far
    pub fn player(&self) -> &Stack {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left on the clock, never negative
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining().as_secs_f64()
    }

    /// Whether the player stack is as tall as the target and can be submitted.
    pub fn is_complete(&self) -> bool {
        !self.player.is_empty() && self.player.len() == self.target.len()
    }

    /// Add a layer on top of the player stack. Ignored once the stack is as
    /// tall as the target.
    pub fn submit_color(&mut self, color: Color) {
        if self.game_over || self.player.len() >= self.target.len() {
            return;
        }
        self.player.push(color);
    }

    /// Remove the top layer of the player stack.
    pub fn undo(&mut self) -> Option<Color> {
        if self.game_over {
            return None;
        }
        self.player.pop()
    }

    /// Check a complete player stack against the target. Returns `None` when
    /// there was nothing to check.
    pub fn submit_attempt(&mut self) -> Option<MatchOutcome> {
        if self.game_over || !self.is_complete() {
            return None;
        }
        Some(self.check_match())
    }

    fn check_match(&mut self) -> MatchOutcome {
        if self.player == self.target {
            let points = self.target.len() as u32;
            self.score = self.score.saturating_add(points);
            self.target = self.generator.generate();
            self.player.clear();
            tracing::debug!(points, score = self.score, "stack matched");
            MatchOutcome::Matched { points }
        } else {
            self.player.clear();
            tracing::debug!("stack mismatched");
            MatchOutcome::Mismatched
        }
    }

    /// Advance the clock by `delta`. Returns a report on the tick that ends
    /// the game; later ticks are ignored.
    pub fn tick(&mut self, delta: Duration) -> Option<GameOverReport> {
        if self.game_over {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        if !self.remaining().is_zero() {
            return None;
        }

        self.game_over = true;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        tracing::info!(score = self.score, new_high_score, "game over");
        Some(GameOverReport {
            final_score: self.score,
            new_high_score,
        })
    }

    /// Start another game after the clock ran out. The high score carries over.
    pub fn reset(&mut self) {
        if !self.game_over {
            return;
        }
        self.score = 0;
        self.elapsed = Duration::ZERO;
        self.game_over = false;
        self.target = self.generator.generate();
        self.player.clear();
        tracing::debug!(height = self.target.len(), "session reset");
    }
}
