use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Waiting -> Playing, on the first accepted guess
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Waiting,
    Playing,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_waiting(self) -> bool {
        matches!(self, Self::Waiting)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One accepted guess, in the order it was made.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub coords: Coord2,
    /// Distance to the nearest exit, `None` for an unreachable cell.
    pub distance: Option<Distance>,
    pub is_correct: bool,
}

/// Score for a win after `used` of `max` attempts.
pub const fn compute_score(used: CellCount, max: CellCount) -> u32 {
    let remaining = (max as u32 + 1).saturating_sub(used as u32);
    1000 + remaining * 200
}

/// A round of the game, from map generation until the farthest cell is found or
/// the attempts run out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    map: GridMap,
    field: DistanceField,
    guesses: Vec<Guess>,
    guessed: Array2<bool>,
    state: SessionState,
    max_attempts: CellCount,
    score: u32,
}

impl GameSession {
    pub fn new(config: &SessionConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let map = generate_map(&config.map, seed)?;
        Self::from_map(map, config.max_attempts)
    }

    pub fn from_map(map: GridMap, max_attempts: CellCount) -> Result<Self> {
        if max_attempts == 0 {
            return Err(GameError::InvalidMaxAttempts);
        }
        let size = (map.grid_size(), map.grid_size());
        let field = DistanceField::compute(&map);
        log::debug!(
            "New session on {}x{} grid, {} farthest cell(s) at distance {:?}",
            size.0,
            size.1,
            field.farthest.len(),
            field.farthest.distance()
        );

        Ok(Self {
            map,
            field,
            guesses: Vec::new(),
            guessed: Array2::default(size.to_nd_index()),
            state: SessionState::default(),
            max_attempts,
            score: 0,
        })
    }

    /// Replaces this session with a fresh one built from `config`.
    ///
    /// On error the current session is left untouched.
    pub fn reset(&mut self, config: &SessionConfig, seed: u64) -> Result<()> {
        *self = Self::new(config, seed)?;
        Ok(())
    }

    /// Changes the attempt limit, keeping the map.
    ///
    /// Locked while a session is in progress. A finished session only accepts a
    /// limit covering the attempts it already used.
    pub fn set_max_attempts(&mut self, max_attempts: CellCount) -> Result<()> {
        if max_attempts == 0 {
            return Err(GameError::InvalidMaxAttempts);
        }
        match self.state {
            SessionState::Playing => return Err(GameError::SessionInProgress),
            SessionState::Won | SessionState::Lost if max_attempts < self.attempts() => {
                return Err(GameError::AttemptsExceedLimit {
                    used: self.attempts(),
                });
            }
            _ => {}
        }
        log::debug!("Attempt limit {} -> {}", self.max_attempts, max_attempts);
        self.max_attempts = max_attempts;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn distances(&self) -> &DistanceMap {
        &self.field.distances
    }

    pub fn farthest(&self) -> &FarthestSet {
        &self.field.farthest
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn attempts(&self) -> CellCount {
        self.guesses.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn max_attempts(&self) -> CellCount {
        self.max_attempts
    }

    pub fn attempts_left(&self) -> CellCount {
        self.max_attempts.saturating_sub(self.attempts())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_guessed(&self, coords: Coord2) -> bool {
        self.guessed
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn can_guess_at(&self, coords: Coord2) -> bool {
        !self.state.is_finished()
            && self.map.role_of(coords).is_some_and(CellRole::is_guessable)
            && !self.is_guessed(coords)
    }

    /// Scores a guess at `coords` against the farthest set.
    ///
    /// Guesses after the game ended, on non-open cells, or on cells already guessed
    /// are ignored.
    pub fn submit_guess(&mut self, coords: Coord2) -> Result<GuessOutcome> {
        let coords = self.map.validate_coords(coords)?;

        if !self.can_guess_at(coords) {
            log::trace!("Ignored guess at {:?}", coords);
            return Ok(GuessOutcome::Ignored);
        }

        self.mark_started();

        let distance = self.field.distances.get(coords);
        let is_correct = distance.is_some() && self.field.farthest.contains(coords);
        self.guesses.push(Guess {
            coords,
            distance,
            is_correct,
        });
        self.guessed[coords.to_nd_index()] = true;
        let attempts = self.attempts();
        log::debug!(
            "Guess {} at {:?}, distance {:?}, correct: {}",
            attempts,
            coords,
            distance,
            is_correct
        );

        Ok(if is_correct {
            self.score = compute_score(attempts, self.max_attempts);
            self.end_game(true);
            GuessOutcome::Won
        } else if attempts >= self.max_attempts {
            self.end_game(false);
            GuessOutcome::Lost
        } else {
            GuessOutcome::Missed
        })
    }

    fn mark_started(&mut self) {
        if self.state.is_waiting() {
            log::debug!("Session started");
            self.state = SessionState::Playing;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        log::debug!(
            "Session ended {:?} after {} guess(es), score {}",
            self.state,
            self.guesses.len(),
            self.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(map: GridMap, max_attempts: CellCount) -> GameSession {
        GameSession::from_map(map, max_attempts).unwrap()
    }

    fn open_session() -> GameSession {
        session(GridMap::new(5, &[(0, 0)], &[], &[]).unwrap(), 5)
    }

    #[test]
    fn score_decreases_with_attempts() {
        assert_eq!(compute_score(1, 5), 2000);
        assert_eq!(compute_score(5, 5), 1200);
        assert!(compute_score(2, 5) < compute_score(1, 5));
    }

    #[test]
    fn first_guess_starts_and_can_win() {
        let mut session = open_session();
        assert_eq!(session.state(), SessionState::Waiting);

        let outcome = session.submit_guess((4, 4)).unwrap();

        assert_eq!(outcome, GuessOutcome::Won);
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.score(), 2000);
        assert_eq!(session.guesses()[0].distance, Some(8));
    }

    #[test]
    fn miss_moves_to_playing() {
        let mut session = open_session();

        assert_eq!(session.submit_guess((1, 1)).unwrap(), GuessOutcome::Missed);
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.attempts_left(), 4);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn non_guessable_cells_are_ignored() {
        let walls = [((2, 2), ObstacleKind::Wall)];
        let map = GridMap::new(5, &[(0, 0)], &walls, &[(3, 3)]).unwrap();
        let mut session = session(map, 5);

        assert_eq!(session.submit_guess((0, 0)).unwrap(), GuessOutcome::Ignored);
        assert_eq!(session.submit_guess((2, 2)).unwrap(), GuessOutcome::Ignored);
        assert_eq!(session.submit_guess((3, 3)).unwrap(), GuessOutcome::Ignored);
        assert_eq!(session.state(), SessionState::Waiting);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn repeated_guess_is_ignored() {
        let mut session = open_session();

        session.submit_guess((1, 2)).unwrap();
        let outcome = session.submit_guess((1, 2)).unwrap();

        assert_eq!(outcome, GuessOutcome::Ignored);
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn out_of_bounds_guess_is_an_error() {
        let mut session = open_session();

        assert_eq!(session.submit_guess((5, 0)), Err(GameError::InvalidCoords));
        assert_eq!(session.state(), SessionState::Waiting);
    }

    #[test]
    fn unreachable_guess_is_never_correct() {
        let walls = [((1, 2), ObstacleKind::Wall), ((2, 1), ObstacleKind::Wall)];
        let map = GridMap::new(3, &[(0, 0)], &walls, &[]).unwrap();
        let mut session = session(map, 3);

        assert_eq!(session.submit_guess((2, 2)).unwrap(), GuessOutcome::Missed);
        assert_eq!(
            session.guesses()[0],
            Guess {
                coords: (2, 2),
                distance: None,
                is_correct: false,
            }
        );
    }

    #[test]
    fn finished_session_ignores_guesses() {
        let mut session = open_session();
        session.submit_guess((4, 4)).unwrap();

        assert_eq!(session.submit_guess((1, 1)).unwrap(), GuessOutcome::Ignored);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.score(), 2000);
        assert!(!session.can_guess_at((1, 1)));
    }

    #[test]
    fn attempt_limit_changes_before_first_guess() {
        let mut session = open_session();

        session.set_max_attempts(2).unwrap();
        assert_eq!(session.submit_guess((1, 0)).unwrap(), GuessOutcome::Missed);
        assert_eq!(session.submit_guess((2, 0)).unwrap(), GuessOutcome::Lost);
        assert_eq!(session.set_max_attempts(0), Err(GameError::InvalidMaxAttempts));
    }

    #[test]
    fn attempt_limit_is_locked_while_playing() {
        let mut session = open_session();
        session.submit_guess((1, 0)).unwrap();
        session.submit_guess((2, 0)).unwrap();

        assert_eq!(session.set_max_attempts(1), Err(GameError::SessionInProgress));
        assert_eq!(session.set_max_attempts(9), Err(GameError::SessionInProgress));
        assert_eq!(session.max_attempts(), 5);

        assert_eq!(session.submit_guess((3, 0)).unwrap(), GuessOutcome::Missed);
        assert_eq!(session.submit_guess((4, 4)).unwrap(), GuessOutcome::Won);
        assert_eq!(session.score(), 1000 + 2 * 200);
    }

    #[test]
    fn finished_session_keeps_attempts_within_limit() {
        let mut session = open_session();
        for coords in [(1, 0), (2, 0), (3, 0)] {
            session.submit_guess(coords).unwrap();
        }
        session.submit_guess((4, 4)).unwrap();
        assert_eq!(session.state(), SessionState::Won);

        for limit in 1..=6 {
            let result = session.set_max_attempts(limit);
            if limit < 4 {
                assert_eq!(result, Err(GameError::AttemptsExceedLimit { used: 4 }));
            } else {
                assert_eq!(result, Ok(()));
            }
            assert!(session.attempts() <= session.max_attempts(), "limit {limit}");
        }
        assert_eq!(session.score(), 1000 + 2 * 200);
    }

    #[test]
    fn outcomes_report_updates() {
        let mut session = open_session();

        let missed = session.submit_guess((1, 1)).unwrap();
        assert!(missed.has_update() && !missed.is_final());

        let ignored = session.submit_guess((1, 1)).unwrap();
        assert!(!ignored.has_update() && !ignored.is_final());

        let won = session.submit_guess((4, 4)).unwrap();
        assert!(won.has_update() && won.is_final());
    }

    #[test]
    fn reset_starts_over() {
        let config = SessionConfig::new(MapConfig::random(6), 3);
        let mut session = GameSession::new(&config, 11).unwrap();
        let first_open = session
            .map()
            .iter_roles()
            .find(|&(_, role)| role.is_guessable())
            .map(|(coords, _)| coords)
            .unwrap();
        session.submit_guess(first_open).unwrap();

        session.reset(&config, 12).unwrap();

        assert_eq!(session.state(), SessionState::Waiting);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.guesses().is_empty());
        assert!(!session.farthest().is_empty());
    }

    #[test]
    fn failed_reset_keeps_session() {
        let mut session = open_session();
        session.submit_guess((1, 1)).unwrap();
        let before = session.clone();

        let bad = SessionConfig::new(MapConfig::random(6), 0);

        assert_eq!(session.reset(&bad, 1), Err(GameError::InvalidMaxAttempts));
        assert_eq!(session, before);
    }
}
