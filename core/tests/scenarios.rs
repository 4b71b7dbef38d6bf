use farthest_core::*;

fn open_five_by_five() -> GameSession {
    let map = GridMap::new(5, &[(0, 0)], &[], &[]).unwrap();
    GameSession::from_map(map, 5).unwrap()
}

#[test]
fn corner_exit_is_found_on_first_guess() {
    let mut session = open_five_by_five();

    assert_eq!(session.farthest().cells(), [(4, 4)]);
    assert_eq!(session.farthest().distance(), Some(8));

    assert_eq!(session.submit_guess((4, 4)).unwrap(), GuessOutcome::Won);
    assert_eq!(session.state(), SessionState::Won);
    assert_eq!(session.score(), 2000);
}

#[test]
fn five_misses_lose_the_game() {
    let mut session = open_five_by_five();
    let guesses = [((1, 1), 2), ((2, 2), 4), ((3, 3), 6), ((0, 1), 1), ((1, 0), 1)];

    for (i, &(coords, _)) in guesses.iter().enumerate() {
        let outcome = session.submit_guess(coords).unwrap();
        let expected = if i == guesses.len() - 1 {
            GuessOutcome::Lost
        } else {
            GuessOutcome::Missed
        };
        assert_eq!(outcome, expected);
    }

    assert_eq!(session.state(), SessionState::Lost);
    assert_eq!(session.attempts(), 5);
    assert_eq!(session.score(), 0);
    for (guess, &(coords, distance)) in session.guesses().iter().zip(&guesses) {
        assert_eq!(guess.coords, coords);
        assert_eq!(guess.distance, Some(distance));
        assert!(!guess.is_correct);
    }
}

#[test]
fn finished_sessions_are_frozen() {
    let mut session = open_five_by_five();
    for coords in [(1, 1), (2, 2), (3, 3), (0, 1), (1, 0)] {
        session.submit_guess(coords).unwrap();
    }
    let frozen = session.clone();

    assert_eq!(session.submit_guess((4, 4)).unwrap(), GuessOutcome::Ignored);
    assert_eq!(session, frozen);
}

#[test]
fn walled_pocket_is_never_the_answer() {
    let walls = [((3, 4), ObstacleKind::Wall), ((4, 3), ObstacleKind::Wall)];
    let map = GridMap::new(5, &[(0, 0)], &walls, &[]).unwrap();
    let field = DistanceField::compute(&map);

    assert_eq!(field.distances.get((4, 4)), None);
    assert!(!field.farthest.contains((4, 4)));
    assert_eq!(field.farthest.distance(), Some(6));
}

#[test]
fn distance_field_invariants_hold_on_generated_maps() {
    for seed in 0..40 {
        let config = MapConfig {
            obstacle_percentage: 30,
            obstacle_policy: ObstaclePolicy::MixedRandom,
            ..MapConfig::random(8)
        };
        let map = generate_map(&config, seed).unwrap();
        let field = DistanceField::compute(&map);

        for &exit in map.exits() {
            assert_eq!(field.distances.get(exit), Some(0), "seed {seed}");
        }
        for (coords, _) in map.obstacles() {
            assert_eq!(field.distances.get(coords), None, "seed {seed}");
        }

        let best = field.farthest.distance().expect("generated maps are playable");
        for coords in field.farthest.iter() {
            assert_eq!(map[coords], CellRole::Open);
            assert_eq!(field.distances.get(coords), Some(best));
        }
        for (coords, role) in map.iter_roles() {
            if role.is_guessable() {
                assert!(field.distances.get(coords).is_none_or(|d| d <= best));
            }
        }

        assert_eq!(field, DistanceField::compute(&map), "seed {seed}");
    }
}

#[test]
fn attempts_never_exceed_limit_once_finished() {
    for seed in 0..20 {
        let config = SessionConfig::new(MapConfig::random(7), 4);
        let mut session = GameSession::new(&config, seed).unwrap();
        let open: Vec<Coord2> = session
            .map()
            .iter_roles()
            .filter(|&(_, role)| role.is_guessable())
            .map(|(coords, _)| coords)
            .collect();

        for coords in open {
            session.submit_guess(coords).unwrap();
            assert_eq!(usize::from(session.attempts()), session.guesses().len());
            if session.is_finished() {
                break;
            }
        }

        assert!(session.is_finished(), "seed {seed}");
        assert!(session.attempts() <= session.max_attempts(), "seed {seed}");
    }
}
