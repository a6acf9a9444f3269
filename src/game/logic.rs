//! Per-tick game logic: physics, spawning, scrolling and collisions.

use super::types::{FlappyGame, GameOverCause, GameState};
use crate::audio::SoundCue;
use crate::core::config::GameConfig;
use crate::core::game_loop::GameLoop;
use crate::core::tick::{TickEvent, TickInput};
use rand::Rng;

/// Process one fixed tick.
///
/// While playing: apply the jump, integrate the bird, spawn, scroll, then
/// resolve coin pickup and crashes against the moved world. While game
/// over: nothing moves, and only a restart request is honoured.
pub fn process_tick<R: Rng>(
    game: &mut FlappyGame,
    input: TickInput,
    now_ms: u64,
    rng: &mut R,
) -> Vec<TickEvent> {
    let mut events = Vec::new();

    if game.state.is_game_over() {
        if input.restart {
            restart(game);
            events.push(TickEvent::Restarted);
        }
        return events;
    }

    let bird = &mut game.state.bird;
    if input.jump {
        bird.velocity = game.config.jump_speed;
        events.push(TickEvent::PlaySound(SoundCue::Jump));
    }
    // Position moves by the pre-tick velocity.
    bird.y += bird.velocity;
    bird.velocity += game.config.gravity;

    if spawn_due(&game.state, &game.config, now_ms) {
        let gap_top = game.spawn_obstacle_pair(now_ms, rng);
        events.push(TickEvent::ObstacleSpawned { gap_top });
    }

    scroll_world(game, &mut events);
    check_collisions(game, &mut events);

    events
}

/// Reset bird, obstacles, coin, score and the spawn timer.
/// The next tick is immediately eligible to spawn.
pub fn restart(game: &mut FlappyGame) {
    game.state = GameState::new(&game.config);
}

/// Coin-gated spawning: a new pair only once the previous coin is gone
/// and the spawn interval has elapsed.
fn spawn_due(state: &GameState, config: &GameConfig, now_ms: u64) -> bool {
    if state.coin.is_some() {
        return false;
    }
    match state.last_spawn_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= config.obstacle_interval_ms,
    }
}

/// Move obstacles and the coin left, dropping whatever left the screen.
fn scroll_world(game: &mut FlappyGame, events: &mut Vec<TickEvent>) {
    let speed = game.config.scroll_speed;

    for obstacle in &mut game.state.obstacles {
        obstacle.bounds.x -= speed;
    }
    game.state.obstacles.retain(|o| o.bounds.right() >= 0);

    let coin_gone = match game.state.coin.as_mut() {
        Some(coin) => {
            coin.bounds.x -= speed;
            coin.bounds.right() < 0
        }
        None => false,
    };
    if coin_gone {
        game.state.coin = None;
        events.push(TickEvent::CoinMissed);
    }
}

/// Resolve coin pickup, obstacle hits and playfield bounds.
fn check_collisions(game: &mut FlappyGame, events: &mut Vec<TickEvent>) {
    let height = game.config.height;
    let state = &mut game.state;
    let bird_box = state.bird.bounds();

    if state
        .coin
        .is_some_and(|coin| coin.bounds.intersects(&bird_box))
    {
        state.coin = None;
        state.score += 1;
        events.push(TickEvent::PlaySound(SoundCue::Coin));
        events.push(TickEvent::CoinCollected { score: state.score });
    }

    if state
        .obstacles
        .iter()
        .any(|o| o.bounds.intersects(&bird_box))
    {
        state.game_over = Some(GameOverCause::Obstacle);
        state.bird.velocity = 0;
    }

    let max_y = height - state.bird.size;
    if state.bird.y < 0 || state.bird.y > max_y {
        state.bird.y = state.bird.y.clamp(0, max_y);
        state.bird.velocity = 0;
        if state.game_over.is_none() {
            state.game_over = Some(GameOverCause::OutOfBounds);
        }
    }

    if let Some(cause) = state.game_over {
        events.push(TickEvent::GameOver {
            cause,
            score: state.score,
        });
    }
}

impl GameLoop for FlappyGame {
    fn update(&mut self, input: TickInput, now_ms: u64, rng: &mut impl Rng) -> Vec<TickEvent> {
        process_tick(self, input, now_ms, rng)
    }

    fn restart(&mut self) {
        restart(self);
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Bounds, Coin, Obstacle, ObstacleKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Game whose spawn timer is not due, so ticks only move the bird.
    fn quiet_game() -> FlappyGame {
        let mut game = FlappyGame::default();
        game.state.last_spawn_ms = Some(0);
        game
    }

    #[test]
    fn test_gravity_step_uses_pre_tick_velocity() {
        let mut game = quiet_game();
        let mut rng = rng();

        process_tick(&mut game, TickInput::NONE, 20, &mut rng);
        assert_eq!(game.state.bird.velocity, 1);
        assert_eq!(game.state.bird.y, 300);

        process_tick(&mut game, TickInput::NONE, 40, &mut rng);
        assert_eq!(game.state.bird.velocity, 2);
        assert_eq!(game.state.bird.y, 301);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut game = quiet_game();
        game.state.bird.velocity = 7;
        let events = process_tick(&mut game, TickInput::JUMP, 20, &mut rng());

        assert_eq!(game.state.bird.y, 290);
        assert_eq!(game.state.bird.velocity, -9);
        assert!(events.contains(&TickEvent::PlaySound(SoundCue::Jump)));
    }

    #[test]
    fn test_first_tick_spawns_pair_and_coin() {
        let mut game = FlappyGame::default();
        let events = process_tick(&mut game, TickInput::NONE, 0, &mut rng());

        assert_eq!(game.state.obstacles.len(), 2);
        assert!(game.state.coin.is_some());
        // Spawned at the right edge, then scrolled once.
        assert_eq!(game.state.obstacles[0].bounds.x, 790);
        assert_eq!(game.state.obstacles[1].bounds.x, 790);
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::ObstacleSpawned { .. })));
    }

    #[test]
    fn test_no_spawn_while_coin_alive() {
        let mut game = FlappyGame::default();
        let mut rng = rng();
        process_tick(&mut game, TickInput::NONE, 0, &mut rng);
        game.state.bird.y = 300;
        game.state.bird.velocity = 0;

        // Interval long past, but the coin is still on screen.
        process_tick(&mut game, TickInput::NONE, 10_000, &mut rng);
        assert_eq!(game.state.obstacles.len(), 2);
    }

    #[test]
    fn test_spawn_waits_for_interval() {
        let mut game = quiet_game();
        game.state.last_spawn_ms = Some(1_000);
        let mut rng = rng();

        process_tick(&mut game, TickInput::NONE, 2_499, &mut rng);
        assert!(game.state.obstacles.is_empty());

        process_tick(&mut game, TickInput::NONE, 2_500, &mut rng);
        assert_eq!(game.state.obstacles.len(), 2);
        assert_eq!(game.state.last_spawn_ms, Some(2_500));
    }

    #[test]
    fn test_offscreen_obstacles_removed_in_order() {
        let mut game = quiet_game();
        let make = |x| Obstacle {
            bounds: Bounds::new(x, 0, 60, 10),
            kind: ObstacleKind::Top,
        };
        game.state.obstacles = vec![make(-65), make(-50), make(100), make(400)];

        process_tick(&mut game, TickInput::NONE, 20, &mut rng());

        let xs: Vec<i32> = game.state.obstacles.iter().map(|o| o.bounds.x).collect();
        // -75 + 60 < 0 removed; -60 + 60 == 0 kept.
        assert_eq!(xs, vec![-60, 90, 390]);
    }

    #[test]
    fn test_coin_cleared_offscreen() {
        let mut game = quiet_game();
        game.state.coin = Some(Coin {
            bounds: Bounds::new(-25, 0, 30, 30),
        });

        let events = process_tick(&mut game, TickInput::NONE, 20, &mut rng());
        assert!(game.state.coin.is_none());
        assert!(events.contains(&TickEvent::CoinMissed));
        assert_eq!(game.state.score, 0);
    }

    #[test]
    fn test_coin_collected() {
        let mut game = quiet_game();
        game.state.coin = Some(Coin {
            bounds: Bounds::new(190, 300, 30, 30),
        });

        let events = process_tick(&mut game, TickInput::NONE, 20, &mut rng());
        assert!(game.state.coin.is_none());
        assert_eq!(game.state.score, 1);
        assert!(events.contains(&TickEvent::PlaySound(SoundCue::Coin)));
        assert!(events.contains(&TickEvent::CoinCollected { score: 1 }));
        assert!(!game.state.is_game_over());
    }

    #[test]
    fn test_obstacle_collision_ends_game() {
        let mut game = quiet_game();
        game.state.bird.velocity = 5;
        game.state.obstacles.push(Obstacle {
            bounds: Bounds::new(200, 0, 60, 400),
            kind: ObstacleKind::Top,
        });

        let events = process_tick(&mut game, TickInput::NONE, 20, &mut rng());
        assert_eq!(game.state.game_over, Some(GameOverCause::Obstacle));
        assert_eq!(game.state.bird.velocity, 0);
        assert!(events.contains(&TickEvent::GameOver {
            cause: GameOverCause::Obstacle,
            score: 0,
        }));
    }

    #[test]
    fn test_floor_clamps_and_ends_game() {
        let mut game = quiet_game();
        game.state.bird.y = 555;
        game.state.bird.velocity = 6;

        process_tick(&mut game, TickInput::NONE, 20, &mut rng());
        assert_eq!(game.state.game_over, Some(GameOverCause::OutOfBounds));
        assert_eq!(game.state.bird.y, 560);
    }

    #[test]
    fn test_ceiling_clamps_and_ends_game() {
        let mut game = quiet_game();
        game.state.bird.y = 5;
        game.state.bird.velocity = -10;

        process_tick(&mut game, TickInput::NONE, 20, &mut rng());
        assert_eq!(game.state.game_over, Some(GameOverCause::OutOfBounds));
        assert_eq!(game.state.bird.y, 0);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut game = quiet_game();
        game.state.game_over = Some(GameOverCause::Obstacle);
        game.state.bird.velocity = 3;
        let before = game.state.clone();

        let events = process_tick(&mut game, TickInput::JUMP, 5_000, &mut rng());
        assert!(events.is_empty());
        assert_eq!(game.state, before);
    }

    #[test]
    fn test_restart_request_only_honoured_when_game_over() {
        let mut game = quiet_game();
        game.state.score = 4;
        process_tick(&mut game, TickInput::RESTART, 20, &mut rng());
        assert_eq!(game.state.score, 4);

        game.state.game_over = Some(GameOverCause::OutOfBounds);
        let events = process_tick(&mut game, TickInput::RESTART, 40, &mut rng());
        assert_eq!(events, vec![TickEvent::Restarted]);
        assert_eq!(game.state, GameState::new(&game.config));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = FlappyGame::default();
        game.place_obstacle_pair(100, 20, 500);
        game.state.bird.y = 12;
        game.state.bird.velocity = -4;
        game.state.score = 9;
        game.state.game_over = Some(GameOverCause::Obstacle);

        restart(&mut game);

        assert_eq!(game.state.bird.y, 300);
        assert_eq!(game.state.bird.velocity, 0);
        assert!(game.state.obstacles.is_empty());
        assert!(game.state.coin.is_none());
        assert_eq!(game.state.score, 0);
        assert!(!game.state.is_game_over());
        assert!(game.state.last_spawn_ms.is_none());
    }

    #[test]
    fn test_game_loop_trait_delegates() {
        let mut game = quiet_game();
        let events = GameLoop::update(&mut game, TickInput::JUMP, 20, &mut rng());
        assert_eq!(events, vec![TickEvent::PlaySound(SoundCue::Jump)]);
        assert!(!game.is_game_over());
        assert_eq!(game.config().height, 600);
        assert_eq!(game.state().bird.velocity, -9);
    }
}
