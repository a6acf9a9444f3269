//! A simple bot that flies towards the next gap.

use crate::game::types::{FlappyGame, ObstacleKind};

/// Distance kept between the bird's bottom edge and the gap's lower edge.
const FLOOR_MARGIN: i32 = 12;

/// Decide whether to jump this tick.
///
/// Aims for the lower edge of the first gap not yet fully behind the bird
/// (or the lower third of the screen when nothing is coming), and jumps only
/// while falling so the bird does not stack impulses into the ceiling.
pub fn should_jump(game: &FlappyGame) -> bool {
    let bird = &game.state.bird;
    if bird.velocity < 0 {
        return false;
    }

    let floor = game
        .state
        .obstacles
        .iter()
        .find(|o| o.kind == ObstacleKind::Bottom && o.bounds.right() >= bird.x)
        .map(|o| o.bounds.y)
        .unwrap_or(game.config.height - game.config.height / 3);

    let next_bottom = bird.y + bird.velocity + bird.size;
    next_bottom + FLOOR_MARGIN >= floor
}
