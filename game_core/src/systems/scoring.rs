use crate::{Ball, Config, Events, Side};
use hecs::World;

/// Check if the ball left the field horizontally.
///
/// Past the left edge the computer takes the round, past the right edge the
/// player does. Returns the winning side.
pub fn check_out_of_bounds(world: &World, config: &Config, events: &mut Events) -> Option<Side> {
    let x = world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos.x)?;

    // The side whose end the ball crossed loses the round
    let missed = if x < 0.0 {
        Side::Player
    } else if x > config.field_width {
        Side::Computer
    } else {
        return None;
    };
    let winner = missed.opponent();

    events.ball_out = Some(winner);
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn check(x: f32) -> (Option<Side>, Events) {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_ball(&mut world, Vec2::new(x, 250.0), Vec2::new(6.0, 6.0));
        let winner = check_out_of_bounds(&world, &config, &mut events);
        (winner, events)
    }

    #[test]
    fn test_computer_wins_when_ball_exits_left() {
        let (winner, events) = check(-0.5);
        assert_eq!(winner, Some(Side::Computer));
        assert_eq!(events.ball_out, Some(Side::Computer));
    }

    #[test]
    fn test_player_wins_when_ball_exits_right() {
        let (winner, events) = check(700.5);
        assert_eq!(winner, Some(Side::Player));
        assert_eq!(events.ball_out, Some(Side::Player));
    }

    #[test]
    fn test_edges_are_still_in_play() {
        assert_eq!(check(0.0).0, None);
        assert_eq!(check(700.0).0, None);
        assert_eq!(check(350.0).1, Events::default());
    }

    #[test]
    fn test_no_ball_no_outcome() {
        let world = World::new();
        let mut events = Events::new();
        assert_eq!(check_out_of_bounds(&world, &Config::new(), &mut events), None);
    }
}
