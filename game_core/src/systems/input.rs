use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued inputs to paddle intents. The last input per side wins.
pub fn ingest_inputs(world: &mut World, input: &mut InputQueue) {
    for (side, dir) in input.pop_inputs() {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.side == side {
                intent.dir = dir;
            }
        }
    }
}
