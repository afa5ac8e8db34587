//! Turns a simulation snapshot into draw instances

use game_core::{Config, Side, Snapshot};

/// Thickness of the field border strips
pub const BORDER: f32 = 6.0;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const BORDER_TINT: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Instance for an axis-aligned box given by its top-left corner and size
    pub fn from_top_left(x: f32, y: f32, w: f32, h: f32, tint: [f32; 4]) -> Self {
        Self {
            transform: [x + w / 2.0, y + h / 2.0, w, h],
            tint,
        }
    }
}

/// Number of rectangle instances per frame: four border strips and two paddles
pub const RECT_INSTANCES: usize = 6;

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub rects: [InstanceData; RECT_INSTANCES],
    pub ball: InstanceData,
}

impl Scene {
    pub fn build(snapshot: &Snapshot, config: &Config) -> Self {
        let w = config.field_width;
        let h = config.field_height;

        let top = InstanceData::from_top_left(0.0, 0.0, w, BORDER, BORDER_TINT);
        let bottom = InstanceData::from_top_left(0.0, h - BORDER, w, BORDER, BORDER_TINT);
        let left = InstanceData::from_top_left(0.0, 0.0, BORDER, h, BORDER_TINT);
        let right = InstanceData::from_top_left(w - BORDER, 0.0, BORDER, h, BORDER_TINT);

        let paddle = |side: Side, y: f32| {
            InstanceData::from_top_left(
                config.paddle_x(side),
                y,
                config.paddle_width,
                config.paddle_height,
                WHITE,
            )
        };

        let ball = InstanceData::from_top_left(
            snapshot.ball.x,
            snapshot.ball.y,
            config.ball_size,
            config.ball_size,
            WHITE,
        );

        Self {
            rects: [
                top,
                bottom,
                left,
                right,
                paddle(Side::Player, snapshot.player_y),
                paddle(Side::Computer, snapshot.computer_y),
            ],
            ball,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn snapshot() -> Snapshot {
        Snapshot {
            ball: Vec2::new(300.0, 200.0),
            player_y: 0.0,
            computer_y: 400.0,
        }
    }

    #[test]
    fn test_ball_instance_is_centred_on_box() {
        let scene = Scene::build(&snapshot(), &Config::new());
        assert_eq!(scene.ball.transform, [310.0, 210.0, 20.0, 20.0]);
    }

    #[test]
    fn test_paddle_instances() {
        let scene = Scene::build(&snapshot(), &Config::new());
        // Player paddle: x 8..16, y 0..100
        assert_eq!(scene.rects[4].transform, [12.0, 50.0, 8.0, 100.0]);
        // Computer paddle: x 684..692, y 400..500
        assert_eq!(scene.rects[5].transform, [688.0, 450.0, 8.0, 100.0]);
    }

    #[test]
    fn test_border_spans_field() {
        let scene = Scene::build(&snapshot(), &Config::new());
        assert_eq!(scene.rects[0].transform, [350.0, 3.0, 700.0, 6.0]);
        assert_eq!(scene.rects[3].transform, [697.0, 250.0, 6.0, 500.0]);
    }

    #[test]
    fn test_instance_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }
}
