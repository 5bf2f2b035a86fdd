pub mod board;
pub mod camera;
pub mod controls;
pub mod grid;
pub mod life;
pub mod sim;
pub mod state;

pub mod prelude {
    use bevy::{
        color::Color,
        math::{vec2, Vec2},
    };

    pub const GRID_WIDTH: usize = 150;
    pub const GRID_HEIGHT: usize = 100;
    pub const UPDATE_INTERVAL_MS: u64 = 50;

    pub const WINDOW_SIZE: Vec2 = vec2(655.0, 525.0);
    pub const BG_COLOR: Color = Color::srgb(0.627, 0.627, 0.643);

    pub const BOARD_POS: Vec2 = vec2(0.0, 30.0);
    pub const BORDER_WIDTH_PX: f32 = 2.0;
    pub const BORDER_COLOR: Color = Color::BLACK;
    /// area the camera always keeps in view: the board with its border and the buttons below
    pub const VIEW_SIZE: Vec2 = vec2(620.0, 500.0);

    pub const CELL_SIZE_PX: Vec2 = Vec2::splat(4.0);
    pub const CELL_SCALE: Vec2 = Vec2::splat(1.0);
    pub const CELL_ALIVE_COLOR: Color = Color::srgb(0.502, 0.502, 0.502);
    pub const CELL_DEAD_COLOR: Color = Color::srgb(0.753, 0.753, 0.753);

    pub const BUTTON_SIZE_PX: Vec2 = vec2(180.0, 36.0);
    pub const BUTTON_GAP_PX: f32 = 12.0;
    pub const BUTTON_FONT_SIZE: f32 = 18.0;
    pub const BUTTON_COLOR: Color = Color::srgb(0.882, 0.882, 0.882);
    pub const BUTTON_HOVERED_COLOR: Color = Color::srgb(0.941, 0.941, 0.941);
    pub const BUTTON_PRESSED_COLOR: Color = Color::srgb(0.784, 0.784, 0.784);
    pub const BUTTON_DISABLED_COLOR: Color = Color::srgb(0.667, 0.667, 0.667);
    pub const BUTTON_TEXT_COLOR: Color = Color::BLACK;
}
