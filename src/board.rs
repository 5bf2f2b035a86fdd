use bevy::{
    math::{uvec2, vec2},
    picking::pointer::PointerButton,
    prelude::*,
};

use crate::{grid::Grid, life::Field, prelude::*};

/// Draws the field, one mesh per cell, and lets the mouse edit it.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Board::default())
            .add_systems(Startup, (load_cell_materials, spawn_board).chain())
            .add_systems(
                PostUpdate,
                sync_cell_materials.run_if(resource_changed::<Field>),
            )
            .add_observer(toggle_cell_on_press)
            .add_observer(revive_cell_on_drag);
    }
}

// ——> SYSTEMS

fn load_cell_materials(mut commands: Commands, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.insert_resource(CellMaterials {
        alive: materials.add(ColorMaterial::from_color(CELL_ALIVE_COLOR)),
        dead: materials.add(ColorMaterial::from_color(CELL_DEAD_COLOR)),
    });
}

/// spawn the cells and the frame around them
fn spawn_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cell_materials: Res<CellMaterials>,
    board: Res<Board>,
) {
    let board = *board;
    let cell_mesh = meshes.add(Rectangle::from_size(board.cell_size));
    let dead_mat = cell_materials.dead.clone();

    let cells = (0..board.size.y)
        .flat_map(|y| (0..board.size.x).map(move |x| uvec2(x, y)))
        .map(move |cell_coord| {
            (
                Cell(cell_coord),
                Mesh2d(cell_mesh.clone()),
                MeshMaterial2d(dead_mat.clone()),
                Transform::from_translation(board.cell_coord_to_translation(cell_coord))
                    .with_scale(board.cell_scale.extend(1.0)),
            )
        })
        .collect::<Vec<_>>();
    commands.spawn_batch(cells);

    let px = board.pixel_size();
    let border_mat = materials.add(ColorMaterial::from_color(BORDER_COLOR));
    let vert = meshes.add(Rectangle::new(BORDER_WIDTH_PX, px.y + 2.0 * BORDER_WIDTH_PX));
    let horiz = meshes.add(Rectangle::new(px.x + 2.0 * BORDER_WIDTH_PX, BORDER_WIDTH_PX));
    let half_x = (px.x + BORDER_WIDTH_PX) * 0.5;
    let half_y = (px.y + BORDER_WIDTH_PX) * 0.5;
    let borders = [
        (vert.clone(), vec2(-half_x, 0.0)),
        (vert, vec2(half_x, 0.0)),
        (horiz.clone(), vec2(0.0, half_y)),
        (horiz, vec2(0.0, -half_y)),
    ]
    .map(|(mesh, offs)| {
        (
            Border,
            Mesh2d(mesh),
            MeshMaterial2d(border_mat.clone()),
            Transform::from_translation((board.center + offs).extend(0.0)),
        )
    });
    commands.spawn_batch(borders);

    info!(
        "board spawned: {}x{} cells of {}px",
        board.size.x, board.size.y, board.cell_size.x
    );
}

/// repaint the cells whose life status no longer matches their material
fn sync_cell_materials(
    field: Res<Field>,
    cell_materials: Res<CellMaterials>,
    mut cells: Query<(&Cell, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    for (cell, mut material) in cells.iter_mut() {
        let wanted = if field.is_alive(cell.x as usize, cell.y as usize) {
            &cell_materials.alive
        } else {
            &cell_materials.dead
        };
        // only write on change, reading through `Mut` does not mark it changed
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

// ——> OBSERVERS

/// pressing a cell flips it
fn toggle_cell_on_press(
    trigger: Trigger<Pointer<Down>>,
    cells: Query<&Cell>,
    mut field: ResMut<Field>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    let Ok(cell) = cells.get(trigger.entity()) else {
        return;
    };
    let (x, y) = (cell.x as usize, cell.y as usize);
    if let Some(alive) = field.press(x, y) {
        debug!("cell ({x}, {y}) set {}", if alive { "alive" } else { "dead" });
    }
}

/// dragging over a cell brings it to life
fn revive_cell_on_drag(
    trigger: Trigger<Pointer<DragOver>>,
    cells: Query<&Cell>,
    mut field: ResMut<Field>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    let Ok(cell) = cells.get(trigger.entity()) else {
        return;
    };
    let (x, y) = (cell.x as usize, cell.y as usize);
    if field.drag(x, y) {
        debug!("cell ({x}, {y}) set alive");
    }
}

/// Mouse edits, the boundary ring is never editable.
impl Field {
    /// Flips a pressed cell, returns its new state or `None` if the cell is on the ring.
    pub fn press(&mut self, x: usize, y: usize) -> Option<bool> {
        Grid::is_interior(x, y).then(|| self.toggle(x, y))
    }

    /// Brings a dragged-over cell to life, returns whether it changed.
    pub fn drag(&mut self, x: usize, y: usize) -> bool {
        if !Grid::is_interior(x, y) || self.is_alive(x, y) {
            return false;
        }
        self.set_alive(x, y, true);
        true
    }
}

// ——> COMPONENTS

/// position of the cell on the field
#[derive(Component, Debug, Clone, Copy, Deref)]
#[require(Mesh2d)]
pub struct Cell(UVec2);

#[derive(Component)]
#[require(Mesh2d)]
struct Border;

// ——> RESOURCES

#[derive(Resource)]
struct CellMaterials {
    alive: Handle<ColorMaterial>,
    dead: Handle<ColorMaterial>,
}

#[derive(Resource, Clone, Copy)]
pub struct Board {
    /// the center of the board
    center: Vec2,
    /// the amount of cells on each axis
    size: UVec2,
    /// the size of each individual cell
    cell_size: Vec2,
    /// scale of each individual cell (should be 0.0 - 1.0)
    cell_scale: Vec2,
}

impl Board {
    /// computes full size of the board in pixels
    #[inline]
    pub fn pixel_size(&self) -> Vec2 {
        self.size.as_vec2() * self.cell_size
    }

    /// Center of the cell in world space. Row 0 is the top row.
    #[inline]
    pub fn cell_coord_to_translation(&self, cell_coord: UVec2) -> Vec3 {
        let top_left = self.center + self.pixel_size() * vec2(-0.5, 0.5);
        let offs = (cell_coord.as_vec2() * self.cell_size + self.cell_size * 0.5) * vec2(1.0, -1.0);
        (top_left + offs).extend(10.0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            center: BOARD_POS,
            size: uvec2(GRID_WIDTH as u32, GRID_HEIGHT as u32),
            cell_size: CELL_SIZE_PX,
            cell_scale: CELL_SCALE,
        }
    }
}

#[cfg(test)]
mod test {
    use bevy::math::vec3;

    use super::*;

    #[test]
    fn board_works() {
        let board = Board {
            center: Vec2::ZERO,
            size: uvec2(8, 4),
            cell_size: Vec2::splat(8.0),
            cell_scale: Vec2::splat(0.9),
        };

        assert_eq!(vec2(64., 32.), board.pixel_size());
        assert_eq!(
            vec3(-28.0, 12.0, 10.),
            board.cell_coord_to_translation(uvec2(0, 0))
        );
        assert_eq!(
            vec3(-4.0, -4.0, 10.),
            board.cell_coord_to_translation(uvec2(3, 2))
        );
        assert_eq!(
            vec3(28.0, -12.0, 10.),
            board.cell_coord_to_translation(uvec2(7, 3))
        );
    }

    #[test]
    fn press_toggles_interior_cells() {
        let mut field = Field::default();
        assert_eq!(Some(true), field.press(1, 1));
        assert!(field.is_alive(1, 1));
        assert_eq!(Some(false), field.press(1, 1));
        assert!(!field.is_alive(1, 1));
        assert_eq!(Some(true), field.press(148, 98));

        for (x, y) in [(0, 0), (0, 50), (149, 50), (70, 0), (70, 99), (149, 99)] {
            assert_eq!(None, field.press(x, y), "({x}, {y})");
            assert!(!field.is_alive(x, y));
        }
        assert_eq!(1, field.population());
    }

    #[test]
    fn drag_only_revives() {
        let mut field = Field::default();
        assert!(field.drag(10, 10));
        assert!(field.is_alive(10, 10));
        // dragging again over a live cell leaves it alive
        assert!(!field.drag(10, 10));
        assert!(field.is_alive(10, 10));

        for (x, y) in [(0, 10), (149, 10), (10, 0), (10, 99)] {
            assert!(!field.drag(x, y), "({x}, {y})");
            assert!(!field.is_alive(x, y));
        }
        assert_eq!(1, field.population());
    }

    #[test]
    fn default_board_matches_the_field() {
        let board = Board::default();
        assert_eq!(vec2(600., 400.), board.pixel_size());
        // the scene is centered on the board position
        let first = board.cell_coord_to_translation(UVec2::ZERO);
        let last = board.cell_coord_to_translation(uvec2(149, 99));
        assert_eq!(BOARD_POS, (first.truncate() + last.truncate()) * 0.5);
    }
}
