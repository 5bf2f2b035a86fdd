use std::time::Duration;

use bevy::prelude::*;

use crate::{
    grid::Grid,
    prelude::*,
    state::{Control, SimState},
};

/// Owns the field and drives it: applies [`Control`]s to the [`SimState`] and advances one
/// generation per fixed tick while running.
pub struct LifePlugin;

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Field>()
            .init_resource::<Generation>()
            .insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(
                UPDATE_INTERVAL_MS,
            )))
            .add_event::<Control>()
            .add_systems(Update, apply_controls)
            .add_systems(
                FixedUpdate,
                advance_generation.run_if(in_state(SimState::Running)),
            );
    }
}

// ——> SYSTEMS

fn apply_controls(
    mut controls: EventReader<Control>,
    state: Res<State<SimState>>,
    mut next_state: ResMut<NextState<SimState>>,
    mut field: ResMut<Field>,
    mut generation: ResMut<Generation>,
) {
    // several controls may arrive in one frame, each applies to the outcome of the previous
    let mut current = *state.get();
    for &control in controls.read() {
        let Some(next) = current.apply(control) else {
            debug!("ignoring {control:?} while {current:?}");
            continue;
        };

        match control {
            Control::Start => info!("simulation started at generation {}", **generation),
            Control::Pause => info!(
                "simulation paused at generation {}, {} cells alive",
                **generation,
                field.population()
            ),
            Control::New => {
                field.reset();
                **generation = 0;
                info!("new game, field cleared");
            }
            Control::Randomize => {
                field.randomize(&mut fastrand::Rng::new());
                **generation = 0;
                info!("field randomized, {} cells alive", field.population());
            }
        }

        if next != current {
            next_state.set(next);
            current = next;
        }
    }
}

fn advance_generation(mut field: ResMut<Field>, mut generation: ResMut<Generation>) {
    field.step();
    **generation += 1;
    trace!("generation {}", **generation);
}

// ——> RESOURCES

/// the field being simulated
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct Field(pub Grid);

/// number of generations computed since the field was last cleared
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct Generation(pub u64);

#[cfg(test)]
mod test {
    use bevy::state::app::StatesPlugin;

    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<SimState>()
            .add_plugins(LifePlugin)
            // ticks are run by hand, keep the fixed clock from firing on its own
            .insert_resource(Time::<Fixed>::from_seconds(3600.0));
        app.update();
        app
    }

    fn send(app: &mut App, control: Control) {
        app.world_mut().send_event(control);
        // controls are read in `Update`, the state changes on the following frame
        app.update();
        app.update();
    }

    fn state(app: &App) -> SimState {
        *app.world().resource::<State<SimState>>().get()
    }

    fn tick(app: &mut App) {
        app.world_mut().run_schedule(FixedUpdate);
    }

    fn field(app: &mut App) -> Mut<'_, Field> {
        app.world_mut().resource_mut::<Field>()
    }

    #[test]
    fn ticks_only_while_running() {
        let mut app = app();
        for x in 10..13 {
            field(&mut app).set_alive(x, 10, true);
        }

        assert_eq!(SimState::Stopped, state(&app));
        tick(&mut app);
        assert!(field(&mut app).is_alive(10, 10));
        assert_eq!(0, **app.world().resource::<Generation>());

        send(&mut app, Control::Start);
        assert_eq!(SimState::Running, state(&app));
        tick(&mut app);
        assert!(!field(&mut app).is_alive(10, 10));
        assert!(field(&mut app).is_alive(11, 9));
        assert_eq!(1, **app.world().resource::<Generation>());

        send(&mut app, Control::Pause);
        assert_eq!(SimState::Paused, state(&app));
        tick(&mut app);
        assert!(field(&mut app).is_alive(11, 9));
        assert_eq!(1, **app.world().resource::<Generation>());

        send(&mut app, Control::Start);
        tick(&mut app);
        assert!(field(&mut app).is_alive(10, 10));
        assert_eq!(2, **app.world().resource::<Generation>());
    }

    #[test]
    fn new_game_clears_and_stops() {
        let mut app = app();
        field(&mut app).set_alive(20, 20, true);

        send(&mut app, Control::Start);
        // refused while running
        send(&mut app, Control::New);
        assert_eq!(SimState::Running, state(&app));

        send(&mut app, Control::Pause);
        field(&mut app).set_alive(30, 30, true);
        send(&mut app, Control::New);
        assert_eq!(SimState::Stopped, state(&app));
        assert_eq!(0, field(&mut app).population());
        assert_eq!(0, **app.world().resource::<Generation>());
    }

    #[test]
    fn randomize_keeps_the_state() {
        let mut app = app();
        send(&mut app, Control::Randomize);
        assert_eq!(SimState::Stopped, state(&app));
        assert!(field(&mut app).population() > 0);
        assert!(field(&mut app)
            .alive_cells()
            .all(|(x, y)| Grid::is_interior(x, y)));

        send(&mut app, Control::Start);
        let before = field(&mut app).snapshot();
        send(&mut app, Control::Randomize);
        assert_eq!(before, **field(&mut app));
    }
}
