use bevy::{picking::PickingBehavior, prelude::*};

use crate::{
    prelude::*,
    state::{Control, SimState},
};

/// Start / Pause / New buttons under the board, plus keyboard shortcuts for the same.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_buttons).add_systems(
            Update,
            (handle_buttons, handle_kbd, paint_buttons),
        );
    }
}

const BUTTONS: [Control; 3] = [Control::Start, Control::Pause, Control::New];

#[derive(Component, Debug, Clone, Copy, Deref)]
struct ControlButton(Control);

fn spawn_buttons(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::FlexEnd,
                column_gap: Val::Px(BUTTON_GAP_PX),
                padding: UiRect::bottom(Val::Px(BUTTON_GAP_PX)),
                ..default()
            },
            // the row spans the whole window, let clicks through to the board
            PickingBehavior::IGNORE,
        ))
        .with_children(|parent| {
            for control in BUTTONS {
                parent
                    .spawn((
                        Button,
                        ControlButton(control),
                        Node {
                            width: Val::Px(BUTTON_SIZE_PX.x),
                            height: Val::Px(BUTTON_SIZE_PX.y),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor(BORDER_COLOR),
                        BackgroundColor(BUTTON_COLOR),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(control.label()),
                            TextFont {
                                font_size: BUTTON_FONT_SIZE,
                                ..default()
                            },
                            TextColor(BUTTON_TEXT_COLOR),
                        ));
                    });
            }
        });
}

fn handle_buttons(
    buttons: Query<(&Interaction, &ControlButton), Changed<Interaction>>,
    mut controls: EventWriter<Control>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            controls.send(**button);
        }
    }
}

/// Enter starts or pauses, N clears the field, R fills it at random.
fn handle_kbd(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    state: Res<State<SimState>>,
    mut controls: EventWriter<Control>,
) {
    if keyboard_input.just_pressed(KeyCode::Enter) {
        controls.send(match state.get() {
            SimState::Running => Control::Pause,
            SimState::Stopped | SimState::Paused => Control::Start,
        });
    }
    if keyboard_input.just_pressed(KeyCode::KeyN) {
        controls.send(Control::New);
    }
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        controls.send(Control::Randomize);
    }
}

/// gray out the buttons the current state does not accept
fn paint_buttons(
    state: Res<State<SimState>>,
    mut buttons: Query<(&ControlButton, &Interaction, &mut BackgroundColor)>,
) {
    for (button, interaction, mut color) in buttons.iter_mut() {
        let wanted = match (state.get().allows(**button), interaction) {
            (false, _) => BUTTON_DISABLED_COLOR,
            (true, Interaction::Pressed) => BUTTON_PRESSED_COLOR,
            (true, Interaction::Hovered) => BUTTON_HOVERED_COLOR,
            (true, Interaction::None) => BUTTON_COLOR,
        };
        if color.0 != wanted {
            color.0 = wanted;
        }
    }
}
