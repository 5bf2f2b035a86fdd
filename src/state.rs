use bevy::prelude::*;

#[derive(States, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// What the user asks the simulation to do, sent by the buttons and the keyboard.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Pause,
    /// clear the field and stop
    New,
    /// fill the field at random
    Randomize,
}

impl SimState {
    /// Returns the state `control` leads to, or `None` if it is not available right now.
    pub fn apply(self, control: Control) -> Option<SimState> {
        match (self, control) {
            (Self::Stopped | Self::Paused, Control::Start) => Some(Self::Running),
            (Self::Running, Control::Pause) => Some(Self::Paused),
            (Self::Stopped | Self::Paused, Control::New) => Some(Self::Stopped),
            (Self::Stopped | Self::Paused, Control::Randomize) => Some(self),
            _ => None,
        }
    }

    #[inline]
    pub fn allows(self, control: Control) -> bool {
        self.apply(control).is_some()
    }
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Pause => "Pause",
            Self::New => "New",
            Self::Randomize => "Random",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transitions() {
        use Control::*;
        use SimState::*;

        assert_eq!(Some(Running), Stopped.apply(Start));
        assert_eq!(Some(Paused), Running.apply(Pause));
        assert_eq!(Some(Running), Paused.apply(Start));
        assert_eq!(Some(Stopped), Paused.apply(New));
        assert_eq!(Some(Stopped), Stopped.apply(New));
        assert_eq!(Some(Paused), Paused.apply(Randomize));

        assert_eq!(None, Running.apply(Start));
        assert_eq!(None, Running.apply(New));
        assert_eq!(None, Running.apply(Randomize));
        assert_eq!(None, Stopped.apply(Pause));
        assert_eq!(None, Paused.apply(Pause));
    }

    #[test]
    fn buttons_enabled() {
        // start | pause | new, as the buttons show them
        let enabled = |state: SimState| {
            [Control::Start, Control::Pause, Control::New].map(|c| state.allows(c))
        };
        assert_eq!([true, false, true], enabled(SimState::Stopped));
        assert_eq!([false, true, false], enabled(SimState::Running));
        assert_eq!([true, false, true], enabled(SimState::Paused));
    }
}
