//! Run/pause gate for the tick loop.

/// Whether the frame driver should tick the grid this frame.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SimulationState {
    #[default]
    Running,
    Paused,
}

impl SimulationState {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }
}

/// Holds the run/pause state and the key latch used for edge-triggered toggling.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    state: SimulationState,
    key_held: bool,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SimulationState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn toggle(&mut self) -> SimulationState {
        self.state = self.state.flipped();
        log::debug!("simulation {:?}", self.state);
        self.state
    }

    /// Feed the current level of the toggle key, once per frame.
    ///
    /// Only a released → pressed transition toggles; holding the key does not.
    /// Returns true if this call toggled.
    pub fn key_input(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.key_held;
        self.key_held = pressed;
        if rising {
            self.toggle();
        }
        rising
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_running() {
        let controller = Controller::new();
        assert_eq!(controller.state(), SimulationState::Running);
        assert!(controller.is_running());
    }

    #[test]
    fn toggle_flips_state() {
        let mut controller = Controller::new();
        assert_eq!(controller.toggle(), SimulationState::Paused);
        assert!(!controller.is_running());
        assert_eq!(controller.toggle(), SimulationState::Running);
    }

    #[test]
    fn held_key_toggles_once() {
        let mut controller = Controller::new();
        assert!(controller.key_input(true));
        assert!(!controller.key_input(true));
        assert!(!controller.key_input(true));
        assert_eq!(controller.state(), SimulationState::Paused);

        assert!(!controller.key_input(false));
        assert!(controller.key_input(true));
        assert_eq!(controller.state(), SimulationState::Running);
    }

    proptest! {
        #[test]
        fn prop_even_toggles_restore_state(n in 0usize..64) {
            let mut controller = Controller::new();
            for _ in 0..2 * n {
                controller.toggle();
            }
            prop_assert_eq!(controller.state(), SimulationState::Running);
        }
    }

    proptest! {
        #[test]
        fn prop_toggles_equal_rising_edges(levels in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut controller = Controller::new();
            let mut previous = false;
            let mut rising = 0usize;
            for &pressed in &levels {
                if pressed && !previous {
                    rising += 1;
                }
                previous = pressed;
                controller.key_input(pressed);
            }
            let expected = if rising % 2 == 0 {
                SimulationState::Running
            } else {
                SimulationState::Paused
            };
            prop_assert_eq!(controller.state(), expected);
        }
    }
}
