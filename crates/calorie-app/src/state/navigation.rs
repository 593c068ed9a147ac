use calorie_core::{CalculatorState, CalorieForm};

use crate::camera::CameraState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub(crate) enum Screen {
    #[display("main menu")]
    MainMenu,
    #[display("calorie calculator")]
    CalorieCalculator,
    #[display("calculator")]
    Calculator,
    #[display("camera")]
    Camera,
}

/// A screen together with the state it owns while it is on the stack.
#[derive(Debug)]
pub(crate) enum ScreenState {
    MainMenu,
    CalorieCalculator(CalorieForm),
    Calculator(CalculatorState),
    Camera(CameraState),
}

impl ScreenState {
    #[must_use]
    pub(crate) fn new(screen: Screen) -> Self {
        match screen {
            Screen::MainMenu => Self::MainMenu,
            Screen::CalorieCalculator => Self::CalorieCalculator(CalorieForm::new()),
            Screen::Calculator => Self::Calculator(CalculatorState::new()),
            Screen::Camera => Self::Camera(CameraState::new()),
        }
    }

    #[must_use]
    pub(crate) fn screen(&self) -> Screen {
        match self {
            Self::MainMenu => Screen::MainMenu,
            Self::CalorieCalculator(_) => Screen::CalorieCalculator,
            Self::Calculator(_) => Screen::Calculator,
            Self::Camera(_) => Screen::Camera,
        }
    }
}

/// Back stack of screens. The main menu is always at the bottom.
#[derive(Debug)]
pub(crate) struct Navigation {
    stack: Vec<ScreenState>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stack: vec![ScreenState::MainMenu],
        }
    }

    #[must_use]
    pub(crate) fn current(&self) -> &ScreenState {
        // The root entry is never popped.
        &self.stack[self.stack.len() - 1]
    }

    fn current_mut(&mut self) -> &mut ScreenState {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes a fresh state for `screen`. Returns `false` if it is already shown.
    pub(crate) fn push(&mut self, screen: Screen) -> bool {
        if self.current().screen() == screen {
            return false;
        }
        self.stack.push(ScreenState::new(screen));
        true
    }

    /// Removes the top screen and hands back its state. The root stays.
    pub(crate) fn pop(&mut self) -> Option<ScreenState> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub(crate) fn calorie_form_mut(&mut self) -> Option<&mut CalorieForm> {
        match self.current_mut() {
            ScreenState::CalorieCalculator(form) => Some(form),
            _ => None,
        }
    }

    pub(crate) fn calculator_mut(&mut self) -> Option<&mut CalculatorState> {
        match self.current_mut() {
            ScreenState::Calculator(calculator) => Some(calculator),
            _ => None,
        }
    }

    pub(crate) fn camera_mut(&mut self) -> Option<&mut CameraState> {
        match self.current_mut() {
            ScreenState::Camera(camera) => Some(camera),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigation, Screen, ScreenState};

    #[test]
    fn root_is_main_menu_and_never_popped() {
        let mut navigation = Navigation::new();
        assert_eq!(navigation.current().screen(), Screen::MainMenu);
        assert!(navigation.pop().is_none());
        assert_eq!(navigation.depth(), 1);
    }

    #[test]
    fn push_then_pop_returns_screen_state() {
        let mut navigation = Navigation::new();
        assert!(navigation.push(Screen::Calculator));
        assert!(navigation.calculator_mut().is_some());
        assert!(navigation.calorie_form_mut().is_none());

        let popped = navigation.pop();
        assert!(matches!(popped, Some(ScreenState::Calculator(_))));
        assert_eq!(navigation.current().screen(), Screen::MainMenu);
    }

    #[test]
    fn pushing_current_screen_is_ignored() {
        let mut navigation = Navigation::new();
        assert!(navigation.push(Screen::CalorieCalculator));
        assert!(!navigation.push(Screen::CalorieCalculator));
        assert_eq!(navigation.depth(), 2);
    }

    #[test]
    fn reopening_screen_starts_fresh() {
        let mut navigation = Navigation::new();
        navigation.push(Screen::CalorieCalculator);
        navigation
            .calorie_form_mut()
            .unwrap()
            .edit(calorie_core::FieldId::WeightInGrams, "150");
        navigation.pop();

        navigation.push(Screen::CalorieCalculator);
        let form = navigation.calorie_form_mut().unwrap();
        assert_eq!(form.field(calorie_core::FieldId::WeightInGrams).value(), "");
    }
}
