use calorie_core::{CalculatorState, CalorieForm, FieldId, format_total_calories};

use crate::{
    camera::CameraState,
    state::{AppState, ScreenState},
    ui::{
        calculator_screen::CalculatorViewModel,
        calorie_screen::{CalorieScreenViewModel, FieldViewModel},
        camera_screen::CameraViewModel,
        main_menu::MainMenuViewModel,
        modal::SettingsViewModel,
    },
    version,
};

#[derive(Debug)]
pub(crate) enum ScreenViewModel<'a> {
    MainMenu(MainMenuViewModel),
    CalorieCalculator(CalorieScreenViewModel),
    Calculator(CalculatorViewModel),
    Camera(CameraViewModel<'a>),
}

#[must_use]
pub(crate) fn build_screen_view_model(app_state: &AppState) -> ScreenViewModel<'_> {
    match app_state.navigation.current() {
        ScreenState::MainMenu => ScreenViewModel::MainMenu(build_main_menu_vm(app_state)),
        ScreenState::CalorieCalculator(form) => {
            ScreenViewModel::CalorieCalculator(build_calorie_screen_vm(form))
        }
        ScreenState::Calculator(calculator) => {
            ScreenViewModel::Calculator(build_calculator_vm(calculator))
        }
        ScreenState::Camera(camera) => ScreenViewModel::Camera(build_camera_vm(camera)),
    }
}

fn build_main_menu_vm(app_state: &AppState) -> MainMenuViewModel {
    MainMenuViewModel {
        greeting: format!("Hello {}!", app_state.settings().greeting_name),
        version: version::build_version(),
    }
}

fn build_calorie_screen_vm(form: &CalorieForm) -> CalorieScreenViewModel {
    let fields = FieldId::ALL
        .into_iter()
        .map(|id| {
            let field = form.field(id);
            FieldViewModel {
                id,
                value: field.value().to_owned(),
                error: field.error().map(|error| error.kind.to_string()),
            }
        })
        .collect();
    CalorieScreenViewModel {
        fields,
        total: form.result().map(format_total_calories),
    }
}

fn build_calculator_vm(calculator: &CalculatorState) -> CalculatorViewModel {
    CalculatorViewModel {
        display: calculator.display(),
        pending: calculator.pending(),
        is_error: calculator.error().is_some(),
    }
}

fn build_camera_vm(camera: &CameraState) -> CameraViewModel<'_> {
    match (&camera.photo, camera.permission.is_granted()) {
        (Some(photo), _) => CameraViewModel::Photo(photo),
        (None, true) => CameraViewModel::Preview,
        (None, false) => CameraViewModel::AwaitingPermission,
    }
}

#[must_use]
pub(crate) fn build_settings_view_model(app_state: &AppState) -> SettingsViewModel {
    SettingsViewModel {
        settings: app_state.settings().clone(),
    }
}

#[cfg(test)]
mod tests {
    use calorie_core::{CalculatorKey, FieldId, Operator};

    use super::{ScreenViewModel, build_screen_view_model, build_settings_view_model};
    use crate::{
        camera::CameraPermission,
        state::{AppState, Screen, Settings},
        ui::camera_screen::CameraViewModel,
    };

    #[test]
    fn main_menu_greets_configured_name() {
        let mut app_state = AppState::new(Settings::default());
        let ScreenViewModel::MainMenu(vm) = build_screen_view_model(&app_state) else {
            panic!("expected main menu");
        };
        assert_eq!(vm.greeting, "Hello Android!");
        assert!(vm.version.starts_with('v'));

        app_state.set_settings(Settings {
            greeting_name: "Ada".to_owned(),
            ..Settings::default()
        });
        let ScreenViewModel::MainMenu(vm) = build_screen_view_model(&app_state) else {
            panic!("expected main menu");
        };
        assert_eq!(vm.greeting, "Hello Ada!");
        assert_eq!(
            build_settings_view_model(&app_state).settings.greeting_name,
            "Ada"
        );
    }

    #[test]
    fn calorie_screen_shows_errors_and_total() {
        let mut app_state = AppState::new(Settings::default());
        app_state.navigation.push(Screen::CalorieCalculator);
        let form = app_state.navigation.calorie_form_mut().unwrap();
        form.edit(FieldId::CaloriesPer100g, "200");
        form.edit(FieldId::WeightInGrams, "150");
        form.calculate();
        form.edit(FieldId::WeightInGrams, "150a");

        let ScreenViewModel::CalorieCalculator(vm) = build_screen_view_model(&app_state) else {
            panic!("expected calorie screen");
        };
        assert_eq!(vm.fields.len(), 2);
        assert_eq!(vm.fields[0].id, FieldId::CaloriesPer100g);
        assert_eq!(vm.fields[0].error, None);
        assert_eq!(vm.fields[1].value, "150");
        assert_eq!(vm.fields[1].error.as_deref(), Some("Numbers only"));
        assert_eq!(vm.total.as_deref(), Some("300"));
    }

    #[test]
    fn calculator_error_is_flagged() {
        let mut app_state = AppState::new(Settings::default());
        app_state.navigation.push(Screen::Calculator);
        let calculator = app_state.navigation.calculator_mut().unwrap();
        for key in [
            CalculatorKey::Digit(1),
            CalculatorKey::Operator(Operator::Divide),
            CalculatorKey::Digit(0),
            CalculatorKey::Equals,
        ] {
            calculator.press(key);
        }

        let ScreenViewModel::Calculator(vm) = build_screen_view_model(&app_state) else {
            panic!("expected calculator");
        };
        assert_eq!(vm.display, "Division by zero");
        assert!(vm.is_error);
    }

    #[test]
    fn camera_view_follows_permission() {
        let mut app_state = AppState::new(Settings::default());
        app_state.navigation.push(Screen::Camera);
        assert!(matches!(
            build_screen_view_model(&app_state),
            ScreenViewModel::Camera(CameraViewModel::AwaitingPermission)
        ));

        app_state.navigation.camera_mut().unwrap().permission = CameraPermission::Granted;
        assert!(matches!(
            build_screen_view_model(&app_state),
            ScreenViewModel::Camera(CameraViewModel::Preview)
        ));
    }
}
