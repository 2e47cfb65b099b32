//! # RC Section Checker GUI
//!
//! Single-window form for the Eurocode 2 bending check. The section, the
//! reinforcement layers and the material strengths are edited on the left;
//! the report appears on the right after Calculate is pressed.
//!
//! Editing any field discards the previous result so the report on screen
//! always matches the form.

mod form;
mod logging;
mod ui;

use iced::widget::{column, container, row, rule, Space};
use iced::{Element, Length};

use rc_core::materials::{ConcreteClass, ReinforcementGrade};
use rc_core::{calculate, CalcError, CapacityResult};

use form::{Field, SectionForm};

pub fn main() -> iced::Result {
    logging::init();
    tracing::info!("starting rc_gui");

    iced::application(App::new, App::update, App::view)
        .title("RC Section Checker")
        .window_size((1000.0, 720.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    ConcreteClassSelected(ConcreteClass),
    ReinforcementGradeSelected(ReinforcementGrade),
    Calculate,
    ResetDefaults,
}

/// Outcome of the last Calculate press
#[derive(Debug, Clone)]
pub enum Outcome {
    Computed(CapacityResult),
    Failed(CalcError),
}

pub struct App {
    pub form: SectionForm,
    pub concrete_class: Option<ConcreteClass>,
    pub reinforcement_grade: Option<ReinforcementGrade>,
    pub outcome: Option<Outcome>,
    pub status: String,
}

impl App {
    fn new() -> Self {
        let form = SectionForm::default();
        let defaults = rc_core::SectionInput::default();
        App {
            form,
            concrete_class: ConcreteClass::for_fck(defaults.fck_mpa),
            reinforcement_grade: Some(ReinforcementGrade::default()),
            outcome: None,
            status: "Ready".to_string(),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::FieldChanged(field, value) => {
                match field {
                    Field::Fck => {
                        self.concrete_class =
                            value.trim().parse().ok().and_then(ConcreteClass::for_fck);
                    }
                    Field::Fyk => {
                        let matches_grade = self.reinforcement_grade.is_some_and(|grade| {
                            value.trim().parse::<f64>().ok() == Some(grade.fyk().0)
                        });
                        if !matches_grade {
                            self.reinforcement_grade = None;
                        }
                    }
                    _ => {}
                }
                self.form.set(field, value);
                self.invalidate();
            }
            Message::ConcreteClassSelected(class) => {
                self.form.apply_concrete_class(class);
                self.concrete_class = Some(class);
                self.invalidate();
            }
            Message::ReinforcementGradeSelected(grade) => {
                self.form.apply_reinforcement_grade(grade);
                self.reinforcement_grade = Some(grade);
                self.invalidate();
            }
            Message::Calculate => self.run_calculation(),
            Message::ResetDefaults => {
                *self = App::new();
                self.status = "Defaults restored".to_string();
            }
        }
    }

    fn invalidate(&mut self) {
        if self.outcome.take().is_some() {
            self.status = "Inputs changed, press Calculate".to_string();
        }
    }

    fn run_calculation(&mut self) {
        let outcome = self
            .form
            .to_input()
            .and_then(|input| calculate(&input));

        match outcome {
            Ok(result) => {
                tracing::info!(
                    utilization = result.utilization,
                    verdict = %result.verdict,
                    "section checked"
                );
                self.status = format!("Conclusion: {}", result.verdict);
                self.outcome = Some(Outcome::Computed(result));
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), error = %e, "calculation failed");
                self.status = format!("Error: {}", e.error_code());
                self.outcome = Some(Outcome::Failed(e));
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::input_panel::view_input_panel(self, 0.45),
            Space::new().width(10),
            ui::results_panel::view_results_panel(self, 0.45),
        ]
        .height(Length::Fill);

        let content = column![
            ui::header::view_header("Reinforced Concrete Design (Eurocode 2)"),
            Space::new().height(8),
            panels,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.status),
        ];

        container(content).padding(10).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::Verdict;

    #[test]
    fn test_calculate_with_defaults_is_ok() {
        let mut app = App::new();
        app.update(Message::Calculate);
        match &app.outcome {
            Some(Outcome::Computed(result)) => assert_eq!(result.verdict, Verdict::Ok),
            other => panic!("expected a result, got {:?}", other),
        }
        assert_eq!(app.status, "Conclusion: OK");
    }

    #[test]
    fn test_editing_clears_stale_result() {
        let mut app = App::new();
        app.update(Message::Calculate);
        assert!(app.outcome.is_some());

        app.update(Message::FieldChanged(Field::Moment, "2000".to_string()));
        assert!(app.outcome.is_none());

        app.update(Message::Calculate);
        match &app.outcome {
            Some(Outcome::Computed(result)) => assert_eq!(result.verdict, Verdict::NotOk),
            other => panic!("expected a result, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_rebar_reports_error() {
        let mut app = App::new();
        app.update(Message::FieldChanged(Field::Layer1Count, "0".to_string()));
        app.update(Message::FieldChanged(Field::Layer2Count, "0".to_string()));
        app.update(Message::Calculate);
        match &app.outcome {
            Some(Outcome::Failed(e)) => assert_eq!(e.error_code(), "INVALID_GEOMETRY"),
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[test]
    fn test_material_pick_lists_fill_strengths() {
        let mut app = App::new();
        app.update(Message::ConcreteClassSelected(ConcreteClass::C25_30));
        assert_eq!(app.form.fck, "25.0");
        assert_eq!(app.concrete_class, Some(ConcreteClass::C25_30));

        app.update(Message::FieldChanged(Field::Fck, "31".to_string()));
        assert_eq!(app.concrete_class, None);

        app.update(Message::FieldChanged(Field::Fck, "40".to_string()));
        assert_eq!(app.concrete_class, Some(ConcreteClass::C40_50));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = App::new();
        app.update(Message::FieldChanged(Field::Width, "250".to_string()));
        app.update(Message::ResetDefaults);
        assert_eq!(app.form, SectionForm::default());
    }
}
