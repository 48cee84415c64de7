use super::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Defector;

impl Strategy for Defector {
    fn choose(&mut self, _: &[Action], _: &[Action]) -> Action {
        Action::Defect
    }
    fn label(&self) -> &'static str {
        "D"
    }
    fn description(&self) -> &'static str {
        "Always defects."
    }
}
