use tracing::{debug, warn};

use crate::calculator::Normalization;
use crate::error::CalcError;
use crate::state::{reduce, State, Trace};
use crate::token::Token;

/// Where the calculator's two lines of text end up.
pub trait DisplaySurface {
    fn input_text(&self) -> String;
    fn set_input_text(&mut self, text: &str);
    fn trace_text(&self) -> String;
    fn set_trace_text(&mut self, text: &str);

    fn show_error(&mut self, _error: &CalcError) {}
    fn clear_error(&mut self) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryDisplay {
    pub input: String,
    pub trace: String,
    pub error: Option<String>,
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self {
            input: String::new(),
            trace: Trace::BLANK_TEXT.to_string(),
            error: None,
        }
    }
}

impl DisplaySurface for MemoryDisplay {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn trace_text(&self) -> String {
        self.trace.clone()
    }

    fn set_trace_text(&mut self, text: &str) {
        self.trace = text.to_string();
    }

    fn show_error(&mut self, error: &CalcError) {
        self.error = Some(error.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Feeds button presses through [`reduce`] and mirrors the result onto a
/// display surface.
pub struct Controller<D> {
    state: State,
    normalization: Normalization,
    display: D,
}

impl<D: DisplaySurface> Controller<D> {
    pub fn new(display: D, normalization: Normalization) -> Self {
        let mut controller = Self {
            state: State::new(),
            normalization,
            display,
        };
        controller.render();
        controller
    }

    /// A failed evaluation leaves the state unchanged and is shown on the
    /// display instead of producing a number.
    pub fn press(&mut self, token: Token) -> Result<(), CalcError> {
        match reduce(&self.state, token, self.normalization) {
            Ok(next) => {
                debug!(
                    button = %token,
                    from = ?self.state.phase(),
                    to = ?next.phase(),
                    "button pressed"
                );
                self.state = next;
                self.display.clear_error();
                self.render();
                Ok(())
            }
            Err(e) => {
                warn!(button = %token, error = %e, "evaluation failed");
                self.display.show_error(&e);
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = State::new();
        self.display.clear_error();
        self.render();
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn render(&mut self) {
        self.display.set_input_text(&self.state.input);
        self.display.set_trace_text(&self.state.trace.render());
    }
}
