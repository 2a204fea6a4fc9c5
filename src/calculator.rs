// calculator.rs

use std::path::Path;

use crate::calculation::Calculation;
use crate::config::Config;
use crate::error::CalcError;
use crate::history::{History, Memento};
use crate::operations::Op;

/// Callback fired for every newly recorded calculation, in registration
/// order, after the history row and any autosave have landed. Observers are
/// infallible; they cannot veto or abort a calculation.
pub trait Observer {
    fn on_calculation(&self, calc: &Calculation);
}

/// Reports every calculation through the tracing pipeline.
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn on_calculation(&self, calc: &Calculation) {
        tracing::info!(
            operation = %calc.operation,
            a = calc.a,
            b = calc.b,
            result = calc.result,
            "calculation recorded"
        );
    }
}

/// The single coordinating component. Owns the history table and the
/// undo/redo stacks; everything the line processor dispatches lands here.
///
/// Every mutating action (calculate, clear, load) pushes the pre-mutation
/// snapshot onto the undo stack and clears the redo stack.
pub struct Calculator {
    config: Config,
    history: History,
    observers: Vec<Box<dyn Observer>>,
    undo_stack: Vec<Memento>,
    redo_stack: Vec<Memento>,
}

impl Calculator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            history: History::new(),
            observers: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    fn notify(&self, calc: &Calculation) {
        for observer in &self.observers {
            observer.on_calculation(calc);
        }
    }

    /// Execute one operation. The snapshot goes onto the undo stack first;
    /// anything that fails afterwards propagates unchanged.
    pub fn calculate(&mut self, token: &str, a: f64, b: f64) -> Result<Calculation, CalcError> {
        self.undo_stack.push(self.history.snapshot());
        self.redo_stack.clear();

        let op = Op::from_token(token)?;
        let calc = Calculation::evaluate(a, b, op)?;
        self.history.add(calc.clone());

        if self.config.autosave {
            self.save()?;
        }
        self.notify(&calc);
        Ok(calc)
    }

    /// Roll history back one snapshot. `false` when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(memento) => {
                self.redo_stack.push(self.history.snapshot());
                self.history.restore(memento);
                true
            }
            None => false,
        }
    }

    /// Mirror of [`Calculator::undo`] over the redo stack.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(memento) => {
                self.undo_stack.push(self.history.snapshot());
                self.history.restore(memento);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) -> Result<(), CalcError> {
        self.undo_stack.push(self.history.snapshot());
        self.redo_stack.clear();
        self.history.clear();
        if self.config.autosave {
            self.save()?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<(), CalcError> {
        self.history.save(Path::new(&self.config.history_file))
    }

    /// Replace history from disk. Undoable like any other mutation.
    pub fn load(&mut self) -> Result<(), CalcError> {
        self.undo_stack.push(self.history.snapshot());
        self.redo_stack.clear();
        self.history.load(Path::new(&self.config.history_file))
    }

    pub fn format_history(&self) -> String {
        self.history.format()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
