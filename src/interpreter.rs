use crate::environment::Environment;
use crate::evaluator::Evaluator;
use crate::lexer::tokenize;
use crate::parser::{ParseError, Parser};
use std::fs;
use std::path::Path;

/// The interpreter facade: owns the persistent environment and the
/// evaluator, and runs the lex → parse → evaluate pipeline for each call.
///
/// Not safe for concurrent use; callers wanting parallelism hold one
/// interpreter (and thus one RNG stream and one history) per thread.
pub struct Interpreter {
    env: Environment,
    evaluator: Evaluator,
}

impl Interpreter {
    /// An interpreter whose random source is seeded from OS entropy.
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            evaluator: Evaluator::new(),
        }
    }

    /// A deterministic interpreter seeded with an arbitrary string.
    pub fn with_seed(seed: &str) -> Self {
        Interpreter {
            env: Environment::new(),
            evaluator: Evaluator::with_seed(seed),
        }
    }

    /// Evaluates one complete text: lexes, parses, then folds the
    /// evaluator over the expressions, threading the persistent
    /// environment.
    ///
    /// The environment is only touched after the whole text has parsed,
    /// so a fatal lex or parse error leaves it exactly as it was. Only
    /// nonempty values are collected; `None` means the text emitted
    /// nothing.
    pub fn eval(&mut self, text: &str) -> Result<Option<Vec<String>>, ParseError> {
        let tokens = tokenize(text)?;
        let expressions = Parser::new(tokens).parse()?;

        let mut env = std::mem::take(&mut self.env);
        let mut values = Vec::new();
        for expression in &expressions {
            let (next, value) = self.evaluator.eval(expression, env);
            env = next;
            match value {
                Some(value) if !value.is_empty() => values.push(value),
                _ => {}
            }
        }
        self.env = env;

        Ok(if values.is_empty() {
            None
        } else {
            Some(values)
        })
    }

    /// Reads `path` as UTF-8 and evaluates its contents. A read failure
    /// yields `Ok(None)`; it is not an error.
    pub fn eval_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Option<Vec<String>>, ParseError> {
        match fs::read_to_string(path) {
            Ok(text) => self.eval(&text),
            Err(_) => Ok(None),
        }
    }

    /// A snapshot of the currently bound names.
    pub fn names(&self) -> Vec<String> {
        self.env.names()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
