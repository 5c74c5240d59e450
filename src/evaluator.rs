use crate::ast::Exp;
use crate::environment::Environment;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Walks expressions, threading an environment through every
/// sub-evaluation and sampling alternatives from its own random source.
///
/// Each evaluator owns its RNG, so two evaluators with the same seed and
/// the same inputs produce the same outputs, and separate interpreters
/// never perturb each other's streams.
pub struct Evaluator {
    rng: ChaCha8Rng,
    // Uniform distributions, cached per list length.
    distributions: HashMap<usize, Uniform<usize>>,
}

// The seed string is cycled into the 256-bit key, the way a stream
// cipher's key schedule repeats a short key. An empty seed gives the
// all-zero key, which is still a valid deterministic stream.
fn seed_key(seed: &str) -> [u8; 32] {
    let mut key = [0u8; 32];
    if !seed.is_empty() {
        for (slot, byte) in key.iter_mut().zip(seed.bytes().cycle()) {
            *slot = byte;
        }
    }
    key
}

impl Evaluator {
    /// An evaluator seeded from OS entropy.
    pub fn new() -> Self {
        Evaluator {
            rng: ChaCha8Rng::from_entropy(),
            distributions: HashMap::new(),
        }
    }

    /// A deterministic evaluator: identical seed and inputs give
    /// identical outputs.
    pub fn with_seed(seed: &str) -> Self {
        Evaluator {
            rng: ChaCha8Rng::from_seed(seed_key(seed)),
            distributions: HashMap::new(),
        }
    }

    // Uniform index into a list of `len` alternatives. `len` must be
    // nonzero; every caller checks first.
    fn choose(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let distribution = self
            .distributions
            .entry(len)
            .or_insert_with(|| Uniform::new(0, len));
        distribution.sample(&mut self.rng)
    }

    /// Evaluates `exp` in `env`, returning the successor environment and
    /// the optional string value.
    ///
    /// Evaluation never fails: undefined references and draws from absent
    /// names yield the empty string.
    pub fn eval(&mut self, exp: &Exp, env: Environment) -> (Environment, Option<String>) {
        match exp {
            Exp::Literal(text) => (env, Some(text.clone())),

            Exp::Mix(left, right) => {
                let (env, left_value) = self.eval(left, env);
                let (env, right_value) = self.eval(right, env);
                let mut joined = left_value.unwrap_or_default();
                joined.push_str(&right_value.unwrap_or_default());
                (env, Some(joined))
            }

            // Bind the alternatives verbatim; nothing is evaluated.
            Exp::Definition { name, items } => {
                let mut env = env;
                env.define(name.clone(), items.clone());
                (env, None)
            }

            // Freeze one alternative, unevaluated.
            Exp::Selection { name, items } => {
                let mut env = env;
                if !items.is_empty() {
                    let chosen = items[self.choose(items.len())].clone();
                    env.define(name.clone(), vec![chosen]);
                }
                (env, None)
            }

            // Evaluate every alternative now; absent values are skipped.
            Exp::EvaluatingDefinition { name, items } => {
                let mut env = env;
                let mut evaluated = Vec::with_capacity(items.len());
                for item in items {
                    let (next, value) = self.eval(item, env);
                    env = next;
                    if let Some(value) = value {
                        evaluated.push(Exp::Literal(value));
                    }
                }
                env.define(name.clone(), evaluated);
                (env, None)
            }

            // Evaluate one chosen alternative now and freeze the result.
            Exp::EvaluatingSelection { name, items } => {
                if items.is_empty() {
                    return (env, None);
                }
                let chosen = items[self.choose(items.len())].clone();
                let (mut env, value) = self.eval(&chosen, env);
                let evaluated = value.into_iter().map(Exp::Literal).collect();
                env.define(name.clone(), evaluated);
                (env, None)
            }

            Exp::Reference(inner) => {
                let (env, name) = self.eval(inner, env);
                let name = name.unwrap_or_default();
                let chosen = match env.get(&name) {
                    Some(items) if !items.is_empty() => {
                        Some(items[self.choose(items.len())].clone())
                    }
                    _ => None,
                };
                match chosen {
                    Some(exp) => self.eval(&exp, env),
                    None => (env, Some(String::new())),
                }
            }

            Exp::Draw(inner) => {
                let (mut env, name) = self.eval(inner, env);
                let name = name.unwrap_or_default();
                let chosen = match env.get(&name) {
                    Some(items) if !items.is_empty() => {
                        Some(items[self.choose(items.len())].clone())
                    }
                    _ => None,
                };
                match chosen {
                    Some(exp) => {
                        // Remove before evaluating, so the drawn item
                        // cannot re-select itself through a reference.
                        env.remove_equal(&name, &exp);
                        self.eval(&exp, env)
                    }
                    None => (env, Some(String::new())),
                }
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}
