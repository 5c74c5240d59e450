use std::fmt;

/// An Invocat expression.
///
/// This enum is the core data structure produced by the parser and walked by
/// the evaluator. The four binding forms carry a name and a list of
/// alternatives; `Reference` and `Draw` carry a full expression that is
/// evaluated to a string before the environment lookup, so names can be
/// computed from nested references.
#[derive(Debug, Clone)]
pub enum Exp {
    /// `name :: a | b` — bind the alternatives verbatim.
    Definition { name: String, items: Vec<Exp> },
    /// `name <- a | b` — bind one alternative chosen now, unevaluated.
    Selection { name: String, items: Vec<Exp> },
    /// `name :! a | b` — evaluate every alternative now and bind the results.
    EvaluatingDefinition { name: String, items: Vec<Exp> },
    /// `name <! a | b` — evaluate one chosen alternative now and bind it.
    EvaluatingSelection { name: String, items: Vec<Exp> },
    /// `(exp)` — nondestructive sampling from a name's alternatives.
    Reference(Box<Exp>),
    /// `{exp}` — destructive sampling; the chosen alternative is removed.
    Draw(Box<Exp>),
    Literal(String),
    /// Juxtaposition; evaluates to the concatenation of both sides.
    Mix(Box<Exp>, Box<Exp>),
}

impl Exp {
    pub fn reference(inner: Exp) -> Self {
        Exp::Reference(Box::new(inner))
    }

    pub fn draw(inner: Exp) -> Self {
        Exp::Draw(Box::new(inner))
    }

    pub fn mix(left: Exp, right: Exp) -> Self {
        Exp::Mix(Box::new(left), Box::new(right))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Exp::Literal(text.into())
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Exp]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " | ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Canonical surface-text rendering. Parsing the rendered text again yields
/// an equal expression (modulo the lexer's whitespace normalization).
impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Definition { name, items } => {
                write!(f, "{} :: ", name)?;
                write_items(f, items)
            }
            Exp::Selection { name, items } => {
                write!(f, "{} <- ", name)?;
                write_items(f, items)
            }
            Exp::EvaluatingDefinition { name, items } => {
                write!(f, "{} :! ", name)?;
                write_items(f, items)
            }
            Exp::EvaluatingSelection { name, items } => {
                write!(f, "{} <! ", name)?;
                write_items(f, items)
            }
            Exp::Reference(inner) => write!(f, "({})", inner),
            Exp::Draw(inner) => write!(f, "{{{}}}", inner),
            Exp::Literal(text) => {
                for c in text.chars() {
                    match c {
                        '(' | ')' | '{' | '}' | '|' | '\\' => write!(f, "\\{}", c)?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                Ok(())
            }
            Exp::Mix(left, right) => write!(f, "{}{}", left, right),
        }
    }
}

// Expressions compare by structural form, i.e. by their canonical printing.
// This is the equality the draw operation filters the environment list by.
impl PartialEq for Exp {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Exp {}
