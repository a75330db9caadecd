//! Seed material and its flattening into mixable text

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many levels of nested lists are walked when flattening
pub const FLATTEN_DEPTH: u32 = 3;

/// Seed material for a [`SeedRandom`](super::SeedRandom)
///
/// Usually plain text, but structured values are accepted and flattened
/// into a single string before mixing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Seed>),
}

impl Seed {
    /// Flatten into the string that is mixed into the key.
    ///
    /// Text is used as-is. Non-empty lists flatten their items one level
    /// deeper and join them with commas while `depth` remains. Everything
    /// else is rendered as text with a trailing NUL.
    pub fn flatten(&self, depth: u32) -> String {
        match self {
            Seed::List(items) if depth > 0 && !items.is_empty() => items
                .iter()
                .map(|item| item.flatten(depth - 1))
                .collect::<Vec<_>>()
                .join(","),
            Seed::Text(text) => text.clone(),
            other => {
                let mut rendered = other.render();
                rendered.push('\0');
                rendered
            }
        }
    }

    fn render(&self) -> String {
        match self {
            Seed::Null => "null".to_string(),
            Seed::Bool(b) => b.to_string(),
            Seed::Number(n) => render_number(*n),
            Seed::Text(text) => text.clone(),
            Seed::List(items) => items
                .iter()
                .map(|item| match item {
                    // nulls inside a list render empty
                    Seed::Null => String::new(),
                    other => other.render(),
                })
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Shortest round-trip text. Integral values print without a fractional
/// part, and magnitudes below 1e-6 or from 1e21 up use exponent form with
/// a signed exponent (`1e-7`, `1e+21`).
fn render_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() < 1e-6 || n.abs() >= 1e21 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

impl From<f64> for Seed {
    fn from(n: f64) -> Self {
        Seed::Number(n)
    }
}

impl From<bool> for Seed {
    fn from(b: bool) -> Self {
        Seed::Bool(b)
    }
}

impl From<Vec<Seed>> for Seed {
    fn from(items: Vec<Seed>) -> Self {
        Seed::List(items)
    }
}

impl<T: Into<Seed>> From<Option<T>> for Seed {
    fn from(value: Option<T>) -> Self {
        value.map_or(Seed::Null, Into::into)
    }
}
