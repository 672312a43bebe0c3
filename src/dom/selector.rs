//! Minimal CSS selector support
//!
//! Supports what the page contract needs: type selectors, `#id`, `.class`,
//! `[attr]` presence tests, the universal selector `*`, and the descendant
//! combinator (whitespace). Anything else is a parse error.

use crate::errors::SelectorError;

/// One compound selector, e.g. `a.link[data-slide]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<String>,
}

/// A chain of compounds joined by descendant combinators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Outermost ancestor first, subject compound last
    pub compounds: Vec<Compound>,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let chars: Vec<char> = input.chars().collect();
        let mut compounds = Vec::new();
        let mut current: Option<Compound> = None;
        let mut i = 0;

        let ident = |start: usize| -> (String, usize) {
            let mut end = start;
            while end < chars.len() && is_ident_char(chars[end]) {
                end += 1;
            }
            (chars[start..end].iter().collect(), end)
        };

        while i < chars.len() {
            let c = chars[i];
            match c {
                c if c.is_whitespace() => {
                    if let Some(compound) = current.take() {
                        compounds.push(compound);
                    }
                    i += 1;
                }
                '*' => {
                    current.get_or_insert_with(Compound::default);
                    i += 1;
                }
                '#' | '.' => {
                    let (name, end) = ident(i + 1);
                    if name.is_empty() {
                        return Err(SelectorError::UnexpectedChar {
                            selector: input.to_string(),
                            found: c,
                            offset: i,
                        });
                    }
                    let compound = current.get_or_insert_with(Compound::default);
                    if c == '#' {
                        compound.id = Some(name);
                    } else {
                        compound.classes.push(name);
                    }
                    i = end;
                }
                '[' => {
                    let close = chars[i..]
                        .iter()
                        .position(|&ch| ch == ']')
                        .map(|p| i + p)
                        .ok_or_else(|| SelectorError::UnterminatedAttribute(input.to_string()))?;
                    let name: String = chars[i + 1..close].iter().collect();
                    let name = name.trim();
                    if name.is_empty() || !name.chars().all(is_ident_char) {
                        return Err(SelectorError::UnexpectedChar {
                            selector: input.to_string(),
                            found: '[',
                            offset: i,
                        });
                    }
                    current
                        .get_or_insert_with(Compound::default)
                        .attrs
                        .push(name.to_string());
                    i = close + 1;
                }
                c if is_ident_char(c) => {
                    let (name, end) = ident(i);
                    let compound = current.get_or_insert_with(Compound::default);
                    if *compound != Compound::default() {
                        // A type selector must lead its compound
                        return Err(SelectorError::UnexpectedChar {
                            selector: input.to_string(),
                            found: c,
                            offset: i,
                        });
                    }
                    compound.tag = Some(name.to_ascii_lowercase());
                    i = end;
                }
                other => {
                    return Err(SelectorError::UnexpectedChar {
                        selector: input.to_string(),
                        found: other,
                        offset: i,
                    });
                }
            }
        }

        if let Some(compound) = current.take() {
            compounds.push(compound);
        }
        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Selector { compounds })
    }

    /// The compound the matched element itself must satisfy
    pub fn subject(&self) -> &Compound {
        // parse() never yields an empty chain
        &self.compounds[self.compounds.len() - 1]
    }

    /// Ancestor compounds, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = &Compound> {
        self.compounds[..self.compounds.len() - 1].iter().rev()
    }
}
