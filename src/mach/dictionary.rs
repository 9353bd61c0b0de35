use super::Opcode;
use crate::lang::Token;
use std::collections::HashMap;
use std::rc::Rc;

/// Result of looking up a word.
#[derive(Debug, Clone, PartialEq)]
pub enum Word {
    Subroutine(Rc<[Token]>),
    Primitive(Opcode),
    Unknown,
}

/// ## Word lookup
///
/// User subroutines are consulted before primitives so a definition can
/// shadow a built-in word. Redefining a subroutine replaces its body.

#[derive(Debug, Default)]
pub struct Dictionary {
    subroutines: HashMap<Rc<str>, Rc<[Token]>>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    pub fn define(&mut self, name: Rc<str>, body: Rc<[Token]>) -> Option<Rc<[Token]>> {
        self.subroutines.insert(name, body)
    }

    pub fn lookup(&self, word: &str) -> Word {
        if let Some(body) = self.subroutines.get(word) {
            return Word::Subroutine(body.clone());
        }
        match Opcode::from_word(word) {
            Some(op) => Word::Primitive(op),
            None => Word::Unknown,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subroutines.is_empty()
    }

    /// Subroutine names followed by primitive spellings, for completion.
    pub fn words(&self) -> Vec<String> {
        let mut names: Vec<String> = self.subroutines.keys().map(|k| k.to_string()).collect();
        names.sort();
        names.extend(Opcode::ALL.iter().map(|op| op.to_string()));
        names
    }

    /// Every subroutine as it would be typed, sorted by name.
    pub fn listing(&self) -> Vec<String> {
        let mut names: Vec<&Rc<str>> = self.subroutines.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| {
                let body: Vec<String> = self.subroutines[name]
                    .iter()
                    .map(|t| t.to_string())
                    .collect();
                if body.is_empty() {
                    format!(": {} ;", name)
                } else {
                    format!(": {} {} ;", name, body.join(" "))
                }
            })
            .collect()
    }
}
