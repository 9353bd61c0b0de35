use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Literal(Literal),
    Word(Rc<str>),
    Colon,
    Semicolon,
    LBracket,
    RBracket,
}

impl Token {
    pub fn from_string(s: &str) -> Token {
        match s {
            ":" => Token::Colon,
            ";" => Token::Semicolon,
            "[" => Token::LBracket,
            "]" => Token::RBracket,
            _ => match Literal::from_string(s) {
                Some(lit) => Token::Literal(lit),
                None => Token::Word(s.into()),
            },
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            LBracket => write!(f, "["),
            RBracket => write!(f, "]"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal {
    Real(f64),
    Imaginary(f64),
    Complex(f64, f64),
}

impl Literal {
    /// Numbers start with a digit or a decimal point, optionally signed.
    /// A trailing `j` makes the literal imaginary.
    pub fn from_string(s: &str) -> Option<Literal> {
        match s.strip_suffix('j') {
            Some(imag) => parse_number(imag).map(Literal::Imaginary),
            None => parse_number(s).map(Literal::Real),
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(s);
    let lead = unsigned.chars().next()?;
    if !lead.is_ascii_digit() && lead != '.' {
        return None;
    }
    s.parse::<f64>().ok()
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Real(n) => write!(f, "{}", n),
            Imaginary(n) => write!(f, "{}j", n),
            Complex(re, im) => write!(f, "{} {}j", re, im),
        }
    }
}
