use crate::lang::Literal;
use num_complex::Complex64;

/// ## Stack value
///
/// Every slot of the stack, every register and every vector element
/// holds one of these.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Real(f64),
    Complex(Complex64),
}

impl Val {
    pub fn complex(re: f64, im: f64) -> Val {
        Val::Complex(Complex64::new(re, im))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Val::Real(_))
    }

    pub fn to_complex(self) -> Complex64 {
        match self {
            Val::Real(n) => Complex64::new(n, 0.0),
            Val::Complex(c) => c,
        }
    }

    /// Render with `digits` fractional digits; zero selects the shortest
    /// text that parses back to the same number. An imaginary part that
    /// prints as zero is left out.
    pub fn format(&self, digits: usize) -> String {
        match self {
            Val::Real(n) => component(*n, digits),
            Val::Complex(c) => {
                let im = component(c.im.abs(), digits);
                if im.chars().all(|ch| ch == '0' || ch == '.') {
                    return component(c.re, digits);
                }
                let sign = if c.im.is_sign_negative() { '-' } else { '+' };
                format!("{}{}{}j", component(c.re, digits), sign, im)
            }
        }
    }
}

fn component(n: f64, digits: usize) -> String {
    if digits == 0 {
        format!("{}", n)
    } else {
        format!("{:.*}", digits, n)
    }
}

impl From<Literal> for Val {
    fn from(lit: Literal) -> Val {
        match lit {
            Literal::Real(n) => Val::Real(n),
            Literal::Imaginary(im) => Val::complex(0.0, im),
            Literal::Complex(re, im) => Val::complex(re, im),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.format(0))
    }
}
