use super::Val;
use crate::error;
use crate::lang::{Error, ErrorCode};
use num_complex::Complex64;

type Result<T> = std::result::Result<T, Error>;

pub const SLOTS: usize = 256;
const MAX_VECTOR_LEN: usize = u16::max_value() as usize;

/// ## Register and vector memory
///
/// 256 scalar registers and 256 vectors, each addressed by an 8-bit
/// slot number. A vector holds either real or complex elements, never
/// a mix of both.

#[derive(Debug)]
pub struct Var {
    regs: Vec<Option<Val>>,
    vecs: Vec<Option<Vector>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Real,
    Complex,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Real => write!(f, "real"),
            Kind::Complex => write!(f, "complex"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Vector {
    Real(Vec<f64>),
    Complex(Vec<Complex64>),
}

impl Vector {
    pub fn new(kind: Kind, len: usize) -> Vector {
        match kind {
            Kind::Real => Vector::Real(vec![0.0; len]),
            Kind::Complex => Vector::Complex(vec![Complex64::new(0.0, 0.0); len]),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Vector::Real(_) => Kind::Real,
            Vector::Complex(_) => Kind::Complex,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Vector::Real(v) => v.len(),
            Vector::Complex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(&self, index: Val) -> Result<usize> {
        match index {
            Val::Real(n) if n.fract() == 0.0 && n >= 0.0 && n < self.len() as f64 => {
                Ok(n as usize)
            }
            Val::Real(_) => Err(error!(VectorOutOfRange; "BAD ELEMENT INDEX")),
            Val::Complex(_) => Err(error!(TypeMismatch; "COMPLEX INDEX")),
        }
    }

    pub fn get(&self, index: Val) -> Result<Val> {
        let i = self.index(index)?;
        match self {
            Vector::Real(v) => Ok(Val::Real(v[i])),
            Vector::Complex(v) => Ok(Val::Complex(v[i])),
        }
    }

    /// Real values are promoted when stored into a complex vector.
    pub fn set(&mut self, index: Val, val: Val) -> Result<()> {
        let i = self.index(index)?;
        match (self, val) {
            (Vector::Real(v), Val::Real(n)) => v[i] = n,
            (Vector::Real(_), Val::Complex(_)) => return Err(error!(VectorKindMismatch)),
            (Vector::Complex(v), val) => v[i] = val.to_complex(),
        }
        Ok(())
    }
}

/// Convert a stack value to a slot number in 0..=255.
pub fn slot(val: Val, code: ErrorCode) -> Result<u8> {
    match val {
        Val::Real(n) if n.fract() == 0.0 && n >= 0.0 && n < SLOTS as f64 => Ok(n as u8),
        Val::Real(_) => Err(Error::new(code)),
        Val::Complex(_) => Err(error!(TypeMismatch; "COMPLEX SLOT NUMBER")),
    }
}

/// Convert a stack value to a vector length.
pub fn length(val: Val) -> Result<usize> {
    match val {
        Val::Real(n) if n.fract() == 0.0 && n >= 1.0 && n <= MAX_VECTOR_LEN as f64 => {
            Ok(n as usize)
        }
        Val::Real(_) => Err(error!(VectorOutOfRange; "BAD LENGTH")),
        Val::Complex(_) => Err(error!(TypeMismatch; "COMPLEX LENGTH")),
    }
}

impl Default for Var {
    fn default() -> Var {
        Var {
            regs: vec![None; SLOTS],
            vecs: vec![None; SLOTS],
        }
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, reg: u8) -> Result<Val> {
        match self.regs[reg as usize] {
            Some(val) => Ok(val),
            None => Err(error!(EmptyRegister)),
        }
    }

    pub fn store(&mut self, reg: u8, val: Val) {
        self.regs[reg as usize] = Some(val);
    }

    pub fn clear_register(&mut self, reg: u8) {
        self.regs[reg as usize] = None;
    }

    pub fn clear_registers(&mut self) {
        self.regs.iter_mut().for_each(|r| *r = None);
    }

    /// Registers holding a value, in slot order.
    pub fn registers(&self) -> impl Iterator<Item = (usize, &Val)> {
        self.regs
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().map(|v| (i, v)))
    }

    pub fn dimension(&mut self, vnum: u8, len: usize, kind: Kind) {
        self.vecs[vnum as usize] = Some(Vector::new(kind, len));
    }

    fn vector(&self, vnum: u8) -> Result<&Vector> {
        match &self.vecs[vnum as usize] {
            Some(v) => Ok(v),
            None => Err(error!(VectorOutOfRange; "UNDEFINED VECTOR")),
        }
    }

    pub fn fetch_element(&self, vnum: u8, index: Val) -> Result<Val> {
        self.vector(vnum)?.get(index)
    }

    pub fn store_element(&mut self, vnum: u8, index: Val, val: Val) -> Result<()> {
        match &mut self.vecs[vnum as usize] {
            Some(v) => v.set(index, val),
            None => Err(error!(VectorOutOfRange; "UNDEFINED VECTOR")),
        }
    }

    pub fn clear_vector(&mut self, vnum: u8) {
        self.vecs[vnum as usize] = None;
    }

    pub fn clear_vectors(&mut self) {
        self.vecs.iter_mut().for_each(|v| *v = None);
    }

    /// Vectors that have been created, in slot order.
    pub fn vectors(&self) -> impl Iterator<Item = (usize, &Vector)> {
        self.vecs
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (i, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers() {
        let mut var = Var::new();
        assert_eq!(var.fetch(7).unwrap_err().code(), ErrorCode::EmptyRegister);
        var.store(7, Val::complex(1.0, 2.0));
        assert_eq!(var.fetch(7).unwrap(), Val::complex(1.0, 2.0));
        assert_eq!(var.registers().count(), 1);
        var.clear_register(7);
        assert!(var.fetch(7).is_err());
        var.store(0, Val::Real(1.0));
        var.store(255, Val::Real(2.0));
        var.clear_registers();
        assert_eq!(var.registers().count(), 0);
    }

    #[test]
    fn test_slot() {
        let code = ErrorCode::RegisterOutOfRange;
        assert_eq!(slot(Val::Real(255.0), code).unwrap(), 255);
        assert_eq!(slot(Val::Real(256.0), code).unwrap_err().code(), code);
        assert_eq!(slot(Val::Real(-1.0), code).unwrap_err().code(), code);
        assert_eq!(slot(Val::Real(1.5), code).unwrap_err().code(), code);
        assert_eq!(
            slot(Val::complex(1.0, 0.0), code).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
    }

    #[test]
    fn test_real_vector() {
        let mut var = Var::new();
        var.dimension(3, 4, Kind::Real);
        assert_eq!(var.fetch_element(3, Val::Real(2.0)).unwrap(), Val::Real(0.0));
        var.store_element(3, Val::Real(2.0), Val::Real(9.5)).unwrap();
        assert_eq!(var.fetch_element(3, Val::Real(2.0)).unwrap(), Val::Real(9.5));
        let e = var
            .store_element(3, Val::Real(1.0), Val::complex(1.0, 1.0))
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::VectorKindMismatch);
        let e = var.fetch_element(3, Val::Real(4.0)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::VectorOutOfRange);
    }

    #[test]
    fn test_complex_vector_promotes() {
        let mut var = Var::new();
        var.dimension(0, 2, Kind::Complex);
        var.store_element(0, Val::Real(1.0), Val::Real(2.0)).unwrap();
        assert_eq!(
            var.fetch_element(0, Val::Real(1.0)).unwrap(),
            Val::complex(2.0, 0.0)
        );
        assert_eq!(var.vectors().next().map(|(i, v)| (i, v.kind())), Some((0, Kind::Complex)));
    }

    #[test]
    fn test_undefined_vector() {
        let mut var = Var::new();
        let e = var.fetch_element(9, Val::Real(0.0)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::VectorOutOfRange);
        var.dimension(9, 1, Kind::Real);
        var.clear_vectors();
        assert!(var.fetch_element(9, Val::Real(0.0)).is_err());
    }

    #[test]
    fn test_length() {
        assert_eq!(length(Val::Real(10.0)).unwrap(), 10);
        assert!(length(Val::Real(0.0)).is_err());
        assert!(length(Val::Real(2.5)).is_err());
    }
}
