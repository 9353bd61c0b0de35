use super::Val;
use crate::error;
use crate::lang::Error;
use num_complex::Complex64;
use std::f64::consts::PI;

type Result<T> = std::result::Result<T, Error>;

/// ## Number model
///
/// Real operands stay real. A complex operand on either side promotes
/// the other one. Logical and relational operations are only defined
/// for real numbers.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Real(l), Real(r)) => Ok(Real(l + r)),
            (l, r) => Ok(Complex(l.to_complex() + r.to_complex())),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Real(l), Real(r)) => Ok(Real(l - r)),
            (l, r) => Ok(Complex(l.to_complex() - r.to_complex())),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Real(l), Real(r)) => Ok(Real(l * r)),
            (l, r) => Ok(Complex(l.to_complex() * r.to_complex())),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (_, Real(r)) if r == 0.0 => Err(error!(DivisionByZero)),
            (_, Complex(r)) if r.norm_sqr() == 0.0 => Err(error!(DivisionByZero)),
            (Real(l), Real(r)) => Ok(Real(l / r)),
            (l, r) => Ok(Complex(l.to_complex() / r.to_complex())),
        }
    }

    pub fn abs(val: Val) -> Result<Val> {
        match val {
            Val::Real(n) => Ok(Val::Real(n.abs())),
            Val::Complex(c) => Ok(Val::Real(c.norm())),
        }
    }

    pub fn floor(val: Val) -> Result<Val> {
        Ok(Operation::per_component(val, f64::floor))
    }

    pub fn ceil(val: Val) -> Result<Val> {
        Ok(Operation::per_component(val, f64::ceil))
    }

    pub fn round(val: Val) -> Result<Val> {
        Ok(Operation::per_component(val, f64::round))
    }

    fn per_component(val: Val, f: fn(f64) -> f64) -> Val {
        match val {
            Val::Real(n) => Val::Real(f(n)),
            Val::Complex(c) => Val::complex(f(c.re), f(c.im)),
        }
    }

    pub fn real(val: Val) -> Result<Val> {
        Ok(Val::Real(val.to_complex().re))
    }

    pub fn imag(val: Val) -> Result<Val> {
        Ok(Val::Real(val.to_complex().im))
    }

    pub fn r2c(val: Val) -> Result<Val> {
        Ok(Val::Complex(val.to_complex()))
    }

    pub fn c2r(val: Val) -> Result<(Val, Val)> {
        let c = val.to_complex();
        Ok((Val::Real(c.re), Val::Real(c.im)))
    }

    // *** Logical

    fn bits(val: Val) -> Result<u32> {
        match val {
            Val::Real(n) => Ok(n as u32),
            Val::Complex(_) => Err(error!(TypeMismatch; "COMPLEX OPERAND")),
        }
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (Operation::bits(lhs)?, Operation::bits(rhs)?);
        Ok(Val::Real((l & r) as f64))
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (Operation::bits(lhs)?, Operation::bits(rhs)?);
        Ok(Val::Real((l | r) as f64))
    }

    pub fn xor(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (Operation::bits(lhs)?, Operation::bits(rhs)?);
        Ok(Val::Real((l ^ r) as f64))
    }

    pub fn neg(val: Val) -> Result<Val> {
        Ok(Val::Real(!Operation::bits(val)? as f64))
    }

    pub fn shl(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (Operation::bits(lhs)?, Operation::bits(rhs)?);
        Ok(Val::Real(l.checked_shl(r).unwrap_or(0) as f64))
    }

    pub fn shr(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (Operation::bits(lhs)?, Operation::bits(rhs)?);
        Ok(Val::Real(l.checked_shr(r).unwrap_or(0) as f64))
    }

    // *** Relational

    fn reals(lhs: Val, rhs: Val) -> Result<(f64, f64)> {
        match (lhs, rhs) {
            (Val::Real(l), Val::Real(r)) => Ok((l, r)),
            _ => Err(error!(TypeMismatch; "COMPLEX OPERAND")),
        }
    }

    fn truth(b: bool) -> Val {
        if b {
            Val::Real(1.0)
        } else {
            Val::Real(0.0)
        }
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::reals(lhs, rhs)?;
        Ok(Operation::truth(l > r))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::reals(lhs, rhs)?;
        Ok(Operation::truth(l < r))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::reals(lhs, rhs)?;
        Ok(Operation::truth(l >= r))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::reals(lhs, rhs)?;
        Ok(Operation::truth(l <= r))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::reals(lhs, rhs)?;
        Ok(Operation::truth(l == r))
    }

    // *** Trigonometric

    fn function(val: Val, real: fn(f64) -> f64, complex: fn(Complex64) -> Complex64) -> Val {
        match val {
            Val::Real(n) => Val::Real(real(n)),
            Val::Complex(c) => Val::Complex(complex(c)),
        }
    }

    fn to_radians(val: Val) -> Val {
        match val {
            Val::Real(n) => Val::Real(n / 180.0 * PI),
            Val::Complex(c) => Val::Complex(c / 180.0 * PI),
        }
    }

    fn to_degrees(val: Val) -> Val {
        match val {
            Val::Real(n) => Val::Real(n * 180.0 / PI),
            Val::Complex(c) => Val::Complex(c * 180.0 / PI),
        }
    }

    pub fn sinr(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::sin, Complex64::sin))
    }

    pub fn cosr(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::cos, Complex64::cos))
    }

    pub fn tanr(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::tan, Complex64::tan))
    }

    pub fn asinr(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::asin, Complex64::asin))
    }

    pub fn acosr(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::acos, Complex64::acos))
    }

    pub fn atanr(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::atan, Complex64::atan))
    }

    pub fn sind(val: Val) -> Result<Val> {
        Operation::sinr(Operation::to_radians(val))
    }

    pub fn cosd(val: Val) -> Result<Val> {
        Operation::cosr(Operation::to_radians(val))
    }

    pub fn tand(val: Val) -> Result<Val> {
        Operation::tanr(Operation::to_radians(val))
    }

    pub fn asind(val: Val) -> Result<Val> {
        Ok(Operation::to_degrees(Operation::asinr(val)?))
    }

    pub fn acosd(val: Val) -> Result<Val> {
        Ok(Operation::to_degrees(Operation::acosr(val)?))
    }

    pub fn atand(val: Val) -> Result<Val> {
        Ok(Operation::to_degrees(Operation::atanr(val)?))
    }

    // *** Logarithm and exponential

    pub fn loge(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::ln, Complex64::ln))
    }

    pub fn expe(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::exp, Complex64::exp))
    }

    pub fn log10(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::log10, |c| c.log(10.0)))
    }

    pub fn exp10(val: Val) -> Result<Val> {
        Ok(Operation::function(val, |n| 10f64.powf(n), |c| c.expf(10.0)))
    }

    pub fn log2(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::log2, |c| c.log(2.0)))
    }

    pub fn exp2(val: Val) -> Result<Val> {
        Ok(Operation::function(val, f64::exp2, |c| c.expf(2.0)))
    }

    /// `B X logx` is the logarithm of B in base X.
    pub fn logx(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Real(b), Real(x)) => Ok(Real(b.ln() / x.ln())),
            (b, x) => Ok(Complex(b.to_complex().ln() / x.to_complex().ln())),
        }
    }

    /// `B X expx` is B raised to the power X.
    pub fn expx(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Real(b), Real(x)) => Ok(Real(b.powf(x))),
            (b, x) => Ok(Complex(b.to_complex().powc(x.to_complex()))),
        }
    }
}
