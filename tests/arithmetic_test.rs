mod common;
use common::*;
use rpn::mach::{Runtime, Val};

#[test]
fn test_postfix_order() {
    let mut r = Runtime::default();
    r.enter("10 6 4 - / p");
    assert_eq!(exec(&mut r), "5\n");
    assert_eq!(r.stack(), vec![Val::Real(5.0)]);
}

#[test]
fn test_aliases() {
    let mut r = Runtime::default();
    r.enter("2 3 add 4 mul 2 div 1 sub p");
    assert_eq!(exec(&mut r), "9\n");
}

#[test]
fn test_division_by_zero() {
    let mut r = Runtime::default();
    r.enter("1 0 / 5");
    assert_eq!(exec(&mut r), "?DIVISION BY ZERO IN /\n");
    assert_eq!(r.stack(), vec![Val::Real(1.0), Val::Real(0.0)]);
}

#[test]
fn test_relational() {
    let mut r = Runtime::default();
    r.enter("5 4 > p 4 5 > p");
    assert_eq!(exec(&mut r), "1\n0\n");
    r.enter("clear 4 4 >= p 4 4 <= p 3 4 < p 2 2 = p 2 3 = p");
    assert_eq!(exec(&mut r), "1\n1\n1\n1\n0\n");
}

#[test]
fn test_rounding() {
    let mut r = Runtime::default();
    r.enter("2.5 round p -2.5 floor p 2.1 ceil p -3.5 abs p");
    assert_eq!(exec(&mut r), "3\n-3\n3\n3.5\n");
}

#[test]
fn test_logical() {
    let mut r = Runtime::default();
    r.enter("12 10 and p 12 10 or p 12 10 xor p");
    assert_eq!(exec(&mut r), "8\n14\n6\n");
    r.enter("1 4 shl p 16 2 shr p 1 40 shl p");
    assert_eq!(exec(&mut r), "16\n4\n0\n");
    r.enter("0 neg p");
    assert_eq!(exec(&mut r), "4294967295\n");
}

#[test]
fn test_trigonometric() {
    let mut r = Runtime::default();
    r.enter("90 sind p 0 cosr p 0 atanr p");
    assert_eq!(exec(&mut r), "1\n1\n0\n");
    r.enter("4 frdigit 1 atand p 1 asinr p");
    assert_eq!(exec(&mut r), "45.0000\n1.5708\n");
}

#[test]
fn test_logarithms() {
    let mut r = Runtime::default();
    r.enter("100 log10 p 8 log2 p 3 exp2 p 2 exp10 p 0 expe p 1 loge p");
    assert_eq!(exec(&mut r), "2\n3\n8\n100\n1\n0\n");
    r.enter("2 10 expx p");
    assert_eq!(exec(&mut r), "1024\n");
    r.enter("6 frdigit 8 2 logx p");
    assert_eq!(exec(&mut r), "3.000000\n");
}
