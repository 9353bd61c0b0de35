mod common;
use common::*;
use rpn::mach::{Runtime, Val};

#[test]
fn test_real_vector() {
    let mut r = Runtime::default();
    r.enter("10 3 vreal 2.5 4 3 vsave 4 3 vload p");
    assert_eq!(exec(&mut r), "2.5\n");
    r.enter("clear 0 3 vload p");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_complex_vector() {
    let mut r = Runtime::default();
    r.enter("2 0 vcplx 3 4j 1 0 vsave 1 0 vload ds");
    assert_eq!(exec(&mut r), "Stack: [3+4j]\n");
    r.enter("clear 7 0 0 vsave 0 0 vload 1j + p");
    assert_eq!(exec(&mut r), "7+1j\n");
}

#[test]
fn test_kind_mismatch() {
    let mut r = Runtime::default();
    r.enter("1 0 vreal 1j 0 0 vsave");
    assert_eq!(exec(&mut r), "?VECTOR KIND MISMATCH IN vsave\n");
    r.enter("ds");
    assert_eq!(exec(&mut r), "Stack: [0+1j, 0, 0]\n");
}

#[test]
fn test_out_of_range() {
    let mut r = Runtime::default();
    r.enter("3 1 vreal 0 3 1 vsave");
    assert_eq!(
        exec(&mut r),
        "?VECTOR OUT OF RANGE IN vsave; BAD ELEMENT INDEX\n"
    );
    r.enter("clear 0 9 vload");
    assert_eq!(
        exec(&mut r),
        "?VECTOR OUT OF RANGE IN vload; UNDEFINED VECTOR\n"
    );
    r.enter("clear 5 256 vreal");
    assert_eq!(exec(&mut r), "?VECTOR OUT OF RANGE IN vreal\n");
    r.enter("clear 0 1 vreal");
    assert_eq!(exec(&mut r), "?VECTOR OUT OF RANGE IN vreal; BAD LENGTH\n");
}

#[test]
fn test_dump_and_clear() {
    let mut r = Runtime::default();
    r.enter("dv");
    assert_eq!(
        exec(&mut r),
        "No vectors defined. Use LEN VNUM vreal or LEN VNUM vcplx to create one.\n"
    );
    r.enter("10 3 vreal 4 200 vcplx dv");
    assert_eq!(
        exec(&mut r),
        "Vec   3  len: 10  real\nVec 200  len: 4  complex\n"
    );
    r.enter("3 cvec dumpvec");
    assert_eq!(exec(&mut r), "Vec 200  len: 4  complex\n");
    r.enter("200 vreg 5 1 vreal clvecs dv");
    assert_eq!(
        exec(&mut r),
        "No vectors defined. Use LEN VNUM vreal or LEN VNUM vcplx to create one.\n"
    );
    assert!(r.stack().is_empty());
}

#[test]
fn test_redimension_clears() {
    let mut r = Runtime::default();
    r.enter("4 2 vreal 9 1 2 vsave 4 2 vcplx 1 2 vload p");
    assert_eq!(exec(&mut r), "0\n");
    assert_eq!(r.stack(), vec![Val::complex(0.0, 0.0)]);
}
