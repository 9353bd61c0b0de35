mod common;
use common::*;
use rpn::mach::{Runtime, Val};

#[test]
fn test_save_and_load() {
    let mut r = Runtime::default();
    r.enter("42 7 save 7 load p");
    assert_eq!(exec(&mut r), "42\n");
    assert_eq!(r.stack(), vec![Val::Real(42.0)]);
    r.enter("clear 3 4j 255 save 255 load ds");
    assert_eq!(exec(&mut r), "Stack: [3+4j]\n");
}

#[test]
fn test_register_numbers() {
    let mut r = Runtime::default();
    r.enter("256 load");
    assert_eq!(exec(&mut r), "?REGISTER OUT OF RANGE IN load\n");
    assert_eq!(r.stack(), vec![Val::Real(256.0)]);
    r.enter("clear 1 1.5 save");
    assert_eq!(exec(&mut r), "?REGISTER OUT OF RANGE IN save\n");
    assert_eq!(r.stack(), vec![Val::Real(1.0), Val::Real(1.5)]);
    r.enter("clear 1j 1 swap save");
    assert_eq!(exec(&mut r), "?TYPE MISMATCH IN save; COMPLEX SLOT NUMBER\n");
}

#[test]
fn test_empty_register() {
    let mut r = Runtime::default();
    r.enter("5 load");
    assert_eq!(exec(&mut r), "?EMPTY REGISTER IN load\n");
    r.enter("clear 1 5 save 5 creg 5 load");
    assert_eq!(exec(&mut r), "?EMPTY REGISTER IN load\n");
    r.enter("clear 1 5 save 2 6 save clregs 6 load");
    assert_eq!(exec(&mut r), "?EMPTY REGISTER IN load\n");
}

#[test]
fn test_dump_registers() {
    let mut r = Runtime::default();
    r.enter("dr");
    assert_eq!(exec(&mut r), "No registers in use.\n");
    r.enter("2.5 10 save 1 5 save 1 2j 200 save dr");
    assert_eq!(exec(&mut r), "Reg   5: 1\nReg  10: 2.5\nReg 200: 1+2j\n");
    r.enter("dumpreg");
    assert_eq!(exec(&mut r), "Reg   5: 1\nReg  10: 2.5\nReg 200: 1+2j\n");
}
