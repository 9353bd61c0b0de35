use super::var::{self, Kind, Var};
use super::{Dictionary, Opcode, Operation, Stack, Val, Word};
use crate::error;
use crate::lang::{lex, Error, ErrorCode, Literal, Token};
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

const MAX_DEPTH: usize = u16::max_value() as usize;
pub const MAX_PRECISION: usize = 17;

/// ## Interpreter
///
/// Lines are queued with `enter` and run with `execute`, which returns
/// after at most `cycles` tokens so the caller can poll for Ctrl-C and
/// show output while long loops are still running.

pub struct Runtime {
    stack: Stack<Val>,
    var: Var,
    dict: Dictionary,
    precision: usize,
    input: VecDeque<Token>,
    frames: Stack<Frame>,
    capture: Option<Capture>,
    interrupted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// All queued input has been consumed.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    Print(String),
    Error(Error),
    Quit,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    tokens: Rc<[Token]>,
    pc: usize,
}

#[derive(Debug)]
enum FrameKind {
    Subroutine(Rc<str>),
    Loop,
}

#[derive(Debug)]
enum Capture {
    Definition {
        name: Option<Rc<str>>,
        body: Vec<Token>,
        depth: usize,
    },
    Loop {
        body: Vec<Token>,
        depth: usize,
    },
}

enum Captured {
    Definition(Rc<str>, Rc<[Token]>),
    Loop(Rc<[Token]>),
}

impl Capture {
    fn definition() -> Capture {
        Capture::Definition {
            name: None,
            body: vec![],
            depth: 0,
        }
    }

    fn looping() -> Capture {
        Capture::Loop {
            body: vec![],
            depth: 0,
        }
    }

    /// Collect one more token. Loop bodies nest by bracket depth and are
    /// kept as plain tokens until they run.
    fn feed(&mut self, token: Token) -> Result<Option<Captured>> {
        match self {
            Capture::Definition { name, body, depth } => {
                if name.is_none() {
                    return match token {
                        Token::Word(word) => {
                            *name = Some(word);
                            Ok(None)
                        }
                        t => Err(error!(MalformedDefinition, &t.to_string(); "NAME EXPECTED")),
                    };
                }
                match token {
                    Token::Colon => Err(error!(MalformedDefinition, ":"; "NESTED DEFINITION")),
                    Token::Semicolon if *depth > 0 => Err(error!(MalformedLoop, ";"; "MISSING ]")),
                    Token::Semicolon => match name.take() {
                        Some(name) => Ok(Some(Captured::Definition(
                            name,
                            std::mem::take(body).into(),
                        ))),
                        None => Err(error!(MalformedDefinition, ";"; "NAME EXPECTED")),
                    },
                    Token::RBracket if *depth == 0 => Err(error!(MalformedLoop, "]")),
                    Token::RBracket => {
                        *depth -= 1;
                        body.push(token);
                        Ok(None)
                    }
                    Token::LBracket => {
                        *depth += 1;
                        body.push(token);
                        Ok(None)
                    }
                    _ => {
                        body.push(token);
                        Ok(None)
                    }
                }
            }
            Capture::Loop { body, depth } => match token {
                Token::RBracket if *depth == 0 => {
                    Ok(Some(Captured::Loop(std::mem::take(body).into())))
                }
                Token::RBracket => {
                    *depth -= 1;
                    body.push(token);
                    Ok(None)
                }
                Token::LBracket => {
                    *depth += 1;
                    body.push(token);
                    Ok(None)
                }
                _ => {
                    body.push(token);
                    Ok(None)
                }
            },
        }
    }

    fn unterminated(&self) -> Error {
        match self {
            Capture::Definition { .. } => error!(MalformedDefinition; "MISSING ;"),
            Capture::Loop { .. } => error!(MalformedLoop; "MISSING ]"),
        }
    }
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            stack: Stack::new("OPERAND STACK FULL"),
            var: Var::default(),
            dict: Dictionary::default(),
            precision: 0,
            input: VecDeque::new(),
            frames: Stack::with_max_len("RECURSION TOO DEEP", MAX_DEPTH),
            capture: None,
            interrupted: false,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Queue a line of input. Definitions and loops may continue on
    /// following lines, and a real number ending one line joins an
    /// imaginary number starting the next.
    pub fn enter(&mut self, line: &str) {
        let mut tokens = lex(line);
        let fused = match (self.input.back(), tokens.first()) {
            (
                Some(Token::Literal(Literal::Real(re))),
                Some(Token::Literal(Literal::Imaginary(im))),
            ) => Some(Token::Literal(Literal::Complex(*re, *im))),
            _ => None,
        };
        if let Some(token) = fused {
            self.input.pop_back();
            tokens[0] = token;
        }
        self.input.extend(tokens);
    }

    /// Abort whatever is running on the next call to `execute`.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Stack contents, bottom first.
    pub fn stack(&self) -> Vec<Val> {
        self.stack.iter().copied().collect()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// True while a `:` or `[` is waiting for its closing token.
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Names the dictionary currently resolves.
    pub fn words(&self) -> Vec<String> {
        self.dict.words()
    }

    /// Signal end of input. Runs a held real number and reports a
    /// definition or loop left open.
    pub fn finish(&mut self) -> Option<Error> {
        if self.holding() {
            if let Some(token) = self.input.pop_front() {
                if let Err(error) = self.run(token) {
                    self.unwind();
                    return Some(error);
                }
            }
        }
        let error = self.capture.as_ref().map(Capture::unterminated);
        if error.is_some() {
            self.unwind();
        }
        error
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.interrupted {
            self.interrupted = false;
            if !self.frames.is_empty() || (!self.input.is_empty() && !self.holding()) {
                self.unwind();
                return Event::Error(error!(Break));
            }
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    debug!(%error, depth = self.frames.len(), "unwinding");
                    self.unwind();
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn unwind(&mut self) {
        self.frames.clear();
        self.input.clear();
        self.capture = None;
    }

    /// A real number at the very end of input waits for the next line,
    /// which may start with its imaginary part.
    fn holding(&self) -> bool {
        self.frames.is_empty()
            && self.input.len() == 1
            && matches!(self.input.front(), Some(Token::Literal(Literal::Real(_))))
    }

    fn step(&mut self) -> Result<Option<Event>> {
        match self.next_token()? {
            Some(token) => self.run(token),
            None => Ok(Some(Event::Stopped)),
        }
    }

    fn run(&mut self, token: Token) -> Result<Option<Event>> {
        trace!(%token, depth = self.frames.len(), "step");
        if let Some(capture) = self.capture.as_mut() {
            if let Some(captured) = capture.feed(token)? {
                self.capture = None;
                self.complete(captured)?;
            }
            return Ok(None);
        }
        match token {
            Token::Literal(lit) => self.stack.push(lit.into())?,
            Token::Colon => self.capture = Some(Capture::definition()),
            Token::Semicolon => return Err(error!(MalformedDefinition, ";"; "NOT DEFINING")),
            Token::LBracket => self.capture = Some(Capture::looping()),
            Token::RBracket => return Err(error!(MalformedLoop, "]"; "NOT IN A LOOP")),
            Token::Word(word) => return self.word(&word),
        }
        Ok(None)
    }

    /// Next token from the innermost frame, or from queued input when no
    /// frame is active. Exhausted frames return or loop here.
    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if self.holding() {
                return Ok(None);
            }
            let token = match self.frames.last_mut() {
                None => return Ok(self.input.pop_front()),
                Some(frame) => {
                    let token = frame.tokens.get(frame.pc).cloned();
                    if token.is_some() {
                        frame.pc += 1;
                    }
                    token
                }
            };
            if token.is_some() {
                return Ok(token);
            }
            if let Some(capture) = &self.capture {
                return Err(capture.unterminated());
            }
            self.end_of_frame()?;
        }
    }

    fn end_of_frame(&mut self) -> Result<()> {
        let in_loop = matches!(
            self.frames.last(),
            Some(Frame {
                kind: FrameKind::Loop,
                ..
            })
        );
        if in_loop && self.loop_test()? {
            if let Some(frame) = self.frames.last_mut() {
                frame.pc = 0;
            }
        } else if let FrameKind::Subroutine(name) = self.frames.pop()?.kind {
            trace!(%name, "return");
        }
        Ok(())
    }

    /// Pop the loop control value. Zero ends the loop, any other integer
    /// repeats it.
    fn loop_test(&mut self) -> Result<bool> {
        let top = match self.stack.last() {
            Some(val) => *val,
            None => return Err(error!(LoopControlType, "]"; "EMPTY STACK")),
        };
        match top {
            Val::Real(n) if n == 0.0 => {
                self.stack.pop()?;
                Ok(false)
            }
            Val::Real(n) if n.fract() == 0.0 => {
                self.stack.pop()?;
                Ok(true)
            }
            Val::Real(_) => Err(error!(LoopControlType, "]"; "NOT AN INTEGER")),
            Val::Complex(_) => Err(error!(LoopControlType, "]"; "COMPLEX VALUE")),
        }
    }

    fn complete(&mut self, captured: Captured) -> Result<()> {
        match captured {
            Captured::Definition(name, body) => {
                debug!(%name, len = body.len(), "define");
                self.dict.define(name, body);
                Ok(())
            }
            Captured::Loop(body) => {
                debug!(len = body.len(), depth = self.frames.len(), "loop");
                self.frames.push(Frame {
                    kind: FrameKind::Loop,
                    tokens: body,
                    pc: 0,
                })
            }
        }
    }

    fn word(&mut self, word: &Rc<str>) -> Result<Option<Event>> {
        match self.dict.lookup(word) {
            Word::Subroutine(body) => {
                debug!(name = %word, depth = self.frames.len(), "call");
                self.frames
                    .push(Frame {
                        kind: FrameKind::Subroutine(word.clone()),
                        tokens: body,
                        pc: 0,
                    })
                    .map_err(|e| e.in_word(word))?;
                Ok(None)
            }
            Word::Primitive(op) => self.primitive(op).map_err(|e| e.in_word(word)),
            Word::Unknown => Err(error!(UnknownWord, word)),
        }
    }

    fn unary(&mut self, f: fn(Val) -> Result<Val>) -> Result<()> {
        let val = f(*self.stack.peek(0)?)?;
        self.stack.pop()?;
        self.stack.push(val)
    }

    fn binary(&mut self, f: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let val = f(*self.stack.peek(1)?, *self.stack.peek(0)?)?;
        self.stack.pop_2()?;
        self.stack.push(val)
    }

    fn register_number(&self) -> Result<u8> {
        var::slot(*self.stack.peek(0)?, ErrorCode::RegisterOutOfRange)
    }

    fn vector_number(&self) -> Result<u8> {
        var::slot(*self.stack.peek(0)?, ErrorCode::VectorOutOfRange)
    }

    /// Operands are checked before anything is popped so a failing
    /// primitive leaves the stack as it found it.
    fn primitive(&mut self, op: Opcode) -> Result<Option<Event>> {
        use Opcode::*;
        self.stack.require(op.arity())?;
        match op {
            Dup => {
                let val = *self.stack.peek(0)?;
                self.stack.push(val)?;
            }
            Drop => {
                self.stack.pop()?;
            }
            Over => {
                let val = *self.stack.peek(1)?;
                self.stack.push(val)?;
            }
            Rot => {
                let mut vals = self.stack.pop_n(3)?;
                vals.rotate_left(1);
                for val in vals {
                    self.stack.push(val)?;
                }
            }
            Swap => {
                let (one, two) = self.stack.pop_2()?;
                self.stack.push(two)?;
                self.stack.push(one)?;
            }
            Clear => self.stack.clear(),

            Save => {
                let reg = self.register_number()?;
                let (val, _) = self.stack.pop_2()?;
                self.var.store(reg, val);
            }
            Load => {
                let val = self.var.fetch(self.register_number()?)?;
                self.stack.pop()?;
                self.stack.push(val)?;
            }
            Creg => {
                let reg = self.register_number()?;
                self.stack.pop()?;
                self.var.clear_register(reg);
            }
            Clregs => self.var.clear_registers(),

            Vreal | Vcplx => {
                let vnum = self.vector_number()?;
                let len = var::length(*self.stack.peek(1)?)?;
                self.stack.pop_2()?;
                let kind = if op == Vreal { Kind::Real } else { Kind::Complex };
                self.var.dimension(vnum, len, kind);
            }
            Vsave => {
                let vnum = self.vector_number()?;
                let index = *self.stack.peek(1)?;
                let val = *self.stack.peek(2)?;
                self.var.store_element(vnum, index, val)?;
                self.stack.pop_n(3)?;
            }
            Vload => {
                let vnum = self.vector_number()?;
                let val = self.var.fetch_element(vnum, *self.stack.peek(1)?)?;
                self.stack.pop_2()?;
                self.stack.push(val)?;
            }
            Vreg => {
                let vnum = self.vector_number()?;
                self.stack.pop()?;
                self.var.clear_vector(vnum);
            }
            Clvecs => self.var.clear_vectors(),

            DumpStack => return Ok(Some(Event::Print(self.dump_stack()))),
            DumpReg => return Ok(Some(Event::Print(self.dump_reg()))),
            DumpVec => return Ok(Some(Event::Print(self.dump_vec()))),
            DumpSr => return Ok(Some(Event::Print(self.dump_sr()))),

            Add => self.binary(Operation::sum)?,
            Sub => self.binary(Operation::subtract)?,
            Mul => self.binary(Operation::multiply)?,
            Div => self.binary(Operation::divide)?,
            Abs => self.unary(Operation::abs)?,
            Floor => self.unary(Operation::floor)?,
            Ceil => self.unary(Operation::ceil)?,
            Round => self.unary(Operation::round)?,

            Real => self.unary(Operation::real)?,
            Imag => self.unary(Operation::imag)?,
            R2c => self.unary(Operation::r2c)?,
            C2r => {
                let (re, im) = Operation::c2r(*self.stack.peek(0)?)?;
                self.stack.pop()?;
                self.stack.push(re)?;
                self.stack.push(im)?;
            }

            And => self.binary(Operation::and)?,
            Or => self.binary(Operation::or)?,
            Xor => self.binary(Operation::xor)?,
            Neg => self.unary(Operation::neg)?,
            Shl => self.binary(Operation::shl)?,
            Shr => self.binary(Operation::shr)?,

            SinR => self.unary(Operation::sinr)?,
            CosR => self.unary(Operation::cosr)?,
            TanR => self.unary(Operation::tanr)?,
            AsinR => self.unary(Operation::asinr)?,
            AcosR => self.unary(Operation::acosr)?,
            AtanR => self.unary(Operation::atanr)?,
            SinD => self.unary(Operation::sind)?,
            CosD => self.unary(Operation::cosd)?,
            TanD => self.unary(Operation::tand)?,
            AsinD => self.unary(Operation::asind)?,
            AcosD => self.unary(Operation::acosd)?,
            AtanD => self.unary(Operation::atand)?,

            Loge => self.unary(Operation::loge)?,
            Expe => self.unary(Operation::expe)?,
            Log10 => self.unary(Operation::log10)?,
            Exp10 => self.unary(Operation::exp10)?,
            Log2 => self.unary(Operation::log2)?,
            Exp2 => self.unary(Operation::exp2)?,
            Logx => self.binary(Operation::logx)?,
            Expx => self.binary(Operation::expx)?,

            Gt => self.binary(Operation::greater)?,
            Lt => self.binary(Operation::less)?,
            Ge => self.binary(Operation::greater_equal)?,
            Le => self.binary(Operation::less_equal)?,
            Eq => self.binary(Operation::equal)?,

            Print => {
                let s = self.stack.peek(0)?.format(self.precision);
                return Ok(Some(Event::Print(format!("{}\n", s))));
            }
            GetPrecision => self.stack.push(Val::Real(self.precision as f64))?,
            Frdigit => {
                self.precision = match *self.stack.peek(0)? {
                    Val::Real(n) if n.fract() == 0.0 && n >= 0.0 && n <= MAX_PRECISION as f64 => {
                        n as usize
                    }
                    _ => return Err(error!(TypeMismatch; "PRECISION MUST BE 0 TO 17")),
                };
                self.stack.pop()?;
            }
            Help => return Ok(Some(Event::Print(HELP.to_string()))),
            Quit => {
                self.unwind();
                return Ok(Some(Event::Quit));
            }
        }
        Ok(None)
    }

    fn dump_stack(&self) -> String {
        let vals: Vec<String> = self
            .stack
            .iter()
            .map(|v| v.format(self.precision))
            .collect();
        format!("Stack: [{}]\n", vals.join(", "))
    }

    fn dump_reg(&self) -> String {
        let s: String = self
            .var
            .registers()
            .map(|(i, v)| format!("Reg {:3}: {}\n", i, v.format(self.precision)))
            .collect();
        if s.is_empty() {
            "No registers in use.\n".to_string()
        } else {
            s
        }
    }

    fn dump_vec(&self) -> String {
        let s: String = self
            .var
            .vectors()
            .map(|(i, v)| format!("Vec {:3}  len: {}  {}\n", i, v.len(), v.kind()))
            .collect();
        if s.is_empty() {
            "No vectors defined. Use LEN VNUM vreal or LEN VNUM vcplx to create one.\n".to_string()
        } else {
            s
        }
    }

    fn dump_sr(&self) -> String {
        if self.dict.is_empty() {
            return "No subroutines defined.\n".to_string();
        }
        self.dict
            .listing()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

const HELP: &str = "\
RPN complex calculator, inspired by FORTH, gforth and dc.

   Basic example:      10 6 4 - / p                 # 6 - 4 = 2, 10 / 2 = 5

   Stack operation:    dup drop over rot swap clear
   Stack <--> Reg:     V R save, R load, R creg, clregs   # R is 0..255
   Stack <--> Vector:  V I N vsave, I N vload           # N is 0..255
   Create a vector:    LEN N vreal, LEN N vcplx
   Clear vectors:      N vreg (cvec), clvecs
   Debug:              dumpstack ds, dumpreg dr, dumpvec dv, dumpsr dsr

   Literal:            3 4j                         # real or complex number
   Arithmetic:         + - * / abs
   Rounding:           floor ceil round
   Complex:            real imag r2c c2r
   Logical:            and or xor neg, V N shl, V N shr

   Trigonometric(rad): sinr cosr tanr asinr acosr atanr
   Trigonometric(deg): sind cosd tand asind acosd atand
   Logarithm:          loge expe log10 exp10 log2 exp2, B X logx, B X expx

   Output:             print p                      # stack is unchanged
   Fractional digits:  4 frdigit, 4 precision, 4 k  # 0 is automatic, max 17
   Current digits:     K                            # pushes the setting
   Relation:           5 4 > p                      # 1

   Subroutine:         : name 10 4 p drop ;         # may span lines
   Loop:               10 [ 1 - p dup ]             # repeat while top is not 0
   Quit:               q quit bye exit
";
