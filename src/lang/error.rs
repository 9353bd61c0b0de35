#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    word: String,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $word:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_word($word)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $word:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_word($word)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            word: String::new(),
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Attach the offending word. The innermost word wins, so errors
    /// raised deep inside a primitive keep their original location.
    pub fn in_word(self, word: &str) -> Error {
        if !self.word.is_empty() {
            return self;
        }
        Error {
            word: word.to_string(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackUnderflow = 1,
    TypeMismatch = 2,
    DivisionByZero = 3,
    UnknownWord = 4,
    RegisterOutOfRange = 5,
    EmptyRegister = 6,
    VectorOutOfRange = 7,
    VectorKindMismatch = 8,
    MalformedDefinition = 9,
    MalformedLoop = 10,
    LoopControlType = 11,
    StackOverflow = 12,
    Break = 13,
}

impl ErrorCode {
    /// Errors in the structure of the input rather than in its data.
    /// A script containing one is malformed.
    pub fn is_malformed(self) -> bool {
        matches!(self, ErrorCode::MalformedDefinition | ErrorCode::MalformedLoop)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            StackUnderflow => "STACK UNDERFLOW",
            TypeMismatch => "TYPE MISMATCH",
            DivisionByZero => "DIVISION BY ZERO",
            UnknownWord => "UNKNOWN WORD",
            RegisterOutOfRange => "REGISTER OUT OF RANGE",
            EmptyRegister => "EMPTY REGISTER",
            VectorOutOfRange => "VECTOR OUT OF RANGE",
            VectorKindMismatch => "VECTOR KIND MISMATCH",
            MalformedDefinition => "MALFORMED DEFINITION",
            MalformedLoop => "MALFORMED LOOP",
            LoopControlType => "LOOP CONTROL TYPE",
            StackOverflow => "STACK OVERFLOW",
            Break => "BREAK",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if !self.word.is_empty() {
            write!(f, " IN {}", self.word)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
