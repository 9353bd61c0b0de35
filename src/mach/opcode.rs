/// ## Primitive words
///
/// Every primitive operates on the stack. Register and vector numbers,
/// lengths and indexes are taken from the stack as well.
///
/// For example: `5 7 save` stores 5 in register 7 and
/// `10 3 vreal` creates real vector 3 with ten elements.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Stack manipulation
    Dup,
    Drop,
    Over,
    Rot,
    Swap,
    Clear,

    // *** Registers
    /// `V R save` pops R then V and stores V in register R.
    Save,
    /// `R load` replaces R with the content of register R.
    Load,
    Creg,
    Clregs,

    // *** Vectors
    /// `LEN N vreal` creates real vector N.
    Vreal,
    /// `LEN N vcplx` creates complex vector N.
    Vcplx,
    /// `V I N vsave` stores V at index I of vector N.
    Vsave,
    /// `I N vload` replaces I and N with element I of vector N.
    Vload,
    Vreg,
    Clvecs,

    // *** Debug
    DumpStack,
    DumpReg,
    DumpVec,
    DumpSr,

    // *** Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Abs,
    Floor,
    Ceil,
    Round,

    // *** Complex
    Real,
    Imag,
    R2c,
    C2r,

    // *** Logical
    And,
    Or,
    Xor,
    Neg,
    Shl,
    Shr,

    // *** Trigonometric
    SinR,
    CosR,
    TanR,
    AsinR,
    AcosR,
    AtanR,
    SinD,
    CosD,
    TanD,
    AsinD,
    AcosD,
    AtanD,

    // *** Logarithm and exponential
    Loge,
    Expe,
    Log10,
    Exp10,
    Log2,
    Exp2,
    Logx,
    Expx,

    // *** Relational
    Gt,
    Lt,
    Ge,
    Le,
    Eq,

    // *** Output and control
    Print,
    /// `N frdigit` sets the number of fractional digits printed.
    Frdigit,
    /// `K` pushes the number of fractional digits.
    GetPrecision,
    Help,
    Quit,
}

impl Opcode {
    /// Every primitive, in declaration order.
    pub const ALL: &'static [Opcode] = &[
        Opcode::Dup, Opcode::Drop, Opcode::Over, Opcode::Rot, Opcode::Swap, Opcode::Clear,
        Opcode::Save, Opcode::Load, Opcode::Creg, Opcode::Clregs, Opcode::Vreal, Opcode::Vcplx,
        Opcode::Vsave, Opcode::Vload, Opcode::Vreg, Opcode::Clvecs, Opcode::DumpStack,
        Opcode::DumpReg, Opcode::DumpVec, Opcode::DumpSr, Opcode::Add, Opcode::Sub, Opcode::Mul,
        Opcode::Div, Opcode::Abs, Opcode::Floor, Opcode::Ceil, Opcode::Round, Opcode::Real,
        Opcode::Imag, Opcode::R2c, Opcode::C2r, Opcode::And, Opcode::Or, Opcode::Xor,
        Opcode::Neg, Opcode::Shl, Opcode::Shr, Opcode::SinR, Opcode::CosR, Opcode::TanR,
        Opcode::AsinR, Opcode::AcosR, Opcode::AtanR, Opcode::SinD, Opcode::CosD, Opcode::TanD,
        Opcode::AsinD, Opcode::AcosD, Opcode::AtanD, Opcode::Loge, Opcode::Expe, Opcode::Log10,
        Opcode::Exp10, Opcode::Log2, Opcode::Exp2, Opcode::Logx, Opcode::Expx, Opcode::Gt,
        Opcode::Lt, Opcode::Ge, Opcode::Le, Opcode::Eq, Opcode::Print, Opcode::Frdigit,
        Opcode::GetPrecision, Opcode::Help, Opcode::Quit,
    ];

    pub fn from_word(word: &str) -> Option<Opcode> {
        use Opcode::*;
        let op = match word {
            "dup" => Dup,
            "drop" => Drop,
            "over" => Over,
            "rot" => Rot,
            "swap" => Swap,
            "clear" => Clear,

            "save" => Save,
            "load" => Load,
            "creg" => Creg,
            "clregs" => Clregs,

            "vreal" => Vreal,
            "vcplx" => Vcplx,
            "vsave" => Vsave,
            "vload" => Vload,
            "vreg" | "cvec" => Vreg,
            "clvecs" => Clvecs,

            "dumpstack" | "ds" => DumpStack,
            "dumpreg" | "dr" => DumpReg,
            "dumpvec" | "dv" => DumpVec,
            "dumpsr" | "dsr" => DumpSr,

            "+" | "add" => Add,
            "-" | "sub" => Sub,
            "*" | "mul" => Mul,
            "/" | "div" => Div,
            "abs" => Abs,
            "floor" => Floor,
            "ceil" => Ceil,
            "round" => Round,

            "real" => Real,
            "imag" => Imag,
            "r2c" => R2c,
            "c2r" => C2r,

            "and" => And,
            "or" => Or,
            "xor" => Xor,
            "neg" => Neg,
            "shl" => Shl,
            "shr" => Shr,

            "sinr" => SinR,
            "cosr" => CosR,
            "tanr" => TanR,
            "asinr" => AsinR,
            "acosr" => AcosR,
            "atanr" => AtanR,
            "sind" => SinD,
            "cosd" => CosD,
            "tand" => TanD,
            "asind" => AsinD,
            "acosd" => AcosD,
            "atand" => AtanD,

            "loge" => Loge,
            "expe" => Expe,
            "log10" => Log10,
            "exp10" => Exp10,
            "log2" => Log2,
            "exp2" => Exp2,
            "logx" => Logx,
            "expx" => Expx,

            ">" => Gt,
            "<" => Lt,
            ">=" => Ge,
            "<=" => Le,
            "=" => Eq,

            "print" | "p" => Print,
            "frdigit" | "precision" | "k" => Frdigit,
            "K" => GetPrecision,
            "help" => Help,
            "q" | "quit" | "bye" | "exit" => Quit,
            _ => return None,
        };
        Some(op)
    }

    /// Minimum stack depth needed before the primitive runs.
    pub fn arity(&self) -> usize {
        use Opcode::*;
        match self {
            Clear | Clregs | Clvecs | DumpStack | DumpReg | DumpVec | DumpSr | GetPrecision | Help
            | Quit => 0,
            Dup | Drop | Load | Creg | Vreg | Abs | Floor | Ceil | Round | Real | Imag | R2c
            | C2r | Neg | SinR | CosR | TanR | AsinR | AcosR | AtanR | SinD | CosD | TanD
            | AsinD | AcosD | AtanD | Loge | Expe | Log10 | Exp10 | Log2 | Exp2 | Print
            | Frdigit => 1,
            Over | Swap | Save | Vreal | Vcplx | Vload | Add | Sub | Mul | Div | And | Or
            | Xor | Shl | Shr | Logx | Expx | Gt | Lt | Ge | Le | Eq => 2,
            Rot | Vsave => 3,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Dup => write!(f, "dup"),
            Drop => write!(f, "drop"),
            Over => write!(f, "over"),
            Rot => write!(f, "rot"),
            Swap => write!(f, "swap"),
            Clear => write!(f, "clear"),

            Save => write!(f, "save"),
            Load => write!(f, "load"),
            Creg => write!(f, "creg"),
            Clregs => write!(f, "clregs"),

            Vreal => write!(f, "vreal"),
            Vcplx => write!(f, "vcplx"),
            Vsave => write!(f, "vsave"),
            Vload => write!(f, "vload"),
            Vreg => write!(f, "vreg"),
            Clvecs => write!(f, "clvecs"),

            DumpStack => write!(f, "dumpstack"),
            DumpReg => write!(f, "dumpreg"),
            DumpVec => write!(f, "dumpvec"),
            DumpSr => write!(f, "dumpsr"),

            Add => write!(f, "+"),
            Sub => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            Abs => write!(f, "abs"),
            Floor => write!(f, "floor"),
            Ceil => write!(f, "ceil"),
            Round => write!(f, "round"),

            Real => write!(f, "real"),
            Imag => write!(f, "imag"),
            R2c => write!(f, "r2c"),
            C2r => write!(f, "c2r"),

            And => write!(f, "and"),
            Or => write!(f, "or"),
            Xor => write!(f, "xor"),
            Neg => write!(f, "neg"),
            Shl => write!(f, "shl"),
            Shr => write!(f, "shr"),

            SinR => write!(f, "sinr"),
            CosR => write!(f, "cosr"),
            TanR => write!(f, "tanr"),
            AsinR => write!(f, "asinr"),
            AcosR => write!(f, "acosr"),
            AtanR => write!(f, "atanr"),
            SinD => write!(f, "sind"),
            CosD => write!(f, "cosd"),
            TanD => write!(f, "tand"),
            AsinD => write!(f, "asind"),
            AcosD => write!(f, "acosd"),
            AtanD => write!(f, "atand"),

            Loge => write!(f, "loge"),
            Expe => write!(f, "expe"),
            Log10 => write!(f, "log10"),
            Exp10 => write!(f, "exp10"),
            Log2 => write!(f, "log2"),
            Exp2 => write!(f, "exp2"),
            Logx => write!(f, "logx"),
            Expx => write!(f, "expx"),

            Gt => write!(f, ">"),
            Lt => write!(f, "<"),
            Ge => write!(f, ">="),
            Le => write!(f, "<="),
            Eq => write!(f, "="),

            Print => write!(f, "print"),
            Frdigit => write!(f, "frdigit"),
            GetPrecision => write!(f, "K"),
            Help => write!(f, "help"),
            Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(Opcode::from_word("p"), Some(Opcode::Print));
        assert_eq!(Opcode::from_word("bye"), Some(Opcode::Quit));
        assert_eq!(Opcode::from_word("cvec"), Some(Opcode::Vreg));
        assert_eq!(Opcode::from_word("dsr"), Some(Opcode::DumpSr));
        assert_eq!(Opcode::from_word("precision"), Some(Opcode::Frdigit));
        assert_eq!(Opcode::from_word("k"), Some(Opcode::Frdigit));
        assert_eq!(Opcode::from_word("K"), Some(Opcode::GetPrecision));
        assert_eq!(Opcode::from_word("Dup"), None);
        assert_eq!(Opcode::from_word("pickles"), None);
    }

    #[test]
    fn test_display_round_trips() {
        for word in &["dup", "+", "vsave", "atand", "expx", ">=", "frdigit", "quit"] {
            let op = Opcode::from_word(word).unwrap();
            assert_eq!(op.to_string(), *word);
        }
    }

    #[test]
    fn test_all_words_resolve() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_word(&op.to_string()), Some(*op));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(Opcode::Clear.arity(), 0);
        assert_eq!(Opcode::GetPrecision.arity(), 0);
        assert_eq!(Opcode::Print.arity(), 1);
        assert_eq!(Opcode::Save.arity(), 2);
        assert_eq!(Opcode::Vsave.arity(), 3);
    }
}
