use super::token::*;

/// Split one line of input into tokens.
///
/// Everything after a `#` is a comment. A real literal directly followed
/// by an imaginary literal is fused into a single complex literal, so
/// `3 4j` is one token.
pub fn lex(s: &str) -> Vec<Token> {
    RpnLexer::lex(s)
}

fn strip_comment(s: &str) -> &str {
    match s.find('#') {
        Some(index) => &s[..index],
        None => s,
    }
}

struct RpnLexer<'a> {
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Iterator for RpnLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.words.next().map(Token::from_string)
    }
}

impl<'a> RpnLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut tokens = RpnLexer {
            words: strip_comment(s).split_whitespace(),
        }
        .collect();
        RpnLexer::collapse_complex(&mut tokens);
        tokens
    }

    fn collapse_complex(tokens: &mut Vec<Token>) {
        let mut locs: Vec<(usize, Token)> = vec![];
        let mut tokens_iter = tokens.windows(2).enumerate();
        while let Some((index, tt)) = tokens_iter.next() {
            if let Token::Literal(Literal::Real(re)) = tt[0] {
                if let Token::Literal(Literal::Imaginary(im)) = tt[1] {
                    locs.push((index, Token::Literal(Literal::Complex(re, im))));
                    tokens_iter.next();
                }
            }
        }
        while let Some((index, token)) = locs.pop() {
            tokens.splice(index..index + 2, Some(token));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::Word(s.into())
    }

    fn real(n: f64) -> Token {
        Token::Literal(Literal::Real(n))
    }

    #[test]
    fn test_basic_example() {
        assert_eq!(
            lex("10 6 4 - / p"),
            vec![real(10.0), real(6.0), real(4.0), word("-"), word("/"), word("p")]
        );
    }

    #[test]
    fn test_whitespace_and_comment() {
        assert_eq!(lex("  1\t2   # 3 4"), vec![real(1.0), real(2.0)]);
        assert_eq!(lex("# nothing here"), vec![]);
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            lex(": inc 1 + ;"),
            vec![Token::Colon, word("inc"), real(1.0), word("+"), Token::Semicolon]
        );
        assert_eq!(
            lex("[ dup ]"),
            vec![Token::LBracket, word("dup"), Token::RBracket]
        );
    }

    #[test]
    fn test_complex_fusion() {
        assert_eq!(lex("3 4j"), vec![Token::Literal(Literal::Complex(3.0, 4.0))]);
        assert_eq!(
            lex("1 3 4j 2"),
            vec![
                real(1.0),
                Token::Literal(Literal::Complex(3.0, 4.0)),
                real(2.0)
            ]
        );
        assert_eq!(
            lex("4j"),
            vec![Token::Literal(Literal::Imaginary(4.0))]
        );
    }

    #[test]
    fn test_fusion_is_pairwise() {
        assert_eq!(
            lex("1 2j 3j"),
            vec![
                Token::Literal(Literal::Complex(1.0, 2.0)),
                Token::Literal(Literal::Imaginary(3.0))
            ]
        );
    }
}
