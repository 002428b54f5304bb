use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("sqrt")]
    Sqrt,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[-+*/^]")]
    Operator,
}

/// Open-parenthesis depth at the end of `buffer`.
///
/// Returns `None` on a character the calculator does not understand, so the
/// line is submitted as-is and the evaluator reports the problem.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token in Token::lexer(buffer) {
        match token {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    Some(depth.max(0) as usize)
}
