use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

/// Colors for parentheses, cycled by nesting depth.
const BRACKET_COLORS: &[Color] = &[Color::Yellow, Color::Magenta, Color::Blue, Color::Green];

const NUMBER: Color = Color::Cyan;
const FUNCTION: Color = Color::Blue;
const OPERATOR: Color = Color::White;
const INVALID: Color = Color::Red;

fn bracket_style(depth: usize) -> Style {
    Style::new().fg(BRACKET_COLORS[depth % BRACKET_COLORS.len()])
}

pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut depth = 0usize;
        let mut last_end = 0;

        let mut lexer = Token::lexer(line);
        while let Some(token) = lexer.next() {
            let span = lexer.span();
            if span.start > last_end {
                output.push((Style::new(), line[last_end..span.start].to_string()));
            }

            let style = match token {
                Ok(Token::LParen) => {
                    let style = bracket_style(depth);
                    depth += 1;
                    style
                }
                Ok(Token::RParen) => match depth.checked_sub(1) {
                    Some(d) => {
                        depth = d;
                        bracket_style(d)
                    }
                    None => Style::new().fg(INVALID).bold(),
                },
                Ok(Token::Number) => Style::new().fg(NUMBER),
                Ok(Token::Sqrt) => Style::new().fg(FUNCTION),
                Ok(Token::Operator) => Style::new().fg(OPERATOR),
                Err(_) => Style::new().fg(INVALID),
            };
            output.push((style, line[span.clone()].to_string()));
            last_end = span.end;
        }

        if last_end < line.len() {
            output.push((Style::new(), line[last_end..].to_string()));
        }
        output
    }
}
