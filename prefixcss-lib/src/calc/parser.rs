use super::lexer::{lex, Token, TokenKind};
use super::CalcError;

/// Arithmetic syntax tree of a `calc()` body with units already stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl Expr {
    pub fn eval(&self) -> Result<f64, CalcError> {
        match self {
            Expr::Number(v) => Ok(*v),
            Expr::Neg(e) => Ok(-e.eval()?),
            Expr::Binary { op, left, right } => {
                let l = left.eval()?;
                let r = right.eval()?;
                match op {
                    BinaryOp::Add => Ok(l + r),
                    BinaryOp::Sub => Ok(l - r),
                    BinaryOp::Mul => Ok(l * r),
                    BinaryOp::Div if r == 0.0 => Err(CalcError::new(0, "division by zero")),
                    BinaryOp::Div => Ok(l / r),
                }
            }
        }
    }
}

pub fn parse_expr(src: &str) -> Result<Expr, CalcError> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let expr = p.parse_sum()?;
    p.expect(TokenKind::Eof)?;
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Token {
        self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos];
        // Eof is never consumed past.
        if t.kind != TokenKind::Eof {
            self.pos += 1;
        }
        t
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), CalcError> {
        let t = self.peek();
        if t.kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(CalcError::new(
                t.offset,
                format!("expected {kind:?}, found {:?}", t.kind),
            ))
        }
    }

    fn parse_sum(&mut self) -> Result<Expr, CalcError> {
        let mut e = self.parse_product()?;
        loop {
            let op = if self.consume(TokenKind::Plus) {
                BinaryOp::Add
            } else if self.consume(TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };
            let r = self.parse_product()?;
            e = Expr::Binary {
                op,
                left: Box::new(e),
                right: Box::new(r),
            };
        }
        Ok(e)
    }

    fn parse_product(&mut self) -> Result<Expr, CalcError> {
        let mut e = self.parse_unary()?;
        loop {
            let op = if self.consume(TokenKind::Star) {
                BinaryOp::Mul
            } else if self.consume(TokenKind::Slash) {
                BinaryOp::Div
            } else {
                break;
            };
            let r = self.parse_unary()?;
            e = Expr::Binary {
                op,
                left: Box::new(e),
                right: Box::new(r),
            };
        }
        Ok(e)
    }

    fn parse_unary(&mut self) -> Result<Expr, CalcError> {
        if self.consume(TokenKind::Minus) {
            let e = self.parse_unary()?;
            return Ok(Expr::Neg(Box::new(e)));
        }
        if self.consume(TokenKind::Plus) {
            return self.parse_unary();
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, CalcError> {
        let t = self.bump();
        match t.kind {
            TokenKind::Number(v) => Ok(Expr::Number(v)),
            TokenKind::LParen => {
                let e = self.parse_sum()?;
                self.expect(TokenKind::RParen)?;
                Ok(e)
            }
            other => Err(CalcError::new(
                t.offset,
                format!("unexpected token {other:?}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_precedence() {
        let e = parse_expr("1 + 2 * 3").unwrap();
        match e {
            Expr::Binary {
                op: BinaryOp::Add,
                right,
                ..
            } => assert!(matches!(*right, Expr::Binary { op: BinaryOp::Mul, .. })),
            other => panic!("unexpected ast: {other:?}"),
        }
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(parse_expr("10 - 4 - 3").unwrap().eval(), Ok(3.0));
        assert_eq!(parse_expr("24 / 4 / 3").unwrap().eval(), Ok(2.0));
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse_expr("(1 + 2").unwrap_err();
        assert_eq!(err.offset, 6);
    }
}
