//! Parse puzzles from text

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::Chars;

use crate::config::constants::KENKEN_MAX_SIZE;
use crate::error::{ParseError, ParseErrorType, ParseErrorType::*, ParsePuzzleError, UNEXPECTED_END};
use crate::games::kenken::{Cage, CellId, Operator, Puzzle, Value};

type Result<T, E = ParseError> = std::result::Result<T, E>;

/// A token paired with the line it starts on
type IndexedToken = (usize, Token);

/// parse a `Puzzle` from a string
pub fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut s = TokenIterator::new(s);
    let (line, size) = s
        .next_skip_space()?
        .expect_token()?
        .map_or(InvalidSize, Token::number)?;
    let size = size as usize;
    if size == 0 {
        return Err(ParseError::new(InvalidSize, size, line).into());
    }
    if size > KENKEN_MAX_SIZE {
        return Err(ParseError::new(SizeTooBig, size, line).into());
    }
    let cage_cells = read_cage_cells(&mut s, size)?;
    let cage_targets = read_cage_targets(&mut s, cage_cells.len())?;
    if let Some((line, token)) = s.next_skip_space()? {
        return Err(ParseError::new(UnexpectedToken, token, line).into());
    }
    let cages: Vec<Cage> = cage_cells
        .into_iter()
        .zip(cage_targets.into_iter())
        .map(|(cells, (target, operator))| Cage::new(cells, operator, target as Value))
        .collect::<Result<_, _>>()?;
    let puzzle = Puzzle::new(size, cages)?;
    Ok(puzzle)
}

fn read_cage_cells(s: &mut TokenIterator<'_>, width: usize) -> Result<Vec<Vec<CellId>>> {
    let mut cage_map: BTreeMap<char, Vec<CellId>> = BTreeMap::new();
    for cell in 0..width.pow(2) {
        let (_, letter) = s
            .next_skip_space()?
            .expect_token()?
            .map_or(InvalidCageId, Token::letter)?;
        cage_map.entry(letter).or_default().push(cell);
    }
    Ok(cage_map.into_iter().map(|(_id, cells)| cells).collect())
}

fn read_cage_targets(s: &mut TokenIterator<'_>, num_cages: usize) -> Result<Vec<(u32, Operator)>> {
    (0..num_cages)
        .map(|_| -> Result<_> {
            let (_, target) = s
                .next_skip_space()?
                .expect_token()?
                .map_or(InvalidCageTarget, Token::number)?;
            let operator = match s.next()? {
                Some((_, Token::Operator(o))) => o,
                Some((_, Token::Space)) | None => Operator::Nop,
                Some((line, token)) => return Err(ParseError::new(InvalidOperator, token, line)),
            };
            Ok((target, operator))
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Letter(char),
    Number(u32),
    Operator(Operator),
    Space,
}

impl Token {
    fn letter(self) -> Option<char> {
        match self {
            Token::Letter(l) => Some(l),
            _ => None,
        }
    }

    fn number(self) -> Option<u32> {
        match self {
            Token::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(o) => o.symbol().map_or(Ok(()), |symbol| write!(f, "{}", symbol)),
            Token::Letter(l) => write!(f, "{}", l),
            Token::Space => write!(f, " "),
        }
    }
}

struct TokenIterator<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> TokenIterator<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            chars: s.chars().peekable(),
            line: 1,
        }
    }

    fn next_skip_space(&mut self) -> Result<Option<IndexedToken>> {
        loop {
            match self.next()? {
                Some((_, Token::Space)) => {}
                next => return Ok(next),
            }
        }
    }

    fn next(&mut self) -> Result<Option<IndexedToken>> {
        let line = self.line;
        let c = match self.chars.peek() {
            Some(&c) => c,
            None => return Ok(None),
        };
        let token = if c.is_whitespace() {
            while let Some(&c) = self.chars.peek() {
                if !c.is_whitespace() {
                    break;
                }
                if c == '\n' {
                    self.line += 1;
                }
                self.chars.next();
            }
            Token::Space
        } else if c.is_ascii_digit() {
            let mut s = String::new();
            while let Some(&c) = self.chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                s.push(c);
                self.chars.next();
            }
            let n = s
                .parse()
                .map_err(|_| ParseError::new(InvalidToken, &s, line))?;
            Token::Number(n)
        } else {
            self.chars.next();
            if let Some(o) = Operator::from_symbol(c) {
                Token::Operator(o)
            } else if c.is_ascii_uppercase() {
                Token::Letter(c)
            } else {
                return Err(ParseError::new(InvalidToken, c, line));
            }
        };
        Ok(Some((line, token)))
    }
}

trait TokenOption: Sized {
    fn expect_token(self) -> Result<IndexedToken>;
}

impl TokenOption for Option<IndexedToken> {
    fn expect_token(self) -> Result<IndexedToken> {
        self.ok_or(UNEXPECTED_END)
    }
}

trait IndexedTokenExt {
    fn map_or<U>(self, error_type: ParseErrorType, f: impl FnOnce(Token) -> Option<U>) -> Result<(usize, U)>;
}

impl IndexedTokenExt for IndexedToken {
    fn map_or<U>(self, error_type: ParseErrorType, f: impl FnOnce(Token) -> Option<U>) -> Result<(usize, U)> {
        let (line, token) = self;
        let value = f(token).ok_or_else(|| ParseError::new(error_type, token, line))?;
        Ok((line, value))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ParseErrorType, ParsePuzzleError};
    use crate::games::kenken::parse::parse_puzzle;
    use crate::games::kenken::{Cage, Operator, Puzzle};

    fn parse_error_type(s: &str) -> Option<(ParseErrorType, Option<usize>)> {
        match parse_puzzle(s) {
            Err(ParsePuzzleError::Parse(e)) => Some((e.error_type(), e.line())),
            _ => None,
        }
    }

    #[test]
    fn empty() {
        assert_eq!(Some((ParseErrorType::UnexpectedEnd, None)), parse_error_type(""));
    }

    #[test]
    fn test() {
        let str = "\
        4\n\
        A ABB\
        ACCC\
        DEEF \
        DGHH \
        4+ 2* 6* 4/ 4- 3 3 2-";
        let cages = vec![
            Cage::new(vec![0, 1, 4], Operator::Add, 4).unwrap(),
            Cage::new(vec![2, 3], Operator::Multiply, 2).unwrap(),
            Cage::new(vec![5, 6, 7], Operator::Multiply, 6).unwrap(),
            Cage::new(vec![8, 12], Operator::Divide, 4).unwrap(),
            Cage::new(vec![9, 10], Operator::Subtract, 4).unwrap(),
            Cage::new(vec![11], Operator::Nop, 3).unwrap(),
            Cage::new(vec![13], Operator::Nop, 3).unwrap(),
            Cage::new(vec![14, 15], Operator::Subtract, 2).unwrap(),
        ];
        let puzzle = Puzzle::new(4, cages).unwrap();
        assert_eq!(puzzle, parse_puzzle(str).unwrap());
    }

    #[test]
    fn errors() {
        assert_eq!(
            Some((ParseErrorType::InvalidCageId, Some(2))),
            parse_error_type("2\nA1\nBB\n1 2+")
        );
        assert_eq!(
            Some((ParseErrorType::InvalidToken, Some(4))),
            parse_error_type("2\nAA\nBB\n3+ x")
        );
        assert_eq!(
            Some((ParseErrorType::InvalidOperator, Some(4))),
            parse_error_type("2\nAA\nBB\n3+ 3A")
        );
        assert_eq!(
            Some((ParseErrorType::UnexpectedToken, Some(5))),
            parse_error_type("2\nAA\nBB\n3+ 3+\n5")
        );
        assert_eq!(Some((ParseErrorType::SizeTooBig, Some(1))), parse_error_type("27"));
    }

    #[test]
    fn invalid_cage() {
        assert!(matches!(
            parse_puzzle("2\nAA\nBB\n3 3+"),
            Err(ParsePuzzleError::InvalidPuzzle(_))
        ));
    }
}
