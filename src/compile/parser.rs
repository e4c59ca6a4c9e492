//! Pattern parser.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! alternation := concat ('|' concat)*
//! concat      := repeat*
//! repeat      := atom quantifier*
//! quantifier  := ('*' | '+' | '?' | '{' n (',' m?)? '}') '?'?
//! atom        := group | class | '.' | '\' escape | literal
//! ```

use super::charset::CharSet;
use super::error::CompileError;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::{anychar, char, digit1, none_of, one_of};
use nom::combinator::{map, map_opt, map_res, opt, value};
use nom::error::{Error, ErrorKind};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::{IResult, Parser};

/// Parsed pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// Matches the empty string
    Empty,
    /// Matches one character from the class
    Class { items: Vec<ClassItem>, negated: bool },
    Concat(Vec<Ast>),
    Alternate(Vec<Ast>),
    Repeat {
        inner: Box<Ast>,
        min: u32,
        max: Option<u32>,
    },
}

/// Member of a bracket class before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassItem {
    Range(char, char),
    Set(CharSet),
}

impl Ast {
    fn literal(c: char) -> Self {
        Self::Class {
            items: vec![ClassItem::Range(c, c)],
            negated: false,
        }
    }

    fn set(set: CharSet) -> Self {
        Self::Class {
            items: vec![ClassItem::Set(set)],
            negated: false,
        }
    }
}

/// Parse a whole pattern.
///
/// Groups and stacked quantifiers each open one nesting level; more than
/// `max_nesting` levels fail with [`CompileError::NestingTooDeep`].
pub fn parse(pattern: &str, max_nesting: usize) -> Result<Ast, CompileError> {
    match alternation(pattern, Nesting::root(max_nesting)) {
        Ok(("", ast)) => Ok(ast),
        Ok((rest, _)) => Err(unexpected(pattern, rest)),
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::TooLarge => {
            Err(CompileError::NestingTooDeep { limit: max_nesting })
        }
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(unexpected(pattern, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(CompileError::Syntax {
            position: pattern.chars().count(),
            message: "unexpected end of pattern".to_string(),
        }),
    }
}

/// Current nesting level while descending into groups and repetitions.
#[derive(Clone, Copy, Debug)]
struct Nesting {
    depth: usize,
    limit: usize,
}

impl Nesting {
    fn root(limit: usize) -> Self {
        Self { depth: 0, limit }
    }

    fn deeper(self, input: &str) -> Result<Self, nom::Err<Error<&str>>> {
        if self.depth >= self.limit {
            return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

fn unexpected(pattern: &str, rest: &str) -> CompileError {
    let consumed = pattern.len() - rest.len();
    let position = pattern[..consumed].chars().count();
    let message = match rest.chars().next() {
        Some(')') => "unbalanced ')'".to_string(),
        Some('(') => "unclosed group".to_string(),
        Some('[') => "unclosed or empty character class".to_string(),
        Some('*' | '+' | '?' | '{') => "repetition without anything to repeat".to_string(),
        Some('\\') => "incomplete escape".to_string(),
        Some(c) => format!("unexpected {c:?}"),
        None => "unexpected end of pattern".to_string(),
    };
    CompileError::Syntax { position, message }
}

fn alternation(input: &str, nesting: Nesting) -> IResult<&str, Ast> {
    map(separated_list1(char('|'), |i| concat(i, nesting)), |mut branches| {
        if branches.len() == 1 {
            branches.pop().unwrap_or(Ast::Empty)
        } else {
            Ast::Alternate(branches)
        }
    })
    .parse(input)
}

fn concat(input: &str, nesting: Nesting) -> IResult<&str, Ast> {
    map(many0(|i| repeat(i, nesting)), |mut items| match items.len() {
        0 => Ast::Empty,
        1 => items.pop().unwrap_or(Ast::Empty),
        _ => Ast::Concat(items),
    })
    .parse(input)
}

fn repeat(input: &str, nesting: Nesting) -> IResult<&str, Ast> {
    let (mut input, mut ast) = atom(input, nesting)?;
    let mut nesting = nesting;
    while let Ok((rest, (min, max))) = quantifier(input) {
        nesting = nesting.deeper(input)?;
        ast = Ast::Repeat {
            inner: Box::new(ast),
            min,
            max,
        };
        input = rest;
    }
    Ok((input, ast))
}

fn quantifier(input: &str) -> IResult<&str, (u32, Option<u32>)> {
    terminated(
        alt((
            value((0u32, None::<u32>), char('*')),
            value((1u32, None::<u32>), char('+')),
            value((0u32, Some(1u32)), char('?')),
            delimited(char('{'), bounds, char('}')),
        )),
        // Laziness changes which match a matcher reports, not the language.
        opt(char('?')),
    )
    .parse(input)
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>()).parse(input)
}

fn bounds(input: &str) -> IResult<&str, (u32, Option<u32>)> {
    let (input, min) = number(input)?;
    let (input, comma) = opt(char(',')).parse(input)?;
    if comma.is_none() {
        return Ok((input, (min, Some(min))));
    }
    let (input, max) = opt(number).parse(input)?;
    Ok((input, (min, max)))
}

fn atom(input: &str, nesting: Nesting) -> IResult<&str, Ast> {
    alt((
        |i| group(i, nesting),
        class,
        map(char('.'), |_| Ast::set(CharSet::any())),
        map(preceded(char('\\'), escape), |item| match item {
            ClassItem::Range(c, _) => Ast::literal(c),
            ClassItem::Set(set) => Ast::set(set),
        }),
        map(none_of("|()*+?[{\\."), Ast::literal),
    ))
    .parse(input)
}

fn group(input: &str, nesting: Nesting) -> IResult<&str, Ast> {
    let (input, _) = pair(char('('), opt(tag("?:"))).parse(input)?;
    let inner = nesting.deeper(input)?;
    terminated(move |i| alternation(i, inner), char(')')).parse(input)
}

fn class(input: &str) -> IResult<&str, Ast> {
    let (input, _) = char('[').parse(input)?;
    let (input, negated) = opt(char('^')).parse(input)?;
    // A leading ']' is a literal member.
    let (input, leading) = opt(char(']')).parse(input)?;
    let (input, mut items) = many0(class_item).parse(input)?;
    let (input, _) = char(']').parse(input)?;

    if let Some(c) = leading {
        items.insert(0, ClassItem::Range(c, c));
    }
    Ok((
        input,
        Ast::Class {
            items,
            negated: negated.is_some(),
        },
    ))
}

fn class_item(input: &str) -> IResult<&str, ClassItem> {
    if let Ok((rest, set)) = preceded(char('\\'), perl_class).parse(input) {
        return Ok((rest, ClassItem::Set(set)));
    }
    let (input, lo) = class_char(input)?;
    match preceded(char('-'), class_char).parse(input) {
        Ok((rest, hi)) => Ok((rest, ClassItem::Range(lo, hi))),
        Err(_) => Ok((input, ClassItem::Range(lo, lo))),
    }
}

fn class_char(input: &str) -> IResult<&str, char> {
    alt((preceded(char('\\'), escaped_char), none_of("]\\"))).parse(input)
}

fn escape(input: &str) -> IResult<&str, ClassItem> {
    alt((
        map(perl_class, ClassItem::Set),
        map(escaped_char, |c| ClassItem::Range(c, c)),
    ))
    .parse(input)
}

fn perl_class(input: &str) -> IResult<&str, CharSet> {
    map(one_of("dDwWsS"), |c| match c {
        'd' => CharSet::digit(),
        'D' => CharSet::digit().complement(),
        'w' => CharSet::word(),
        'W' => CharSet::word().complement(),
        's' => CharSet::space(),
        _ => CharSet::space().complement(),
    })
    .parse(input)
}

fn escaped_char(input: &str) -> IResult<&str, char> {
    alt((
        preceded(char('x'), hex_scalar(2, 2)),
        delimited(tag("u{"), hex_scalar(1, 6), char('}')),
        map(one_of("nrtfv0"), |c| match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'f' => '\x0C',
            'v' => '\x0B',
            _ => '\0',
        }),
        anychar,
    ))
    .parse(input)
}

fn hex_scalar<'a>(
    min: usize,
    max: usize,
) -> impl Parser<&'a str, Output = char, Error = nom::error::Error<&'a str>> {
    map_opt(
        take_while_m_n(min, max, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u32::from_str_radix(digits, 16).ok().and_then(char::from_u32),
    )
}
