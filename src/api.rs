use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::Error,
    logger::SolveLog,
    placement,
    puzzle::{Digit, Pos, Puzzle},
    solver::Solver,
};

// row letters of the human-facing coordinate, A1 = top-left
static ROW_LETTERS: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    "abcdefghi".chars().zip(1..).collect()
});

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub puzzle: Option<String>,
    #[serde(default)]
    pub coordinate: Option<String>,
    // clients send the value as either a JSON string or a bare number
    #[serde(default, deserialize_with = "string_from_any")]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub puzzle: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict { Column, Row, Region }

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckReply {
    pub valid: bool,
    pub conflict: Vec<Conflict>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolveReply {
    pub solution: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorReply {
    pub error: String,
}

impl From<Error> for ErrorReply {
    fn from(e: Error) -> Self { Self { error: e.to_string() } }
}

pub fn check(req: &CheckRequest) -> Result<CheckReply, Error> {
    let (puzzle, coordinate, value) = match (&req.puzzle, &req.coordinate, &req.value) {
        (Some(p), Some(c), Some(v)) if !p.is_empty() && !c.is_empty() && !v.is_empty() => {
            (p, c, v)
        }
        _ => return Err(Error::MissingFields),
    };

    let pos = parse_coordinate(coordinate)?;
    let value = parse_value(value)?;
    let puzzle = Puzzle::parse(puzzle)?;

    // conflicts appended in evaluation order: column, row, region
    let mut conflict = Vec::new();
    if !placement::check_column(&puzzle, pos, value) { conflict.push(Conflict::Column); }
    if !placement::check_row(&puzzle, pos, value) { conflict.push(Conflict::Row); }
    if !placement::check_region(&puzzle, pos, value) { conflict.push(Conflict::Region); }

    Ok(CheckReply { valid: conflict.is_empty(), conflict })
}

pub fn solve(req: &SolveRequest, log: &mut SolveLog) -> Result<SolveReply, Error> {
    let puzzle = match &req.puzzle {
        Some(p) if !p.is_empty() => p,
        _ => return Err(Error::MissingFields),
    };

    let puzzle = Puzzle::parse(puzzle)?;
    let solved = Solver::new().solve(&puzzle, log)?;
    Ok(SolveReply { solution: solved.to_compact() })
}

// "A2" -> row 1, column 2; the letter is case-insensitive
fn parse_coordinate(s: &str) -> Result<Pos, Error> {
    let mut chars = s.chars();
    let letter = chars.next().ok_or(Error::InvalidCoordinate)?;
    let row = *ROW_LETTERS
        .get(&letter.to_ascii_lowercase())
        .ok_or(Error::InvalidCoordinate)?;

    let col = chars
        .next()
        .and_then(|ch| ch.to_digit(10))
        .ok_or(Error::InvalidCoordinate)? as usize;
    if chars.next().is_some() || !(1..=9).contains(&col) {
        return Err(Error::InvalidCoordinate);
    }
    Ok(Pos { row, col })
}

fn parse_value(s: &str) -> Result<Digit, Error> {
    match s.trim().parse::<i64>() {
        Ok(v) if (1..=9).contains(&v) => Ok(v as Digit),
        _ => Err(Error::InvalidValue),
    }
}

fn string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    let val = serde_json::Value::deserialize(deserializer)?;
    match val {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("invalid value type: {}", other))),
    }
}
