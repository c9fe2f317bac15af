use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::error::Error;

pub type Digit = u8; // 1..=9; 0 = empty

// 1-based row/column, matching the A1..I9 coordinates of the service contract
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub row: usize, pub col: usize }

impl Pos {
    pub fn idx(self) -> usize { (self.row - 1) * 9 + (self.col - 1) }
    pub fn from_idx(i: usize) -> Self { Self { row: i / 9 + 1, col: i % 9 + 1 } }

    // top-left cell of the containing 3x3 region
    pub fn region_corner(self) -> Self {
        Self { row: self.row - (self.row - 1) % 3, col: self.col - (self.col - 1) % 3 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    cells: [Digit; 81],
}

pub fn validate(s: &str) -> Result<(), Error> {
    // character check first, then length (an 80-char string with an 'X'
    // reports the character problem, not the length)
    if !s.chars().all(|ch| matches!(ch, '0'..='9' | '.')) {
        return Err(Error::InvalidCharacters);
    }
    if s.len() != 81 {
        return Err(Error::InvalidLength);
    }
    Ok(())
}

impl Puzzle {
    pub fn parse(s: &str) -> Result<Self, Error> {
        validate(s)?;
        let mut cells = [0u8; 81];
        for (i, b) in s.bytes().enumerate() {
            cells[i] = match b { b'.' | b'0' => 0, d => d - b'0' };
        }
        Ok(Self { cells })
    }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.idx()] }
    pub fn set(&mut self, p: Pos, d: Digit) { self.cells[p.idx()] = d; }
    pub fn is_complete(&self) -> bool { self.cells.iter().all(|&d| d != 0) }
    pub fn empty_count(&self) -> usize { self.cells.iter().filter(|&&d| d == 0).count() }

    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|&d| if d == 0 { '.' } else { (b'0' + d) as char }).collect()
    }

    // full grid: no empties, every row/column/region a permutation of 1..=9
    pub fn is_valid_solution(&self) -> bool {
        for r in 1..=9 {
            if !unit_complete((1..=9).map(|c| self.get(Pos { row: r, col: c }))) { return false; }
        }
        for c in 1..=9 {
            if !unit_complete((1..=9).map(|r| self.get(Pos { row: r, col: c }))) { return false; }
        }
        for corner_r in (1..=9).step_by(3) {
            for corner_c in (1..=9).step_by(3) {
                let vals = (corner_r..corner_r + 3).flat_map(|r| {
                    (corner_c..corner_c + 3).map(move |c| (r, c))
                });
                if !unit_complete(vals.map(|(r, c)| self.get(Pos { row: r, col: c }))) {
                    return false;
                }
            }
        }
        true
    }
}

fn unit_complete(vals: impl Iterator<Item = Digit>) -> bool {
    let mut seen = [false; 10];
    for v in vals {
        if v == 0 || seen[v as usize] { return false; }
        seen[v as usize] = true;
    }
    true
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (r, band) in self.cells.chunks(27).enumerate() {
            if r == 0 { writeln!(f, "+-------+-------+-------+")?; }
            for row in band.chunks(9) {
                let line = row
                    .chunks(3)
                    .map(|triple| {
                        triple
                            .iter()
                            .map(|&d| if d == 0 { '\u{b7}' } else { (b'0' + d) as char })
                            .format(" ")
                            .to_string()
                    })
                    .join(" | ");
                writeln!(f, "| {} |", line)?;
            }
            writeln!(f, "+-------+-------+-------+")?;
        }
        Ok(())
    }
}
