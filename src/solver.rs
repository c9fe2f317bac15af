use crate::{
    error::Error,
    logger::SolveLog,
    placement,
    puzzle::{Pos, Puzzle},
};

// Naked-single elimination: fill only cells with exactly one legal candidate.
// No guessing, no backtracking; grids that need search stall and are
// reported as unsolvable rather than looping forever.
pub struct Solver;

impl Solver {
    pub fn new() -> Self { Self }

    pub fn solve(&self, puzzle: &Puzzle, log: &mut SolveLog) -> Result<Puzzle, Error> {
        let mut grid = puzzle.clone();
        let mut pass = 0usize;

        while !grid.is_complete() {
            pass += 1;
            let mut filled = 0usize;

            for i in 0..81 {
                let pos = Pos::from_idx(i);
                if grid.get(pos) != 0 { continue; }

                let mask = placement::candidates(&grid, pos);
                if mask == 0 {
                    log.note("Dead end", &format!("no digit fits r{}c{}", pos.row, pos.col));
                    return Err(Error::Unsolvable);
                }
                if let Some(d) = placement::sole_candidate(mask) {
                    grid.set(pos, d);
                    filled += 1;
                    log.note(
                        "Single candidate",
                        &format!("placed {} at r{}c{}", d, pos.row, pos.col),
                    );
                }
            }

            if filled == 0 {
                // every remaining cell still has 2+ candidates; elimination
                // alone cannot finish this grid
                log.note("Stalled", &format!("pass {} filled nothing", pass));
                return Err(Error::Unsolvable);
            }
            log.note(
                &format!("Pass {}", pass),
                &format!("filled {} cells, {} remain\n{}", filled, grid.empty_count(), grid),
            );
        }

        // a contradictory givens set can fill out completely without any cell
        // ever losing its last candidate; reject it instead of returning an
        // invalid grid
        if !grid.is_valid_solution() {
            log.note("Invalid fill", "completed grid violates row/column/region uniqueness");
            return Err(Error::Unsolvable);
        }
        Ok(grid)
    }
}
