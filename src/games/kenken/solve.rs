//! KenKen solving
//!
//! Every cage starts with the list of value tuples that produce its target.
//! Propagation keeps those lists and the cell domains consistent with each other
//! and with the rows and columns, and search guesses cell values.

use crate::collections::{Coord, Grid, ValueSet};
use crate::games::kenken::{Cage, CellId, Puzzle, Value};
use crate::solve::{self, PropagateResult, Search, SolveResult};

pub fn solve(puzzle: &Puzzle) -> SolveResult<Grid<Value>> {
    let lines = lines(puzzle.width());
    solve::solve(KenKenState::new(puzzle, &lines))
}

/// The cells of every row and column
fn lines(width: usize) -> Vec<Vec<CellId>> {
    (0..width)
        .flat_map(|i| {
            let row = (0..width).map(move |j| i * width + j).collect();
            let col = (0..width).map(move |j| j * width + i).collect();
            vec![row, col]
        })
        .collect()
}

/// Every way to fill a cage with values that produce its target, without
/// repeating a value in a row or column
pub(crate) fn cage_solutions(puzzle: &Puzzle, cage: &Cage) -> Vec<Vec<Value>> {
    let coords: Vec<Coord> = cage
        .cell_ids()
        .iter()
        .map(|&id| puzzle.cage_map().coord_at(id))
        .collect();
    let mut solutions = Vec::new();
    let mut values = Vec::with_capacity(coords.len());
    extend_cage_solution(puzzle.width(), cage, &coords, &mut values, &mut solutions);
    debug!("cage at {:?} solutions: {:?}", coords[0], solutions);
    solutions
}

fn extend_cage_solution(
    width: usize,
    cage: &Cage,
    coords: &[Coord],
    values: &mut Vec<Value>,
    solutions: &mut Vec<Vec<Value>>,
) {
    if values.len() == coords.len() {
        if cage.is_satisfied(values) {
            solutions.push(values.clone());
        }
        return;
    }
    let coord = coords[values.len()];
    for value in 1..=width {
        let conflict = values.iter().zip(coords).any(|(&v, c)| {
            v == value && (c.row() == coord.row() || c.col() == coord.col())
        });
        if conflict {
            continue;
        }
        values.push(value);
        if cage.could_complete(values, coords.len() - values.len()) {
            extend_cage_solution(width, cage, coords, values, solutions);
        }
        values.pop();
    }
}

#[derive(Clone)]
struct KenKenState<'a> {
    puzzle: &'a Puzzle,
    lines: &'a [Vec<CellId>],
    domains: Vec<ValueSet>,
    /// the remaining solutions of each cage, one value per cage cell
    cage_solutions: Vec<Vec<Vec<Value>>>,
}

impl<'a> KenKenState<'a> {
    fn new(puzzle: &'a Puzzle, lines: &'a [Vec<CellId>]) -> Self {
        let domains = vec![ValueSet::with_all(puzzle.width()); puzzle.cell_count()];
        let cage_solutions = puzzle
            .cages()
            .iter()
            .map(|cage| cage_solutions(puzzle, cage))
            .collect();
        Self {
            puzzle,
            lines,
            domains,
            cage_solutions,
        }
    }

    /// Drops cage solutions that use a value no longer in a cell's domain, then
    /// narrows each cell to the values left in its cage's solutions
    fn apply_cage_solutions(&mut self) -> Option<bool> {
        let width = self.puzzle.width();
        let mut changed = false;
        for (cage, solutions) in self.puzzle.cages().iter().zip(&mut self.cage_solutions) {
            let domains = &mut self.domains;
            solutions.retain(|solution| {
                cage.cell_ids()
                    .iter()
                    .zip(solution)
                    .all(|(&cell, &value)| domains[cell].contains(value))
            });
            if solutions.is_empty() {
                return None;
            }
            for (i, &cell) in cage.cell_ids().iter().enumerate() {
                let mut possible = ValueSet::new(width);
                possible.extend(solutions.iter().map(|solution| solution[i]));
                changed |= domains[cell].retain_in(&possible);
            }
        }
        Some(changed)
    }

    /// Returns whether anything changed, or `None` on a contradiction
    fn propagate_once(&mut self) -> Option<bool> {
        let cages = self.apply_cage_solutions()?;
        let singles = self.eliminate_line_singles()?;
        let hidden = self.place_hidden_singles()?;
        Some(cages || singles || hidden)
    }

    fn eliminate_line_singles(&mut self) -> Option<bool> {
        let lines = self.lines;
        let mut changed = false;
        for line in lines {
            for &cell in line {
                let value = match self.domains[cell].single_value() {
                    Some(value) => value,
                    None => continue,
                };
                for &other in line {
                    if other != cell && self.domains[other].remove(value) {
                        if self.domains[other].is_empty() {
                            return None;
                        }
                        changed = true;
                    }
                }
            }
        }
        Some(changed)
    }

    fn place_hidden_singles(&mut self) -> Option<bool> {
        let lines = self.lines;
        let width = self.puzzle.width();
        let mut changed = false;
        for line in lines {
            for value in 1..=width {
                let mut places = line
                    .iter()
                    .copied()
                    .filter(|&cell| self.domains[cell].contains(value));
                let first = places.next()?;
                let only = places.next().is_none();
                if only && self.domains[first].len() > 1 {
                    self.domains[first] = ValueSet::single(width, value);
                    changed = true;
                }
            }
        }
        Some(changed)
    }
}

impl Search for KenKenState<'_> {
    type Guess = (CellId, Value);
    type Solution = Grid<Value>;

    fn propagate(&mut self) -> PropagateResult<Grid<Value>> {
        loop {
            match self.propagate_once() {
                Some(true) => continue,
                Some(false) => break,
                None => return PropagateResult::Invalid,
            }
        }
        let mut solution: Grid<Value> = Grid::square(self.puzzle.width());
        for (cell, domain) in self.domains.iter().enumerate() {
            match domain.single_value() {
                Some(value) => solution[cell] = value,
                None => return PropagateResult::Unsolved,
            }
        }
        if self.puzzle.verify_solution(&solution) {
            PropagateResult::Solved(solution)
        } else {
            PropagateResult::Invalid
        }
    }

    fn guesses(&self) -> Vec<(CellId, Value)> {
        self.domains
            .iter()
            .enumerate()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(_, domain)| domain.len())
            .map_or_else(Vec::new, |(cell, domain)| {
                domain.iter().map(|value| (cell, value)).collect()
            })
    }

    fn apply_guess(&mut self, (cell, value): (CellId, Value)) {
        self.domains[cell] = ValueSet::single(self.puzzle.width(), value);
    }
}
