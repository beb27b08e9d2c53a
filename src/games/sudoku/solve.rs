use crate::collections::ValueSet;
use crate::games::sudoku::board::{Board, Units, Value};
use crate::solve::{self, PropagateResult, Search, SolveResult};

/// Solves a Sudoku, reporting whether its solution is unique
pub fn solve(board: &Board) -> SolveResult<Board> {
    let units = Units::new(board.size(), board.box_width());
    solve::solve(SudokuState::new(board, &units))
}

/// The candidate values of every cell
#[derive(Clone)]
struct SudokuState<'a> {
    board: &'a Board,
    units: &'a Units,
    domains: Vec<ValueSet>,
}

impl<'a> SudokuState<'a> {
    fn new(board: &'a Board, units: &'a Units) -> Self {
        let size = board.size();
        let domains = board
            .cells()
            .iter()
            .map(|&value| match value {
                0 => ValueSet::with_all(size),
                value => ValueSet::single(size, value),
            })
            .collect();
        Self {
            board,
            units,
            domains,
        }
    }

    /// Removes the value of every solved cell from its peers.
    /// Returns `None` if a cell is left with no candidates.
    fn eliminate_naked_singles(&mut self) -> Option<bool> {
        let units = self.units;
        let mut changed = false;
        for cell in 0..self.domains.len() {
            let value = match self.domains[cell].single_value() {
                Some(value) => value,
                None => continue,
            };
            for &peer in units.peers(cell) {
                if self.domains[peer].remove(value) {
                    if self.domains[peer].is_empty() {
                        return None;
                    }
                    changed = true;
                }
            }
        }
        Some(changed)
    }

    /// Solves every cell that is the only place for a value in one of its units.
    /// Returns `None` if a value has no place in a unit.
    fn place_hidden_singles(&mut self) -> Option<bool> {
        let units = self.units;
        let size = self.board.size();
        let mut changed = false;
        for unit in units.units() {
            for value in 1..=size {
                let mut places = unit
                    .iter()
                    .copied()
                    .filter(|&cell| self.domains[cell].contains(value));
                let first = places.next()?;
                let only = places.next().is_none();
                if only && self.domains[first].len() > 1 {
                    self.domains[first] = ValueSet::single(size, value);
                    changed = true;
                }
            }
        }
        Some(changed)
    }
}

impl Search for SudokuState<'_> {
    type Guess = (usize, Value);
    type Solution = Board;

    fn propagate(&mut self) -> PropagateResult<Board> {
        loop {
            let naked = match self.eliminate_naked_singles() {
                Some(changed) => changed,
                None => return PropagateResult::Invalid,
            };
            let hidden = match self.place_hidden_singles() {
                Some(changed) => changed,
                None => return PropagateResult::Invalid,
            };
            if !naked && !hidden {
                break;
            }
        }
        let mut solution = self.board.clone();
        for (cell, domain) in self.domains.iter().enumerate() {
            match domain.single_value() {
                Some(value) => solution.set(cell, value),
                None => return PropagateResult::Unsolved,
            }
        }
        if solution.is_solved() {
            PropagateResult::Solved(solution)
        } else {
            PropagateResult::Invalid
        }
    }

    fn guesses(&self) -> Vec<(usize, Value)> {
        self.domains
            .iter()
            .enumerate()
            .filter(|(_, domain)| domain.len() > 1)
            .min_by_key(|(_, domain)| domain.len())
            .map_or_else(Vec::new, |(cell, domain)| {
                domain.iter().map(|value| (cell, value)).collect()
            })
    }

    fn apply_guess(&mut self, (cell, value): (usize, Value)) {
        self.domains[cell] = ValueSet::single(self.board.size(), value);
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::games::sudoku::{solve, Board};
    use crate::solve::SolveResult;

    #[test]
    fn unique_solution() {
        let board = Board::parse(
            "53..7....\n6..195...\n.98....6.\n8...6...3\n4..8.3..1\n\
             7...2...6\n.6....28.\n...419..5\n....8..79\n",
        )
        .unwrap();
        let result = solve(&board);
        let solution = &result.solved().unwrap().solution;
        let rows = solution
            .cells()
            .rows()
            .map(|row| row.iter().join(""))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                "534678912",
                "672195348",
                "198342567",
                "859761423",
                "426853791",
                "713924856",
                "961537284",
                "287419635",
                "345286179",
            ],
            rows
        );
    }

    #[test]
    fn empty_board_has_many_solutions() {
        let board = Board::empty(4).unwrap();
        match solve(&board) {
            SolveResult::MultipleSolutions(solutions) => {
                assert_eq!(2, solutions.len());
                assert!(solutions.iter().all(Board::is_solved));
            }
            _ => panic!("expected multiple solutions"),
        }
    }

    #[test]
    fn repeated_given_is_unsolvable() {
        let board = Board::parse("11..\n....\n....\n....\n").unwrap();
        assert!(matches!(solve(&board), SolveResult::Unsolvable));
    }
}
