use std::fmt::Debug;

use crate::solve::PropagateResult;

/// The state of a partially solved puzzle that can be explored by guessing
///
/// The guesses returned for a state must be mutually exclusive and cover every
/// way the puzzle could be completed, so that counting solutions is exact.
pub trait Search: Clone {
    type Guess: Copy + Debug;
    type Solution;

    /// Makes every deduction possible without guessing
    fn propagate(&mut self) -> PropagateResult<Self::Solution>;

    /// The alternatives for the most constrained open decision
    fn guesses(&self) -> Vec<Self::Guess>;

    fn apply_guess(&mut self, guess: Self::Guess);
}

pub enum SearchResult<S> {
    NoSolutions,
    SingleSolution(S),
    MultipleSolutions(Vec<S>),
}

/// Searches for solutions from a propagated state, stopping at the second solution.
/// Also returns the number of guesses made.
pub fn search_solution<T: Search>(state: &T) -> (SearchResult<T::Solution>, u32) {
    let mut searcher = Searcher {
        solutions: Vec::new(),
        guesses: 0,
    };
    searcher.search_next(1, state);
    let result = match searcher.solutions.len() {
        0 => SearchResult::NoSolutions,
        1 => SearchResult::SingleSolution(searcher.solutions.pop().unwrap()),
        _ => SearchResult::MultipleSolutions(searcher.solutions),
    };
    (result, searcher.guesses)
}

struct Searcher<S> {
    solutions: Vec<S>,
    guesses: u32,
}

impl<S> Searcher<S> {
    fn is_done(&self) -> bool {
        self.solutions.len() > 1
    }

    fn search_next<T: Search<Solution = S>>(&mut self, depth: u32, state: &T) {
        debug!("Backtracking (depth={})", depth);
        for (i, guess) in state.guesses().into_iter().enumerate() {
            debug!("Guessing {:?}, guess #: {}", guess, i + 1);
            self.guesses += 1;
            self.guess(depth, state.clone(), guess);
            if self.is_done() {
                return;
            }
        }
    }

    fn guess<T: Search<Solution = S>>(&mut self, depth: u32, mut state: T, guess: T::Guess) {
        state.apply_guess(guess);
        match state.propagate() {
            PropagateResult::Solved(solution) => {
                debug!("Found a solution at depth {}", depth);
                self.solutions.push(solution);
            }
            PropagateResult::Unsolved => self.search_next(depth + 1, &state),
            PropagateResult::Invalid => debug!("Guess failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::solve::{solve, PropagateResult, Search, SolveResult};

    /// Choose distinct values from `1..=max` for `len` slots whose sum is `target`
    #[derive(Clone)]
    struct DistinctSum {
        max: u32,
        target: u32,
        chosen: Vec<u32>,
        len: usize,
    }

    impl Search for DistinctSum {
        type Guess = u32;
        type Solution = Vec<u32>;

        fn propagate(&mut self) -> PropagateResult<Vec<u32>> {
            let sum: u32 = self.chosen.iter().sum();
            if sum > self.target {
                return PropagateResult::Invalid;
            }
            if self.chosen.len() < self.len {
                return PropagateResult::Unsolved;
            }
            if sum == self.target {
                PropagateResult::Solved(self.chosen.clone())
            } else {
                PropagateResult::Invalid
            }
        }

        fn guesses(&self) -> Vec<u32> {
            // ascending values only, so each set is found once
            let min = self.chosen.last().map_or(1, |&v| v + 1);
            (min..=self.max).collect()
        }

        fn apply_guess(&mut self, guess: u32) {
            self.chosen.push(guess);
        }
    }

    fn distinct_sum(max: u32, target: u32, len: usize) -> DistinctSum {
        DistinctSum {
            max,
            target,
            chosen: Vec::new(),
            len,
        }
    }

    #[test]
    fn single_solution() {
        let result = solve(distinct_sum(4, 7, 3));
        let data = result.solved().unwrap();
        assert_eq!(vec![1, 2, 4], data.solution);
        assert!(data.used_search);
    }

    #[test]
    fn multiple_solutions() {
        match solve(distinct_sum(5, 7, 2)) {
            SolveResult::MultipleSolutions(solutions) => {
                assert_eq!(vec![vec![2, 5], vec![3, 4]], solutions)
            }
            _ => panic!("expected multiple solutions"),
        }
    }

    #[test]
    fn no_solutions() {
        assert!(matches!(solve(distinct_sum(3, 10, 2)), SolveResult::Unsolvable));
    }
}
