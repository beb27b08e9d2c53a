//! Propagate-then-backtrack solving shared by the puzzle games

pub use self::search::{search_solution, Search, SearchResult};

mod search;

pub enum PropagateResult<S> {
    /// Every decision is made and the result is a valid solution
    Solved(S),
    /// Nothing more can be deduced without guessing
    Unsolved,
    /// A contradiction was found
    Invalid,
}

pub enum SolveResult<S> {
    /// The puzzle cannot be solved - there may be an error in the puzzle
    Unsolvable,
    /// The puzzle was solved and has exactly one solution, as it should
    Solved(SolvedData<S>),
    /// Multiple solutions were found for the puzzle; the first two are kept
    MultipleSolutions(Vec<S>),
}

impl<S> SolveResult<S> {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData<S>> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }
}

pub struct SolvedData<S> {
    pub solution: S,
    pub used_search: bool,
    /// The number of guesses made while backtracking
    pub guesses: u32,
}

/// Solves a puzzle by propagating constraints, falling back to backtracking search
pub fn solve<T: Search>(mut state: T) -> SolveResult<T::Solution> {
    match state.propagate() {
        PropagateResult::Solved(solution) => {
            return SolveResult::Solved(SolvedData {
                solution,
                used_search: false,
                guesses: 0,
            })
        }
        PropagateResult::Unsolved => (),
        PropagateResult::Invalid => return SolveResult::Unsolvable,
    }
    info!("Begin backtracking");
    let (result, guesses) = search_solution(&state);
    match result {
        SearchResult::NoSolutions => SolveResult::Unsolvable,
        SearchResult::SingleSolution(solution) => SolveResult::Solved(SolvedData {
            solution,
            used_search: true,
            guesses,
        }),
        SearchResult::MultipleSolutions(solutions) => SolveResult::MultipleSolutions(solutions),
    }
}
