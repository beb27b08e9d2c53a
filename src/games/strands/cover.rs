//! Choosing found words that use every letter on the board exactly once

use ahash::AHashSet;
use linked_hash_map::LinkedHashMap;

use crate::games::strands::{Board, WordPath};
use crate::solve::{self, PropagateResult, Search, SolveResult};

/// One way to place a word on the board
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub word: String,
    pub path: WordPath,
    pub spangram: bool,
    word_id: usize,
    mask: u64,
}

/// Finds the words that together cover the board. If any found word is a spangram,
/// the cover must include a spangram.
pub fn cover(board: &Board, words: &LinkedHashMap<String, Vec<WordPath>>) -> SolveResult<Vec<Placement>> {
    let placements = placements(board, words);
    let cell_count = board.letters().len();
    let mut by_cell = vec![Vec::new(); cell_count];
    for (i, placement) in placements.iter().enumerate() {
        for &cell in &placement.path {
            by_cell[cell].push(i);
        }
    }
    let full = if cell_count == 64 {
        u64::MAX
    } else {
        (1 << cell_count) - 1
    };
    let state = CoverState {
        placements: &placements,
        by_cell: &by_cell,
        full,
        need_spangram: placements.iter().any(|p| p.spangram),
        covered: 0,
        used_words: vec![false; words.len()],
        chosen: Vec::new(),
    };
    solve::solve(state)
}

/// Every distinct placement of every word. Paths of a word over the same cells are
/// the same placement.
fn placements(board: &Board, words: &LinkedHashMap<String, Vec<WordPath>>) -> Vec<Placement> {
    let mut seen: AHashSet<(usize, u64)> = AHashSet::default();
    let mut placements = Vec::new();
    for (word_id, (word, paths)) in words.iter().enumerate() {
        for path in paths {
            let mask = path.iter().fold(0u64, |mask, &cell| mask | 1 << cell);
            if !seen.insert((word_id, mask)) {
                continue;
            }
            placements.push(Placement {
                word: word.clone(),
                path: path.clone(),
                spangram: board.is_spangram(path),
                word_id,
                mask,
            });
        }
    }
    placements
}

#[derive(Clone)]
struct CoverState<'a> {
    placements: &'a [Placement],
    /// the placements using each cell
    by_cell: &'a [Vec<usize>],
    full: u64,
    need_spangram: bool,
    covered: u64,
    used_words: Vec<bool>,
    chosen: Vec<usize>,
}

impl CoverState<'_> {
    fn fits(&self, placement: usize) -> bool {
        let placement = &self.placements[placement];
        placement.mask & self.covered == 0 && !self.used_words[placement.word_id]
    }

    /// The uncovered cell with the fewest placements that still fit, and those placements
    fn most_constrained_cell(&self) -> Option<Vec<usize>> {
        (0..self.by_cell.len())
            .filter(|&cell| self.covered & 1 << cell == 0)
            .map(|cell| {
                self.by_cell[cell]
                    .iter()
                    .copied()
                    .filter(|&p| self.fits(p))
                    .collect::<Vec<_>>()
            })
            .min_by_key(Vec::len)
    }

    fn choose(&mut self, placement: usize) {
        let p = &self.placements[placement];
        self.covered |= p.mask;
        self.used_words[p.word_id] = true;
        self.chosen.push(placement);
    }

    fn has_spangram(&self) -> bool {
        self.chosen.iter().any(|&p| self.placements[p].spangram)
    }
}

impl Search for CoverState<'_> {
    type Guess = usize;
    type Solution = Vec<Placement>;

    fn propagate(&mut self) -> PropagateResult<Vec<Placement>> {
        loop {
            if self.covered == self.full {
                if self.need_spangram && !self.has_spangram() {
                    return PropagateResult::Invalid;
                }
                let cover = self
                    .chosen
                    .iter()
                    .map(|&p| self.placements[p].clone())
                    .collect();
                return PropagateResult::Solved(cover);
            }
            match self.most_constrained_cell() {
                Some(options) if options.is_empty() => return PropagateResult::Invalid,
                Some(options) if options.len() == 1 => self.choose(options[0]),
                _ => return PropagateResult::Unsolved,
            }
        }
    }

    fn guesses(&self) -> Vec<usize> {
        self.most_constrained_cell().unwrap_or_default()
    }

    fn apply_guess(&mut self, placement: usize) {
        self.choose(placement);
    }
}
