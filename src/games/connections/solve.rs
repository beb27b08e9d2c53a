//! Splitting the board into groups of four connected words

use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use linked_hash_map::LinkedHashMap;

use crate::config::constants::CONNECTIONS_GROUP_SIZE;
use crate::games::connections::{Category, Puzzle};
use crate::solve::{self, PropagateResult, Search, SolveResult};

/// Four board words and every category they all belong to
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub words: Vec<String>,
    pub categories: Vec<String>,
    category_ids: Vec<usize>,
    mask: u16,
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.categories.join(" / "),
            self.words.iter().map(|w| w.to_uppercase()).join(", ")
        )
    }
}

/// Every 4-word subset of the board words in each category. The same words found
/// through several categories are one group.
pub fn candidate_groups(puzzle: &Puzzle, categories: &[Category]) -> Vec<Group> {
    let mut groups: LinkedHashMap<u16, Group> = LinkedHashMap::new();
    for (category_id, category) in categories.iter().enumerate() {
        let members = puzzle
            .words()
            .iter()
            .positions(|word| category.contains(word))
            .collect_vec();
        for combination in members.into_iter().combinations(CONNECTIONS_GROUP_SIZE) {
            let mask = combination.iter().fold(0u16, |mask, &i| mask | 1 << i);
            let group = groups.entry(mask).or_insert_with(|| Group {
                words: combination.iter().map(|&i| puzzle.words()[i].clone()).collect(),
                categories: Vec::new(),
                category_ids: Vec::new(),
                mask,
            });
            if !group.category_ids.contains(&category_id) {
                group.category_ids.push(category_id);
                group.categories.push(category.name().to_string());
            }
        }
    }
    debug!("Found {} candidate groups", groups.len());
    groups.into_iter().map(|(_, group)| group).collect()
}

/// Partitions the board into disjoint candidate groups, each named by a different category
pub fn solve(puzzle: &Puzzle, categories: &[Category]) -> SolveResult<Vec<Group>> {
    let groups = candidate_groups(puzzle, categories);
    let word_count = puzzle.words().len();
    let mut by_word = vec![Vec::new(); word_count];
    for (i, group) in groups.iter().enumerate() {
        for (word, containing) in by_word.iter_mut().enumerate() {
            if group.mask & 1 << word != 0 {
                containing.push(i);
            }
        }
    }
    let state = GroupingState {
        groups: &groups,
        by_word: &by_word,
        full: ((1u32 << word_count) - 1) as u16,
        covered: 0,
        chosen: Vec::new(),
    };
    solve::solve(state)
}

#[derive(Clone)]
struct GroupingState<'a> {
    groups: &'a [Group],
    /// the groups containing each word
    by_word: &'a [Vec<usize>],
    full: u16,
    covered: u16,
    chosen: Vec<usize>,
}

impl GroupingState<'_> {
    fn fits(&self, group: usize) -> bool {
        if self.groups[group].mask & self.covered != 0 {
            return false;
        }
        let mut options: Vec<&[usize]> = self
            .chosen
            .iter()
            .map(|&g| self.groups[g].category_ids.as_slice())
            .collect();
        options.push(&self.groups[group].category_ids);
        assign_categories(&options, &mut Vec::new())
    }

    /// The uncovered word in the fewest groups that still fit, and those groups
    fn most_constrained_word(&self) -> Option<Vec<usize>> {
        (0..self.by_word.len())
            .filter(|&word| self.covered & 1 << word == 0)
            .map(|word| {
                self.by_word[word]
                    .iter()
                    .copied()
                    .filter(|&g| self.fits(g))
                    .collect::<Vec<_>>()
            })
            .min_by_key(Vec::len)
    }

    fn choose(&mut self, group: usize) {
        self.covered |= self.groups[group].mask;
        self.chosen.push(group);
    }
}

/// Returns true if each group can be named by a category no other group is named by
fn assign_categories(options: &[&[usize]], used: &mut Vec<usize>) -> bool {
    match options.split_first() {
        None => true,
        Some((first, rest)) => first.iter().any(|&category| {
            if used.contains(&category) {
                return false;
            }
            used.push(category);
            let assigned = assign_categories(rest, used);
            used.pop();
            assigned
        }),
    }
}

impl Search for GroupingState<'_> {
    type Guess = usize;
    type Solution = Vec<Group>;

    fn propagate(&mut self) -> PropagateResult<Vec<Group>> {
        loop {
            if self.covered == self.full {
                let groups = self
                    .chosen
                    .iter()
                    .map(|&g| self.groups[g].clone())
                    .collect();
                return PropagateResult::Solved(groups);
            }
            match self.most_constrained_word() {
                Some(options) if options.is_empty() => return PropagateResult::Invalid,
                Some(options) if options.len() == 1 => self.choose(options[0]),
                _ => return PropagateResult::Unsolved,
            }
        }
    }

    fn guesses(&self) -> Vec<usize> {
        self.most_constrained_word().unwrap_or_default()
    }

    fn apply_guess(&mut self, group: usize) {
        self.choose(group);
    }
}
