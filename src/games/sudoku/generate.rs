use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::constants::SUDOKU_GENERATE_ATTEMPTS;
use crate::games::sudoku::{solve, Board};

/// Generates a puzzle with a unique solution by filling a board at random and
/// blanking each cell with probability `percent_to_remove`
pub fn generate<R: Rng + ?Sized>(
    size: usize,
    percent_to_remove: f64,
    rng: &mut R,
) -> Result<Board> {
    if !(0.0..=1.0).contains(&percent_to_remove) {
        bail!("percent to remove must be between 0 and 1, found {}", percent_to_remove);
    }
    for attempt in 1..=SUDOKU_GENERATE_ATTEMPTS {
        debug!("Generating a Sudoku, attempt {}", attempt);
        let mut board = Board::empty(size)?;
        if !fill(&mut board, 0, &mut *rng) {
            bail!("cannot fill a Sudoku of size {}", size);
        }
        for cell in 0..size * size {
            if rng.gen_bool(percent_to_remove) {
                board.set(cell, 0);
            }
        }
        if solve(&board).is_solved() {
            info!("Generated a Sudoku after {} attempts", attempt);
            return Ok(board);
        }
    }
    bail!(
        "no Sudoku with a unique solution found in {} attempts",
        SUDOKU_GENERATE_ATTEMPTS
    )
}

fn fill<R: Rng + ?Sized>(board: &mut Board, cell: usize, rng: &mut R) -> bool {
    if cell == board.cells().len() {
        return true;
    }
    let coord = board.cells().coord_at(cell);
    let mut values: Vec<_> = board.valid_numbers(coord).iter().collect();
    values.shuffle(&mut *rng);
    for value in values {
        board.set(cell, value);
        if fill(board, cell + 1, &mut *rng) {
            return true;
        }
    }
    board.set(cell, 0);
    false
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::constants::SUDOKU_GENERATE_ATTEMPTS;
    use crate::games::sudoku::{generate, solve};

    #[test]
    fn generated_puzzle_is_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = generate(4, 0.4, &mut rng).unwrap();
        assert_eq!(4, board.size());
        let result = solve(&board);
        assert!(result.solved().unwrap().solution.is_solved());
    }

    #[test]
    fn full_board_when_nothing_removed() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = generate(9, 0.0, &mut rng).unwrap();
        assert_eq!(0, board.empty_count());
        assert!(board.is_solved());
    }

    #[test]
    fn gives_up_without_unique_puzzle() {
        let mut rng = StdRng::seed_from_u64(3);
        let e = generate(4, 1.0, &mut rng).unwrap_err();
        assert_eq!(
            format!(
                "no Sudoku with a unique solution found in {} attempts",
                SUDOKU_GENERATE_ATTEMPTS
            ),
            e.to_string()
        );
    }

    #[test]
    fn bad_percent() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(4, 1.5, &mut rng).is_err());
    }
}
