use crate::error::InvalidPuzzle;
use crate::games::kenken::{CellId, Value};

/// The `Operator` enum represents each of the possible math operators
/// that can be in a cage.
#[derive(Copy, Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Nop,
}

impl Operator {
    /// Retrieve the character representation of the symbol
    pub fn symbol(self) -> Option<char> {
        let symbol = match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Nop => return None,
        };
        Some(symbol)
    }

    /// Retrieve an `Operator` from its corresponding symbol
    pub fn from_symbol(c: char) -> Option<Operator> {
        let o = match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            _ => return None,
        };
        Some(o)
    }
}

/// A cage in a KenKen puzzle
///
/// Every cell in a KenKen puzzle belongs to a cage.
/// Every cage has an operator and a target number.
#[derive(Debug, PartialEq)]
pub struct Cage {
    /// The cells in the cage, sorted
    cell_ids: Box<[CellId]>,
    operator: Operator,
    /// The number that the operator must produce from the values in the cage
    target: Value,
}

impl Cage {
    pub fn new(
        cell_ids: impl Into<Box<[CellId]>>,
        operator: Operator,
        target: Value,
    ) -> Result<Self, InvalidPuzzle> {
        let mut cell_ids = cell_ids.into();
        cell_ids.sort_unstable();
        let cage = Cage {
            cell_ids,
            operator,
            target,
        };
        validate(&cage)?;
        Ok(cage)
    }

    pub fn target(&self) -> Value {
        self.target
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn cell_ids(&self) -> &[CellId] {
        &self.cell_ids
    }

    /// Returns true if `values`, one per cell, produce the target
    pub fn is_satisfied(&self, values: &[Value]) -> bool {
        if values.len() != self.cell_ids.len() {
            return false;
        }
        match (self.operator, values) {
            (Operator::Add, _) => values.iter().sum::<Value>() == self.target,
            (Operator::Multiply, _) => product(values) == Some(self.target),
            (Operator::Subtract, &[a, b]) => a.max(b) - a.min(b) == self.target,
            (Operator::Divide, &[a, b]) => a.min(b) * self.target == a.max(b),
            (Operator::Nop, &[a]) => a == self.target,
            _ => false,
        }
    }

    /// Returns false if the first values of the cage already rule out the target,
    /// with `remaining` cells still to fill
    pub(crate) fn could_complete(&self, values: &[Value], remaining: usize) -> bool {
        match self.operator {
            Operator::Add => values.iter().sum::<Value>() + remaining <= self.target,
            Operator::Multiply => {
                product(values).map_or(false, |product| self.target % product == 0)
            }
            _ => true,
        }
    }
}

fn product(values: &[Value]) -> Option<Value> {
    values
        .iter()
        .try_fold(1, |product: Value, &value| product.checked_mul(value))
}

fn validate(cage: &Cage) -> Result<(), InvalidPuzzle> {
    if cage.target == 0 {
        return Err(InvalidPuzzle::new("cage target must be positive".into()));
    }
    match cage.cell_ids().len() {
        0 => return Err(InvalidPuzzle::new("cage cell_ids must not be empty".into())),
        1 => {
            if let Some(symbol) = cage.operator.symbol() {
                return Err(InvalidPuzzle::new(format!(
                    "cage operator ({}) must have more than one cell",
                    symbol
                )));
            }
        }
        len => match cage.operator {
            Operator::Nop => {
                return Err(InvalidPuzzle::new(
                    "cage with multiple cells must have an operator".into(),
                ))
            }
            Operator::Subtract | Operator::Divide if len != 2 => {
                return Err(InvalidPuzzle::new(format!(
                    "cage operator ({}) must have exactly two cells, found {}",
                    cage.operator.symbol().unwrap_or(' '),
                    len
                )))
            }
            _ => (),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::games::kenken::{Cage, Operator};

    #[test]
    fn operator_requires_cells() {
        assert!(Cage::new(vec![0], Operator::Add, 3).is_err());
        assert!(Cage::new(vec![0, 1], Operator::Nop, 3).is_err());
        assert!(Cage::new(vec![0, 1, 2], Operator::Subtract, 1).is_err());
        assert!(Cage::new(vec![0, 1, 2], Operator::Divide, 2).is_err());
        assert!(Cage::new(vec![0], Operator::Nop, 0).is_err());
        assert!(Cage::new(vec![1, 0], Operator::Divide, 2).is_ok());
    }

    #[test]
    fn cells_are_sorted() {
        let cage = Cage::new(vec![5, 1, 4], Operator::Add, 6).unwrap();
        assert_eq!(&[1, 4, 5], cage.cell_ids());
    }

    #[test]
    fn is_satisfied() {
        let cage = Cage::new(vec![0, 1], Operator::Subtract, 2).unwrap();
        assert!(cage.is_satisfied(&[1, 3]));
        assert!(cage.is_satisfied(&[3, 1]));
        assert!(!cage.is_satisfied(&[2, 3]));
        let cage = Cage::new(vec![0, 1], Operator::Divide, 2).unwrap();
        assert!(cage.is_satisfied(&[4, 2]));
        assert!(!cage.is_satisfied(&[3, 2]));
        let cage = Cage::new(vec![0, 1, 2], Operator::Multiply, 12).unwrap();
        assert!(cage.is_satisfied(&[1, 3, 4]));
        assert!(!cage.is_satisfied(&[1, 3]));
    }

    #[test]
    fn could_complete() {
        let cage = Cage::new(vec![0, 1, 2], Operator::Add, 6).unwrap();
        assert!(cage.could_complete(&[4], 2));
        assert!(!cage.could_complete(&[4, 2], 1));
        let cage = Cage::new(vec![0, 1, 2], Operator::Multiply, 12).unwrap();
        assert!(cage.could_complete(&[3], 2));
        assert!(!cage.could_complete(&[5], 2));
    }
}
