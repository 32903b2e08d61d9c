use crate::CellState;
use std::sync::OnceLock;

/// Live neighbor counts range over `0..=8`
const NEIGHBOR_COUNTS: usize = 9;
/// Next state indexed by `[currently alive][live neighbors]`
type RuleTable = [[CellState; NEIGHBOR_COUNTS]; 2];

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn get_rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

/// Creates the B3/S23 lookup table
///
/// A live cell survives with 2 or 3 live neighbors, a dead cell is born
/// with exactly 3. Every other combination is dead.
pub(super) fn generate_rule_table() -> RuleTable {
    let mut table = [[CellState::Dead; NEIGHBOR_COUNTS]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (neighbors, next) in row.iter_mut().enumerate() {
            *next = match (alive == 1, neighbors) {
                (true, 2) | (_, 3) => CellState::Alive,
                _ => CellState::Dead,
            };
        }
    }
    table
}

/// The state a cell takes in the next generation
///
/// `neighbors` is clamped to 8, the most a cell can have.
#[inline]
pub fn next_state(state: CellState, neighbors: u8) -> CellState {
    let neighbors = usize::from(neighbors).min(NEIGHBOR_COUNTS - 1);
    get_rule_table()[usize::from(state.is_alive())][neighbors]
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Alive, Dead};

    #[test]
    fn rules_match_conway_life() {
        assert_eq!(next_state(Alive, 2), Alive);
        assert_eq!(next_state(Alive, 3), Alive);
        assert_eq!(next_state(Dead, 3), Alive);

        assert_eq!(next_state(Alive, 0), Dead);
        assert_eq!(next_state(Alive, 1), Dead);
        assert_eq!(next_state(Alive, 4), Dead);
        assert_eq!(next_state(Alive, 8), Dead);
        assert_eq!(next_state(Dead, 2), Dead);
        assert_eq!(next_state(Dead, 4), Dead);
    }

    #[test]
    fn only_three_neighbors_give_birth() {
        let table = generate_rule_table();
        let births: Vec<_> = (0..NEIGHBOR_COUNTS)
            .filter(|&n| table[0][n] == Alive)
            .collect();

        assert_eq!(births, vec![3]);
    }

    #[test]
    fn survivors_need_two_or_three() {
        let table = generate_rule_table();
        let survivors: Vec<_> = (0..NEIGHBOR_COUNTS)
            .filter(|&n| table[1][n] == Alive)
            .collect();

        assert_eq!(survivors, vec![2, 3]);
    }
}
