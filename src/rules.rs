use crate::cell::CellState;

/// Neighbor counts that turn a dead cell alive, one bit per count. Only `3`.
const BIRTHS: u16 = 0b0_0000_1000;

/// Neighbor counts that keep a live cell alive, one bit per count. `2` and `3`.
const SURVIVALS: u16 = 0b0_0000_1100;

/// Apply the rules of Conway's Game of Life (b3/s23) to a single cell.
///
/// `neighbors` is the live neighbor count, which is at most 8 on any grid. Counts are stored as
/// bits the same way rulestrings are (bit `i` on means `i` is in the set).
///
/// See: https://conwaylife.com/wiki/Rulestring
pub fn next_state(cell: CellState, neighbors: u8) -> CellState {
    debug_assert!(neighbors <= 8, "a cell has at most 8 neighbors");

    let count = 1u16 << neighbors;

    let mask = match cell {
        CellState::Alive => SURVIVALS,
        CellState::Dead => BIRTHS,
    };

    CellState::from(count & mask == count)
}
