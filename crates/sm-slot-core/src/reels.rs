//! Reel window and strip cursors

use rand::Rng;

use crate::config::SpinPolicy;
use crate::symbols::{Alphabet, SymbolId};

/// Number of reel columns.
pub const REEL_COUNT: usize = 3;
/// Visible rows per reel.
pub const ROW_COUNT: usize = 3;
/// The fixed payline: the middle row.
pub const PAYLINE_ROW: usize = 1;

/// The visible 3x3 symbol window plus one strip cursor per reel.
///
/// Row 0 is the top of the window; spinning shifts each column down and
/// feeds the new symbol in at the top. Cursors track the virtual circular
/// band position and are only advanced under the mechanical policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelBank {
    grid: [[SymbolId; ROW_COUNT]; REEL_COUNT],
    cursors: [usize; REEL_COUNT],
}

impl ReelBank {
    /// Populate a fresh window before any spins occur.
    pub fn initialise<R: Rng>(alphabet: &Alphabet, policy: SpinPolicy, rng: &mut R) -> Self {
        let band = alphabet.len();
        let mut grid = [[0 as SymbolId; ROW_COUNT]; REEL_COUNT];
        let mut cursors = [0usize; REEL_COUNT];

        match policy {
            SpinPolicy::Mechanical => {
                for reel in 0..REEL_COUNT {
                    let cursor = rng.random_range(0..band);
                    cursors[reel] = cursor;
                    for row in 0..ROW_COUNT {
                        grid[reel][row] = ((cursor + row) % band) as SymbolId;
                    }
                }
            }
            SpinPolicy::Electronic => {
                for column in grid.iter_mut() {
                    for cell in column.iter_mut() {
                        *cell = rng.random_range(0..band) as SymbolId;
                    }
                }
            }
        }

        Self { grid, cursors }
    }

    /// Build a bank around a fixed window, for rigged evaluations in tests.
    pub fn with_grid(grid: [[SymbolId; ROW_COUNT]; REEL_COUNT]) -> Self {
        Self {
            grid,
            cursors: [0; REEL_COUNT],
        }
    }

    /// Advance one reel by a single spin step: shift the column down a row
    /// and feed the next symbol in at the top.
    pub fn step_reel<R: Rng>(
        &mut self,
        reel: usize,
        alphabet: &Alphabet,
        policy: SpinPolicy,
        rng: &mut R,
    ) {
        let band = alphabet.len();
        let column = &mut self.grid[reel];
        for row in (1..ROW_COUNT).rev() {
            column[row] = column[row - 1];
        }
        column[0] = match policy {
            SpinPolicy::Mechanical => {
                self.cursors[reel] = (self.cursors[reel] + 1) % band;
                self.cursors[reel] as SymbolId
            }
            SpinPolicy::Electronic => rng.random_range(0..band) as SymbolId,
        };
    }

    /// Symbols on the middle payline, left to right.
    pub fn payline(&self) -> [SymbolId; REEL_COUNT] {
        [
            self.grid[0][PAYLINE_ROW],
            self.grid[1][PAYLINE_ROW],
            self.grid[2][PAYLINE_ROW],
        ]
    }

    /// The full window, indexed `[reel][row]`.
    pub fn grid(&self) -> &[[SymbolId; ROW_COUNT]; REEL_COUNT] {
        &self.grid
    }

    pub fn symbol_at(&self, reel: usize, row: usize) -> SymbolId {
        self.grid[reel][row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mechanical_initialise_is_consecutive() {
        let alphabet = Alphabet::classic();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bank = ReelBank::initialise(&alphabet, SpinPolicy::Mechanical, &mut rng);

        let band = alphabet.len() as SymbolId;
        for reel in 0..REEL_COUNT {
            let top = bank.symbol_at(reel, 0);
            assert_eq!(bank.symbol_at(reel, 1), (top + 1) % band);
            assert_eq!(bank.symbol_at(reel, 2), (top + 2) % band);
        }
    }

    #[test]
    fn test_electronic_initialise_stays_in_alphabet() {
        let alphabet = Alphabet::classic();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let bank = ReelBank::initialise(&alphabet, SpinPolicy::Electronic, &mut rng);

        for column in bank.grid() {
            for &cell in column {
                assert!((cell as usize) < alphabet.len());
            }
        }
    }

    #[test]
    fn test_mechanical_step_shifts_and_advances_cursor() {
        let alphabet = Alphabet::classic();
        let band = alphabet.len() as SymbolId;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut bank = ReelBank::initialise(&alphabet, SpinPolicy::Mechanical, &mut rng);

        let before = *bank.grid();
        bank.step_reel(0, &alphabet, SpinPolicy::Mechanical, &mut rng);

        assert_eq!(bank.symbol_at(0, 0), (before[0][0] + 1) % band);
        assert_eq!(bank.symbol_at(0, 1), before[0][0]);
        assert_eq!(bank.symbol_at(0, 2), before[0][1]);
        // Other reels untouched
        assert_eq!(bank.grid()[1], before[1]);
        assert_eq!(bank.grid()[2], before[2]);
    }

    #[test]
    fn test_payline_reads_middle_row() {
        let bank = ReelBank::with_grid([[0, 6, 1], [2, 6, 3], [4, 6, 5]]);
        assert_eq!(bank.payline(), [6, 6, 6]);
    }
}
