//! RNG module - where new pieces come from
//!
//! Every spawn picks one of the seven catalog kinds uniformly at random. There is no
//! bag and no fairness guarantee; streaks are allowed.
//!
//! A deterministic LCG keeps runs reproducible from a seed, and [`ScriptedPieces`]
//! replays a fixed sequence for tests and demos.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High 16 bits only; the low bits of an LCG have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplier of the next piece kind to spawn
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;

    /// Return to the beginning of the sequence (called on restart)
    fn reset(&mut self) {}
}

/// Uniform random pieces from a seeded LCG.
///
/// Restarting continues the random stream; only a new seed repeats a game.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Repeats a fixed sequence of kinds forever
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    sequence: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieces {
    /// An empty sequence falls back to `O` pieces.
    pub fn new(sequence: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut sequence: Vec<PieceKind> = sequence.into_iter().collect();
        if sequence.is_empty() {
            sequence.push(PieceKind::O);
        }
        Self { sequence, next: 0 }
    }

    /// The same kind every time
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.next % self.sequence.len()];
        self.next = (self.next + 1) % self.sequence.len();
        kind
    }

    fn reset(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_random_pieces_cover_catalog() {
        let mut source = RandomPieces::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[(source.next_piece().cell() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "{seen:?}");
    }

    #[test]
    fn test_random_pieces_same_seed_same_sequence() {
        let mut a = RandomPieces::new(99);
        let mut b = RandomPieces::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_scripted_pieces_cycle_and_reset() {
        let mut source = ScriptedPieces::new([PieceKind::I, PieceKind::O]);
        assert_eq!(source.next_piece(), PieceKind::I);
        assert_eq!(source.next_piece(), PieceKind::O);
        assert_eq!(source.next_piece(), PieceKind::I);
        source.reset();
        assert_eq!(source.next_piece(), PieceKind::I);
    }

    #[test]
    fn test_scripted_pieces_empty_falls_back() {
        let mut source = ScriptedPieces::new(Vec::new());
        assert_eq!(source.next_piece(), PieceKind::O);
    }
}
