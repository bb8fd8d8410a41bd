//! Die faces: the injectable random source and its implementations.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees the `DiceSource` trait
//! - **Deterministic**: `GameRng` replays the same faces for the same seed
//! - **Scriptable**: `ScriptedDice` feeds a fixed face sequence for tests
//!
//! ```
//! use pig_engine::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_face().unwrap(), b.next_face().unwrap());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use super::error::DiceError;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Face that forfeits the turn.
pub const FORFEIT_FACE: u8 = 1;

/// A source of uniformly distributed die faces in `1..=DIE_FACES`.
pub trait DiceSource {
    /// Draw the next face.
    ///
    /// Implementations report exhaustion or malformed faces as `DiceError`;
    /// the engine propagates these to its caller untouched.
    fn next_face(&mut self) -> Result<u8, DiceError>;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn next_face(&mut self) -> Result<u8, DiceError> {
        (**self).next_face()
    }
}

/// Seeded die backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for GameRng {
    fn next_face(&mut self) -> Result<u8, DiceError> {
        Ok(self.inner.gen_range(1..=DIE_FACES))
    }
}

/// Fixed face sequence, consumed front to back.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
    drawn: usize,
}

impl ScriptedDice {
    /// Script the given faces.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Append more faces to the end of the script.
    pub fn extend(&mut self, faces: impl IntoIterator<Item = u8>) {
        self.faces.extend(faces);
    }

    /// Faces left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn next_face(&mut self) -> Result<u8, DiceError> {
        let face = self
            .faces
            .pop_front()
            .ok_or(DiceError::Exhausted { drawn: self.drawn })?;
        self.drawn += 1;
        if !(1..=DIE_FACES).contains(&face) {
            return Err(DiceError::FaceOutOfRange { face });
        }
        Ok(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_face().unwrap(), rng2.next_face().unwrap());
        }
    }

    #[test]
    fn test_faces_cover_the_die() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; DIE_FACES as usize];

        for _ in 0..600 {
            let face = rng.next_face().unwrap();
            assert!((1..=DIE_FACES).contains(&face));
            seen[(face - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_replays_a_match() {
        let mut rng = GameRng::new(42);
        let played: Vec<_> = (0..50).map(|_| rng.next_face().unwrap()).collect();

        let mut replay = GameRng::new(rng.seed());
        let replayed: Vec<_> = (0..50).map(|_| replay.next_face().unwrap()).collect();

        assert_eq!(played, replayed);
    }

    #[test]
    fn test_scripted_dice_in_order() {
        let mut dice = ScriptedDice::new([3, 6, 1]);
        assert_eq!(dice.remaining(), 3);
        assert_eq!(dice.next_face(), Ok(3));
        assert_eq!(dice.next_face(), Ok(6));
        assert_eq!(dice.next_face(), Ok(1));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_scripted_dice_exhausted() {
        let mut dice = ScriptedDice::new([2]);
        dice.next_face().unwrap();
        assert_eq!(dice.next_face(), Err(DiceError::Exhausted { drawn: 1 }));
    }

    #[test]
    fn test_scripted_dice_rejects_bad_face() {
        let mut dice = ScriptedDice::new([0, 7]);
        assert_eq!(dice.next_face(), Err(DiceError::FaceOutOfRange { face: 0 }));
        assert_eq!(dice.next_face(), Err(DiceError::FaceOutOfRange { face: 7 }));
    }

    #[test]
    fn test_boxed_source() {
        let mut dice: Box<dyn DiceSource> = Box::new(ScriptedDice::new([4]));
        assert_eq!(dice.next_face(), Ok(4));
    }
}
