use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A uniform random source for die draws.
pub trait Roller {
    /// Returns a uniformly distributed integer in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Deterministic roller: returns `initial`, `initial + step`, ... wrapped
    /// into `1..=sides`. A step of 0 pins every draw to the same face.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: UInt, step: UInt) -> Self {
            assert!(initial > 0);
            Self {
                current: initial,
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn roll(&mut self, sides: NonZeroUInt) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_step_roller_wraps() {
            let mut roller = StepRoller::new(1, 1);
            let sides = NonZeroUInt::new(6).unwrap();
            let draws: Vec<_> = (0..8).map(|_| roller.roll(sides)).collect();
            assert_eq!(draws, vec![1, 2, 3, 4, 5, 6, 1, 2]);
        }

        #[test]
        fn test_step_roller_constant() {
            let mut roller = StepRoller::new(4, 0);
            let sides = NonZeroUInt::new(12).unwrap();
            assert_eq!(roller.roll(sides), 4);
            assert_eq!(roller.roll(sides), 4);
        }
    }
}
