//! First-class invariants over the game history.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are testable independently and checked in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !<$inv as Invariant<S>>::holds(state) {
                        violations.push(InvariantViolation::new(<$inv as Invariant<S>>::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod empty_root;
pub mod no_move_after_win;
pub mod single_mark;
pub mod step_in_bounds;

pub use empty_root::EmptyRootInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use single_mark::SingleMarkPerStepInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyRootInvariant,
    StepInBoundsInvariant,
    SingleMarkPerStepInvariant,
    NoMoveAfterWinInvariant,
);
