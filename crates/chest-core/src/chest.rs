use crate::error::TransitionError;
use crate::placement::PlacementState;

/// Lifecycle of a placed chest from closed to armed-for-reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChestState {
    #[default]
    Closed,
    /// Lid animating; reward not yet shown.
    Opening,
    /// Reward revealed.
    Open,
    /// Open control relabeled; the next press resets the session.
    ResetArmed,
}

impl ChestState {
    #[inline]
    pub fn is_open(self) -> bool {
        !matches!(self, ChestState::Closed)
    }

    pub fn open(self, placement: PlacementState) -> Result<Self, TransitionError> {
        if !placement.chest_placed() {
            return Err(TransitionError::NotPlaced);
        }
        match self {
            ChestState::Closed => Ok(ChestState::Opening),
            _ => Err(TransitionError::AlreadyOpen),
        }
    }

    pub fn reveal(self) -> Result<Self, TransitionError> {
        match self {
            ChestState::Opening => Ok(ChestState::Open),
            _ => Err(TransitionError::NotOpening),
        }
    }

    pub fn arm_reset(self) -> Result<Self, TransitionError> {
        match self {
            ChestState::Open => Ok(ChestState::ResetArmed),
            _ => Err(TransitionError::NotRevealed),
        }
    }

    pub fn reset(self) -> Result<Self, TransitionError> {
        match self {
            ChestState::ResetArmed => Ok(ChestState::Closed),
            _ => Err(TransitionError::NotArmed),
        }
    }
}
