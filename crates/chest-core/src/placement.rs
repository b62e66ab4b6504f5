use crate::error::TransitionError;
use glam::Vec3;

/// Two-stage placement flow: scan the surface, then tap the ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementState {
    #[default]
    Idle,
    Scanned,
    Placed,
}

impl PlacementState {
    #[inline]
    pub fn surface_scanned(self) -> bool {
        !matches!(self, PlacementState::Idle)
    }

    #[inline]
    pub fn chest_placed(self) -> bool {
        matches!(self, PlacementState::Placed)
    }

    pub fn scan(self) -> Result<Self, TransitionError> {
        match self {
            PlacementState::Idle => Ok(PlacementState::Scanned),
            PlacementState::Scanned | PlacementState::Placed => {
                Err(TransitionError::AlreadyScanned)
            }
        }
    }

    /// Place the chest at `hit`. `None` means the tap missed the ground plane.
    pub fn place(self, hit: Option<Vec3>) -> Result<(Self, Vec3), TransitionError> {
        match (self, hit) {
            (PlacementState::Idle, _) => Err(TransitionError::NotScanned),
            (PlacementState::Placed, _) => Err(TransitionError::AlreadyPlaced),
            (PlacementState::Scanned, None) => Err(TransitionError::MissedGround),
            (PlacementState::Scanned, Some(point)) => Ok((PlacementState::Placed, point)),
        }
    }
}
