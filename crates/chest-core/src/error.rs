use thiserror::Error;

/// Reasons a requested state transition was refused.
///
/// Refusals are ordinary control flow: the caller logs them and leaves the
/// session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("surface has already been scanned")]
    AlreadyScanned,
    #[error("surface has not been scanned yet")]
    NotScanned,
    #[error("chest is already placed")]
    AlreadyPlaced,
    #[error("tap did not hit the ground plane")]
    MissedGround,
    #[error("no chest has been placed")]
    NotPlaced,
    #[error("chest is already open")]
    AlreadyOpen,
    #[error("chest is not opening")]
    NotOpening,
    #[error("reward has not been revealed")]
    NotRevealed,
    #[error("chest is not armed for reset")]
    NotArmed,
}
