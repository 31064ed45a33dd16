/// Errors reported when a planner is called with input it cannot work with.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PlannerError {
    #[error("board has no empty squares to play")]
    NoLegalMoves,
    #[error("hand contains no dice")]
    EmptyHand,
    #[error("dice must have at least one side")]
    NoDieSides,
    #[error("die face {face} is outside 1..={sides}")]
    FaceOutOfRange { face: u8, sides: u8 },
}
