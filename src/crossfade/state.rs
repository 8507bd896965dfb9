#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossfadePhase {
    PreRolling, // Hidden surface holds the next symbol, waiting to be revealed
    Settling,   // Flip done, waiting before the next pre-load
}
