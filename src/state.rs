#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineState {
    Idle,     // No pool loaded yet
    Running,  // Pool loaded, timer armed
    TornDown, // Timer released, updates are ignored
}
