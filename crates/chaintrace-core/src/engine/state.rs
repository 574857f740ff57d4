#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReducerState {
    Running,
    Done,
}

/// What happened during one reduction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionStep {
    /// 1-based step number.
    pub step: usize,
    /// Identifier of the point that was peeled.
    pub id: String,
    /// Number of points still live after the removal.
    pub remaining: usize,
    /// Whether the three-point shortcut picked this point without any degree test.
    pub terminal_shortcut: bool,
}

/// Identifiers in the order the reducer peeled them.
pub type RecoveredOrder = Vec<String>;
