/// Side effects requested by event handling, run by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The coin was tapped; run the mounted click handler.
    Click,
    Quit,
}
