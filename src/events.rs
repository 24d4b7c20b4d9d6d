/// Things the user can ask for while the simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Stop or resume advancing generations. The current frame stays on screen.
    TogglePause,

    /// Exit the application
    Exit,
}
