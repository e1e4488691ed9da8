use core::fmt;

/// Session lifecycle states. `Initial` exists only while a session is being
/// constructed; a freshly built `Session` is already in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initial,
    MainMenu,
    RunningGame,
    GameOver,
    Quit,
}

impl SessionState {
    pub const fn as_str(self) -> &'static str {
        match self {
            SessionState::Initial => "Initial",
            SessionState::MainMenu => "MainMenu",
            SessionState::RunningGame => "RunningGame",
            SessionState::GameOver => "GameOver",
            SessionState::Quit => "Quit",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    StartGame,
    FinishGame,
    ReturnToMenu,
    QuitGame,
}

impl SessionInput {
    pub const fn as_str(self) -> &'static str {
        match self {
            SessionInput::StartGame => "StartGame",
            SessionInput::FinishGame => "FinishGame",
            SessionInput::ReturnToMenu => "ReturnToMenu",
            SessionInput::QuitGame => "QuitGame",
        }
    }
}

impl fmt::Display for SessionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision returned by the menu prompt collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub state: SessionState,
    pub input: SessionInput,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input {} is not valid in state {}", self.input, self.state)
    }
}

impl std::error::Error for InvalidTransition {}

/// The entry actions of the session states, injected so round play,
/// prompting, and shutdown stay pluggable.
pub trait SessionIo {
    /// Main-menu prompt. Implementations re-prompt until they can return a
    /// definite choice; the machine never sees raw input.
    fn main_menu(&mut self) -> MenuChoice;

    /// Plays one round; returning signals the round is complete.
    fn play_round(&mut self);

    /// Presents the end-of-round summary.
    fn round_summary(&mut self);

    /// Invoked once on entering the terminal state.
    fn shutdown(&mut self);
}

/// Deterministic finite-state machine for one play session. Each
/// (state, input) pair has at most one transition; everything else is an
/// `InvalidTransition`, never a silent no-op.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Builds a session and performs the Initial → MainMenu self-transition,
    /// so `Initial` is never observable from outside.
    pub fn new() -> Self {
        Self {
            state: SessionState::MainMenu,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Quit
    }

    pub fn apply(&mut self, input: SessionInput) -> Result<SessionState, InvalidTransition> {
        let next = match (self.state, input) {
            (SessionState::MainMenu, SessionInput::StartGame) => SessionState::RunningGame,
            (SessionState::MainMenu, SessionInput::QuitGame) => SessionState::Quit,
            (SessionState::RunningGame, SessionInput::FinishGame) => SessionState::GameOver,
            (SessionState::GameOver, SessionInput::ReturnToMenu) => SessionState::MainMenu,
            (state, input) => return Err(InvalidTransition { state, input }),
        };
        self.state = next;
        Ok(next)
    }

    /// Drives the machine until it quits, invoking the entry action of each
    /// state and feeding the resulting input back in.
    pub fn run<I: SessionIo>(&mut self, io: &mut I) -> Result<(), InvalidTransition> {
        loop {
            match self.state {
                SessionState::Initial => self.state = SessionState::MainMenu,
                SessionState::MainMenu => {
                    let input = match io.main_menu() {
                        MenuChoice::Play => SessionInput::StartGame,
                        MenuChoice::Quit => SessionInput::QuitGame,
                    };
                    self.apply(input)?;
                }
                SessionState::RunningGame => {
                    io.play_round();
                    self.apply(SessionInput::FinishGame)?;
                }
                SessionState::GameOver => {
                    io.round_summary();
                    self.apply(SessionInput::ReturnToMenu)?;
                }
                SessionState::Quit => {
                    io.shutdown();
                    return Ok(());
                }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
