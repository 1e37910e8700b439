//! States, events and the transition table of the session.

/// Session states. `MainMenu` is initial, `Exit` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    MainMenu,
    InputPoints,
    ProcessOperation,
    FunctionalDemo,
    Exit,
}

impl State {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self == State::Exit
    }
}

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddPoints,
    Process,
    Demo,
    ShowPoints,
    ShowResult,
    ClearPoints,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddPoints,
        MenuChoice::Process,
        MenuChoice::Demo,
        MenuChoice::ShowPoints,
        MenuChoice::ShowResult,
        MenuChoice::ClearPoints,
        MenuChoice::Quit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::AddPoints => "1",
            MenuChoice::Process => "2",
            MenuChoice::Demo => "3",
            MenuChoice::ShowPoints => "4",
            MenuChoice::ShowResult => "5",
            MenuChoice::ClearPoints => "6",
            MenuChoice::Quit => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddPoints => "Add points",
            MenuChoice::Process => "Run an operation",
            MenuChoice::Demo => "Functional demo",
            MenuChoice::ShowPoints => "Show points",
            MenuChoice::ShowResult => "Show last result",
            MenuChoice::ClearPoints => "Clear points",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Menu key, or `q`/`quit`/`exit` for quitting.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if matches!(token, "q" | "quit" | "exit") {
            return Some(MenuChoice::Quit);
        }
        Self::ALL.into_iter().find(|c| c.key() == token)
    }

    /// Choices that need at least one point before they are accepted.
    pub fn needs_points(self) -> bool {
        matches!(self, MenuChoice::Process | MenuChoice::Demo)
    }
}

/// Outcome of one state handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Accepted main-menu choice.
    Selected(MenuChoice),
    /// Unknown token, or a choice whose precondition failed.
    Rejected,
    /// The state finished its work (successfully or with a reported error).
    Done,
    /// The input stream is closed.
    EndOfInput,
}

/// The only place where the session changes state.
pub fn transition(state: State, event: Event) -> State {
    use MenuChoice as C;
    match (state, event) {
        (State::Exit, _) | (_, Event::EndOfInput) => State::Exit,
        (State::MainMenu, Event::Selected(choice)) => match choice {
            C::AddPoints => State::InputPoints,
            C::Process => State::ProcessOperation,
            C::Demo => State::FunctionalDemo,
            C::Quit => State::Exit,
            C::ShowPoints | C::ShowResult | C::ClearPoints => State::MainMenu,
        },
        (State::MainMenu, Event::Rejected | Event::Done) => State::MainMenu,
        (State::InputPoints | State::ProcessOperation | State::FunctionalDemo, _) => {
            State::MainMenu
        }
    }
}
