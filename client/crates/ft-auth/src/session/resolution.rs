use crate::session::{navigation::Navigation, session_state::SessionState, surface::Surface};

/// Session state plus the navigation it implies for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub state: SessionState,
    pub surface: Surface,
    pub navigation: Navigation,
}

impl Resolution {
    pub fn new(state: SessionState, surface: Surface) -> Self {
        Self {
            state,
            surface,
            navigation: Navigation::decide(state, surface),
        }
    }
}
