use ft_auth::{Navigator, Surface};

/// Reports navigations; a terminal has no page to replace.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl TerminalNavigator {
    pub fn new() -> Self {
        Self
    }
}

pub fn navigation_line(surface: Surface) -> String {
    format!("-> {} ({surface})", surface.entry_page())
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, surface: Surface) {
        println!("{}", navigation_line(surface));
    }
}
