/// Which path completed an auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Remote,
    Local,
}
