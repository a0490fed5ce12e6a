use crossterm::style::Color;

/// Design tokens for jobprune output.
///
/// Status tags are fixed text (`[KEPT]`, `[DELETED]`, ...) so scripts can
/// grep them; colour is only ever added on top.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod tags {
    pub const KEPT: &str = "[KEPT]";
    pub const DELETED: &str = "[DELETED]";
    pub const WOULD_DELETE: &str = "[WOULD DELETE]";
    pub const ERROR: &str = "[ERROR]";
    pub const ABORTED: &str = "[ABORTED]";
    pub const WARNING: &str = "[WARN]";
}
