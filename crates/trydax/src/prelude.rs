pub use anstream::eprintln as aeprintln;

/// Tokyo Night color palette
pub mod colors {
    pub const RESET: &str = "\x1b[0m";

    pub const TKN_RED: &str = "\x1b[38;2;247;118;142m"; // #f7768e
}

/// Red text, for diagnostics. `anstream` strips the escapes when stderr
/// is not a terminal.
pub fn p_r(text: &str) -> String {
    format!("{}{}{}", colors::TKN_RED, text, colors::RESET)
}
