/// The environment's light/dark preference
pub trait AmbientTheme {
    /// `Some(true)` if the environment prefers dark, `None` if unknown
    fn prefers_dark(&self) -> Option<bool>;
}

/// Terminal preference: a configured override, else the `COLORFGBG`
/// convention (`"<fg>;<bg>"` with ANSI color indices).
#[derive(Debug, Clone, Default)]
pub struct TerminalAmbient {
    configured: Option<String>,
    colorfgbg: Option<String>,
}

impl TerminalAmbient {
    pub fn new(configured: Option<String>, colorfgbg: Option<String>) -> Self {
        TerminalAmbient {
            configured,
            colorfgbg,
        }
    }

    /// Read `COLORFGBG` from the process environment
    pub fn from_env(configured: Option<String>) -> Self {
        TerminalAmbient::new(configured, std::env::var("COLORFGBG").ok())
    }
}

impl AmbientTheme for TerminalAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        match self.configured.as_deref().map(str::trim) {
            Some("dark") => return Some(true),
            Some("light") => return Some(false),
            _ => {}
        }
        self.colorfgbg.as_deref().and_then(parse_colorfgbg)
    }
}

/// A fixed answer, for tests and non-interactive use
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAmbient(pub Option<bool>);

impl AmbientTheme for FixedAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Interpret `COLORFGBG`. The background is the last field; white-ish
/// indices (7 and 9-15) mean a light terminal.
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(!(bg == 7 || (9..=15).contains(&bg)))
}
