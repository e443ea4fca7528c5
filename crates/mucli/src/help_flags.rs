//! Extraction of the `-h` / `-hh` help flags from command arguments.

/// Which help a user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpMode {
    /// `-h`: machine-readable JSON.
    Json,
    /// `-hh`: human-readable text.
    Text,
}

impl HelpMode {
    /// Parses a single help flag.
    pub fn from_flag(arg: &str) -> Option<Self> {
        match arg {
            "-h" => Some(HelpMode::Json),
            "-hh" => Some(HelpMode::Text),
            _ => None,
        }
    }
}

/// Removes every help flag from `args`.
///
/// Returns the requested mode, if any, and the remaining arguments in order. `-hh` takes
/// precedence when both flags are present.
pub fn split_help_flags(args: &[String]) -> (Option<HelpMode>, Vec<String>) {
    let mut mode = None;
    let mut remaining = Vec::with_capacity(args.len());
    for arg in args {
        match HelpMode::from_flag(arg) {
            Some(HelpMode::Text) => mode = Some(HelpMode::Text),
            Some(HelpMode::Json) => {
                if mode.is_none() {
                    mode = Some(HelpMode::Json);
                }
            }
            None => remaining.push(arg.clone()),
        }
    }
    (mode, remaining)
}
