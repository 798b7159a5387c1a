use std::fmt;

// Raw host key names that do not simply lowercase into their token.
macro_rules! raw_key_map {
    ( $raw:expr, $( $from:expr => $to:expr, )* ) => {
        match $raw {
            $( $from => Some($to), )*
            _ => None,
        }
    };
}

/// A normalized key name.
///
/// Tokens are always lowercase. Equality is plain string equality, so two
/// tokens compare equal exactly when they name the same key after
/// normalization.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct KeyToken(String);

impl KeyToken {
    /// Normalize a raw host key name into a token.
    ///
    /// - `" "` becomes `space`
    /// - `Control` becomes `ctrl`
    /// - `Escape` becomes `esc`
    /// - anything else is lower-cased verbatim
    pub fn from_raw(raw: &str) -> Self {
        let mapped = raw_key_map!(raw,
            " " => "space",
            "Control" => "ctrl",
            "Escape" => "esc",
        );
        match mapped {
            Some(tok) => Self(tok.to_string()),
            None => Self(raw.to_lowercase()),
        }
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyToken {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries() {
        assert_eq!(KeyToken::from_raw(" ").as_str(), "space");
        assert_eq!(KeyToken::from_raw("Control").as_str(), "ctrl");
        assert_eq!(KeyToken::from_raw("Escape").as_str(), "esc");
    }

    #[test]
    fn everything_else_lowercases() {
        assert_eq!(KeyToken::from_raw("Shift").as_str(), "shift");
        assert_eq!(KeyToken::from_raw("P").as_str(), "p");
        assert_eq!(KeyToken::from_raw("ArrowUp").as_str(), "arrowup");
        // Only the exact host spelling is aliased.
        assert_eq!(KeyToken::from_raw("CONTROL").as_str(), "control");
        assert_eq!(KeyToken::from_raw("ctrl").as_str(), "ctrl");
    }
}
