/// Optional narrowing of a position aggregate.
///
/// Text filters match case-insensitively anywhere in the target column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerFilter {
    #[default]
    All,
    Conference(String),
    Team(String),
    Name(String),
}

impl PlayerFilter {
    /// Column the filter text is matched against, `None` for [`PlayerFilter::All`]
    /// or when the text is empty.
    pub fn column(&self) -> Option<&'static str> {
        self.text()?;

        match self {
            Self::All => None,
            Self::Conference(_) => Some("t.conference"),
            Self::Team(_) => Some("t.team"),
            Self::Name(_) => Some("p.name"),
        }
    }

    /// Filter text, `None` when absent or empty. Whitespace is significant.
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            Self::All => return None,
            Self::Conference(text) | Self::Team(text) | Self::Name(text) => text.as_str(),
        };

        (!text.is_empty()).then_some(text)
    }
}
