use std::fmt;

pub const NO_TITLE_FOUND: &str = "No title found.";
pub const ERROR_PREFIX: &str = "An error occurred: ";

/// Result of a title scrape, kept as a variant until it is rendered for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    Found(String),
    NotFound,
    Failed(String),
}

impl TitleOutcome {
    pub fn from_title(title: Option<String>) -> Self {
        match title {
            Some(title) => TitleOutcome::Found(title),
            None => TitleOutcome::NotFound,
        }
    }

    /// Keeps the whole context chain of the error, outermost first.
    pub fn from_error(error: &anyhow::Error) -> Self {
        TitleOutcome::Failed(format!("{:#}", error))
    }
}

impl fmt::Display for TitleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleOutcome::Found(title) => f.write_str(title),
            TitleOutcome::NotFound => f.write_str(NO_TITLE_FOUND),
            TitleOutcome::Failed(reason) => write!(f, "{}{}", ERROR_PREFIX, reason),
        }
    }
}
