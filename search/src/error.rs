use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchError {
    /// Some move from the position has never been tried.
    NotEnoughInformation,
    /// The search produced no move, for example with a depth of zero.
    NoMove,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            SearchError::NotEnoughInformation => "not every move has been explored, search for longer",
            SearchError::NoMove => "the search did not produce a move",
        })
    }
}

impl Error for SearchError {}
