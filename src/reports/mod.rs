/*!
Reports for the context.
*/

/// The three-valued answer to an entailment query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Answer {
    /// The knowledge base does not entail the query.
    False,

    /// The knowledge base entails the query.
    True,

    /// The knowledge base is empty, so no answer is possible.
    Unknown,
}

impl From<Option<bool>> for Answer {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Answer::True,
            Some(false) => Answer::False,
            None => Answer::Unknown,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::False => write!(f, "False"),
            Answer::True => write!(f, "True"),
            Answer::Unknown => write!(f, "Unknown"),
        }
    }
}
