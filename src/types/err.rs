//! Error types used in the library.
//!
//! Each area of the library notes its failures in a dedicated enum, gathered under [ErrorKind] for the context-level methods which cross areas.
//!
//! All of these are fatal to the call which raised them and surface immediately --- nothing is swallowed or retried.
//! An entailment query answering *unknown* is not an error; see [Answer](crate::reports::Answer).

/// Any error raised by a context-level operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse(ParseError),
    Clause(ClauseError),
    Entails(EntailsError),
    Context(ContextError),
}

/// Noted errors while parsing a clause.
///
/// The clause is rejected wholesale --- a parse error never commits anything to a knowledge base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// An empty string, where a clause was required.
    Empty,

    /// A character which is neither a symbol character, an operator character, a parenthesis, nor whitespace.
    IllegalCharacter(char),

    /// A character run which does not form one of `~`, `&`, `|`, `=>`, `<=>`.
    MalformedOperator(String),

    /// Parentheses which do not balance.
    UnbalancedParenthesis,

    /// A token which cannot continue the clause at its position.
    UnexpectedToken(String),

    /// An operator with no right-hand operand.
    DanglingOperator(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors while canonicalising a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClauseError {
    /// A disjunct which is neither a literal nor a negated literal.
    /// Cannot arise for a clause produced by [to_cnf](crate::cnf::to_cnf).
    NonLiteralDisjunct(String),
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Noted errors while answering an entailment query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntailsError {
    /// The query uses a symbol no stored clause constrains, so no truth table over the knowledge base can evaluate it.
    /// Raised by the truth table strategy only --- resolution has no closed symbol universe to check against.
    UnknownSymbol(String),

    /// The search exceeded the budget set in the [Config](crate::config::Config).
    /// Recoverable: the query is abandoned, the knowledge base is untouched.
    BudgetExhausted,

    /// A stored clause failed to canonicalise.
    Clause(ClauseError),
}

impl From<ClauseError> for EntailsError {
    fn from(e: ClauseError) -> Self {
        EntailsError::Clause(e)
    }
}

impl From<EntailsError> for ErrorKind {
    fn from(e: EntailsError) -> Self {
        ErrorKind::Entails(e)
    }
}

/// Noted errors in the use of a [Context](crate::context::Context).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextError {
    /// A query was asked before any strategy was selected.
    StrategyUnselected,

    /// A strategy identifier which names no known strategy.
    UnknownStrategy(String),
}

impl From<ContextError> for ErrorKind {
    fn from(e: ContextError) -> Self {
        ErrorKind::Context(e)
    }
}
