/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made at the decision points of the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [parser](crate::parser).
    pub const PARSER: &str = "parser";

    /// Logs related to [normalisation](crate::cnf).
    pub const CNF: &str = "cnf";

    /// Logs related to the [truth table strategy](crate::strategies::truth_table).
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to the [resolution strategy](crate::strategies::resolution).
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [context](crate::context).
    pub const CONTEXT: &str = "context";
}
