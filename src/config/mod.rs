/*!
Configuration of a context.

Both entailment strategies run searches which are finite but exponential in the worst case: truth table construction enumerates every assignment over the knowledge base's symbols, and resolution saturates the space of derivable clauses.
Neither is given free rein --- each is bounded by a budget from the configuration, and a query which exceeds its budget fails with a recoverable [BudgetExhausted](crate::types::err::EntailsError::BudgetExhausted) error rather than hanging.
*/

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The greatest number of truth assignments the truth table strategy will enumerate when building a model.
    /// A knowledge base over `k` symbols requires `2^k` assignments.
    pub assignment_limit: usize,

    /// The greatest number of saturation rounds the resolution strategy will run for a single query.
    pub round_limit: usize,
}

impl Default for Config {
    /// Generous defaults: up to twenty symbols for the truth table, and more rounds than any knowledge base of that size can use.
    fn default() -> Self {
        Config {
            assignment_limit: 1 << 20,
            round_limit: 1 << 10,
        }
    }
}
