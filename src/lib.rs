/*!
A library for building and querying propositional knowledge bases.

Clauses are written in a small infix syntax over case-insensitive alphanumeric symbols, with negation `~`, conjunction `&`, disjunction `|`, implication `=>`, and the biconditional `<=>`.
Told clauses are normalised to conjunctive normal form on entry, and entailment queries are answered by a selectable strategy: truth table enumeration or resolution refutation.

# Example

```rust
use clausal::{context::Context, reports::Answer, strategies::StrategyKind};

let mut the_context = Context::default();
the_context.use_strategy(StrategyKind::TruthTable);

// It is raining, and rain implies a wet lawn.
the_context.tell("RAIN").unwrap();
the_context.tell("RAIN => WET").unwrap();

assert_eq!(the_context.ask("WET"), Ok(Answer::True));
assert_eq!(the_context.ask("~WET"), Ok(Answer::False));
```

# Structure

At a high level, the library is made of:

- [Expression trees](crate::structures::expression), the parsed form of a clause.
- [A parser](crate::parser) from the written syntax to expression trees.
- [Normalisation](crate::cnf) of an expression to conjunctive normal form.
- [Canonical clauses](crate::structures::clause), the order-invariant form used during resolution.
- [Strategies](crate::strategies) for answering entailment queries.
- [A context](crate::context), tying the store, configuration, and strategy together.

Logs are made via the [log] crate, though no logger is supplied.
*/

pub mod cnf;
pub mod config;
pub mod context;
pub mod misc;
pub mod parser;
pub mod reports;
pub mod strategies;
pub mod structures;
pub mod types;
