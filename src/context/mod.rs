/*!
A context, to coordinate a knowledge base.

A context owns the stored clauses, the configuration, and the selected entailment strategy, and is the intended interface to the library.

Clauses go in through [tell](Context::tell) as text or [tell_expression](Context::tell_expression) as trees; either way they are normalised to conjunctive normal form on entry, and the store only ever holds CNF conjuncts, in insertion order.
Queries go through [ask](Context::ask) once a strategy has been selected with [use_strategy](Context::use_strategy), and answer with a three-valued [Answer].

```rust
# use clausal::context::Context;
# use clausal::reports::Answer;
# use clausal::strategies::StrategyKind;
let mut the_context = Context::default();
the_context.use_strategy(StrategyKind::Resolution);

the_context.tell("P").unwrap();
the_context.tell("P => Q").unwrap();

assert_eq!(the_context.ask("Q"), Ok(Answer::True));
```
*/

use crate::{
    cnf::to_cnf,
    config::Config,
    misc::log::targets::{self},
    parser::parse,
    reports::Answer,
    strategies::{Entailment, StrategyKind},
    structures::expression::Expression,
    types::err::{ContextError, ErrorKind},
};

/// A knowledge base with a configuration and, once selected, an entailment strategy.
pub struct Context {
    /// Configuration of the context, in particular the search budgets.
    pub config: Config,

    /// The stored clauses, each a CNF conjunct, in insertion order.
    clauses: Vec<Expression>,

    /// The selected strategy, if any.
    strategy: Option<Box<dyn Entailment>>,
}

impl Context {
    /// A context from some given configuration, with no clauses and no strategy.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            clauses: Vec::new(),
            strategy: None,
        }
    }

    /// Select the strategy used to answer queries.
    ///
    /// The fresh strategy receives the current clauses, so a selection may be made before or after the knowledge base is filled, and remade at any point.
    pub fn use_strategy(&mut self, kind: StrategyKind) {
        log::debug!(target: targets::CONTEXT, "strategy selected: {kind}");
        let mut strategy = kind.strategy(&self.config);
        strategy.model_update(&self.clauses);
        self.strategy = Some(strategy);
    }

    /// Parse and store a clause.
    ///
    /// The clause is normalised to conjunctive normal form and each conjunct stored separately, so `knowledge` afterwards contains the conjuncts rather than the written text.
    pub fn tell(&mut self, clause: &str) -> Result<(), ErrorKind> {
        let expression = parse(clause)?;
        self.tell_expression(expression);
        Ok(())
    }

    /// Store a clause given as a tree.
    pub fn tell_expression(&mut self, expression: Expression) {
        let conjuncts = to_cnf(expression);
        log::debug!(
            target: targets::CONTEXT,
            "told {} conjunct(s): {:?}",
            conjuncts.len(),
            conjuncts.iter().map(|c| c.to_string()).collect::<Vec<_>>()
        );
        self.clauses.extend(conjuncts);
        self.refresh_strategy();
    }

    /// Parse and store a sequence of clauses.
    ///
    /// All clauses are parsed before any is stored --- a parse failure anywhere leaves the knowledge base untouched.
    pub fn tell_more<'c>(
        &mut self,
        clauses: impl IntoIterator<Item = &'c str>,
    ) -> Result<(), ErrorKind> {
        let mut expressions = Vec::new();
        for clause in clauses {
            expressions.push(parse(clause)?);
        }
        for expression in expressions {
            self.tell_expression(expression);
        }
        Ok(())
    }

    /// Parse a clause and remove its conjuncts from the store.
    ///
    /// Matching is by rendered text: a stored clause is removed exactly when its rendering equals a conjunct's rendering.
    /// In particular the rendering of `A | B` differs from that of `B | A`, and retracting one does not remove the other.
    pub fn retract(&mut self, clause: &str) -> Result<(), ErrorKind> {
        let expression = parse(clause)?;
        self.retract_expression(expression);
        Ok(())
    }

    /// Remove the conjuncts of a clause given as a tree.
    pub fn retract_expression(&mut self, expression: Expression) {
        let retracted: Vec<String> = to_cnf(expression)
            .iter()
            .map(|conjunct| conjunct.to_string())
            .collect();
        log::debug!(target: targets::CONTEXT, "retracting: {retracted:?}");

        self.clauses
            .retain(|stored| !retracted.contains(&stored.to_string()));
        self.refresh_strategy();
    }

    /// Parse a sequence of clauses and remove their conjuncts from the store.
    ///
    /// As with [tell_more](Context::tell_more), a parse failure anywhere leaves the knowledge base untouched.
    pub fn retract_more<'c>(
        &mut self,
        clauses: impl IntoIterator<Item = &'c str>,
    ) -> Result<(), ErrorKind> {
        let mut expressions = Vec::new();
        for clause in clauses {
            expressions.push(parse(clause)?);
        }
        for expression in expressions {
            self.retract_expression(expression);
        }
        Ok(())
    }

    /// Parse a query and ask whether the knowledge base entails it.
    pub fn ask(&mut self, query: &str) -> Result<Answer, ErrorKind> {
        let expression = parse(query)?;
        self.ask_expression(expression)
    }

    /// Ask whether the knowledge base entails a query given as a tree.
    ///
    /// [Answer::Unknown] exactly when the knowledge base is empty; an error if no strategy has been selected.
    pub fn ask_expression(&mut self, query: Expression) -> Result<Answer, ErrorKind> {
        let strategy = self
            .strategy
            .as_mut()
            .ok_or(ContextError::StrategyUnselected)?;

        let conjuncts = to_cnf(query);
        let verdict = strategy.entails(&conjuncts)?;
        Ok(Answer::from(verdict))
    }

    /// The rendered forms of the stored clauses, in insertion order.
    pub fn knowledge(&self) -> impl Iterator<Item = String> + '_ {
        self.clauses.iter().map(|clause| clause.to_string())
    }

    /// The number of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    fn refresh_strategy(&mut self) {
        if let Some(strategy) = &mut self.strategy {
            strategy.model_update(&self.clauses);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
