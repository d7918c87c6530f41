/*!
The truth table strategy.

A model of the knowledge base is built by enumerating every truth assignment over the symbols of the stored clauses and keeping those on which every clause is true.
A query is then entailed exactly when it is true on every kept assignment.

The model is discarded on every [model_update](super::Entailment::model_update) and rebuilt on the next query, so a query never reads a table built over clauses since retracted or extended.

Enumeration is exponential in the number of distinct symbols, and is refused with [BudgetExhausted](crate::types::err::EntailsError::BudgetExhausted) when `2^symbols` exceeds the configured assignment limit.
*/

use std::collections::{BTreeSet, HashMap};

use crate::{
    config::Config,
    misc::log::targets::{self},
    strategies::{conjoin, Entailment},
    structures::expression::Expression,
    types::err::EntailsError,
};

/// The satisfying assignments of a clause set.
struct Model {
    /// The distinct symbols of the clause set, in sorted order.
    symbols: Vec<String>,

    /// Every assignment over `symbols` on which each clause is true.
    satisfying: Vec<HashMap<String, bool>>,
}

/// Entailment by truth table enumeration.
pub struct TruthTable {
    clauses: Vec<Expression>,
    model: Option<Model>,
    assignment_limit: usize,
}

impl TruthTable {
    pub fn new(config: &Config) -> Self {
        TruthTable {
            clauses: Vec::new(),
            model: None,
            assignment_limit: config.assignment_limit,
        }
    }

    /// Build the model of the current clauses.
    fn build_model(&self) -> Result<Model, EntailsError> {
        let symbols: BTreeSet<String> = self
            .clauses
            .iter()
            .flat_map(|clause| clause.symbols())
            .collect();
        let symbols: Vec<String> = symbols.into_iter().collect();

        let count = 1_usize
            .checked_shl(symbols.len() as u32)
            .filter(|count| *count <= self.assignment_limit)
            .ok_or(EntailsError::BudgetExhausted)?;

        log::debug!(
            target: targets::TRUTH_TABLE,
            "building a model: {} symbols, {count} assignments",
            symbols.len()
        );

        let mut satisfying = Vec::new();
        'assignments: for index in 0..count {
            let assignment: HashMap<String, bool> = symbols
                .iter()
                .enumerate()
                .map(|(position, symbol)| (symbol.clone(), (index >> position) & 1 == 1))
                .collect();

            for clause in &self.clauses {
                if clause.value_on(&assignment) != Some(true) {
                    continue 'assignments;
                }
            }
            satisfying.push(assignment);
        }

        log::debug!(
            target: targets::TRUTH_TABLE,
            "{} of {count} assignments satisfy the clauses",
            satisfying.len()
        );

        Ok(Model {
            symbols,
            satisfying,
        })
    }
}

impl Entailment for TruthTable {
    fn model_update(&mut self, clauses: &[Expression]) {
        self.clauses = clauses.to_vec();
        self.model = None;
    }

    fn entails(&mut self, conjuncts: &[Expression]) -> Result<Option<bool>, EntailsError> {
        if self.clauses.is_empty() {
            return Ok(None);
        }

        let query = match conjoin(conjuncts) {
            Some(query) => query,
            None => return Ok(None),
        };

        if self.model.is_none() {
            self.model = Some(self.build_model()?);
        }
        let Some(model) = &self.model else {
            return Ok(None);
        };

        for symbol in query.symbols() {
            if !model.symbols.contains(&symbol) {
                return Err(EntailsError::UnknownSymbol(symbol));
            }
        }

        // An unsatisfiable clause set has no assignment on which the query could hold.
        if model.satisfying.is_empty() {
            return Ok(Some(false));
        }

        for assignment in &model.satisfying {
            if query.value_on(assignment) != Some(true) {
                return Ok(Some(false));
            }
        }

        Ok(Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cnf::to_cnf, parser::parse};

    fn clauses(texts: &[&str]) -> Vec<Expression> {
        texts
            .iter()
            .flat_map(|text| to_cnf(parse(text).expect("parse failure")))
            .collect()
    }

    fn query(strategy: &mut TruthTable, text: &str) -> Result<Option<bool>, EntailsError> {
        let conjuncts = to_cnf(parse(text).expect("parse failure"));
        strategy.entails(&conjuncts)
    }

    #[test]
    fn modus_ponens() {
        let mut strategy = TruthTable::new(&Config::default());
        strategy.model_update(&clauses(&["P", "P => Q"]));

        assert_eq!(query(&mut strategy, "Q"), Ok(Some(true)));
        assert_eq!(query(&mut strategy, "~Q"), Ok(Some(false)));
    }

    #[test]
    fn no_clauses_no_answer() {
        let mut strategy = TruthTable::new(&Config::default());
        assert_eq!(query(&mut strategy, "Q"), Ok(None));
    }

    #[test]
    fn unknown_symbols_are_refused() {
        let mut strategy = TruthTable::new(&Config::default());
        strategy.model_update(&clauses(&["P"]));

        assert_eq!(
            query(&mut strategy, "P & Z"),
            Err(EntailsError::UnknownSymbol("Z".to_string()))
        );
    }

    #[test]
    fn an_unsatisfiable_base_entails_nothing() {
        let mut strategy = TruthTable::new(&Config::default());
        strategy.model_update(&clauses(&["P", "~P"]));

        assert_eq!(query(&mut strategy, "P"), Ok(Some(false)));
    }

    #[test]
    fn the_model_follows_updates() {
        let mut strategy = TruthTable::new(&Config::default());
        strategy.model_update(&clauses(&["P"]));
        assert_eq!(query(&mut strategy, "P"), Ok(Some(true)));

        strategy.model_update(&clauses(&["~P"]));
        assert_eq!(query(&mut strategy, "P"), Ok(Some(false)));
    }

    #[test]
    fn the_assignment_limit_is_respected() {
        let config = Config {
            assignment_limit: 4,
            ..Config::default()
        };
        let mut strategy = TruthTable::new(&config);
        strategy.model_update(&clauses(&["A | B | C"]));

        assert_eq!(query(&mut strategy, "A"), Err(EntailsError::BudgetExhausted));
    }
}
