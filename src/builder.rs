use log::{debug, trace};

use crate::{
    ast::AstNode,
    common::Incrementer,
    cond::{Cond, Symbol},
    nfa::{Nfa, StateId},
};

/// Thompson construction. `build` consumes the builder, so its state counter
/// serves exactly one construction. Names follow the post-order of the tree.
pub(crate) struct Builder {
    state_ids: Incrementer,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self {
            state_ids: Incrementer::new_from(0),
        }
    }

    pub(crate) fn build(mut self, ast: &AstNode) -> Nfa {
        let nfa = self.generate(ast);
        debug_assert!(nfa.is_closed(), "dangling state in {:?}", nfa);

        debug!(
            "Built NFA with {} states, {} transitions, start {}",
            nfa.states.len(),
            nfa.transition_count(),
            nfa.start_state
        );
        nfa
    }

    fn generate(&mut self, node: &AstNode) -> Nfa {
        let nfa = match node {
            AstNode::Leaf(c) => self.leaf(Symbol::Char(*c)),
            AstNode::AnyChar => self.leaf(Symbol::AnyChar),
            AstNode::Concatenation(left, right) => {
                let first = self.generate(left);
                let second = self.generate(right);
                Self::concatenate(first, second)
            }
            AstNode::Or(left, right) => {
                let first = self.generate(left);
                let second = self.generate(right);
                self.alternate(first, second)
            }
            AstNode::Star(inner) => {
                let body = self.generate(inner);
                self.star(body)
            }
        };

        trace!(
            "Fragment {} -> {:?} ({} states)",
            nfa.start_state,
            nfa.accept_states,
            nfa.states.len()
        );
        nfa
    }

    fn fresh_state(&mut self) -> StateId {
        StateId(self.state_ids.get())
    }

    fn leaf(&mut self, symbol: Symbol) -> Nfa {
        let start = self.fresh_state();
        let accept = self.fresh_state();

        let mut nfa = Nfa::starting_at(start);
        nfa.add_transition(start, Cond::Symbol(symbol), accept);
        nfa.push_accept(accept);
        nfa
    }

    fn concatenate(mut first: Nfa, second: Nfa) -> Nfa {
        let bridges = std::mem::take(&mut first.accept_states);
        let next_start = second.start_state;
        let accept_states = second.accept_states.clone();

        first.absorb(second);
        for state in bridges {
            first.add_transition(state, Cond::Epsilon, next_start);
        }
        first.accept_states = accept_states;

        first
    }

    fn alternate(&mut self, first: Nfa, second: Nfa) -> Nfa {
        let start = self.fresh_state();
        let accept = self.fresh_state();

        let mut nfa = Nfa::starting_at(start);
        nfa.add_transition(start, Cond::Epsilon, first.start_state);
        nfa.add_transition(start, Cond::Epsilon, second.start_state);

        let exits = first
            .accept_states
            .iter()
            .chain(second.accept_states.iter())
            .copied()
            .collect::<Vec<_>>();

        nfa.absorb(first);
        nfa.absorb(second);
        for state in exits {
            nfa.redirect(state, vec![accept]);
        }
        nfa.push_accept(accept);

        nfa
    }

    fn star(&mut self, body: Nfa) -> Nfa {
        let start = self.fresh_state();
        let accept = self.fresh_state();

        let mut nfa = Nfa::starting_at(start);
        nfa.add_transition(start, Cond::Epsilon, body.start_state);
        nfa.add_transition(start, Cond::Epsilon, accept);

        let loop_start = body.start_state;
        let exits = body.accept_states.clone();

        nfa.absorb(body);
        for state in exits {
            nfa.redirect(state, vec![loop_start, accept]);
        }
        nfa.push_accept(accept);

        nfa
    }
}
