use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Serialize, Serializer};

use crate::cond::{Cond, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct StateId(pub(crate) u64);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl Serialize for StateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) type TransitionTable = BTreeMap<StateId, BTreeMap<Cond, Vec<StateId>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Nfa {
    #[serde(rename = "States")]
    pub(crate) states: Vec<StateId>,
    #[serde(rename = "Alphabet")]
    pub(crate) alphabet: BTreeSet<Symbol>,
    #[serde(rename = "Transitions")]
    pub(crate) transitions: TransitionTable,
    #[serde(rename = "Start State")]
    pub(crate) start_state: StateId,
    #[serde(rename = "Accept States")]
    pub(crate) accept_states: BTreeSet<StateId>,
}

impl Nfa {
    pub(crate) fn starting_at(start_state: StateId) -> Self {
        Self {
            states: vec![start_state],
            alphabet: BTreeSet::new(),
            transitions: BTreeMap::new(),
            start_state,
            accept_states: BTreeSet::new(),
        }
    }

    pub(crate) fn push_accept(&mut self, state: StateId) {
        self.states.push(state);
        self.accept_states.insert(state);
    }

    pub(crate) fn add_transition(&mut self, from: StateId, cond: Cond, to: StateId) {
        if let Cond::Symbol(symbol) = cond {
            self.alphabet.insert(symbol);
        }

        self.transitions
            .entry(from)
            .or_default()
            .entry(cond)
            .or_default()
            .push(to);
    }

    /// Drops the existing row of `from`.
    pub(crate) fn redirect(&mut self, from: StateId, targets: Vec<StateId>) {
        self.transitions.insert(from, BTreeMap::from([(Cond::Epsilon, targets)]));
    }

    /// Start and accept states of `other` are left for the caller to wire.
    pub(crate) fn absorb(&mut self, other: Nfa) {
        self.states.extend(other.states);
        self.alphabet.extend(other.alphabet);

        for (from, row) in other.transitions {
            let merged = self.transitions.entry(from).or_default();
            for (cond, mut targets) in row {
                merged.entry(cond).or_default().append(&mut targets);
            }
        }
    }

    pub(crate) fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|row| row.values())
            .map(Vec::len)
            .sum()
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (StateId, Cond, StateId)> + '_ {
        self.transitions.iter().flat_map(|(from, row)| {
            row.iter()
                .flat_map(move |(cond, targets)| targets.iter().map(move |to| (*from, *cond, *to)))
        })
    }

    pub(crate) fn is_closed(&self) -> bool {
        let known = self.states.iter().collect::<BTreeSet<_>>();

        known.contains(&self.start_state)
            && !self.accept_states.is_empty()
            && self.accept_states.iter().all(|s| known.contains(s))
            && self
                .edges()
                .all(|(from, _, to)| known.contains(&from) && known.contains(&to))
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::{
        cond::{Cond, Symbol},
        nfa::{Nfa, StateId},
    };

    fn leaf(symbol: char, first: u64) -> Nfa {
        let mut nfa = Nfa::starting_at(StateId(first));
        nfa.add_transition(
            StateId(first),
            Cond::Symbol(Symbol::Char(symbol)),
            StateId(first + 1),
        );
        nfa.push_accept(StateId(first + 1));
        nfa
    }

    #[test]
    fn test_add_transition_merges() {
        let mut nfa = leaf('a', 0);
        nfa.add_transition(StateId(1), Cond::Epsilon, StateId(0));
        nfa.add_transition(StateId(1), Cond::Epsilon, StateId(1));

        assert_eq!(
            Some(&vec![StateId(0), StateId(1)]),
            nfa.transitions[&StateId(1)].get(&Cond::Epsilon)
        );
        assert_eq!(3, nfa.transition_count());
    }

    #[test]
    fn test_redirect_replaces_row() {
        let mut nfa = leaf('a', 0);
        nfa.redirect(StateId(0), vec![StateId(1)]);

        assert_eq!(
            BTreeMap::from([(Cond::Epsilon, vec![StateId(1)])]),
            nfa.transitions[&StateId(0)]
        );
        // The symbol stays in the alphabet, only the row changes.
        assert!(nfa.alphabet.contains(&Symbol::Char('a')));
    }

    #[test]
    fn test_absorb() {
        let mut nfa = leaf('a', 0);
        nfa.absorb(leaf('b', 2));

        assert_eq!(vec![StateId(0), StateId(1), StateId(2), StateId(3)], nfa.states);
        assert_eq!(2, nfa.alphabet.len());
        assert_eq!(2, nfa.transition_count());
        assert_eq!(StateId(0), nfa.start_state);
        assert!(nfa.is_closed());
    }

    #[test]
    fn test_is_closed() {
        let mut nfa = leaf('a', 0);
        assert!(nfa.is_closed());

        nfa.add_transition(StateId(1), Cond::Epsilon, StateId(9));
        assert!(!nfa.is_closed());

        let open = Nfa::starting_at(StateId(0));
        assert!(!open.is_closed());
    }

    #[test]
    fn test_json_shape() {
        let mut nfa = leaf('a', 0);
        nfa.add_transition(StateId(1), Cond::Epsilon, StateId(0));

        assert_eq!(
            json!({
                "States": ["q0", "q1"],
                "Alphabet": ["a"],
                "Transitions": {
                    "q0": { "a": ["q1"] },
                    "q1": { "": ["q0"] }
                },
                "Start State": "q0",
                "Accept States": ["q1"]
            }),
            serde_json::to_value(&nfa).unwrap()
        );
    }

    #[test]
    fn test_json_state_order_is_numeric() {
        let mut nfa = leaf('a', 2);
        nfa.absorb(leaf('b', 10));

        let text = serde_json::to_string(&nfa).unwrap();
        let q2 = text.find("\"q2\":").unwrap();
        let q10 = text.find("\"q10\":").unwrap();
        assert!(q2 < q10);
    }
}
