//! Subset construction over character ranges, plus trimming.

use super::error::CompileError;
use super::nfa::Nfa;
use crate::builder::AutomatonBuilder;
use crate::core::{Automaton, CharRange, StateId};
use std::collections::{BTreeSet, HashMap, VecDeque};

type StateSet = BTreeSet<usize>;

fn closure(nfa: &Nfa, seeds: impl IntoIterator<Item = usize>) -> StateSet {
    let mut set = StateSet::new();
    let mut stack: Vec<usize> = seeds.into_iter().collect();
    while let Some(s) = stack.pop() {
        if set.insert(s) {
            stack.extend(nfa.states[s].epsilon.iter().copied());
        }
    }
    set
}

/// Split the outgoing edges of a subset into disjoint intervals, each with
/// the set of NFA states it leads to. Adjacent intervals leading to the
/// same set are merged.
fn partition(nfa: &Nfa, set: &StateSet) -> Vec<(u32, u32, StateSet)> {
    let edges: Vec<(u32, u32, usize)> = set
        .iter()
        .flat_map(|&s| nfa.states[s].edges.iter())
        .map(|&(range, to)| (range.min as u32, range.max as u32, to))
        .collect();

    let mut points: BTreeSet<u32> = BTreeSet::new();
    for &(lo, hi, _) in &edges {
        points.insert(lo);
        points.insert(hi + 1);
    }
    let points: Vec<u32> = points.into_iter().collect();

    let mut out: Vec<(u32, u32, StateSet)> = Vec::new();
    for window in points.windows(2) {
        let (lo, hi) = (window[0], window[1] - 1);
        let targets: StateSet = edges
            .iter()
            .filter(|&&(min, max, _)| min <= lo && hi <= max)
            .map(|&(_, _, to)| to)
            .collect();
        if targets.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.1 + 1 == lo && last.2 == targets => last.1 = hi,
            _ => out.push((lo, hi, targets)),
        }
    }
    out
}

/// Determinize `nfa`, failing once more than `max_states` states are needed.
pub fn determinize(nfa: &Nfa, max_states: usize) -> Result<Automaton, CompileError> {
    let mut builder = AutomatonBuilder::new();
    let mut ids: HashMap<StateSet, StateId> = HashMap::new();
    let mut queue: VecDeque<(StateSet, StateId)> = VecDeque::new();

    let start = closure(nfa, [nfa.start]);
    let start_id = builder.add_state(start.contains(&nfa.accept));
    ids.insert(start.clone(), start_id);
    queue.push_back((start, start_id));

    while let Some((set, from)) = queue.pop_front() {
        for (lo, hi, targets) in partition(nfa, &set) {
            let Some(range) = CharRange::from_scalars(lo, hi) else {
                continue;
            };
            let next = closure(nfa, targets);
            let to = match ids.get(&next) {
                Some(&id) => id,
                None => {
                    if builder.state_count() >= max_states {
                        return Err(CompileError::TooManyStates { limit: max_states });
                    }
                    let id = builder.add_state(next.contains(&nfa.accept));
                    ids.insert(next.clone(), id);
                    queue.push_back((next, id));
                    id
                }
            };
            builder.add_transition(from, range, to);
        }
    }

    Ok(builder.initial(start_id).build()?)
}

/// Drop states that cannot reach an accepting state. The initial state is
/// always kept, so an empty language yields a single non-accepting state.
pub fn trim(automaton: &Automaton) -> Result<Automaton, CompileError> {
    let live = automaton.live_states();
    let mut remap: Vec<Option<StateId>> = vec![None; automaton.len()];
    let mut builder = AutomatonBuilder::new();

    let initial = automaton.initial();
    let new_initial = builder.add_state(automaton.initial_state().is_accepting());
    remap[initial.index()] = Some(new_initial);
    for (id, state) in automaton.states() {
        if live[id.index()] && id != initial {
            remap[id.index()] = Some(builder.add_state(state.is_accepting()));
        }
    }

    for (id, state) in automaton.states() {
        let Some(from) = remap[id.index()] else {
            continue;
        };
        for t in state.transitions() {
            if let Some(to) = remap[t.to.index()].filter(|_| live[t.to.index()]) {
                builder.add_transition(from, t.range(), to);
            }
        }
    }

    Ok(builder.initial(new_initial).build()?)
}
