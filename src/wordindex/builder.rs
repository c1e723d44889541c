use crate::tiles::Label;
use std::collections::HashMap;

/// A state under construction: outgoing edges in insertion order and the accepting flag.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub(super) struct State {
    pub(super) edges: Vec<(Label, u32)>,
    pub(super) accepting: bool,
}

impl State {
    fn child(&self, label: Label) -> Option<u32> {
        self.edges
            .iter()
            .rev()
            .find(|&&(l, _)| l == label)
            .map(|&(_, target)| target)
    }
}

/// Incremental construction of a minimal acyclic automaton from sorted words
/// (Daciuk, Mihov, Watson and Watson, 2000).
///
/// Only the path of the previous word is unregistered. When a new word leaves that path, the
/// abandoned branch is minimized bottom up: every state is either replaced by an equal state
/// from the register, or registered itself. Replaced states stay behind in the arena as
/// unreachable garbage and are dropped when the builder is packed into a
/// [`WordIndex`](super::WordIndex).
#[derive(Debug)]
pub(super) struct Builder {
    pub(super) states: Vec<State>,
    register: HashMap<State, u32>,
    previous: Vec<Label>,
    pub(super) word_count: usize,
    finished: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    pub(super) fn new() -> Builder {
        Builder {
            states: vec![State::default()],
            register: HashMap::new(),
            previous: Vec::new(),
            word_count: 0,
            finished: false,
        }
    }

    /// Add a word. Words must arrive in ascending order; empty words and repeats of the
    /// previous word are ignored.
    pub(super) fn insert(&mut self, word: &[Label]) {
        if word.is_empty() || word == self.previous.as_slice() {
            return;
        }
        let common = self
            .previous
            .iter()
            .zip(word)
            .take_while(|(a, b)| a == b)
            .count();
        let last = self.last_state(&word[..common]);
        if !self.states[last as usize].edges.is_empty() {
            self.replace_or_register(last);
        }
        self.add_suffix(last, &word[common..]);
        self.previous.clear();
        self.previous.extend_from_slice(word);
        self.word_count += 1;
    }

    /// Minimize the path of the last word. No words can be added afterwards.
    pub(super) fn finish(&mut self) {
        if !self.finished {
            self.replace_or_register(0);
            self.finished = true;
        }
    }

    fn last_state(&self, prefix: &[Label]) -> u32 {
        let mut state = 0;
        for &label in prefix {
            match self.states[state as usize].child(label) {
                Some(next) => state = next,
                None => break,
            }
        }
        state
    }

    fn replace_or_register(&mut self, state: u32) {
        let (label, child) = match self.states[state as usize].edges.last() {
            Some(&edge) => edge,
            None => return,
        };
        if !self.states[child as usize].edges.is_empty() {
            self.replace_or_register(child);
        }
        let found = self.register.get(&self.states[child as usize]).copied();
        match found {
            Some(existing) if existing != child => {
                if let Some(edge) = self.states[state as usize].edges.last_mut() {
                    *edge = (label, existing);
                }
                if child as usize + 1 == self.states.len() {
                    self.states.pop();
                }
            }
            Some(_) => {}
            None => {
                let key = self.states[child as usize].clone();
                self.register.insert(key, child);
            }
        }
    }

    fn add_suffix(&mut self, mut state: u32, suffix: &[Label]) {
        for &label in suffix {
            let next = self.states.len() as u32;
            self.states.push(State::default());
            self.states[state as usize].edges.push((label, next));
            state = next;
        }
        self.states[state as usize].accepting = true;
    }
}
