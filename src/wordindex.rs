mod builder;

use self::builder::Builder;
use crate::labelset::{IteratorLabelSet, LabelSet};
use crate::tiles::{codec, Label};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use tracing::debug;

/// Index of a node in a [`WordIndex`]. The root is node 0.
pub type NodeId = u32;

#[cfg(feature = "bincode")]
const MAGIC: &[u8; 8] = b"SCRBDAWG";
#[cfg(feature = "bincode")]
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A minimal acyclic automaton (DAWG) that holds all the valid words.
///
/// The edges of all nodes are packed in one table: the target of the edge with label `l` from
/// node `i` is `targets[nodes[i].0 + rank(l)]`, where `rank(l)` is the number of labels
/// smaller than `l` in `nodes[i].1`.
pub struct WordIndex {
    /// List of nodes. Each node is a tuple with the offset of its first edge in `targets`,
    /// and a `LabelSet` with the labels of all its edges.
    nodes: Vec<(u32, LabelSet)>,
    /// Edge targets of all nodes.
    targets: Vec<NodeId>,
    /// List indicating accepting nodes
    terminal: Vec<bool>,
    /// The number of words in the index
    word_count: usize,
    /// Path of the file used to build or load the index.
    /// Empty if the index is not read from a file.
    #[cfg_attr(feature = "serde", serde(skip))]
    wordfile: String,
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<WordIndex: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

impl From<Builder> for WordIndex {
    fn from(mut builder: Builder) -> Self {
        builder.finish();
        let states = &builder.states;

        // Number the reachable states breadth first, so minimized-away states are dropped.
        let mut ids: Vec<Option<NodeId>> = vec![None; states.len()];
        let mut order: Vec<usize> = vec![0];
        ids[0] = Some(0);
        let mut i = 0;
        while i < order.len() {
            for &(_, target) in &states[order[i]].edges {
                let target = target as usize;
                if ids[target].is_none() {
                    ids[target] = Some(order.len() as NodeId);
                    order.push(target);
                }
            }
            i += 1;
        }

        let mut nodes = Vec::with_capacity(order.len());
        let mut targets = Vec::new();
        let mut terminal = Vec::with_capacity(order.len());
        for &old in &order {
            let state = &states[old];
            let mut edges = state.edges.clone();
            edges.sort_by_key(|&(label, _)| label);
            edges.dedup_by_key(|&mut (label, _)| label);
            let labels: LabelSet = edges.iter().map(|&(label, _)| label).collect();
            nodes.push((targets.len() as u32, labels));
            targets.extend(edges.iter().filter_map(|&(_, t)| ids[t as usize]));
            terminal.push(state.accepting);
        }
        WordIndex {
            nodes,
            targets,
            terminal,
            word_count: builder.word_count,
            wordfile: String::new(),
        }
    }
}

/// Iterator over the outgoing edges of a node, in ascending label order.
pub struct Edges<'a> {
    labels: IteratorLabelSet,
    targets: &'a [NodeId],
}

impl<'a> Iterator for Edges<'a> {
    type Item = (Label, NodeId);
    fn next(&mut self) -> Option<Self::Item> {
        let label = self.labels.next()?;
        let (&target, rest) = self.targets.split_first()?;
        self.targets = rest;
        Some((label, target))
    }
}

impl WordIndex {
    /// An index without any nodes. All lookups fail.
    pub fn empty() -> WordIndex {
        WordIndex::default()
    }

    /// Build the index from a sorted list of words.
    /// ## Errors
    /// If a word contains anything but `a`..`z`.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{codec, Error, WordIndex};
    /// let index = WordIndex::from_words(&["at", "bat", "cat"])?;
    /// assert!(index.word_exists(&codec::encode("bat")?));
    /// assert!(!index.word_exists(&codec::encode("ba")?));
    /// assert_eq!(index.word_count(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<WordIndex, Error> {
        let mut builder = Builder::new();
        for &word in words {
            builder.insert(&codec::encode(word.trim())?);
        }
        let index = WordIndex::from(builder);
        debug!(
            words = index.word_count,
            nodes = index.node_count(),
            "built word index"
        );
        Ok(index)
    }

    /// Read the words from a file. The file must be encoded in utf-8, have one word per line,
    /// and be sorted.
    /// ## Errors
    /// Fails if the file can not be read, or a word can not be encoded.
    pub fn from_file(wordfile: &str) -> Result<WordIndex, Error> {
        let mut builder = Builder::new();
        read_to_string(wordfile)
            .map_err(|source| Error::ReadError {
                path: String::from(wordfile),
                source,
            })?
            .lines()
            .map(str::trim)
            .try_for_each(|word| codec::encode(word).map(|labels| builder.insert(&labels)))?;
        let mut index = WordIndex::from(builder);
        index.wordfile = String::from(wordfile);
        debug!(
            words = index.word_count,
            nodes = index.node_count(),
            wordfile,
            "built word index"
        );
        Ok(index)
    }

    /// The root node, or None for an empty index.
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Get the child of `node` with `label` if present.
    pub fn child(&self, node: NodeId, label: Label) -> Option<NodeId> {
        let &(start, labels) = self.nodes.get(node as usize)?;
        let index = labels.index_of(label)?;
        self.targets.get(start as usize + index).copied()
    }

    /// Iterate over the outgoing edges of `node`.
    pub fn edges(&self, node: NodeId) -> Edges {
        match self.nodes.get(node as usize) {
            Some(&(start, labels)) => {
                let start = (start as usize).min(self.targets.len());
                let end = (start + labels.len()).min(self.targets.len());
                Edges {
                    labels: labels.iter(),
                    targets: &self.targets[start..end],
                }
            }
            None => Edges {
                labels: LabelSet::new().iter(),
                targets: &[],
            },
        }
    }

    /// Returns true if a word ends at `node`.
    pub fn is_accepting(&self, node: NodeId) -> bool {
        self.terminal.get(node as usize).copied().unwrap_or(false)
    }

    /// Follow `labels` from the root, and return the node reached.
    pub fn lookup_prefix(&self, labels: &[Label]) -> Option<NodeId> {
        labels
            .iter()
            .try_fold(self.root()?, |node, &label| self.child(node, label))
    }

    /// Returns true if `labels` is a word in the index.
    pub fn word_exists(&self, labels: &[Label]) -> bool {
        self.lookup_prefix(labels)
            .map_or(false, |node| self.is_accepting(node))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The file the index was built from or loaded from, empty otherwise.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    /// Check that all edge offsets and targets are in range.
    fn check(&self) -> Result<(), Error> {
        let node_count = self.nodes.len();
        if self.terminal.len() != node_count {
            return Err(Error::IndexDeserializeError(format!(
                "{} nodes but {} terminal flags",
                node_count,
                self.terminal.len()
            )));
        }
        for (i, &(start, labels)) in self.nodes.iter().enumerate() {
            if !labels.is_letters_only() {
                return Err(Error::IndexDeserializeError(format!(
                    "node {} has invalid labels",
                    i
                )));
            }
            if start as usize + labels.len() > self.targets.len() {
                return Err(Error::IndexDeserializeError(format!(
                    "edges of node {} out of range",
                    i
                )));
            }
        }
        if let Some(target) = self.targets.iter().find(|&&t| t as usize >= node_count) {
            return Err(Error::IndexDeserializeError(format!(
                "edge target {} out of range",
                target
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "bincode")]
impl WordIndex {
    /// Serialize the index to a tagged binary blob.
    /// ## Errors
    /// If the index can not be serialized.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = MAGIC.to_vec();
        bincode::serialize_into(&mut bytes, &(FORMAT_VERSION, self))
            .map_err(|e| Error::IndexSerializeError(e.to_string()))?;
        Ok(bytes)
    }

    /// Restore an index from a blob made by [`to_bytes`](WordIndex::to_bytes).
    /// ## Errors
    /// If the tag or the format version do not match, the payload can not be decoded,
    /// or the decoded node table is inconsistent.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Error, WordIndex};
    /// let index = WordIndex::from_words(&["cat", "cats", "dog"])?;
    /// let bytes = index.to_bytes()?;
    /// assert_eq!(WordIndex::from_bytes(&bytes)?, index);
    /// assert!(WordIndex::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<WordIndex, Error> {
        if bytes.len() < MAGIC.len() || &bytes[..MAGIC.len()] != MAGIC {
            return Err(Error::IndexDeserializeError(String::from("bad magic tag")));
        }
        let (version, index): (u32, WordIndex) = bincode::deserialize(&bytes[MAGIC.len()..])
            .map_err(|e| Error::IndexDeserializeError(e.to_string()))?;
        if version != FORMAT_VERSION {
            return Err(Error::IndexDeserializeError(format!(
                "format version {}, expect {}",
                version, FORMAT_VERSION
            )));
        }
        index.check()?;
        Ok(index)
    }

    /// Serialize the index to a file.
    /// ## Errors
    /// If the index can not be serialized or the file can not be written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        std::fs::write(path, self.to_bytes()?).map_err(|source| Error::WriteError {
            path: String::from(path),
            source,
        })
    }

    /// Deserialize the index from a file written by
    /// [`serialize_into`](WordIndex::serialize_into).
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(path: &str) -> Result<WordIndex, Error> {
        let bytes = std::fs::read(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let mut index = WordIndex::from_bytes(&bytes)?;
        index.wordfile = String::from(path);
        Ok(index)
    }

    /// Like [`deserialize_from`](WordIndex::deserialize_from), but return an empty index
    /// if the file can not be loaded.
    pub fn load_or_empty(path: &str) -> WordIndex {
        match WordIndex::deserialize_from(path) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(%err, path, "could not load word index, using an empty index");
                WordIndex::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bar", "bel", "belt", "bes", "bi", "bo",
    ];

    fn encode(word: &str) -> Vec<Label> {
        codec::encode(word).unwrap()
    }

    #[test]
    fn test_word_exists() -> Result<(), Error> {
        let index = WordIndex::from_words(WORDS)?;
        assert_eq!(index.word_count(), 11);
        for &word in WORDS {
            assert!(index.word_exists(&encode(word)), "{}", word);
        }
        for &word in &["", "a", "be", "belts", "zz", "ba"] {
            assert!(!index.word_exists(&encode(word)), "{}", word);
        }
        Ok(())
    }

    #[test]
    fn test_minimal() -> Result<(), Error> {
        assert_eq!(WordIndex::from_words(&["bat", "cat"])?.node_count(), 4);
        assert_eq!(WordIndex::from_words(&["at", "bat", "cat"])?.node_count(), 4);
        let a = WordIndex::from_words(WORDS)?;
        let b = WordIndex::from_words(WORDS)?;
        assert_eq!(a.node_count(), b.node_count());
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_minimal_trie_suffixes() -> Result<(), Error> {
        let index = WordIndex::from_words(&["abc", "abd", "b"])?;
        // root, a, ab and one shared final state
        assert_eq!(index.node_count(), 4);
        assert!(index.word_exists(&encode("b")));
        assert!(index.word_exists(&encode("abd")));
        assert!(!index.word_exists(&encode("ab")));
        Ok(())
    }

    #[test]
    fn test_edges() -> Result<(), Error> {
        let index = WordIndex::from_words(WORDS)?;
        let labels: Vec<Label> = index.edges(0).map(|(label, _)| label).collect();
        assert_eq!(codec::decode(labels), "ab");
        let b = index.child(0, 2).unwrap();
        let edges: Vec<(Label, NodeId)> = index.edges(b).collect();
        assert_eq!(codec::decode(edges.iter().map(|e| e.0)), "aeio");
        for (label, node) in edges {
            assert_eq!(index.child(b, label), Some(node));
        }
        assert_eq!(index.child(b, 26), None);
        assert_eq!(index.edges(1000).count(), 0);
        assert!(!index.is_accepting(1000));
        Ok(())
    }

    #[test]
    fn test_lookup_prefix() -> Result<(), Error> {
        let index = WordIndex::from_words(WORDS)?;
        let node = index.lookup_prefix(&encode("be")).unwrap();
        assert!(!index.is_accepting(node));
        let next = index.child(node, codec::label_of('l').unwrap()).unwrap();
        assert!(index.is_accepting(next));
        assert_eq!(index.lookup_prefix(&encode("bx")), None);
        assert_eq!(index.lookup_prefix(&[]), Some(0));
        Ok(())
    }

    #[test]
    fn test_empty() {
        let index = WordIndex::empty();
        assert!(index.is_empty());
        assert_eq!(index.root(), None);
        assert_eq!(index.lookup_prefix(&[]), None);
        assert!(!index.word_exists(&encode("a")));
        assert_eq!(index.edges(0).count(), 0);
    }

    #[test]
    fn test_invalid_word() {
        assert!(matches!(
            WordIndex::from_words(&["ok", "Not"]),
            Err(Error::EncodeInvalidToken('N'))
        ));
    }

    #[test]
    fn test_unsorted_does_not_panic() -> Result<(), Error> {
        let index = WordIndex::from_words(&["dog", "cat", "do", "cats", "a", "dog"])?;
        assert!(index.word_exists(&encode("dog")));
        Ok(())
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join("scrabble_solver_test_words.txt");
        std::fs::write(&path, "at\nbat\n\ncat\n cats \n").unwrap();
        let path = path.to_str().unwrap();
        let index = WordIndex::from_file(path)?;
        assert_eq!(index.word_count(), 4);
        assert!(index.word_exists(&encode("cats")));
        assert_eq!(index.wordfile(), path);
        assert!(matches!(
            WordIndex::from_file("/nonexistent/words.txt"),
            Err(Error::ReadError { .. })
        ));
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_serialize() -> Result<(), Error> {
        let index = WordIndex::from_words(WORDS)?;
        let path = std::env::temp_dir().join("scrabble_solver_test_index.bin");
        let path = path.to_str().unwrap();
        index.serialize_into(path)?;
        let loaded = WordIndex::deserialize_from(path)?;
        assert_eq!(loaded.node_count(), index.node_count());
        for &word in WORDS {
            assert!(loaded.word_exists(&encode(word)));
        }
        assert!(!loaded.word_exists(&encode("be")));
        assert_eq!(loaded.wordfile(), path);
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_corrupt_blob() -> Result<(), Error> {
        let index = WordIndex::from_words(WORDS)?;
        let bytes = index.to_bytes()?;

        let mut bad_magic = bytes.clone();
        bad_magic[0] ^= 0xff;
        assert!(WordIndex::from_bytes(&bad_magic).is_err());

        let mut bad_version = bytes.clone();
        bad_version[MAGIC.len()] = 99;
        assert!(WordIndex::from_bytes(&bad_version).is_err());

        let mut bad_target = index.clone();
        bad_target.targets[0] = 1000;
        let blob = bad_target.to_bytes()?;
        assert!(matches!(
            WordIndex::from_bytes(&blob),
            Err(Error::IndexDeserializeError(_))
        ));

        let mut bad_offset = index.clone();
        bad_offset.nodes[0].0 = 1000;
        assert!(WordIndex::from_bytes(&bad_offset.to_bytes()?).is_err());

        assert!(WordIndex::from_bytes(&[]).is_err());
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_load_or_empty() {
        let index = WordIndex::load_or_empty("/nonexistent/index.bin");
        assert!(index.is_empty());
        assert!(!index.word_exists(&encode("at")));
    }
}
