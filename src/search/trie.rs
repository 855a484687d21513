//! Prefix trie over Unicode code points
//!
//! Nodes live in an arena and refer to each other by index. Branching is
//! per `char`, so multi-byte Devanagari letters and ASCII share one tree
//! without splitting a code point across branches.

use std::collections::BTreeMap;

/// Index of a node in the trie arena
pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct TrieNode {
    /// `None` only for the root sentinel
    value: Option<char>,
    terminal: bool,
    parent: Option<NodeId>,
    /// Word spelled from the root down to this node
    word: String,
    children: BTreeMap<char, NodeId>,
}

impl TrieNode {
    fn root() -> Self {
        Self {
            value: None,
            terminal: false,
            parent: None,
            word: String::new(),
            children: BTreeMap::new(),
        }
    }
}

/// Prefix tree answering "all indexed words under this prefix"
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the root sentinel
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            word_count: 0,
        }
    }

    /// Insert a word. Inserting the same word again is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = ROOT;
        for ch in word.chars() {
            let next = self.nodes[node].children.get(&ch).copied();
            node = match next {
                Some(child) => child,
                None => self.push_child(node, ch),
            };
        }

        let end = &mut self.nodes[node];
        if !end.terminal {
            end.terminal = true;
            self.word_count += 1;
        }
    }

    fn push_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let id = self.nodes.len();
        let mut word = self.nodes[parent].word.clone();
        word.push(ch);

        self.nodes.push(TrieNode {
            value: Some(ch),
            terminal: false,
            parent: Some(parent),
            word,
            children: BTreeMap::new(),
        });
        self.nodes[parent].children.insert(ch, id);
        id
    }

    /// Walk from the root along `prefix`, ignoring terminal flags
    fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(ROOT, |node, ch| {
            self.nodes[node].children.get(&ch).copied()
        })
    }

    /// All inserted words starting with `prefix`, including `prefix` itself
    /// when it was inserted as a word.
    ///
    /// Returns an empty vec when no node path exists for the prefix. Words
    /// come back sorted by code point.
    pub fn completions_of(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.terminal {
                results.push(node.word.clone());
            }
            // Reverse so the smallest child is popped first
            stack.extend(node.children.values().rev());
        }
        results
    }

    /// Whether `word` was inserted as a complete word
    pub fn contains(&self, word: &str) -> bool {
        self.find(word)
            .map(|id| self.nodes[id].terminal)
            .unwrap_or(false)
    }

    /// Node reached by walking `prefix`, if any
    pub fn node_of(&self, prefix: &str) -> Option<NodeId> {
        self.find(prefix)
    }

    /// Parent of a node; `None` for the root or an unknown id
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Code point stored at a node; `None` for the root or an unknown id
    pub fn value_of(&self, id: NodeId) -> Option<char> {
        self.nodes.get(id).and_then(|n| n.value)
    }

    /// Number of distinct words inserted
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
