use std::fmt::{self, Debug, Formatter};

use tracing::trace;

use super::{InvalidArgument, NotFound, TrieError, TrieNode};

const EMPTY_WORD: InvalidArgument = InvalidArgument { reason: "a trie word can't be empty" };
const MISSING_WORD: NotFound = NotFound { kind: "word" };

/// Whether [`Trie::contains`] should accept any stored prefix or only complete words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Matches if some stored word starts with the query.
    #[default]
    Prefix,
    /// Matches only if the query was added as a word in its own right.
    Exact,
}

/// A tree of characters, where every stored word is a path from the root to a terminating node.
/// Words that share a prefix share the nodes for it.
///
/// Words are taken as anything implementing [`ToString`], so numbers and other displayable values
/// are stored by their textual representation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `m`: The number of characters in the word in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_word` | `O(m)`* |
/// | `contains` | `O(m)`* |
/// | `remove_word` | `O(m)`* |
/// | `remove_all` | `O(1)` |
///
/// \* Each step is a hash table lookup, so these are expected rather than worst case.
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
    pub(crate) len: usize,
}

impl Trie {
    /// Creates a new Trie that holds no words.
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Returns the number of distinct words stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Stores `word`, creating nodes for any characters that aren't already present and marking
    /// the last one as terminating. Adding a word twice has no further effect.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `word` is empty.
    pub fn add_word(&mut self, word: impl ToString) -> Result<&mut Self, TrieError> {
        let word = word.to_string();
        if word.is_empty() {
            return Err(EMPTY_WORD.into());
        }

        let mut node = &mut self.root;
        for character in word.chars() {
            node = node.children.get_or_insert_with(character, TrieNode::new);
        }

        if !node.terminating {
            node.terminating = true;
            self.len += 1;
        }
        Ok(self)
    }

    /// Returns true if `word` leads to a node in the trie. With [`MatchMode::Exact`], that node
    /// must also end a stored word.
    ///
    /// The empty word is a prefix of everything, but is never stored as a word.
    pub fn contains(&self, word: impl ToString, mode: MatchMode) -> bool {
        match (self.find(&word.to_string()), mode) {
            (None, _) => false,
            (Some(_), MatchMode::Prefix) => true,
            (Some(node), MatchMode::Exact) => node.terminating,
        }
    }

    /// Removes `word`, then deletes any of its nodes that are no longer needed by another word.
    /// Shared prefixes and words that `word` passes through are kept.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `word` is empty, or [`NotFound`] if it isn't stored as a
    /// complete word. Nothing is changed in either case.
    pub fn remove_word(&mut self, word: impl ToString) -> Result<&mut Self, TrieError> {
        let characters = word.to_string().chars().collect::<Vec<_>>();
        if characters.is_empty() {
            return Err(EMPTY_WORD.into());
        }

        // The deepest node on the path that another word still needs. Everything below it only
        // exists for this word.
        let mut kept = 0;
        let mut node = &self.root;
        for (depth, &character) in characters.iter().enumerate() {
            if node.terminating || node.children.len() > 1 {
                kept = depth;
            }
            node = node.child(character).ok_or(MISSING_WORD)?;
        }
        if !node.terminating {
            return Err(MISSING_WORD.into());
        }

        let last = self.descend_mut(&characters).ok_or(MISSING_WORD)?;
        last.terminating = false;
        if last.children.is_empty() {
            let parent = self.descend_mut(&characters[..kept]).ok_or(MISSING_WORD)?;
            parent.remove_child(characters[kept])?;
            trace!(
                first = %characters[kept],
                pruned = characters.len() - kept,
                "pruned trie nodes"
            );
        }

        self.len -= 1;
        Ok(self)
    }

    /// Drops every stored word by replacing the root with a fresh node.
    pub fn remove_all(&mut self) -> &mut Self {
        self.root = TrieNode::new();
        self.len = 0;
        self
    }

    /// Returns every stored word in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Returns every stored word starting with `prefix`, in ascending order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.find(prefix) {
            Self::collect(node, prefix, &mut words);
        }
        words.sort();
        words
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(&self.root, |node, character| node.child(character))
    }

    fn descend_mut(&mut self, characters: &[char]) -> Option<&mut TrieNode> {
        characters
            .iter()
            .try_fold(&mut self.root, |node, character| node.children.get_mut(character))
    }

    /// Gathers the words at or below `node`, which is reached by `prefix`. The walk keeps its own
    /// stack of pending nodes, along with the path length each one hangs from.
    fn collect(node: &TrieNode, prefix: &str, words: &mut Vec<String>) {
        let mut path = prefix.chars().collect::<Vec<_>>();
        let mut stack = vec![(path.len(), None, node)];

        while let Some((depth, character, node)) = stack.pop() {
            path.truncate(depth);
            path.extend(character);
            if node.terminating {
                words.push(path.iter().collect());
            }
            for (next, child) in node.children.iter() {
                stack.push((path.len(), Some(*next), child));
            }
        }
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}
