//! Unit and property-based tests for the R-way trie.


use super::*;

fn trie_with(words: &[&str]) -> RWayTrie<usize> {
    let mut trie = RWayTrie::new();
    for word in words {
        trie.add(word, word.len()).unwrap();
    }
    trie
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = RWayTrie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.size(), 0);
    assert_eq!(trie.node_count(), 1);

    // Test insertion
    assert!(trie.add("hello", 5).unwrap());
    assert_eq!(trie.size(), 1);
    assert!(!trie.is_empty());

    // Test lookup
    assert!(trie.contains("hello"));
    assert!(!trie.contains("hell"));
    assert!(!trie.contains("helloo"));
    assert!(!trie.contains("nonexistent"));

    // Test update keeps the size
    assert!(!trie.add("hello", 6).unwrap());
    assert_eq!(trie.size(), 1);

    // Test removal
    assert!(trie.delete("hello"));
    assert!(trie.is_empty());
    assert!(!trie.delete("hello"));
    assert_eq!(trie.node_count(), 1);
}

#[test]
fn test_add_rejects_unrepresentable_words() {
    let mut trie = RWayTrie::new();

    assert_eq!(trie.add("", 0), Err(TrieError::EmptyKey));
    assert_eq!(
        trie.add("Key", 3),
        Err(TrieError::InvalidCharacter {
            key: "Key".to_string(),
            ch: 'K',
        })
    );
    assert_eq!(
        trie.add("ke-y", 4),
        Err(TrieError::InvalidCharacter {
            key: "ke-y".to_string(),
            ch: '-',
        })
    );

    // Rejected words leave no nodes behind
    assert_eq!(trie.node_count(), 1);
    assert!(!trie.contains("Key"));
    assert!(!trie.delete("Key"));
}

#[test]
fn test_structural_nodes_are_not_words() {
    let mut trie = trie_with(&["keys"]);

    assert!(!trie.contains("key"));
    assert!(!trie.delete("key"));
    assert_eq!(trie.size(), 1);
    assert_eq!(trie.node_count(), 5);
}

#[test]
fn test_delete_prunes_only_dead_branch() {
    let mut trie = trie_with(&["key", "keys", "wall"]);
    assert_eq!(trie.node_count(), 1 + 4 + 4);

    // "key" still leads to "keys", nothing is pruned
    assert!(trie.delete("key"));
    assert_eq!(trie.size(), 2);
    assert!(!trie.contains("key"));
    assert!(trie.contains("keys"));
    assert_eq!(trie.node_count(), 9);

    // Deleting "keys" clears the whole k-branch
    assert!(trie.delete("keys"));
    assert_eq!(trie.node_count(), 1 + 4);
    assert_eq!(trie.words_with_prefix("k").count(), 0);
    assert_eq!(trie.words().collect::<Vec<_>>(), vec!["wall"]);
}

#[test]
fn test_delete_stops_at_terminal_ancestor() {
    let mut trie = trie_with(&["car", "carpet"]);

    assert!(trie.delete("carpet"));
    assert!(trie.contains("car"));
    assert_eq!(trie.node_count(), 1 + 3);
}

#[test]
fn test_released_nodes_are_reused() {
    let mut trie = trie_with(&["abc"]);
    assert!(trie.delete("abc"));
    assert_eq!(trie.node_count(), 1);

    trie.add("xyz", 3).unwrap();
    assert_eq!(trie.node_count(), 4);
    assert_eq!(trie.nodes.len(), 4);
    assert_eq!(trie.words().collect::<Vec<_>>(), vec!["xyz"]);
}

#[test]
fn test_trie_prefix_search() {
    let mut trie = trie_with(&["apple", "application", "apply", "banana", "app"]);

    let results: Vec<String> = trie.words_with_prefix("app").collect();
    assert_eq!(results, vec!["app", "apple", "apply", "application"]);

    // A prefix equal to a stored word includes that word
    let results: Vec<String> = trie.words_with_prefix("apply").collect();
    assert_eq!(results, vec!["apply"]);

    // Test with no matches
    assert_eq!(trie.words_with_prefix("orange").count(), 0);
    assert_eq!(trie.words_with_prefix("appz").count(), 0);
    assert_eq!(trie.words_with_prefix("APP").count(), 0);
}

#[test]
fn test_words_are_breadth_first() {
    let mut trie = trie_with(&["bbbb", "ccc", "aaaa", "abc", "zz"]);

    let words: Vec<String> = trie.words().collect();
    assert_eq!(words, vec!["zz", "abc", "ccc", "aaaa", "bbbb"]);
}

#[test]
fn test_cursor_has_next_does_not_consume() {
    let mut trie = trie_with(&["key", "keys"]);
    let mut cursor = trie.words_with_prefix("ke");

    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(cursor.next().as_deref(), Some("key"));
    assert!(cursor.has_next());
    assert_eq!(cursor.next().as_deref(), Some("keys"));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_cursor_has_next_skips_released_nodes() {
    let mut trie = trie_with(&["abc", "abcd", "xyz"]);

    let mut cursor = trie.words();
    assert_eq!(cursor.next().as_deref(), Some("abc"));
    assert!(cursor.delete("xyz"));
    assert!(cursor.delete("abcd"));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_cursor_remove() {
    let mut trie = trie_with(&["key", "keys", "wall"]);

    let mut cursor = trie.words_with_prefix("ke");
    assert_eq!(cursor.remove(), Err(TrieError::NothingToRemove));

    assert_eq!(cursor.next().as_deref(), Some("key"));
    assert_eq!(cursor.remove(), Ok(()));
    assert_eq!(cursor.remove(), Err(TrieError::NothingToRemove));

    assert_eq!(cursor.next().as_deref(), Some("keys"));
    assert_eq!(cursor.remove(), Ok(()));
    assert_eq!(cursor.next(), None);

    assert_eq!(trie.size(), 1);
    assert_eq!(trie.node_count(), 1 + 4);
    assert_eq!(trie.words().collect::<Vec<_>>(), vec!["wall"]);
}

#[test]
fn test_cursor_remove_after_external_delete() {
    let mut trie = trie_with(&["key", "keys"]);

    let mut cursor = trie.words_with_prefix("ke");
    assert_eq!(cursor.next().as_deref(), Some("key"));
    assert!(cursor.delete("key"));
    assert_eq!(cursor.remove(), Err(TrieError::NotFound("key".to_string())));
    assert_eq!(cursor.next().as_deref(), Some("keys"));
}

#[test]
fn test_cursor_delete_of_pending_word() {
    let mut trie = trie_with(&["abc", "abcd", "abce", "xyz"]);

    let mut cursor = trie.words();
    assert_eq!(cursor.next().as_deref(), Some("abc"));
    assert!(cursor.delete("xyz"));
    assert!(cursor.delete("abcd"));

    let rest: Vec<String> = cursor.collect();
    assert_eq!(rest, vec!["abce"]);
    assert_eq!(trie.size(), 2);
}

#[test]
fn test_remove_every_word_while_enumerating() {
    let mut trie = trie_with(&["key", "keys", "keyed", "wall", "walls", "ward"]);

    let mut cursor = trie.words();
    let mut seen = Vec::new();
    while let Some(word) = cursor.next() {
        cursor.remove().unwrap();
        seen.push(word);
    }

    assert_eq!(seen, vec!["key", "keys", "wall", "ward", "keyed", "walls"]);
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
}

#[test]
fn test_clear() {
    let mut trie = trie_with(&["key", "keys", "wall"]);
    trie.clear();

    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    assert!(!trie.contains("key"));
    assert_eq!(trie.words().count(), 0);
}
