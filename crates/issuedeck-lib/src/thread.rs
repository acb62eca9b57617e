//! Comment thread reconstruction and in-place tree mutation.
//!
//! [`build_thread`] is the pure transformation from a flat comment list
//! to an ordered reply forest. The mutator functions patch an
//! already-built forest so callers can apply optimistic updates without
//! rebuilding (and without disturbing unrelated siblings).

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::model::{Comment, ThreadedComment};

// ============================================================================
// Thread Builder
// ============================================================================

/// Build the reply forest for one issue's flat comment list.
///
/// Comments without a `parent_id` become roots. A comment whose
/// `parent_id` does not resolve within the input set is an orphan and is
/// silently excluded, together with anything nested under it. Every
/// level is sorted ascending by `(created_at, id)`.
///
/// Pure and deterministic: the same input always yields the same forest.
#[must_use]
pub fn build_thread(comments: &[Comment]) -> Vec<ThreadedComment> {
    let ids: HashSet<i64> = comments.iter().map(|c| c.id).collect();

    let mut roots: Vec<Comment> = Vec::new();
    let mut children: HashMap<i64, Vec<Comment>> = HashMap::new();

    for comment in comments {
        match comment.parent_id {
            None => roots.push(comment.clone()),
            Some(parent_id) if ids.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(comment.clone());
            }
            Some(parent_id) => {
                tracing::debug!(
                    comment_id = comment.id,
                    parent_id,
                    "dropping orphaned comment from thread"
                );
            }
        }
    }

    let mut forest: Vec<ThreadedComment> = roots
        .into_iter()
        .map(|root| attach_children(root, &mut children))
        .collect();

    sort_forest(&mut forest);
    forest
}

fn attach_children(
    comment: Comment,
    children: &mut HashMap<i64, Vec<Comment>>,
) -> ThreadedComment {
    let mut node = ThreadedComment::new(comment);
    if let Some(kids) = children.remove(&node.id()) {
        node.replies = kids
            .into_iter()
            .map(|kid| attach_children(kid, children))
            .collect();
    }
    node
}

fn sort_forest(forest: &mut [ThreadedComment]) {
    forest.sort_by(|a, b| {
        a.comment
            .created_at
            .cmp(&b.comment.created_at)
            .then(a.id().cmp(&b.id()))
    });
    for node in forest {
        sort_forest(&mut node.replies);
    }
}

/// Total number of comments in the forest, replies included.
#[must_use]
pub fn count(forest: &[ThreadedComment]) -> usize {
    forest
        .iter()
        .map(|node| 1 + count(&node.replies))
        .sum()
}

/// Pre-order traversal of all comment ids in the forest.
#[must_use]
pub fn flatten_ids(forest: &[ThreadedComment]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(forest.len());
    collect_ids(forest, &mut ids);
    ids
}

fn collect_ids(forest: &[ThreadedComment], ids: &mut Vec<i64>) {
    for node in forest {
        ids.push(node.id());
        collect_ids(&node.replies, ids);
    }
}

// ============================================================================
// Tree Mutator
// ============================================================================

/// Append `reply` under the node with `parent_id`, wherever it sits.
///
/// Returns false (and leaves the forest untouched) when the parent is
/// not in the forest — the reply is still in the store and surfaces on
/// the next full rebuild. Appending at the end keeps the chronological
/// invariant because replies are created with increasing timestamps.
pub fn attach_reply(forest: &mut [ThreadedComment], parent_id: i64, reply: Comment) -> bool {
    find_node_mut(forest, parent_id).is_some_and(|parent| {
        parent.replies.push(ThreadedComment::new(reply));
        true
    })
}

/// Apply an edit to the node with `id`, wherever it sits.
///
/// Sets content and `updated_at`, marks the node edited. Returns false
/// when the node is not in the forest.
pub fn apply_edit(
    forest: &mut [ThreadedComment],
    id: i64,
    content: &str,
    updated_at: DateTime<Utc>,
) -> bool {
    find_node_mut(forest, id).is_some_and(|node| {
        node.comment.content = content.to_string();
        node.comment.updated_at = updated_at;
        node.comment.is_edited = true;
        true
    })
}

/// Detach and return the node with `id` together with its whole
/// subtree. Sibling order is preserved. Returns `None` when the node is
/// not in the forest.
pub fn remove_subtree(forest: &mut Vec<ThreadedComment>, id: i64) -> Option<ThreadedComment> {
    if let Some(pos) = forest.iter().position(|node| node.id() == id) {
        return Some(forest.remove(pos));
    }
    forest
        .iter_mut()
        .find_map(|node| remove_subtree(&mut node.replies, id))
}

fn find_node_mut(forest: &mut [ThreadedComment], id: i64) -> Option<&mut ThreadedComment> {
    for node in forest {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.replies, id) {
            return Some(found);
        }
    }
    None
}
