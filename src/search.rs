use std::collections::HashSet;

use tracing::debug;

use crate::error::{DegreesError, Result};
use crate::frontier::{Frontier, NodeIndex, QueueFrontier, SearchNode};
use crate::graph_index::GraphIndex;
use crate::model::{MovieId, PathStep, PersonId};

/// Returns a shortest list of `(movie, person)` steps leading from `source`
/// to `target`, `Ok(None)` if they are not connected.
///
/// A self-query yields an empty path. Both ids must exist in `index`,
/// otherwise [`DegreesError::UnknownEntity`] is returned.
pub fn shortest_path(
    index: &GraphIndex,
    source: &PersonId,
    target: &PersonId,
) -> Result<Option<Vec<PathStep>>> {
    find_path::<QueueFrontier>(index, source, target)
}

/// Frontier-driven search from `source` to `target`.
///
/// The frontier type picks the strategy: [`QueueFrontier`] gives a shortest
/// path, [`crate::frontier::StackFrontier`] gives some path. States are
/// checked against the visited set when dequeued, not when enqueued, so the
/// same person can sit on the frontier more than once.
pub fn find_path<F: Frontier>(
    index: &GraphIndex,
    source: &PersonId,
    target: &PersonId,
) -> Result<Option<Vec<PathStep>>> {
    for id in [source, target] {
        if !index.contains_person(id) {
            return Err(DegreesError::UnknownEntity(id.clone()));
        }
    }
    if source == target {
        return Ok(Some(Vec::new()));
    }

    let mut frontier = F::default();
    frontier.add(SearchNode::root(source.clone()));
    let mut visited: HashSet<PersonId> = HashSet::new();
    let mut expanded: Vec<SearchNode> = Vec::new(); // arena, parents are indices into it

    while !frontier.is_empty() {
        let node = frontier.remove()?;
        if visited.contains(&node.state) {
            continue;
        }
        visited.insert(node.state.clone());

        let neighbors = index.neighbors_of(&node.state)?;
        expanded.push(node);
        let parent = expanded.len() - 1;

        for (movie, person) in neighbors {
            if &person == target {
                let path = reconstruct(&expanded, parent, movie, person);
                debug!(
                    %source,
                    %target,
                    explored = visited.len(),
                    degrees = path.len(),
                    "connection found"
                );
                return Ok(Some(path));
            }
            frontier.add(SearchNode {
                state: person,
                action: Some(movie),
                parent: Some(parent),
            });
        }
    }

    debug!(%source, %target, explored = visited.len(), "not connected");
    Ok(None)
}

// Walks parent links from the final hop back to the root, then flips the
// steps into source -> target order.
fn reconstruct(
    arena: &[SearchNode],
    parent: NodeIndex,
    movie: MovieId,
    person: PersonId,
) -> Vec<PathStep> {
    let mut steps = vec![PathStep { movie, person }];
    let mut cursor = Some(parent);
    while let Some(at) = cursor {
        let node = &arena[at];
        let Some(action) = &node.action else {
            break; // root
        };
        steps.push(PathStep {
            movie: action.clone(),
            person: node.state.clone(),
        });
        cursor = node.parent;
    }
    steps.reverse();
    steps
}
