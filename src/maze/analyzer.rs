//! Post-generation structural analysis of the maze tree.
//!
//! After generation, a stack-based DFS walks the room graph from the entrance
//! and classifies every room: part of the unique entrance-to-exit solution
//! path, a branch point, or a dead end. The aggregate statistics feed the
//! completion summary.

use std::collections::{BTreeMap, HashSet};

use crate::math::coordinates::{Direction, adjacent_room, entrance_room, exit_room, wall_between};
use crate::maze::grid::Grid3;

/// Structural statistics of a generated maze.
///
/// Because the maze is a perfect maze (a tree), there is exactly one path
/// between any two rooms; every statistic below is well defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    /// Path length in rooms from the entrance to the exit (the entrance room
    /// counts as 1)
    pub solution_length: u32,
    /// Largest distance-from-start over all rooms
    pub longest_path: u32,
    /// Total branching: the sum of `(reachable neighbors - 1)` over all
    /// branch points
    pub branches_total: u32,
    /// Cumulative branch count accumulated along the solution path
    pub branches_on_solution: u32,
    /// Longest stretch of rooms traversed without passing a branch point
    pub longest_branchless_run: u32,
    /// Number of dead-end rooms, excluding the exit room
    pub dead_end_count: u32,
    /// For each solution-path branch point that spawns at least one dead-end
    /// offshoot, the depth of its longest offshoot
    pub branch_dead_end_depths: Vec<u32>,
    /// Largest entry of `branch_dead_end_depths` (0 when there are none)
    pub longest_dead_end_depth: u32,
    /// Mean of `branch_dead_end_depths` (0.0 when there are none)
    pub mean_branch_dead_end_depth: f64,
}

/// Traversal state for one visited room. Arena-allocated for the lifetime of
/// the analysis and discarded afterwards.
struct PathNode {
    position: (i32, i32, i32),
    distance_from_start: u32,
    distance_from_last_branch: u32,
    branches_on_path: u32,
    predecessor: Option<usize>,
}

/// Analyzes a finished occupancy map.
///
/// # Arguments
/// * `occupancy_map` - The boolean occupancy map produced by generation
/// * `size` - The number of rooms per axis the map was generated with
///
/// # Panics
/// If the traversal never reaches the exit room. Maze connectivity is a
/// generation-time guarantee, so an unreachable exit is a construction bug,
/// not a recoverable condition.
pub fn analyze(occupancy_map: &Grid3<bool>, size: u32) -> Analytics {
    let segment_count = occupancy_map.segment_count() as i32;
    let start = entrance_room();
    let exit = exit_room(size);

    let mut nodes = vec![PathNode {
        position: start,
        distance_from_start: 1,
        distance_from_last_branch: 1,
        branches_on_path: 0,
        predecessor: None,
    }];
    let mut stack = vec![0usize];
    let mut seen = HashSet::from([occupancy_map.cell_number(start)]);

    let mut branches_total = 0u32;
    let mut dead_ends: Vec<usize> = Vec::new();
    let mut exit_node = None;
    let mut longest_path = 0u32;
    let mut longest_branchless_run = 0u32;

    while let Some(index) = stack.pop() {
        let position = nodes[index].position;
        let distance_from_start = nodes[index].distance_from_start;
        let distance_from_last_branch = nodes[index].distance_from_last_branch;
        let branches_on_path = nodes[index].branches_on_path;

        if position == exit {
            exit_node = Some(index);
        }
        longest_path = longest_path.max(distance_from_start);
        longest_branchless_run = longest_branchless_run.max(distance_from_last_branch);

        // Enumerate rooms reachable through an open wall, room-level visited
        // set (distinct from the generation-time visited markers)
        let mut next_rooms = Vec::new();
        for direction in Direction::ALL {
            let Some(next) = adjacent_room(position, direction, segment_count) else {
                continue;
            };
            if *occupancy_map.get(wall_between(position, direction)) {
                continue;
            }
            if !seen.insert(occupancy_map.cell_number(next)) {
                continue;
            }
            next_rooms.push(next);
        }

        let branched = next_rooms.len() > 1;
        if next_rooms.is_empty() {
            if position != exit {
                dead_ends.push(index);
            }
        } else if branched {
            branches_total += next_rooms.len() as u32 - 1;
        }

        let extra_branches = if branched {
            next_rooms.len() as u32 - 1
        } else {
            0
        };
        for next in next_rooms {
            nodes.push(PathNode {
                position: next,
                distance_from_start: distance_from_start + 1,
                distance_from_last_branch: if branched {
                    1
                } else {
                    distance_from_last_branch + 1
                },
                branches_on_path: branches_on_path + extra_branches,
                predecessor: Some(index),
            });
            stack.push(nodes.len() - 1);
        }
    }

    let exit_node = match exit_node {
        Some(index) => index,
        None => panic!(
            "analysis never reached the exit room {:?}; the spanning tree construction is broken",
            exit
        ),
    };

    // Walk backward from the exit to mark the unique solution path
    let mut on_solution = HashSet::new();
    let mut cursor = Some(exit_node);
    while let Some(index) = cursor {
        on_solution.insert(index);
        cursor = nodes[index].predecessor;
    }

    // Attribute each dead end to the solution-path branch point where its
    // offshoot diverges, keeping the longest depth per branch point. Keyed by
    // arena index so iteration order is deterministic.
    let mut branch_longest: BTreeMap<usize, u32> = BTreeMap::new();
    for &dead_end in &dead_ends {
        let mut depth = 0u32;
        let mut index = dead_end;
        while !on_solution.contains(&index) {
            index = match nodes[index].predecessor {
                Some(predecessor) => predecessor,
                None => panic!("dead end traced back past the entrance without meeting the solution path"),
            };
            depth += 1;
        }
        let longest = branch_longest.entry(index).or_insert(0);
        *longest = (*longest).max(depth);
    }

    let branch_dead_end_depths: Vec<u32> = branch_longest.values().copied().collect();
    let longest_dead_end_depth = branch_dead_end_depths.iter().copied().max().unwrap_or(0);
    let mean_branch_dead_end_depth = if branch_dead_end_depths.is_empty() {
        0.0
    } else {
        let total: u32 = branch_dead_end_depths.iter().sum();
        f64::from(total) / branch_dead_end_depths.len() as f64
    };

    Analytics {
        solution_length: nodes[exit_node].distance_from_start,
        longest_path,
        branches_total,
        branches_on_solution: nodes[exit_node].branches_on_path,
        longest_branchless_run,
        dead_end_count: dead_ends.len() as u32,
        branch_dead_end_depths,
        longest_dead_end_depth,
        mean_branch_dead_end_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an occupancy map for the given size with the listed lattice
    /// cells carved open
    fn occupancy_from_open(size: u32, open: &[(i32, i32, i32)]) -> Grid3<bool> {
        let mut map = Grid3::new(2 * size as usize + 1, true);
        for &coordinate in open {
            map.set(coordinate, false);
        }
        map
    }

    /// Tests the degenerate single-room maze: the entrance room is the exit
    /// room, one step long, no branching
    #[test]
    fn test_single_room() {
        let map = occupancy_from_open(1, &[(1, 1, 0), (1, 1, 1), (1, 1, 2)]);
        let analytics = analyze(&map, 1);

        assert_eq!(analytics.solution_length, 1);
        assert_eq!(analytics.longest_path, 1);
        assert_eq!(analytics.branches_total, 0);
        assert_eq!(analytics.branches_on_solution, 0);
        assert_eq!(analytics.dead_end_count, 0);
        assert_eq!(analytics.longest_dead_end_depth, 0);
        assert_eq!(analytics.mean_branch_dead_end_depth, 0.0);
    }

    /// Tests exact analytics on a hand-built 8-room spanning tree.
    ///
    /// Tree edges (rooms at odd coordinates of a 5x5x5 lattice):
    /// the solution path (1,1,1)-(3,1,1)-(3,3,1)-(3,3,3), a depth-3 offshoot
    /// (1,1,1)-(1,3,1)-(1,3,3)-(1,1,3), and a depth-1 offshoot
    /// (3,1,1)-(3,1,3).
    #[test]
    fn test_hand_built_tree() {
        let rooms = [
            (1, 1, 1),
            (3, 1, 1),
            (1, 3, 1),
            (3, 3, 1),
            (1, 1, 3),
            (3, 1, 3),
            (1, 3, 3),
            (3, 3, 3),
        ];
        let walls = [
            (2, 1, 1), // (1,1,1)-(3,1,1)
            (3, 2, 1), // (3,1,1)-(3,3,1)
            (3, 3, 2), // (3,3,1)-(3,3,3)
            (1, 2, 1), // (1,1,1)-(1,3,1)
            (1, 3, 2), // (1,3,1)-(1,3,3)
            (1, 2, 3), // (1,3,3)-(1,1,3)
            (3, 1, 2), // (3,1,1)-(3,1,3)
        ];
        let open: Vec<_> = rooms.iter().chain(walls.iter()).copied().collect();
        let map = occupancy_from_open(2, &open);

        let analytics = analyze(&map, 2);

        assert_eq!(analytics.solution_length, 4);
        assert_eq!(analytics.longest_path, 4, "deepest room is (1,1,3)");
        assert_eq!(analytics.branches_total, 2);
        assert_eq!(analytics.branches_on_solution, 2);
        assert_eq!(analytics.longest_branchless_run, 3);
        assert_eq!(analytics.dead_end_count, 2, "(1,1,3) and (3,1,3); the exit is excluded");

        let mut depths = analytics.branch_dead_end_depths.clone();
        depths.sort_unstable();
        assert_eq!(depths, vec![1, 3]);
        assert_eq!(analytics.longest_dead_end_depth, 3);
        assert_eq!(analytics.mean_branch_dead_end_depth, 2.0);
    }

    /// Tests that an unreachable exit is treated as a fatal construction bug
    #[test]
    #[should_panic(expected = "never reached the exit room")]
    fn test_unreachable_exit_panics() {
        // Only the entrance room is open; the exit cannot be reached
        let map = occupancy_from_open(2, &[(1, 1, 1)]);
        analyze(&map, 2);
    }
}
