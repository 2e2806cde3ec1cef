//! Warren demo binary.
//!
//! Generates a maze of the size given on the command line (default 5 rooms
//! per axis), prints the occupancy map slice by slice, and reports the
//! analytics the game shows in its completion summary.

use std::env;

use warren::math::coordinates::{entrance_room, offset};
use warren::maze::generate_maze;

/// Entry point: `warren [size]`.
fn main() {
    let size = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u32>().ok())
        .filter(|&size| size >= 1)
        .unwrap_or(5);

    let maze = generate_maze(size);

    println!("Maze {} ({} rooms per axis)", maze.size_label, size);
    let spawn = entrance_room();
    println!(
        "Spawn position: ({:.4}, {:.4}, {:.4})",
        offset(spawn.0),
        offset(spawn.1),
        offset(spawn.2 - 3)
    );
    println!();

    // One character per lattice cell, one slice per z index
    let segment_count = maze.segment_count as i32;
    for z in 0..segment_count {
        println!("z = {}", z);
        for y in 0..segment_count {
            let row: String = (0..segment_count)
                .map(|x| {
                    if *maze.occupancy_map.get((x, y, z)) {
                        '#'
                    } else {
                        ' '
                    }
                })
                .collect();
            println!("{}", row);
        }
        println!();
    }

    let analytics = &maze.analytics;
    println!("Solution length:        {}", analytics.solution_length);
    println!("Longest path:           {}", analytics.longest_path);
    println!("Total branches:         {}", analytics.branches_total);
    println!("Branches on solution:   {}", analytics.branches_on_solution);
    println!("Longest branchless run: {}", analytics.longest_branchless_run);
    println!("Dead ends:              {}", analytics.dead_end_count);
    println!(
        "Longest dead end:       {}",
        analytics.longest_dead_end_depth
    );
    println!(
        "Mean dead end depth:    {:.2}",
        analytics.mean_branch_dead_end_depth
    );
}
