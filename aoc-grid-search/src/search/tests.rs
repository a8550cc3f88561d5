//! Tests for the constrained search module.

use std::sync::atomic::AtomicBool;

use super::*;
use crate::direction::Direction;
use crate::error::SearchError;
use crate::grid::{Grid, Pos};
use crate::parse::parse_digit_grid;

const CITY: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

const CORRIDOR_CITY: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";

fn grid(input: &str) -> Grid<u32> {
    parse_digit_grid(input).unwrap()
}

fn config(min: u32, max: u32) -> SearchConfig {
    SearchConfig::builder().streak(min..=max).build().unwrap()
}

fn cost_to(grid: &Grid<u32>, config: SearchConfig, start: Pos, goal: Pos) -> Option<u64> {
    ConstrainedSearch::new(grid, config)
        .run(start, |pos| pos == goal)
        .unwrap()
        .cost()
}

/// Sum of every cell entered along the route, skipping the start.
fn path_cost(grid: &Grid<u32>, route: &Route) -> u64 {
    route.path[1..].iter().map(|&p| u64::from(grid[p])).sum()
}

#[test]
fn test_uniform_three_by_three_is_manhattan_distance() {
    let grid = Grid::from_rows(vec![vec![1; 3]; 3]).unwrap();
    assert_eq!(
        cost_to(&grid, config(1, 3), Pos::new(0, 0), Pos::new(2, 2)),
        Some(4)
    );
}

#[test]
fn test_min_streak_beyond_grid_is_not_reachable() {
    let grid = Grid::from_rows(vec![vec![1; 3]; 3]).unwrap();
    let outcome = ConstrainedSearch::new(&grid, config(100, 200))
        .run(Pos::new(0, 0), |pos| pos == Pos::new(2, 2))
        .unwrap();
    assert_eq!(outcome, SearchOutcome::NotReachable);
}

#[test]
fn test_zero_cost_grid_costs_nothing() {
    let grid = Grid::from_rows(vec![vec![0; 5]; 4]).unwrap();
    for goal in grid.positions() {
        assert_eq!(
            cost_to(&grid, config(1, 3), Pos::new(0, 0), goal),
            Some(0),
            "goal {goal}"
        );
    }
}

#[test]
fn test_single_row_sums_the_corridor() {
    let grid = Grid::from_rows(vec![vec![5, 1, 2, 3, 4]]).unwrap();
    let goal = Pos::new(0, 4);
    assert_eq!(cost_to(&grid, config(1, 4), Pos::new(0, 0), goal), Some(10));
    assert_eq!(cost_to(&grid, config(1, 3), Pos::new(0, 0), goal), None);

    let column = Grid::from_rows(vec![vec![9], vec![2], vec![2]]).unwrap();
    assert_eq!(
        cost_to(&column, config(1, 2), Pos::new(0, 0), Pos::new(2, 0)),
        Some(4)
    );
}

#[test]
fn test_crucible_sample() {
    let city = grid(CITY);
    let outcome = ConstrainedSearch::new(&city, SearchConfig::crucible())
        .run_corner_to_corner()
        .unwrap();
    assert_eq!(outcome.cost(), Some(102));
}

#[test]
fn test_ultra_crucible_samples() {
    let city = grid(CITY);
    let search = ConstrainedSearch::new(&city, SearchConfig::ultra_crucible());
    assert_eq!(search.run_corner_to_corner().unwrap().cost(), Some(94));

    let corridor = grid(CORRIDOR_CITY);
    let search = ConstrainedSearch::new(&corridor, SearchConfig::ultra_crucible());
    assert_eq!(search.run_corner_to_corner().unwrap().cost(), Some(71));
}

#[test]
fn test_origin_policies_agree_from_a_corner() {
    let city = grid(CITY);
    let policies = [
        OriginPolicy::Any,
        OriginPolicy::Facing(Direction::ALL.to_vec()),
        OriginPolicy::FirstMove(vec![Direction::East, Direction::South]),
    ];
    for origin in policies {
        let config = SearchConfig::builder()
            .streak(1..=3)
            .origin(origin.clone())
            .build()
            .unwrap();
        let outcome = ConstrainedSearch::new(&city, config)
            .run_corner_to_corner()
            .unwrap();
        assert_eq!(outcome.cost(), Some(102), "origin {origin:?}");
    }
}

#[test]
fn test_first_move_policy_restricts_the_first_heading() {
    // The cheap route starts south, but the first move is forced east.
    let grid = Grid::from_rows(vec![vec![0, 9], vec![1, 1]]).unwrap();
    let goal = Pos::new(1, 1);
    let forced_east = SearchConfig::builder()
        .origin(OriginPolicy::FirstMove(vec![Direction::East]))
        .build()
        .unwrap();
    assert_eq!(cost_to(&grid, forced_east, Pos::new(0, 0), goal), Some(10));
    assert_eq!(
        cost_to(&grid, SearchConfig::default(), Pos::new(0, 0), goal),
        Some(2)
    );
}

#[test]
fn test_min_streak_rejects_cheaper_early_turn() {
    let grid = grid("19999\n19999\n11111\n");
    let goal = Pos::new(2, 4);
    assert_eq!(cost_to(&grid, config(1, 10), Pos::new(0, 0), goal), Some(6));
    assert_eq!(cost_to(&grid, config(3, 10), Pos::new(0, 0), goal), Some(46));
}

#[test]
fn test_max_streak_forces_detour() {
    let grid = grid("11111\n99999\n");
    let goal = Pos::new(0, 4);
    assert_eq!(cost_to(&grid, config(1, 4), Pos::new(0, 0), goal), Some(4));
    assert_eq!(cost_to(&grid, config(1, 3), Pos::new(0, 0), goal), Some(22));
}

#[test]
fn test_stop_rule_requires_min_streak_at_goal() {
    let grid = grid("11111\n11111\n");
    let goal = Pos::new(1, 4);
    let lenient = config(4, 10);
    let strict = lenient
        .clone()
        .into_builder()
        .stop_requires_min_streak(true)
        .build()
        .unwrap();

    // East four then south one: the last streak is only one long.
    assert_eq!(cost_to(&grid, lenient, Pos::new(0, 0), goal), Some(5));
    // Finishing on a four-move streak needs the bottom row, which can only
    // be entered after a one-move streak.
    assert_eq!(cost_to(&grid, strict, Pos::new(0, 0), goal), None);
}

#[test]
fn test_turn_set_limits_turning() {
    let grid = Grid::from_rows(vec![vec![1; 3]; 3]).unwrap();
    let start = Pos::new(0, 0);
    let straight_only = SearchConfig::builder().turns(TurnSet::NONE).build().unwrap();
    assert_eq!(
        cost_to(&grid, straight_only.clone(), start, Pos::new(2, 2)),
        None
    );
    assert_eq!(cost_to(&grid, straight_only, start, Pos::new(0, 2)), Some(2));

    let right_only = SearchConfig::builder()
        .turns(TurnSet::RIGHT_ONLY)
        .build()
        .unwrap();
    let route = ConstrainedSearch::new(&grid, right_only)
        .run(start, |pos| pos == Pos::new(2, 2))
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!(route.cost, 4);
    assert_eq!(
        route.segments(),
        vec![(Direction::East, 2), (Direction::South, 2)]
    );
}

#[test]
fn test_route_path_matches_cost_and_streaks() {
    let city = grid(CITY);
    let config = SearchConfig::ultra_crucible();
    let route = ConstrainedSearch::new(&city, config.clone())
        .run_corner_to_corner()
        .unwrap()
        .into_route()
        .unwrap();

    assert_eq!(route.path.first(), Some(&Pos::new(0, 0)));
    assert_eq!(route.path.last(), Some(&city.bottom_right()));
    assert_eq!(path_cost(&city, &route), route.cost);
    for (dir, len) in route.segments() {
        assert!(
            (config.min_streak()..=config.max_streak()).contains(&len),
            "segment {dir:?} x{len} breaks the streak rules"
        );
    }
}

#[test]
fn test_start_on_goal_and_out_of_bounds() {
    let grid = Grid::from_rows(vec![vec![3, 3]]).unwrap();
    let search = ConstrainedSearch::new(&grid, SearchConfig::crucible());

    let outcome = search.run(Pos::new(0, 1), |pos| pos.col == 1).unwrap();
    let route = outcome.into_route().unwrap();
    assert_eq!(route.cost, 0);
    assert_eq!(route.path, vec![Pos::new(0, 1)]);

    assert_eq!(
        search.run(Pos::new(4, 0), |_| true),
        Err(SearchError::StartOutOfBounds { row: 4, col: 0 })
    );
}

#[test]
fn test_raised_cancel_flag_stops_search() {
    let city = grid(CITY);
    let search = ConstrainedSearch::new(&city, SearchConfig::crucible());
    let goal = city.bottom_right();

    let cancel = AtomicBool::new(true);
    assert_eq!(
        search.run_until(Pos::new(0, 0), |pos| pos == goal, &cancel),
        Err(SearchError::Cancelled)
    );

    let cancel = AtomicBool::new(false);
    let outcome = search
        .run_until(Pos::new(0, 0), |pos| pos == goal, &cancel)
        .unwrap();
    assert_eq!(outcome.cost(), Some(102));
}

#[test]
fn test_repeated_runs_are_identical() {
    let city = grid(CITY);
    let search = ConstrainedSearch::new(&city, SearchConfig::ultra_crucible());
    let first = search.run_corner_to_corner().unwrap();
    for _ in 0..3 {
        assert_eq!(search.run_corner_to_corner().unwrap().cost(), first.cost());
    }
}

#[test]
fn test_run_many_keeps_start_order() {
    let grid = grid("123\n456\n789\n");
    let search = ConstrainedSearch::new(&grid, SearchConfig::default());
    let goal = Pos::new(2, 2);
    let starts = [Pos::new(0, 0), Pos::new(2, 1), Pos::new(1, 2), Pos::new(5, 5)];

    let results = search.run_many(&starts, |pos| pos == goal);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().cost(), Some(2 + 3 + 6 + 9));
    assert_eq!(results[1].as_ref().unwrap().cost(), Some(9));
    assert_eq!(results[2].as_ref().unwrap().cost(), Some(9));
    assert!(matches!(
        results[3],
        Err(SearchError::StartOutOfBounds { row: 5, col: 5 })
    ));
}

#[test]
fn test_best_of_many_picks_cheapest_start() {
    let grid = grid("123\n456\n789\n");
    let search = ConstrainedSearch::new(&grid, SearchConfig::default());
    let goal = Pos::new(0, 0);
    let starts = [Pos::new(2, 2), Pos::new(0, 2), Pos::new(1, 0)];

    let best = search.best_of_many(&starts, |pos| pos == goal).unwrap();
    let route = best.into_route().unwrap();
    assert_eq!(route.cost, 1);
    assert_eq!(route.path, vec![Pos::new(1, 0), Pos::new(0, 0)]);

    let none = search.best_of_many(&[], |pos| pos == goal).unwrap();
    assert_eq!(none, SearchOutcome::NotReachable);
}
