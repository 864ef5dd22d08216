use super::*;
use crate::path::command::Path;

#[test]
fn unify_collapses_adjacent_values_to_rounded_mean() {
    assert_eq!(unify_close_numbers(&[10.0, 10.9, 20.0], 1.0), vec![
        10.0, 10.0, 20.0
    ]);
}

#[test]
fn unify_keeps_separated_values() {
    assert_eq!(unify_close_numbers(&[5.0, 10.0, 20.0], 1.0), vec![
        5.0, 10.0, 20.0
    ]);
}

#[test]
fn unify_singleton_and_empty() {
    assert_eq!(unify_close_numbers(&[42.5], 1.0), vec![43.0]);
    assert!(unify_close_numbers(&[], 1.0).is_empty());
}

#[test]
fn unify_chains_greedily_within_threshold() {
    // 1, 1.8, 2.6 stay one cluster because consecutive gaps are < 1.
    assert_eq!(unify_close_numbers(&[2.6, 1.0, 1.8], 1.0), vec![
        2.0, 2.0, 2.0
    ]);
}

#[test]
fn four_command_ancient_leaves_modern_untouched() {
    let ancient = "M0,0L10,0L10,10L20,10";
    let modern = "M0,0L0,50L100,50L100,100";
    let out = insert_matching_control_points(ancient, modern, 6).unwrap();
    assert_eq!(Path::parse(&out).unwrap().len(), 4);
    assert_eq!(out, modern);
}

#[test]
fn short_ancient_paths_degrade_to_zero_insertions() {
    let out = insert_matching_control_points("M0,0L5,5", "M0,0L0,50L100,50L100,100", 6).unwrap();
    assert_eq!(out, "M0,0L0,50L100,50L100,100");
}

#[test]
fn interior_points_project_by_rank_onto_modern_segment() {
    // Ancient bends at x = 196, 196, 126 between endpoint bounds 220 and 100;
    // the duplicated 196 pair clusters to one rank. A budget below the
    // ancient count makes the denominator num_to_add + 1 = 4.
    let ancient = "M230,0L220,10L196,20L196,30L126,40L100,50L90,60";
    let modern = "M0,0L0,50L100,50L100,100";
    let out = insert_matching_control_points(ancient, modern, 3).unwrap();
    assert_eq!(out, "M0,0L0,50L50,50L25,50L25,50L100,50L100,100");
}

#[test]
fn bound_touching_points_map_to_segment_extremes() {
    // Single interior bend within 2 units of the lower x-bound; ancient start
    // has the smaller x, so the synthesized point sits at the segment start.
    let ancient = "M0,0L0,10L1,20L100,30L100,40";
    let modern = "M0,0L0,50L100,50L100,100";
    let out = insert_matching_control_points(ancient, modern, 3).unwrap();
    assert_eq!(out, "M0,0L0,50L0,50L100,50L100,100");
}

#[test]
fn high_bound_mirrors_low_bound_orientation() {
    // Same shape, interior bend glued to the larger x-bound instead: it
    // projects to the far end of the modern segment.
    let ancient = "M0,0L0,10L99,20L100,30L100,40";
    let modern = "M0,0L0,50L100,50L100,100";
    let out = insert_matching_control_points(ancient, modern, 3).unwrap();
    assert_eq!(out, "M0,0L0,50L100,50L100,50L100,100");
}

#[test]
fn nonneg_budget_difference_drives_denominator() {
    // budget == ancient_len -> use_what = 1, denominator 2. One interior
    // point at rank 1 lands halfway along the modern segment.
    let ancient = "M0,0L0,10L50,20L100,30L100,40";
    let modern = "M0,0L0,60L90,60L90,120";
    let out = insert_matching_control_points(ancient, modern, 5).unwrap();
    assert_eq!(out, "M0,0L0,60L45,60L90,60L90,120");
}

#[test]
fn parse_failures_surface_as_errors() {
    assert!(insert_matching_control_points("garbage", "M0,0L1,1L2,2L3,3", 4).is_err());
}
