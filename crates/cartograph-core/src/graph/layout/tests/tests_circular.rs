//! Tests for the circular layout

#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;

use super::make_resource;
use crate::graph::layout::{positions, HierarchyKind, LayoutOptions};
use rstest::rstest;

fn options() -> LayoutOptions {
    LayoutOptions {
        hierarchy: HierarchyKind::Circular,
        ..LayoutOptions::default()
    }
}

#[test]
fn test_empty_input_yields_no_positions() {
    assert!(positions(&[], &options()).is_empty());
}

#[rstest]
#[case(1, 400.0)]
#[case(5, 400.0)]
#[case(8, 400.0)]
#[case(10, 500.0)]
#[case(20, 1000.0)]
fn test_radius_grows_with_count_but_never_below_minimum(
    #[case] count: usize,
    #[case] expected_radius: f64,
) {
    let resources: Vec<_> = (0..count)
        .map(|i| make_resource(&format!("r-{i}"), "EC2", "us-east-1"))
        .collect();

    for position in positions(&resources, &options()) {
        let distance = (position.x * position.x + position.y * position.y).sqrt();
        assert!(
            (distance - expected_radius).abs() < 1e-9,
            "distance {distance} should equal radius {expected_radius}"
        );
    }
}

#[test]
fn test_nodes_are_equally_spaced_by_angle() {
    let resources: Vec<_> = (0..6)
        .map(|i| make_resource(&format!("r-{i}"), "EC2", "us-east-1"))
        .collect();

    let placed = positions(&resources, &options());
    let step = TAU / 6.0;
    for (index, position) in placed.iter().enumerate() {
        let angle = position.y.atan2(position.x).rem_euclid(TAU);
        let expected = (step * index as f64).rem_euclid(TAU);
        assert!(
            (angle - expected).abs() < 1e-9,
            "node {index}: angle {angle} should be {expected}"
        );
    }
}

#[test]
fn test_first_node_sits_on_positive_x_axis() {
    let resources = vec![
        make_resource("a", "EC2", "us-east-1"),
        make_resource("b", "S3", "global"),
    ];
    let placed = positions(&resources, &options());
    assert!((placed[0].x - 400.0).abs() < 1e-9);
    assert!(placed[0].y.abs() < 1e-9);
}

#[test]
fn test_spacing_options_do_not_affect_the_ring() {
    let resources = vec![
        make_resource("a", "EC2", "us-east-1"),
        make_resource("b", "S3", "global"),
    ];
    let wide = LayoutOptions {
        horizontal_spacing: 999.0,
        vertical_spacing: 999.0,
        ..options()
    };
    let a = positions(&resources, &options());
    let b = positions(&resources, &wide);
    assert_eq!(a, b);
}
