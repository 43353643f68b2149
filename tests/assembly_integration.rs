//! End-to-end assembly tests on a five-scanner report.
//!
//! The fixture describes five scanners whose true layout forms a connected
//! chain of pairwise overlaps of at least twelve beacons. The assembled
//! map must contain exactly 79 unique beacons with a largest scanner
//! separation of 3621.

use std::collections::{HashMap, HashSet};

use tara_map::{
    align, parse_report, AssemblerConfig, GlobalMap, Point3, ScanAssembler, ScannerReport,
    TaraError, Transform, OVERLAP_THRESHOLD,
};

const REPORT: &str = include_str!("fixtures/scanner_report.txt");

fn fixture_reports() -> Vec<ScannerReport> {
    parse_report(REPORT).expect("fixture parses")
}

fn assemble(reports: Vec<ScannerReport>) -> GlobalMap {
    ScanAssembler::new(AssemblerConfig::default())
        .assemble(reports)
        .expect("fixture assembles")
}

#[test]
fn test_fixture_parses_five_scanners() {
    let reports = fixture_reports();
    assert_eq!(reports.len(), 5);

    let sizes: Vec<usize> = reports.iter().map(|r| r.beacons.len()).collect();
    assert_eq!(sizes, vec![25, 25, 26, 25, 26]);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.id, i);
    }
}

#[test]
fn test_assembled_map_statistics() {
    let map = assemble(fixture_reports());

    assert_eq!(map.beacon_count(), 79);
    assert_eq!(map.max_scanner_distance(), 3621);
    assert_eq!(map.scanner_count(), 5);
}

#[test]
fn test_resolved_scanner_positions() {
    let map = assemble(fixture_reports());

    let positions: HashMap<usize, Point3> = map
        .scanners()
        .iter()
        .map(|pose| (pose.id, pose.position()))
        .collect();

    assert_eq!(positions[&0], Point3::new(0, 0, 0));
    assert_eq!(positions[&1], Point3::new(68, -1246, -43));
    assert_eq!(positions[&2], Point3::new(1105, -1205, 1229));
    assert_eq!(positions[&3], Point3::new(-92, -2380, -20));
    assert_eq!(positions[&4], Point3::new(-20, -1133, 1061));
}

#[test]
fn test_known_beacon_appears_once() {
    // A beacon seen by both scanner 0 and scanner 1, in scanner 0's frame.
    let map = assemble(fixture_reports());
    assert!(map.contains_beacon(&Point3::new(-618, -824, -621)));
}

#[test]
fn test_transitive_transform_matches_manual_composition() {
    // Scanner 3 overlaps scanner 1 but not the anchor. The transform the
    // assembler resolves for it must equal the manual composition of the
    // 0->1 and 1->3 pairwise transforms.
    let reports = fixture_reports();

    let to_1 = align(&reports[0].beacons, &reports[1].beacons, OVERLAP_THRESHOLD)
        .expect("scanners 0 and 1 overlap");
    let to_3 = align(&reports[1].beacons, &reports[3].beacons, OVERLAP_THRESHOLD)
        .expect("scanners 1 and 3 overlap");
    let composed = to_1.transform.compose(&to_3.transform);

    let map = assemble(reports);
    let pose = map.scanner_pose(3).expect("scanner 3 placed");
    assert_eq!(pose.transform, composed);

    // Scanner 3 is out of range of the anchor entirely.
    let reports = fixture_reports();
    assert!(align(&reports[0].beacons, &reports[3].beacons, OVERLAP_THRESHOLD).is_none());
}

#[test]
fn test_anchor_choice_does_not_change_the_map() {
    // Assemble with scanner 1 as the anchor. The global frame moves, but
    // mapping the result back through scanner 0's resolved pose must
    // reproduce the original beacon set exactly.
    let original = assemble(fixture_reports());

    let mut rotated = fixture_reports();
    rotated.rotate_left(1);
    let permuted = assemble(rotated);

    assert_eq!(permuted.beacon_count(), 79);
    assert_eq!(permuted.max_scanner_distance(), 3621);

    let scanner0 = permuted.scanner_pose(0).expect("scanner 0 placed");
    let back: Transform = scanner0.transform.inverse();

    let remapped: HashSet<Point3> = permuted.beacons().map(|p| back.apply(p)).collect();
    let expected: HashSet<Point3> = original.beacons().collect();
    assert_eq!(remapped, expected);
}

#[test]
fn test_disconnected_pair_fails() {
    // Scanners 0 and 4 share fewer than twelve beacons under every
    // rotation, so assembly must fail rather than return a partial map.
    let reports = fixture_reports();
    let disconnected = vec![reports[0].clone(), reports[4].clone()];

    let result = ScanAssembler::new(AssemblerConfig::default()).assemble(disconnected);
    match result {
        Err(TaraError::DisconnectedGraph { placed, total }) => {
            assert_eq!(placed, 1);
            assert_eq!(total, 2);
        }
        other => panic!("expected DisconnectedGraph, got {:?}", other),
    }
}

#[test]
fn test_lower_threshold_still_connects_fixture() {
    // The fixture's overlaps all meet the default threshold, so a custom
    // assembler at the same bar reaches the same statistics.
    let map = ScanAssembler::new(AssemblerConfig {
        overlap_threshold: 12,
    })
    .assemble(fixture_reports())
    .expect("fixture assembles");
    assert_eq!(map.beacon_count(), 79);
}
