use std::fs;
use std::path::Path;

use tempfile::tempdir;

use prophash::{
    PropertyHash, PropertyRecord, PropertySet, extract_properties, write_property_table,
};

fn run(dump: &[u8]) -> (PropertySet, String) {
    let temp = tempdir().unwrap();
    let input = temp.path().join("property.txt");
    let output = temp.path().join("property_hashes.csv");
    fs::write(&input, dump).unwrap();

    let set = extract_properties(&input).unwrap();
    write_property_table(&output, &set).unwrap();
    (set, fs::read_to_string(&output).unwrap())
}

#[test]
fn three_line_scenario_matches_expected_bytes() {
    let dump = b"  0: ParallelUnitNum(D787B5A5) 15000001\n\
  1: parallelUnitNum(d787b5a5) 15000001\n\
  2: Other(00000001) FF\n";
    let (set, csv) = run(dump);
    assert_eq!(set.len(), 3);
    assert_eq!(
        csv,
        "property_hash,property_name\n\
0x00000001,Other\n\
0xD787B5A5,ParallelUnitNum\n\
0xD787B5A5,parallelUnitNum\n"
    );
}

#[test]
fn empty_input_writes_header_only() {
    let (set, csv) = run(b"");
    assert_eq!(set.len(), 0);
    assert_eq!(csv, "property_hash,property_name\n");
}

#[test]
fn seven_digit_hash_contributes_nothing() {
    let (set, csv) = run(b"  0: ParallelUnitNum(D787B5A) 15000001\n");
    assert!(set.is_empty());
    assert_eq!(csv, "property_hash,property_name\n");
}

#[test]
fn repeated_pairs_collapse_to_one_row() {
    let mut dump = Vec::new();
    for idx in 0..20 {
        dump.extend_from_slice(format!("  {idx}: ParallelUnitNum(D787B5A5) 15000001\n").as_bytes());
    }
    let (set, csv) = run(&dump);
    assert_eq!(set.len(), 1);
    assert_eq!(csv, "property_hash,property_name\n0xD787B5A5,ParallelUnitNum\n");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dump = b"  5: Zeta(0000FFFF) 1\nnoise\n  6: alpha(0000FFFF) 2\n  7: Alpha(00000002) 3\n";
    let (_, first) = run(dump);
    let (_, second) = run(dump);
    assert_eq!(first, second);
}

#[test]
fn noise_and_dirty_bytes_are_tolerated() {
    let mut dump = Vec::new();
    dump.extend_from_slice(b"PropertyTable v2 dump \xF0\x28 partial sequence\n");
    dump.extend_from_slice(b"  0: ParallelUnitNum(D787B5A5) 15000001\n");
    dump.extend_from_slice(b"trailer: done\n");
    let (set, csv) = run(&dump);
    assert_eq!(set.len(), 1);
    assert_eq!(csv, "property_hash,property_name\n0xD787B5A5,ParallelUnitNum\n");
}

#[test]
fn produced_csv_round_trips_to_the_written_set() {
    let dump = b"  0: Gamma(00000003) A\n  1: beta(00000002) B\n  2: Beta(00000002) C\n";
    let (set, csv) = run(dump);

    let parsed: PropertySet = csv
        .lines()
        .skip(1)
        .map(|row| {
            let (hash, name) = row.split_once(',').unwrap();
            let digits = hash.strip_prefix("0x").unwrap();
            PropertyRecord::new(PropertyHash::from_hex_digits(digits).unwrap(), name)
        })
        .collect();
    assert_eq!(parsed, set);
}

#[test]
fn unreadable_input_fails_before_touching_output() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("missing.txt");
    let output = temp.path().join("property_hashes.csv");

    let err = extract_properties(&input).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
    assert!(!Path::new(&output).exists());
}
