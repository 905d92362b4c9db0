// crates/core/tests/size_human.rs
use code_census_core::FileSize;

#[test]
fn human_boundaries() {
    assert_eq!(FileSize::new(0).to_human(), "0.0B");
    assert_eq!(FileSize::new(999).to_human(), "999.0B");
    assert_eq!(FileSize::new(1000).to_human(), "1.0Kb");
    assert_eq!(FileSize::new(1500).to_human(), "1.5Kb");
    assert_eq!(FileSize::new(999_999).to_human(), "1000.0Kb");
    assert_eq!(FileSize::new(1_000_000).to_human(), "1.0Mb");
    assert_eq!(FileSize::new(2_500_000_000).to_human(), "2.5Gb");
    assert_eq!(FileSize::new(7_000_000_000_000).to_human(), "7.0Tb");
}

#[test]
fn human_upper_range() {
    assert_eq!(FileSize::new(3_000_000_000_000_000).to_human(), "3.0Pb");
    assert_eq!(FileSize::new(u64::MAX).to_human(), "18.4Eb");
}

#[test]
fn display_alternate_is_human() {
    let value = FileSize::new(1500);
    assert_eq!(format!("{}", value), "1500");
    assert_eq!(format!("{:#}", value), "1.5Kb");
}

#[test]
fn bytes_roundtrip() {
    assert_eq!(FileSize::from(42).bytes(), 42);
}
