use divguard_core::demo;
use divguard_core::{Denominator, DivisionError, Harness, Outcome, Path};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_demo_cases() {
    let [guarded, unguarded] = demo::cases(100);
    assert_eq!(guarded.path, Path::Guarded);
    assert_eq!(unguarded.path, Path::Unguarded);
    assert_eq!(guarded.numerator, 100);
    assert_eq!(demo::acknowledge(), 1);
}

#[test]
fn test_demo_output() {
    let mut reader: &[u8] = b"";
    let mut rng = StdRng::seed_from_u64(0);
    let mut harness = Harness::new(&mut reader, &mut rng);

    let lines: Vec<String> = demo::cases(100)
        .iter()
        .map(|case| harness.run(case).unwrap().to_string())
        .collect();

    assert_eq!(
        lines,
        vec![
            "This would result in a divide by zero".to_owned(),
            "100/0 faulted: attempt to divide by zero".to_owned(),
        ]
    );
}

#[test]
fn test_demo_reports() {
    let mut reader: &[u8] = b"";
    let mut rng = StdRng::seed_from_u64(0);
    let mut harness = Harness::new(&mut reader, &mut rng);
    let [guarded, unguarded] = demo::cases(100);

    let report = harness.run(&guarded).unwrap();
    assert_eq!(report.denominator, Denominator::Int(0));
    assert_eq!(report.outcome, Outcome::Rejected(DivisionError::DivisionByZero));

    let report = harness.run(&unguarded).unwrap();
    assert!(report.is_fault());
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_demo_without_catching_faults() {
    let mut reader: &[u8] = b"";
    let mut rng = StdRng::seed_from_u64(0);
    let mut harness = Harness::new(&mut reader, &mut rng).catch_faults(false);
    for case in demo::cases(100) {
        harness.run(&case).unwrap();
    }
}
