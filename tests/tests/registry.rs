//! Suite registry behavior: lookups, constant-time enforcement, and the
//! unrecoverable startup path.

use std::sync::Mutex;

use ecsuite_api::{Error, Group};

// The enforcement flag is process-wide; tests that read or write it
// serialize on this lock.
static POLICY_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_find_known_suites() {
    let _guard = POLICY_LOCK.lock().unwrap();

    for name in ["ed25519", "P256", "BN256_G1", "Curve1174", "E521"] {
        let suite = ecsuite_suites::find(name).unwrap();
        assert_eq!(suite.name().to_lowercase(), name.to_lowercase());
        assert!(suite.point_len() > 0);
        assert!(suite.scalar_len() > 0);
    }

    assert!(matches!(
        ecsuite_suites::find("NoSuchSuite"),
        Err(Error::UnknownSuite(_))
    ));
}

#[test]
fn test_constant_time_enforcement() {
    let _guard = POLICY_LOCK.lock().unwrap();
    ecsuite_suites::require_constant_time();

    // ed25519 passes with enforcement on.
    assert!(ecsuite_suites::find("ed25519").is_ok());

    // Variable-time suites are refused with a policy error, which is
    // distinguishable from an unknown name.
    assert!(matches!(
        ecsuite_suites::find("P256"),
        Err(Error::VariableTimeSuite(_))
    ));
    assert!(matches!(
        ecsuite_suites::find("BN256_G1"),
        Err(Error::VariableTimeSuite(_))
    ));
    assert!(matches!(
        ecsuite_suites::find("NoSuchSuite"),
        Err(Error::UnknownSuite(_))
    ));

    ecsuite_suites::allow_variable_time();
    assert!(ecsuite_suites::find("P256").is_ok());
    assert!(ecsuite_suites::find("BN256_G1").is_ok());
}

#[test]
#[should_panic(expected = "suite lookup failed")]
fn test_must_find_unknown_panics() {
    ecsuite_suites::must_find("NoSuchSuite");
}

#[test]
fn test_registered_constant_time_flags() {
    let _guard = POLICY_LOCK.lock().unwrap();

    assert!(ecsuite_suites::find("ed25519").unwrap().constant_time());
    for name in [
        "P256",
        "BN256_G1",
        "Curve1174",
        "Curve41417",
        "E382",
        "E521",
        "Twisted25519",
    ] {
        assert!(
            !ecsuite_suites::find(name).unwrap().constant_time(),
            "{} should be variable-time",
            name
        );
    }
}
