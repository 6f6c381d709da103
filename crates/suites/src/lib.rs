//! Process-wide suite registry
//!
//! Maps suite names to shared [`Suite`] instances. The registry is
//! populated with every built-in suite on first access and can take
//! additional registrations during process initialization; steady-state
//! use is read-only lookups.
//!
//! A process-wide enforcement flag can restrict lookups to suites whose
//! group arithmetic is constant-time. A filtered suite yields an error
//! distinguishable from an unknown name, so callers can tell "does not
//! exist" from "exists but disallowed". The flag is mutex-guarded;
//! toggling it concurrently with lookups is safe but leaves the policy
//! seen by in-flight calls unspecified.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use ecsuite_api::{Error, Group, Result, Suite};
use ecsuite_groups::{SuiteEd25519, SuiteTwisted, SuiteWeierstrass};

struct Registry {
    suites: HashMap<String, Arc<dyn Suite>>,
    require_const_time: bool,
}

impl Registry {
    fn insert(&mut self, suite: Arc<dyn Suite>) {
        // Names are matched case-insensitively: the registry key is the
        // lowercased form of the suite's own name.
        self.suites.insert(suite.name().to_lowercase(), suite);
    }
}

fn registry() -> &'static Mutex<Registry> {
    static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut r = Registry {
            suites: HashMap::new(),
            require_const_time: false,
        };
        // Variable-time suites that shouldn't be used in production
        // environments when possible.
        r.insert(Arc::new(SuiteWeierstrass::p256()));
        r.insert(Arc::new(SuiteWeierstrass::bn256_g1()));
        r.insert(Arc::new(SuiteTwisted::curve1174(false)));
        r.insert(Arc::new(SuiteTwisted::curve41417(false)));
        r.insert(Arc::new(SuiteTwisted::e382(false)));
        r.insert(Arc::new(SuiteTwisted::e521(false)));
        r.insert(Arc::new(SuiteTwisted::twisted25519(false)));
        // This is a constant time implementation that should be used as
        // much as possible.
        r.insert(Arc::new(SuiteEd25519::new()));
        Mutex::new(r)
    })
}

/// Register a suite under the name it reports for itself.
///
/// Intended for process initialization, before steady-state lookups
/// begin; a later registration under an existing name replaces it.
pub fn register(suite: Arc<dyn Suite>) {
    registry().lock().unwrap().insert(suite);
}

/// Look up a registered suite by name.
///
/// Fails with [`Error::UnknownSuite`] when no suite carries the name,
/// and with [`Error::VariableTimeSuite`] when the suite exists but the
/// process-wide constant-time enforcement excludes it.
pub fn find(name: &str) -> Result<Arc<dyn Suite>> {
    let reg = registry().lock().unwrap();
    match reg.suites.get(&name.to_lowercase()) {
        None => Err(Error::UnknownSuite(name.to_string())),
        Some(suite) if reg.require_const_time && !suite.constant_time() => {
            Err(Error::VariableTimeSuite(name.to_string()))
        }
        Some(suite) => Ok(suite.clone()),
    }
}

/// Look up a suite that must exist.
///
/// Panics when the name is unknown or filtered: a missing built-in suite
/// on a startup path indicates a broken build, not bad runtime input.
pub fn must_find(name: &str) -> Arc<dyn Suite> {
    match find(name) {
        Ok(suite) => suite,
        Err(err) => panic!("suite lookup failed: {}", err),
    }
}

/// Restrict lookups to suites with constant-time arithmetic.
///
/// Intended to be set once, early in process initialization.
pub fn require_constant_time() {
    registry().lock().unwrap().require_const_time = true;
}

/// Allow variable-time suites again.
///
/// The reset hook for tests that toggle the enforcement mode; not meant
/// for steady-state use.
pub fn allow_variable_time() {
    registry().lock().unwrap().require_const_time = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lookups and the enforcement flag share process-wide state; tests
    // that touch either serialize on this lock.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_find() {
        let _guard = TEST_LOCK.lock().unwrap();

        for name in [
            "ed25519",
            "P256",
            "BN256_G1",
            "Curve1174",
            "Curve41417",
            "E382",
            "E521",
            "Twisted25519",
        ] {
            let suite = find(name).unwrap();
            assert_eq!(suite.name().to_lowercase(), name.to_lowercase());

            let suite = must_find(name);
            assert_eq!(suite.name().to_lowercase(), name.to_lowercase());
        }

        assert!(matches!(
            find("NoSuchSuite"),
            Err(Error::UnknownSuite(_))
        ));
    }

    #[test]
    fn test_constant_time_enforcement() {
        let _guard = TEST_LOCK.lock().unwrap();
        require_constant_time();

        assert!(matches!(
            find("BN256_G1"),
            Err(Error::VariableTimeSuite(_))
        ));
        assert!(matches!(find("P256"), Err(Error::VariableTimeSuite(_))));
        assert!(find("ed25519").is_ok());
        // Unknown names still report as unknown, not as policy failures.
        assert!(matches!(find("NoSuchSuite"), Err(Error::UnknownSuite(_))));

        allow_variable_time();
        assert!(find("BN256_G1").is_ok());
    }

    #[test]
    #[should_panic(expected = "suite lookup failed")]
    fn test_must_find_unknown_panics() {
        must_find("NoSuchSuite");
    }
}
