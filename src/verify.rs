// vim: tw=80
//! Post-hoc checks that expected calls actually happened.

use tracing::debug;

use crate::{error::MockError, expectation::Expectation, registry::Registry};

/// Scans a registry for setups that violate a verification predicate and
/// aggregates every offender into one failure.
///
/// Both checks are read-only: neither mutates any setup's invoked flag, so
/// verification can run repeatedly and interleave with further dispatch.
pub struct Verifier<'a> {
    registry: &'a Registry,
}

impl<'a> Verifier<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Verifier { registry }
    }

    /// Fail if any setup marked verifiable was never invoked.
    pub fn verify(&self) -> Result<(), MockError> {
        self.verify_or_fail(|s: &dyn Expectation| {
            s.is_verifiable() && !s.invoked()
        })
    }

    /// Fail if any setup at all was never invoked.
    pub fn verify_all(&self) -> Result<(), MockError> {
        self.verify_or_fail(|s: &dyn Expectation| !s.invoked())
    }

    fn verify_or_fail<F>(&self, failed: F) -> Result<(), MockError>
        where F: Fn(&dyn Expectation) -> bool
    {
        let setups: Vec<String> = self.registry.all()
            .iter()
            .filter(|s| failed(s.as_ref()))
            .map(|s| s.identity().to_owned())
            .collect();
        if setups.is_empty() {
            Ok(())
        } else {
            debug!("verification failed for {}", setups.join(", "));
            Err(MockError::VerificationFailed { setups })
        }
    }
}
