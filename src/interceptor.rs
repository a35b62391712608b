// vim: tw=80
//! Implements the actual interception and dispatch for all substitutes.

use std::sync::Arc;

use tracing::trace;

use crate::{
    error::MockError,
    expectation::Expectation,
    invocation::{DefaultValue, Invocation, ReturnKind, TargetKind},
    registry::Registry,
    verify::Verifier,
    Behavior,
};

/// The dispatch engine for one substitute object.
///
/// An interceptor owns the registry of setups and the substitute's
/// [`Behavior`], fixed at construction.  Every call the interception layer
/// reifies flows through [`intercept`](Self::intercept); the post-hoc
/// checks read the same registry through [`verify`](Self::verify) and
/// [`verify_all`](Self::verify_all).
///
/// # Examples
/// ```
/// use standin::{Behavior, Call, Interceptor, Setup};
///
/// let interceptor = Interceptor::new(Behavior::Strict);
/// interceptor.add(Setup::new("Store::flush"));
///
/// interceptor.intercept(&mut Call::new("Store::flush")).unwrap();
/// ```
pub struct Interceptor {
    behavior: Behavior,
    registry: Registry,
}

impl Interceptor {
    pub fn new(behavior: Behavior) -> Self {
        Interceptor {
            behavior,
            registry: Registry::new(),
        }
    }

    /// The behavior fixed at construction.
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// The registry backing this interceptor, for collaborators that manage
    /// shared setups directly.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register `setup`, replacing any earlier setup with the same
    /// identity.
    pub fn add<E: Expectation>(&self, setup: E) {
        self.registry.add(Arc::new(setup));
    }

    /// Dispatch one reified call.
    ///
    /// A matched setup always executes, whatever the behavior.  Unmatched
    /// calls fall through the behavior policy: fail, forward to the real
    /// implementation, synthesize a default return value, or complete as a
    /// no-op.
    pub fn intercept(&self, call: &mut dyn Invocation)
        -> Result<(), MockError>
    {
        let matched = self.registry.find_first_match(&*call);

        if matched.is_none() {
            match self.behavior {
                Behavior::Strict => {
                    return Err(MockError::NoExpectation {
                        behavior: self.behavior,
                        invocation: call.identity().to_owned(),
                    });
                },
                Behavior::Normal => {
                    if call.target_kind() == TargetKind::Trait {
                        return Err(MockError::InterfaceNoExpectation {
                            behavior: self.behavior,
                            invocation: call.identity().to_owned(),
                        });
                    } else if call.is_abstract() {
                        return Err(MockError::AbstractNoExpectation {
                            behavior: self.behavior,
                            invocation: call.identity().to_owned(),
                        });
                    }
                },
                Behavior::Relaxed | Behavior::Loose => {},
            }
        }

        if let Some(setup) = matched {
            trace!("{}: executing setup {}", call.identity(),
                setup.identity());
            setup.execute(call);
        } else if call.is_identity_member() {
            // Identity semantics always run for real.
            trace!("{}: identity member, proceeding", call.identity());
            call.proceed();
        } else if call.target_kind() == TargetKind::Concrete &&
            !call.is_abstract()
        {
            // Unmatched calls to real, inherited behavior run the real
            // code.  Only Normal and looser behaviors get here.
            trace!("{}: proceeding to the real implementation",
                call.identity());
            call.proceed();
        } else if call.return_kind() != ReturnKind::Void {
            if self.behavior == Behavior::Loose {
                let value = match call.return_kind() {
                    ReturnKind::Value => DefaultValue::Zero,
                    _ => DefaultValue::Null,
                };
                trace!("{}: supplying {:?}", call.identity(), value);
                call.set_return_value(value);
            } else {
                // Only Relaxed gets this far.
                return Err(MockError::ReturnValueNoExpectation {
                    behavior: self.behavior,
                    invocation: call.identity().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Check that every setup marked verifiable was invoked.
    pub fn verify(&self) -> Result<(), MockError> {
        Verifier::new(&self.registry).verify()
    }

    /// Check that every setup, verifiable or not, was invoked.
    pub fn verify_all(&self) -> Result<(), MockError> {
        Verifier::new(&self.registry).verify_all()
    }
}
