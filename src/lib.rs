// vim: tw=80
//! Invocation interception and verification core for mock objects.
//!
//! Standin is the engine that sits between a substitute object and the code
//! under test.  Given a call made against the substitute — reified as an
//! [`Invocation`] by whatever proxy layer produced the substitute — it
//! decides whether a previously registered [`Setup`] applies, what to do
//! when none applies (governed by the substitute's [`Behavior`]), and how
//! to answer later queries asking whether the expected calls actually
//! happened.
//!
//! Standin deliberately does *not* generate substitute objects, parse
//! call-expression setup syntax, or render user-facing failure messages.
//! Those live in the layers around it.  What it does own is the dispatch
//! state machine, and it owns all of it: four behaviors, five failure
//! kinds, object-identity members, abstract and concrete targets, and
//! value and reference return types.
//!
//! # User Guide
//!
//! * [`Getting started`](#getting-started)
//! * [`Behaviors`](#behaviors)
//! * [`Matching`](#matching)
//! * [`Effects`](#effects)
//! * [`Verification`](#verification)
//! * [`Multiple setups`](#multiple-setups)
//! * [`Threads`](#threads)
//!
//! ## Getting started
//!
//! Create an [`Interceptor`] with the behavior the substitute should have,
//! register setups on it, and feed it one invocation per intercepted call.
//! The [`Call`] type is a ready-made invocation for adapters and tests.
//!
//! ```
//! use standin::{Behavior, Call, Interceptor, Setup};
//!
//! let interceptor = Interceptor::new(Behavior::Strict);
//! interceptor.add(Setup::new("Store::flush"));
//!
//! interceptor.intercept(&mut Call::new("Store::flush")).unwrap();
//! ```
//!
//! ## Behaviors
//!
//! A matched setup always executes, whatever the behavior.  The behavior
//! only governs unmatched calls, and only one behavior can ever produce
//! each failure kind.
//!
//! Under [`Behavior::Strict`] every call must match a setup; nothing is
//! exempt, identity members included.
//!
//! ```
//! use standin::{Behavior, Call, FailureKind, Interceptor};
//!
//! let strict = Interceptor::new(Behavior::Strict);
//! let err = strict.intercept(&mut Call::new("Store::get")).unwrap_err();
//! assert_eq!(FailureKind::NoExpectation, err.kind());
//! ```
//!
//! [`Behavior::Normal`] protects contract members — anything declared on a
//! trait, and anything abstract — but lets real, inherited behavior run.
//!
//! ```
//! use standin::{Behavior, Call, FailureKind, Interceptor};
//!
//! let normal = Interceptor::new(Behavior::Normal);
//!
//! let err = normal
//!     .intercept(&mut Call::new("Repo::save").on_trait())
//!     .unwrap_err();
//! assert_eq!(FailureKind::InterfaceNoExpectation, err.kind());
//!
//! let mut call = Call::new("Base::ping");
//! normal.intercept(&mut call).unwrap();
//! assert!(call.proceeded());
//! ```
//!
//! [`Behavior::Relaxed`] tolerates any gap that doesn't need a value: void
//! members complete silently, but a call that must produce a value and has
//! no real implementation to produce it fails.
//!
//! ```
//! use standin::{Behavior, Call, FailureKind, Interceptor, ReturnKind};
//!
//! let relaxed = Interceptor::new(Behavior::Relaxed);
//!
//! relaxed.intercept(&mut Call::new("Log::flush").on_trait()).unwrap();
//!
//! let err = relaxed
//!     .intercept(&mut Call::new("Store::len")
//!         .on_trait()
//!         .returns(ReturnKind::Value))
//!     .unwrap_err();
//! assert_eq!(FailureKind::ReturnValueNoExpectation, err.kind());
//! ```
//!
//! [`Behavior::Loose`] never fails an unmatched call: where `Relaxed`
//! would give up, it synthesizes a default return value instead — the zero
//! value for value types, the null equivalent for reference types.
//!
//! ```
//! use standin::{Behavior, Call, DefaultValue, Interceptor, ReturnKind};
//!
//! let loose = Interceptor::new(Behavior::Loose);
//! let mut call = Call::new("Store::len")
//!     .on_trait()
//!     .returns(ReturnKind::Value);
//! loose.intercept(&mut call).unwrap();
//! assert_eq!(Some(DefaultValue::Zero), call.supplied_default());
//! ```
//!
//! Whatever the behavior short of `Strict`, unmatched calls to the
//! universal identity members (equality, hashing, string representation)
//! always proceed to the real implementation.
//!
//! ## Matching
//!
//! By default a setup matches invocations whose identity equals its own.
//! A [`Predicate`] over the identity, or an arbitrary function over the
//! whole invocation, widens that.
//!
//! ```
//! use standin::{predicate, Behavior, Call, Interceptor, Invocation, Setup};
//!
//! let interceptor = Interceptor::new(Behavior::Strict);
//! interceptor.add(Setup::new("reads")
//!     .with(predicate::str::starts_with("Store::get")));
//! interceptor.add(Setup::new("writes")
//!     .withf(|call: &dyn Invocation| {
//!         call.identity().starts_with("Store::set")
//!     }));
//!
//! interceptor.intercept(&mut Call::new("Store::get_all")).unwrap();
//! interceptor.intercept(&mut Call::new("Store::set_one")).unwrap();
//! ```
//!
//! ## Effects
//!
//! Executing a setup runs its effect closure against the live invocation.
//! The closure can capture test state, downcast the invocation to the
//! adapter's concrete type to set a return value, or panic to model a
//! configured failure — the panic propagates to the caller untouched.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use standin::{Behavior, Call, Interceptor, Invocation, Setup};
//!
//! let hits = Arc::new(AtomicUsize::new(0));
//! let h = hits.clone();
//!
//! let interceptor = Interceptor::new(Behavior::Strict);
//! interceptor.add(Setup::new("Greeter::greet").answering(
//!     move |_: &mut dyn Invocation| {
//!         h.fetch_add(1, Ordering::Relaxed);
//!     },
//! ));
//!
//! interceptor.intercept(&mut Call::new("Greeter::greet")).unwrap();
//! assert_eq!(1, hits.load(Ordering::Relaxed));
//! ```
//!
//! ## Verification
//!
//! [`Interceptor::verify`] checks every setup marked
//! [`verifiable`](Setup::verifiable); [`Interceptor::verify_all`] checks
//! every setup, full stop.  Both report *all* offenders, not just the
//! first, and neither consumes any state.
//!
//! ```
//! use standin::{Behavior, Call, FailureKind, Interceptor, Setup};
//!
//! let interceptor = Interceptor::new(Behavior::Loose);
//! interceptor.add(Setup::new("Store::get").verifiable());
//! interceptor.add(Setup::new("Store::set"));
//!
//! let err = interceptor.verify().unwrap_err();
//! assert_eq!(FailureKind::VerificationFailed, err.kind());
//!
//! interceptor.intercept(&mut Call::new("Store::get")).unwrap();
//! interceptor.verify().unwrap();
//!
//! // verify_all still flags the unverifiable, uninvoked setup.
//! assert!(interceptor.verify_all().is_err());
//! ```
//!
//! ## Multiple setups
//!
//! Setups are keyed by identity: registering a second setup with the same
//! identity replaces the first, so the most recently configured setup for
//! a given call shape wins.
//!
//! ```
//! use standin::{Behavior, Call, Interceptor, Setup};
//!
//! let interceptor = Interceptor::new(Behavior::Strict);
//! interceptor.add(Setup::new("Store::get").verifiable());
//! // Reconfiguring the same call shape replaces the earlier setup.
//! interceptor.add(Setup::new("Store::get"));
//!
//! interceptor.verify().unwrap();
//! ```
//!
//! Setups with *different* identities whose matchers overlap resolve in
//! ascending identity order — the first match wins.  There is no
//! most-specific-wins ranking; order a fallback matcher's identity after
//! the specific ones if both could match.
//!
//! ## Threads
//!
//! Every operation is synchronous on the caller's thread; the registry
//! serializes configuration against dispatch, and no lock is held while a
//! setup's effect or a real implementation runs.  One interceptor may be
//! driven from many threads at once.  The `_st` setup variants
//! ([`Setup::withf_st`], [`Setup::answering_st`],
//! [`Setup::answer_once_st`]) accept non-`Send` closures in exchange for
//! confining that setup to the thread that configured it.

mod error;
mod expectation;
mod interceptor;
mod invocation;
mod registry;
mod verify;

pub use error::{FailureKind, MockError};
pub use expectation::{Expectation, Setup};
pub use interceptor::Interceptor;
pub use invocation::{Call, DefaultValue, Invocation, ReturnKind, TargetKind};
pub use registry::Registry;
pub use verify::Verifier;

pub use predicates::prelude::{Predicate, predicate};

/// Governs what happens when a call matches no setup.
///
/// Fixed once per [`Interceptor`]; a matched setup always executes
/// regardless of behavior.  The variants are ordered from least to most
/// permissive.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Behavior {
    /// Every call must match a setup.  Anything else fails with
    /// [`FailureKind::NoExpectation`], identity members included.
    Strict,
    /// Contract members — trait-declared or abstract — must match a setup;
    /// concrete members fall back to the real implementation.
    #[default]
    Normal,
    /// Never fails for void or proceedable gaps, but an unmatched call
    /// that must produce a value and can't gets
    /// [`FailureKind::ReturnValueNoExpectation`].
    Relaxed,
    /// Never fails an unmatched call: proceeds where possible, otherwise
    /// synthesizes a default return value.
    Loose,
}
