// vim: tw=80
//! The failure taxonomy of the interception core.

use thiserror::Error;

use crate::Behavior;

/// Discriminant of a [`MockError`], for renderers that pick a message
/// template by kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    NoExpectation,
    InterfaceNoExpectation,
    AbstractNoExpectation,
    ReturnValueNoExpectation,
    VerificationFailed,
}

/// A dispatch or verification failure.
///
/// Every variant carries the structured context a message renderer needs:
/// the active behavior and the identity of the offending invocation, or the
/// identities of every offending setup.  The `Display` strings here are
/// debugging aids; rendering the user-facing message is the caller's
/// concern.  None of these failures is recoverable by the core: each is
/// fatal to the call (or the verify operation) that produced it.
#[derive(Debug, Error)]
pub enum MockError {
    /// A strict substitute was called with no matching setup.
    #[error("{invocation}: no setup matches this call under {behavior:?} \
             behavior")]
    NoExpectation {
        behavior: Behavior,
        invocation: String,
    },

    /// An unmatched call to a member declared on a contract-only trait.
    #[error("{invocation}: trait members require a setup under {behavior:?} \
             behavior")]
    InterfaceNoExpectation {
        behavior: Behavior,
        invocation: String,
    },

    /// An unmatched call to an abstract member of a concrete target.
    #[error("{invocation}: abstract members require a setup under \
             {behavior:?} behavior")]
    AbstractNoExpectation {
        behavior: Behavior,
        invocation: String,
    },

    /// An unmatched call that must produce a value, with no real
    /// implementation to produce it.
    #[error("{invocation}: no setup supplies a return value under \
             {behavior:?} behavior")]
    ReturnValueNoExpectation {
        behavior: Behavior,
        invocation: String,
    },

    /// One or more setups failed the verification predicate.
    #[error("{} setups were never invoked: {}", .setups.len(),
            .setups.join(", "))]
    VerificationFailed {
        setups: Vec<String>,
    },
}

impl MockError {
    pub fn kind(&self) -> FailureKind {
        match self {
            MockError::NoExpectation { .. } => FailureKind::NoExpectation,
            MockError::InterfaceNoExpectation { .. } =>
                FailureKind::InterfaceNoExpectation,
            MockError::AbstractNoExpectation { .. } =>
                FailureKind::AbstractNoExpectation,
            MockError::ReturnValueNoExpectation { .. } =>
                FailureKind::ReturnValueNoExpectation,
            MockError::VerificationFailed { .. } =>
                FailureKind::VerificationFailed,
        }
    }
}
