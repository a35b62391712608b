// vim: tw=80
//! The expectation contract and the ready-made [`Setup`] implementation.

use std::{
    mem,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use downcast::{downcast, Any};
use fragile::Fragile;
use predicates::prelude::Predicate;

use crate::invocation::Invocation;

/// A registered rule pairing a match predicate with an execution effect.
///
/// Implementations own their invoked flag: it is flipped by
/// [`execute`](Self::execute), read by verification, and never externally
/// mutable.
pub trait Expectation: Any + Send + Sync {
    /// Canonical identity, the registry key.  Registering a second
    /// expectation with the same identity replaces the first.
    fn identity(&self) -> &str;

    /// Whether this expectation applies to `call`.
    fn matches(&self, call: &dyn Invocation) -> bool;

    /// Whether [`execute`](Self::execute) has run for this expectation.
    fn invoked(&self) -> bool;

    /// Whether [`verify`](crate::Interceptor::verify), as opposed to
    /// [`verify_all`](crate::Interceptor::verify_all), must see this
    /// expectation invoked.
    fn is_verifiable(&self) -> bool;

    /// Produce this expectation's configured effect on `call`.
    ///
    /// Marks the expectation invoked before the effect runs, so an effect
    /// configured to panic still counts the call as having happened.
    fn execute(&self, call: &mut dyn Invocation);
}
downcast!(dyn Expectation);

enum Matcher {
    Identity,
    Pred(Box<dyn Predicate<str> + Send>),
    Func(Box<dyn Fn(&dyn Invocation) -> bool + Send>),
}

impl Matcher {
    fn matches(&self, identity: &str, call: &dyn Invocation) -> bool {
        match self {
            Matcher::Identity => call.identity() == identity,
            Matcher::Pred(p) => p.eval(call.identity()),
            Matcher::Func(f) => f(call),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher::Identity
    }
}

/// Effect functions for setups
enum Action {
    Default,
    // Indicates that an `answer_once` effect has already run
    Expired,
    Mut(Box<dyn FnMut(&mut dyn Invocation) + Send>),
    Once(Box<dyn FnMut(&mut dyn Invocation) + Send>),
}

impl Action {
    fn call_mut(&mut self, call: &mut dyn Invocation) {
        match self {
            Action::Default => {},
            Action::Expired => {
                panic!("Called a method twice that was expected only once")
            },
            Action::Mut(f) => f(call),
            Action::Once(_) => {
                let fo = mem::replace(self, Action::Expired);
                if let Action::Once(mut f) = fo {
                    f(call)
                } else {
                    unreachable!()
                }
            },
        }
    }
}

/// The ready-made [`Expectation`]: the unit a setup-construction layer
/// produces, and the one to reach for in tests.
///
/// A new `Setup` matches every invocation whose identity equals its own,
/// produces no effect when executed, and is ignored by
/// [`verify`](crate::Interceptor::verify).  The builder methods replace
/// those defaults.
///
/// # Examples
/// ```
/// use standin::{Behavior, Call, Interceptor, Setup};
///
/// let interceptor = Interceptor::new(Behavior::Strict);
/// interceptor.add(Setup::new("Store::flush").verifiable());
///
/// interceptor.intercept(&mut Call::new("Store::flush")).unwrap();
/// interceptor.verify().unwrap();
/// ```
pub struct Setup {
    identity: String,
    matcher: Mutex<Matcher>,
    action: Mutex<Action>,
    invoked: AtomicBool,
    verifiable: bool,
}

impl Setup {
    pub fn new(identity: impl Into<String>) -> Self {
        Setup {
            identity: identity.into(),
            matcher: Mutex::new(Matcher::default()),
            action: Mutex::new(Action::Default),
            invoked: AtomicBool::new(false),
            verifiable: false,
        }
    }

    /// Match the invocation identity against `p` instead of requiring exact
    /// equality with this setup's identity.
    ///
    /// # Examples
    /// ```
    /// use standin::{predicate, Call, Expectation, Setup};
    ///
    /// let setup = Setup::new("reads")
    ///     .with(predicate::str::starts_with("Store::get"));
    /// assert!(setup.matches(&Call::new("Store::get_mut")));
    /// ```
    pub fn with<P>(mut self, p: P) -> Self
        where P: Predicate<str> + Send + 'static
    {
        *self.matcher.get_mut().unwrap() = Matcher::Pred(Box::new(p));
        self
    }

    /// Match with an arbitrary function over the whole invocation.
    pub fn withf<F>(mut self, f: F) -> Self
        where F: Fn(&dyn Invocation) -> bool + Send + 'static
    {
        *self.matcher.get_mut().unwrap() = Matcher::Func(Box::new(f));
        self
    }

    /// Single-threaded version of [`withf`](Self::withf).  Can be used when
    /// the matching function isn't `Send`.
    ///
    /// It is a runtime error to dispatch a matching call from a different
    /// thread than the one that configured this setup.
    pub fn withf_st<F>(mut self, f: F) -> Self
        where F: Fn(&dyn Invocation) -> bool + 'static
    {
        let fragile = Fragile::new(f);
        let func = move |call: &dyn Invocation| (fragile.get())(call);
        *self.matcher.get_mut().unwrap() = Matcher::Func(Box::new(func));
        self
    }

    /// Supply the effect closure run when this setup executes.
    ///
    /// The closure receives the live invocation; it can set return state on
    /// the adapter's concrete invocation type (via downcast) or panic with a
    /// configured failure, which propagates to the caller untouched.
    pub fn answering<F>(mut self, f: F) -> Self
        where F: FnMut(&mut dyn Invocation) + Send + 'static
    {
        *self.action.get_mut().unwrap() = Action::Mut(Box::new(f));
        self
    }

    /// Single-threaded version of [`answering`](Self::answering).  Can be
    /// used when the effect isn't `Send`.
    ///
    /// It is a runtime error to execute this setup from a different thread
    /// than the one that configured it.
    pub fn answering_st<F>(mut self, f: F) -> Self
        where F: FnMut(&mut dyn Invocation) + 'static
    {
        let mut fragile = Fragile::new(f);
        let func = move |call: &mut dyn Invocation| (fragile.get_mut())(call);
        *self.action.get_mut().unwrap() = Action::Mut(Box::new(func));
        self
    }

    /// Supply an `FnOnce` effect.  This is useful for effects that consume
    /// captured state.  Executing the setup a second time panics.
    pub fn answer_once<F>(mut self, f: F) -> Self
        where F: FnOnce(&mut dyn Invocation) + Send + 'static
    {
        let mut fopt = Some(f);
        let func = move |call: &mut dyn Invocation| {
            if let Some(f) = fopt.take() {
                f(call)
            } else {
                panic!("Called a method twice that was expected only once")
            }
        };
        *self.action.get_mut().unwrap() = Action::Once(Box::new(func));
        self
    }

    /// Single-threaded version of [`answer_once`](Self::answer_once).  This
    /// is useful for effects that are neither `Send` nor repeatable.
    pub fn answer_once_st<F>(mut self, f: F) -> Self
        where F: FnOnce(&mut dyn Invocation) + 'static
    {
        let mut fragile = Some(Fragile::new(f));
        let func = move |call: &mut dyn Invocation| {
            match fragile.take() {
                Some(frag) => (frag.into_inner())(call),
                None => panic!(
                    "Called a method twice that was expected only once"),
            }
        };
        *self.action.get_mut().unwrap() = Action::Once(Box::new(func));
        self
    }

    /// Mark this setup as one [`verify`](crate::Interceptor::verify) must
    /// see invoked.
    pub fn verifiable(mut self) -> Self {
        self.verifiable = true;
        self
    }
}

impl Expectation for Setup {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn matches(&self, call: &dyn Invocation) -> bool {
        self.matcher.lock().unwrap().matches(&self.identity, call)
    }

    fn invoked(&self) -> bool {
        self.invoked.load(Ordering::Relaxed)
    }

    fn is_verifiable(&self) -> bool {
        self.verifiable
    }

    fn execute(&self, call: &mut dyn Invocation) {
        self.invoked.store(true, Ordering::Relaxed);
        self.action.lock().unwrap().call_mut(call);
    }
}
