// vim: tw=80
//! Under Strict behavior every call must match a setup; nothing is exempt.

use standin::{
    Behavior, Call, Expectation, FailureKind, Interceptor, MockError,
    ReturnKind, Setup,
};

#[test]
fn unmatched_call_fails() {
    let interceptor = Interceptor::new(Behavior::Strict);
    let err = interceptor.intercept(&mut Call::new("foo()")).unwrap_err();
    assert_eq!(FailureKind::NoExpectation, err.kind());
    match &err {
        MockError::NoExpectation { behavior, invocation } => {
            assert_eq!(Behavior::Strict, *behavior);
            assert_eq!("foo()", invocation.as_str());
        },
        other => panic!("wrong error: {other}"),
    }
}

/// Identity members are not exempt: Strict fails before the identity
/// fallback is ever considered.
#[test]
fn identity_members_are_not_exempt() {
    let interceptor = Interceptor::new(Behavior::Strict);
    let mut call = Call::new("Display::fmt").identity_member();
    let err = interceptor.intercept(&mut call).unwrap_err();
    assert_eq!(FailureKind::NoExpectation, err.kind());
    assert!(!call.proceeded());
}

#[test]
fn concrete_members_are_not_exempt() {
    let interceptor = Interceptor::new(Behavior::Strict);
    let mut call = Call::new("Base::ping");
    let err = interceptor.intercept(&mut call).unwrap_err();
    assert_eq!(FailureKind::NoExpectation, err.kind());
    assert!(!call.proceeded());
}

#[test]
fn return_kind_is_irrelevant() {
    let interceptor = Interceptor::new(Behavior::Strict);
    for kind in [ReturnKind::Void, ReturnKind::Value, ReturnKind::Reference]
    {
        let mut call = Call::new("foo()").on_trait().returns(kind);
        let err = interceptor.intercept(&mut call).unwrap_err();
        assert_eq!(FailureKind::NoExpectation, err.kind());
        assert_eq!(None, call.supplied_default());
    }
}

#[test]
fn matched_call_executes() {
    let interceptor = Interceptor::new(Behavior::Strict);
    interceptor.add(Setup::new("foo()"));
    interceptor.intercept(&mut Call::new("foo()")).unwrap();

    let all = interceptor.registry().all();
    assert!(all[0].invoked());
}
