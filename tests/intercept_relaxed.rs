// vim: tw=80
//! Relaxed behavior tolerates any gap that doesn't need a value.

use standin::{
    Behavior, Call, FailureKind, Interceptor, MockError, ReturnKind, Setup,
};

#[test]
fn value_gap_fails() {
    let interceptor = Interceptor::new(Behavior::Relaxed);
    let err = interceptor
        .intercept(&mut Call::new("Store::len")
            .on_trait()
            .returns(ReturnKind::Value))
        .unwrap_err();
    assert_eq!(FailureKind::ReturnValueNoExpectation, err.kind());
    match &err {
        MockError::ReturnValueNoExpectation { behavior, invocation } => {
            assert_eq!(Behavior::Relaxed, *behavior);
            assert_eq!("Store::len", invocation.as_str());
        },
        other => panic!("wrong error: {other}"),
    }
}

#[test]
fn abstract_reference_gap_fails() {
    let interceptor = Interceptor::new(Behavior::Relaxed);
    let err = interceptor
        .intercept(&mut Call::new("Base::head")
            .abstract_member()
            .returns(ReturnKind::Reference))
        .unwrap_err();
    assert_eq!(FailureKind::ReturnValueNoExpectation, err.kind());
}

#[test]
fn void_gap_is_a_no_op() {
    let interceptor = Interceptor::new(Behavior::Relaxed);
    let mut call = Call::new("Log::flush").on_trait();
    interceptor.intercept(&mut call).unwrap();
    assert!(!call.proceeded());
}

#[test]
fn concrete_member_proceeds() {
    let interceptor = Interceptor::new(Behavior::Relaxed);
    let mut call = Call::new("Base::len").returns(ReturnKind::Value);
    interceptor.intercept(&mut call).unwrap();
    assert!(call.proceeded());
}

#[test]
fn matched_value_member_executes() {
    let interceptor = Interceptor::new(Behavior::Relaxed);
    interceptor.add(Setup::new("Store::len"));
    interceptor
        .intercept(&mut Call::new("Store::len")
            .on_trait()
            .returns(ReturnKind::Value))
        .unwrap();
}
