// vim: tw=80
//! Loose behavior never fails an unmatched call.

use standin::{Behavior, Call, DefaultValue, Interceptor, ReturnKind};

#[test]
fn void_member_is_a_no_op() {
    let interceptor = Interceptor::new(Behavior::Loose);
    let mut call = Call::new("Log::flush").on_trait();
    interceptor.intercept(&mut call).unwrap();
    assert!(!call.proceeded());
    assert_eq!(None, call.supplied_default());
}

#[test]
fn value_return_gets_the_zero_value() {
    let interceptor = Interceptor::new(Behavior::Loose);
    let mut call = Call::new("Store::len")
        .on_trait()
        .returns(ReturnKind::Value);
    interceptor.intercept(&mut call).unwrap();
    assert_eq!(Some(DefaultValue::Zero), call.supplied_default());
}

#[test]
fn reference_return_gets_the_null_equivalent() {
    let interceptor = Interceptor::new(Behavior::Loose);
    let mut call = Call::new("Store::head")
        .on_trait()
        .returns(ReturnKind::Reference);
    interceptor.intercept(&mut call).unwrap();
    assert_eq!(Some(DefaultValue::Null), call.supplied_default());
}

/// An abstract member of a concrete target can't proceed either; it gets
/// the same synthesized default.
#[test]
fn abstract_value_return_gets_the_zero_value() {
    let interceptor = Interceptor::new(Behavior::Loose);
    let mut call = Call::new("Base::len")
        .abstract_member()
        .returns(ReturnKind::Value);
    interceptor.intercept(&mut call).unwrap();
    assert_eq!(Some(DefaultValue::Zero), call.supplied_default());
}

/// Proceeding beats synthesizing: a concrete, non-abstract member runs the
/// real code even though a default could have been supplied.
#[test]
fn concrete_member_proceeds_instead() {
    let interceptor = Interceptor::new(Behavior::Loose);
    let mut call = Call::new("Base::len").returns(ReturnKind::Value);
    interceptor.intercept(&mut call).unwrap();
    assert!(call.proceeded());
    assert_eq!(None, call.supplied_default());
}
