use mapit_core::{
    schema::{FieldId, ModelId},
    stmt::{Expr, Func, Param, Type, Value, ValueRecord},
};
use pretty_assertions::assert_eq;

fn field(index: usize) -> FieldId {
    FieldId {
        model: ModelId(0),
        index,
    }
}

fn record(fields: impl IntoIterator<Item = Value>) -> Value {
    Value::record_from_vec(fields.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

#[test]
fn eval_const_value() {
    assert_eq!(Expr::from(42i64).eval_const().unwrap(), Value::I64(42));
    assert_eq!(Expr::null().eval_const().unwrap(), Value::Null);
}

#[test]
fn eval_const_comparisons() {
    assert_eq!(Expr::eq("a", "a").eval_const().unwrap(), Value::Bool(true));
    assert_eq!(Expr::ne(1i64, 1i64).eval_const().unwrap(), Value::Bool(false));
    assert_eq!(Expr::lt(1i32, 2i64).eval_const().unwrap(), Value::Bool(true));
    assert_eq!(Expr::ge("b", "a").eval_const().unwrap(), Value::Bool(true));
    assert_eq!(Expr::le(3i64, 2i64).eval_const().unwrap(), Value::Bool(false));
}

#[test]
fn eval_const_ordering_mixed_kinds_fails() {
    let err = Expr::lt("a", 1i64).eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn eval_const_is_null() {
    assert_eq!(
        Expr::is_null(Expr::null()).eval_const().unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        Expr::is_not_null(Expr::null()).eval_const().unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        Expr::is_not_null(1i64).eval_const().unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn eval_const_cond() {
    let expr = Expr::cond(Expr::gt(2i64, 1i64), "then", "otherwise");
    assert_eq!(expr.eval_const().unwrap(), Value::from("then"));

    let expr = Expr::cond(false, "then", "otherwise");
    assert_eq!(expr.eval_const().unwrap(), Value::from("otherwise"));
}

#[test]
fn eval_const_cond_requires_bool() {
    let err = Expr::cond(1i64, "then", "otherwise")
        .eval_const()
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn eval_const_record_and_field() {
    let expr = Expr::field(Expr::record(ModelId(0), ["a", "b"]), field(1));
    assert_eq!(expr.eval_const().unwrap(), Value::from("b"));
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

#[test]
fn eval_const_unbound_param() {
    let x = Param::new("x", Type::I64);

    let err = Expr::eq(&x, 1i64).eval_const().unwrap_err();
    assert!(err.is_unbound_expression());
    assert!(err.to_string().contains("`x`"));
}

#[test]
fn eval_with_params() {
    let x = Param::new("x", Type::I64);
    let y = Param::new("y", Type::I64);

    let expr = Expr::lt(&x, &y);
    assert_eq!(
        expr.eval(&[x.clone(), y.clone()], &[Value::I64(1), Value::I64(2)])
            .unwrap(),
        Value::Bool(true)
    );

    let err = expr.eval(&[x], &[Value::I64(1)]).unwrap_err();
    assert!(err.is_unbound_expression());
}

#[test]
fn func_call_arity_mismatch() {
    let func = Func::from_fn("x", Type::I64, |x| x);

    let err = func.call(&[]).unwrap_err();
    assert!(err.is_arity_mismatch());
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[test]
fn field_of_null_is_an_error() {
    let func = Func::from_fn("row", ModelId(0), |row| Expr::field(row, field(0)));

    let err = func.call(&[Value::Null]).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("null dereference"));
}

#[test]
fn field_out_of_range_is_an_error() {
    let func = Func::from_fn("row", ModelId(0), |row| Expr::field(row, field(3)));

    let err = func.call(&[record([Value::I64(1)])]).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn field_of_record() {
    let func = Func::from_fn("row", ModelId(0), |row| {
        Expr::record(
            ModelId(1),
            [Expr::field(row.clone(), field(1)), Expr::field(row, field(0))],
        )
    });

    assert_eq!(
        func.call(&[record([Value::I64(1), Value::from("one")])])
            .unwrap(),
        Value::Record(ValueRecord::from_vec(vec![
            Value::from("one"),
            Value::I64(1)
        ]))
    );
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[test]
fn map_over_list() {
    let expr = Expr::map(
        Expr::list([1i64, 2i64, 3i64]),
        Func::from_fn("item", Type::I64, |item| Expr::ge(item, 2i64)),
    );

    assert_eq!(
        expr.eval_const().unwrap(),
        Value::List(vec![
            Value::Bool(false),
            Value::Bool(true),
            Value::Bool(true)
        ])
    );
}

#[test]
fn map_captures_outer_param() {
    let rows = Param::new("rows", Type::list(ModelId(0)));
    let func = Func::lambda(
        rows.clone(),
        Expr::map(
            &rows,
            Func::from_fn("row", ModelId(0), |row| Expr::field(row, field(0))),
        ),
    );

    let rows = Value::List(vec![record([Value::from("a")]), record([Value::from("b")])]);
    assert_eq!(
        func.call(&[rows]).unwrap(),
        Value::List(vec![Value::from("a"), Value::from("b")])
    );
}

#[test]
fn map_over_non_list_fails() {
    let expr = Expr::map(1i64, Func::from_fn("item", Type::I64, |item| item));

    let err = expr.eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

// ---------------------------------------------------------------------------
// Calls
// ---------------------------------------------------------------------------

#[test]
fn call_func_value() {
    let double = Func::from_fn("x", Type::I64, |x| Expr::list([x.clone(), x]));

    let expr = Expr::call(double, [5i64]);
    assert_eq!(
        expr.eval_const().unwrap(),
        Value::List(vec![Value::I64(5), Value::I64(5)])
    );
}

#[test]
fn call_non_func_value_fails() {
    let err = Expr::call(1i64, [2i64]).eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn call_extract_arguments() {
    let x = Param::new("x", Type::I64);
    let func = Func::lambda(x.clone(), Expr::from(&x));

    let Expr::Call(call) = Expr::call(func.clone(), [Expr::from(1i64), Expr::from("two")]) else {
        unreachable!()
    };
    assert_eq!(
        call.extract_arguments().unwrap(),
        vec![Value::I64(1), Value::from("two")]
    );

    let Expr::Call(call) = Expr::call(func, [Expr::from(&x)]) else {
        unreachable!()
    };
    assert!(call.extract_arguments().unwrap_err().is_unbound_expression());
}
