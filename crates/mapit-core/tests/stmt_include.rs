use mapit_core::{
    schema::{FieldId, ModelId},
    stmt::{Compiled, Expr, Func, IncludeKind, IncludeTarget, Mapping, Param, Type, Value},
    Schema,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

struct Fixture {
    person: ModelId,
    person_address: FieldId,
    address: ModelId,
    address_city: FieldId,
    address_model: ModelId,
}

fn fixture() -> Fixture {
    let mut builder = Schema::builder();

    let person = builder.model("Person");
    let address = builder.model("Address");
    let address_model = builder.model("AddressModel");

    builder.field(person, "name", Type::String);
    let address_id = builder.nullable_field(person, "address_id", Type::I64);
    let person_address = builder.belongs_to(person, "address", address, Some(address_id));

    let address_city = builder.field(address, "city", Type::String);
    builder.field(address_model, "city", Type::String);

    builder.build().unwrap();

    Fixture {
        person,
        person_address,
        address,
        address_city,
        address_model,
    }
}

impl Fixture {
    /// `|address| AddressModel { city: address.city }`
    fn map_address(&self) -> Func {
        Func::from_fn("address", self.address, |address| {
            Expr::record(self.address_model, [Expr::field(address, self.address_city)])
        })
    }

    fn person(&self, address: Value) -> Value {
        let address_id = if address.is_null() {
            Value::Null
        } else {
            Value::I64(1)
        };
        Value::record_from_vec(vec![Value::from("Ada"), address_id, address])
    }

    fn address(&self, city: &str) -> Value {
        Value::record_from_vec(vec![Value::from(city)])
    }

    fn address_model(&self, city: &str) -> Value {
        Value::record_from_vec(vec![Value::from(city)])
    }
}

fn include_of(expr: &Expr) -> &mapit_core::stmt::ExprInclude {
    expr.as_include().expect("expected include")
}

// ---------------------------------------------------------------------------
// Resolving the mapping argument
// ---------------------------------------------------------------------------

#[test]
fn resolve_ast_include_of_func() {
    let f = fixture();
    let map_address = Arc::new(f.map_address());
    let person = Param::new("person", f.person);

    let expr = Expr::include(
        Expr::field(&person, f.person_address),
        map_address.clone(),
        f.address_model,
    );

    let IncludeTarget::Func(func) = include_of(&expr).resolve().unwrap() else {
        panic!("expected a function target");
    };
    assert!(Arc::ptr_eq(&func, &map_address));
}

#[test]
fn resolve_ast_include_narrows_mapping() {
    let f = fixture();
    let mapping = Mapping::from_func(f.map_address());
    let person = Param::new("person", f.person);

    let expr = Expr::include(
        Expr::field(&person, f.person_address),
        &mapping,
        f.address_model,
    );

    let IncludeTarget::Func(func) = include_of(&expr).resolve().unwrap() else {
        panic!("expected a function target");
    };
    assert!(Arc::ptr_eq(&func, mapping.func()));
}

#[test]
fn resolve_compiled_include_of_mapping() {
    let f = fixture();
    let mapping = Mapping::from_func(f.map_address());
    let person = Param::new("person", f.person);

    let expr = Expr::include_mapping(
        Expr::field(&person, f.person_address),
        &mapping,
        f.address_model,
    );

    let IncludeTarget::Mapping(target) = include_of(&expr).resolve().unwrap() else {
        panic!("expected a mapping target");
    };
    assert_eq!(target, mapping);
}

#[test]
fn resolve_compiled_include_rejects_func() {
    let f = fixture();
    let person = Param::new("person", f.person);

    let expr = Expr::include_mapping(
        Expr::field(&person, f.person_address),
        f.map_address(),
        f.address_model,
    );

    let err = include_of(&expr).resolve().unwrap_err();
    assert!(err.is_unresolved_marker_argument());
}

#[test]
fn resolve_rejects_non_function_value() {
    let f = fixture();
    let person = Param::new("person", f.person);

    let expr = Expr::include(
        Expr::field(&person, f.person_address),
        "map_address",
        f.address_model,
    );

    let err = include_of(&expr).resolve().unwrap_err();
    assert!(err.is_unresolved_marker_argument());
}

#[test]
fn resolve_rejects_record_dependent_mapping() {
    let f = fixture();
    let person = Param::new("person", f.person);

    // The mapping argument reads the record being mapped.
    let expr = Expr::include(
        Expr::field(&person, f.person_address),
        Expr::cond(
            Expr::is_null(&person),
            f.map_address(),
            f.map_address(),
        ),
        f.address_model,
    );

    let err = include_of(&expr).resolve().unwrap_err();
    assert!(err.is_unresolved_marker_argument());
    assert!(err.cause().unwrap().is_unbound_expression());
    assert_eq!(
        err.to_string(),
        "unresolved marker argument: mapping argument must not depend on the mapped record: \
         expression depends on unbound parameter `person`"
    );
}

// ---------------------------------------------------------------------------
// Related entity
// ---------------------------------------------------------------------------

#[test]
fn entity_of_navigation_binds_selector() {
    let f = fixture();
    let person = Param::new("person", f.person);
    let selector = Func::from_fn("p", f.person, |p| Expr::field(p, f.person_address));

    let expr = Expr::include_navigation(
        IncludeKind::Ast,
        &person,
        selector,
        f.map_address(),
        f.address_model,
    );

    assert_eq!(
        include_of(&expr).entity().unwrap(),
        Expr::field(&person, f.person_address)
    );
}

#[test]
fn extract_arguments_of_closed_include() {
    let f = fixture();
    let map_address = Arc::new(f.map_address());

    let expr = Expr::include(
        Expr::from(Value::Null),
        map_address.clone(),
        f.address_model,
    );

    let args = include_of(&expr).extract_arguments().unwrap();
    assert_eq!(args.keys().copied().collect::<Vec<_>>(), ["entity", "mapping"]);
    assert_eq!(args["entity"], Value::Null);
    assert_eq!(args["mapping"], Value::Func(map_address));
}

#[test]
fn extract_arguments_of_navigation_include() {
    let f = fixture();
    let selector = Func::from_fn("p", f.person, |p| Expr::field(p, f.person_address));

    let expr = Expr::include_navigation(
        IncludeKind::Ast,
        f.person(Value::Null),
        selector.clone(),
        f.map_address(),
        f.address_model,
    );

    let args = include_of(&expr).extract_arguments().unwrap();
    assert_eq!(
        args.keys().copied().collect::<Vec<_>>(),
        ["parent", "selector", "mapping"]
    );
    assert_eq!(args["selector"], Value::from(selector));
}

#[test]
fn extract_arguments_of_open_include_fails() {
    let f = fixture();
    let person = Param::new("person", f.person);

    let expr = Expr::include(
        Expr::field(&person, f.person_address),
        f.map_address(),
        f.address_model,
    );

    let err = include_of(&expr).extract_arguments().unwrap_err();
    assert!(err.is_unbound_expression());
}

// ---------------------------------------------------------------------------
// Evaluating without composition
// ---------------------------------------------------------------------------

#[test]
fn eval_include_of_absent_entity_is_null() {
    let f = fixture();
    let person = Param::new("person", f.person);
    let func = Func::lambda(
        person.clone(),
        Expr::include(
            Expr::field(&person, f.person_address),
            f.map_address(),
            f.address_model,
        ),
    );

    assert_eq!(func.call(&[f.person(Value::Null)]).unwrap(), Value::Null);
}

#[test]
fn eval_include_maps_entity() {
    let f = fixture();
    let person = Param::new("person", f.person);
    let func = Func::lambda(
        person.clone(),
        Expr::include(
            Expr::field(&person, f.person_address),
            f.map_address(),
            f.address_model,
        ),
    );

    assert_eq!(
        func.call(&[f.person(f.address("Paris"))]).unwrap(),
        f.address_model("Paris")
    );
}

#[test]
fn eval_navigation_include_of_absent_parent_is_null() {
    let f = fixture();
    let selector = Func::from_fn("p", f.person, |p| Expr::field(p, f.person_address));
    let expr = Expr::include_navigation(
        IncludeKind::Ast,
        Value::Null,
        selector,
        f.map_address(),
        f.address_model,
    );

    assert_eq!(expr.eval_const().unwrap(), Value::Null);
}

#[test]
fn eval_compiled_include_runs_compiled_form() {
    let f = fixture();
    let mapping = Mapping::new(
        f.map_address(),
        Compiled::from_fn(1, |_| Ok(Value::from("compiled"))),
    );

    let ast = Expr::include(f.address("Paris"), &mapping, f.address_model);
    assert_eq!(ast.eval_const().unwrap(), f.address_model("Paris"));

    let compiled = Expr::include_mapping(f.address("Paris"), &mapping, f.address_model);
    assert_eq!(compiled.eval_const().unwrap(), Value::from("compiled"));
}

// ---------------------------------------------------------------------------
// Marker detection
// ---------------------------------------------------------------------------

#[test]
fn contains_include() {
    let f = fixture();
    let person = Param::new("person", f.person);
    let include = Expr::include(
        Expr::field(&person, f.person_address),
        f.map_address(),
        f.address_model,
    );

    assert!(include.contains_include());
    assert!(Expr::list([Expr::null(), include.clone()]).contains_include());
    assert!(Func::lambda(person.clone(), Expr::cond(true, include, Expr::null())).contains_include());

    assert!(!f.map_address().contains_include());
    assert!(!Expr::field(&person, f.person_address).contains_include());
}
