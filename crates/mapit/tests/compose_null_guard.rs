use mapit::{
    schema::{FieldId, ModelId},
    Composer, Expr, Func, NavigationKeys, NullGuard, NullableKey, NullableKeyCache, Schema, Type,
    Value,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// An order with one relation per guard outcome.
struct Fixture {
    schema: Arc<Schema>,

    order: ModelId,
    /// Required key.
    order_customer: FieldId,
    /// Nullable key found by name, no declared foreign key.
    order_coupon_id: FieldId,
    order_coupon: FieldId,
    /// No key at all.
    order_note: FieldId,
    /// Nullable key that is not numeric.
    order_gift: FieldId,

    label: ModelId,
    label_text: FieldId,
    label_model: ModelId,
}

fn fixture() -> Fixture {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut builder = Schema::builder();

    let order = builder.model("Order");
    let label = builder.model("Label");
    let label_model = builder.model("LabelModel");

    builder.field(order, "number", Type::I64);

    let customer_id = builder.field(order, "customer_id", Type::I64);
    let order_customer = builder.belongs_to(order, "customer", label, Some(customer_id));

    let order_coupon_id = builder.nullable_field(order, "coupon_id", Type::I64);
    let order_coupon = builder.belongs_to(order, "coupon", label, None);

    let order_note = builder.has_one(order, "note", label);

    let gift_code = builder.nullable_field(order, "gift_code", Type::String);
    let order_gift = builder.belongs_to(order, "gift", label, Some(gift_code));

    let label_text = builder.field(label, "text", Type::String);
    builder.field(label_model, "text", Type::String);

    Fixture {
        schema: Arc::new(builder.build().unwrap()),
        order,
        order_customer,
        order_coupon_id,
        order_coupon,
        order_note,
        order_gift,
        label,
        label_text,
        label_model,
    }
}

impl Fixture {
    /// `|label| LabelModel { text: label.text }`
    fn map_label(&self) -> Func {
        Func::from_fn("label", self.label, |label| {
            Expr::record(self.label_model, [Expr::field(label, self.label_text)])
        })
    }

    /// `|order| include(order.<navigation>, map_label)`
    fn map_order(&self, navigation: FieldId) -> Func {
        Func::from_fn("order", self.order, |order| {
            Expr::include(
                Expr::field(order, navigation),
                self.map_label(),
                self.label_model,
            )
        })
    }

    /// The inlined body of `map_order(navigation)` without a guard.
    fn inlined(&self, func: &Func, navigation: FieldId) -> Expr {
        Expr::record(
            self.label_model,
            [Expr::field(
                Expr::field(&func.params[0], navigation),
                self.label_text,
            )],
        )
    }

    fn order_row(&self, coupon: Option<&str>) -> Value {
        let label = |text: &str| Value::record_from_vec(vec![Value::from(text)]);

        Value::record_from_vec(vec![
            // number
            Value::I64(1),
            // customer_id, customer
            Value::I64(10),
            label("customer"),
            // coupon_id, coupon
            Value::from(coupon.map(|_| 20i64)),
            Value::from(coupon.map(label)),
            // note
            Value::Null,
            // gift_code, gift
            Value::Null,
            Value::Null,
        ])
    }
}

struct FixedKey(FieldId);

impl NavigationKeys for FixedKey {
    fn nullable_key(&self, _navigation: FieldId) -> NullableKey {
        NullableKey {
            field: Some(self.0),
            nullable: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Key lookup
// ---------------------------------------------------------------------------

#[test]
fn schema_keys() {
    let f = fixture();

    assert_eq!(
        f.schema.nullable_key(f.order_coupon),
        NullableKey {
            field: Some(f.order_coupon_id),
            nullable: true,
        }
    );

    let customer = f.schema.nullable_key(f.order_customer);
    assert!(customer.field.is_some());
    assert!(!customer.nullable);
    assert_eq!(customer.guard_field(), None);

    assert_eq!(f.schema.nullable_key(f.order_note), NullableKey::NONE);

    let gift = f.schema.nullable_key(f.order_gift);
    assert!(gift.field.is_some());
    assert_eq!(gift.guard_field(), None);

    // Not a navigation.
    assert_eq!(f.schema.nullable_key(f.order_coupon_id), NullableKey::NONE);
}

// ---------------------------------------------------------------------------
// Guard placement
// ---------------------------------------------------------------------------

#[test]
fn guard_on_nullable_key() {
    let f = fixture();
    let func = f.map_order(f.order_coupon);

    let composed = Composer::new(f.schema.clone()).compose_func(&func).unwrap();

    assert_eq!(
        composed.body,
        Expr::cond(
            Expr::is_not_null(Expr::field(&func.params[0], f.order_coupon_id)),
            f.inlined(&func, f.order_coupon),
            Expr::null(),
        )
    );
}

#[test]
fn no_guard_on_required_key() {
    let f = fixture();
    let func = f.map_order(f.order_customer);

    let composed = Composer::new(f.schema.clone()).compose_func(&func).unwrap();
    assert_eq!(composed.body, f.inlined(&func, f.order_customer));
}

#[test]
fn no_guard_without_key() {
    let f = fixture();
    let func = f.map_order(f.order_note);

    let composed = Composer::new(f.schema.clone()).compose_func(&func).unwrap();
    assert_eq!(composed.body, f.inlined(&func, f.order_note));
}

#[test]
fn no_guard_on_non_numeric_key() {
    let f = fixture();
    let func = f.map_order(f.order_gift);

    let composed = Composer::new(f.schema.clone()).compose_func(&func).unwrap();
    assert_eq!(composed.body, f.inlined(&func, f.order_gift));
}

#[test]
fn no_guard_when_entity_is_not_a_field() {
    let f = fixture();
    let func = Func::from_fn("label", f.label, |label| {
        Expr::include(label, f.map_label(), f.label_model)
    });

    let composed = Composer::new(f.schema.clone()).compose_func(&func).unwrap();
    assert_eq!(
        composed.body,
        Expr::record(
            f.label_model,
            [Expr::field(&func.params[0], f.label_text)]
        )
    );
}

#[test]
fn no_guard_when_disabled() {
    let f = fixture();
    let func = f.map_order(f.order_coupon);

    let composer = Composer::builder()
        .null_guard(NullGuard::Disabled)
        .build(f.schema.clone());

    let composed = composer.compose_func(&func).unwrap();
    assert_eq!(composed.body, f.inlined(&func, f.order_coupon));
    assert!(composer.cache().is_empty());
}

#[test]
fn guard_with_custom_keys() {
    let f = fixture();
    let func = f.map_order(f.order_note);

    let composer = Composer::builder()
        .keys(FixedKey(f.order_coupon_id))
        .build(f.schema.clone());

    let composed = composer.compose_func(&func).unwrap();
    assert_eq!(
        composed.body,
        Expr::cond(
            Expr::is_not_null(Expr::field(&func.params[0], f.order_coupon_id)),
            f.inlined(&func, f.order_note),
            Expr::null(),
        )
    );
}

// ---------------------------------------------------------------------------
// Guard behavior
// ---------------------------------------------------------------------------

#[test]
fn guarded_mapping_of_absent_entity_is_null() {
    let f = fixture();
    let composed = Composer::new(f.schema.clone())
        .compose_func(&f.map_order(f.order_coupon))
        .unwrap();

    assert_eq!(composed.call(&[f.order_row(None)]).unwrap(), Value::Null);
}

#[test]
fn guarded_mapping_of_present_entity_matches_direct_call() {
    let f = fixture();
    let map_label = f.map_label();
    let composed = Composer::new(f.schema.clone())
        .compose_func(&f.map_order(f.order_coupon))
        .unwrap();

    let coupon = Value::record_from_vec(vec![Value::from("SAVE10")]);

    assert_eq!(
        composed.call(&[f.order_row(Some("SAVE10"))]).unwrap(),
        map_label.call(&[coupon]).unwrap()
    );
}

#[test]
fn unguarded_mapping_of_absent_entity_fails() {
    let f = fixture();
    let composed = Composer::builder()
        .null_guard(NullGuard::Disabled)
        .build(f.schema.clone())
        .compose_func(&f.map_order(f.order_coupon))
        .unwrap();

    let err = composed.call(&[f.order_row(None)]).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

#[test]
fn compose_fills_shared_cache() {
    let f = fixture();
    let cache = Arc::new(NullableKeyCache::new());

    let composer = Composer::builder()
        .cache(cache.clone())
        .build(f.schema.clone());

    composer.compose_func(&f.map_order(f.order_coupon)).unwrap();
    composer.compose_func(&f.map_order(f.order_note)).unwrap();
    composer.compose_func(&f.map_order(f.order_coupon)).unwrap();

    assert_eq!(cache.len(), 2);
    assert_eq!(
        cache.get(f.order_coupon),
        Some(NullableKey {
            field: Some(f.order_coupon_id),
            nullable: true,
        })
    );
    assert_eq!(cache.get(f.order_note), Some(NullableKey::NONE));
    assert_eq!(cache.get(f.order_customer), None);

    // A second composer sees the entries of the first.
    let other = Composer::builder().cache(cache.clone()).build(f.schema.clone());
    assert!(Arc::ptr_eq(other.cache(), &cache));
}
