//! Integration tests for the logistics registry and delivery planning

use kiln_logistics::{
    create_logistics, plan_delivery, resolve_delivery_key, DeliveryKind, DEFAULT_DELIVERY,
};

#[test]
fn test_each_key_yields_a_distinct_strategy() {
    let kinds: Vec<_> = ["road", "sea", "air"]
        .into_iter()
        .map(|key| create_logistics(key).kind())
        .collect();

    assert_eq!(kinds, vec![DeliveryKind::Road, DeliveryKind::Sea, DeliveryKind::Air]);
}

#[test]
fn test_unknown_key_matches_default_strategy() {
    let fallback = plan_delivery(create_logistics("unknown-key").as_ref());
    let default = plan_delivery(create_logistics(DEFAULT_DELIVERY).as_ref());

    assert_eq!(fallback, default);
    assert_eq!(resolve_delivery_key("unknown-key"), DEFAULT_DELIVERY);
}

#[test]
fn test_plans_follow_start_deliver_stop() {
    for key in ["road", "sea", "air"] {
        let plan = plan_delivery(create_logistics(key).as_ref());
        assert_eq!(plan.kind.as_key(), key);
        assert_eq!(plan.steps.len(), 3);
        assert!(plan.steps[0].starts_with("Starting"));
        assert!(plan.steps[1].starts_with("Delivering"));
        assert!(plan.steps[2].starts_with("Stopping"));
    }
}

#[test]
fn test_calls_are_independent() {
    let first = create_logistics("sea");
    let _other = create_logistics("air");
    let second = create_logistics("sea");

    assert_eq!(plan_delivery(first.as_ref()), plan_delivery(second.as_ref()));
}
