//! Fluid inventory tests
//!
//! Fluids run through the same slot algorithms and decorators as items;
//! these cover the fluid-specific surface and the empty transferable.

use void_fluid::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn water(amount: u32) -> FluidVolume {
    FluidKey::new("water").with_amount(amount)
}

fn lava(amount: u32) -> FluidVolume {
    FluidKey::new("lava").with_amount(amount)
}

#[test]
fn test_inverted_filter_double_negation() {
    let filter = fluid_set([FluidKey::new("water"), FluidKey::new("lava")]);
    let inverted = filter.negate();

    assert!(!inverted.matches(&water(1)));
    assert!(inverted.matches(&FluidKey::new("oil").with_amount(1)));
    assert!(inverted.negate().same(&filter));
}

#[test]
fn test_empty_fluid_transferable() {
    for transferable in [EmptyFluidTransferable::Null, EmptyFluidTransferable::Controller] {
        let volume = water(BUCKET);
        assert_eq!(transferable.attempt_insertion(&volume, Simulation::Action), volume);

        let drained: FluidVolume = transferable.attempt_extraction(&Filter::Everything, BUCKET, Simulation::Action);
        assert!(drained.is_empty());
        assert!(Insertable::<FluidVolume>::insertion_filter(&transferable).is_nothing());
    }

    assert!(EmptyFluidTransferable::Null.is_null_variant());
    assert_eq!(
        EmptyFluidTransferable::Controller.pure_insertable(),
        RejectingInsertable::Extractor
    );
    assert_eq!(
        EmptyFluidTransferable::Controller.pure_extractable(),
        EmptyExtractable::Supplier
    );
    assert!(EmptyFluidTransferable::Null.pure_extractable().is_null_variant());
}

#[test]
fn test_tank_capacity() {
    init();
    let tanks = fluid_tanks(1, 6);

    let remainder = tanks.insert_stack(0, &water(10), Simulation::Action);

    assert_eq!(remainder, water(4));
    assert_eq!(tanks.get_stack(0), water(6));
}

#[test]
fn test_drain_simulate_matches_action() {
    let tanks = fluid_tanks(2, 4 * BUCKET);
    tanks.fill(&water(6 * BUCKET), Simulation::Action);

    let simulated = tanks.drain(&Filter::Everything, 5 * BUCKET, Simulation::Simulate);
    assert_eq!(tanks.get_stack(0).amount, 4 * BUCKET);
    assert_eq!(tanks.get_stack(1).amount, 2 * BUCKET);

    let drained = tanks.drain(&Filter::Everything, 5 * BUCKET, Simulation::Action);
    assert_eq!(simulated, drained);
    assert_eq!(tanks.get_stack(1).amount, BUCKET);
}

#[test]
fn test_pump_between_tanks() {
    init();
    let source = fluid_tanks(2, 8 * BUCKET);
    source.force_set_stack(0, lava(3 * BUCKET)).unwrap();
    source.force_set_stack(1, water(5 * BUCKET)).unwrap();
    let target = fluid_tanks(1, 2 * BUCKET);

    let moved = move_stacks(
        source.grouped().as_ref(),
        target.insertable().as_ref(),
        &exact_fluid(&FluidKey::new("water")),
        u32::MAX,
    );

    assert_eq!(moved, 2 * BUCKET);
    assert_eq!(target.get_stack(0), water(2 * BUCKET));
    assert_eq!(source.get_stack(1), water(3 * BUCKET));
    assert_eq!(source.get_stack(0), lava(3 * BUCKET));
}

#[test]
fn test_limited_outlet() {
    let tanks = fluid_tanks(1, 10 * BUCKET);
    tanks.force_set_stack(0, water(3 * BUCKET)).unwrap();
    let outlet: FixedFluidInv = tanks
        .limited()
        .retain_minimum(0..1, BUCKET)
        .unwrap()
        .disallow_insertion(0..1)
        .unwrap()
        .build();

    assert_eq!(outlet.fill(&water(BUCKET), Simulation::Action), water(BUCKET));
    assert_eq!(outlet.drain(&Filter::Everything, u32::MAX, Simulation::Action), water(2 * BUCKET));
    assert_eq!(tanks.get_stack(0), water(BUCKET));
}

#[test]
fn test_grouped_fluid_totals() {
    let tanks = fluid_tanks(3, 4 * BUCKET);
    tanks.force_set_stack(0, water(BUCKET)).unwrap();
    tanks.force_set_stack(2, water(2 * BUCKET)).unwrap();
    let grouped: GroupedFluidInv = tanks.grouped();

    assert_eq!(grouped.stored_stacks(), vec![water(3 * BUCKET)]);
    let stats = grouped.statistics(&exact_fluid(&FluidKey::new("water")));
    assert_eq!(stats.amount, 3000);
    assert_eq!(stats.space_total, 8000);
    assert_eq!(stats.space_addable, 5000);
}

#[test]
fn test_combined_tanks() {
    let small = fluid_tanks(1, BUCKET);
    let large = fluid_tanks(1, 16 * BUCKET);
    let all = small.combined_with(&[large.clone()]);

    assert_eq!(all.slot_count(), 2);
    assert_eq!(all.total_capacity(&water(1)), 17 * u64::from(BUCKET));

    let left = all.fill(&lava(4 * BUCKET), Simulation::Action);
    assert!(left.is_empty());
    assert_eq!(large.get_stack(0), lava(3 * BUCKET));
}

#[test]
fn test_volume_json_shape() {
    let volume = FluidKey::new("potion").with_property("effect", "healing").with_amount(BOTTLE);
    let json = serde_json::to_value(&volume).unwrap();

    assert_eq!(json["fluid"]["id"], "potion");
    assert_eq!(json["fluid"]["properties"]["effect"], "healing");
    assert_eq!(json["amount"], 333);

    let parsed: FluidVolume = serde_json::from_str(r#"{"fluid":{"id":"water"},"amount":1000}"#).unwrap();
    assert_eq!(parsed, water(BUCKET));
}
