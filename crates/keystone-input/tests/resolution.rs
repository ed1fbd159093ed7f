use keystone_core::constants::FULL_SCALE;
use keystone_input::buttons::{axis, gamepad};
use keystone_input::{
    keys, Action, ActionId, ActionMapping, ActionStates, Actuator, BindingConfig, Remapper,
    UiAction,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn game(index: u16) -> ActionId {
    ActionId::game(index).unwrap()
}

#[test]
fn jump_and_steer_end_to_end() {
    init_tracing();
    let jump = game(0);
    let steer = game(1);
    let space = Actuator::key(keys::SPACE);
    let a = Actuator::key(keys::A);
    let d = Actuator::key(keys::D);

    let mut remapper = Remapper::new();
    remapper.add_range(jump, space, 0, 32767);
    assert_eq!(
        remapper.update_and_resolve(space.with_value(32767)),
        vec![Action::new(jump, 32767)]
    );

    remapper.add_combo_range(steer, a, d, -32767, 32767);
    assert_eq!(
        remapper.update_and_resolve(a.pressed()),
        vec![Action::new(steer, -32767)]
    );
    assert_eq!(
        remapper.update_and_resolve(d.pressed()),
        vec![Action::new(steer, 32767)]
    );
}

#[test]
fn unbound_actuators_never_resolve() {
    let remapper = Remapper::builder()
        .bind(game(0), Actuator::key(keys::SPACE))
        .bind_combo(game(1), Actuator::key(keys::A), Actuator::key(keys::D))
        .build();

    for code in [keys::W, keys::S, keys::ENTER, keys::ESCAPE] {
        let key = Actuator::key(code);
        assert!(remapper.update_and_resolve(key.pressed()).is_empty());
        assert!(remapper.update_and_resolve(key.released()).is_empty());
    }
    // Same code, different source
    assert!(remapper
        .update_and_resolve(Actuator::gamepad_button(keys::SPACE).pressed())
        .is_empty());
}

#[test]
fn direct_bindings_reach_both_endpoints() {
    let cases = [
        (Actuator::key(keys::SPACE), 0, FULL_SCALE),
        (Actuator::gamepad_button(gamepad::SOUTH), 0, -FULL_SCALE),
        (Actuator::gamepad_axis(axis::LEFT_X), -1000, 1000),
        (Actuator::gamepad_axis(axis::TRIGGER_LEFT), 200, -200),
    ];
    for (index, (actuator, min_f, max_f)) in (0u16..).zip(cases) {
        let remapper = Remapper::builder()
            .bind_range(game(index), actuator, min_f, max_f)
            .build();
        let (native_min, native_max) = actuator.source.native_range();

        assert_eq!(
            remapper.update_and_resolve(actuator.with_value(native_max)),
            vec![Action::new(game(index), max_f)]
        );
        assert_eq!(
            remapper.update_and_resolve(actuator.with_value(native_min)),
            vec![Action::new(game(index), min_f)]
        );
    }
}

#[test]
fn analog_stick_halves_drive_a_combo() {
    let steer = game(2);
    let left_half = Actuator::gamepad_axis(axis::LEFT_X);
    let right_half = Actuator::gamepad_axis(axis::RIGHT_X);
    let remapper = Remapper::builder()
        .bind_combo_range(steer, left_half, right_half, -100, 100)
        .build();

    assert_eq!(
        remapper.update_and_resolve(left_half.with_value(i16::MIN)),
        vec![Action::new(steer, -100)]
    );
    assert_eq!(
        remapper.update_and_resolve(right_half.with_value(i16::MAX)),
        vec![Action::new(steer, 100)]
    );
    assert_eq!(
        remapper.update_and_resolve(right_half.with_value(0)),
        vec![Action::new(steer, 0)]
    );
}

#[test]
fn resolved_values_stay_within_range() {
    let stick = Actuator::gamepad_axis(axis::LEFT_Y);
    let key = Actuator::key(keys::E);
    let remapper = Remapper::builder()
        .bind_range(game(0), stick, -300, 700)
        .bind_combo_range(game(1), key, stick, 50, 400)
        .build();

    for value in (i16::MIN..=i16::MAX).step_by(251) {
        for action in remapper
            .update_and_resolve(stick.with_value(value))
            .into_iter()
            .chain(remapper.update_and_resolve(key.with_value(value)))
        {
            let binding = remapper
                .bindings()
                .iter()
                .find(|b| b.action == action.id)
                .unwrap();
            assert!(action.value >= binding.range.lo());
            assert!(action.value <= binding.range.hi());
        }
    }
}

#[test]
fn clamping_is_deterministic() {
    let key = Actuator::key(keys::F);
    let remapper = Remapper::builder().bind_range(game(0), key, -10, 10).build();

    let first = remapper.update_and_resolve(key.with_value(-20_000));
    let second = remapper.update_and_resolve(key.with_value(-20_000));
    assert_eq!(first, vec![Action::new(game(0), -10)]);
    assert_eq!(first, second);
}

#[test]
fn shared_actuator_resolves_every_binding_in_order() {
    let enter = Actuator::key(keys::ENTER);
    let remapper = Remapper::builder()
        .bind_range(UiAction::MenuConfirm, enter, 0, 1)
        .bind(game(4), enter)
        .bind_range(game(5), enter, 0, -50)
        .build();

    assert_eq!(
        remapper.update_and_resolve(enter.pressed()),
        vec![
            Action::new(UiAction::MenuConfirm.into(), 1),
            Action::new(game(4), FULL_SCALE),
            Action::new(game(5), -50),
        ]
    );
}

#[test]
fn batch_follows_arrival_order() {
    let steer = game(1);
    let a = Actuator::key(keys::A);
    let d = Actuator::key(keys::D);
    let remapper = Remapper::builder().bind_combo(steer, a, d).build();

    let mut frame = Vec::with_capacity(2 * remapper.max_fanout());
    remapper.resolve_batch([a.pressed(), d.pressed()], &mut frame);
    assert_eq!(
        frame,
        vec![Action::new(steer, -FULL_SCALE), Action::new(steer, FULL_SCALE)]
    );

    // The later update wins for consumers that keep the last value
    let mut states = ActionStates::new();
    states.apply(&frame);
    assert_eq!(states.value(steer), FULL_SCALE);

    frame.clear();
    remapper.resolve_batch([d.pressed(), a.pressed()], &mut frame);
    states.apply(&frame);
    assert_eq!(states.value(steer), -FULL_SCALE);
}

#[test]
fn mapping_registry_contract() {
    let mut mapping = ActionMapping::new();
    let enter = Actuator::key(keys::ENTER);
    assert!(mapping.resolve(enter).is_empty());

    mapping.register_action(game(0), enter);
    assert!(mapping.resolve(enter).any(|id| id == game(0)));

    mapping.register_action(UiAction::MenuConfirm.into(), enter);
    mapping.register_action(game(0), Actuator::gamepad_button(gamepad::SOUTH));
    assert_eq!(
        mapping.resolve(enter).collect::<Vec<_>>(),
        vec![game(0), UiAction::MenuConfirm.into()]
    );
}

#[test]
fn config_built_remapper_matches_builder() {
    init_tracing();
    let jump = game(0);
    let steer = game(1);
    let space = Actuator::key(keys::SPACE);
    let a = Actuator::key(keys::A);
    let d = Actuator::key(keys::D);

    let from_config = BindingConfig::new("gameplay")
        .with_direct(jump, space, None)
        .with_combo(steer, a, d, None)
        .build()
        .unwrap();
    let from_builder = Remapper::builder()
        .bind(jump, space)
        .bind_combo(steer, a, d)
        .build();

    assert_eq!(from_config.bindings(), from_builder.bindings());
    for actuator in [space.pressed(), a.pressed(), d.with_value(12_000)] {
        assert_eq!(
            from_config.update_and_resolve(actuator),
            from_builder.update_and_resolve(actuator)
        );
    }
}
