use ballroll::resources::BodyState;

/// Assert that a body state holds only finite values
#[track_caller]
pub fn assert_state_valid(state: &BodyState) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite"
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite"
    );
    assert!(state.angle.is_finite(), "Angle is not finite");
    assert!(
        state.angular_velocity.is_finite(),
        "Angular velocity is not finite"
    );
}

/// Assert that two states are bit-identical
#[track_caller]
pub fn assert_state_identical(actual: &BodyState, expected: &BodyState) {
    assert_eq!(
        actual.position, expected.position,
        "Positions differ: {:?} vs {:?}",
        actual.position, expected.position
    );
    assert_eq!(
        actual.velocity, expected.velocity,
        "Velocities differ: {:?} vs {:?}",
        actual.velocity, expected.velocity
    );
    assert_eq!(actual.angle.to_bits(), expected.angle.to_bits());
    assert_eq!(
        actual.angular_velocity.to_bits(),
        expected.angular_velocity.to_bits()
    );
}
