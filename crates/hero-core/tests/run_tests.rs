// Host-side tests for the stoppable animation loop.

mod common;

use common::{Op, Recorder};
use hero_core::{Animation, FieldConfig, InputQueue, LoopStatus, ParticleField, StopToken};

fn make_animation() -> Animation<Recorder> {
    let field = ParticleField::new(
        FieldConfig::default().with_seed(3),
        300,
        200,
        InputQueue::new(),
        Recorder::default(),
    );
    Animation::new(field)
}

#[test]
fn step_ticks_until_stopped() {
    let mut anim = make_animation();
    for _ in 0..5 {
        assert_eq!(anim.step(), LoopStatus::Continue);
    }
    assert_eq!(anim.frames(), 5);
    assert_eq!(anim.field().surface().count(|op| *op == Op::Clear), 5);

    anim.stop_token().stop();

    assert_eq!(anim.step(), LoopStatus::Stopped);
    assert_eq!(anim.step(), LoopStatus::Stopped);
    assert_eq!(anim.frames(), 5);
    assert_eq!(anim.field().surface().count(|op| *op == Op::Clear), 5);
}

#[test]
fn external_token_controls_the_loop() {
    let token = StopToken::new();
    let field = ParticleField::new(
        FieldConfig::default().with_seed(3),
        300,
        200,
        InputQueue::new(),
        Recorder::default(),
    );
    let mut anim = Animation::with_token(field, token.clone());

    assert_eq!(anim.step(), LoopStatus::Continue);
    assert!(!token.is_stopped());

    token.stop();
    token.stop();
    assert!(anim.stop_token().is_stopped());
    assert_eq!(anim.step(), LoopStatus::Stopped);
    assert_eq!(anim.frames(), 1);
}

#[test]
fn stopped_before_first_frame_never_draws() {
    let mut anim = make_animation();
    anim.stop_token().stop();
    assert_eq!(anim.step(), LoopStatus::Stopped);
    assert_eq!(anim.frames(), 0);
    assert_eq!(anim.field().surface().count(|op| *op == Op::Clear), 0);
}

#[test]
fn clones_share_one_flag() {
    let a = StopToken::new();
    let b = a.clone();
    assert!(!a.is_stopped() && !b.is_stopped());
    b.stop();
    assert!(a.is_stopped());
}

#[test]
fn field_is_reachable_through_the_animation() {
    let mut anim = make_animation();
    anim.field_mut().resize(640, 480);
    anim.step();
    assert_eq!(anim.field().size(), (640, 480));
    // 300x200 at construction: 4 particles, unchanged by the resize
    assert_eq!(anim.field().particles().len(), 4);
}
