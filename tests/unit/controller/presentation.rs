use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    animation::descriptor::AnimationDescriptor,
    animation::group::AnimationGroup,
    animator::host::HostLayer,
    effect::layer::{PropertyKey, PropertyValue},
    foundation::core::{BezPath, EdgeInsets, Rect},
    foundation::math::Transform3D,
};

#[derive(Default)]
struct RecordingLayer {
    sets: Vec<(PropertyKey, PropertyValue)>,
    groups: Vec<(String, AnimationGroup)>,
    removals: Vec<String>,
    mask: Option<BezPath>,
}

impl HostLayer for RecordingLayer {
    fn set_property(&mut self, key: PropertyKey, value: PropertyValue) {
        self.sets.push((key, value));
    }

    fn add_animation_group(&mut self, key: &str, group: AnimationGroup) {
        self.groups.push((key.to_owned(), group));
    }

    fn remove_animation(&mut self, key: &str) {
        self.removals.push(key.to_owned());
    }

    fn set_mask(&mut self, path: Option<BezPath>) {
        self.mask = path;
    }
}

#[derive(Default)]
struct HostCalls {
    backdrop_inserted: Vec<BackdropStyle>,
    backdrop_opacity: Vec<(f64, bool)>,
    backdrop_restyled: Vec<BackdropStyle>,
    backdrop_removed: u32,
    raised: u32,
    restored: u32,
    presented_removed: u32,
    snapshot_refreshed: u32,
    snapshot_released: u32,
    presenting_hidden: Vec<bool>,
}

struct TestHost {
    geometry: Option<Geometry>,
    snapshot_available: bool,
    presented: Rc<RefCell<RecordingLayer>>,
    presenting: Rc<RefCell<RecordingLayer>>,
    snapshot: Rc<RefCell<RecordingLayer>>,
    calls: HostCalls,
}

impl TestHost {
    fn new() -> Self {
        Self {
            geometry: Some(Geometry::new(
                Rect::new(0.0, 0.0, 300.0, 600.0),
                EdgeInsets::ZERO,
            )),
            snapshot_available: true,
            presented: Rc::new(RefCell::new(RecordingLayer::default())),
            presenting: Rc::new(RefCell::new(RecordingLayer::default())),
            snapshot: Rc::new(RefCell::new(RecordingLayer::default())),
            calls: HostCalls::default(),
        }
    }
}

impl PresentationHost for TestHost {
    fn container_geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    fn presented_layer(&self) -> LayerRef {
        self.presented.clone()
    }

    fn presenting_layer(&self) -> LayerRef {
        self.presenting.clone()
    }

    fn capture_presenting_snapshot(&mut self) -> Option<LayerRef> {
        self.snapshot_available
            .then(|| self.snapshot.clone() as LayerRef)
    }

    fn refresh_presenting_snapshot(&mut self) {
        self.calls.snapshot_refreshed += 1;
    }

    fn release_presenting_snapshot(&mut self) {
        self.calls.snapshot_released += 1;
    }

    fn set_presenting_content_hidden(&mut self, hidden: bool) {
        self.calls.presenting_hidden.push(hidden);
    }

    fn insert_backdrop(&mut self, style: &BackdropStyle) {
        self.calls.backdrop_inserted.push(style.clone());
    }

    fn set_backdrop_opacity(&mut self, opacity: f64, animated: bool) {
        self.calls.backdrop_opacity.push((opacity, animated));
    }

    fn restyle_backdrop(&mut self, style: &BackdropStyle) {
        self.calls.backdrop_restyled.push(style.clone());
    }

    fn remove_backdrop(&mut self) {
        self.calls.backdrop_removed += 1;
    }

    fn raise_presented_layer(&mut self) {
        self.calls.raised += 1;
    }

    fn restore_draw_order(&mut self) {
        self.calls.restored += 1;
    }

    fn remove_presented_layer(&mut self) {
        self.calls.presented_removed += 1;
    }
}

fn controller(transition: Transition) -> PresentationController {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    PresentationController::new(PresentationConfig::new(transition)).unwrap()
}

fn completion_probe() -> (Rc<RefCell<Vec<bool>>>, impl FnOnce(bool) + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |finished| sink.borrow_mut().push(finished))
}

fn present(ctl: &mut PresentationController, host: &mut TestHost) {
    ctl.presentation_will_begin(host, |_| {}).unwrap();
    ctl.animation_did_stop(host, AnimatedLayer::Presented, true);
    ctl.presentation_did_end(host, true).unwrap();
}

#[test]
fn presentation_flow_reaches_presented() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());
    let (calls, completion) = completion_probe();

    ctl.presentation_will_begin(&mut host, completion).unwrap();
    assert_eq!(ctl.phase(), PresentationPhase::Presenting);
    assert_eq!(host.calls.backdrop_inserted, vec![BackdropStyle::Clear]);
    assert_eq!(host.calls.backdrop_opacity, vec![(1.0, false)]);
    assert_eq!(host.calls.raised, 1);
    assert!(calls.borrow().is_empty());

    {
        let presented = host.presented.borrow();
        assert_eq!(presented.groups.len(), 1);
        assert_eq!(presented.groups[0].0, "scrim.presented");
        assert_eq!(presented.groups[0].1.primitives.len(), 1);
    }
    // A fade leaves the presenting layer alone.
    assert!(host.presenting.borrow().groups.is_empty());
    assert!(host.snapshot.borrow().groups.is_empty());

    ctl.animation_did_stop(&mut host, AnimatedLayer::Presented, true);
    assert_eq!(*calls.borrow(), vec![true]);
    assert_eq!(host.calls.restored, 1);

    ctl.presentation_did_end(&mut host, true).unwrap();
    assert_eq!(ctl.phase(), PresentationPhase::Presented);
}

#[test]
fn combined_slide_and_fade_resolves_both_primitives() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::slide().combined(Transition::fade()));

    ctl.presentation_will_begin(&mut host, |_| {}).unwrap();

    let presented = host.presented.borrow();
    let (_, group) = &presented.groups[0];
    assert_eq!(group.primitives.len(), 2);
    assert_eq!(group.duration, 0.3);

    let transform = group
        .primitives
        .iter()
        .find(|p| p.property == PropertyKey::Transform)
        .unwrap();
    assert_eq!(
        transform.from,
        PropertyValue::Transform(Transform3D::translation(0.0, 600.0, 0.0))
    );
    assert_eq!(
        transform.to,
        PropertyValue::Transform(Transform3D::IDENTITY)
    );

    let opacity = group
        .primitives
        .iter()
        .find(|p| p.property == PropertyKey::Opacity)
        .unwrap();
    assert_eq!(opacity.from, PropertyValue::Float(0.0));
    assert_eq!(opacity.to, PropertyValue::Float(1.0));
}

#[test]
fn sheet_snapshots_and_animates_the_presenting_layer() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::sheet());

    ctl.presentation_will_begin(&mut host, |_| {}).unwrap();
    assert_eq!(host.calls.presenting_hidden, vec![true]);

    {
        let snapshot = host.snapshot.borrow();
        assert_eq!(snapshot.groups.len(), 1);
        assert_eq!(snapshot.groups[0].0, "scrim.presenting");
        assert_eq!(snapshot.groups[0].1.primitives.len(), 3);
    }
    // The live presenting layer is hidden, not animated.
    assert!(host.presenting.borrow().groups.is_empty());

    ctl.animation_did_stop(&mut host, AnimatedLayer::Presented, true);
    assert_eq!(host.calls.presenting_hidden, vec![true, false]);

    ctl.presentation_did_end(&mut host, true).unwrap();
    assert_eq!(host.calls.snapshot_refreshed, 1);
}

#[test]
fn missing_snapshot_falls_back_to_the_live_layer() {
    let mut host = TestHost::new();
    host.snapshot_available = false;
    let mut ctl = controller(Transition::sheet());

    ctl.presentation_will_begin(&mut host, |_| {}).unwrap();

    // Hidden for the capture attempt, revealed again for the fallback.
    assert_eq!(host.calls.presenting_hidden, vec![true, false]);
    assert_eq!(host.presenting.borrow().groups.len(), 1);
    assert!(host.snapshot.borrow().groups.is_empty());
}

#[test]
fn dismissal_flow_removes_the_presented_layer() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());
    present(&mut ctl, &mut host);

    let (calls, completion) = completion_probe();
    ctl.dismissal_will_begin(&mut host, completion).unwrap();
    assert_eq!(ctl.phase(), PresentationPhase::Dismissing);
    // Removal fades the backdrop out and inserts nothing new.
    assert_eq!(host.calls.backdrop_inserted.len(), 1);
    assert_eq!(host.calls.backdrop_opacity.last(), Some(&(0.0, false)));

    ctl.animation_did_stop(&mut host, AnimatedLayer::Presented, true);
    assert_eq!(*calls.borrow(), vec![true]);
    assert_eq!(host.calls.presented_removed, 1);

    ctl.dismissal_did_end(&mut host, true).unwrap();
    assert_eq!(ctl.phase(), PresentationPhase::Dismissed);
    assert_eq!(host.calls.backdrop_removed, 1);
    assert_eq!(host.calls.snapshot_released, 1);
}

#[test]
fn dismissed_controller_is_reusable() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());
    present(&mut ctl, &mut host);
    ctl.dismissal_will_begin(&mut host, |_| {}).unwrap();
    ctl.animation_did_stop(&mut host, AnimatedLayer::Presented, true);
    ctl.dismissal_did_end(&mut host, true).unwrap();

    ctl.presentation_will_begin(&mut host, |_| {}).unwrap();
    assert_eq!(ctl.phase(), PresentationPhase::Presenting);
}

#[test]
fn lifecycle_calls_out_of_order_error() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());

    assert!(ctl.dismissal_will_begin(&mut host, |_| {}).is_err());
    assert!(ctl.presentation_did_end(&mut host, true).is_err());
    assert!(ctl.dismissal_did_end(&mut host, true).is_err());

    present(&mut ctl, &mut host);
    let err = ctl.presentation_will_begin(&mut host, |_| {}).unwrap_err();
    assert!(matches!(err, ScrimError::Presentation(_)));
}

#[test]
fn missing_geometry_degrades_to_zero_distance() {
    let mut host = TestHost::new();
    host.geometry = None;
    let mut ctl = controller(Transition::slide());

    ctl.presentation_will_begin(&mut host, |_| {}).unwrap();

    let presented = host.presented.borrow();
    let (_, group) = &presented.groups[0];
    assert_eq!(
        group.primitives[0].from,
        PropertyValue::Transform(Transform3D::IDENTITY)
    );
}

#[test]
fn present_during_dismissal_replaces_the_old_pass() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());
    let (first_calls, first) = completion_probe();

    ctl.presentation_will_begin(&mut host, first).unwrap();
    ctl.presentation_did_end(&mut host, true).unwrap();
    ctl.dismissal_will_begin(&mut host, |_| {}).unwrap();
    // Mid-dismissal the overlay is asked back in.
    ctl.presentation_will_begin(&mut host, |_| {}).unwrap();

    assert_eq!(ctl.phase(), PresentationPhase::Presenting);
    // The replaced pass never completes.
    assert!(first_calls.borrow().is_empty());
}

#[test]
fn transition_duration_includes_the_delay() {
    let host = TestHost::new();
    let ctl = controller(
        Transition::fade().animation(AnimationDescriptor::linear_with_duration(0.4).delay(0.1)),
    );
    let duration = ctl.transition_duration(&host, Intent::Insertion);
    assert!((duration - 0.5).abs() < 1e-12);
}

#[test]
fn backdrop_restyle_applies_only_on_change_while_visible() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());
    present(&mut ctl, &mut host);

    ctl.update_backdrop(&mut host, BackdropStyle::Dim { opacity: 0.4 });
    ctl.update_backdrop(&mut host, BackdropStyle::Dim { opacity: 0.4 });
    assert_eq!(
        host.calls.backdrop_restyled,
        vec![BackdropStyle::Dim { opacity: 0.4 }]
    );

    let mut idle = controller(Transition::fade());
    idle.update_backdrop(&mut host, BackdropStyle::Dim { opacity: 0.2 });
    assert_eq!(host.calls.backdrop_restyled.len(), 1);
    assert_eq!(
        idle.config().backdrop,
        BackdropStyle::Dim { opacity: 0.2 }
    );
}

#[test]
fn config_validation_rejects_out_of_range_backdrop() {
    let config = PresentationConfig {
        transition: Transition::fade(),
        backdrop: BackdropStyle::Dim { opacity: 1.5 },
    };
    assert!(PresentationController::new(config).is_err());
}

#[test]
fn abandoned_presentation_restores_idle() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());

    ctl.presentation_will_begin(&mut host, |_| {}).unwrap();
    ctl.presentation_did_end(&mut host, false).unwrap();

    assert_eq!(ctl.phase(), PresentationPhase::Idle);
    assert_eq!(host.calls.backdrop_removed, 1);
    assert_eq!(host.calls.snapshot_released, 1);
}

#[test]
fn abandoned_dismissal_stays_presented() {
    let mut host = TestHost::new();
    let mut ctl = controller(Transition::fade());
    present(&mut ctl, &mut host);

    ctl.dismissal_will_begin(&mut host, |_| {}).unwrap();
    ctl.dismissal_did_end(&mut host, false).unwrap();
    assert_eq!(ctl.phase(), PresentationPhase::Presented);
}
