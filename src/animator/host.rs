use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::{
    animation::group::AnimationGroup,
    effect::layer::{PropertyKey, PropertyValue},
    foundation::core::BezPath,
};

/// One render layer in the host's view tree.
///
/// The engine writes *model* values through [`HostLayer::set_property`];
/// hosts must apply these snaps without triggering implicit animations of
/// their own, while the attached [`AnimationGroup`] drives the visible
/// presentation values.
pub trait HostLayer {
    /// Snap a layer property to a value.
    fn set_property(&mut self, key: PropertyKey, value: PropertyValue);

    /// Attach an animation group under a string key, replacing any group
    /// already attached under that key.
    fn add_animation_group(&mut self, key: &str, group: AnimationGroup);

    /// Remove the animation attached under `key`, if any.
    fn remove_animation(&mut self, key: &str);

    /// Install or clear a clip-mask path on the layer.
    fn set_mask(&mut self, path: Option<BezPath>);
}

/// Shared owning handle to a host layer.
pub type LayerRef = Rc<RefCell<dyn HostLayer>>;

/// Non-owning handle to a host layer.
///
/// Animators hold only weak handles so host teardown is never blocked by
/// an in-flight animation.
pub type WeakLayerRef = Weak<RefCell<dyn HostLayer>>;
