use std::rc::Weak;

use crate::{
    animation::descriptor::AnimationDescriptor,
    animator::host::{LayerRef, WeakLayerRef},
    effect::layer::LayerEffect,
};

/// Callback fired once when an animation pass finishes.
pub type CompletionFn = Box<dyn FnOnce(bool)>;

/// Drives one animation group on one render layer.
///
/// The animator owns the layer effects for exactly one pass and holds the
/// layer only weakly; if the host tears the layer down mid-animation the
/// animator degrades to a cancelled pass instead of keeping the layer
/// alive.
///
/// Re-running [`PlatformAnimator::animate`] cancels and replaces whatever
/// group is attached under the animator's key. Completion fires at most
/// once; cancelling after completion (or completing after cancellation)
/// is a no-op.
pub struct PlatformAnimator {
    animation: AnimationDescriptor,
    animation_key: String,
    layer: Option<WeakLayerRef>,
    effects: Vec<LayerEffect>,
    completion: Option<CompletionFn>,
}

impl PlatformAnimator {
    /// Build an animator for `effects` on `layer`, keyed by
    /// `animation_key`.
    pub fn new(
        animation: AnimationDescriptor,
        animation_key: impl Into<String>,
        layer: &LayerRef,
        effects: Vec<LayerEffect>,
        completion: impl FnOnce(bool) + 'static,
    ) -> Self {
        Self {
            animation,
            animation_key: animation_key.into(),
            layer: Some(std::rc::Rc::downgrade(layer)),
            effects,
            completion: Some(Box::new(completion)),
        }
    }

    /// The key this animator's group is attached under.
    pub fn animation_key(&self) -> &str {
        &self.animation_key
    }

    /// Prepare and start the animation group.
    ///
    /// Every effect is prepared against the descriptor (the layer is put
    /// into its *from* state and one animation primitive is produced), the
    /// primitives are bundled into a single group attached under the
    /// animator's key, and every effect's *to* value is snapped
    /// immediately, so the model value is final when this returns while the
    /// host animates the presentation value.
    ///
    /// If the layer is already gone, the pass completes with `false`.
    pub fn animate(&mut self) {
        let Some(layer) = self.upgraded_layer() else {
            self.finish(false);
            return;
        };

        let mut layer = layer.borrow_mut();
        layer.remove_animation(&self.animation_key);

        let primitives = self
            .effects
            .iter()
            .map(|effect| effect.prepare(&self.animation, &mut *layer))
            .collect();

        let group = self.animation.group(primitives);
        layer.add_animation_group(&self.animation_key, group);

        for effect in &self.effects {
            effect.apply(&mut *layer);
        }
    }

    /// Remove the attached animation and release the layer reference.
    ///
    /// Drops the completion callback: neither cancelling nor any stop
    /// notification arriving afterwards fires it. Cancelling twice is a
    /// no-op.
    pub fn cancel(&mut self) {
        if let Some(layer) = self.upgraded_layer() {
            layer.borrow_mut().remove_animation(&self.animation_key);
        }
        self.layer = None;
        self.completion = None;
    }

    /// Host notification that the native group started.
    pub fn animation_did_start(&mut self) {
        let Some(layer) = self.upgraded_layer() else {
            return;
        };
        let mut layer = layer.borrow_mut();
        for effect in &self.effects {
            effect.did_start(&mut *layer);
        }
    }

    /// Host notification that the native group stopped.
    ///
    /// Runs every effect's completion hook (releasing masks and other
    /// temporary state) before firing the external completion, exactly
    /// once.
    pub fn animation_did_stop(&mut self, finished: bool) {
        if let Some(layer) = self.upgraded_layer() {
            let mut layer = layer.borrow_mut();
            for effect in &self.effects {
                effect.did_complete(&mut *layer, finished);
            }
        }
        self.finish(finished);
    }

    fn upgraded_layer(&self) -> Option<LayerRef> {
        self.layer.as_ref().and_then(Weak::upgrade)
    }

    fn finish(&mut self, finished: bool) {
        if let Some(completion) = self.completion.take() {
            completion(finished);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animator/platform.rs"]
mod tests;
