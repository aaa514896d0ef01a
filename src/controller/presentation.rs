use crate::{
    animator::host::LayerRef,
    animator::platform::PlatformAnimator,
    effect::reduce::reduce,
    foundation::core::{ColorScheme, LayoutDirection, SizeClass},
    foundation::error::{ScrimError, ScrimResult},
    transition::environment::{Geometry, Intent, TransitionEnvironment},
    transition::value::Transition,
};

/// Key the presented layer's animation group is attached under.
const PRESENTED_ANIMATION_KEY: &str = "scrim.presented";
/// Key the presenting layer's animation group is attached under.
const PRESENTING_ANIMATION_KEY: &str = "scrim.presenting";

/// Visual style of the backdrop behind presented content.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BackdropStyle {
    /// No visible backdrop.
    #[default]
    Clear,
    /// A dimming backdrop with the given opacity.
    Dim {
        /// Backdrop opacity in `[0, 1]`.
        opacity: f64,
    },
}

/// Explicit presentation configuration handed to the controller.
///
/// This replaces implicit upward configuration flow from the content: the
/// host gathers whatever its content declares and passes it here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PresentationConfig {
    /// Transition describing appearance and disappearance.
    pub transition: Transition,
    /// Backdrop behind the presented content.
    pub backdrop: BackdropStyle,
}

impl PresentationConfig {
    /// Build a configuration with a clear backdrop.
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            backdrop: BackdropStyle::Clear,
        }
    }

    /// Validate configuration input.
    pub fn validate(&self) -> ScrimResult<()> {
        self.transition.validate()?;
        if let BackdropStyle::Dim { opacity } = self.backdrop
            && !(0.0..=1.0).contains(&opacity)
        {
            return Err(ScrimError::validation(
                "backdrop opacity must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Phase of one overlay's presentation lifecycle.
///
/// Transitions are driven entirely by the host's appearance callbacks;
/// the controller reacts, it never advances phases on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationPhase {
    /// Nothing presented and nothing in flight.
    Idle,
    /// The insertion transition is running.
    Presenting,
    /// The overlay is fully presented.
    Presented,
    /// The removal transition is running.
    Dismissing,
    /// The overlay has been dismissed; the controller is reusable.
    Dismissed,
}

/// Which render layer an animation notification refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedLayer {
    /// The presented content's layer.
    Presented,
    /// The presenting content's layer (or its snapshot).
    Presenting,
}

/// Everything the controller needs from its host container.
///
/// Geometry and trait queries are pulled at the moment a transition
/// begins; layer and backdrop operations mutate the host's view tree.
/// Hosts that cannot animate a backdrop crossfade alongside their own
/// transition machinery report no coordinator and receive immediate
/// opacity snaps instead.
pub trait PresentationHost {
    /// Current container geometry, or `None` before the first layout.
    fn container_geometry(&self) -> Option<Geometry>;

    /// Current appearance.
    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }

    /// Current horizontal size class.
    fn horizontal_size_class(&self) -> SizeClass {
        SizeClass::Regular
    }

    /// Current vertical size class.
    fn vertical_size_class(&self) -> SizeClass {
        SizeClass::Regular
    }

    /// Current layout direction.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::LeftToRight
    }

    /// Whether the host can animate backdrop changes alongside its own
    /// transition machinery.
    fn has_transition_coordinator(&self) -> bool {
        false
    }

    /// Layer of the presented content.
    fn presented_layer(&self) -> LayerRef;

    /// Layer of the presenting content beneath the overlay.
    fn presenting_layer(&self) -> LayerRef;

    /// Capture a snapshot layer of the presenting content's current
    /// rendered state and insert it beneath the presented content.
    fn capture_presenting_snapshot(&mut self) -> Option<LayerRef>;

    /// Re-capture the snapshot's contents from the live presenting
    /// content.
    fn refresh_presenting_snapshot(&mut self) {}

    /// Remove the snapshot layer from the view tree.
    fn release_presenting_snapshot(&mut self) {}

    /// Hide or reveal the live presenting content while its snapshot
    /// stands in for it.
    fn set_presenting_content_hidden(&mut self, _hidden: bool) {}

    /// Insert the backdrop into the view tree at opacity 0.
    fn insert_backdrop(&mut self, style: &BackdropStyle);

    /// Fade the backdrop to `opacity`, animated alongside the host's
    /// transition when requested.
    fn set_backdrop_opacity(&mut self, opacity: f64, animated: bool);

    /// Restyle the backdrop in place.
    fn restyle_backdrop(&mut self, style: &BackdropStyle);

    /// Remove the backdrop from the view tree.
    fn remove_backdrop(&mut self);

    /// Order the presented layer above all of its siblings.
    fn raise_presented_layer(&mut self);

    /// Restore normal sibling draw order.
    fn restore_draw_order(&mut self);

    /// Remove the presented layer from the view tree.
    fn remove_presented_layer(&mut self);
}

struct ActivePass {
    presented: PlatformAnimator,
    presenting: Option<PlatformAnimator>,
    intent: Intent,
    took_snapshot: bool,
}

/// Per-overlay orchestrator sequencing snapshotting, backdrop crossfade
/// and layer animation against the host's presentation machinery.
///
/// One controller is exclusively owned by one active presentation; the
/// transition value it is configured with may be shared freely.
pub struct PresentationController {
    config: PresentationConfig,
    phase: PresentationPhase,
    active: Option<ActivePass>,
}

impl PresentationController {
    /// Build a controller from validated configuration.
    pub fn new(config: PresentationConfig) -> ScrimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: PresentationPhase::Idle,
            active: None,
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PresentationPhase {
        self.phase
    }

    /// Current configuration.
    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Replace the transition; takes effect on the next pass.
    pub fn set_transition(&mut self, transition: Transition) -> ScrimResult<()> {
        transition.validate()?;
        self.config.transition = transition;
        Ok(())
    }

    /// Restyle the backdrop in place, without re-running the transition.
    ///
    /// No-op when the style is unchanged or nothing is on screen.
    pub fn update_backdrop<H: PresentationHost>(&mut self, host: &mut H, style: BackdropStyle) {
        if self.config.backdrop == style {
            return;
        }
        self.config.backdrop = style;
        if matches!(
            self.phase,
            PresentationPhase::Presenting | PresentationPhase::Presented | PresentationPhase::Dismissing
        ) {
            host.restyle_backdrop(&self.config.backdrop);
        }
    }

    /// Wall-clock duration of the pass the host is about to run.
    pub fn transition_duration<H: PresentationHost>(&self, host: &H, intent: Intent) -> f64 {
        let env = self.environment(host, intent);
        self.config.transition.resolve_animation(&env).total_duration()
    }

    /// Host callback: the insertion transition is about to run.
    ///
    /// Computes the environment, captures the presenting snapshot when the
    /// transition animates both layers, fades the backdrop in, and starts
    /// the layer animators. `completion` receives the presented-layer
    /// animator's success flag.
    pub fn presentation_will_begin<H: PresentationHost>(
        &mut self,
        host: &mut H,
        completion: impl FnOnce(bool) + 'static,
    ) -> ScrimResult<()> {
        match self.phase {
            PresentationPhase::Idle | PresentationPhase::Dismissed => {}
            PresentationPhase::Presenting | PresentationPhase::Dismissing => {
                // A new request while one is in flight cancels the old
                // animators before anything races on the layers.
                self.cancel_active();
            }
            PresentationPhase::Presented => {
                return Err(ScrimError::presentation(
                    "presentation cannot begin while already presented",
                ));
            }
        }
        tracing::debug!(phase = ?self.phase, "presentation will begin");
        self.phase = PresentationPhase::Presenting;

        let env = self.environment(host, Intent::Insertion);
        self.begin_pass(host, env, Box::new(completion));
        Ok(())
    }

    /// Host callback: the insertion transition finished.
    pub fn presentation_did_end<H: PresentationHost>(
        &mut self,
        host: &mut H,
        completed: bool,
    ) -> ScrimResult<()> {
        if self.phase != PresentationPhase::Presenting {
            return Err(ScrimError::presentation(
                "presentationDidEnd without a presentation in flight",
            ));
        }
        if completed {
            self.phase = PresentationPhase::Presented;
            host.refresh_presenting_snapshot();
        } else {
            tracing::debug!("presentation abandoned, restoring host state");
            self.cancel_active();
            host.release_presenting_snapshot();
            host.remove_backdrop();
            self.phase = PresentationPhase::Idle;
        }
        Ok(())
    }

    /// Host callback: the removal transition is about to run.
    pub fn dismissal_will_begin<H: PresentationHost>(
        &mut self,
        host: &mut H,
        completion: impl FnOnce(bool) + 'static,
    ) -> ScrimResult<()> {
        match self.phase {
            PresentationPhase::Presented => {}
            PresentationPhase::Presenting => self.cancel_active(),
            _ => {
                return Err(ScrimError::presentation(
                    "dismissal cannot begin without a presentation",
                ));
            }
        }
        tracing::debug!(phase = ?self.phase, "dismissal will begin");
        self.phase = PresentationPhase::Dismissing;

        let env = self.environment(host, Intent::Removal);
        self.begin_pass(host, env, Box::new(completion));
        Ok(())
    }

    /// Host callback: the removal transition finished.
    pub fn dismissal_did_end<H: PresentationHost>(
        &mut self,
        host: &mut H,
        completed: bool,
    ) -> ScrimResult<()> {
        if self.phase != PresentationPhase::Dismissing {
            return Err(ScrimError::presentation(
                "dismissalDidEnd without a dismissal in flight",
            ));
        }
        if completed {
            host.release_presenting_snapshot();
            host.remove_backdrop();
            self.phase = PresentationPhase::Dismissed;
        } else {
            self.phase = PresentationPhase::Presented;
        }
        Ok(())
    }

    /// Host notification that the animation group on `layer` started.
    pub fn animation_did_start(&mut self, layer: AnimatedLayer) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        match layer {
            AnimatedLayer::Presented => active.presented.animation_did_start(),
            AnimatedLayer::Presenting => {
                if let Some(presenting) = active.presenting.as_mut() {
                    presenting.animation_did_start();
                }
            }
        }
    }

    /// Host notification that the animation group on `layer` stopped.
    ///
    /// For the presented layer this closes the pass: the completion
    /// callback fires with `finished`, draw order is restored, the live
    /// presenting content is revealed again, and both animators are torn
    /// down. Tearing down twice is a no-op.
    pub fn animation_did_stop<H: PresentationHost>(
        &mut self,
        host: &mut H,
        layer: AnimatedLayer,
        finished: bool,
    ) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        match layer {
            AnimatedLayer::Presented => {
                active.presented.animation_did_stop(finished);
                host.restore_draw_order();
                if active.took_snapshot {
                    host.set_presenting_content_hidden(false);
                }
                if active.intent == Intent::Removal {
                    host.remove_presented_layer();
                }
                self.cancel_active();
            }
            AnimatedLayer::Presenting => {
                if let Some(mut presenting) = active.presenting.take() {
                    presenting.animation_did_stop(finished);
                    presenting.cancel();
                }
            }
        }
    }

    fn begin_pass<H: PresentationHost>(
        &mut self,
        host: &mut H,
        env: TransitionEnvironment,
        completion: Box<dyn FnOnce(bool)>,
    ) {
        let animates_presenting = self.config.transition.animates_presenting_layer();
        let took_snapshot;

        let presenting_layer = if animates_presenting {
            host.set_presenting_content_hidden(true);
            match host.capture_presenting_snapshot() {
                Some(snapshot) => {
                    took_snapshot = true;
                    snapshot
                }
                None => {
                    tracing::warn!("presenting snapshot unavailable, animating the live layer");
                    took_snapshot = false;
                    host.set_presenting_content_hidden(false);
                    host.presenting_layer()
                }
            }
        } else {
            took_snapshot = false;
            host.presenting_layer()
        };

        let backdrop_opacity = match env.intent {
            Intent::Insertion => {
                host.insert_backdrop(&self.config.backdrop);
                1.0
            }
            Intent::Removal => 0.0,
        };
        host.set_backdrop_opacity(backdrop_opacity, host.has_transition_coordinator());

        let resolved = self.config.transition.resolve(&env);
        let presented_effects = reduce(resolved.presented);
        let presenting_effects = reduce(resolved.presenting);

        host.raise_presented_layer();

        let mut presented = PlatformAnimator::new(
            resolved.animation,
            PRESENTED_ANIMATION_KEY,
            &host.presented_layer(),
            presented_effects,
            completion,
        );
        let mut presenting = (!presenting_effects.is_empty()).then(|| {
            PlatformAnimator::new(
                resolved.animation,
                PRESENTING_ANIMATION_KEY,
                &presenting_layer,
                presenting_effects,
                |_| {},
            )
        });

        presented.animate();
        if let Some(presenting) = presenting.as_mut() {
            presenting.animate();
        }

        self.active = Some(ActivePass {
            presented,
            presenting,
            intent: env.intent,
            took_snapshot,
        });
    }

    fn environment<H: PresentationHost>(&self, host: &H, intent: Intent) -> TransitionEnvironment {
        let geometry = match host.container_geometry() {
            Some(geometry) => geometry,
            None => {
                tracing::warn!("container geometry unavailable, resolving with zero geometry");
                Geometry::ZERO
            }
        };
        TransitionEnvironment {
            intent,
            geometry,
            color_scheme: host.color_scheme(),
            horizontal_size_class: host.horizontal_size_class(),
            vertical_size_class: host.vertical_size_class(),
            layout_direction: host.layout_direction(),
        }
    }

    fn cancel_active(&mut self) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        active.presented.cancel();
        if let Some(mut presenting) = active.presenting.take() {
            presenting.cancel();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/presentation.rs"]
mod tests;
