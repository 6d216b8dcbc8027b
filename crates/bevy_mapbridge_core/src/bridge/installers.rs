//! Child feature installers and their sequencing.
//!
//! Installers configure sub-features (image sprites, built-in controls,
//! custom controls) on an existing instance. The bridge only decides *when*
//! they run: once an instance exists, when their spec list is non-empty, and
//! again only if that list changes.

use std::sync::Arc;

use bevy::prelude::*;
use bevy_mapbridge_engine::prelude::*;

use crate::components::MapProps;

/// Installs one kind of sub-feature on an instance.
///
/// Closures with the matching signature are installers too.
pub trait FeatureInstaller<S>: Send + Sync + 'static {
    fn install(&self, instance: &MapHandle, specs: &[S]) -> Result<(), EngineError>;
}

impl<S, F> FeatureInstaller<S> for F
where
    F: Fn(&MapHandle, &[S]) -> Result<(), EngineError> + Send + Sync + 'static,
{
    fn install(&self, instance: &MapHandle, specs: &[S]) -> Result<(), EngineError> {
        self(instance, specs)
    }
}

/// Installers registered with the app.
///
/// Layer 3 plugins fill these slots. An empty slot means the matching specs
/// are ignored.
#[derive(Resource, Default, Clone)]
pub struct MapInstallers {
    pub image_sprites: Option<Arc<dyn FeatureInstaller<ImageSpriteSpec>>>,
    pub controls: Option<Arc<dyn FeatureInstaller<ControlSpec>>>,
    pub custom_controls: Option<Arc<dyn FeatureInstaller<CustomControlSpec>>>,
}

/// One installer invocation with the caller's specs.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallCall {
    ImageSprites(Vec<ImageSpriteSpec>),
    Controls(Vec<ControlSpec>),
    CustomControls(Vec<CustomControlSpec>),
}

impl InstallCall {
    fn label(&self) -> &'static str {
        match self {
            InstallCall::ImageSprites(_) => "image sprite",
            InstallCall::Controls(_) => "control",
            InstallCall::CustomControls(_) => "custom control",
        }
    }

    /// Run the matching installer.
    ///
    /// Returns `Ok(false)` when no installer is registered for this kind.
    pub fn run(&self, instance: &MapHandle, installers: &MapInstallers) -> Result<bool, EngineError> {
        let ran = match self {
            InstallCall::ImageSprites(specs) => installers
                .image_sprites
                .as_ref()
                .map(|installer| installer.install(instance, specs))
                .transpose()?
                .is_some(),
            InstallCall::Controls(specs) => installers
                .controls
                .as_ref()
                .map(|installer| installer.install(instance, specs))
                .transpose()?
                .is_some(),
            InstallCall::CustomControls(specs) => installers
                .custom_controls
                .as_ref()
                .map(|installer| installer.install(instance, specs))
                .transpose()?
                .is_some(),
        };

        if !ran {
            debug!(
                "No {} installer registered, skipping for '{}'",
                self.label(),
                instance.container_id()
            );
        }
        Ok(ran)
    }
}

/// Spec lists handed to each installer last time it ran.
#[derive(Debug, Clone, Default)]
pub struct InstalledSpecs {
    image_sprites: Option<Vec<ImageSpriteSpec>>,
    controls: Option<Vec<ControlSpec>>,
    custom_controls: Option<Vec<CustomControlSpec>>,
}

fn needs_install<S: PartialEq>(installed: &Option<Vec<S>>, next: &[S]) -> bool {
    !next.is_empty() && installed.as_deref() != Some(next)
}

impl InstalledSpecs {
    /// Installer runs needed for `props`.
    pub fn plan(&self, props: &MapProps) -> Vec<InstallCall> {
        let mut calls = Vec::new();

        if needs_install(&self.image_sprites, &props.image_sprites) {
            calls.push(InstallCall::ImageSprites(props.image_sprites.clone()));
        }
        if needs_install(&self.controls, &props.controls) {
            calls.push(InstallCall::Controls(props.controls.clone()));
        }
        if needs_install(&self.custom_controls, &props.custom_controls) {
            calls.push(InstallCall::CustomControls(props.custom_controls.clone()));
        }

        calls
    }

    /// Record a completed run.
    pub fn commit(&mut self, call: &InstallCall) {
        match call {
            InstallCall::ImageSprites(specs) => self.image_sprites = Some(specs.clone()),
            InstallCall::Controls(specs) => self.controls = Some(specs.clone()),
            InstallCall::CustomControls(specs) => self.custom_controls = Some(specs.clone()),
        }
    }
}
