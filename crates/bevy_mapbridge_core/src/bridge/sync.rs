//! Option synchronizers.
//!
//! Each option group (traffic, user interaction, camera) is diffed on its own
//! against the last value applied to the instance. Planning is pure; calls are
//! only recorded in the snapshot once they have been issued.

use bevy_mapbridge_engine::prelude::*;

use crate::components::MapProps;

/// A single setter call on the instance.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionCall {
    Traffic(Option<TrafficOptions>),
    UserInteraction(Option<UserInteractionOptions>),
    Camera(Option<CameraOptions>),
}

impl OptionCall {
    /// Issue the call on `engine`.
    pub fn apply(&self, engine: &dyn MapEngine) {
        match self {
            OptionCall::Traffic(options) => engine.set_traffic(options.as_ref()),
            OptionCall::UserInteraction(options) => engine.set_user_interaction(options.as_ref()),
            OptionCall::Camera(options) => engine.set_camera(options.as_ref()),
        }
    }
}

/// Last values applied to the instance, one per option group.
///
/// `None` means "nothing applied", which is also what a cleared group looks
/// like. A group that was never set and is still unset needs no call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSnapshot {
    traffic: Option<TrafficOptions>,
    user_interaction: Option<UserInteractionOptions>,
    camera: Option<CameraOptions>,
}

impl OptionSnapshot {
    /// Calls needed to bring the instance in line with `props`.
    ///
    /// At most one call per group, and only for groups that differ.
    pub fn plan(&self, props: &MapProps) -> Vec<OptionCall> {
        let mut calls = Vec::new();

        if self.traffic != props.traffic_options {
            calls.push(OptionCall::Traffic(props.traffic_options.clone()));
        }
        if self.user_interaction != props.user_interaction {
            calls.push(OptionCall::UserInteraction(props.user_interaction.clone()));
        }
        if self.camera != props.camera_options {
            calls.push(OptionCall::Camera(props.camera_options.clone()));
        }

        calls
    }

    /// Record an issued call.
    pub fn commit(&mut self, call: &OptionCall) {
        match call {
            OptionCall::Traffic(options) => self.traffic = options.clone(),
            OptionCall::UserInteraction(options) => self.user_interaction = options.clone(),
            OptionCall::Camera(options) => self.camera = options.clone(),
        }
    }

    pub fn traffic(&self) -> Option<&TrafficOptions> {
        self.traffic.as_ref()
    }

    pub fn user_interaction(&self) -> Option<&UserInteractionOptions> {
        self.user_interaction.as_ref()
    }

    pub fn camera(&self) -> Option<&CameraOptions> {
        self.camera.as_ref()
    }
}
