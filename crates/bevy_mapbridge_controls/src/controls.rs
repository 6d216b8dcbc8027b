//! Built-in and custom control installers.

use bevy::prelude::*;
use bevy_mapbridge_engine::prelude::*;

/// Adds each built-in control at its requested position.
pub fn install_controls(instance: &MapHandle, specs: &[ControlSpec]) -> Result<(), EngineError> {
    for spec in specs {
        let control = MapControl::Builtin {
            kind: spec.kind,
            settings: spec.settings.clone(),
        };
        instance.controls().add(control, &spec.options)?;
    }

    debug!("Added {} controls to '{}'", specs.len(), instance.container_id());
    Ok(())
}

/// Adds caller-built controls at their requested position.
pub fn install_custom_controls(
    instance: &MapHandle,
    specs: &[CustomControlSpec],
) -> Result<(), EngineError> {
    for spec in specs {
        instance
            .controls()
            .add(MapControl::Custom(spec.control.clone()), &spec.options)?;
    }

    debug!("Added {} custom controls to '{}'", specs.len(), instance.container_id());
    Ok(())
}
