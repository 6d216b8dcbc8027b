//! Image sprite installer.

use bevy::prelude::*;
use bevy_mapbridge_engine::prelude::*;

/// Registers each sprite with the instance's sprite sheet.
///
/// Ids already present on the instance are left alone, so a second bridge
/// sharing the instance can declare the same sprites. A failing sprite does
/// not stop the rest; the first error is returned.
pub fn install_image_sprites(
    instance: &MapHandle,
    specs: &[ImageSpriteSpec],
) -> Result<(), EngineError> {
    let sheet = instance.image_sprites();
    let mut first_error = None;
    let mut added = 0;

    for spec in specs {
        if sheet.has(&spec.id) {
            debug!("Sprite '{}' already on '{}'", spec.id, instance.container_id());
            continue;
        }
        match sheet.add(spec) {
            Ok(()) => added += 1,
            Err(err) => {
                warn!("Failed to add sprite '{}': {}", spec.id, err);
                first_error.get_or_insert(err);
            }
        }
    }

    debug!("Added {} image sprites to '{}'", added, instance.container_id());
    first_error.map_or(Ok(()), Err)
}
