//! Systems driving bridges from the ECS schedule.

pub mod mount;
pub mod ready;
pub mod sync;
pub mod teardown;

pub use mount::mount_bridges;
pub use ready::poll_ready_signals;
pub use sync::{sync_bridges, update_surfaces};
pub use teardown::on_map_props_removed;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bevy::prelude::*;
    use bevy_mapbridge_engine::headless::{EngineCall, HeadlessEngine, HeadlessFactory};
    use bevy_mapbridge_engine::prelude::*;

    use crate::components::{BridgeCreationFailed, BridgeState, MapLoader, MapProps, MapSurface};
    use crate::error::BridgeError;
    use crate::events::{MapCreated, MapCreationFailed, MapReady};
    use crate::plugin::MapBridgeCorePlugin;
    use crate::store::SharedMapState;

    #[derive(Resource, Default)]
    struct Seen {
        created: Vec<Entity>,
        ready: Vec<Entity>,
        failed: Vec<(Entity, String)>,
    }

    fn app_with(plugin: MapBridgeCorePlugin) -> App {
        let mut app = App::new();
        app.add_plugins(plugin);
        app.init_resource::<Seen>();
        app.add_observer(|trigger: On<MapCreated>, mut seen: ResMut<Seen>| {
            seen.created.push(trigger.event().entity);
        });
        app.add_observer(|trigger: On<MapReady>, mut seen: ResMut<Seen>| {
            seen.ready.push(trigger.event().entity);
        });
        app.add_observer(|trigger: On<MapCreationFailed>, mut seen: ResMut<Seen>| {
            let event = trigger.event();
            seen.failed.push((event.entity, event.error.to_string()));
        });
        app
    }

    fn app(factory: &HeadlessFactory) -> App {
        app_with(MapBridgeCorePlugin::default().with_factory(factory.clone()))
    }

    fn engine(factory: &HeadlessFactory) -> Arc<HeadlessEngine> {
        factory.last_engine().unwrap()
    }

    fn surface(app: &App, entity: Entity) -> MapSurface {
        app.world().get::<MapSurface>(entity).cloned().unwrap()
    }

    fn traffic(incidents: bool) -> TrafficOptions {
        TrafficOptions {
            incidents,
            ..Default::default()
        }
    }

    #[test]
    fn test_maps_spawned_together_share_one_instance() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);

        let first = app.world_mut().spawn(MapProps::default()).id();
        let second = app.world_mut().spawn(MapProps::default()).id();
        app.update();
        app.update();

        assert_eq!(factory.create_count(), 1);
        assert_eq!(app.world().resource::<Seen>().created.len(), 1);
        assert!(app.world().get::<BridgeState>(first).is_some());
        assert!(app.world().get::<BridgeState>(second).is_some());
    }

    #[test]
    fn test_ready_event_shows_container() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        let loader = app.world_mut().spawn_empty().id();

        let data_hits = Arc::new(AtomicUsize::new(0));
        let counter = data_hits.clone();
        let map = app
            .world_mut()
            .spawn(
                MapProps::default()
                    .with_loader(loader)
                    .on("data", move |_| {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }),
            )
            .id();

        app.update();
        assert_eq!(surface(&app, map), MapSurface::Loader(MapLoader(loader)));
        assert!(app.world().resource::<Seen>().ready.is_empty());

        let engine = engine(&factory);
        engine.fire_ready();
        app.update();

        let (container_id, _) = factory.created()[0].clone();
        assert_eq!(surface(&app, map).container_id(), Some(container_id.as_str()));
        assert_eq!(app.world().resource::<Seen>().ready, vec![map]);
        assert!(app.world().resource::<SharedMapState>().is_available());

        engine.emit("data", serde_json::json!({ "vehicles": 3 }));
        assert_eq!(data_hits.load(Ordering::SeqCst), 1);
        assert_eq!(engine.listener_count("data"), 1);
        assert_eq!(engine.listener_count("ready"), 1);

        app.update();
        assert_eq!(app.world().resource::<Seen>().ready.len(), 1);
    }

    #[test]
    fn test_option_changes_apply_after_ready() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        let map = app
            .world_mut()
            .spawn(MapProps::default().with_traffic(traffic(false)))
            .id();

        app.update();
        let engine = engine(&factory);
        assert!(engine.traffic_calls().is_empty());

        engine.fire_ready();
        app.update();
        assert_eq!(engine.traffic_calls(), vec![Some(traffic(false))]);

        app.world_mut()
            .get_mut::<MapProps>(map)
            .unwrap()
            .traffic_options = Some(traffic(true));
        app.update();
        app.update();

        assert_eq!(
            engine.traffic_calls(),
            vec![Some(traffic(false)), Some(traffic(true))]
        );
        assert_eq!(engine.count(|c| matches!(c, EngineCall::SetCamera(_))), 0);
    }

    #[test]
    fn test_despawn_releases_slot_once() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        let map = app
            .world_mut()
            .spawn(MapProps::default().on("click", |_| {}))
            .id();
        app.update();
        engine(&factory).fire_ready();
        app.update();

        let revision = app.world().resource::<SharedMapState>().revision();
        app.world_mut().entity_mut(map).despawn();
        app.update();

        let store = app.world().resource::<SharedMapState>();
        assert_eq!(store.revision(), revision + 1);
        assert!(store.instance_ref().is_none());
        assert!(!store.is_ready());
        assert_eq!(engine(&factory).total_listeners(), 0);
    }

    #[test]
    fn test_removing_props_clears_bridge_components() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        let map = app.world_mut().spawn(MapProps::default()).id();
        app.update();

        app.world_mut().entity_mut(map).remove::<MapProps>();
        app.update();

        assert!(app.world().get::<BridgeState>(map).is_none());
        assert!(app.world().get::<MapSurface>(map).is_none());
        assert!(app.world().resource::<SharedMapState>().instance_ref().is_none());
    }

    #[test]
    fn test_creation_failure_is_reported_once() {
        let factory = HeadlessFactory::failing("no gpu");
        let mut app = app(&factory);
        let loader = app.world_mut().spawn_empty().id();
        let map = app
            .world_mut()
            .spawn(MapProps::default().with_loader(loader))
            .id();

        app.update();
        app.update();

        let seen = app.world().resource::<Seen>();
        assert_eq!(seen.failed.len(), 1);
        assert_eq!(seen.failed[0].0, map);
        assert!(seen.failed[0].1.contains("no gpu"));
        assert!(seen.created.is_empty());
        assert!(app.world().get::<BridgeCreationFailed>(map).is_some());
        assert_eq!(surface(&app, map), MapSurface::Loader(MapLoader(loader)));
        assert!(app.world().resource::<SharedMapState>().instance_ref().is_none());

        let revision = app.world().resource::<SharedMapState>().revision();
        app.world_mut().entity_mut(map).despawn();
        app.update();
        assert_eq!(
            app.world().resource::<SharedMapState>().revision(),
            revision + 1
        );
    }

    #[test]
    fn test_missing_factory_fails_mount() {
        let mut app = app_with(MapBridgeCorePlugin::default());
        app.world_mut().spawn(MapProps::default());
        app.update();

        let seen = app.world().resource::<Seen>();
        assert_eq!(seen.failed.len(), 1);
        assert_eq!(seen.failed[0].1, BridgeError::MissingFactory.to_string());
    }

    #[test]
    fn test_late_mount_joins_ready_instance() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        app.world_mut().spawn(MapProps::default().with_map_id("fleet"));
        app.update();
        engine(&factory).fire_ready();
        app.update();

        let late = app.world_mut().spawn(MapProps::default()).id();
        app.update();

        assert_eq!(factory.create_count(), 1);
        assert!(app.world().resource::<Seen>().ready.contains(&late));
        let own_id = app
            .world()
            .get::<BridgeState>(late)
            .map(|state| state.bridge.container_id().to_string())
            .unwrap();
        assert!(own_id.starts_with("map-"));
        assert_eq!(surface(&app, late).container_id(), Some(own_id.as_str()));
    }

    #[test]
    fn test_swapping_event_callback_replaces_listener() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        let old = EventCallback::new(|_| {});
        let new = EventCallback::new(|_| {});
        let map = app
            .world_mut()
            .spawn(MapProps::default().with_event("data", old.clone()))
            .id();
        app.update();

        app.world_mut()
            .get_mut::<MapProps>(map)
            .unwrap()
            .events
            .insert("data".to_string(), new.clone());
        app.update();

        let engine = engine(&factory);
        assert!(engine.has_listener("data", &new));
        assert!(!engine.has_listener("data", &old));
        assert_eq!(engine.listener_count("data"), 1);
        assert_eq!(
            engine.count(|c| *c == EngineCall::RemoveListener("data".into())),
            1
        );
    }

    #[test]
    fn test_surviving_map_follows_replacement_instance() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        let survivor = app
            .world_mut()
            .spawn(
                MapProps::default()
                    .with_map_id("a")
                    .with_traffic(traffic(true))
                    .on("data", |_| {}),
            )
            .id();
        app.update();
        engine(&factory).fire_ready();
        app.update();

        let joined = app.world_mut().spawn(MapProps::default().with_map_id("b")).id();
        app.update();
        app.world_mut().entity_mut(joined).despawn();
        app.update();
        assert_eq!(surface(&app, survivor), MapSurface::Hidden);

        app.world_mut().spawn(MapProps::default().with_map_id("c"));
        app.update();
        assert_eq!(factory.create_count(), 2);
        let replacement = engine(&factory);
        assert_eq!(replacement.listener_count("data"), 1);
        assert_eq!(surface(&app, survivor), MapSurface::Hidden);

        replacement.fire_ready();
        app.update();

        assert_eq!(replacement.traffic(), Some(traffic(true)));
        assert_eq!(
            surface(&app, survivor),
            MapSurface::Container { id: "a".to_string() }
        );
        let seen = app.world().resource::<Seen>();
        assert_eq!(seen.ready.iter().filter(|e| **e == survivor).count(), 2);
    }

    #[test]
    fn test_user_ready_handler_coexists_with_internal() {
        let factory = HeadlessFactory::default();
        let mut app = app(&factory);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        app.world_mut().spawn(MapProps::default().on("ready", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        app.update();

        let engine = engine(&factory);
        assert_eq!(engine.listener_count("ready"), 2);
        engine.fire_ready();
        app.update();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(app.world().resource::<SharedMapState>().is_ready());
    }
}
