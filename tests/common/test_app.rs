use bevy::{prelude::*, time::TimeUpdateStrategy};
use roadracer::{
    components::{ChassisPose, InputFlags, VehicleState},
    plugins::{RacePlugin, RaceSet},
    resources::{RaceClock, RaceEvent, RoadState, SimulationConfig},
};
use std::time::Duration;

/// Every `RaceEvent` seen since the app was built.
#[derive(Resource, Default)]
pub struct CollectedEvents(pub Vec<RaceEvent>);

fn collect_events(mut reader: EventReader<RaceEvent>, mut collected: ResMut<CollectedEvents>) {
    collected.0.extend(reader.read().copied());
}

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: super::create_test_config(),
            time_step: super::TEST_DT,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(RacePlugin::with_config(self.config))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.time_step,
            )))
            .init_resource::<CollectedEvents>()
            .add_systems(Update, collect_events.after(RaceSet::Presentation));

        // Run an initial update to spawn the vehicle
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn set_input(&mut self, input: InputFlags) {
        self.app.world_mut().insert_resource(input);
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn vehicle(&mut self) -> VehicleState {
        match self.query_single::<VehicleState>() {
            Some(state) => state.clone(),
            None => panic!("Vehicle state not found"),
        }
    }

    pub fn pose(&mut self) -> ChassisPose {
        match self.query_single::<ChassisPose>() {
            Some(pose) => *pose,
            None => panic!("Chassis pose not found"),
        }
    }

    pub fn road(&self) -> &RoadState {
        match self.get_state::<RoadState>() {
            Some(road) => road,
            None => panic!("Road state not found"),
        }
    }

    pub fn clock(&self) -> RaceClock {
        self.get_state::<RaceClock>().copied().unwrap_or_default()
    }

    pub fn config(&self) -> &SimulationConfig {
        match self.get_state::<SimulationConfig>() {
            Some(config) => config,
            None => panic!("Simulation config not found"),
        }
    }

    pub fn events(&self) -> &[RaceEvent] {
        self.get_state::<CollectedEvents>()
            .map(|events| events.0.as_slice())
            .unwrap_or_default()
    }
}
