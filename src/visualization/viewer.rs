use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::configuration::config::ViewConfig;
use crate::simulation::scenario::{BodySpawner, Scenario, SpawnTrigger};
use crate::simulation::scene::Scene;
use crate::simulation::states::NVec2;
use crate::visualization::render::{Palette, RenderTarget, Rgb};

/// Viewer state that is not physics: palette, spawn input, screen mapping
#[derive(Resource)]
struct Viewer {
    palette: Palette,
    spawner: BodySpawner,
    trigger: SpawnTrigger,
    half_extent: Vec2, // half window size in sim units
}

pub fn run_2d(scenario: Scenario, view: &ViewConfig) {
    let Scenario { scene, spawner } = scenario;
    let viewer = Viewer {
        palette: view.palette.clone(),
        spawner,
        trigger: SpawnTrigger::default(),
        half_extent: Vec2::new(view.width as f32, view.height as f32) * 0.5,
    };

    App::new()
        .insert_resource(scene)
        .insert_resource(viewer)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: view.title.clone(),
                resolution: WindowResolution::new(view.width as f32, view.height as f32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, (input_system, physics_step_system, draw_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands, scene: Res<Scene>) {
    info!(
        "run_2d: starting Bevy 2D viewer with {} bodies, {} springs",
        scene.body_count(),
        scene.spring_count()
    );
    commands.spawn(Camera2dBundle::default());
}

/// Space spawns one body per press, Escape quits
fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut viewer: ResMut<Viewer>,
    mut scene: ResMut<Scene>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }

    let Viewer { spawner, trigger, .. } = &mut *viewer;
    if trigger.update(keys.pressed(KeyCode::Space)) {
        if let Err(e) = spawner.spawn(&mut scene) {
            warn!("spawn rejected: {e}");
        }
    }
}

fn physics_step_system(time: Res<Time>, mut scene: ResMut<Scene>) {
    scene.update(time.delta_seconds_f64());
}

fn draw_system(scene: Res<Scene>, viewer: Res<Viewer>, mut gizmos: Gizmos) {
    let mut target = GizmoTarget {
        gizmos: &mut gizmos,
        half_extent: viewer.half_extent,
    };
    scene.draw(&mut target, &viewer.palette);
}

/// Draws through Bevy gizmos. Sim space has its origin at the top-left
/// corner with y down; Bevy's 2D camera is centred with y up.
struct GizmoTarget<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    half_extent: Vec2,
}

impl GizmoTarget<'_, '_, '_> {
    fn to_screen(&self, p: NVec2) -> Vec2 {
        Vec2::new(p.x as f32 - self.half_extent.x, self.half_extent.y - p.y as f32)
    }
}

fn color(rgb: Rgb) -> Color {
    Color::srgb(rgb[0], rgb[1], rgb[2])
}

impl RenderTarget for GizmoTarget<'_, '_, '_> {
    fn circle(&mut self, center: NVec2, radius: f64, rgb: Rgb) {
        let c = self.to_screen(center);
        self.gizmos.circle_2d(c, radius as f32, color(rgb));
    }

    fn rect(&mut self, center: NVec2, width: f64, height: f64, rgb: Rgb) {
        let c = self.to_screen(center);
        self.gizmos.rect_2d(c, 0.0, Vec2::new(width as f32, height as f32), color(rgb));
    }

    fn line(&mut self, a: NVec2, b: NVec2, color_a: Rgb, color_b: Rgb) {
        let (pa, pb) = (self.to_screen(a), self.to_screen(b));
        self.gizmos.line_gradient_2d(pa, pb, color(color_a), color(color_b));
    }
}
