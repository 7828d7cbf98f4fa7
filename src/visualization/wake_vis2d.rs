use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Shared mesh and materials for particle entities
#[derive(Resource)]
struct ParticleStyle {
    mesh: Mesh2dHandle,
    bound: Handle<ColorMaterial>,
    wake: Handle<ColorMaterial>,
}

const SCALE: f32 = 50.0; // pixels per metre
const PARTICLE_RADIUS: f32 = 3.0; // pixels

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D wake viewer, t_end = {} s", scenario.parameters.t_end);

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_system)
        .add_systems(Update, (physics_step_system, spawn_shed_particles_system, sync_transforms_system).chain())
        .run();
}

/// Screen position with the trailing edge at the origin
fn to_screen(x: f64, y: f64, chord: f64) -> Vec3 {
    Vec3::new(((x - chord) as f32) * SCALE, (y as f32) * SCALE, 0.0)
}

fn setup_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // Chord line from leading to trailing edge
    let chord = scenario.parameters.chord;
    let chord_px = (chord as f32) * SCALE;
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Rectangle::new(chord_px, 2.0))),
        material: materials.add(ColorMaterial::from(Color::srgb(0.6, 0.6, 0.6))),
        transform: Transform::from_xyz(-0.5 * chord_px, 0.0, -1.0),
        ..Default::default()
    });

    commands.insert_resource(ParticleStyle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(PARTICLE_RADIUS))),
        bound: materials.add(ColorMaterial::from(Color::WHITE)),
        wake: materials.add(ColorMaterial::from(Color::srgb(0.3, 0.7, 1.0))),
    });
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut reported: Local<bool>) {
    match scenario.step() {
        Ok(true) => {}
        Ok(false) => {
            if !*reported {
                print!("{}", scenario.report());
                *reported = true;
            }
        }
        Err(e) => {
            if !*reported {
                log::error!("simulation stopped: {}", e);
                *reported = true;
            }
        }
    }
}

/// Give every newly shed particle its own entity
fn spawn_shed_particles_system(mut commands: Commands, scenario: Res<Scenario>, style: Res<ParticleStyle>, query: Query<&ParticleIndex>) {
    let spawned = query.iter().count();
    let chord = scenario.parameters.chord;

    for (i, p) in scenario.system.particles.iter().enumerate().skip(spawned) {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: style.mesh.clone(),
                material: style.bound.clone(),
                transform: Transform::from_translation(to_screen(p.x.x, p.x.y, chord)),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, style: Res<ParticleStyle>, mut query: Query<(&ParticleIndex, &mut Transform, &mut Handle<ColorMaterial>)>) {
    let chord = scenario.parameters.chord;
    for (ParticleIndex(i), mut transform, mut material) in &mut query {
        if let Some(p) = scenario.system.particles.get(*i) {
            // NaN states (singular kernel) keep their last drawable position
            if !(p.x.x.is_finite() && p.x.y.is_finite()) {
                continue;
            }
            transform.translation = to_screen(p.x.x, p.x.y, chord);
            *material = if p.x.x > chord { style.wake.clone() } else { style.bound.clone() };
        }
    }
}
