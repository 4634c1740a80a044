//! Headless driver: follows a scripted avatar through a small box world and
//! logs where the camera ends up.
//!
//! Usage: `vantage [options.toml]`. Set `RUST_LOG=info` (or `debug`) to see
//! the output.

use std::path::Path;

use glam::{Vec2, Vec3};
use vantage::{
    camera::{
        Avatar, CameraController, CameraMode, InputLatch, InputSnapshot,
        Target, TargetId, TickOutcome,
    },
    options::Options,
    util::tick_clock::TickClock,
    world::{BoxWorld, Collider},
};

const TICK_HZ: u32 = 50;
const FRAME_SECONDS: f32 = 1.0 / 60.0;
const SAMPLES_PER_FRAME: u32 = 4;
const FRAMES: u32 = 360;
const WALK_SPEED: f32 = 3.0;
const PLAYER: TargetId = TargetId(1);

struct Session {
    camera: CameraController,
    avatar: Avatar,
    world: BoxWorld,
    latch: InputLatch,
    clock: TickClock,
}

impl Session {
    fn new(options: Options) -> Result<Self, vantage::error::ConfigError> {
        let mut world = BoxWorld::new();
        // Back wall close enough to block the default follow distance.
        world.insert(Collider::new(
            Vec3::new(-10.0, 0.0, -5.5),
            Vec3::new(10.0, 6.0, -5.0),
        ));
        // Pillar off to the side of the walk path.
        world.insert(Collider::centered(
            Vec3::new(3.0, 2.0, 8.0),
            Vec3::new(1.0, 4.0, 1.0),
        ));
        // The avatar's own capsule, which the camera must see through.
        world.insert(
            Collider::centered(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.6, 2.0, 0.6))
                .owned_by(PLAYER),
        );

        Ok(Self {
            camera: CameraController::new(options)?,
            avatar: Avatar::new(PLAYER, Vec3::ZERO, 0.0),
            world,
            latch: InputLatch::new(),
            clock: TickClock::new(TICK_HZ),
        })
    }

    /// Input device samples for one sub-frame of the script.
    fn script(frame: u32) -> InputSnapshot {
        match frame {
            0..=59 => InputSnapshot::default(),
            60..=149 => InputSnapshot {
                movement: Vec2::new(0.0, 1.0),
                ..InputSnapshot::default()
            },
            150..=209 => InputSnapshot {
                rotation: Vec2::new(0.4, -0.1),
                zoom: -0.01,
                ..InputSnapshot::default()
            },
            _ => InputSnapshot {
                movement: Vec2::new(0.5, 1.0),
                ..InputSnapshot::default()
            },
        }
    }

    fn walk(&mut self, input: &InputSnapshot, dt: f32) {
        let Some(pose) = self.avatar.pose.as_mut() else {
            return;
        };
        let forward = pose.rotation * Vec3::Z;
        let right = Vec3::Y.cross(forward);
        let step = (forward * input.movement.y + right * input.movement.x)
            * WALK_SPEED
            * dt;
        pose.position += step;
        self.world.translate_owned(PLAYER, step);
    }

    fn switch_mode(&mut self, frame: u32) {
        let mode = match frame {
            240 => CameraMode::TRACKING_FOLLOW,
            290 => CameraMode::FIXED_FOLLOW,
            330 => CameraMode::FirstPerson,
            _ => return,
        };
        log::info!("frame {frame}: switching to {mode}");
        if let TickOutcome::Moved { transform, .. } =
            self.camera.set_mode(mode, &mut self.avatar, &self.world)
        {
            log::info!("  snapped to {:.2}", transform.position);
        }
    }

    fn run_frame(&mut self, frame: u32) {
        for _ in 0..SAMPLES_PER_FRAME {
            self.latch.sample(Self::script(frame));
        }
        self.switch_mode(frame);

        let dt = self.clock.step_seconds();
        let ticks = self.clock.advance_by(web_time::Duration::from_secs_f32(
            FRAME_SECONDS,
        ));
        for _ in 0..ticks {
            let input = self.latch.take();
            self.walk(&input, dt);
            match self.camera.tick(&mut self.avatar, &input, &self.world, dt) {
                TickOutcome::Moved {
                    transform,
                    obstructed,
                } => {
                    if self.camera.ticks() % 25 == 0 || obstructed {
                        let orbit = self.camera.orbit();
                        log::info!(
                            "tick {:>4} [{}] target {:.2} camera {:.2} \
                             looking {:.2} distance {:.2}/{:.2}{}",
                            self.camera.ticks(),
                            self.camera.mode(),
                            self.avatar.pose().map_or(Vec3::ZERO, |p| p.position),
                            transform.position,
                            transform.forward(),
                            orbit.current_distance,
                            orbit.desired_distance,
                            if obstructed { " (obstructed)" } else { "" },
                        );
                    }
                }
                TickOutcome::Skipped => log::warn!("camera tick skipped"),
            }
        }
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("Loaded camera options from '{path}'");
                options
            }
            Err(e) => {
                log::error!("Failed to load camera options '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut session = match Session::new(options) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    for frame in 0..FRAMES {
        session.run_frame(frame);
    }
    log::info!(
        "done: {} ticks, final camera at {:.2}",
        session.clock.total_ticks(),
        session.camera.transform().position
    );
}
