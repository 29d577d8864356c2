/// Dark Side — the Earth, Moon and Sun rendered from SPICE position tables.
///
/// Placeholder trigonometric orbits drive the scene until the host has
/// fetched the time axis and per-body tables; once every table is in, the
/// scene switches to tabulated playback under slider and play/pause control.

use orrery_engine::*;
use glam::DVec3;

use crate::bodies;

/// Fixed simulation step in seconds.
const FIXED_DT: f64 = 1.0 / 60.0;

// ── Frame event kinds to the UI ──────────────────────────────────────

/// a = current sample cursor, b = sample count, c = sample time (ET seconds).
const EVENT_SAMPLE_INFO: f32 = 1.0;
/// a = 1.0 while playback is running.
const EVENT_PLAYBACK_INFO: f32 = 2.0;

/// One spawned body the provider moves each step.
struct TrackedBody {
    id: BodyId,
    name: String,
    has_table: bool,
}

pub struct DarkSide {
    manifest: SceneManifest,
    /// Placeholder orbits, active until the tables arrive.
    analytic: AnalyticEphemeris,
    /// File-backed playback positions.
    tabulated: TabulatedEphemeris,
    clock: AnimationClock,
    /// Current sample cursor into the tables.
    cursor: usize,
    /// Continuous time parameter for the analytic orbits, in seconds.
    elapsed: f64,
    tracked: Vec<TrackedBody>,
    /// Names of bodies that need a table before playback can start.
    table_bodies: Vec<String>,
}

impl DarkSide {
    pub fn new() -> Self {
        let manifest = SceneManifest::from_json(bodies::DEFAULT_MANIFEST).unwrap_or_else(|err| {
            log::error!("built-in manifest rejected: {err}");
            SceneManifest {
                bodies: Vec::new(),
                camera_offset: [0.0; 3],
            }
        });

        Self {
            manifest,
            analytic: AnalyticEphemeris::new(),
            tabulated: TabulatedEphemeris::new(DVec3::ZERO),
            clock: AnimationClock::default(),
            cursor: 0,
            elapsed: 0.0,
            tracked: Vec::new(),
            table_bodies: Vec::new(),
        }
    }

    /// Rebuild the scene from the current manifest: spawn bodies, install
    /// placeholder orbits, reset playback state.
    fn apply_manifest(&mut self, ctx: &mut EngineContext) {
        ctx.scene.clear();
        self.tracked.clear();
        self.table_bodies.clear();
        self.analytic = AnalyticEphemeris::new();
        let offset = self.manifest.camera_offset;
        self.tabulated = TabulatedEphemeris::new(DVec3::new(offset[0], offset[1], offset[2]));
        self.cursor = 0;

        for desc in &self.manifest.bodies {
            let id = ctx.next_id();
            let start = desc.orbit.evaluate(0.0);
            ctx.scene.spawn(
                Body::new(id, desc.name.as_str(), desc.radius)
                    .with_color(desc.color)
                    .with_emissive(desc.emissive)
                    .with_position(start),
            );
            self.analytic.insert(desc.name.as_str(), desc.orbit);
            self.tracked.push(TrackedBody {
                id,
                name: desc.name.clone(),
                has_table: desc.table.is_some(),
            });
            if desc.table.is_some() {
                self.table_bodies.push(desc.name.clone());
            }
        }

        // Second pass: turn central-body names into typed references.
        // The manifest validated its references, so every lookup hits.
        for desc in &self.manifest.bodies {
            if let Some(central) = &desc.central {
                let central_id = self
                    .tracked
                    .iter()
                    .find(|t| &t.name == central)
                    .map(|t| t.id);
                if let (Some(cid), Some(body)) =
                    (central_id, ctx.scene.find_by_name_mut(desc.name.as_str()))
                {
                    body.central = CentralBody::Body(cid);
                }
            }
        }
    }

    /// True once every table-backed body can be served from the tables.
    fn tables_ready(&self) -> bool {
        let names: Vec<&str> = self.table_bodies.iter().map(String::as_str).collect();
        self.tabulated.is_ready(&names)
    }
}

impl Simulation for DarkSide {
    fn init(&mut self, ctx: &mut EngineContext) {
        self.apply_manifest(ctx);
    }

    fn load_manifest(&mut self, ctx: &mut EngineContext, json: &str) {
        match SceneManifest::from_json(json) {
            Ok(manifest) => {
                self.manifest = manifest;
                self.apply_manifest(ctx);
            }
            Err(err) => log::warn!("manifest rejected, keeping current scene: {err}"),
        }
    }

    fn load_table(&mut self, name: &str, text: &str) {
        if name == "times" {
            match parse_times(text) {
                Ok(times) => self.tabulated.set_times(times),
                Err(err) => log::warn!("times table rejected: {err}"),
            }
            return;
        }
        let Some(desc) = self.manifest.bodies.iter().find(|b| b.name == name) else {
            log::warn!("position table for unknown body {name:?}");
            return;
        };
        match parse_positions(text) {
            Ok(positions) => {
                let series = BodySeries {
                    positions,
                    relative_to: desc.central.clone(),
                    display_factor: desc.display_factor,
                };
                if let Err(err) = self.tabulated.insert_series(name, series) {
                    log::warn!("position table for {name:?} rejected: {err}");
                }
            }
            Err(err) => log::warn!("position table for {name:?} rejected: {err}"),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let count = self.tabulated.sample_count();

        for event in input.iter() {
            match *event {
                InputEvent::SliderChanged { value, min, max } => {
                    self.cursor = sample_index(value, min, max, count);
                }
                InputEvent::PlaybackToggled => self.clock.toggle(),
                InputEvent::Custom { .. } => {}
            }
        }

        self.elapsed += FIXED_DT;
        if self.clock.tick(FIXED_DT * 1000.0) {
            self.cursor = AnimationClock::step(self.cursor, count);
        }

        let tables_ready = self.tables_ready();
        for tracked in &self.tracked {
            let position = if tables_ready && tracked.has_table {
                self.tabulated.displayed_position(&tracked.name, self.cursor)
            } else {
                self.analytic.position_at(&tracked.name, self.elapsed)
            };
            if let (Some(p), Some(body)) = (position, ctx.scene.get_mut(tracked.id)) {
                body.position = p;
            }
        }

        ctx.emit_event(FrameEvent {
            kind: EVENT_SAMPLE_INFO,
            a: self.cursor as f32,
            b: count as f32,
            c: self.tabulated.time_at(self.cursor).unwrap_or(0.0) as f32,
        });
        ctx.emit_event(FrameEvent {
            kind: EVENT_PLAYBACK_INFO,
            a: if self.clock.is_running() { 1.0 } else { 0.0 },
            b: 0.0,
            c: 0.0,
        });
    }
}

impl Default for DarkSide {
    fn default() -> Self {
        Self::new()
    }
}
