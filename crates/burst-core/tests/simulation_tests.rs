// Host-side tests for particle motion, culling and normal coupling.

use burst_core::*;
use glam::Vec2;

#[derive(Default)]
struct RecordingCanvas {
    clears: usize,
    circles: Vec<(Vec2, f32, String)>,
}

impl ParticleCanvas for RecordingCanvas {
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.circles.push((center, radius, color.to_string()));
    }
}

fn make_sim(coupling: NormalCoupling) -> Simulation {
    let params = EffectParams::default()
        .with_seed(7)
        .with_normal_coupling(coupling);
    let mut sim = Simulation::new(params, Viewport::new(4000.0, 4000.0)).unwrap();
    sim.normal = Vec2::ZERO;
    sim
}

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn radius_shrinks_linearly_per_frame() {
    let mut sim = make_sim(NormalCoupling::Independent);
    sim.particles
        .push(Particle::new(Vec2::new(2000.0, 2000.0), 0.7, 3.0, 10.0, 0));
    let mut canvas = RecordingCanvas::default();
    for n in 1..=30 {
        sim.step(&mut canvas);
        let r = sim.particles[0].radius;
        assert!(approx(r, 10.0 - 0.3 * n as f32, 1e-4), "frame {n}: r={r}");
    }
}

#[test]
fn velocity_decays_geometrically() {
    let mut sim = make_sim(NormalCoupling::Independent);
    let p = Particle::new(Vec2::new(2000.0, 2000.0), 1.1, 9.0, 20.0, 0);
    let v0 = p.vel.length();
    sim.particles.push(p);
    let mut canvas = RecordingCanvas::default();
    for n in 1..=25 {
        sim.step(&mut canvas);
        let expected = v0 * 0.9_f32.powi(n);
        let got = sim.particles[0].vel.length();
        assert!(approx(got, expected, 1e-4 * v0), "frame {n}: {got} vs {expected}");
    }
}

#[test]
fn particle_expiring_this_frame_is_drawn_then_removed() {
    let mut sim = make_sim(NormalCoupling::Independent);
    sim.particles
        .push(Particle::new(Vec2::new(2000.0, 2000.0), 0.0, 0.0, 0.2, 0));
    let mut canvas = RecordingCanvas::default();
    let stats = sim.step(&mut canvas);
    assert_eq!(stats.drawn, 1);
    assert_eq!(stats.culled, 1);
    assert!(sim.particles.is_empty());
}

#[test]
fn negative_radius_is_skipped_and_culled() {
    let mut sim = make_sim(NormalCoupling::Independent);
    sim.particles
        .push(Particle::new(Vec2::new(2000.0, 2000.0), 0.0, 0.0, -0.1, 0));
    let mut canvas = RecordingCanvas::default();
    let stats = sim.step(&mut canvas);
    assert_eq!(canvas.clears, 1);
    assert!(canvas.circles.is_empty());
    assert_eq!(stats.drawn, 0);
    assert_eq!(stats.culled, 1);
}

#[test]
fn out_of_bounds_particles_are_culled_in_place_order() {
    let mut sim = make_sim(NormalCoupling::Independent);
    // adjacent doomed particles would be skipped by index-based removal
    sim.particles.push(Particle::new(Vec2::new(-500.0, 10.0), 0.0, 0.0, 5.0, 0));
    sim.particles.push(Particle::new(Vec2::new(-600.0, 10.0), 0.0, 0.0, 5.0, 1));
    sim.particles.push(Particle::new(Vec2::new(2000.0, 2000.0), 0.0, 0.0, 5.0, 2));
    sim.particles.push(Particle::new(Vec2::new(10.0, 4600.0), 0.0, 0.0, 5.0, 3));
    sim.particles.push(Particle::new(Vec2::new(1000.0, 1000.0), 0.0, 0.0, 5.0, 4));
    let mut canvas = RecordingCanvas::default();
    let stats = sim.step(&mut canvas);
    assert_eq!(stats.culled, 3);
    let colors: Vec<usize> = sim.particles.iter().map(|p| p.color).collect();
    assert_eq!(colors, vec![2, 4]);
}

#[test]
fn boundary_touching_circles_survive_on_every_side() {
    let vp = Viewport::new(100.0, 80.0);
    let at = |x: f32, y: f32| Particle::new(Vec2::new(x, y), 0.0, 0.0, 4.0, 0);
    assert!(at(-4.0, 40.0).is_alive(vp));
    assert!(at(104.0, 40.0).is_alive(vp));
    assert!(at(50.0, -4.0).is_alive(vp));
    assert!(at(50.0, 84.0).is_alive(vp));
    assert!(!at(-4.25, 40.0).is_alive(vp));
    assert!(!at(104.25, 40.0).is_alive(vp));
    assert!(!at(50.0, -4.25).is_alive(vp));
    assert!(!at(50.0, 84.25).is_alive(vp));
}

#[test]
fn radius_trigger_is_independent_of_position() {
    let vp = Viewport::new(100.0, 80.0);
    let p = Particle::new(Vec2::new(50.0, 40.0), 0.0, 0.0, -0.0001, 0);
    assert!(!p.is_alive(vp));
    let p = Particle::new(Vec2::new(50.0, 40.0), 0.0, 0.0, 0.0, 0);
    assert!(p.is_alive(vp));
}

#[test]
fn shared_normal_carries_previous_particles_angle() {
    let mut sim = make_sim(NormalCoupling::Shared);
    sim.resize(Viewport::new(400.0, 400.0));
    sim.normal = Vec2::ZERO;
    let vp = sim.viewport();
    let start = Vec2::new(200.0, 200.0);
    let (a, b) = (0.4_f32, 2.3_f32);
    sim.particles.push(Particle::new(start, a, 0.0, 10.0, 0));
    sim.particles.push(Particle::new(start, b, 0.0, 10.0, 0));
    let mut canvas = RecordingCanvas::default();
    sim.step(&mut canvas);

    assert!((sim.particles[0].pos - start).length() < 1e-4);
    let expected_b = start - vp.normal_for(a);
    assert!((sim.particles[1].pos - expected_b).length() < 1e-4);
    assert!((sim.normal - vp.normal_for(b)).length() < 1e-7);
}

#[test]
fn independent_normal_uses_own_angle() {
    let mut sim = make_sim(NormalCoupling::Independent);
    sim.resize(Viewport::new(400.0, 400.0));
    sim.normal = Vec2::ZERO;
    let vp = sim.viewport();
    let start = Vec2::new(200.0, 200.0);
    let (a, b) = (0.4_f32, 2.3_f32);
    sim.particles.push(Particle::new(start, a, 0.0, 10.0, 0));
    sim.particles.push(Particle::new(start, b, 0.0, 10.0, 0));
    let mut canvas = RecordingCanvas::default();
    sim.step(&mut canvas);

    assert!((sim.particles[0].pos - (start - vp.normal_for(a))).length() < 1e-4);
    assert!((sim.particles[1].pos - (start - vp.normal_for(b))).length() < 1e-4);
    assert_eq!(sim.normal, Vec2::ZERO);
}

#[test]
fn resize_recentres_origin_and_shared_normal() {
    let mut sim = make_sim(NormalCoupling::Shared);
    let vp = Viewport::new(1024.0, 768.0);
    sim.resize(vp);
    assert_eq!(sim.viewport(), vp);
    assert_eq!(sim.normal, Vec2::new(512.0, 384.0));
    let layout = vp.surface_layout();
    assert_eq!((layout.backing_width, layout.backing_height), (2048, 1536));
}

#[test]
fn origin_burst_lands_at_centre_with_palette_colours() {
    let mut sim = make_sim(NormalCoupling::Independent);
    sim.spawn_burst_at_origin(8);
    assert_eq!(sim.particles.len(), 8);
    assert!(sim.particles.iter().all(|p| p.pos == Vec2::new(2000.0, 2000.0)));

    let mut canvas = RecordingCanvas::default();
    sim.step(&mut canvas);
    for (_, _, color) in &canvas.circles {
        assert!(DEFAULT_PALETTE.contains(&color.as_str()), "unexpected {color}");
    }
}

#[test]
fn escalated_bursts_are_faster() {
    let mut sim = make_sim(NormalCoupling::Independent);
    sim.escalation.begin();
    sim.escalation.multiplier = 5.0;
    sim.spawn_burst(200, Vec2::new(100.0, 100.0));
    for p in &sim.particles {
        assert!(p.speed == 15.0 || p.speed == 16.0, "speed {}", p.speed);
    }
}
