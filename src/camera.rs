use glam::{Mat4, Vec3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

pub const DEFAULT_DISTANCE: f32 = 100.0;
pub const MIN_DISTANCE: f32 = 0.1;
/// Keeps pitch away from the poles so look_at never degenerates.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.1;
/// Focus point of the diorama; tuned to frame the scene, not derived.
pub const DEFAULT_CENTER: Vec3 = Vec3::new(-50.0, 60.0, -10.0);

/// Held pan keys, collapsed to a direction vector once per frame
#[derive(Default, Clone, Copy)]
pub struct PanState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl PanState {
    const fn to_axis(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Pan direction in camera-local axes: x = right, y = world up,
    /// z = along the camera forward
    pub const fn direction(&self) -> Vec3 {
        Vec3::new(
            self.to_axis(self.left, self.right),
            self.to_axis(self.up, self.down),
            self.to_axis(self.backward, self.forward),
        )
    }

    pub const fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.forward = is_pressed,
                KeyCode::KeyS => self.backward = is_pressed,
                KeyCode::KeyA => self.left = is_pressed,
                KeyCode::KeyD => self.right = is_pressed,
                KeyCode::KeyR => self.up = is_pressed,
                KeyCode::KeyF => self.down = is_pressed,
                _ => {}
            }
        }
    }
}

/// Orbit-style camera around a movable focus point.
///
/// Orbit (yaw/pitch/distance) and pan (focus translation) are independent;
/// they only share the spherical forward-direction formula.
pub struct TrackballCamera {
    distance: f32,
    yaw: f32,
    pitch: f32,
    center: Vec3,
    up: Vec3,
    move_speed: f32,
    rotate_speed: f32,
}

impl TrackballCamera {
    pub fn new(move_speed: f32, rotate_speed: f32) -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            yaw: 0.0,
            pitch: 0.0,
            center: DEFAULT_CENTER,
            up: Vec3::Y,
            move_speed,
            rotate_speed,
        }
    }

    /// Move the eye towards (positive delta) or away from the focus point
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).max(MIN_DISTANCE);
    }

    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw += delta * self.rotate_speed;
    }

    pub fn rotate_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta * self.rotate_speed).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Translate the focus point in camera-local axes: `direction.z` along
    /// the spherical forward, `direction.x` along the right vector,
    /// `direction.y` along world up. Orbit state is untouched.
    pub fn pan(&mut self, direction: Vec3) {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize();

        self.center += forward * direction.z * self.move_speed;
        self.center += right * direction.x * self.move_speed;
        self.center += self.up * direction.y * self.move_speed;
    }

    /// Restore the default orientation, distance and scene focus point
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = DEFAULT_DISTANCE;
        self.center = DEFAULT_CENTER;
    }

    /// Unit direction from the focus point towards the eye.
    /// yaw = 0, pitch = 0 looks down +Z.
    fn spherical_offset(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Forward direction used for panning; same formula as the orbit offset
    /// so pan and orbit stay consistent under combined input
    pub fn forward(&self) -> Vec3 {
        self.spherical_offset()
    }

    pub fn eye_position(&self) -> Vec3 {
        self.center + self.spherical_offset() * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.center, self.up)
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }
}

impl Default for TrackballCamera {
    fn default() -> Self {
        Self::new(10.0, 2.0)
    }
}
