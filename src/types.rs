use glam::{Mat4, Vec3};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad0: f32,
    pub right: [f32; 3],
    pub _pad1: f32,
    pub up: [f32; 3],
    pub _pad2: f32,
}

impl CameraUniform {
    pub fn new(view: Mat4, proj: Mat4, eye: Vec3) -> Self {
        // World-space camera axes are the rows of the view rotation;
        // the point pass uses them to orient billboards
        let right = Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let up = Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);
        Self {
            view_proj: (proj * view).to_cols_array_2d(),
            eye: eye.to_array(),
            _pad0: 0.0,
            right: right.to_array(),
            _pad1: 0.0,
            up: up.to_array(),
            _pad2: 0.0,
        }
    }
}

/// One particle billboard, fed per-instance to the point pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub fade: f32,
    pub color: [f32; 3],
    pub size: f32,
}

impl PointInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32,
        2 => Float32x3,
        3 => Float32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Vertex of the diorama mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl MeshVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Axis-aligned colored block, the building unit of the diorama
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxData {
    pub min: Vec3,
    pub max: Vec3,
    pub color: Vec3,
}

impl BoxData {
    pub const fn new(min: Vec3, max: Vec3, color: Vec3) -> Self {
        Self { min, max, color }
    }

    /// Expand into 36 flat-shaded triangle vertices
    pub fn to_vertices(&self) -> Vec<MeshVertex> {
        let (n, x) = (self.min, self.max);
        let corners = [
            Vec3::new(n.x, n.y, n.z),
            Vec3::new(x.x, n.y, n.z),
            Vec3::new(x.x, x.y, n.z),
            Vec3::new(n.x, x.y, n.z),
            Vec3::new(n.x, n.y, x.z),
            Vec3::new(x.x, n.y, x.z),
            Vec3::new(x.x, x.y, x.z),
            Vec3::new(n.x, x.y, x.z),
        ];
        // (corner indices, outward normal) per face, CCW from outside
        let faces: [([usize; 4], Vec3); 6] = [
            ([5, 4, 7, 6], Vec3::Z),
            ([0, 1, 2, 3], Vec3::NEG_Z),
            ([1, 5, 6, 2], Vec3::X),
            ([4, 0, 3, 7], Vec3::NEG_X),
            ([3, 2, 6, 7], Vec3::Y),
            ([4, 5, 1, 0], Vec3::NEG_Y),
        ];

        let mut vertices = Vec::with_capacity(36);
        for (quad, normal) in faces {
            for idx in [quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]] {
                vertices.push(MeshVertex {
                    position: corners[idx].to_array(),
                    normal: normal.to_array(),
                    color: self.color.to_array(),
                });
            }
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_expands_to_36_vertices() {
        let b = BoxData::new(Vec3::ZERO, Vec3::ONE, Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(b.to_vertices().len(), 36);
    }

    #[test]
    fn box_vertices_stay_on_bounds() {
        let b = BoxData::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 3.0, 4.0), Vec3::ONE);
        for v in b.to_vertices() {
            let p = Vec3::from_array(v.position);
            assert!(p.cmpge(b.min).all() && p.cmple(b.max).all(), "vertex {:?} outside box", p);
        }
    }
}
