use bytemuck::NoUninit;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Clone, Copy, NoUninit)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

impl Mesh {
    /// The "U" figure: two vertical columns joined by a base, each an axis
    /// aligned box of 8 corners and 12 triangles.
    pub fn u_shape() -> Self {
        let vertices = vec![
            // Left column
            Vertex { pos: [-0.5, -0.5, -0.2], color: GREEN },
            Vertex { pos: [-0.3, -0.5, -0.2], color: GREEN },
            Vertex { pos: [-0.3, 0.5, -0.2], color: GREEN },
            Vertex { pos: [-0.5, 0.5, -0.2], color: GREEN },
            Vertex { pos: [-0.5, -0.5, 0.2], color: GREEN },
            Vertex { pos: [-0.3, -0.5, 0.2], color: GREEN },
            Vertex { pos: [-0.3, 0.5, 0.2], color: GREEN },
            Vertex { pos: [-0.5, 0.5, 0.2], color: GREEN },
            // Right column
            Vertex { pos: [0.3, -0.5, -0.2], color: GREEN },
            Vertex { pos: [0.5, -0.5, -0.2], color: GREEN },
            Vertex { pos: [0.5, 0.5, -0.2], color: GREEN },
            Vertex { pos: [0.3, 0.5, -0.2], color: GREEN },
            Vertex { pos: [0.3, -0.5, 0.2], color: GREEN },
            Vertex { pos: [0.5, -0.5, 0.2], color: GREEN },
            Vertex { pos: [0.5, 0.5, 0.2], color: GREEN },
            Vertex { pos: [0.3, 0.5, 0.2], color: GREEN },
            // Base
            Vertex { pos: [-0.5, -0.5, -0.2], color: GREEN },
            Vertex { pos: [0.5, -0.5, -0.2], color: GREEN },
            Vertex { pos: [0.5, -0.3, -0.2], color: GREEN },
            Vertex { pos: [-0.5, -0.3, -0.2], color: GREEN },
            Vertex { pos: [-0.5, -0.5, 0.2], color: GREEN },
            Vertex { pos: [0.5, -0.5, 0.2], color: GREEN },
            Vertex { pos: [0.5, -0.3, 0.2], color: GREEN },
            Vertex { pos: [-0.5, -0.3, 0.2], color: GREEN },
        ];

        let indices = vec![
            // Left column faces
            0, 1, 2, 2, 3, 0,
            4, 5, 6, 6, 7, 4,
            0, 1, 5, 5, 4, 0,
            2, 3, 7, 7, 6, 2,
            0, 3, 7, 7, 4, 0,
            1, 2, 6, 6, 5, 1,
            // Right column faces
            8, 9, 10, 10, 11, 8,
            12, 13, 14, 14, 15, 12,
            8, 9, 13, 13, 12, 8,
            10, 11, 15, 15, 14, 10,
            8, 11, 15, 15, 12, 8,
            9, 10, 14, 14, 13, 9,
            // Base faces
            16, 17, 18, 18, 19, 16,
            20, 21, 22, 22, 23, 20,
            16, 17, 21, 21, 20, 16,
            18, 19, 23, 23, 22, 18,
            16, 19, 23, 23, 20, 16,
            17, 18, 22, 22, 21, 17,
        ];

        Self { vertices, indices }
    }

    pub fn upload(&self, device: &wgpu::Device) -> MeshBuffer {
        let vertices = bytemuck::cast_slice(&self.vertices);
        let indices = bytemuck::cast_slice(&self.indices);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: vertices,
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: indices,
            usage: wgpu::BufferUsages::INDEX,
        });

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            index_count: self.indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u_shape_counts() {
        let mesh = Mesh::u_shape();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 108);
    }

    #[test]
    fn indices_reference_existing_vertices() {
        let mesh = Mesh::u_shape();
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(std::mem::offset_of!(Vertex, pos), 0);
        assert_eq!(std::mem::offset_of!(Vertex, color), 12);
    }
}
