use std::ffi::c_void;

use gl::types::GLenum;
use thiserror::Error;

use crate::program::Program;

pub struct GeometryBuilder<'a> {
    attributes: Vec<(&'static str, VertexAttribute)>,
    data: &'a [f32],
    mode: PrimitiveMode,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self {
            data,
            attributes: Vec::new(),
            mode: PrimitiveMode::Triangles,
        }
    }

    pub fn with_attribute(mut self, name: &'static str, attr: VertexAttribute) -> Self {
        self.attributes.push((name, attr));
        self
    }

    pub fn mode(mut self, mode: PrimitiveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self, program: &Program) -> Result<Geometry, GBError> {
        let vertices = self.vertex_count()?;
        let stride = self.stride();

        let mut locations = Vec::with_capacity(self.attributes.len());

        for (name, attr) in &self.attributes {
            let location = program
                .attribute_location(name)
                .ok_or(GBError::MissingAttribute(name))?;

            locations.push((location, attr.size()));
        }

        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::GenBuffers(1, (&mut vbo) as *mut u32);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                (self.data.len() * std::mem::size_of::<f32>()) as isize,
                self.data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            let mut offset = 0;

            for (location, size) in locations {
                gl::VertexAttribPointer(
                    location,
                    size as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    (stride * std::mem::size_of::<f32>()) as i32,
                    (offset * std::mem::size_of::<f32>()) as *const c_void,
                );
                gl::EnableVertexAttribArray(location);
                offset += size;
            }

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        Ok(Geometry {
            vao,
            vbo,
            vertices,
            mode: self.mode,
        })
    }

    fn stride(&self) -> usize {
        self.attributes.iter().map(|(_, a)| a.size()).sum()
    }

    fn vertex_count(&self) -> Result<usize, GBError> {
        let stride = self.stride();

        if stride == 0 || self.data.len() % stride != 0 {
            return Err(GBError::InvalidDataLength);
        }

        Ok(self.data.len() / stride)
    }
}

#[derive(Debug, Error)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Attribute '{0}' not found in program")]
    MissingAttribute(&'static str),
}

pub enum VertexAttribute {
    Float,
    Vec2,
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Float => 1,
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub enum PrimitiveMode {
    Triangles,
    TriangleStrip,
}

impl PrimitiveMode {
    pub fn raw(&self) -> GLenum {
        match self {
            PrimitiveMode::Triangles => gl::TRIANGLES,
            PrimitiveMode::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}

pub struct Geometry {
    vao: u32,
    vbo: u32,
    vertices: usize,
    mode: PrimitiveMode,
}

impl Geometry {
    pub fn vao(&self) -> u32 {
        self.vao
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, (&self.vbo) as *const u32);
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_stride() {
        let data = [0.0; 12];
        let builder = GeometryBuilder::new(&data)
            .with_attribute("position", VertexAttribute::Vec2)
            .with_attribute("brightness", VertexAttribute::Float);

        assert_eq!(builder.stride(), 3);
        assert_eq!(builder.vertex_count().unwrap(), 4);
    }

    #[test]
    fn partial_vertex_is_rejected() {
        let data = [0.0; 7];
        let builder = GeometryBuilder::new(&data).with_attribute("position", VertexAttribute::Vec2);

        assert!(matches!(
            builder.vertex_count(),
            Err(GBError::InvalidDataLength)
        ));
    }

    #[test]
    fn no_attributes_is_rejected() {
        let data = [0.0; 4];
        let builder = GeometryBuilder::new(&data);

        assert!(builder.vertex_count().is_err());
    }
}
