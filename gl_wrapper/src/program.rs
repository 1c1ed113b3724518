use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString};
use thiserror::Error;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: CString::new(vert_src).unwrap(),
            frag: CString::new(frag_src).unwrap(),
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let mut success: i32 = 0;

        unsafe {
            let vert = compile_stage(gl::VERTEX_SHADER, &self.vert)?;
            let frag = compile_stage(gl::FRAGMENT_SHADER, &self.frag)?;

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                return Err(PBError::Linking(program_info_log(program)));
            }

            gl::ValidateProgram(program);
            gl::GetProgramiv(program, gl::VALIDATE_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                return Err(PBError::Validation(program_info_log(program)));
            }

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id: program })
        }
    }
}

unsafe fn compile_stage(kind: GLenum, src: &CString) -> Result<GLuint, PBError> {
    let shader = gl::CreateShader(kind);

    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );

    gl::CompileShader(shader);

    let mut success: i32 = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
    if success != 1 {
        let mut buf = [0_u8; 1024];

        gl::GetShaderInfoLog(
            shader,
            1024,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );

        return Err(PBError::Compilation(truncate_log(&buf)));
    }

    Ok(shader)
}

unsafe fn program_info_log(program: GLuint) -> String {
    let mut buf = [0_u8; 1024];

    gl::GetProgramInfoLog(
        program,
        1024,
        std::ptr::null_mut(),
        buf.as_mut_ptr() as *mut c_char,
    );

    truncate_log(&buf)
}

fn truncate_log(buf: &[u8]) -> String {
    let data = match buf.iter().position(|b| *b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    };

    String::from_utf8_lossy(data).to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
    #[error("{0}")]
    Validation(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetAttribLocation(self.id, name.as_ptr()) };

        (location >= 0).then_some(location as u32)
    }

    pub fn uniform_location(&self, name: &str) -> Option<i32> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) };

        (location >= 0).then_some(location)
    }

    /// The program must be in use.
    pub fn set_vec4(&self, location: i32, value: [f32; 4]) {
        unsafe {
            gl::Uniform4f(location, value[0], value[1], value[2], value[3]);
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [0_u8; 8];
        buf[..5].copy_from_slice(b"error");

        assert_eq!(truncate_log(&buf), "error");
    }

    #[test]
    fn info_log_without_nul() {
        assert_eq!(truncate_log(b"full"), "full");
    }
}
