//! WGSL sources.
//!
//! Geometry arrives already in normalized device coordinates, so the
//! vertex stage only applies the per-draw world transform; the fragment
//! stage paints everything white on the black clear.

pub const PONG_SHADER: &str = r#"
struct InstanceInput {
    @location(1) mat0: vec4<f32>,
    @location(2) mat1: vec4<f32>,
    @location(3) mat2: vec4<f32>,
    @location(4) mat3: vec4<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    instance: InstanceInput,
) -> @builtin(position) vec4<f32> {
    let transform = mat4x4<f32>(instance.mat0, instance.mat1, instance.mat2, instance.mat3);
    return transform * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 1.0);
}
"#;
