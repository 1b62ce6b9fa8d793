// src/rendering_lib/shader.rs

pub const WGSL_SHADER_SOURCE: &str = r#"
struct FrameUniform {
    view_proj: mat4x4<f32>,
    light_dir: vec4<f32>,  // xyz: unit direction toward the light
    ambient: vec4<f32>,    // rgb: ambient intensity
}

struct ObjectUniform {
    model: mat4x4<f32>,
    color: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> frame: FrameUniform;

@group(1) @binding(0)
var<uniform> object: ObjectUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world_position = object.model * vec4<f32>(in.position, 1.0);
    out.clip_position = frame.view_proj * world_position;
    // Model matrices are rigid (rotation * translation), so transforming
    // the normal with w = 0 is exact.
    out.world_normal = (object.model * vec4<f32>(in.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // One-sided diffuse like fixed-function GL: back faces fall back to
    // the ambient term only.
    let n = normalize(in.world_normal);
    let diffuse = max(dot(n, frame.light_dir.xyz), 0.0);
    let lit = object.color.rgb * (frame.ambient.rgb + vec3<f32>(diffuse));
    return vec4<f32>(min(lit, vec3<f32>(1.0)), object.color.a);
}
"#;
