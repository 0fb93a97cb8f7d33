//! CPU-side WGSL stage checks.
//!
//! naga gives driver-independent diagnostics before any GPU module is
//! created, so a broken stage source is reported as data instead of a
//! device-level error.

/// Shader stage selector for [`check_wgsl`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

/// Outcome of checking one shader stage source.
///
/// `ok` is the compile-status flag; `log` carries the full diagnostic text
/// and is empty on success.
#[derive(Debug, Clone)]
pub struct StageReport {
    pub ok: bool,
    pub log: String,
}

impl StageReport {
    fn pass() -> Self {
        Self {
            ok: true,
            log: String::new(),
        }
    }

    fn fail(log: String) -> Self {
        Self { ok: false, log }
    }
}

/// Parses and validates a WGSL stage source without touching the GPU.
///
/// The check fails when the source does not parse, does not validate, or
/// does not define `entry_point` for `stage`. Failures are reported, not
/// raised: callers decide whether a bad stage is fatal.
pub fn check_wgsl(source: &str, stage: ShaderStage, entry_point: &str) -> StageReport {
    let module = match naga::front::wgsl::parse_str(source) {
        Ok(m) => m,
        Err(e) => return StageReport::fail(format!("WGSL parse error: {e}")),
    };

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    if let Err(e) = validator.validate(&module) {
        return StageReport::fail(format!("Validation error: {e}"));
    }

    let naga_stage = stage.to_naga();
    let has_entry = module
        .entry_points
        .iter()
        .any(|ep| ep.name == entry_point && ep.stage == naga_stage);
    if !has_entry {
        return StageReport::fail(format!(
            "Entry point '{entry_point}' not found for stage {stage:?}"
        ));
    }

    StageReport::pass()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = include_str!("shaders/line_vs.wgsl");
    const FS: &str = include_str!("shaders/line_fs.wgsl");

    // ── accepting sources ─────────────────────────────────────────────────

    #[test]
    fn vertex_stage_passes() {
        let r = check_wgsl(VS, ShaderStage::Vertex, "vs_main");
        assert!(r.ok, "{}", r.log);
        assert!(r.log.is_empty());
    }

    #[test]
    fn fragment_stage_passes() {
        let r = check_wgsl(FS, ShaderStage::Fragment, "fs_main");
        assert!(r.ok, "{}", r.log);
        assert!(r.log.is_empty());
    }

    // ── rejecting sources ─────────────────────────────────────────────────

    #[test]
    fn parse_error_is_reported() {
        let r = check_wgsl("fn broken(", ShaderStage::Vertex, "vs_main");
        assert!(!r.ok);
        assert!(!r.log.is_empty());
    }

    #[test]
    fn type_error_is_reported() {
        let src = "@fragment fn fs_main() -> @location(0) vec4<f32> { return 1; }";
        let r = check_wgsl(src, ShaderStage::Fragment, "fs_main");
        assert!(!r.ok);
        assert!(!r.log.is_empty());
    }

    #[test]
    fn missing_entry_point_is_reported() {
        let r = check_wgsl(FS, ShaderStage::Vertex, "vs_main");
        assert!(!r.ok);
        assert!(r.log.contains("vs_main"));
    }
}
