use reqchain_core::WorkflowResult;

pub const SUCCESS: i32 = 0;
/// Step file or `--step` flag rejected before anything ran.
pub const VALIDATION_FAILED: i32 = 2;
/// The run stopped at a failing step.
pub const RUN_FAILED: i32 = 3;
/// I/O, runtime or client setup failure.
pub const RUNTIME_ERROR: i32 = 4;

pub fn for_run(result: &WorkflowResult) -> i32 {
    if result.is_success() {
        SUCCESS
    } else {
        RUN_FAILED
    }
}
