//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every use site is additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a line for every step change (advance, back, jump).
    pub print_step_transitions: bool,
    /// Emit the error map whenever a step fails validation.
    pub print_validation_failures: bool,
    /// Emit the fee quote after each profile / tax mode change.
    pub print_fee_refresh: bool,
    /// Emit submission lifecycle messages (spawned, succeeded, failed).
    pub print_submission: bool,
    /// Dump the transformed payload as JSON before it is handed off.
    pub print_payload: bool,
    /// Emit UI interaction logs (button presses, step bar clicks).
    pub print_ui_interactions: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_step_transitions: true,
    print_validation_failures: false,
    print_fee_refresh: false,
    print_submission: true,
    print_payload: false,
    print_ui_interactions: false,
};
