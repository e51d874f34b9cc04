// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über den Status-Channel (Light Control → Diagnose).

pub mod diagnostics;
pub mod light_control;

// Re-export Tasks für einfachen Import
pub use diagnostics::diagnostics_task;
pub use light_control::light_control_task;
