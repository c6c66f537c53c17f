//! Pure installer logic: no filesystem access, fully testable in isolation.

pub mod hook_state;
pub mod ignore_list;
pub mod inputs;
