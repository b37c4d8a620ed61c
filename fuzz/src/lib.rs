pub use calendar_strip::fuzzing::{run_fuzz_strip, Data, Operation};
