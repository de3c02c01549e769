// Purpose: the monophonic engine and the control surface that drives it.
// The engine runs in the audio callback; the controller runs wherever control
// events arrive. They share nothing but the atomic cells in `param`.

pub mod engine;
pub mod message;
pub mod modulation;
pub mod param;
