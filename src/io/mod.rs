// Purpose - decoding control input from the outside world

pub mod converter;
pub mod midi;
