// Domain layer: zodiac catalogue, payload models, the session context and ports.

pub mod model;
pub mod ports;
pub mod session;
pub mod zodiac;
