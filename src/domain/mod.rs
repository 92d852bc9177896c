//! Domain layer: the member entity, its value objects, and the ports the
//! services depend on.

pub mod member;
pub mod ports;
