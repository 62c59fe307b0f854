mod builder;
mod ctx;
mod resolve;
mod result;
mod roller;

pub use builder::ResultBuilder;
pub use ctx::{DefaultRoller, RollContext};
pub use resolve::{FnResolver, Resolver};
pub use result::{Roll, RollResult};
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::StepRoller;
