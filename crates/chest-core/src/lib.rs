pub mod camera;
pub mod chest;
pub mod command;
pub mod constants;
pub mod effects;
pub mod error;
pub mod experience;
pub mod gesture;
pub mod input;
pub mod placement;
pub mod quality;
pub mod reward;
pub mod timeline;

pub use camera::*;
pub use chest::*;
pub use command::*;
pub use constants::*;
pub use effects::*;
pub use error::*;
pub use experience::*;
pub use gesture::*;
pub use input::*;
pub use placement::*;
pub use quality::*;
pub use reward::*;
pub use timeline::*;
