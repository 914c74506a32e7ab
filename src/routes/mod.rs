mod assets;
mod contact;
mod health_check;
mod home;

// re-export
pub use assets::*;
pub use contact::*;
pub use health_check::*;
pub use home::*;
