//! Platform-independent lab logic: catalog, scenes, practice, audio
//! signatures and the session controller. Nothing here touches the DOM.

pub mod catalog;
pub mod clock;
pub mod constants;
pub mod draw;
pub mod error;
pub mod formula;
pub mod input;
pub mod params;
pub mod practice;
pub mod scenes;
pub mod session;
pub mod shapes;
pub mod signature;

pub use catalog::{Category, Principle, PrincipleId};
pub use error::{LabError, LabResult};
pub use session::{LabConfig, Session};
