// Library crate: the configurator core behind the binary and the integration tests.
// Rendering, camera and asset loading belong to the embedding UI shell.

pub mod command;
pub mod export;
pub mod fixtures;
pub mod i18n;
pub mod placement;
pub mod session;
pub mod state;
pub mod validation;
pub mod view;
