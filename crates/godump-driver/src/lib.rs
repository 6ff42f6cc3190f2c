//! Textual rendering of decoded dumps, and the driver that wires the
//! stream, the decoder, and the renderer together for one pass.

pub mod driver;
pub mod error;
pub mod render;

pub use driver::DumpDriver;
pub use error::DriverError;
pub use render::TextRenderer;
