//! Record output
//!
//! - `writer` - tab-separated line writer owning the header state
//! - `renderer` - record sink that stats each path and writes its line

mod renderer;
mod writer;

pub use renderer::TsvRenderer;
pub use writer::RecordWriter;
