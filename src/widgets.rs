mod canvas;
mod spinner;

pub use canvas::PixelCanvas;
pub use spinner::Spinner;
