pub mod core {
    pub mod app;
    pub mod config;
}

pub mod utils {
    pub mod cli;
    pub mod error;
}

pub mod image {
    pub mod background;
    pub mod geometry;
    pub mod loader;
    pub mod primitives;
    pub mod transform;
    pub mod writer;
}

pub use self::core::{app::Generator, config::Config};
pub use utils::error::{ImageSourceError, ImageSourceResult};
