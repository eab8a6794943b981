//! Use case implementations.

mod imagine_use_case;
mod lens_use_case;

pub use imagine_use_case::ImagineUseCase;
pub use lens_use_case::LensUseCase;
