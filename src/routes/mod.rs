pub mod classes;

pub mod eleves;

pub mod professeurs;

pub use classes::configure_classes_routes;
pub use eleves::configure_eleves_routes;
pub use professeurs::configure_professeurs_routes;
