//! Page components for MySoothe.

mod home;

pub use home::HomeScreen;
