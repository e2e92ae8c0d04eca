pub mod logging;

pub mod controller;
pub mod model;
pub mod view;
