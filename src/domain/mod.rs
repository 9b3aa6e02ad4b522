// Domain layer: wire models, the comparer port, and the view adapter.

pub mod model;
pub mod ports;
pub mod view;
