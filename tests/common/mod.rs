pub mod synthetic_walls;
