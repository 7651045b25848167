pub mod closeness;
