pub mod exponential;

mod axes_draw;
