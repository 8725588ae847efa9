pub mod bar;
pub mod input_buffer;
