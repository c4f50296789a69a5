pub mod ir_sensor;
pub mod lcd1602;
pub mod oled_text;
pub mod text_frame;
pub mod traits;
