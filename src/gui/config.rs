use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [1280., 720.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [320., 180.];

    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const STATUS_MARGIN: f32 = 6.;
    pub const STATUS_GAP: f32 = 20.;

    // dark seams between cells, drawn once cells are big enough
    pub const CELL_GAP_WIDTH: f32 = 1.;
    pub const CELL_GAP_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);
    pub const MIN_CELL_SIZE_FOR_GAPS: f32 = 6.;

    pub const TEXTURE_NAME: &'static str = "life field";
}
